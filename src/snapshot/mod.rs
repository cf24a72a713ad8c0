// Snapshot management for step history navigation

use crate::scene::Scene;

/// Snapshot of a lesson's state after one step
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    /// Visual state at this step
    pub scene: Scene,
    /// Human-readable description of the transition just taken
    pub narration: String,
    /// Label of the phase tag the algorithm is in after this step
    pub phase: &'static str,
}

impl Snapshot {
    pub fn new(scene: Scene, narration: impl Into<String>, phase: &'static str) -> Self {
        Snapshot {
            scene,
            narration: narration.into(),
            phase,
        }
    }

    /// Estimate the memory usage of this snapshot in bytes
    pub fn estimated_size(&self) -> usize {
        self.scene.estimated_size() + self.narration.len() + self.phase.len()
    }
}

/// Manages recorded step history for backward/forward navigation
#[derive(Debug)]
pub struct SnapshotManager {
    snapshots: Vec<Snapshot>,
    max_memory: usize,
    current_memory: usize,
}

impl SnapshotManager {
    pub fn new(max_memory: usize) -> Self {
        SnapshotManager {
            snapshots: Vec::new(),
            max_memory,
            current_memory: 0,
        }
    }

    /// Add a snapshot to history
    pub fn push(&mut self, snapshot: Snapshot) -> Result<(), String> {
        let snapshot_size = snapshot.estimated_size();

        if self.current_memory + snapshot_size > self.max_memory {
            return Err(format!(
                "Snapshot memory limit exceeded: {} + {} > {}",
                self.current_memory, snapshot_size, self.max_memory
            ));
        }

        self.current_memory += snapshot_size;
        self.snapshots.push(snapshot);
        Ok(())
    }

    /// Get a snapshot by index
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    /// Get the number of snapshots
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Get current memory usage
    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    /// Get max memory limit
    pub fn memory_limit(&self) -> usize {
        self.max_memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::{Row, Scene};

    fn snapshot(n: usize) -> Snapshot {
        let mut scene = Scene::new();
        scene.row(Row::from_values("nums", &vec![7i64; n]));
        Snapshot::new(scene, format!("step {}", n), "test")
    }

    #[test]
    fn push_respects_memory_limit() {
        let mut manager = SnapshotManager::new(64);
        // Keep pushing until the cap trips; it must trip well before 1000 pushes.
        let mut tripped = false;
        for _ in 0..1000 {
            if manager.push(snapshot(4)).is_err() {
                tripped = true;
                break;
            }
        }
        assert!(tripped, "memory cap never tripped");
        assert!(manager.memory_usage() <= manager.memory_limit());
    }

    #[test]
    fn get_returns_in_order() {
        let mut manager = SnapshotManager::new(1024 * 1024);
        for i in 0..3 {
            manager.push(snapshot(i)).unwrap();
        }
        assert_eq!(manager.len(), 3);
        assert_eq!(manager.get(1).unwrap().narration, "step 1");
        assert!(manager.get(3).is_none());
    }
}
