//! Bottom-up DP table lessons
//!
//! One table cell is filled per step, so the table grows visibly left to
//! right (and top to bottom for the 2-D lesson). Each lesson keeps the table
//! in its state and narrates the recurrence applied to the latest cell.
//!
//! Lessons: climbing stairs, coin change, counting bits, unique paths,
//! decode ways.

use crate::runner::SteppedAlgorithm;
use crate::scene::{Cell, Role, Row, Scene};
use crate::snapshot::Snapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Filling,
    Finished,
}

fn phase_label(phase: Phase) -> &'static str {
    match phase {
        Phase::Filling => "FILL",
        Phase::Finished => "FINISHED",
    }
}

/// Climbing Stairs: ways to reach step n taking 1 or 2 steps at a time
pub struct ClimbingStairs {
    n: usize,
    table: Vec<u64>,
    i: usize,
    phase: Phase,
    narration: String,
}

impl ClimbingStairs {
    pub fn new(n: usize) -> Self {
        ClimbingStairs {
            n,
            table: vec![0; n + 1],
            i: 0,
            phase: Phase::Filling,
            narration: format!("Count the ways to climb {} steps, one cell at a time", n),
        }
    }

    /// Ways to reach the top (meaningful once terminal)
    pub fn ways(&self) -> u64 {
        self.table[self.n]
    }
}

impl SteppedAlgorithm for ClimbingStairs {
    fn step(&mut self) {
        if self.phase == Phase::Finished {
            return;
        }
        let i = self.i;
        if i <= 1 {
            self.table[i] = 1;
            self.narration = format!("Base case: ways[{}] = 1", i);
        } else {
            self.table[i] = self.table[i - 1] + self.table[i - 2];
            self.narration = format!(
                "ways[{}] = ways[{}] + ways[{}] = {}",
                i,
                i - 1,
                i - 2,
                self.table[i]
            );
        }
        if self.i == self.n {
            self.phase = Phase::Finished;
            self.narration = format!("Table full: {} ways to climb {} steps", self.ways(), self.n);
        } else {
            self.i += 1;
        }
    }

    fn is_terminal(&self) -> bool {
        self.phase == Phase::Finished
    }

    fn snapshot(&self) -> Snapshot {
        let mut scene = Scene::new();
        let cells = self
            .table
            .iter()
            .enumerate()
            .map(|(idx, v)| {
                let filled = idx < self.i || self.phase == Phase::Finished;
                let role = if idx == self.i && self.phase == Phase::Filling {
                    Role::Cursor
                } else if filled {
                    Role::Visited
                } else {
                    Role::Dim
                };
                Cell::new(if filled || idx == self.i { v.to_string() } else { "·".to_string() }, role)
            })
            .collect();
        scene.row(Row::new("ways", cells));
        scene.var("n", self.n).var("cell", self.i);
        Snapshot::new(scene, self.narration.clone(), phase_label(self.phase))
    }
}

/// Coin Change: fewest coins summing to the amount, -1 if unreachable
pub struct CoinChange {
    coins: Vec<i64>,
    amount: usize,
    table: Vec<Option<u32>>,
    i: usize,
    phase: Phase,
    narration: String,
}

impl CoinChange {
    pub fn new(coins: Vec<i64>, amount: i64) -> Self {
        let coins: Vec<i64> = coins.into_iter().filter(|c| *c > 0).collect();
        let amount = amount.max(0) as usize;
        let mut table = vec![None; amount + 1];
        table[0] = Some(0);
        let phase = if amount == 0 || coins.is_empty() {
            Phase::Finished
        } else {
            Phase::Filling
        };
        CoinChange {
            narration: match phase {
                Phase::Finished if amount == 0 => "Amount 0 needs 0 coins".to_string(),
                Phase::Finished => "No usable coins; every positive amount is unreachable".to_string(),
                _ => format!("Fill fewest-coins table up to amount {}", amount),
            },
            coins,
            amount,
            table,
            i: 1,
            phase,
        }
    }

    /// Fewest coins for the full amount, -1 if unreachable (meaningful once terminal)
    pub fn result(&self) -> i64 {
        self.table[self.amount].map_or(-1, i64::from)
    }
}

impl SteppedAlgorithm for CoinChange {
    fn step(&mut self) {
        if self.phase == Phase::Finished {
            return;
        }
        let i = self.i;
        let mut best: Option<(u32, i64)> = None; // (coins, via coin)
        for &c in &self.coins {
            let c = c as usize;
            if c <= i {
                if let Some(prev) = self.table[i - c] {
                    let candidate = prev + 1;
                    if best.map_or(true, |(b, _)| candidate < b) {
                        best = Some((candidate, c as i64));
                    }
                }
            }
        }
        match best {
            Some((count, coin)) => {
                self.table[i] = Some(count);
                self.narration = format!(
                    "dp[{}] = dp[{}] + 1 = {} using coin {}",
                    i,
                    i - coin as usize,
                    count,
                    coin
                );
            }
            None => {
                self.narration = format!("No coin reaches amount {}; dp[{}] stays unreachable", i, i);
            }
        }
        if self.i == self.amount {
            self.phase = Phase::Finished;
            self.narration = match self.table[self.amount] {
                Some(count) => format!("Amount {} needs {} coins", self.amount, count),
                None => format!("Amount {} is unreachable with these coins (-1)", self.amount),
            };
        } else {
            self.i += 1;
        }
    }

    fn is_terminal(&self) -> bool {
        self.phase == Phase::Finished
    }

    fn snapshot(&self) -> Snapshot {
        let mut scene = Scene::new();
        scene.row(Row::from_values("coins", &self.coins));
        let cells = self
            .table
            .iter()
            .enumerate()
            .map(|(idx, v)| {
                let filled = idx < self.i || self.phase == Phase::Finished;
                let text = match v {
                    Some(n) if filled || idx == self.i => n.to_string(),
                    None if filled => "∞".to_string(),
                    _ => "·".to_string(),
                };
                let role = if idx == self.i && self.phase == Phase::Filling {
                    Role::Cursor
                } else if filled && v.is_none() {
                    Role::Rejected
                } else if filled {
                    Role::Visited
                } else {
                    Role::Dim
                };
                Cell::new(text, role)
            })
            .collect();
        scene.row(Row::new("dp", cells));
        scene.var("amount", self.amount).var("cell", self.i);
        Snapshot::new(scene, self.narration.clone(), phase_label(self.phase))
    }
}

/// Counting Bits: popcount of every value 0..=n via `bits[i >> 1] + (i & 1)`
pub struct CountingBits {
    n: usize,
    table: Vec<u32>,
    i: usize,
    phase: Phase,
    narration: String,
}

impl CountingBits {
    pub fn new(n: usize) -> Self {
        CountingBits {
            n,
            table: vec![0; n + 1],
            i: 0,
            phase: Phase::Filling,
            narration: format!("Count set bits for 0..={} from already-solved halves", n),
        }
    }

    pub fn table(&self) -> &[u32] {
        &self.table
    }
}

impl SteppedAlgorithm for CountingBits {
    fn step(&mut self) {
        if self.phase == Phase::Finished {
            return;
        }
        let i = self.i;
        if i == 0 {
            self.narration = "Base case: 0 has no set bits".to_string();
        } else {
            self.table[i] = self.table[i >> 1] + (i as u32 & 1);
            self.narration = format!(
                "bits[{}] = bits[{}] + {} = {}  ({:#b})",
                i,
                i >> 1,
                i & 1,
                self.table[i],
                i
            );
        }
        if self.i == self.n {
            self.phase = Phase::Finished;
            self.narration = format!("Table full for 0..={}", self.n);
        } else {
            self.i += 1;
        }
    }

    fn is_terminal(&self) -> bool {
        self.phase == Phase::Finished
    }

    fn snapshot(&self) -> Snapshot {
        let mut scene = Scene::new();
        let indices: Vec<usize> = (0..=self.n).collect();
        scene.row(Row::from_values("i", &indices));
        let cells = self
            .table
            .iter()
            .enumerate()
            .map(|(idx, v)| {
                let filled = idx < self.i || self.phase == Phase::Finished;
                let role = if idx == self.i && self.phase == Phase::Filling {
                    Role::Cursor
                } else if filled {
                    Role::Visited
                } else {
                    Role::Dim
                };
                Cell::new(if filled || idx == self.i { v.to_string() } else { "·".to_string() }, role)
            })
            .collect();
        scene.row(Row::new("bits", cells));
        scene.var("cell", self.i);
        Snapshot::new(scene, self.narration.clone(), phase_label(self.phase))
    }
}

/// Unique Paths: routes through an `rows x cols` grid moving only right/down
pub struct UniquePaths {
    rows: usize,
    cols: usize,
    table: Vec<Vec<u64>>,
    r: usize,
    c: usize,
    phase: Phase,
    narration: String,
}

impl UniquePaths {
    pub fn new(rows: usize, cols: usize) -> Self {
        if rows == 0 || cols == 0 {
            return UniquePaths {
                rows,
                cols,
                table: Vec::new(),
                r: 0,
                c: 0,
                phase: Phase::Finished,
                narration: "Degenerate grid has no paths".to_string(),
            };
        }
        UniquePaths {
            rows,
            cols,
            table: vec![vec![0; cols]; rows],
            r: 0,
            c: 0,
            phase: Phase::Filling,
            narration: format!("Fill a {}x{} grid of path counts row by row", rows, cols),
        }
    }

    /// Paths to the bottom-right corner (meaningful once terminal)
    pub fn paths(&self) -> u64 {
        self.table
            .last()
            .and_then(|row| row.last())
            .copied()
            .unwrap_or(0)
    }
}

impl SteppedAlgorithm for UniquePaths {
    fn step(&mut self) {
        if self.phase == Phase::Finished {
            return;
        }
        let (r, c) = (self.r, self.c);
        if r == 0 || c == 0 {
            self.table[r][c] = 1;
            self.narration = format!("Edge cell ({}, {}) has exactly one route", r, c);
        } else {
            self.table[r][c] = self.table[r - 1][c] + self.table[r][c - 1];
            self.narration = format!(
                "paths({}, {}) = above {} + left {} = {}",
                r,
                c,
                self.table[r - 1][c],
                self.table[r][c - 1],
                self.table[r][c]
            );
        }
        if r + 1 == self.rows && c + 1 == self.cols {
            self.phase = Phase::Finished;
            self.narration = format!(
                "Grid full: {} unique paths to the bottom-right corner",
                self.paths()
            );
        } else if c + 1 == self.cols {
            self.r += 1;
            self.c = 0;
        } else {
            self.c += 1;
        }
    }

    fn is_terminal(&self) -> bool {
        self.phase == Phase::Finished
    }

    fn snapshot(&self) -> Snapshot {
        let mut scene = Scene::new();
        let done = self.phase == Phase::Finished;
        for (r, row) in self.table.iter().enumerate() {
            let cells = row
                .iter()
                .enumerate()
                .map(|(c, v)| {
                    let filled =
                        done || r < self.r || (r == self.r && c <= self.c);
                    let role = if !done && r == self.r && c == self.c {
                        Role::Cursor
                    } else if filled {
                        Role::Visited
                    } else {
                        Role::Dim
                    };
                    Cell::new(if filled { v.to_string() } else { "·".to_string() }, role)
                })
                .collect();
            scene.row(Row::new(format!("row {}", r), cells));
        }
        scene.var("cell", format!("({}, {})", self.r, self.c));
        Snapshot::new(scene, self.narration.clone(), phase_label(self.phase))
    }
}

/// Decode Ways: count decodings of a digit string into letters 1..=26
pub struct DecodeWays {
    digits: Vec<u8>,
    table: Vec<u64>,
    i: usize,
    phase: Phase,
    narration: String,
}

impl DecodeWays {
    pub fn new(digit_text: &str) -> Self {
        let digits: Vec<u8> = digit_text
            .chars()
            .filter_map(|c| c.to_digit(10).map(|d| d as u8))
            .collect();
        if digits.is_empty() {
            return DecodeWays {
                digits,
                table: vec![1],
                i: 0,
                phase: Phase::Finished,
                narration: "Empty string has one (empty) decoding".to_string(),
            };
        }
        let n = digits.len();
        let mut table = vec![0; n + 1];
        table[0] = 1;
        DecodeWays {
            digits,
            table,
            i: 1,
            phase: Phase::Filling,
            narration: format!("Count decodings of a {}-digit string", n),
        }
    }

    /// Number of decodings (meaningful once terminal)
    pub fn ways(&self) -> u64 {
        self.table[self.digits.len()]
    }
}

impl SteppedAlgorithm for DecodeWays {
    fn step(&mut self) {
        if self.phase == Phase::Finished {
            return;
        }
        let i = self.i;
        let mut ways = 0;
        let mut parts = Vec::new();
        if self.digits[i - 1] != 0 {
            ways += self.table[i - 1];
            parts.push(format!("single '{}'", self.digits[i - 1]));
        }
        if i >= 2 {
            let two = self.digits[i - 2] as u32 * 10 + self.digits[i - 1] as u32;
            if (10..=26).contains(&two) {
                ways += self.table[i - 2];
                parts.push(format!("pair '{}'", two));
            }
        }
        self.table[i] = ways;
        self.narration = if parts.is_empty() {
            format!("Digit {} cannot end any letter; dp[{}] = 0", i, i)
        } else {
            format!("dp[{}] = {} via {}", i, ways, parts.join(" + "))
        };
        if self.i == self.digits.len() {
            self.phase = Phase::Finished;
            self.narration = format!("String decodes {} way(s)", self.ways());
        } else {
            self.i += 1;
        }
    }

    fn is_terminal(&self) -> bool {
        self.phase == Phase::Finished
    }

    fn snapshot(&self) -> Snapshot {
        let mut scene = Scene::new();
        scene.row(Row::from_values("digits", &self.digits));
        let cells = self
            .table
            .iter()
            .enumerate()
            .map(|(idx, v)| {
                let filled = idx < self.i || self.phase == Phase::Finished;
                let role = if idx == self.i && self.phase == Phase::Filling {
                    Role::Cursor
                } else if filled {
                    Role::Visited
                } else {
                    Role::Dim
                };
                Cell::new(if filled || idx == self.i { v.to_string() } else { "·".to_string() }, role)
            })
            .collect();
        scene.row(Row::new("dp", cells));
        scene.var("cell", self.i);
        Snapshot::new(scene, self.narration.clone(), phase_label(self.phase))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(alg: &mut dyn SteppedAlgorithm) {
        while !alg.is_terminal() {
            alg.step();
        }
    }

    #[test]
    fn climbing_stairs_five() {
        let mut alg = ClimbingStairs::new(5);
        run(&mut alg);
        assert_eq!(alg.ways(), 8);
    }

    #[test]
    fn coin_change_reaches_eleven_with_three_coins() {
        let mut alg = CoinChange::new(vec![1, 2, 5], 11);
        run(&mut alg);
        assert_eq!(alg.result(), 3);
    }

    #[test]
    fn coin_change_unreachable_amount() {
        let mut alg = CoinChange::new(vec![2], 3);
        run(&mut alg);
        assert_eq!(alg.result(), -1);
    }

    #[test]
    fn counting_bits_matches_popcount() {
        let mut alg = CountingBits::new(8);
        run(&mut alg);
        assert_eq!(alg.table(), &[0, 1, 1, 2, 1, 2, 2, 3, 1]);
    }

    #[test]
    fn unique_paths_three_by_seven() {
        let mut alg = UniquePaths::new(3, 7);
        run(&mut alg);
        assert_eq!(alg.paths(), 28);
    }

    #[test]
    fn decode_ways_classic() {
        let mut alg = DecodeWays::new("226");
        run(&mut alg);
        assert_eq!(alg.ways(), 3);
    }

    #[test]
    fn decode_ways_leading_zero() {
        let mut alg = DecodeWays::new("06");
        run(&mut alg);
        assert_eq!(alg.ways(), 0);
    }
}
