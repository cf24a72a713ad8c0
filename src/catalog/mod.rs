//! Lesson catalogue: ids, metadata, default inputs, and runner builders
//!
//! Every lesson the binary can show is registered here with the input format
//! its builder expects. Multi-part inputs separate parts with `|` (see
//! [`crate::input`]); the default input of each lesson doubles as format
//! documentation.

use crate::algorithms::backtracking::CombinationSum;
use crate::algorithms::binary_search::{BinarySearch, RotatedMin};
use crate::algorithms::dp_table::{
    ClimbingStairs, CoinChange, CountingBits, DecodeWays, UniquePaths,
};
use crate::algorithms::graph::{CloneGraph, CourseSchedule, IslandCount};
use crate::algorithms::heaps::TwoHeapMedian;
use crate::algorithms::intervals::{EraseOverlap, InsertInterval, MergeIntervals};
use crate::algorithms::linked_list::{FloydCycle, ListArena};
use crate::algorithms::sliding_window::CharReplacement;
use crate::algorithms::tree::{BstLca, InvertTree, TreeArena, ValidateBst};
use crate::algorithms::trie::{TrieLesson, TrieOp};
use crate::algorithms::two_pointer::{ContainerWater, TrappingRain};
use crate::input;
use crate::runner::{errors::RunnerError, Runner, SteppedAlgorithm, DEFAULT_MEMORY_LIMIT};

/// Lesson category, for `--list` grouping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    TwoPointers,
    SlidingWindow,
    BinarySearch,
    DynamicProgramming,
    Backtracking,
    Graphs,
    Heaps,
    Tries,
    Trees,
    LinkedLists,
    Intervals,
}

impl Category {
    pub fn name(self) -> &'static str {
        match self {
            Category::TwoPointers => "Two Pointers",
            Category::SlidingWindow => "Sliding Window",
            Category::BinarySearch => "Binary Search",
            Category::DynamicProgramming => "Dynamic Programming",
            Category::Backtracking => "Backtracking",
            Category::Graphs => "Graphs",
            Category::Heaps => "Heaps",
            Category::Tries => "Tries",
            Category::Trees => "Trees",
            Category::LinkedLists => "Linked Lists",
            Category::Intervals => "Intervals",
        }
    }
}

/// One catalogue entry
pub struct Lesson {
    pub id: &'static str,
    pub title: &'static str,
    pub category: Category,
    pub complexity: &'static str,
    pub default_input: &'static str,
    build: fn(&str) -> Box<dyn SteppedAlgorithm>,
}

impl Lesson {
    /// Build a lesson instance from an input string
    pub fn build(&self, raw_input: &str) -> Box<dyn SteppedAlgorithm> {
        (self.build)(raw_input)
    }

    /// Build a [`Runner`] over this lesson with the default memory cap
    pub fn build_runner(&self, raw_input: &str) -> Result<Runner, RunnerError> {
        Runner::new(self.build(raw_input), DEFAULT_MEMORY_LIMIT)
    }
}

fn build_container(raw: &str) -> Box<dyn SteppedAlgorithm> {
    Box::new(ContainerWater::new(input::int_list(raw)))
}

fn build_trapping(raw: &str) -> Box<dyn SteppedAlgorithm> {
    Box::new(TrappingRain::new(input::int_list(raw)))
}

fn build_char_replacement(raw: &str) -> Box<dyn SteppedAlgorithm> {
    let parts = input::parts(raw);
    let text = parts.first().copied().unwrap_or("");
    let k = parts.get(1).map_or(0, |p| input::int(p).max(0)) as usize;
    Box::new(CharReplacement::new(text, k))
}

fn build_binary_search(raw: &str) -> Box<dyn SteppedAlgorithm> {
    let parts = input::parts(raw);
    let nums = input::int_list(parts.first().copied().unwrap_or(""));
    let target = parts.get(1).map_or(0, |p| input::int(p));
    Box::new(BinarySearch::new(nums, target))
}

fn build_rotated_min(raw: &str) -> Box<dyn SteppedAlgorithm> {
    Box::new(RotatedMin::new(input::int_list(raw)))
}

fn build_climbing_stairs(raw: &str) -> Box<dyn SteppedAlgorithm> {
    Box::new(ClimbingStairs::new(input::int(raw).clamp(0, 60) as usize))
}

fn build_coin_change(raw: &str) -> Box<dyn SteppedAlgorithm> {
    let parts = input::parts(raw);
    let coins = input::int_list(parts.first().copied().unwrap_or(""));
    let amount = parts.get(1).map_or(0, |p| input::int(p));
    Box::new(CoinChange::new(coins, amount))
}

fn build_counting_bits(raw: &str) -> Box<dyn SteppedAlgorithm> {
    Box::new(CountingBits::new(input::int(raw).clamp(0, 64) as usize))
}

fn build_unique_paths(raw: &str) -> Box<dyn SteppedAlgorithm> {
    let parts = input::parts(raw);
    let rows = parts.first().map_or(0, |p| input::int(p).clamp(0, 12)) as usize;
    let cols = parts.get(1).map_or(0, |p| input::int(p).clamp(0, 12)) as usize;
    Box::new(UniquePaths::new(rows, cols))
}

fn build_decode_ways(raw: &str) -> Box<dyn SteppedAlgorithm> {
    Box::new(DecodeWays::new(raw))
}

fn build_combination_sum(raw: &str) -> Box<dyn SteppedAlgorithm> {
    let parts = input::parts(raw);
    let candidates = input::int_list(parts.first().copied().unwrap_or(""));
    let target = parts.get(1).map_or(0, |p| input::int(p));
    Box::new(CombinationSum::new(candidates, target))
}

fn build_course_schedule(raw: &str) -> Box<dyn SteppedAlgorithm> {
    let parts = input::parts(raw);
    let num_courses = parts.first().map_or(0, |p| input::int(p).max(0)) as usize;
    let prerequisites: Vec<(usize, usize)> = parts
        .get(1)
        .map(|p| input::pair_list(p))
        .unwrap_or_default()
        .into_iter()
        .filter(|&(a, b)| a >= 0 && b >= 0)
        .map(|(a, b)| (a as usize, b as usize))
        .collect();
    Box::new(CourseSchedule::new(num_courses, &prerequisites))
}

fn build_islands(raw: &str) -> Box<dyn SteppedAlgorithm> {
    Box::new(IslandCount::new(input::grid(raw)))
}

fn build_clone_graph(raw: &str) -> Box<dyn SteppedAlgorithm> {
    let edges: Vec<(usize, usize)> = input::pair_list(raw)
        .into_iter()
        .filter(|&(a, b)| a >= 0 && b >= 0)
        .map(|(a, b)| (a as usize, b as usize))
        .collect();
    Box::new(CloneGraph::from_edges(&edges))
}

fn build_two_heap_median(raw: &str) -> Box<dyn SteppedAlgorithm> {
    Box::new(TwoHeapMedian::new(input::int_list(raw)))
}

fn build_trie(raw: &str) -> Box<dyn SteppedAlgorithm> {
    Box::new(TrieLesson::new(TrieOp::parse_script(raw)))
}

fn build_invert_tree(raw: &str) -> Box<dyn SteppedAlgorithm> {
    Box::new(InvertTree::new(TreeArena::from_level_order(
        &input::level_order(raw),
    )))
}

fn build_validate_bst(raw: &str) -> Box<dyn SteppedAlgorithm> {
    Box::new(ValidateBst::new(TreeArena::from_level_order(
        &input::level_order(raw),
    )))
}

fn build_bst_lca(raw: &str) -> Box<dyn SteppedAlgorithm> {
    let parts = input::parts(raw);
    let arena = TreeArena::from_level_order(&input::level_order(parts.first().copied().unwrap_or("")));
    let targets = input::int_list(parts.get(1).copied().unwrap_or(""));
    let p = targets.first().copied().unwrap_or(0);
    let q = targets.get(1).copied().unwrap_or(0);
    Box::new(BstLca::new(arena, p, q))
}

fn build_floyd_cycle(raw: &str) -> Box<dyn SteppedAlgorithm> {
    let parts = input::parts(raw);
    let values = input::int_list(parts.first().copied().unwrap_or(""));
    let cycle_to = parts
        .get(1)
        .map(|p| input::int(p))
        .filter(|pos| *pos >= 0)
        .map(|pos| pos as usize);
    Box::new(FloydCycle::new(ListArena::with_cycle(values, cycle_to)))
}

fn build_merge_intervals(raw: &str) -> Box<dyn SteppedAlgorithm> {
    Box::new(MergeIntervals::new(input::pair_list(raw)))
}

fn build_insert_interval(raw: &str) -> Box<dyn SteppedAlgorithm> {
    let parts = input::parts(raw);
    let intervals = input::pair_list(parts.first().copied().unwrap_or(""));
    let new_interval = input::pair_list(parts.get(1).copied().unwrap_or(""))
        .first()
        .copied()
        .unwrap_or((0, 0));
    Box::new(InsertInterval::new(intervals, new_interval))
}

fn build_erase_overlap(raw: &str) -> Box<dyn SteppedAlgorithm> {
    Box::new(EraseOverlap::new(input::pair_list(raw)))
}

/// Every lesson in the catalogue, in display order
pub const LESSONS: &[Lesson] = &[
    Lesson {
        id: "container-water",
        title: "Container With Most Water",
        category: Category::TwoPointers,
        complexity: "O(n) time, O(1) space",
        default_input: "1,8,6,2,5,4,8,3,7",
        build: build_container,
    },
    Lesson {
        id: "trapping-rain",
        title: "Trapping Rain Water",
        category: Category::TwoPointers,
        complexity: "O(n) time, O(1) space",
        default_input: "0,1,0,2,1,0,1,3,2,1,2,1",
        build: build_trapping,
    },
    Lesson {
        id: "char-replacement",
        title: "Longest Repeating Character Replacement",
        category: Category::SlidingWindow,
        complexity: "O(n) time, O(k) space over the alphabet",
        default_input: "AABABBA | 1",
        build: build_char_replacement,
    },
    Lesson {
        id: "binary-search",
        title: "Binary Search",
        category: Category::BinarySearch,
        complexity: "O(log n) time, O(1) space",
        default_input: "-1,0,3,5,9,12 | 9",
        build: build_binary_search,
    },
    Lesson {
        id: "rotated-min",
        title: "Minimum in Rotated Sorted Array",
        category: Category::BinarySearch,
        complexity: "O(log n) time, O(1) space",
        default_input: "4,5,6,7,0,1,2",
        build: build_rotated_min,
    },
    Lesson {
        id: "climbing-stairs",
        title: "Climbing Stairs",
        category: Category::DynamicProgramming,
        complexity: "O(n) time, O(n) space",
        default_input: "8",
        build: build_climbing_stairs,
    },
    Lesson {
        id: "coin-change",
        title: "Coin Change",
        category: Category::DynamicProgramming,
        complexity: "O(amount x coins) time, O(amount) space",
        default_input: "1,2,5 | 11",
        build: build_coin_change,
    },
    Lesson {
        id: "counting-bits",
        title: "Counting Bits",
        category: Category::DynamicProgramming,
        complexity: "O(n) time, O(n) space",
        default_input: "16",
        build: build_counting_bits,
    },
    Lesson {
        id: "unique-paths",
        title: "Unique Paths",
        category: Category::DynamicProgramming,
        complexity: "O(m x n) time and space",
        default_input: "3 | 7",
        build: build_unique_paths,
    },
    Lesson {
        id: "decode-ways",
        title: "Decode Ways",
        category: Category::DynamicProgramming,
        complexity: "O(n) time, O(n) space",
        default_input: "226",
        build: build_decode_ways,
    },
    Lesson {
        id: "combination-sum",
        title: "Combination Sum",
        category: Category::Backtracking,
        complexity: "exponential time, O(target) depth",
        default_input: "2,3,6,7 | 7",
        build: build_combination_sum,
    },
    Lesson {
        id: "course-schedule",
        title: "Course Schedule",
        category: Category::Graphs,
        complexity: "O(V + E) time and space",
        default_input: "5 | 1 0, 2 1, 0 2, 4 3",
        build: build_course_schedule,
    },
    Lesson {
        id: "islands",
        title: "Number of Islands",
        category: Category::Graphs,
        complexity: "O(rows x cols) time and space",
        default_input: "11000;11000;00100;00011",
        build: build_islands,
    },
    Lesson {
        id: "clone-graph",
        title: "Clone Graph",
        category: Category::Graphs,
        complexity: "O(V + E) time and space",
        default_input: "0 1, 0 2, 1 2, 2 3",
        build: build_clone_graph,
    },
    Lesson {
        id: "two-heap-median",
        title: "Find Median from Data Stream",
        category: Category::Heaps,
        complexity: "O(log n) per insert, O(1) per median",
        default_input: "2, 10, 5, 7, 1",
        build: build_two_heap_median,
    },
    Lesson {
        id: "trie",
        title: "Implement Trie",
        category: Category::Tries,
        complexity: "O(word length) per operation",
        default_input: "insert:apple, search:apple, search:app, prefix:app, insert:app, search:app",
        build: build_trie,
    },
    Lesson {
        id: "invert-tree",
        title: "Invert Binary Tree",
        category: Category::Trees,
        complexity: "O(n) time, O(h) space",
        default_input: "4 2 7 1 3 6 9",
        build: build_invert_tree,
    },
    Lesson {
        id: "validate-bst",
        title: "Validate Binary Search Tree",
        category: Category::Trees,
        complexity: "O(n) time, O(h) space",
        default_input: "5 1 4 _ _ 3 6",
        build: build_validate_bst,
    },
    Lesson {
        id: "bst-lca",
        title: "Lowest Common Ancestor of a BST",
        category: Category::Trees,
        complexity: "O(h) time, O(1) space",
        default_input: "6 2 8 0 4 7 9 _ _ 3 5 | 2 8",
        build: build_bst_lca,
    },
    Lesson {
        id: "floyd-cycle",
        title: "Linked List Cycle (Floyd)",
        category: Category::LinkedLists,
        complexity: "O(n) time, O(1) space",
        default_input: "3 2 0 -4 | 1",
        build: build_floyd_cycle,
    },
    Lesson {
        id: "merge-intervals",
        title: "Merge Intervals",
        category: Category::Intervals,
        complexity: "O(n log n) time, O(n) space",
        default_input: "[1,3],[2,6],[8,10],[15,18]",
        build: build_merge_intervals,
    },
    Lesson {
        id: "insert-interval",
        title: "Insert Interval",
        category: Category::Intervals,
        complexity: "O(n) time, O(n) space",
        default_input: "[1,2],[3,5],[6,7],[8,10],[12,16] | 4,8",
        build: build_insert_interval,
    },
    Lesson {
        id: "erase-overlap",
        title: "Non-overlapping Intervals",
        category: Category::Intervals,
        complexity: "O(n log n) time, O(1) space",
        default_input: "[1,2],[2,3],[3,4],[1,3]",
        build: build_erase_overlap,
    },
];

/// Look up a lesson by id
pub fn find(id: &str) -> Result<&'static Lesson, RunnerError> {
    LESSONS
        .iter()
        .find(|lesson| lesson.id == id)
        .ok_or_else(|| RunnerError::UnknownLesson { id: id.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_are_unique() {
        for (i, a) in LESSONS.iter().enumerate() {
            for b in &LESSONS[i + 1..] {
                assert_ne!(a.id, b.id);
            }
        }
    }

    #[test]
    fn find_reports_unknown_ids() {
        assert!(find("container-water").is_ok());
        match find("bogus") {
            Err(RunnerError::UnknownLesson { id }) => assert_eq!(id, "bogus"),
            other => panic!("expected UnknownLesson, got {:?}", other.map(|l| l.id)),
        }
    }
}
