// End-to-end answer checks for the lesson implementations, using the same
// concrete types the catalogue builders construct.

use algotty::algorithms::binary_search::BinarySearch;
use algotty::algorithms::dp_table::CoinChange;
use algotty::algorithms::graph::CourseSchedule;
use algotty::algorithms::heaps::TwoHeapMedian;
use algotty::algorithms::intervals::MergeIntervals;
use algotty::algorithms::trie::Trie;
use algotty::runner::SteppedAlgorithm;

fn run(alg: &mut dyn SteppedAlgorithm) {
    while !alg.is_terminal() {
        alg.step();
    }
}

#[test]
fn two_heap_median_reports_after_every_insert() {
    let mut alg = TwoHeapMedian::new(vec![2, 10, 5]);
    run(&mut alg);
    assert_eq!(alg.medians(), &[2.0, 6.0, 5.0]);
}

#[test]
fn course_schedule_detects_the_cycle() {
    let mut alg = CourseSchedule::new(5, &[(1, 0), (2, 1), (0, 2), (4, 3)]);
    run(&mut alg);
    assert_eq!(alg.possible(), Some(false));
}

#[test]
fn course_schedule_passes_without_the_back_edge() {
    let mut alg = CourseSchedule::new(5, &[(1, 0), (2, 1), (4, 3)]);
    run(&mut alg);
    assert_eq!(alg.possible(), Some(true));
}

#[test]
fn coin_change_finds_the_fewest_coins() {
    let mut alg = CoinChange::new(vec![1, 2, 5], 11);
    run(&mut alg);
    assert_eq!(alg.result(), 3);
}

#[test]
fn coin_change_reports_unreachable_amounts() {
    let mut alg = CoinChange::new(vec![2], 3);
    run(&mut alg);
    assert_eq!(alg.result(), -1);
}

#[test]
fn merge_intervals_classic_vector() {
    let mut alg = MergeIntervals::new(vec![(1, 3), (2, 6), (8, 10), (15, 18)]);
    run(&mut alg);
    assert_eq!(alg.merged(), &[(1, 6), (8, 10), (15, 18)]);
}

#[test]
fn merging_a_merged_list_changes_nothing() {
    let mut first = MergeIntervals::new(vec![(1, 3), (2, 6), (8, 10), (15, 18)]);
    run(&mut first);
    let answer = first.merged().to_vec();
    let mut again = MergeIntervals::new(answer.clone());
    run(&mut again);
    assert_eq!(again.merged(), answer.as_slice());
}

#[test]
fn trie_distinguishes_words_from_prefixes() {
    let mut trie = Trie::new();
    trie.insert("apple");
    assert!(trie.search("apple"));
    assert!(!trie.search("app"));
    assert!(trie.starts_with("app"));
    trie.insert("app");
    assert!(trie.search("app"));
}

#[test]
fn binary_search_finds_present_and_absent_targets() {
    let nums = vec![-1, 0, 3, 5, 9, 12];

    let mut hit = BinarySearch::new(nums.clone(), 9);
    run(&mut hit);
    assert_eq!(hit.found(), Some(4));

    let mut miss = BinarySearch::new(nums, 2);
    run(&mut miss);
    assert_eq!(miss.found(), None);
}
