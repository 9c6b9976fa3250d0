use std::cell::Cell;
use std::panic::{self, AssertUnwindSafe};

use classic_sorts::merge::{merge, merge_by};
use classic_sorts::partition::{partition, partition_by};
use classic_sorts::stable::rust_bubble;
use classic_sorts::unstable::{rust_quicksort, rust_selection};
use classic_sorts::{stable, swap, Algorithm};

use sort_test_tools::patterns;

fn check_partitioned(v: &[i32], first: usize, last: usize, pivot_pos: usize) {
    assert!(first <= pivot_pos && pivot_pos <= last);
    let pivot = v[pivot_pos];
    assert!(v[first..pivot_pos].iter().all(|&x| x <= pivot), "{v:?}");
    assert!(v[pivot_pos + 1..=last].iter().all(|&x| x > pivot), "{v:?}");
}

// --- swap ---

#[test]
fn swap_exchanges_two_positions() {
    let mut v = [1, 2, 3, 4];
    swap(&mut v, 0, 3);
    assert_eq!(v, [4, 2, 3, 1]);

    swap(&mut v, 2, 2);
    assert_eq!(v, [4, 2, 3, 1]);
}

#[test]
#[should_panic]
fn swap_out_of_bounds() {
    let mut v = [1, 2, 3];
    swap(&mut v, 1, 3);
}

// --- partition ---

#[test]
fn partition_returns_final_pivot_index() {
    let mut v = [3, 7, 1, 9, 4];
    let pivot_pos = partition(&mut v, 0, 4);

    assert_eq!(pivot_pos, 2);
    assert_eq!(v[pivot_pos], 4);
    check_partitioned(&v, 0, 4, pivot_pos);
}

#[test]
fn partition_single_element_range() {
    let mut v = [9, 5, 1];
    assert_eq!(partition(&mut v, 1, 1), 1);
    assert_eq!(v, [9, 5, 1]);
}

#[test]
fn partition_equal_elements_go_left() {
    let mut v = [2, 2, 2, 2];
    assert_eq!(partition(&mut v, 0, 3), 3);

    let mut v = [5, 1, 5, 9, 5];
    let pivot_pos = partition(&mut v, 0, 4);
    assert_eq!(pivot_pos, 3);
    assert_eq!(v[..3].iter().filter(|&&x| x == 5).count(), 2);
}

#[test]
fn partition_leaves_outside_of_range_untouched() {
    let mut v = [100, 8, 3, 6, 1, 5, -100];
    let pivot_pos = partition(&mut v, 1, 5);

    assert_eq!(v[0], 100);
    assert_eq!(v[6], -100);
    assert_eq!(v[pivot_pos], 5);
    check_partitioned(&v, 1, 5, pivot_pos);
}

#[test]
fn partition_random_postcondition() {
    for len in [2, 3, 10, 64, 500] {
        let mut v = patterns::random_uniform(len, 0..50);
        let original_pivot = v[len - 1];

        let pivot_pos = partition(&mut v, 0, len - 1);

        assert_eq!(v[pivot_pos], original_pivot);
        check_partitioned(&v, 0, len - 1, pivot_pos);
    }
}

#[test]
fn partition_by_reverse_order() {
    let mut v = [3, 7, 1, 9, 4];
    let pivot_pos = partition_by(&mut v, 0, 4, |a, b| b.cmp(a));

    assert_eq!(pivot_pos, 2);
    assert!(v[..2].iter().all(|&x| x >= 4));
    assert!(v[3..].iter().all(|&x| x < 4));
}

#[test]
#[should_panic(expected = "out of bounds")]
fn partition_last_out_of_bounds() {
    let mut v = [1, 2, 3];
    partition(&mut v, 0, 3);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn partition_inverted_range() {
    let mut v = [1, 2, 3];
    partition(&mut v, 2, 1);
}

// --- merge ---

#[test]
fn merge_two_runs() {
    let mut v = [1, 3, 5, 2, 4, 6];
    merge(&mut v, 0, 2, 5);
    assert_eq!(v, [1, 2, 3, 4, 5, 6]);
}

#[test]
fn merge_uneven_runs() {
    let mut v = [4, 1, 2, 3];
    merge(&mut v, 0, 0, 3);
    assert_eq!(v, [1, 2, 3, 4]);

    let mut v = [2, 3, 9, 10, 1];
    merge(&mut v, 0, 3, 4);
    assert_eq!(v, [1, 2, 3, 9, 10]);
}

#[test]
fn merge_sub_range() {
    let mut v = [50, 1, 4, 2, 3, -50];
    merge(&mut v, 1, 2, 4);
    assert_eq!(v, [50, 1, 2, 3, 4, -50]);
}

#[test]
fn merge_empty_right_run() {
    let mut v = [3, 1, 2];
    merge(&mut v, 1, 2, 2);
    assert_eq!(v, [3, 1, 2]);
}

#[test]
fn merge_takes_left_on_ties() {
    let mut v = [(1, 'a'), (2, 'b'), (1, 'c'), (2, 'd')];
    merge_by(&mut v, 0, 1, 3, |a, b| a.0.cmp(&b.0));
    assert_eq!(v, [(1, 'a'), (1, 'c'), (2, 'b'), (2, 'd')]);
}

#[test]
fn merge_strings() {
    let mut v: Vec<String> = ["apple", "pear", "banana", "quince"]
        .into_iter()
        .map(String::from)
        .collect();
    merge(&mut v, 0, 1, 3);
    assert_eq!(v, ["apple", "banana", "pear", "quince"]);
}

#[test]
fn merge_panic_keeps_every_element() {
    let mut v: Vec<String> = [1, 4, 7, 8, 2, 3, 5, 9]
        .into_iter()
        .map(|x| x.to_string())
        .collect();
    let mut original = v.clone();

    let comparisons = Cell::new(0);
    let res = panic::catch_unwind(AssertUnwindSafe(|| {
        merge_by(&mut v, 0, 3, 7, |a, b| {
            if comparisons.get() == 3 {
                panic!("explicit comparison panic");
            }
            comparisons.set(comparisons.get() + 1);
            a.cmp(b)
        });
    }));

    assert!(res.is_err());
    v.sort();
    original.sort();
    assert_eq!(v, original);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn merge_mid_past_last() {
    let mut v = [1, 2, 3];
    merge(&mut v, 0, 2, 1);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn merge_last_out_of_bounds() {
    let mut v = [1, 2, 3];
    merge(&mut v, 0, 1, 3);
}

// --- comparison counts ---

fn count_comparisons(algo: Algorithm, v: &mut [i32]) -> usize {
    let mut count = 0;
    algo.sort_by(v, |a, b| {
        count += 1;
        a.cmp(b)
    });
    count
}

#[test]
fn bubble_sorted_input_takes_one_pass() {
    let mut v = patterns::ascending(100);
    assert_eq!(rust_bubble::sort_counting_passes(&mut v), 1);
    assert_eq!(v, patterns::ascending(100));

    let mut v = patterns::ascending(100);
    assert_eq!(count_comparisons(Algorithm::Bubble, &mut v), 99);
}

#[test]
fn bubble_pass_counts() {
    assert_eq!(rust_bubble::sort_counting_passes::<i32>(&mut []), 0);
    assert_eq!(rust_bubble::sort_counting_passes(&mut [7]), 0);
    assert_eq!(rust_bubble::sort_counting_passes(&mut [2, 1]), 1);

    // Every pass moves the largest unsorted element to its final position.
    let mut v = patterns::descending(50);
    assert_eq!(rust_bubble::sort_counting_passes(&mut v), 49);
    assert_eq!(v, patterns::ascending(50));

    // One pass to fix it, one more to see nothing changes.
    let mut v = [1, 2, 4, 3, 5];
    assert_eq!(rust_bubble::sort_counting_passes(&mut v), 2);
}

#[test]
fn insertion_sorted_input_is_linear() {
    let mut v = patterns::ascending(100);
    assert_eq!(count_comparisons(Algorithm::Insertion, &mut v), 99);
}

#[test]
fn selection_comparisons_ignore_input_order() {
    let expected = 100 * 99 / 2;

    let mut v = patterns::ascending(100);
    assert_eq!(count_comparisons(Algorithm::Selection, &mut v), expected);

    let mut v = patterns::descending(100);
    assert_eq!(count_comparisons(Algorithm::Selection, &mut v), expected);

    let mut v = [0; 0];
    rust_selection::sort(&mut v);
    let mut v = [4];
    rust_selection::sort(&mut v);
    assert_eq!(v, [4]);
}

#[test]
fn quicksort_sorted_input_is_quadratic() {
    let mut v = patterns::ascending(100);
    assert_eq!(count_comparisons(Algorithm::Quick, &mut v), 100 * 99 / 2);
    assert_eq!(v, patterns::ascending(100));
}

#[test]
fn quicksort_long_sorted_input() {
    // Deep partition chains must not exhaust the stack.
    let mut v = patterns::descending(3_000);
    rust_quicksort::sort(&mut v);
    assert_eq!(v, patterns::ascending(3_000));
}

// --- ranges ---

#[test]
fn sort_range_only_touches_range() {
    let mut v = [9, 8, 5, 3, 8, 1, 9, 2, 0];
    stable::rust_mergesort::sort_range(&mut v, 2, 7);
    assert_eq!(v, [9, 8, 1, 2, 3, 5, 8, 9, 0]);

    let mut v = [9, 8, 5, 3, 8, 1, 9, 2, 0];
    rust_quicksort::sort_range(&mut v, 2, 7);
    assert_eq!(v, [9, 8, 1, 2, 3, 5, 8, 9, 0]);
}

#[test]
fn sort_range_trivial_ranges_are_noops() {
    let mut v = [3, 2, 1];
    stable::rust_mergesort::sort_range(&mut v, 1, 1);
    rust_quicksort::sort_range(&mut v, 2, 0);
    assert_eq!(v, [3, 2, 1]);

    let mut v: [i32; 0] = [];
    stable::rust_mergesort::sort_range(&mut v, 0, 0);
    rust_quicksort::sort_range(&mut v, 0, 0);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn mergesort_range_out_of_bounds() {
    let mut v = [3, 2, 1];
    stable::rust_mergesort::sort_range(&mut v, 0, 3);
}

#[test]
#[should_panic(expected = "out of bounds")]
fn quicksort_range_out_of_bounds() {
    let mut v = [3, 2, 1];
    rust_quicksort::sort_range(&mut v, 1, 5);
}

#[test]
fn mergesort_range_full() {
    let mut v = [5, 3, 8, 1, 9, 2];
    stable::rust_mergesort::sort_range(&mut v, 0, 5);
    assert_eq!(v, [1, 2, 3, 5, 8, 9]);
}

// --- algorithm ---

#[test]
fn every_algorithm_sorts_reference_inputs() {
    for algo in Algorithm::ALL {
        let mut v = [5, 3, 8, 1, 9, 2];
        algo.sort(&mut v);
        assert_eq!(v, [1, 2, 3, 5, 8, 9], "{algo}");

        let mut v = [1, 1, 1];
        algo.sort(&mut v);
        assert_eq!(v, [1, 1, 1], "{algo}");

        let mut v: Vec<i32> = Vec::new();
        algo.sort(&mut v);
        assert!(v.is_empty(), "{algo}");
    }
}

#[test]
fn stable_algorithms_keep_equal_elements_in_order() {
    let input = [(3, 0), (1, 1), (3, 2), (2, 3), (1, 4), (3, 5), (2, 6)];
    let expected = [(1, 1), (1, 4), (2, 3), (2, 6), (3, 0), (3, 2), (3, 5)];

    for algo in Algorithm::ALL.into_iter().filter(|algo| algo.is_stable()) {
        let mut v = input;
        algo.sort_by(&mut v, |a, b| a.0.cmp(&b.0));
        assert_eq!(v, expected, "{algo}");
    }
}

#[test]
fn algorithm_names_round_trip() {
    for algo in Algorithm::ALL {
        assert_eq!(algo.name().parse::<Algorithm>(), Ok(algo));
    }

    assert_eq!("QuickSort".parse::<Algorithm>(), Ok(Algorithm::Quick));
    assert_eq!(" merge ".parse::<Algorithm>(), Ok(Algorithm::Merge));
    assert!("heap".parse::<Algorithm>().is_err());
}
