use std::cmp::Ordering;

use crate::partition;

sort_impl!("rust_quicksort_unstable");

/// Sorts the slice with quicksort.
///
/// This sort is unstable (i.e., may reorder equal elements), in place and *O*(*n* \* log(*n*))
/// on average.
///
/// # Current implementation
///
/// The pivot is always the last element of the range and partitioning follows the Lomuto
/// scheme. There is no pivot sampling and no fallback, so already sorted and reverse sorted
/// inputs hit the *O*(*n*^2) worst case. Only the shorter side of each partition is recursed
/// into, which keeps the stack depth at *O*(log(*n*)) even then.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    quicksort(v, &mut |a, b| a.lt(b));
}

/// Sorts the slice with quicksort, using a comparator function.
///
/// If the comparator does not implement a total order the resulting order is unspecified, but
/// every element is still present exactly once.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    quicksort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts the inclusive range `v[first..=last]`.
///
/// `first >= last` describes at most one element and returns immediately. Otherwise panics if
/// `last` is out of bounds, before any element is moved.
pub fn sort_range<T>(v: &mut [T], first: usize, last: usize)
where
    T: Ord,
{
    if first >= last {
        return;
    }

    if last >= v.len() {
        panic!(
            "quicksort range end {} out of bounds for slice of length {}",
            last,
            v.len()
        );
    }

    sort(&mut v[first..=last]);
}

fn quicksort<T, F>(mut v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    while v.len() > 1 {
        let pivot_pos = partition::lomuto(v, is_less);

        // Split the slice into `left`, `pivot`, and `right`.
        let (left, right) = v.split_at_mut(pivot_pos);
        let right = &mut right[1..];

        // Both sides are independent, so their order does not affect the result.
        if left.len() < right.len() {
            quicksort(left, is_less);
            v = right;
        } else {
            quicksort(right, is_less);
            v = left;
        }
    }
}
