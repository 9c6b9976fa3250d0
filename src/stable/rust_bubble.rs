use std::cmp::Ordering;

use crate::swap;

sort_impl!("rust_bubble_stable");

/// Sorts the slice with bubble sort.
///
/// Stable and in place. Stops as soon as a pass over the slice performs no swap, which makes the
/// best case (already sorted input) a single pass of `len - 1` comparisons. `O(n^2)` on average
/// and in the worst case.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    bubble_sort(v, &mut |a, b| a.lt(b));
}

/// Sorts the slice with bubble sort, using a comparator function.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    bubble_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts the slice and returns how many passes were made over it.
///
/// A slice of length 0 or 1 takes no passes, sorted input takes exactly one.
pub fn sort_counting_passes<T>(v: &mut [T]) -> usize
where
    T: Ord,
{
    bubble_sort(v, &mut |a, b| a.lt(b))
}

fn bubble_sort<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    let mut passes = 0;

    for _ in 1..len {
        passes += 1;

        let mut swapped = false;
        for j in 0..(len - 1) {
            if is_less(&v[j + 1], &v[j]) {
                swap(v, j, j + 1);
                swapped = true;
            }
        }

        if !swapped {
            break;
        }
    }

    passes
}
