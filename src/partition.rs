use std::cmp::Ordering;

use crate::swap;

/// Partitions the inclusive range `v[first..=last]` around the element at `last` and returns the
/// pivot's final index.
///
/// When the call returns every element left of the returned index compares `<=` the pivot and
/// every element right of it compares `>` the pivot. Elements equal to the pivot end up on the
/// left. The partition is not stable.
///
/// Panics if `first > last` or `last` is out of bounds, before any element is moved.
pub fn partition<T>(v: &mut [T], first: usize, last: usize) -> usize
where
    T: Ord,
{
    partition_by(v, first, last, |a, b| a.cmp(b))
}

/// Like [`partition`], with a comparator function.
pub fn partition_by<T, F>(v: &mut [T], first: usize, last: usize, mut compare: F) -> usize
where
    F: FnMut(&T, &T) -> Ordering,
{
    if first > last || last >= v.len() {
        panic!(
            "partition range [{}, {}] out of bounds for slice of length {}",
            first,
            last,
            v.len()
        );
    }

    first + lomuto(&mut v[first..=last], &mut |a, b| compare(a, b) == Ordering::Less)
}

/// Lomuto partition of `v` using its last element as the pivot.
///
/// Returns the index the pivot was moved to. A slice of length 0 or 1 returns 0 without
/// comparing anything.
pub(crate) fn lomuto<T, F>(v: &mut [T], is_less: &mut F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return 0;
    }

    let (rest, pivot) = v.split_at_mut(len - 1);
    let pivot = &pivot[0];

    // Everything in `rest[..boundary]` compares `<=` the pivot.
    let mut boundary = 0;
    for i in 0..rest.len() {
        if !is_less(pivot, &rest[i]) {
            swap(rest, i, boundary);
            boundary += 1;
        }
    }

    swap(v, boundary, len - 1);
    boundary
}
