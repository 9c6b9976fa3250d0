use std::cmp::Ordering;

use crate::swap;

sort_impl!("rust_shell_unstable");

/// Sorts the slice with shell sort, using the gap sequence `len / 2, len / 4, ..., 1`.
///
/// In place, not stable. `O(n^2)` worst case for this gap sequence.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    shell_sort(v, &mut |a, b| a.lt(b));
}

/// Sorts the slice with shell sort, using a comparator function.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    shell_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn shell_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    let mut gap = len / 2;
    while gap > 0 {
        // Gapped insertion sort, the final `gap == 1` round is a plain insertion sort.
        for i in gap..len {
            let mut j = i;
            while j >= gap && is_less(&v[j], &v[j - gap]) {
                swap(v, j, j - gap);
                j -= gap;
            }
        }

        gap /= 2;
    }
}
