use std::cmp::Ordering;

use crate::swap;

sort_impl!("rust_selection_unstable");

/// Sorts the slice with selection sort.
///
/// In place, not stable. Always performs `n * (n - 1) / 2` comparisons, independent of the input
/// order.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    selection_sort(v, &mut |a, b| a.lt(b));
}

/// Sorts the slice with selection sort, using a comparator function.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    selection_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn selection_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    for i in 0..len.saturating_sub(1) {
        // First occurrence of the minimum of `v[i..]`.
        let mut min_pos = i;
        for j in (i + 1)..len {
            if is_less(&v[j], &v[min_pos]) {
                min_pos = j;
            }
        }

        swap(v, i, min_pos);
    }
}
