use std::cmp::Ordering;

sort_impl!("rust_insertion_stable");

/// Sorts the slice with insertion sort.
///
/// Stable, in place and adaptive: `O(n)` on already sorted input, `O(n^2)` on average and in the
/// worst case.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    insertion_sort(v, &mut |a, b| a.lt(b));
}

/// Sorts the slice with insertion sort, using a comparator function.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
}

fn insertion_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        // Walk left past every element strictly greater than `v[i]`.
        let mut hole = i;
        while hole > 0 && is_less(&v[i], &v[hole - 1]) {
            hole -= 1;
        }

        // Shift `v[hole..i]` one slot right and drop `v[i]` into the gap.
        v[hole..=i].rotate_right(1);
    }
}
