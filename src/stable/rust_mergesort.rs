use std::cmp::Ordering;

use crate::merge;

sort_impl!("rust_mergesort_stable");

/// Sorts the slice with a top-down merge sort.
///
/// This sort is stable (i.e., does not reorder equal elements) and *O*(*n* \* log(*n*)) in all
/// cases. It allocates one scratch buffer of `ceil(len / 2)` elements, shared by every merge.
#[inline]
pub fn sort<T>(v: &mut [T])
where
    T: Ord,
{
    merge_sort(v, &mut |a, b| a.lt(b));
}

/// Sorts the slice with a comparator function.
///
/// The comparator function must define a total ordering for the elements in the slice. If the
/// ordering is not total, the order of the elements is unspecified, but every element is still
/// present exactly once.
#[inline]
pub fn sort_by<T, F>(v: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    merge_sort(v, &mut |a, b| compare(a, b) == Ordering::Less);
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
            "merge sort range end {} out of bounds for slice of length {}",
            last,
            v.len()
        );
    }

    sort(&mut v[first..=last]);
}

fn merge_sort<T, F>(v: &mut [T], is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    if v.len() < 2 {
        return;
    }

    // The left run of a merge is never longer than `ceil(len / 2)`.
    let mut scratch = Vec::with_capacity((v.len() + 1) / 2);
    merge_sort_rec(v, &mut scratch, is_less);
}

fn merge_sort_rec<T, F>(v: &mut [T], scratch: &mut Vec<T>, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();
    if len < 2 {
        return;
    }

    // `mid = (first + last) / 2` over `[0, len - 1]`, the left run includes `mid`.
    let mid = (len - 1) / 2;
    let left_len = mid + 1;

    merge_sort_rec(&mut v[..left_len], scratch, is_less);
    merge_sort_rec(&mut v[left_len..], scratch, is_less);

    merge::merge_runs(v, left_len, scratch, is_less);
}
