use std::cmp::Ordering;
use std::mem;
use std::ptr;

/// Merges the sorted runs `v[first..=mid]` and `v[mid + 1..=last]` into one sorted run covering
/// `v[first..=last]`.
///
/// The merge is stable: when the heads of both runs compare equal the element from the left run
/// is taken first.
///
/// Panics unless `first <= mid <= last < v.len()`, before any element is moved. `mid == last`
/// means the right run is empty and nothing happens.
pub fn merge<T>(v: &mut [T], first: usize, mid: usize, last: usize)
where
    T: Ord,
{
    merge_by(v, first, mid, last, |a, b| a.cmp(b));
}

/// Like [`merge`], with a comparator function.
pub fn merge_by<T, F>(v: &mut [T], first: usize, mid: usize, last: usize, mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    if first > mid || mid > last || last >= v.len() {
        panic!(
            "merge runs [{}, {}] and [{}, {}] out of bounds for slice of length {}",
            first,
            mid,
            mid + 1,
            last,
            v.len()
        );
    }

    let left_len = mid - first + 1;
    let mut scratch = Vec::with_capacity(left_len);
    merge_runs(
        &mut v[first..=last],
        left_len,
        &mut scratch,
        &mut |a, b| compare(a, b) == Ordering::Less,
    );
}

/// Merges the sorted runs `v[..left_len]` and `v[left_len..]` in place.
///
/// The left run is moved out into `scratch` and then merged forwards back into `v`. The write
/// cursor never overtakes the read cursor of the right run, so the right run can stay where it
/// is. `scratch` must be empty; it is grown as needed and left empty again.
///
/// If `is_less` panics, every element of `v` is still present exactly once, in unspecified
/// order. The same is true if `is_less` does not implement a total order.
pub(crate) fn merge_runs<T, F>(v: &mut [T], left_len: usize, scratch: &mut Vec<T>, is_less: &mut F)
where
    F: FnMut(&T, &T) -> bool,
{
    let len = v.len();

    // Zero-sized values are indistinguishable, and pointer distances between them are
    // meaningless.
    if left_len == 0 || left_len >= len || mem::size_of::<T>() == 0 {
        return;
    }

    debug_assert!(scratch.is_empty());
    scratch.reserve(left_len);

    // SAFETY: `scratch` has capacity for `left_len` elements and is a separate allocation, so the
    // initial copy does not overlap. Its length stays 0, so the bitwise copies of the left run
    // held there are never dropped by the `Vec`. Inside the loop `hole.start < hole.end`, which
    // means fewer than `left_len` left elements have been consumed and `hole.dest < right`. Each
    // step writes one element into `hole.dest` and advances exactly one read cursor, so no
    // element is read twice or written twice. `MergeHole::drop` moves the unconsumed left
    // elements into the gap `hole.dest..right`, which has exactly that length.
    unsafe {
        let v_base = v.as_mut_ptr();
        let buf = scratch.as_mut_ptr();
        ptr::copy_nonoverlapping(v_base, buf, left_len);

        let mut hole = MergeHole {
            start: buf,
            end: buf.add(left_len),
            dest: v_base,
        };

        let mut right = v_base.add(left_len);
        let right_end = v_base.add(len);

        while hole.start < hole.end && right < right_end {
            // Strict comparison, ties take the left element.
            let take_right = is_less(&*right, &*hole.start);
            let src = if take_right { right } else { hole.start };
            ptr::copy_nonoverlapping(src, hole.dest, 1);
            hole.dest = hole.dest.add(1);

            if take_right {
                right = right.add(1);
            } else {
                hole.start = hole.start.add(1);
            }
        }

        // Dropping `hole` appends the rest of the left run. The rest of the right run is
        // already in its final position.
    }
}

// When dropped, copies the range `start..end` into `dest..`.
struct MergeHole<T> {
    start: *mut T,
    end: *mut T,
    dest: *mut T,
}

impl<T> Drop for MergeHole<T> {
    fn drop(&mut self) {
        // SAFETY: `T` is not a zero-sized type, `start <= end` point into the same scratch
        // allocation, and `dest` points to a gap in the target slice at least that long.
        unsafe {
            let len = self.end.offset_from(self.start) as usize;
            ptr::copy_nonoverlapping(self.start, self.dest, len);
        }
    }
}
