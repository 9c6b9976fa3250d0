/// Exchanges the elements at `a` and `b`.
///
/// Panics if either index is out of bounds, before anything is moved.
#[inline]
pub fn swap<T>(v: &mut [T], a: usize, b: usize) {
    v.swap(a, b);
}
