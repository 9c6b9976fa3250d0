//! Six classic comparison sorts, the primitives they share, and a small demo harness.
//!
//! Every algorithm lives in its own module under [`stable`] or [`unstable`] and exposes the same
//! `sort` / `sort_by` pair, plus a `SortImpl` type implementing [`sort_test_tools::Sort`] so the
//! shared test suite can drive it.

macro_rules! sort_impl {
    ($name:expr) => {
        pub struct SortImpl;

        impl sort_test_tools::Sort for SortImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn sort<T>(arr: &mut [T])
            where
                T: Ord,
            {
                sort(arr);
            }

            #[inline]
            fn sort_by<T, F>(arr: &mut [T], compare: F)
            where
                F: FnMut(&T, &T) -> std::cmp::Ordering,
            {
                sort_by(arr, compare);
            }
        }
    };
}

pub mod algorithm;
pub mod harness;
pub mod merge;
pub mod partition;
pub mod stable;
pub mod swap;
pub mod unstable;

pub use algorithm::Algorithm;
pub use swap::swap;
