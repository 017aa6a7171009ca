//! Textbook in-place comparison sorts and binary search.
//!
//! Every algorithm module exposes a whole-slice form (`sort`, `sort_by`, `search`, `search_by`)
//! and a `*_prefix` form that takes an explicit element count and validates it against the
//! slice length before touching anything.

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

macro_rules! search_impl {
    ($name:expr) => {
        pub struct SearchImpl;

        impl sort_test_tools::Search for SearchImpl {
            fn name() -> String {
                $name.into()
            }

            #[inline]
            fn search<T>(item: &T, arr: &[T]) -> bool
            where
                T: Ord,
            {
                search(item, arr)
            }

            #[inline]
            fn search_by<T, F>(arr: &[T], compare: F) -> bool
            where
                F: FnMut(&T) -> std::cmp::Ordering,
            {
                search_by(arr, compare)
            }
        }
    };
}

pub mod error;
pub mod search;
pub mod stable;
pub mod unstable;

pub use error::SequenceError;
