pub trait Sort {
    fn name() -> String;

    fn sort<T>(arr: &mut [T])
    where
        T: Ord;

    fn sort_by<T, F>(arr: &mut [T], compare: F)
    where
        F: FnMut(&T, &T) -> std::cmp::Ordering;
}

pub trait Search {
    fn name() -> String;

    fn search<T>(item: &T, arr: &[T]) -> bool
    where
        T: Ord;

    fn search_by<T, F>(arr: &[T], compare: F) -> bool
    where
        F: FnMut(&T) -> std::cmp::Ordering;
}

pub mod patterns;

// Re-exported so the instantiate macros work without the caller depending on paste.
#[doc(hidden)]
pub use paste;
