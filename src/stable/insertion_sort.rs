use std::cmp::Ordering;

use crate::error::{self, SequenceError};

sort_impl!("insertion_sort_stable");

/// Sorts the slice.
///
/// This sort is stable (i.e., does not reorder equal elements), in-place (i.e., does not
/// allocate), *O*(*n*) on already sorted input and *O*(*n*^2) worst-case.
///
/// # Current implementation
///
/// Adjacent-swap insertion sort. Each new element is walked to the left, one swap at a time,
/// until its left neighbour is no longer greater than it.
#[inline]
pub fn sort<T>(arr: &mut [T])
where
    T: Ord,
{
    insertion_sort(arr, |a, b| a.lt(b));
}

/// Sorts the slice with a comparator function.
///
/// The comparator function must define a total ordering for the elements in the slice. If
/// the ordering is not total, the order of the elements is unspecified, but all original
/// elements will remain in the slice.
#[inline]
pub fn sort_by<T, F>(arr: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    insertion_sort(arr, |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts the first `size` elements of `arr` and leaves the rest untouched.
///
/// Returns [`SequenceError::BoundsViolation`] without modifying `arr` if `size > arr.len()`.
pub fn sort_prefix<T>(arr: &mut [T], size: usize) -> Result<(), SequenceError>
where
    T: Ord,
{
    log::debug!("insertion sort of {size} elements");
    let v = error::prefix_mut(arr, size)?;
    sort(v);
    Ok(())
}

// --- IMPL ---

fn insertion_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    for i in 1..v.len() {
        // v[..i] is sorted. Strict `is_less` keeps equal elements in input order.
        let mut j = i;
        while j > 0 && is_less(&v[j], &v[j - 1]) {
            v.swap(j, j - 1);
            j -= 1;
        }
    }
}
