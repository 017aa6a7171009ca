use std::cmp::Ordering;

use crate::error::{self, SequenceError};

sort_impl!("selection_sort_unstable");

/// Sorts the slice, but might not preserve the order of equal elements.
///
/// This sort is unstable (i.e., may reorder equal elements), in-place (i.e., does not
/// allocate), and performs exactly *n*(*n*-1)/2 comparisons and *n*-1 swaps regardless of the
/// input.
///
/// # Current implementation
///
/// Selection sort building the sorted suffix from the back: the maximum of the unsorted prefix
/// is swapped to the last position of that prefix, then the prefix shrinks by one.
#[inline]
pub fn sort<T>(arr: &mut [T])
where
    T: Ord,
{
    selection_sort(arr, |a, b| a.lt(b));
}

/// Sorts the slice with a comparator function, but might not preserve the order of equal
/// elements.
///
/// The comparator function must define a total ordering for the elements in the slice. If
/// the ordering is not total, the order of the elements is unspecified, but all original
/// elements will remain in the slice.
#[inline]
pub fn sort_by<T, F>(arr: &mut [T], mut compare: F)
where
    F: FnMut(&T, &T) -> Ordering,
{
    selection_sort(arr, |a, b| compare(a, b) == Ordering::Less);
}

/// Sorts the first `size` elements of `arr` and leaves the rest untouched.
///
/// Returns [`SequenceError::BoundsViolation`] without modifying `arr` if `size > arr.len()`.
pub fn sort_prefix<T>(arr: &mut [T], size: usize) -> Result<(), SequenceError>
where
    T: Ord,
{
    log::debug!("selection sort of {size} elements");
    let v = error::prefix_mut(arr, size)?;
    sort(v);
    Ok(())
}

// --- IMPL ---

fn selection_sort<T, F>(v: &mut [T], mut is_less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    // A single remaining element is already in place, so the loop stops before i == 0.
    for i in (1..v.len()).rev() {
        // Index 0 is the initial candidate, the scan covers 1..=i. Only a strictly greater
        // element replaces the candidate, so the first maximum among equals wins.
        let mut max = 0;
        for j in 1..=i {
            if is_less(&v[max], &v[j]) {
                max = j;
            }
        }

        // Unconditional, a self-swap when the maximum is already in place.
        v.swap(max, i);
    }
}
