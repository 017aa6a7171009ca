use std::cmp::Ordering;

use crate::error::{self, SequenceError};

search_impl!("binary_search_inclusive");

/// Returns `true` if `item` occurs in `arr`.
///
/// `arr` must be sorted in ascending order, otherwise the result is unspecified and may be a
/// false negative. With duplicates any matching position may end the search.
///
/// *O*(log(*n*)) comparisons.
#[inline]
pub fn search<T>(item: &T, arr: &[T]) -> bool
where
    T: Ord,
{
    binary_search(arr, |elem| elem.cmp(item))
}

/// Binary searches `arr` with a comparator function.
///
/// `compare` returns the ordering of the probed element relative to the target, i.e. `Less` if
/// the element sorts before the target. `arr` must be sorted in the order `compare` implies.
#[inline]
pub fn search_by<T, F>(arr: &[T], compare: F) -> bool
where
    F: FnMut(&T) -> Ordering,
{
    binary_search(arr, compare)
}

/// Returns `true` if `item` occurs in the first `size` elements of `arr`.
///
/// Returns [`SequenceError::BoundsViolation`] if `size > arr.len()`. An empty prefix and an
/// absent value both report `Ok(false)`.
pub fn search_prefix<T>(item: &T, arr: &[T], size: usize) -> Result<bool, SequenceError>
where
    T: Ord,
{
    log::debug!("binary search over {size} elements");
    let v = error::prefix(arr, size)?;
    Ok(search(item, v))
}

// --- IMPL ---

/// Half-interval search over the inclusive range `[lo, hi]`, probing `mid = (lo + hi) / 2`.
///
/// `hi` is carried as `end = hi + 1` so that neither an empty slice nor `mid == 0` underflows.
/// The probe sequence is the same as with a signed inclusive upper bound.
fn binary_search<T, F>(v: &[T], mut compare: F) -> bool
where
    F: FnMut(&T) -> Ordering,
{
    let mut lo = 0;
    let mut end = v.len();

    while lo < end {
        let mid = lo + (end - 1 - lo) / 2;

        match compare(&v[mid]) {
            Ordering::Equal => return true,
            // Target is below v[mid], drop the upper half.
            Ordering::Greater => end = mid,
            Ordering::Less => lo = mid + 1,
        }
    }

    false
}
