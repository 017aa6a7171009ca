use std::fmt;

/// Errors reported by the `*_prefix` entry points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SequenceError {
    /// The requested element count reaches past the end of the slice.
    BoundsViolation { size: usize, len: usize },
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BoundsViolation { size, len } => write!(
                f,
                "bounds violation: size {size} exceeds sequence length {len}"
            ),
        }
    }
}

impl std::error::Error for SequenceError {}

/// Returns `v[..size]`, or `BoundsViolation` if `size > v.len()`.
pub(crate) fn prefix_mut<T>(v: &mut [T], size: usize) -> Result<&mut [T], SequenceError> {
    let len = v.len();
    v.get_mut(..size).ok_or_else(|| reject(size, len))
}

/// Shared-borrow counterpart of [`prefix_mut`].
pub(crate) fn prefix<T>(v: &[T], size: usize) -> Result<&[T], SequenceError> {
    v.get(..size).ok_or_else(|| reject(size, v.len()))
}

fn reject(size: usize, len: usize) -> SequenceError {
    let err = SequenceError::BoundsViolation { size, len };
    log::warn!("{err}");
    err
}
