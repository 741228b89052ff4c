use thiserror::Error;

/// Errors raised by the fallible operations of [`crate::PersistentVector`].
///
/// Every other operation (`append`, `get_or`, `fetch`, `last_or`, `to_vec`,
/// `reduce`, `pop_back` on a non-empty vector, ...) is total and never
/// produces one of these.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VectorError {
    /// `get`/`set` was called with an index outside `0..=len` (`set`
    /// additionally accepts `index == len`, which is an `append`).
    #[error("Attempt to {action} index {index} for vector of size {len}")]
    IndexOutOfBounds {
        action: &'static str,
        index: usize,
        len: usize,
    },

    /// `last`/`remove_last` was called on the empty vector.
    #[error("{0}")]
    EmptyVector(&'static str),

    /// `get_and_update`/`pop` are kept for interface conformance with the
    /// mutating adapter hooks of the host collection but are not
    /// implemented for a persistent vector.
    #[error("{0}")]
    NoSuchOperation(&'static str),
}
