//! A persistent, indexed vector: an immutable, array-like container of
//! arbitrary values addressed by a contiguous, zero-based integer index.
//!
//! Every mutating operation (`set`, `push_back`, `pop_back`) returns a new
//! logical vector; the version it was called on remains valid and
//! observable. Sharing between versions is structural: the backing data
//! structure is a 32-way branching trie with a small trailing *tail*
//! buffer, so the cost of an update is bounded by the depth of the trie,
//! not by the vector's size.
//!
//! ```
//! use pvec::PersistentVector;
//!
//! let v0: PersistentVector<i32> = (0..40).collect();
//! let v1 = v0.push_back(40);
//! let v2 = v1.set(0, -1).unwrap();
//!
//! assert_eq!(v0.len(), 40);
//! assert_eq!(v1.len(), 41);
//! assert_eq!(*v0.get(0).unwrap(), 0); // v0 is untouched by v1/v2
//! assert_eq!(*v2.get(0).unwrap(), -1);
//! ```

mod error;
mod fold;
mod inspect;
mod iter;
mod node;
mod trie;
mod vector;

pub use error::VectorError;
pub use fold::{Command, Outcome, Suspension};
pub use iter::Iter;
pub use vector::PersistentVector;
