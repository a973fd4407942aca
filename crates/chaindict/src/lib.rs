#[macro_use]
mod macros;

pub mod bucket;
pub mod hashing;
pub mod hashmap;

use std::collections::TryReserveError;

use thiserror::Error;

pub use hashing::{Identity, KeyHash};
pub use hashmap::{HashDict, HashSet};

/// Number of buckets a fresh table starts with.
pub const INITIAL_CAPACITY: usize = 5;

/// Exponent `k` of the first `2^k..2^(k+1)` range searched for a prime capacity.
pub const INITIAL_GROWTH_EXPONENT: u32 = 3;

/// A table grows before an insertion once its occupancy is strictly above this.
pub const MAX_OCCUPANCY_PERCENT: f32 = 75.0;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// `pop` or a lookup was given a key that is not stored
    #[error("no such key in the table")]
    KeyNotFound,

    /// Growing the bucket array failed, only reported by the `try_add` family
    #[error("could not allocate a larger bucket array: {0}")]
    AllocationFailure(#[from] TryReserveError),
}

pub type Result<T> = std::result::Result<T, Error>;
