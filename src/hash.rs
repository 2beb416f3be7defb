//! Hashing of geometric values.

use crate::scalar;
use parking_lot::Mutex;
use std::fmt;

/// A 64-bit hash.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hash64(u64);

/// Memoized hash of an immutable value of type `T`.
///
/// The cache starts out holding the function that computes the hash from the
/// owning value and replaces it with the result on first access. Since the
/// owner never changes after construction, the cached result can never become
/// stale.
///
/// # Concurrency
/// The state is behind a lock, so concurrent first accesses compute the hash
/// once and every caller observes the same published value.
pub struct LazyHashCache<T> {
    state: Mutex<HashState<T>>,
}

enum HashState<T> {
    Uninitialized(fn(&T) -> Hash64),
    Computed(Hash64),
}

impl From<Hash64> for u64 {
    fn from(hash: Hash64) -> Self {
        hash.0
    }
}

impl fmt::Display for Hash64 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Computes a 64-bit hash of the given string.
pub const fn compute_hash_str_64(string: &str) -> Hash64 {
    Hash64(const_fnv1a_hash::fnv1a_hash_str_64(string))
}

/// Computes a 64-bit hash of the given scalars by concatenating their
/// canonical hash strings in order and hashing the result.
///
/// The components are never hashed separately and combined, since any
/// commutative combination would make e.g. `(1, -1)` and `(-1, 1)` collide.
pub fn compute_hash_of_scalars(scalars: &[f64]) -> Hash64 {
    let key: String = scalars
        .iter()
        .map(|&scalar| scalar::canonical_hash_string(scalar))
        .collect();
    compute_hash_str_64(&key)
}

impl<T> LazyHashCache<T> {
    /// Creates a cache that will compute the hash with the given function on
    /// first access.
    pub const fn new(compute: fn(&T) -> Hash64) -> Self {
        Self {
            state: parking_lot::const_mutex(HashState::Uninitialized(compute)),
        }
    }

    /// Returns the cached hash, computing it from `owner` if this is the
    /// first access.
    ///
    /// `owner` must be the value holding this cache.
    pub fn get_or_compute(&self, owner: &T) -> Hash64 {
        let mut state = self.state.lock();
        match *state {
            HashState::Computed(hash) => hash,
            HashState::Uninitialized(compute) => {
                let hash = compute(owner);
                log::trace!("Computed cached hash {}", hash);
                *state = HashState::Computed(hash);
                hash
            }
        }
    }

    /// Whether the hash has been computed yet.
    pub fn is_computed(&self) -> bool {
        matches!(*self.state.lock(), HashState::Computed(_))
    }
}

impl<T> Clone for LazyHashCache<T> {
    fn clone(&self) -> Self {
        Self {
            state: Mutex::new(*self.state.lock()),
        }
    }
}

impl<T> fmt::Debug for LazyHashCache<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("LazyHashCache")
            .field(&*self.state.lock())
            .finish()
    }
}

impl<T> Clone for HashState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for HashState<T> {}

impl<T> fmt::Debug for HashState<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uninitialized(_) => write!(f, "Uninitialized"),
            Self::Computed(hash) => write!(f, "Computed({})", hash),
        }
    }
}
