use std::hash::BuildHasherDefault;
use indexmap::IndexMap;
use rustc_hash::FxHasher;


/// Use indexmap for fast lookups and rustc_hash for fast hashing
/// Insertion order keeps graph iteration and search tie-breaking deterministic
pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Set of node indices already finalized by a search
pub(crate) type FxHashSet<T> = rustc_hash::FxHashSet<T>;
