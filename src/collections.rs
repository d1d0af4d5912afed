use std::hash::BuildHasherDefault;
use indexmap::IndexSet;
use rustc_hash::FxHasher;


/// Insertion ordered set with fast hashing, the index doubles as a dense id
pub(crate) type FxIndexSet<T> = IndexSet<T, BuildHasherDefault<FxHasher>>;
