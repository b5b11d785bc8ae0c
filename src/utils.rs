use fnv::FnvHasher;
use std::{
    collections::HashSet,
    hash::{BuildHasherDefault, Hash}
};

pub type FnvHashSet<T> = HashSet<T, BuildHasherDefault<FnvHasher>>;

/// Construct a hash set with the specified capacity. The hashing algorithm is much faster than the default
/// on short keys such as integer coordinates.
/// Iteration order is a pure function of the inserted keys (no per process random seed).
pub fn fnv_hashset<T: Hash + Eq>(capacity: usize) -> FnvHashSet<T> {
    let fnv = BuildHasherDefault::<FnvHasher>::default();
    HashSet::<T, _>::with_capacity_and_hasher(capacity, fnv)
}

/// Collect any iterator into an fnv hashed set, sized by the iterator's lower size hint.
pub fn fnv_hashset_from<T, I>(items: I) -> FnvHashSet<T>
    where T: Hash + Eq,
          I: IntoIterator<Item = T>
{
    let iter = items.into_iter();
    let mut set = fnv_hashset(iter.size_hint().0);
    set.extend(iter);
    set
}
