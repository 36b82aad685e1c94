use std::collections::{BTreeMap, HashMap};
use std::hash::Hash;

/// Capability contract for a mutable key-value store, with a fill-on-miss
/// lookup layered on top.
///
/// The store itself belongs to the caller; implementations are provided for
/// [`HashMap`] and [`BTreeMap`], and any other mapping only needs the three
/// primitive operations to participate.
pub trait KeyValueStore<K, V> {
    fn contains(&self, key: &K) -> bool;

    fn get(&self, key: &K) -> Option<&V>;

    fn insert(&mut self, key: K, value: V);

    /// Returns the value stored under `key`, building and storing it first if
    /// absent. `build` runs exactly once on a miss and never on a hit; the
    /// store is only mutated on a miss. There is no expiration or eviction.
    ///
    /// # Example
    /// ```
    /// use std::collections::HashMap;
    /// use lazyseq::cache::KeyValueStore;
    /// let mut cache: HashMap<u32, String> = HashMap::new();
    /// let value = cache.get_or_build(10, || "ten".to_owned());
    /// assert_eq!(value, "ten");
    /// ```
    fn get_or_build<F>(&mut self, key: K, build: F) -> &V
    where
        K: Clone,
        F: FnOnce() -> V,
    {
        if !self.contains(&key) {
            let value = build();
            self.insert(key.clone(), value);
        }
        self.get(&key).expect("value stored on miss")
    }
}

impl<K: Eq + Hash, V> KeyValueStore<K, V> for HashMap<K, V> {
    fn contains(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn get(&self, key: &K) -> Option<&V> {
        HashMap::get(self, key)
    }

    fn insert(&mut self, key: K, value: V) {
        HashMap::insert(self, key, value);
    }
}

impl<K: Ord, V> KeyValueStore<K, V> for BTreeMap<K, V> {
    fn contains(&self, key: &K) -> bool {
        self.contains_key(key)
    }

    fn get(&self, key: &K) -> Option<&V> {
        BTreeMap::get(self, key)
    }

    fn insert(&mut self, key: K, value: V) {
        BTreeMap::insert(self, key, value);
    }
}
