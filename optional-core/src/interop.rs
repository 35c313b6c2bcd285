//! Adapt a value together with a presence flag into an [`Optional`].
//!
//! ```
//! # use std::collections::HashMap;
//! # use optional_core::{from_map, Optional};
//! let map = HashMap::from([("a", 1)]);
//! assert_eq!(Optional::some(1), from_map(&map, "a"));
//! assert_eq!(0, from_map(&map, "b").or_default(0));
//! ```
use std::borrow::Borrow;
use std::collections::{BTreeMap, HashMap};
use std::hash::{BuildHasher, Hash};

use crate::Optional;

/// A mapping that can be searched by key without being modified.
pub trait Lookup<Q: ?Sized> {
    type Value;

    fn lookup(&self, key: &Q) -> Option<&Self::Value>;
}

impl<K, V, S, Q> Lookup<Q> for HashMap<K, V, S>
where
    K: Eq + Hash + Borrow<Q>,
    Q: ?Sized + Eq + Hash,
    S: BuildHasher,
{
    type Value = V;

    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

impl<K, V, Q> Lookup<Q> for BTreeMap<K, V>
where
    K: Ord + Borrow<Q>,
    Q: ?Sized + Ord,
{
    type Value = V;

    fn lookup(&self, key: &Q) -> Option<&V> {
        self.get(key)
    }
}

/// `Some(value)` if `ok` is true, otherwise `None`.
/// If `ok` is `false` the value is dropped.
pub fn from<T>(value: T, ok: bool) -> Optional<T> {
    match ok {
        true => Optional::some(value),
        false => Optional::none(),
    }
}

/// Call `f` once and turn the result into an `Optional`.
pub fn from_func<T, F>(f: F) -> Optional<T>
where
    F: FnOnce() -> (T, bool),
{
    let (value, ok) = f();
    from(value, ok)
}

/// The value stored under `key` in `map`, or an empty `Optional`
/// if there is no such entry.
pub fn from_map<M, Q>(map: &M, key: &Q) -> Optional<M::Value>
where
    M: Lookup<Q>,
    M::Value: Clone,
    Q: ?Sized,
{
    map.lookup(key).cloned().into()
}

#[cfg(test)]
mod test {
    use std::cell::Cell;

    use super::*;

    #[test]
    fn from_ok() {
        assert_eq!(Optional::some("x"), from("x", true));
    }

    #[test]
    fn from_zero_value() {
        assert_eq!(Optional::some(0u32), from(0u32, true));
        assert_eq!(Optional::<u32>::none(), from(0u32, false));
    }

    #[test]
    fn from_not_ok() {
        let opt = from(0u8, false);
        assert!(opt.is_none());
        assert_eq!(None, opt.value());
        assert_eq!(4, opt.or_default(4));
    }

    #[test]
    fn from_func_calls_once() {
        let calls = Cell::new(0);
        let opt = from_func(|| {
            calls.set(calls.get() + 1);
            (10, true)
        });
        assert_eq!(Optional::some(10), opt);
        assert_eq!(1, calls.get());

        let opt = from_func(|| {
            calls.set(calls.get() + 1);
            (10, false)
        });
        assert_eq!(Optional::none(), opt);
        assert_eq!(2, calls.get());
    }

    #[test]
    fn hash_map() {
        let map = HashMap::from([(String::from("a"), 1)]);
        assert_eq!(Optional::some(1), from_map(&map, "a"));
        assert_eq!(Optional::none(), from_map(&map, "b"));
        assert_eq!(1, map.len());
    }

    #[test]
    fn btree_map() {
        let map = BTreeMap::from([(1u32, "one"), (2, "two")]);
        assert_eq!(Optional::some("two"), from_map(&map, &2));
        assert!(from_map(&map, &3).is_none());
        assert_eq!(2, map.len());
    }

    #[test]
    fn stored_zero_value_is_present() {
        let map = HashMap::from([("zero", 0)]);
        let opt = from_map(&map, "zero");
        assert!(opt.is_some());
        assert_eq!(0, opt.or_default(99));
    }
}
