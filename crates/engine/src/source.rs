//! Name-to-value lookups the resolver can read from.

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use indexmap::IndexMap;
use serde_json::Value;

/// A read-only mapping from parameter name to value.
///
/// Keys need not line up with any particular signature: the resolver only asks for the names it
/// needs and reports [`DataSource::keys`] when one is absent.
pub trait DataSource {
    /// Returns the value stored under `name`, if any.
    fn lookup(&self, name: &str) -> Option<&Value>;

    /// Every key present, in the mapping's own iteration order.
    fn keys(&self) -> Vec<String>;
}

impl<S: BuildHasher> DataSource for IndexMap<String, Value, S> {
    fn lookup(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }

    fn keys(&self) -> Vec<String> {
        IndexMap::keys(self).cloned().collect()
    }
}

impl<S: BuildHasher> DataSource for HashMap<String, Value, S> {
    fn lookup(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }

    fn keys(&self) -> Vec<String> {
        HashMap::keys(self).cloned().collect()
    }
}

impl DataSource for BTreeMap<String, Value> {
    fn lookup(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }

    fn keys(&self) -> Vec<String> {
        BTreeMap::keys(self).cloned().collect()
    }
}

impl DataSource for serde_json::Map<String, Value> {
    fn lookup(&self, name: &str) -> Option<&Value> {
        self.get(name)
    }

    fn keys(&self) -> Vec<String> {
        serde_json::Map::keys(self).cloned().collect()
    }
}

impl<T: DataSource + ?Sized> DataSource for &T {
    fn lookup(&self, name: &str) -> Option<&Value> {
        (**self).lookup(name)
    }

    fn keys(&self) -> Vec<String> {
        (**self).keys()
    }
}
