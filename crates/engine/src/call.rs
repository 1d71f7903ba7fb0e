//! The concrete argument arrangement handed to a callable.

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Positional values plus keyword values computed for one invocation.
///
/// Positional values follow the declared order of positional-only parameters. Keyword values
/// hold positional-or-keyword and keyword-only parameters under their declared names.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResolvedCall {
    positional: Vec<Value>,
    keywords: IndexMap<String, Value>,
}

impl ResolvedCall {
    /// Creates a resolved call from already-arranged parts.
    pub fn new(positional: Vec<Value>, keywords: IndexMap<String, Value>) -> Self {
        Self { positional, keywords }
    }

    pub(crate) fn push_positional(&mut self, value: Value) {
        self.positional.push(value);
    }

    pub(crate) fn insert_keyword(&mut self, name: impl Into<String>, value: Value) {
        self.keywords.insert(name.into(), value);
    }

    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    pub fn keywords(&self) -> &IndexMap<String, Value> {
        &self.keywords
    }

    pub fn positional_at(&self, index: usize) -> Option<&Value> {
        self.positional.get(index)
    }

    pub fn keyword(&self, name: &str) -> Option<&Value> {
        self.keywords.get(name)
    }

    /// Moves a positional value out, leaving `Value::Null` in its slot so later indices stay put.
    pub fn take_positional(&mut self, index: usize) -> Option<Value> {
        self.positional.get_mut(index).map(Value::take)
    }

    /// Removes a keyword value, preserving the order of the remaining entries.
    pub fn take_keyword(&mut self, name: &str) -> Option<Value> {
        self.keywords.shift_remove(name)
    }

    /// Deserializes a keyword value into `T`.
    ///
    /// Returns `Ok(None)` when no such keyword was resolved. Conversion failures are the
    /// callable's concern and are reported as-is.
    pub fn keyword_as<T: DeserializeOwned>(&self, name: &str) -> Result<Option<T>, serde_json::Error> {
        self.keywords.get(name).cloned().map(serde_json::from_value).transpose()
    }

    /// Total number of resolved values.
    pub fn len(&self) -> usize {
        self.positional.len() + self.keywords.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.keywords.is_empty()
    }

    pub fn into_parts(self) -> (Vec<Value>, IndexMap<String, Value>) {
        (self.positional, self.keywords)
    }
}
