//! The immutable propagation context.

use std::collections::BTreeMap;
use std::sync::Arc;

/// The well-known key under which the correlation identifier travels.
pub const TRACE_ID_KEY: &str = "trace-id";

/// An immutable, cheaply clonable map of propagated values.
///
/// Clones share the same backing storage. Every "mutation" returns a new
/// context, leaving the original (and every clone of it) unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PropagationContext {
    values: Arc<BTreeMap<String, String>>,
}

impl PropagationContext {
    /// Returns an empty root context.
    pub fn background() -> Self {
        Self::default()
    }

    pub(crate) fn from_map(values: BTreeMap<String, String>) -> Self {
        Self {
            values: Arc::new(values),
        }
    }

    /// Derives a child context carrying `value` under `key`.
    ///
    /// An existing value for the same key is shadowed in the child only.
    pub fn with_value(&self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut values = (*self.values).clone();
        values.insert(key.into(), value.into());
        Self {
            values: Arc::new(values),
        }
    }

    /// Derives a child context carrying `trace_id` under [`TRACE_ID_KEY`].
    pub fn with_trace_id(&self, trace_id: impl Into<String>) -> Self {
        self.with_value(TRACE_ID_KEY, trace_id)
    }

    /// Looks up the value stored under `key`.
    pub fn value(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Returns the correlation identifier, if one is carried.
    pub fn trace_id(&self) -> Option<&str> {
        self.value(TRACE_ID_KEY)
    }

    /// Iterates over all carried entries in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Returns `true` if this context carries no values.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Returns `true` if both handles share the same backing storage.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.values, &other.values)
    }
}
