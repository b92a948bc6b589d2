//! Conversion between a [`PropagationContext`] and flat key/value metadata.
//!
//! Transports that forward the correlation identifier (HTTP headers, RPC
//! envelope metadata) usually carry a `Vec<(String, String)>`. These
//! wrappers inject into and extract from such a list.

use crate::context::PropagationContext;
use std::collections::BTreeMap;

/// Carrier for injecting context values into outgoing metadata.
pub struct MetadataCarrier<'a>(pub &'a mut Vec<(String, String)>);

impl MetadataCarrier<'_> {
    /// Sets a single entry, replacing an existing one with the same key.
    pub fn set(&mut self, key: &str, value: String) {
        if let Some(entry) = self.0.iter_mut().find(|(k, _)| k == key) {
            entry.1 = value;
        } else {
            self.0.push((key.to_string(), value));
        }
    }

    /// Writes every entry of `ctx` into the metadata.
    pub fn inject(&mut self, ctx: &PropagationContext) {
        for (key, value) in ctx.iter() {
            self.set(key, value.to_string());
        }
    }
}

/// Extractor for reading context values from incoming metadata.
pub struct MetadataExtractor<'a>(pub &'a [(String, String)]);

impl MetadataExtractor<'_> {
    /// Returns the first value stored under `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Returns every key present in the metadata.
    pub fn keys(&self) -> Vec<&str> {
        self.0.iter().map(|(k, _)| k.as_str()).collect()
    }

    /// Rebuilds a context from the metadata. The first occurrence of a key wins.
    pub fn extract(&self) -> PropagationContext {
        let mut values = BTreeMap::new();
        for (key, value) in self.0 {
            values.entry(key.clone()).or_insert_with(|| value.clone());
        }
        PropagationContext::from_map(values)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::TRACE_ID_KEY;

    #[test]
    fn carrier_replaces_existing_key() {
        let mut metadata = vec![(TRACE_ID_KEY.to_string(), "old".to_string())];
        let mut carrier = MetadataCarrier(&mut metadata);

        carrier.set(TRACE_ID_KEY, "new".to_string());

        assert_eq!(metadata.len(), 1);
        assert_eq!(metadata[0].1, "new");
    }

    #[test]
    fn inject_writes_all_entries() {
        let ctx = PropagationContext::background()
            .with_trace_id("abc")
            .with_value("tenant", "acme");
        let mut metadata = vec![("content-type".to_string(), "json".to_string())];

        MetadataCarrier(&mut metadata).inject(&ctx);

        assert_eq!(metadata.len(), 3);
        assert_eq!(MetadataExtractor(&metadata).get(TRACE_ID_KEY), Some("abc"));
    }

    #[test]
    fn extract_roundtrips_trace_id() {
        let ctx = PropagationContext::background().with_trace_id("abc");
        let mut metadata = Vec::new();
        MetadataCarrier(&mut metadata).inject(&ctx);

        let back = MetadataExtractor(&metadata).extract();
        assert_eq!(back.trace_id(), Some("abc"));
        assert_eq!(back, ctx);
    }

    #[test]
    fn extract_first_occurrence_wins() {
        let metadata = vec![
            (TRACE_ID_KEY.to_string(), "first".to_string()),
            (TRACE_ID_KEY.to_string(), "second".to_string()),
        ];
        let ctx = MetadataExtractor(&metadata).extract();
        assert_eq!(ctx.trace_id(), Some("first"));
    }

    #[test]
    fn extract_keeps_every_distinct_key() {
        let metadata = vec![
            ("tenant".to_string(), "acme".to_string()),
            (TRACE_ID_KEY.to_string(), "abc".to_string()),
            ("tenant".to_string(), "other".to_string()),
            ("region".to_string(), "eu".to_string()),
        ];
        let ctx = MetadataExtractor(&metadata).extract();
        let entries: Vec<_> = ctx.iter().collect();
        assert_eq!(
            entries,
            vec![("region", "eu"), ("tenant", "acme"), (TRACE_ID_KEY, "abc")]
        );
    }

    #[test]
    fn extract_empty_metadata() {
        let metadata: Vec<(String, String)> = Vec::new();
        let extractor = MetadataExtractor(&metadata);
        assert!(extractor.keys().is_empty());
        assert!(extractor.extract().is_empty());
    }
}
