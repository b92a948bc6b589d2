//! Configuration types deserialized from `trailmark.toml`.

use serde::Deserialize;

/// The top-level configuration file.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Accumulator options.
    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

/// Options applied to a diagnostics accumulator at construction.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DiagnosticsConfig {
    /// How another accumulator's items are merged in.
    #[serde(default)]
    pub merge: MergePolicy,
    /// Whether rendered lines are prefixed with `[<trace id>]`.
    #[serde(default = "default_render_trace_id")]
    pub render_trace_id: bool,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            merge: MergePolicy::default(),
            render_trace_id: default_render_trace_id(),
        }
    }
}

fn default_render_trace_id() -> bool {
    true
}

/// Strategy used when merging one accumulator into another.
#[derive(Clone, Copy, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MergePolicy {
    /// Order-preserving union; each incoming item is checked on its own.
    #[default]
    Union,
    /// Early-abort merge kept for compatibility with older consumers.
    ///
    /// Stops at the first duplicate and may copy an incoming item once per
    /// non-matching existing item seen before that point.
    Legacy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = DiagnosticsConfig::default();
        assert_eq!(config.merge, MergePolicy::Union);
        assert!(config.render_trace_id);
    }

    #[test]
    fn merge_policy_lowercase_tokens() {
        let config: DiagnosticsConfig = toml::from_str("merge = \"legacy\"").unwrap();
        assert_eq!(config.merge, MergePolicy::Legacy);
        assert!(config.render_trace_id);
    }
}
