//! Serializable snapshots of an accumulator.

use crate::diagnostics::Diagnostics;
use crate::item::DiagnosticItem;
use serde::{Deserialize, Serialize};
use trailmark_config::DiagnosticsConfig;
use trailmark_context::PropagationContext;

/// A point-in-time copy of an accumulator's trace id and items.
///
/// Used for structured output and for handing diagnostics across a process
/// boundary, where [`into_diagnostics`](Report::into_diagnostics) rebuilds an
/// accumulator on the other side.
///
/// In JSON the keys are `TraceId` and `Items`, matching the item keys.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Report {
    /// The correlation identifier, possibly empty.
    pub trace_id: String,
    /// Items in insertion order.
    pub items: Vec<DiagnosticItem>,
}

impl Report {
    /// Returns the number of items with the error level.
    pub fn error_count(&self) -> usize {
        self.items
            .iter()
            .filter(|item| item.level() == crate::DiagnosticLevel::Error)
            .count()
    }

    /// Rebuilds an accumulator carrying this report's trace id.
    ///
    /// A report does not record options, so the accumulator gets
    /// [`DiagnosticsConfig::default`]. Use
    /// [`into_diagnostics_with_config`](Self::into_diagnostics_with_config)
    /// to keep a legacy merge or unprefixed rendering.
    pub fn into_diagnostics(self) -> Diagnostics {
        self.into_diagnostics_with_config(DiagnosticsConfig::default())
    }

    /// Rebuilds an accumulator carrying this report's trace id and `config`.
    ///
    /// Items go through the usual deduplication. An empty trace id is
    /// replaced by a fresh one.
    pub fn into_diagnostics_with_config(self, config: DiagnosticsConfig) -> Diagnostics {
        let context = PropagationContext::background().with_trace_id(self.trace_id);
        let mut diags = Diagnostics::from_context_with_config(Some(context), config);
        for item in self.items {
            diags.add_item(item);
        }
        diags
    }
}

impl Diagnostics {
    /// Takes a snapshot of the trace id and items.
    pub fn report(&self) -> Report {
        Report {
            trace_id: self.trace_id().to_string(),
            items: self.stack().to_vec(),
        }
    }
}

impl From<&Diagnostics> for Report {
    fn from(diags: &Diagnostics) -> Self {
        diags.report()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use trailmark_config::MergePolicy;

    #[test]
    fn report_copies_stack() {
        let mut diags = Diagnostics::new();
        diags.add_info("boot");
        diags.add_error("disk full");

        let report = diags.report();
        assert_eq!(report.trace_id, diags.trace_id());
        assert_eq!(report.items, diags.stack());
        assert_eq!(report.error_count(), 1);
    }

    #[test]
    fn rebuild_keeps_trace_id_and_order() {
        let mut diags = Diagnostics::new();
        diags.add_warning("w");
        diags.add_trace("t");

        let rebuilt = diags.report().into_diagnostics();
        assert_eq!(rebuilt.trace_id(), diags.trace_id());
        assert_eq!(rebuilt.stack(), diags.stack());
        assert_eq!(rebuilt.context().unwrap().trace_id(), Some(diags.trace_id()));
    }

    #[test]
    fn rebuild_uses_default_config() {
        let config = DiagnosticsConfig {
            merge: MergePolicy::Legacy,
            render_trace_id: false,
        };
        let diags = Diagnostics::with_config(config);
        assert_eq!(
            *diags.report().into_diagnostics().config(),
            DiagnosticsConfig::default()
        );
    }

    #[test]
    fn rebuild_with_config_keeps_options() {
        let config = DiagnosticsConfig {
            merge: MergePolicy::Legacy,
            render_trace_id: false,
        };
        let mut diags = Diagnostics::with_config(config);
        diags.add_info("x");

        let rebuilt = diags.report().into_diagnostics_with_config(*diags.config());
        assert_eq!(*rebuilt.config(), config);
        assert_eq!(rebuilt.to_string(), "[Info] x\n");
    }

    #[test]
    fn json_keys_are_pascal_case() {
        let report = Report {
            trace_id: "abc".to_string(),
            items: Vec::new(),
        };
        assert_eq!(
            serde_json::to_string(&report).unwrap(),
            r#"{"TraceId":"abc","Items":[]}"#
        );
    }

    #[test]
    fn rebuild_dedups_items() {
        let report = Report {
            trace_id: "abc".to_string(),
            items: vec![
                DiagnosticItem::info("", "x"),
                DiagnosticItem::info("", "X"),
            ],
        };
        assert_eq!(report.into_diagnostics().len(), 1);
    }

    #[test]
    fn rebuild_with_empty_trace_id_generates_one() {
        let report = Report {
            trace_id: String::new(),
            items: Vec::new(),
        };
        assert!(!report.into_diagnostics().trace_id().is_empty());
    }
}
