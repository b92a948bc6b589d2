//! Forwarding accumulated items to the `tracing` facade.

use crate::diagnostics::Diagnostics;
use crate::item::DiagnosticItem;
use crate::level::DiagnosticLevel;

impl Diagnostics {
    /// Emits every item as a `tracing` event at the matching level.
    ///
    /// Each event carries `trace_id` and `code` fields; the description is
    /// the event message. Which events are kept is up to the installed
    /// subscriber.
    pub fn emit(&self) {
        for item in self.stack() {
            emit_item(self.trace_id(), item);
        }
    }
}

fn emit_item(trace_id: &str, item: &DiagnosticItem) {
    let code = item.code();
    let description = item.description();
    match item.level() {
        DiagnosticLevel::Error => {
            tracing::error!(trace_id = %trace_id, code = %code, "{description}")
        }
        DiagnosticLevel::Warning => {
            tracing::warn!(trace_id = %trace_id, code = %code, "{description}")
        }
        DiagnosticLevel::Info => {
            tracing::info!(trace_id = %trace_id, code = %code, "{description}")
        }
        DiagnosticLevel::Trace => {
            tracing::trace!(trace_id = %trace_id, code = %code, "{description}")
        }
    }
}
