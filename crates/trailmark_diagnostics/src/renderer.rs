//! Rendering backends for accumulated diagnostics.

use crate::diagnostics::Diagnostics;

/// Formats a whole accumulator into a string for a logging sink.
pub trait DiagnosticRenderer {
    /// Renders the accumulator.
    fn render(&self, diagnostics: &Diagnostics) -> String;
}

/// Renders one line per item, each terminated by `\n`:
///
/// ```text
/// [3f2c…][Info] boot
/// [3f2c…][Warning] W1: low disk
/// ```
///
/// The `[<trace id>]` prefix is dropped when the trace id is empty or when
/// the renderer is built with `prefix_trace_id = false`.
pub struct TextRenderer {
    /// Whether to prefix each line with the bracketed trace id.
    pub prefix_trace_id: bool,
}

impl TextRenderer {
    /// Creates a new text renderer.
    pub fn new(prefix_trace_id: bool) -> Self {
        Self { prefix_trace_id }
    }
}

impl Default for TextRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

impl DiagnosticRenderer for TextRenderer {
    fn render(&self, diagnostics: &Diagnostics) -> String {
        let trace_id = diagnostics.trace_id();
        let prefixed = self.prefix_trace_id && !trace_id.is_empty();

        let mut out = String::new();
        for item in diagnostics.stack() {
            if prefixed {
                out.push_str(&format!("[{trace_id}]{item}\n"));
            } else {
                out.push_str(&format!("{item}\n"));
            }
        }
        out
    }
}

/// Renders a [`Report`](crate::Report) snapshot as JSON.
#[derive(Default)]
pub struct JsonRenderer {
    /// Whether to pretty-print the output.
    pub pretty: bool,
}

impl JsonRenderer {
    /// Creates a new JSON renderer.
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl JsonRenderer {
    /// Serializes a snapshot of `diagnostics`, surfacing serializer errors.
    pub fn try_render(&self, diagnostics: &Diagnostics) -> Result<String, serde_json::Error> {
        let report = diagnostics.report();
        if self.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        }
    }
}

impl DiagnosticRenderer for JsonRenderer {
    fn render(&self, diagnostics: &Diagnostics) -> String {
        self.try_render(diagnostics)
            .expect("a report holds only strings and unit enum variants")
    }
}
