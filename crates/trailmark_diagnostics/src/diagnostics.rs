//! The per-operation diagnostic accumulator.

use crate::item::DiagnosticItem;
use crate::level::DiagnosticLevel;
use crate::merge;
use crate::renderer::{DiagnosticRenderer, TextRenderer};
use std::fmt;
use trailmark_config::DiagnosticsConfig;
use trailmark_context::PropagationContext;
use uuid::Uuid;

/// An ordered, deduplicating accumulator of diagnostic items for one
/// logical operation.
///
/// Create one at the start of an operation, record observations as it
/// proceeds, then query or render the result. Items are appended only when
/// no existing item [matches](DiagnosticItem::matches) them, and are never
/// reordered or removed.
///
/// The accumulator is not synchronized. Use one per task and merge with
/// [`append`](Self::append), or wrap it in
/// [`SharedDiagnostics`](crate::SharedDiagnostics).
#[derive(Clone, Debug)]
pub struct Diagnostics {
    trace_id: String,
    context: Option<PropagationContext>,
    stack: Vec<DiagnosticItem>,
    config: DiagnosticsConfig,
}

impl Diagnostics {
    /// Creates an accumulator with a fresh trace id and a context carrying it.
    pub fn new() -> Self {
        Self::with_config(DiagnosticsConfig::default())
    }

    /// Like [`new`](Self::new), with explicit options.
    pub fn with_config(config: DiagnosticsConfig) -> Self {
        let trace_id = fresh_trace_id();
        let context = PropagationContext::background().with_trace_id(trace_id.as_str());
        Self {
            trace_id,
            context: Some(context),
            stack: Vec::new(),
            config,
        }
    }

    /// Creates an accumulator from an inbound propagation context.
    ///
    /// - A context carrying a non-empty trace id: the id and the context are
    ///   reused as-is.
    /// - A context without one: a fresh id is generated and a child context
    ///   carrying it is derived.
    /// - No context: a fresh id is generated and the accumulator has no
    ///   context at all.
    pub fn from_context(context: Option<PropagationContext>) -> Self {
        Self::from_context_with_config(context, DiagnosticsConfig::default())
    }

    /// Like [`from_context`](Self::from_context), with explicit options.
    pub fn from_context_with_config(
        context: Option<PropagationContext>,
        config: DiagnosticsConfig,
    ) -> Self {
        let (trace_id, context) = match context {
            None => (fresh_trace_id(), None),
            Some(ctx) => {
                let inherited = ctx
                    .trace_id()
                    .filter(|id| !id.is_empty())
                    .map(str::to_string);
                match inherited {
                    Some(id) => (id, Some(ctx)),
                    None => {
                        let id = fresh_trace_id();
                        let derived = ctx.with_trace_id(id.as_str());
                        (id, Some(derived))
                    }
                }
            }
        };

        Self {
            trace_id,
            context,
            stack: Vec::new(),
            config,
        }
    }

    /// Records an informational note.
    pub fn add_info(&mut self, description: impl Into<String>) {
        self.add_item(DiagnosticItem::info("", description));
    }

    /// Records a warning.
    pub fn add_warning(&mut self, description: impl Into<String>) {
        self.add_item(DiagnosticItem::warning("", description));
    }

    /// Records an error using its display text as the description.
    pub fn add_error(&mut self, err: impl fmt::Display) {
        self.add_item(DiagnosticItem::error("", err.to_string()));
    }

    /// Records an error with a code.
    pub fn add_error_with_code(&mut self, code: impl Into<String>, err: impl fmt::Display) {
        self.add_item(DiagnosticItem::error(code, err.to_string()));
    }

    /// Records a trace breadcrumb.
    pub fn add_trace(&mut self, description: impl Into<String>) {
        self.add_item(DiagnosticItem::trace("", description));
    }

    /// Records a pre-built item unless an equivalent one is already present.
    pub fn add_item(&mut self, item: DiagnosticItem) {
        if self.stack.iter().any(|existing| existing.matches(&item)) {
            return;
        }
        self.stack.push(item);
    }

    /// Merges another accumulator's items into this one using the configured
    /// [`MergePolicy`](trailmark_config::MergePolicy).
    ///
    /// The other accumulator's trace id and context are ignored.
    pub fn append(&mut self, other: &Diagnostics) {
        merge::merge_into(&mut self.stack, &other.stack, self.config.merge);
    }

    /// Replaces the trace id. An empty id drops the `[<trace id>]` prefix
    /// from rendered lines. The propagation context is left untouched.
    pub fn set_trace_id(&mut self, trace_id: impl Into<String>) {
        self.trace_id = trace_id.into();
    }

    /// Returns `true` if any error item was recorded.
    pub fn has_errors(&self) -> bool {
        self.has_level(DiagnosticLevel::Error)
    }

    /// Returns `true` if any warning item was recorded.
    pub fn has_warnings(&self) -> bool {
        self.has_level(DiagnosticLevel::Warning)
    }

    /// Error items formatted as `error: <description>` or
    /// `error <code>: <description>`, in stack order.
    pub fn errors(&self) -> Vec<String> {
        self.levelled(DiagnosticLevel::Error)
            .map(|item| with_prefix("error", item))
            .collect()
    }

    /// Warning items formatted as `warning: <description>` or
    /// `warning <code>: <description>`, in stack order.
    pub fn warnings(&self) -> Vec<String> {
        self.levelled(DiagnosticLevel::Warning)
            .map(|item| with_prefix("warning", item))
            .collect()
    }

    /// Raw descriptions of info items, in stack order.
    pub fn info(&self) -> Vec<String> {
        self.levelled(DiagnosticLevel::Info)
            .map(|item| item.description().to_string())
            .collect()
    }

    /// Trace items formatted as `trace: <description>`, in stack order.
    /// Codes are not shown.
    pub fn trace(&self) -> Vec<String> {
        self.levelled(DiagnosticLevel::Trace)
            .map(|item| format!("trace: {}", item.description()))
            .collect()
    }

    /// All recorded items in insertion order.
    pub fn stack(&self) -> &[DiagnosticItem] {
        &self.stack
    }

    /// The correlation identifier.
    pub fn trace_id(&self) -> &str {
        &self.trace_id
    }

    /// The propagation handle to forward downstream, if one exists.
    pub fn context(&self) -> Option<&PropagationContext> {
        self.context.as_ref()
    }

    /// The options this accumulator was built with.
    pub fn config(&self) -> &DiagnosticsConfig {
        &self.config
    }

    /// Number of recorded items.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Returns `true` if nothing was recorded.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    fn has_level(&self, level: DiagnosticLevel) -> bool {
        self.stack.iter().any(|item| item.level() == level)
    }

    fn levelled(&self, level: DiagnosticLevel) -> impl Iterator<Item = &DiagnosticItem> {
        self.stack.iter().filter(move |item| item.level() == level)
    }
}

impl Default for Diagnostics {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Diagnostics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let renderer = TextRenderer::new(self.config.render_trace_id);
        f.write_str(&renderer.render(self))
    }
}

fn fresh_trace_id() -> String {
    Uuid::new_v4().to_string()
}

fn with_prefix(prefix: &str, item: &DiagnosticItem) -> String {
    if item.has_code() {
        format!("{prefix} {}: {}", item.code(), item.description())
    } else {
        format!("{prefix}: {}", item.description())
    }
}
