//! Per-operation accumulation of leveled diagnostic messages.
//!
//! A [`Diagnostics`] accumulator collects [`DiagnosticItem`]s (info, warning,
//! error and trace observations) without interrupting control flow. Items are
//! deduplicated on insert and kept in insertion order. Every accumulator
//! carries a trace identifier, taken from an inbound
//! [`PropagationContext`](trailmark_context::PropagationContext) or freshly
//! generated, so its rendered output can be correlated across a call chain.
//!
//! [`SharedDiagnostics`] wraps an accumulator for use from several threads,
//! and the [`DiagnosticRenderer`] implementations format one for text or
//! JSON sinks.

#![warn(missing_docs)]

pub mod diagnostics;
pub mod emit;
pub mod error;
pub mod item;
pub mod level;
pub mod merge;
pub mod renderer;
pub mod report;
pub mod sink;

pub use diagnostics::Diagnostics;
pub use error::ParseLevelError;
pub use item::DiagnosticItem;
pub use level::DiagnosticLevel;
pub use renderer::{DiagnosticRenderer, JsonRenderer, TextRenderer};
pub use report::Report;
pub use sink::SharedDiagnostics;
pub use trailmark_config::{DiagnosticsConfig, MergePolicy};
pub use trailmark_context::{PropagationContext, TRACE_ID_KEY};
