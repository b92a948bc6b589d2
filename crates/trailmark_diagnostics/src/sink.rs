//! Thread-safe wrapper around a [`Diagnostics`] accumulator.

use crate::diagnostics::Diagnostics;
use crate::item::DiagnosticItem;
use crate::level::DiagnosticLevel;
use std::fmt;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A [`Diagnostics`] accumulator that can be shared between threads.
///
/// Every mutation takes the lock, so deduplication and insertion order hold
/// exactly as for a single-owner accumulator. The number of error items is
/// tracked atomically for `has_errors` checks without locking.
pub struct SharedDiagnostics {
    inner: Mutex<Diagnostics>,
    error_count: AtomicUsize,
}

impl SharedDiagnostics {
    /// Wraps an existing accumulator.
    pub fn new(diagnostics: Diagnostics) -> Self {
        let errors = diagnostics.errors().len();
        Self {
            inner: Mutex::new(diagnostics),
            error_count: AtomicUsize::new(errors),
        }
    }

    /// Records an informational note.
    pub fn add_info(&self, description: impl Into<String>) {
        self.add_item(DiagnosticItem::info("", description));
    }

    /// Records a warning.
    pub fn add_warning(&self, description: impl Into<String>) {
        self.add_item(DiagnosticItem::warning("", description));
    }

    /// Records an error using its display text as the description.
    pub fn add_error(&self, err: impl fmt::Display) {
        self.add_item(DiagnosticItem::error("", err.to_string()));
    }

    /// Records an error with a code.
    pub fn add_error_with_code(&self, code: impl Into<String>, err: impl fmt::Display) {
        self.add_item(DiagnosticItem::error(code, err.to_string()));
    }

    /// Records a trace breadcrumb.
    pub fn add_trace(&self, description: impl Into<String>) {
        self.add_item(DiagnosticItem::trace("", description));
    }

    /// Records a pre-built item unless an equivalent one is already present.
    pub fn add_item(&self, item: DiagnosticItem) {
        self.mutate(|diags| diags.add_item(item));
    }

    /// Merges a per-task accumulator into the shared one.
    pub fn append(&self, other: &Diagnostics) {
        self.mutate(|diags| diags.append(other));
    }

    /// Returns `true` if any error item was recorded.
    pub fn has_errors(&self) -> bool {
        self.error_count.load(Ordering::Relaxed) > 0
    }

    /// Returns the number of error items recorded so far.
    pub fn error_count(&self) -> usize {
        self.error_count.load(Ordering::Relaxed)
    }

    /// Runs `f` with read access to the accumulator.
    pub fn with<R>(&self, f: impl FnOnce(&Diagnostics) -> R) -> R {
        f(&*self.lock())
    }

    /// Returns a copy of the accumulator in its current state.
    pub fn snapshot(&self) -> Diagnostics {
        self.lock().clone()
    }

    /// Returns the correlation identifier.
    pub fn trace_id(&self) -> String {
        self.lock().trace_id().to_string()
    }

    /// Unwraps the accumulator.
    pub fn into_inner(self) -> Diagnostics {
        self.inner
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn mutate(&self, f: impl FnOnce(&mut Diagnostics)) {
        let mut diags = self.lock();
        let before = diags.len();
        f(&mut *diags);
        let added_errors = diags.stack()[before..]
            .iter()
            .filter(|item| item.level() == DiagnosticLevel::Error)
            .count();
        if added_errors > 0 {
            self.error_count.fetch_add(added_errors, Ordering::Relaxed);
        }
    }

    // The accumulator holds no invariants a panicking writer could break
    // half-way, so a poisoned lock is still usable.
    fn lock(&self) -> MutexGuard<'_, Diagnostics> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SharedDiagnostics {
    fn default() -> Self {
        Self::new(Diagnostics::new())
    }
}

impl From<Diagnostics> for SharedDiagnostics {
    fn from(diagnostics: Diagnostics) -> Self {
        Self::new(diagnostics)
    }
}
