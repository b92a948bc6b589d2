//! Strategies for merging one item stack into another.

use crate::item::DiagnosticItem;
use trailmark_config::MergePolicy;

/// Merges `incoming` into `stack` according to `policy`.
pub fn merge_into(
    stack: &mut Vec<DiagnosticItem>,
    incoming: &[DiagnosticItem],
    policy: MergePolicy,
) {
    match policy {
        MergePolicy::Union => union(stack, incoming),
        MergePolicy::Legacy => legacy(stack, incoming),
    }
}

/// Appends every incoming item that does not match one already present,
/// in incoming order.
pub fn union(stack: &mut Vec<DiagnosticItem>, incoming: &[DiagnosticItem]) {
    for item in incoming {
        if !stack.iter().any(|existing| existing.matches(item)) {
            stack.push(item.clone());
        }
    }
}

/// Compatibility merge.
///
/// Walks the items present before the merge; for each, walks `incoming`.
/// The first matching pair aborts the whole merge. Every non-matching pair
/// copies the incoming item, so an item can land more than once. Nothing is
/// merged into an empty stack.
pub fn legacy(stack: &mut Vec<DiagnosticItem>, incoming: &[DiagnosticItem]) {
    let existing = stack.len();
    for idx in 0..existing {
        for item in incoming {
            if stack[idx].matches(item) {
                return;
            }
            stack.push(item.clone());
        }
    }
}
