//! Correlation-id propagation handle shared along a call chain.
//!
//! A [`PropagationContext`] is an immutable key/value map. Deriving a child
//! with [`PropagationContext::with_value`] never touches the parent, so a
//! context can be forwarded to downstream collaborators freely.

#![warn(missing_docs)]

pub mod carrier;
pub mod context;

pub use carrier::{MetadataCarrier, MetadataExtractor};
pub use context::{PropagationContext, TRACE_ID_KEY};
