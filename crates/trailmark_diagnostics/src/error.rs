//! Error types for parsing diagnostic values.

/// A level token did not name one of the four diagnostic levels.
///
/// Only returned by the strict [`FromStr`](std::str::FromStr) parser; serde
/// deserialization falls back to `Info` instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown diagnostic level '{0}'")]
pub struct ParseLevelError(pub String);
