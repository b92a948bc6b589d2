//! Diagnostic levels and their text tokens.

use crate::error::ParseLevelError;
use serde::de::{self, IgnoredAny, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// The level of a diagnostic item.
///
/// Serializes to the capitalized variant name (`"Info"`, `"Warning"`,
/// `"Error"`, `"Trace"`). Deserialization never fails: any unrecognized
/// token or non-string value yields [`Info`](DiagnosticLevel::Info). Use
/// [`str::parse`] for a strict conversion.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize)]
pub enum DiagnosticLevel {
    /// An informational note.
    #[default]
    Info,
    /// A potential problem that did not stop the operation.
    Warning,
    /// A failure recorded without interrupting control flow.
    Error,
    /// A breadcrumb describing what the operation did.
    Trace,
}

impl DiagnosticLevel {
    /// All levels in declaration order.
    pub const ALL: [DiagnosticLevel; 4] = [
        DiagnosticLevel::Info,
        DiagnosticLevel::Warning,
        DiagnosticLevel::Error,
        DiagnosticLevel::Trace,
    ];

    /// Returns the capitalized text token for this level.
    pub fn as_str(self) -> &'static str {
        match self {
            DiagnosticLevel::Info => "Info",
            DiagnosticLevel::Warning => "Warning",
            DiagnosticLevel::Error => "Error",
            DiagnosticLevel::Trace => "Trace",
        }
    }

    /// Parses a token without failing; unknown tokens become `Info`.
    pub fn from_token_lossy(token: &str) -> Self {
        token.parse().unwrap_or_default()
    }
}

impl fmt::Display for DiagnosticLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DiagnosticLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DiagnosticLevel::ALL
            .into_iter()
            .find(|level| level.as_str() == s)
            .ok_or_else(|| ParseLevelError(s.to_string()))
    }
}

impl<'de> Deserialize<'de> for DiagnosticLevel {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct LenientLevel;

        impl<'de> Visitor<'de> for LenientLevel {
            type Value = DiagnosticLevel;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a diagnostic level token")
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(DiagnosticLevel::from_token_lossy(v))
            }

            fn visit_bool<E: de::Error>(self, _: bool) -> Result<Self::Value, E> {
                Ok(DiagnosticLevel::Info)
            }

            fn visit_i64<E: de::Error>(self, _: i64) -> Result<Self::Value, E> {
                Ok(DiagnosticLevel::Info)
            }

            fn visit_u64<E: de::Error>(self, _: u64) -> Result<Self::Value, E> {
                Ok(DiagnosticLevel::Info)
            }

            fn visit_f64<E: de::Error>(self, _: f64) -> Result<Self::Value, E> {
                Ok(DiagnosticLevel::Info)
            }

            fn visit_unit<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(DiagnosticLevel::Info)
            }

            fn visit_none<E: de::Error>(self) -> Result<Self::Value, E> {
                Ok(DiagnosticLevel::Info)
            }

            fn visit_seq<A: de::SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
                while seq.next_element::<IgnoredAny>()?.is_some() {}
                Ok(DiagnosticLevel::Info)
            }

            fn visit_map<A: de::MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                while map.next_entry::<IgnoredAny, IgnoredAny>()?.is_some() {}
                Ok(DiagnosticLevel::Info)
            }
        }

        deserializer.deserialize_any(LenientLevel)
    }
}
