//! Failures while reading `trailmark.toml`.

/// Why accumulator options could not be loaded.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// `trailmark.toml` is missing or unreadable.
    #[error("cannot read trailmark.toml: {0}")]
    IoError(#[from] std::io::Error),

    /// The file is not valid TOML, or names an unknown key or merge policy.
    #[error("invalid trailmark.toml: {0}")]
    ParseError(String),
}
