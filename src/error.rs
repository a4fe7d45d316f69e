//! Error types

/// Errors raised while transforming a colour
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BladeError {
    #[error("invalid color format: {0:?} (expected 6 hex digits, optionally prefixed with '#')")]
    InvalidColorFormat(String),
}
