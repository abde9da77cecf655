//! Error types for alias construction.

/// Errors raised when a pattern source does not compile.
///
/// Arises from a serialized alias list carrying its own pattern source, or
/// from [`crate::try_translate`] on a key the regex engine rejects.
#[derive(Debug, thiserror::Error)]
pub enum AliasError {
    #[error("invalid alias pattern '{source_text}': {message}")]
    InvalidPattern {
        source_text: String,
        message: String,
    },
}
