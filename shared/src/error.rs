//! Error type shared by the page behaviors.

use thiserror::Error;

/// Failures a behavior can run into while touching the page.
///
/// None of these ever reach the reader; behaviors log them and carry on.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InteractionError {
    /// A stored or attribute theme value is neither `light` nor `dark`.
    #[error("unknown theme value `{0}`")]
    UnknownTheme(String),

    /// The durable store cannot be reached (disabled storage, sandboxed frame).
    #[error("preference store unavailable")]
    StoreUnavailable,

    /// Writing a preference was rejected, e.g. quota exceeded.
    #[error("failed to write preference `{key}`: {reason}")]
    StoreWrite {
        /// Key that was being written.
        key: String,
        /// Message reported by the store.
        reason: String,
    },

    /// An anchor `href` is not a usable CSS selector.
    #[error("invalid selector `{0}`")]
    InvalidSelector(String),
}

/// Shorthand used across the crate.
pub type Result<T> = std::result::Result<T, InteractionError>;
