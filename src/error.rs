//! Error types for tola-jsx.
//!
//! The default factory path never fails. Errors only come from the opt-in
//! nesting limit and from selector parsing.

use thiserror::Error;

/// Errors that can occur while building nodes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JsxError {
    /// Child sequences were nested deeper than the configured limit
    #[error("children nested deeper than the configured limit of {limit}")]
    NestingTooDeep {
        /// Configured maximum depth
        limit: usize,
    },

    /// Selector string could not be split into tag, id and classes
    #[error("invalid selector: {0:?}")]
    InvalidSelector(String),
}

/// Result type alias for fallible factory operations.
pub type JsxResult<T> = Result<T, JsxError>;

impl JsxError {
    /// Create a selector error from the offending input.
    pub fn invalid_selector(sel: impl Into<String>) -> Self {
        Self::InvalidSelector(sel.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = JsxError::NestingTooDeep { limit: 8 };
        assert_eq!(
            err.to_string(),
            "children nested deeper than the configured limit of 8"
        );

        let err = JsxError::invalid_selector("#main");
        assert_eq!(err.to_string(), "invalid selector: \"#main\"");
    }

    #[test]
    fn test_error_is_send_sync() {
        static_assertions::assert_impl_all!(JsxError: Send, Sync, std::error::Error);
    }
}
