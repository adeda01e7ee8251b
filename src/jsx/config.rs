//! Factory configuration.

/// Depth limit used by [`JsxConfig::STRICT`].
pub const STRICT_MAX_DEPTH: usize = 64;

/// Configuration for [`super::JsxFactory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsxConfig {
    /// Maximum nesting of child lists accepted by the fallible entry points.
    ///
    /// The top-level children sit at depth 0. `None` means unbounded.
    pub max_depth: Option<usize>,
    /// Build single plain-text children in text-shortcut form.
    pub text_shortcut: bool,
}

impl JsxConfig {
    /// Unbounded nesting, text shortcut on.
    pub const DEFAULT: Self = Self {
        max_depth: None,
        text_shortcut: true,
    };

    /// Nesting capped at [`STRICT_MAX_DEPTH`], text shortcut on.
    pub const STRICT: Self = Self {
        max_depth: Some(STRICT_MAX_DEPTH),
        text_shortcut: true,
    };

    /// Create a new config.
    pub fn new(max_depth: Option<usize>, text_shortcut: bool) -> Self {
        Self {
            max_depth,
            text_shortcut,
        }
    }

    /// Set the nesting limit.
    pub fn with_max_depth(mut self, limit: usize) -> Self {
        self.max_depth = Some(limit);
        self
    }

    /// Always pass children as a list, even for a single text child.
    pub fn without_text_shortcut(mut self) -> Self {
        self.text_shortcut = false;
        self
    }
}

impl Default for JsxConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
