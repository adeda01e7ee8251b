//! Prelude module for common imports.
//!
//! ```ignore
//! use tola_jsx::prelude::*;
//! ```

// Factory
pub use crate::jsx;
pub use crate::jsx::{
    normalize, try_normalize, FunctionComponent, JsxChild, JsxConfig, JsxFactory, Tag,
};

// Hyperscript
pub use crate::h::{h, HContent};

// Node types
pub use crate::node::{vnode, Key, Selector, VNode, VNodeData};

// Attributes
pub use crate::attr::{AttrValue, Attrs, AttrsExt};

// Error
pub use crate::error::{JsxError, JsxResult};
