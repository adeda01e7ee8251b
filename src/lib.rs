//! tola-jsx - JSX-style node factory for virtual DOM trees
//!
//! ## Core Concepts
//!
//! **Normalization**: children arrive as arbitrarily nested mixes of nodes,
//! strings, numbers, booleans and absent values. They are flattened in
//! order, `null`/`undefined`/`false`/`""` are dropped, and primitives become
//! text nodes. `0` survives; `true` becomes the text `"true"`.
//!
//! **Dispatch**: a [`Tag`] is either an element name or a
//! [`FunctionComponent`]. Components get the normalized children directly;
//! elements are built through the hyperscript builder [`h()`], with a single
//! plain text child passed as text content.
//!
//! ## Modules
//! - `jsx`: factory, raw child type, normalizer, config
//! - `h`: hyperscript builder
//! - `node`: `VNode`, `VNodeData`, `Key`, `Selector`
//! - `attr`: attribute values
//! - `error`: error types
//!
//! ## Usage
//!
//! ```ignore
//! use tola_jsx::prelude::*;
//!
//! fn card(props: Option<VNodeData>, children: Vec<VNode>) -> VNode {
//!     jsx!("div", Some(VNodeData::new().with_sel(".card")), children)
//! }
//!
//! let node = jsx!(Tag::component(&card), None,
//!     jsx!("h2", None, "Title"),
//!     is_new.then(|| jsx!("span", Some(VNodeData::new().with_sel(".badge")), "new")),
//! );
//! ```

// =============================================================================
// Core modules
// =============================================================================

#[macro_use]
mod macros;

/// Node types: VNode, VNodeData, Key, Selector
pub mod node;

/// Attribute values
pub mod attr;

/// Hyperscript builder
pub mod h;

/// JSX factory and child normalization
pub mod jsx;

/// Error types
pub mod error;

/// Prelude for common imports
pub mod prelude;

// =============================================================================
// Re-exports
// =============================================================================

// Node types
pub use node::{vnode, Key, Selector, VNode, VNodeData};

// Attribute types
pub use attr::{AttrValue, Attrs, AttrsExt};

// Hyperscript
pub use h::{h, HContent, SVG_NS};

// Factory
pub use jsx::{
    jsx, normalize, try_normalize, FunctionComponent, JsxChild, JsxConfig, JsxFactory, Tag,
};

// Error types
pub use error::{JsxError, JsxResult};
