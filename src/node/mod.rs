//! Virtual node types.
//!
//! A `VNode` is either a text node (`text` set, no `sel`, no `children`) or an
//! element node (`sel` set). Elements built in text-shortcut form carry
//! `text` instead of a one-element `children` list. The split is upheld by
//! the constructors in this module and in [`crate::h`].

mod data;
mod selector;

pub use data::VNodeData;
pub use selector::Selector;

pub(crate) use selector::tag_of;

use std::fmt;

use compact_str::{CompactString, ToCompactString};

use crate::error::JsxResult;

// =============================================================================
// Key
// =============================================================================

/// Identity key used by renderers for keyed diffing
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Str(CompactString),
    Int(i64),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Self::Str(s.into())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Self::Str(s.into())
    }
}

impl From<CompactString> for Key {
    fn from(s: CompactString) -> Self {
        Self::Str(s)
    }
}

macro_rules! impl_key_from_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Key {
                fn from(n: $ty) -> Self {
                    Self::Int(i64::from(n))
                }
            }
        )*
    };
}

// Values past `i64::MAX` keep their exact digits as a string key.
macro_rules! impl_key_from_wide_int {
    ($($ty:ty),* $(,)?) => {
        $(
            impl From<$ty> for Key {
                fn from(n: $ty) -> Self {
                    i64::try_from(n)
                        .map_or_else(|_| Self::Str(n.to_compact_string()), Self::Int)
                }
            }
        )*
    };
}

impl_key_from_int!(i32, i64, u32);
impl_key_from_wide_int!(isize, usize, u64);

// =============================================================================
// VNode
// =============================================================================

/// One node in a virtual tree
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VNode {
    /// Selector (`tag#id.class`), `None` for text nodes
    pub sel: Option<CompactString>,
    /// Property bag, `None` for text nodes
    pub data: Option<VNodeData>,
    /// Child nodes, `None` for text nodes and text-shortcut elements
    pub children: Option<Vec<VNode>>,
    /// Text payload
    pub text: Option<String>,
    /// Key copied from `data.key`
    pub key: Option<Key>,
}

/// Construct a node from its parts.
///
/// The key is taken from `data`. Callers are responsible for passing a
/// combination that respects the text/element split.
pub fn vnode(
    sel: Option<CompactString>,
    data: Option<VNodeData>,
    children: Option<Vec<VNode>>,
    text: Option<String>,
) -> VNode {
    let key = data.as_ref().and_then(|d| d.key.clone());
    VNode {
        sel,
        data,
        children,
        text,
        key,
    }
}

impl VNode {
    /// Create a plain text node
    pub fn text_node(text: impl Into<String>) -> Self {
        vnode(None, None, None, Some(text.into()))
    }

    /// Check if this is a text node (no selector)
    #[inline]
    pub fn is_text(&self) -> bool {
        self.sel.is_none()
    }

    /// Check if this is an element node
    #[inline]
    pub fn is_element(&self) -> bool {
        self.sel.is_some()
    }

    /// Check if this node owns a child list, even an empty one
    #[inline]
    pub fn has_children(&self) -> bool {
        self.children.is_some()
    }

    /// Number of direct children
    pub fn child_count(&self) -> usize {
        self.children.as_ref().map_or(0, Vec::len)
    }

    /// Iterate over direct children
    pub fn children(&self) -> impl Iterator<Item = &VNode> {
        self.children.iter().flatten()
    }

    /// Tag name of an element node
    pub fn tag(&self) -> Option<&str> {
        self.sel.as_deref().map(tag_of)
    }

    /// Parse the selector of an element node
    pub fn selector(&self) -> Option<JsxResult<Selector>> {
        self.sel.as_deref().map(Selector::parse)
    }

    /// Concatenated text of this node and all descendants
    pub fn text_content(&self) -> String {
        let mut result = String::new();
        self.collect_text(&mut result);
        result
    }

    fn collect_text(&self, buf: &mut String) {
        if let Some(text) = &self.text {
            buf.push_str(text);
        }
        for child in self.children() {
            child.collect_text(buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    static_assertions::assert_impl_all!(VNode: Send, Sync, Clone, fmt::Debug, PartialEq);

    #[test]
    fn test_text_node_shape() {
        let node = VNode::text_node("hello");
        assert!(node.is_text());
        assert!(!node.is_element());
        assert!(!node.has_children());
        assert!(node.data.is_none());
        assert_eq!(node.text.as_deref(), Some("hello"));
        assert_eq!(node.tag(), None);
    }

    #[test]
    fn test_vnode_copies_key() {
        let data = VNodeData::new().with_key(7);
        let node = vnode(Some("li.item".into()), Some(data), Some(Vec::new()), None);
        assert_eq!(node.key, Some(Key::Int(7)));
        assert_eq!(node.tag(), Some("li"));
        assert!(node.has_children());
        assert_eq!(node.child_count(), 0);
    }

    #[test]
    fn test_text_content_walks_children_and_shortcut_text() {
        let inner = vnode(Some("b".into()), None, None, Some("bold".into()));
        let node = vnode(
            Some("p".into()),
            None,
            Some(vec![VNode::text_node("a "), inner, VNode::text_node("!")]),
            None,
        );
        assert_eq!(node.text_content(), "a bold!");
    }

    #[test]
    fn test_selector_access() {
        let node = vnode(Some("div#app.dark".into()), None, None, None);
        let sel = node.selector().unwrap().unwrap();
        assert_eq!(sel.id.as_deref(), Some("app"));
        assert!(sel.has_class("dark"));
        assert!(VNode::text_node("x").selector().is_none());
    }

    #[test]
    fn test_key_display() {
        assert_eq!(Key::from("a").to_string(), "a");
        assert_eq!(Key::from(3usize).to_string(), "3");
    }

    #[test]
    fn test_wide_integer_keys_do_not_wrap() {
        assert_eq!(Key::from(usize::MAX), Key::Str("18446744073709551615".into()));
        assert_eq!(Key::from(u64::MAX).to_string(), u64::MAX.to_string());
        assert_eq!(Key::from(7u64), Key::Int(7));
    }
}
