//! Hyperscript builder
//!
//! `h(sel, data, content)` assembles an element node from a selector, an
//! optional property bag and either text or a child list.

use compact_str::CompactString;

use crate::node::{tag_of, vnode, VNode, VNodeData};

/// Namespace URI applied to `svg` subtrees.
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Content passed to [`h`].
#[derive(Debug, Clone, Default, PartialEq)]
pub enum HContent {
    /// No content; the element gets no child list at all
    #[default]
    Empty,
    /// Text-shortcut form
    Text(String),
    /// Child list (may be empty)
    Children(Vec<VNode>),
    /// A single child node
    Node(VNode),
}

impl From<&str> for HContent {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for HContent {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

impl From<Vec<VNode>> for HContent {
    fn from(children: Vec<VNode>) -> Self {
        Self::Children(children)
    }
}

impl From<VNode> for HContent {
    fn from(node: VNode) -> Self {
        Self::Node(node)
    }
}

/// Build an element node.
///
/// Missing data becomes an empty [`VNodeData`]. The key is read from
/// `data.key`. Selectors naming an `svg` root get the SVG namespace applied
/// to the whole subtree.
pub fn h(
    sel: impl Into<CompactString>,
    data: Option<VNodeData>,
    content: impl Into<HContent>,
) -> VNode {
    let sel = sel.into();
    let mut data = data.unwrap_or_default();

    let (mut children, text) = match content.into() {
        HContent::Empty => (None, None),
        HContent::Text(text) => (None, Some(text)),
        HContent::Children(children) => (Some(children), None),
        HContent::Node(node) => (Some(vec![node]), None),
    };

    if tag_of(&sel) == "svg" {
        add_ns(&mut data, children.as_deref_mut(), &sel);
    }

    vnode(Some(sel), Some(data), children, text)
}

fn add_ns(data: &mut VNodeData, children: Option<&mut [VNode]>, sel: &str) {
    data.ns = Some(SVG_NS.into());
    if tag_of(sel) == "foreignObject" {
        return;
    }
    for child in children.into_iter().flatten() {
        // Text nodes carry no data and stay untouched.
        if let (Some(child_data), Some(child_sel)) = (child.data.as_mut(), child.sel.as_deref()) {
            add_ns(child_data, child.children.as_deref_mut(), child_sel);
        }
    }
}
