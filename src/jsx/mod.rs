//! JSX-compatible node factory
//!
//! `jsx(tag, props, children)` is the target that lowered JSX calls into.
//! Children are normalized first; the tag then decides between calling a
//! function component and building an element through [`crate::h::h`].
//!
//! ```ignore
//! use tola_jsx::jsx;
//! use tola_jsx::jsx::Tag;
//!
//! let list = jsx!("ul", None, items.iter().map(|i| jsx!("li", None, i.name)).collect::<Vec<_>>());
//! let page = jsx!(Tag::component(&layout), None, list, show_footer.then(footer));
//! ```

mod child;
mod config;
mod normalize;

pub use child::{number_to_text, JsxChild};
pub use config::{JsxConfig, STRICT_MAX_DEPTH};
pub use normalize::{normalize, try_normalize};

use std::borrow::Cow;
use std::fmt;

use compact_str::CompactString;

use crate::error::JsxResult;
use crate::h::{h, HContent};
use crate::node::{VNode, VNodeData};

// =============================================================================
// Components and tags
// =============================================================================

/// A user-defined component: properties and normalized children in, one node out.
///
/// Any `Fn(Option<VNodeData>, Vec<VNode>) -> VNode` is a component.
pub trait FunctionComponent {
    fn render(&self, props: Option<VNodeData>, children: Vec<VNode>) -> VNode;
}

impl<F> FunctionComponent for F
where
    F: Fn(Option<VNodeData>, Vec<VNode>) -> VNode,
{
    #[inline]
    fn render(&self, props: Option<VNodeData>, children: Vec<VNode>) -> VNode {
        self(props, children)
    }
}

/// What a JSX call names: an element or a component.
#[derive(Clone)]
pub enum Tag<'a> {
    /// Element name, optionally with `#id` / `.class` shorthand
    Element(Cow<'a, str>),
    /// Function component
    Component(&'a dyn FunctionComponent),
}

impl<'a> Tag<'a> {
    /// Name an element
    pub fn element(name: impl Into<Cow<'a, str>>) -> Self {
        Self::Element(name.into())
    }

    /// Name a function component
    pub fn component(component: &'a dyn FunctionComponent) -> Self {
        Self::Component(component)
    }

    /// Check if this names a component
    pub fn is_component(&self) -> bool {
        matches!(self, Self::Component(_))
    }
}

impl fmt::Debug for Tag<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Element(name) => f.debug_tuple("Element").field(name).finish(),
            Self::Component(_) => f.write_str("Component(..)"),
        }
    }
}

impl<'a> From<&'a str> for Tag<'a> {
    fn from(name: &'a str) -> Self {
        Self::Element(Cow::Borrowed(name))
    }
}

impl From<String> for Tag<'_> {
    fn from(name: String) -> Self {
        Self::Element(Cow::Owned(name))
    }
}

impl<'a> From<&'a dyn FunctionComponent> for Tag<'a> {
    fn from(component: &'a dyn FunctionComponent) -> Self {
        Self::Component(component)
    }
}

// =============================================================================
// JsxFactory
// =============================================================================

/// Node factory bound to a [`JsxConfig`].
#[derive(Debug, Clone, Copy, Default)]
pub struct JsxFactory {
    config: JsxConfig,
}

impl JsxFactory {
    /// Create a factory with the given config.
    pub const fn new(config: JsxConfig) -> Self {
        Self { config }
    }

    /// Get the config.
    pub fn config(&self) -> &JsxConfig {
        &self.config
    }

    /// Build a node. Nesting depth is not limited here.
    pub fn build<'a, I>(
        &self,
        tag: impl Into<Tag<'a>>,
        props: Option<VNodeData>,
        children: I,
    ) -> VNode
    where
        I: IntoIterator,
        I::Item: Into<JsxChild>,
    {
        let flat = normalize(children);
        self.dispatch(tag.into(), props, flat)
    }

    /// Build a node, enforcing the configured depth limit.
    pub fn try_build<'a, I>(
        &self,
        tag: impl Into<Tag<'a>>,
        props: Option<VNodeData>,
        children: I,
    ) -> JsxResult<VNode>
    where
        I: IntoIterator,
        I::Item: Into<JsxChild>,
    {
        let flat = self.try_normalize(children)?;
        Ok(self.dispatch(tag.into(), props, flat))
    }

    /// Normalize children, enforcing the configured depth limit.
    pub fn try_normalize<I>(&self, children: I) -> JsxResult<Vec<VNode>>
    where
        I: IntoIterator,
        I::Item: Into<JsxChild>,
    {
        match self.config.max_depth {
            Some(limit) => try_normalize(children, limit),
            None => Ok(normalize(children)),
        }
    }

    fn dispatch(&self, tag: Tag<'_>, props: Option<VNodeData>, flat: Vec<VNode>) -> VNode {
        let name = match tag {
            Tag::Component(component) => {
                tracing::trace!(children = flat.len(), "calling function component");
                return component.render(props, flat);
            }
            Tag::Element(name) => name,
        };

        let mut sel = CompactString::from(name.as_ref());
        if let Some(suffix) = props.as_ref().and_then(|p| p.sel.as_deref()) {
            sel.push_str(suffix);
        }

        let content = if self.config.text_shortcut {
            match <[VNode; 1]>::try_from(flat) {
                Ok([only]) if is_plain_text(&only) => {
                    tracing::trace!(sel = %sel, "single text child, using text content");
                    HContent::Text(only.text.unwrap_or_default())
                }
                Ok([only]) => HContent::Children(vec![only]),
                Err(flat) => HContent::Children(flat),
            }
        } else {
            HContent::Children(flat)
        };

        h(sel, props, content)
    }
}

/// A node with no (or an empty) selector and non-empty text.
fn is_plain_text(node: &VNode) -> bool {
    node.sel.as_deref().is_none_or(str::is_empty)
        && node.text.as_deref().is_some_and(|t| !t.is_empty())
}

/// Build a node with the default config.
///
/// Components receive `props` as given and the normalized children. Elements
/// get `props.sel` appended to their name; a lone non-empty text child is
/// passed as text content rather than as a one-element child list.
///
/// The tag must name an element or a component that returns exactly one
/// node; nothing here checks what a component returns.
pub fn jsx<'a, I>(tag: impl Into<Tag<'a>>, props: Option<VNodeData>, children: I) -> VNode
where
    I: IntoIterator,
    I::Item: Into<JsxChild>,
{
    JsxFactory::default().build(tag, props, children)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::vnode;

    fn no_children() -> Vec<JsxChild> {
        Vec::new()
    }

    #[test]
    fn test_component_dispatch_bypasses_element_construction() {
        let component = |props: Option<VNodeData>, children: Vec<VNode>| -> VNode {
            let marker = props.and_then(|p| p.extra.get("x").cloned());
            assert_eq!(marker, Some(crate::attr::AttrValue::Int(1)));
            vnode(Some("section.card".into()), None, Some(children), None)
        };

        let node = jsx(
            Tag::component(&component),
            Some(VNodeData::new().set("x", 1)),
            ["child"],
        );
        assert_eq!(node.sel.as_deref(), Some("section.card"));
        assert!(node.data.is_none());
        assert_eq!(node.children, Some(vec![VNode::text_node("child")]));
    }

    #[test]
    fn test_component_sees_normalized_children() {
        let count = |_: Option<VNodeData>, children: Vec<VNode>| -> VNode {
            VNode::text_node(children.len().to_string())
        };
        let children = vec![
            JsxChild::Null,
            JsxChild::Bool(false),
            JsxChild::from(["a", "b"]),
            JsxChild::Int(0),
        ];
        let node = jsx(Tag::component(&count), None, children);
        assert_eq!(node.text.as_deref(), Some("3"));
    }

    #[test]
    fn test_selector_suffix_concatenation() {
        let node = jsx("div", Some(VNodeData::new().with_sel(".red")), no_children());
        assert_eq!(node.sel.as_deref(), Some("div.red"));
        assert_eq!(node.children, Some(Vec::new()));
    }

    #[test]
    fn test_single_text_child_uses_text_form() {
        let node = jsx("span", None, ["hello"]);
        assert_eq!(node.text.as_deref(), Some("hello"));
        assert!(node.children.is_none());

        let node = jsx("span", None, [42]);
        assert_eq!(node.text.as_deref(), Some("42"));
    }

    #[test]
    fn test_empty_selector_text_child_uses_text_form() {
        let child = vnode(Some(CompactString::default()), None, None, Some("hi".into()));
        let node = jsx("span", None, [child]);
        assert_eq!(node.text.as_deref(), Some("hi"));
        assert!(node.children.is_none());
    }

    #[test]
    fn test_multiple_children_use_child_list() {
        let node = jsx("span", None, ["a", "b"]);
        assert!(node.text.is_none());
        assert_eq!(node.child_count(), 2);
    }

    #[test]
    fn test_single_element_child_uses_child_list() {
        let child = h("b", None, "bold");
        let node = jsx("span", None, [child.clone()]);
        assert!(node.text.is_none());
        assert_eq!(node.children, Some(vec![child]));
    }

    #[test]
    fn test_single_empty_text_node_uses_child_list() {
        // `""` is dropped by normalization, but a pre-built empty text node is not
        let node = jsx("p", None, [VNode::text_node("")]);
        assert!(node.text.is_none());
        assert_eq!(node.child_count(), 1);
    }

    #[test]
    fn test_empty_children_are_idempotent() {
        let a = jsx("div", None, no_children());
        let b = jsx("div", None, vec![JsxChild::Null, JsxChild::Bool(false)]);
        assert_eq!(a, b);
        assert_eq!(a.children, Some(Vec::new()));
    }

    #[test]
    fn test_props_are_passed_to_builder() {
        let props = VNodeData::new().with_key("k1").attr("title", "t");
        let node = jsx("li", Some(props.clone()), ["x"]);
        assert_eq!(node.key, Some("k1".into()));
        assert_eq!(node.data, Some(props));
    }

    #[test]
    fn test_text_shortcut_can_be_disabled() {
        let factory = JsxFactory::new(JsxConfig::DEFAULT.without_text_shortcut());
        let node = factory.build("span", None, ["hello"]);
        assert!(node.text.is_none());
        assert_eq!(node.children, Some(vec![VNode::text_node("hello")]));
    }

    #[test]
    fn test_try_build_enforces_depth() {
        let factory = JsxFactory::new(JsxConfig::DEFAULT.with_max_depth(1));
        assert!(factory.try_build("div", None, [JsxChild::from(["a"])]).is_ok());
        assert_eq!(
            factory.try_build("div", None, [JsxChild::from([["a"]])]),
            Err(crate::error::JsxError::NestingTooDeep { limit: 1 })
        );
        // build() never limits
        let node = factory.build("div", None, [JsxChild::from([["a"]])]);
        assert_eq!(node.text.as_deref(), Some("a"));
    }

    #[test]
    fn test_unbounded_try_build_matches_build() {
        let factory = JsxFactory::default();
        let deep = JsxChild::from([[[[[["x"]]]]]]);
        assert_eq!(
            factory.try_build("p", None, [deep.clone()]).unwrap(),
            factory.build("p", None, [deep])
        );
    }

    #[test]
    fn test_tag_conversions() {
        assert!(matches!(Tag::from("div"), Tag::Element(Cow::Borrowed("div"))));
        assert!(!Tag::from(String::from("p")).is_component());
        let c = |_: Option<VNodeData>, _: Vec<VNode>| VNode::text_node("");
        assert!(Tag::component(&c).is_component());
        assert_eq!(format!("{:?}", Tag::component(&c)), "Component(..)");
    }
}
