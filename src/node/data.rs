//! Property bag carried by element nodes
//!
//! A fixed set of recognized fields plus an opaque `extra` map for anything
//! a downstream renderer wants to interpret on its own.

use compact_str::CompactString;
use rustc_hash::FxHashMap;

use crate::attr::{AttrValue, Attrs, AttrsExt};

use super::Key;

// =============================================================================
// VNodeData
// =============================================================================

/// Element property bag
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VNodeData {
    /// Selector suffix appended to the tag by the jsx factory (`".red"`, `"#app"`)
    pub sel: Option<CompactString>,
    /// Identity key for keyed diffing
    pub key: Option<Key>,
    /// Element namespace URI (set for SVG subtrees)
    pub ns: Option<CompactString>,
    /// HTML attributes
    pub attrs: Attrs,
    /// DOM properties
    pub props: Attrs,
    /// Class toggles
    pub class: FxHashMap<CompactString, bool>,
    /// Inline styles
    pub style: FxHashMap<CompactString, CompactString>,
    /// `data-*` entries, without the prefix
    pub dataset: FxHashMap<CompactString, CompactString>,
    /// Pass-through entries the factory never looks at
    pub extra: FxHashMap<CompactString, AttrValue>,
}

impl VNodeData {
    /// Create an empty property bag
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the selector suffix
    pub fn with_sel(mut self, sel: impl Into<CompactString>) -> Self {
        self.sel = Some(sel.into());
        self
    }

    /// Set the key
    pub fn with_key(mut self, key: impl Into<Key>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Set the namespace
    pub fn with_ns(mut self, ns: impl Into<CompactString>) -> Self {
        self.ns = Some(ns.into());
        self
    }

    /// Add or replace an attribute
    pub fn attr(mut self, name: impl Into<CompactString>, value: impl Into<AttrValue>) -> Self {
        self.attrs.set_attr(name, value);
        self
    }

    /// Add or replace a DOM property
    pub fn prop(mut self, name: impl Into<CompactString>, value: impl Into<AttrValue>) -> Self {
        self.props.set_attr(name, value);
        self
    }

    /// Toggle a class
    pub fn class(mut self, name: impl Into<CompactString>, enabled: bool) -> Self {
        self.class.insert(name.into(), enabled);
        self
    }

    /// Set an inline style
    pub fn style(mut self, name: impl Into<CompactString>, value: impl Into<CompactString>) -> Self {
        self.style.insert(name.into(), value.into());
        self
    }

    /// Set a `data-*` entry
    pub fn data_attr(
        mut self,
        name: impl Into<CompactString>,
        value: impl Into<CompactString>,
    ) -> Self {
        self.dataset.insert(name.into(), value.into());
        self
    }

    /// Store an opaque pass-through entry
    pub fn set(mut self, name: impl Into<CompactString>, value: impl Into<AttrValue>) -> Self {
        self.extra.insert(name.into(), value.into());
        self
    }

    /// Classes switched on, sorted for deterministic output
    pub fn active_classes(&self) -> Vec<&str> {
        let mut classes: Vec<&str> = self
            .class
            .iter()
            .filter(|(_, on)| **on)
            .map(|(name, _)| name.as_str())
            .collect();
        classes.sort_unstable();
        classes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_fills_recognized_fields() {
        let data = VNodeData::new()
            .with_sel(".red")
            .with_key("row-1")
            .attr("title", "Hello")
            .prop("value", 3)
            .class("active", true)
            .class("hidden", false)
            .style("color", "red")
            .data_attr("id", "7")
            .set("custom", true);

        assert_eq!(data.sel.as_deref(), Some(".red"));
        assert_eq!(data.key, Some(Key::from("row-1")));
        assert_eq!(data.attrs.get_attr("title"), Some(&AttrValue::from("Hello")));
        assert_eq!(data.props.get_attr("value"), Some(&AttrValue::Int(3)));
        assert_eq!(data.active_classes(), vec!["active"]);
        assert_eq!(data.style.get("color").map(|s| s.as_str()), Some("red"));
        assert_eq!(data.dataset.get("id").map(|s| s.as_str()), Some("7"));
        assert_eq!(data.extra.get("custom"), Some(&AttrValue::Bool(true)));
    }

    #[test]
    fn test_default_is_empty() {
        let data = VNodeData::default();
        assert!(data.sel.is_none());
        assert!(data.key.is_none());
        assert!(data.attrs.is_empty());
        assert!(data.extra.is_empty());
    }
}
