//! Compact selector parsing
//!
//! Splits hyperscript selectors such as `div#main.card.wide` into tag, id
//! and class list.

use compact_str::CompactString;
use smallvec::SmallVec;

use crate::error::{JsxError, JsxResult};

/// Parsed `tag#id.class` selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selector {
    /// Element tag name
    pub tag: CompactString,
    /// Value after the first `#`, if any
    pub id: Option<CompactString>,
    /// Every `.`-separated class, in order
    pub classes: SmallVec<[CompactString; 4]>,
}

impl Selector {
    /// Parse a selector string.
    ///
    /// The tag runs up to the first `#` or `.`. Only the first `#` starts an
    /// id; a later `#` is kept inside the class name it appears in.
    pub fn parse(sel: &str) -> JsxResult<Self> {
        let tag_end = sel.find(['#', '.']).unwrap_or(sel.len());
        if tag_end == 0 {
            return Err(JsxError::invalid_selector(sel));
        }
        let tag = CompactString::from(&sel[..tag_end]);
        let mut rest = &sel[tag_end..];

        let mut id = None;
        if let Some(after_hash) = rest.strip_prefix('#') {
            let id_end = after_hash.find('.').unwrap_or(after_hash.len());
            id = Some(CompactString::from(&after_hash[..id_end]));
            rest = &after_hash[id_end..];
        }

        let classes = rest
            .split('.')
            .filter(|c| !c.is_empty())
            .map(CompactString::from)
            .collect();

        Ok(Self { tag, id, classes })
    }

    /// Check whether the selector carries the given class
    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }
}

/// Tag part of a selector without allocating.
pub(crate) fn tag_of(sel: &str) -> &str {
    let end = sel.find(['#', '.']).unwrap_or(sel.len());
    &sel[..end]
}
