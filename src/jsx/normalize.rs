//! Child normalization
//!
//! Flattens nested child lists depth-first, drops the values that render
//! nothing and turns primitives into text nodes. Output order is the
//! pre-order of the input.

use std::convert::Infallible;

use crate::error::{JsxError, JsxResult};
use crate::node::VNode;

use super::child::{number_to_text, JsxChild};

// =============================================================================
// Depth guards
// =============================================================================

/// Decides whether a nested list at a given depth may be entered.
pub(crate) trait DepthGuard {
    type Error;

    fn enter(&self, depth: usize) -> Result<(), Self::Error>;
}

/// Accepts any depth.
pub(crate) struct Unbounded;

impl DepthGuard for Unbounded {
    type Error = Infallible;

    #[inline]
    fn enter(&self, _depth: usize) -> Result<(), Infallible> {
        Ok(())
    }
}

/// Rejects lists nested deeper than the limit.
pub(crate) struct DepthLimit(pub usize);

impl DepthGuard for DepthLimit {
    type Error = JsxError;

    fn enter(&self, depth: usize) -> JsxResult<()> {
        if depth > self.0 {
            tracing::warn!(limit = self.0, "rejecting children nested past the depth limit");
            return Err(JsxError::NestingTooDeep { limit: self.0 });
        }
        Ok(())
    }
}

// =============================================================================
// Normalization
// =============================================================================

/// Flatten, filter and convert raw children.
///
/// Drops `Null`, `Undefined`, `false` and `""`. Keeps `0`, and renders `true`
/// as the text `"true"`. Existing nodes are moved through unchanged.
pub fn normalize<I>(children: I) -> Vec<VNode>
where
    I: IntoIterator,
    I::Item: Into<JsxChild>,
{
    let mut flattened = Vec::new();
    let Ok(()) = flatten_and_filter(
        children.into_iter().map(Into::into),
        0,
        &Unbounded,
        &mut flattened,
    );
    flattened
}

/// Like [`normalize`], but fails when lists nest deeper than `max_depth`.
///
/// The top-level children are at depth 0, so `max_depth = 0` rejects any
/// nested list.
pub fn try_normalize<I>(children: I, max_depth: usize) -> JsxResult<Vec<VNode>>
where
    I: IntoIterator,
    I::Item: Into<JsxChild>,
{
    let mut flattened = Vec::new();
    flatten_and_filter(
        children.into_iter().map(Into::into),
        0,
        &DepthLimit(max_depth),
        &mut flattened,
    )?;
    Ok(flattened)
}

fn flatten_and_filter<G, I>(
    children: I,
    depth: usize,
    guard: &G,
    flattened: &mut Vec<VNode>,
) -> Result<(), G::Error>
where
    G: DepthGuard,
    I: IntoIterator<Item = JsxChild>,
{
    for child in children {
        if child.is_dropped() {
            continue;
        }
        match child {
            JsxChild::List(items) => {
                guard.enter(depth + 1)?;
                flatten_and_filter(items, depth + 1, guard, flattened)?;
            }
            JsxChild::Node(node) => flattened.push(node),
            JsxChild::Text(text) => flattened.push(VNode::text_node(text)),
            JsxChild::Int(n) => flattened.push(VNode::text_node(n.to_string())),
            JsxChild::Float(n) => flattened.push(VNode::text_node(number_to_text(n))),
            JsxChild::Bool(b) => flattened.push(VNode::text_node(b.to_string())),
            JsxChild::Null | JsxChild::Undefined => {}
        }
    }
    Ok(())
}
