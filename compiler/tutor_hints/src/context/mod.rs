//! Declaration-context resolution.
//!
//! A diagnostic is anchored at one node, but a useful hint needs facts from
//! around it: the variable being declared, the call being made, the method
//! being defined. Each diagnostic kind anchors at a different depth, so
//! lookups here are named by the shape they expect rather than being one
//! generic walk.
//!
//! Matchers return `Option`; the shape lookups used by strategies convert a
//! miss into a [`ContextError`] naming what was expected.

mod expression_type;
mod shapes;

pub(crate) use expression_type::closest_expression_type;
pub(crate) use shapes::{
    as_array_creation, as_fragment, as_invocation, call_at_parent, creation_child,
    enclosing_fragment, enclosing_method, method_at_parent, missing_dimension, type_name,
};

use tutor_ir::{NodeId, SyntaxTree};

use crate::ContextError;

/// Everything a strategy may look at for one diagnostic.
#[derive(Copy, Clone, Debug)]
pub struct DiagnosticSite<'a> {
    tree: &'a SyntaxTree,
    anchor: NodeId,
    arguments: &'a [String],
}

impl<'a> DiagnosticSite<'a> {
    pub fn new(tree: &'a SyntaxTree, anchor: NodeId, arguments: &'a [String]) -> Self {
        DiagnosticSite {
            tree,
            anchor,
            arguments,
        }
    }

    pub fn tree(&self) -> &'a SyntaxTree {
        self.tree
    }

    /// The node covering the diagnostic's source range.
    pub fn anchor(&self) -> NodeId {
        self.anchor
    }

    /// Get a diagnostic argument, bounds-checked.
    pub fn argument(&self, index: usize) -> Result<&'a str, ContextError> {
        self.arguments
            .get(index)
            .map(String::as_str)
            .ok_or(ContextError::MissingArgument {
                index,
                len: self.arguments.len(),
            })
    }

    /// Source text of the anchor node.
    pub fn anchor_text(&self) -> String {
        self.tree.render(self.anchor)
    }

    /// The anchor's parent.
    pub fn parent(&self) -> Result<NodeId, ContextError> {
        self.tree
            .parent(self.anchor)
            .ok_or(ContextError::NotFound("parent node"))
    }
}
