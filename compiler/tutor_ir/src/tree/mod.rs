//! The immutable syntax tree and its read-only queries.
//!
//! Every query that takes a caller-supplied [`NodeId`] is total: an ID from
//! another tree yields `None` rather than a panic. Child IDs stored inside
//! nodes were validated by [`TreeBuilder::finish`] and are indexed directly.

mod builder;

pub use builder::{TreeBuilder, TreeError};

use crate::{Node, NodeId, NodeKind, Span, TypeBinding};

/// An immutable syntax tree with parent links.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct SyntaxTree {
    nodes: Vec<Node>,
    root: NodeId,
}

impl SyntaxTree {
    /// The root node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if the arena is empty. A finished tree always has a root, so
    /// this is only `false` in practice.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Get a node by ID.
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a node's kind by ID.
    pub fn kind(&self, id: NodeId) -> Option<&NodeKind> {
        self.get(id).map(Node::kind)
    }

    /// Get a node's parent.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.get(id).and_then(Node::parent)
    }

    /// Get the type the front end resolved for a node.
    pub fn resolved_type(&self, id: NodeId) -> Option<&TypeBinding> {
        self.get(id).and_then(Node::resolved_type)
    }

    /// Identifier of a `SimpleName` node.
    pub fn identifier(&self, id: NodeId) -> Option<&str> {
        match self.kind(id)? {
            NodeKind::SimpleName { identifier } => Some(identifier),
            _ => None,
        }
    }

    /// Iterate over the strict ancestors of `id`, nearest first.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            next: self.parent(id),
        }
    }

    /// Find the deepest node whose span covers `span`.
    ///
    /// This is how a diagnostic's reported range becomes an anchor node.
    /// Returns `None` when even the root does not cover the range.
    pub fn node_covering(&self, span: Span) -> Option<NodeId> {
        let mut current = self.root;
        if !self.get(current)?.span.contains_span(span) {
            return None;
        }

        'descend: loop {
            for child in self.nodes[current.index()].kind.children() {
                if self.nodes[child.index()].span.contains_span(span) {
                    current = child;
                    continue 'descend;
                }
            }
            return Some(current);
        }
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }
}

/// Iterator over a node's ancestors. See [`SyntaxTree::ancestors`].
pub struct Ancestors<'t> {
    tree: &'t SyntaxTree,
    next: Option<NodeId>,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let current = self.next?;
        self.next = self.tree.parent(current);
        Some(current)
    }
}
