//! Tree construction.
//!
//! Children are pushed before their parents; [`TreeBuilder::finish`] then
//! wires every parent link in one pass. Requiring child IDs to be smaller
//! than their parent's ID keeps the finished tree acyclic, so ancestor walks
//! always terminate.

use crate::{Node, NodeId, NodeKind, Span, SyntaxTree, TypeBinding};

/// Error when a tree's child references are inconsistent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("node {parent} refers to unknown child {child}")]
    UnknownNode { parent: NodeId, child: NodeId },

    #[error("node {parent} refers to child {child}, which was not built before it")]
    ForwardReference { parent: NodeId, child: NodeId },

    #[error("node {child} is claimed by both {first} and {second}")]
    MultipleParents {
        child: NodeId,
        first: NodeId,
        second: NodeId,
    },

    #[error("root {0} is not in the tree")]
    UnknownRoot(NodeId),

    #[error("root {root} is a child of {parent}")]
    RootHasParent { root: NodeId, parent: NodeId },
}

/// Builder for [`SyntaxTree`].
#[derive(Default, Debug)]
pub struct TreeBuilder {
    nodes: Vec<Node>,
}

impl TreeBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Push a node without a source position.
    pub fn push(&mut self, kind: NodeKind) -> NodeId {
        self.push_node(kind, Span::DUMMY, None)
    }

    /// Push a node covering `span`.
    pub fn push_spanned(&mut self, kind: NodeKind, span: Span) -> NodeId {
        self.push_node(kind, span, None)
    }

    /// Push an expression node with a resolved type.
    pub fn push_typed(&mut self, kind: NodeKind, ty: TypeBinding) -> NodeId {
        self.push_node(kind, Span::DUMMY, Some(ty))
    }

    /// Push a node with every attribute given explicitly.
    pub fn push_node(
        &mut self,
        kind: NodeKind,
        span: Span,
        resolved_type: Option<TypeBinding>,
    ) -> NodeId {
        let id = NodeId::new(u32::try_from(self.nodes.len()).unwrap_or(u32::MAX));
        self.nodes.push(Node {
            kind,
            span,
            parent: None,
            resolved_type,
        });
        id
    }

    /// Push a `SimpleName`.
    pub fn name(&mut self, identifier: impl Into<String>) -> NodeId {
        self.push(NodeKind::SimpleName {
            identifier: identifier.into(),
        })
    }

    /// Push a `PrimitiveType` such as `int`.
    pub fn primitive_type(&mut self, keyword: impl Into<String>) -> NodeId {
        self.push(NodeKind::PrimitiveType {
            keyword: keyword.into(),
        })
    }

    /// Push a `SimpleType` together with its `SimpleName`.
    pub fn simple_type(&mut self, name: impl Into<String>) -> NodeId {
        let name = self.name(name);
        self.push(NodeKind::SimpleType { name })
    }

    /// Push an `ArrayType` wrapping an already-pushed element type.
    pub fn array_type(&mut self, element: NodeId, dimensions: u32) -> NodeId {
        self.push(NodeKind::ArrayType {
            element,
            dimensions,
        })
    }

    /// Push a number literal. The front end's type for it is `ty`.
    pub fn number(&mut self, token: impl Into<String>, ty: &str) -> NodeId {
        self.push_typed(
            NodeKind::NumberLiteral {
                token: token.into(),
            },
            TypeBinding::new(ty),
        )
    }

    /// Push a string literal; `value` is quoted for you.
    pub fn string(&mut self, value: &str) -> NodeId {
        self.push_typed(
            NodeKind::StringLiteral {
                literal: format!("\"{value}\""),
            },
            TypeBinding::new("String"),
        )
    }

    /// Push a boolean literal.
    pub fn boolean(&mut self, value: bool) -> NodeId {
        self.push_typed(
            NodeKind::BooleanLiteral { value },
            TypeBinding::new("boolean"),
        )
    }

    /// Wire parent links and validate child references.
    pub fn finish(mut self, root: NodeId) -> Result<SyntaxTree, TreeError> {
        if root.index() >= self.nodes.len() {
            return Err(TreeError::UnknownRoot(root));
        }

        for index in 0..self.nodes.len() {
            let parent = NodeId::new(u32::try_from(index).unwrap_or(u32::MAX));
            for child in self.nodes[index].kind.children() {
                if child.index() >= self.nodes.len() {
                    return Err(TreeError::UnknownNode { parent, child });
                }
                if child >= parent {
                    return Err(TreeError::ForwardReference { parent, child });
                }
                let slot = &mut self.nodes[child.index()].parent;
                if let Some(first) = *slot {
                    return Err(TreeError::MultipleParents {
                        child,
                        first,
                        second: parent,
                    });
                }
                *slot = Some(parent);
            }
        }

        if let Some(parent) = self.nodes[root.index()].parent {
            return Err(TreeError::RootHasParent { root, parent });
        }

        Ok(SyntaxTree {
            nodes: self.nodes,
            root,
        })
    }
}
