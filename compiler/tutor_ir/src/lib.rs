//! Tutor IR - the syntax tree handed over by the front end.
//!
//! The hint engine never parses source text. It receives an immutable tree
//! whose nodes carry:
//! - a [`Span`] into the learner's file
//! - a parent link (so context can be recovered by walking upward)
//! - an optional resolved [`TypeBinding`] for expressions
//! - an optional [`MethodBinding`] for declarations and invocations
//!
//! # Design Philosophy
//!
//! - **Flatten Everything**: nodes live in one arena and refer to each other
//!   by [`NodeId`], never by `Box`.
//! - **Read-only after build**: [`TreeBuilder::finish`] wires parent links
//!   and validates them once; [`SyntaxTree`] exposes no mutation.

mod ast;
mod binding;
mod node_id;
mod span;
mod tree;
mod unparse;

pub use ast::{InfixOp, Node, NodeKind, PostfixOp, PrefixOp};
pub use binding::{MethodBinding, TypeBinding};
pub use node_id::NodeId;
pub use span::Span;
pub use tree::{Ancestors, SyntaxTree, TreeBuilder, TreeError};
