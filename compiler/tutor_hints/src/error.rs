//! Context resolution errors.
//!
//! These never reach callers of the engine: the registries log them and
//! return an empty result for the diagnostic.

use tutor_ir::NodeId;

/// Why a strategy could not recover the context it needs.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContextError {
    #[error("diagnostic argument {index} requested, but only {len} were reported")]
    MissingArgument { index: usize, len: usize },

    #[error("expected {expected} at node {node}")]
    UnexpectedShape { expected: &'static str, node: NodeId },

    #[error("no enclosing {0} found")]
    NotFound(&'static str),

    #[error("front end did not resolve the {0}")]
    Unresolved(&'static str),
}
