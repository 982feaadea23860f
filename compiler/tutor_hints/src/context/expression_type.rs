//! Guessing the type an unresolved name was expected to have.
//!
//! When the learner refers to something that does not exist, the front end
//! has no type for it. The surrounding expression usually implies one: the
//! operand of `!` is a `boolean`, an array index is an `int`, an argument
//! has its parameter's type. The nearest enclosing expression of a known
//! form decides; anything else is an `Object`.

use tutor_ir::{NodeId, NodeKind, PrefixOp, SyntaxTree, TypeBinding};

use super::{as_fragment, as_invocation};

const FALLBACK: &str = "Object";

/// Type implied by the nearest supported expression above `anchor`.
///
/// `missing_name` is the source text of the unresolved name, used to find
/// which argument position it occupies in a call. Returned names may still
/// be qualified.
pub(crate) fn closest_expression_type(tree: &SyntaxTree, anchor: NodeId, missing_name: &str) -> String {
    for node in tree.ancestors(anchor) {
        if let Some(ty) = implied_type(tree, node, missing_name) {
            tracing::trace!(node = %node, ty = %ty, "inferred expression type");
            return ty;
        }
    }
    FALLBACK.to_string()
}

/// The type `node` implies, or `None` if it is not a supported expression.
fn implied_type(tree: &SyntaxTree, node: NodeId, missing_name: &str) -> Option<String> {
    let ty = match tree.kind(node)? {
        NodeKind::PrefixExpression { operator, .. } => match operator {
            PrefixOp::Not => "boolean".to_string(),
            // `-`, `~` and friends also apply to floats, but always to ints.
            _ => "int".to_string(),
        },
        NodeKind::InfixExpression {
            operator,
            left,
            right,
        } => match tree
            .resolved_type(*left)
            .or_else(|| tree.resolved_type(*right))
        {
            Some(operand) => operand.name(),
            None if operator.is_logical() => "boolean".to_string(),
            None if operator.is_numeric() => "int".to_string(),
            None => "boolean".to_string(),
        },
        NodeKind::PostfixExpression { .. }
        | NodeKind::ArrayCreation { .. }
        | NodeKind::ArrayAccess { .. } => "int".to_string(),
        NodeKind::ConditionalExpression { .. } => "boolean".to_string(),
        NodeKind::InstanceofExpression { .. } => FALLBACK.to_string(),
        NodeKind::VariableDeclarationFragment { .. } => as_fragment(tree, node)
            .and_then(|fragment| fragment.binding)
            .map_or_else(|| FALLBACK.to_string(), TypeBinding::name),
        NodeKind::ArrayInitializer { .. } => tree
            .resolved_type(node)
            .map_or_else(|| FALLBACK.to_string(), |ty| ty.element_name().to_string()),
        NodeKind::CastExpression { ty, .. } => tree.render(*ty),
        NodeKind::MethodInvocation { .. } => as_invocation(tree, node)
            .and_then(|call| {
                let index = call
                    .arguments
                    .iter()
                    .position(|&arg| tree.render(arg) == missing_name)?;
                call.binding?.parameter_types.get(index)
            })
            .map_or_else(|| FALLBACK.to_string(), TypeBinding::name),
        NodeKind::Assignment { .. } => tree
            .resolved_type(node)
            .map_or_else(|| FALLBACK.to_string(), TypeBinding::name),
        _ => return None,
    };
    Some(ty)
}
