//! Shape matchers over the syntax tree.

use std::iter;

use tutor_ir::{MethodBinding, NodeId, NodeKind, SyntaxTree, TypeBinding};

use crate::{simple_name, ContextError, DiagnosticSite};

/// A variable declaration fragment: `nums = new int[5]`.
#[derive(Debug)]
pub(crate) struct Fragment<'a> {
    pub name: &'a str,
    /// Declared type of the variable.
    pub binding: Option<&'a TypeBinding>,
}

/// An array creation expression: `new int[5]`.
#[derive(Debug)]
pub(crate) struct ArrayCreation {
    pub id: NodeId,
    /// Element type node (`int` in `new int[5][]`).
    pub element: NodeId,
}

/// A method invocation: `recv.foo(1, "a")`.
#[derive(Debug)]
pub(crate) struct Invocation<'a> {
    pub name: &'a str,
    pub arguments: &'a [NodeId],
    pub binding: Option<&'a MethodBinding>,
}

/// A method declaration.
#[derive(Debug)]
pub(crate) struct MethodDeclaration<'a> {
    pub name: &'a str,
    pub return_type: Option<NodeId>,
    pub parameters: &'a [NodeId],
    pub binding: Option<&'a MethodBinding>,
}

pub(crate) fn as_fragment(tree: &SyntaxTree, id: NodeId) -> Option<Fragment<'_>> {
    match tree.kind(id)? {
        NodeKind::VariableDeclarationFragment { name, binding, .. } => Some(Fragment {
            name: tree.identifier(*name)?,
            binding: binding.as_ref(),
        }),
        _ => None,
    }
}

pub(crate) fn as_array_creation(tree: &SyntaxTree, id: NodeId) -> Option<ArrayCreation> {
    match tree.kind(id)? {
        NodeKind::ArrayCreation { ty, .. } => {
            let element = match tree.kind(*ty)? {
                NodeKind::ArrayType { element, .. } => *element,
                _ => *ty,
            };
            Some(ArrayCreation { id, element })
        }
        _ => None,
    }
}

pub(crate) fn as_invocation(tree: &SyntaxTree, id: NodeId) -> Option<Invocation<'_>> {
    match tree.kind(id)? {
        NodeKind::MethodInvocation {
            name,
            arguments,
            binding,
            ..
        } => Some(Invocation {
            name: tree.identifier(*name)?,
            arguments,
            binding: binding.as_ref(),
        }),
        _ => None,
    }
}

pub(crate) fn as_method_declaration(tree: &SyntaxTree, id: NodeId) -> Option<MethodDeclaration<'_>> {
    match tree.kind(id)? {
        NodeKind::MethodDeclaration {
            name,
            return_type,
            parameters,
            binding,
            ..
        } => Some(MethodDeclaration {
            name: tree.identifier(*name)?,
            return_type: *return_type,
            parameters,
            binding: binding.as_ref(),
        }),
        _ => None,
    }
}

/// The node exactly `depth` parent hops above `id` (`id` itself at 0).
pub(crate) fn ancestor(tree: &SyntaxTree, id: NodeId, depth: usize) -> Option<NodeId> {
    match depth {
        0 => tree.get(id).map(|_| id),
        _ => tree.ancestors(id).nth(depth - 1),
    }
}

/// Nearest declaration fragment at or above `id`.
///
/// A field declaration or declaration statement stands for its first
/// fragment: every variable it declares shares the same type.
pub(crate) fn enclosing_fragment(tree: &SyntaxTree, id: NodeId) -> Option<Fragment<'_>> {
    for node in iter::once(id).chain(tree.ancestors(id)) {
        match tree.kind(node)? {
            NodeKind::VariableDeclarationFragment { .. } => return as_fragment(tree, node),
            NodeKind::FieldDeclaration { fragments, .. }
            | NodeKind::VariableDeclarationStatement { fragments, .. } => {
                return fragments.first().and_then(|&first| as_fragment(tree, first));
            }
            _ => {}
        }
    }
    None
}

/// Nearest method declaration at or above `id`.
pub(crate) fn enclosing_method(tree: &SyntaxTree, id: NodeId) -> Option<MethodDeclaration<'_>> {
    iter::once(id)
        .chain(tree.ancestors(id))
        .find_map(|node| as_method_declaration(tree, node))
}

/// Simple name of a resolved type, brackets included (`String[]`).
pub(crate) fn type_name(binding: &TypeBinding) -> String {
    simple_name(&binding.name()).into_owned()
}

/// Element type and variable name of an array declaration.
#[derive(Debug)]
pub(crate) struct ArrayDeclaration {
    pub element_type: String,
    pub name: String,
}

/// `T[] n = new T[];` anchored at the creation's element type `T`.
///
/// Shape: element type, array type, array creation, declaration fragment.
pub(crate) fn missing_dimension(site: &DiagnosticSite<'_>) -> Result<ArrayDeclaration, ContextError> {
    let tree = site.tree();
    let anchor = site.anchor();

    let array_type = ancestor(tree, anchor, 1).ok_or(ContextError::NotFound("array type"))?;
    if !matches!(tree.kind(array_type), Some(NodeKind::ArrayType { .. })) {
        return Err(ContextError::UnexpectedShape {
            expected: "array type",
            node: array_type,
        });
    }

    let creation = ancestor(tree, anchor, 2).ok_or(ContextError::NotFound("array creation"))?;
    if as_array_creation(tree, creation).is_none() {
        return Err(ContextError::UnexpectedShape {
            expected: "array creation",
            node: creation,
        });
    }

    let declaration =
        ancestor(tree, anchor, 3).ok_or(ContextError::NotFound("variable declaration"))?;
    let fragment = as_fragment(tree, declaration).ok_or(ContextError::UnexpectedShape {
        expected: "variable declaration fragment",
        node: declaration,
    })?;

    Ok(ArrayDeclaration {
        element_type: tree.render(anchor),
        name: fragment.name.to_string(),
    })
}

/// An array creation anchored at one of its own children.
///
/// Shape: anchor, array creation, declaration fragment. Used where the
/// front end reports a bad dimension or initializer inside `new T[..]`.
pub(crate) fn creation_child(site: &DiagnosticSite<'_>) -> Result<ArrayDeclaration, ContextError> {
    let tree = site.tree();
    let parent = site.parent()?;
    let creation = as_array_creation(tree, parent).ok_or(ContextError::UnexpectedShape {
        expected: "array creation",
        node: parent,
    })?;

    let declaration = tree
        .parent(creation.id)
        .ok_or(ContextError::NotFound("variable declaration"))?;
    let fragment = as_fragment(tree, declaration).ok_or(ContextError::UnexpectedShape {
        expected: "variable declaration fragment",
        node: declaration,
    })?;

    Ok(ArrayDeclaration {
        element_type: tree.render(creation.element),
        name: fragment.name.to_string(),
    })
}

/// A call anchored at its method name.
#[derive(Debug)]
pub(crate) struct CallSite<'a> {
    pub name: &'a str,
    /// Argument source texts.
    pub arguments: Vec<String>,
    /// Simple names of the argument types.
    pub argument_types: Vec<String>,
    pub binding: Option<&'a MethodBinding>,
}

/// The invocation whose child is the anchor.
pub(crate) fn call_at_parent<'a>(site: &DiagnosticSite<'a>) -> Result<CallSite<'a>, ContextError> {
    let tree = site.tree();
    let parent = site.parent()?;
    let call = as_invocation(tree, parent).ok_or(ContextError::UnexpectedShape {
        expected: "method invocation",
        node: parent,
    })?;

    let arguments = call.arguments.iter().map(|&arg| tree.render(arg)).collect();
    let argument_types = call
        .arguments
        .iter()
        .map(|&arg| {
            tree.resolved_type(arg)
                .map(type_name)
                .ok_or(ContextError::Unresolved("argument type"))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CallSite {
        name: call.name,
        arguments,
        argument_types,
        binding: call.binding,
    })
}

/// Signature facts of a method declaration.
#[derive(Debug)]
pub(crate) struct MethodContext<'a> {
    pub name: &'a str,
    pub return_type: String,
    pub parameter_types: Vec<String>,
}

/// The method declaration whose child is the anchor.
///
/// Types come from the method binding when the front end resolved one, and
/// from the declaration's own syntax otherwise.
pub(crate) fn method_at_parent<'a>(
    site: &DiagnosticSite<'a>,
) -> Result<MethodContext<'a>, ContextError> {
    let tree = site.tree();
    let parent = site.parent()?;
    let method = as_method_declaration(tree, parent).ok_or(ContextError::UnexpectedShape {
        expected: "method declaration",
        node: parent,
    })?;

    // Constructors have no return type to forget.
    let return_node = method
        .return_type
        .ok_or(ContextError::NotFound("return type"))?;
    let return_type = match method.binding {
        Some(binding) => type_name(&binding.return_type),
        None => tree.render(return_node),
    };

    let parameter_types = match method.binding {
        Some(binding) => binding.parameter_types.iter().map(type_name).collect(),
        None => method
            .parameters
            .iter()
            .map(|&param| match tree.kind(param) {
                Some(NodeKind::SingleVariableDeclaration { ty, .. }) => Ok(tree.render(*ty)),
                _ => Err(ContextError::UnexpectedShape {
                    expected: "parameter",
                    node: param,
                }),
            })
            .collect::<Result<Vec<_>, _>>()?,
    };

    Ok(MethodContext {
        name: method.name,
        return_type,
        parameter_types,
    })
}
