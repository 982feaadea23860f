//! Links about types and variables.

use tutor_ir::NodeKind;

use crate::context::{as_fragment, closest_expression_type, enclosing_fragment, type_name};
use crate::{simple_name, ContextError, DiagnosticKind, DiagnosticSite};

use super::text::is_identifier_part;
use super::{LinkStrategy, Query};

/// Arguments: provided type, required type.
pub(super) struct TypeMismatch;

impl LinkStrategy for TypeMismatch {
    fn kinds(&self) -> &'static [DiagnosticKind] {
        &[DiagnosticKind::TypeMismatch]
    }

    fn link(&self, site: &DiagnosticSite<'_>) -> Result<Query, ContextError> {
        let provided = simple_name(site.argument(0)?);
        let required = simple_name(site.argument(1)?);
        // In `int x = f;` the anchor is the value; name the variable when
        // there is one.
        let var = site
            .parent()
            .ok()
            .and_then(|parent| as_fragment(site.tree(), parent))
            .map_or_else(|| site.anchor_text(), |fragment| fragment.name.to_string());

        Ok(Query::new("typemismatch")
            .param("typeonename", provided)
            .param("typetwoname", required)
            .param("varname", var))
    }
}

/// Arguments: the unknown type.
pub(super) struct UndefinedType;

impl LinkStrategy for UndefinedType {
    fn kinds(&self) -> &'static [DiagnosticKind] {
        &[DiagnosticKind::UndefinedType]
    }

    fn link(&self, site: &DiagnosticSite<'_>) -> Result<Query, ContextError> {
        let class = simple_name(site.argument(0)?);
        let fragment = enclosing_fragment(site.tree(), site.anchor())
            .ok_or(ContextError::NotFound("variable declaration"))?;

        Ok(Query::new("typenotfound")
            .param("classname", class)
            .param("correctclassname", "CorrectName")
            .param("varname", fragment.name))
    }
}

/// An array declared with a size on the variable: `int nums[5];`.
pub(super) struct IncorrectVariableDeclaration;

impl LinkStrategy for IncorrectVariableDeclaration {
    fn kinds(&self) -> &'static [DiagnosticKind] {
        &[DiagnosticKind::IncorrectVariableDeclaration]
    }

    fn link(&self, site: &DiagnosticSite<'_>) -> Result<Query, ContextError> {
        let fragment = enclosing_fragment(site.tree(), site.anchor())
            .ok_or(ContextError::NotFound("variable declaration"))?;
        let binding = fragment
            .binding
            .ok_or(ContextError::Unresolved("variable type"))?;

        Ok(Query::new("incorrectvariabledeclaration")
            .param("typename", simple_name(binding.element_name()))
            .param("foundname", fragment.name))
    }
}

/// Arguments: the unknown variable name.
pub(super) struct UndefinedVariable;

impl LinkStrategy for UndefinedVariable {
    fn kinds(&self) -> &'static [DiagnosticKind] {
        &[DiagnosticKind::UndefinedVariable]
    }

    fn link(&self, site: &DiagnosticSite<'_>) -> Result<Query, ContextError> {
        let var = site.argument(0)?;
        let ty = closest_expression_type(site.tree(), site.anchor(), var);

        Ok(Query::new("variablenotfound")
            .param("classname", simple_name(&ty))
            .param("varname", var))
    }
}

/// Arguments: the variable read before assignment.
pub(super) struct UninitializedVariable;

impl LinkStrategy for UninitializedVariable {
    fn kinds(&self) -> &'static [DiagnosticKind] {
        &[DiagnosticKind::UninitializedVariable]
    }

    fn link(&self, site: &DiagnosticSite<'_>) -> Result<Query, ContextError> {
        let var = site.argument(0)?;
        let tree = site.tree();
        let parent = site.parent()?;

        let expression = match tree.kind(parent) {
            Some(NodeKind::ExpressionStatement { expression }) => *expression,
            Some(kind) if kind.is_expression() => parent,
            _ => {
                return Err(ContextError::UnexpectedShape {
                    expected: "expression",
                    node: parent,
                })
            }
        };
        let ty = tree
            .resolved_type(expression)
            .ok_or(ContextError::Unresolved("expression type"))?;

        Ok(Query::new("variablenotinit")
            .param("varname", var)
            .param("typename", type_name(ty)))
    }
}

/// Arguments: the token found where a type was expected.
pub(super) struct UnexpectedToken;

impl LinkStrategy for UnexpectedToken {
    fn kinds(&self) -> &'static [DiagnosticKind] {
        &[DiagnosticKind::UnexpectedToken]
    }

    fn link(&self, site: &DiagnosticSite<'_>) -> Result<Query, ContextError> {
        let token = site.argument(0)?;
        if token.is_empty() || !token.chars().all(is_identifier_part) {
            return Err(ContextError::NotFound("type name token"));
        }
        Ok(Query::new("unexpectedtoken").param("typename", token))
    }
}
