use tutor_ir::NodeKind;

use crate::context::{
    call_at_parent, closest_expression_type, enclosing_method, method_at_parent, type_name,
};
use crate::{simple_name, ContextError, DiagnosticKind, DiagnosticSite};

use super::{LinkStrategy, Query};

pub(super) struct UndefinedMethod;

impl LinkStrategy for UndefinedMethod {
    fn kinds(&self) -> &'static [DiagnosticKind] {
        &[DiagnosticKind::UndefinedMethod]
    }

    fn link(&self, site: &DiagnosticSite<'_>) -> Result<Query, ContextError> {
        let call = call_at_parent(site)?;
        // What the call's value is used as, not what it receives.
        let used_as = closest_expression_type(site.tree(), site.parent()?, "");

        Ok(Query::new("methodnotfound")
            .param("methodname", call.name)
            .param("correctmethodname", "correctName")
            .param("typename", simple_name(&used_as))
            .list_param("providedparams", &call.arguments)
            .list_param("providedtypes", &call.argument_types))
    }
}

pub(super) struct ParameterMismatch;

impl LinkStrategy for ParameterMismatch {
    fn kinds(&self) -> &'static [DiagnosticKind] {
        &[DiagnosticKind::ParameterMismatch]
    }

    fn link(&self, site: &DiagnosticSite<'_>) -> Result<Query, ContextError> {
        let call = call_at_parent(site)?;
        let binding = call
            .binding
            .ok_or(ContextError::Unresolved("method binding"))?;
        let required: Vec<String> = binding.parameter_types.iter().map(type_name).collect();

        Ok(Query::new("parametermismatch")
            .param("methodname", call.name)
            .param("methodtypename", type_name(&binding.return_type))
            .list_param("providedtypes", &call.argument_types)
            .list_param("requiredtypes", &required))
    }
}

pub(super) struct MissingReturn;

impl LinkStrategy for MissingReturn {
    fn kinds(&self) -> &'static [DiagnosticKind] {
        &[DiagnosticKind::MissingReturn]
    }

    fn link(&self, site: &DiagnosticSite<'_>) -> Result<Query, ContextError> {
        let method = method_at_parent(site)?;
        Ok(Query::new("returnmissing")
            .param("methodname", method.name)
            .param("typename", method.return_type)
            .list_param("requiredtypes", &method.parameter_types))
    }
}

/// Arguments: the instance method's name, the file name.
pub(super) struct NonStaticFromStatic;

impl LinkStrategy for NonStaticFromStatic {
    fn kinds(&self) -> &'static [DiagnosticKind] {
        &[DiagnosticKind::NonStaticFromStatic]
    }

    fn link(&self, site: &DiagnosticSite<'_>) -> Result<Query, ContextError> {
        let method = site.argument(0)?;
        let file = site.argument(1)?;
        let caller = enclosing_method(site.tree(), site.anchor())
            .ok_or(ContextError::NotFound("method declaration"))?;

        Ok(Query::new("nonstaticfromstatic")
            .param("methodname", method)
            .param("staticmethodname", caller.name)
            .param("filename", file))
    }
}

/// Arguments: the receiver's type, the method name.
pub(super) struct MethodCallOnWrongType;

impl LinkStrategy for MethodCallOnWrongType {
    fn kinds(&self) -> &'static [DiagnosticKind] {
        &[DiagnosticKind::MethodCallOnWrongType]
    }

    fn link(&self, site: &DiagnosticSite<'_>) -> Result<Query, ContextError> {
        let ty = site.argument(0)?;
        let method = site.argument(1)?;

        Ok(Query::new("methodcallonwrongtype")
            .param("methodname", method)
            .param("typename", simple_name(ty))
            .param("varname", site.anchor_text()))
    }
}

/// A call written where a declaration was expected, e.g. `size.x(10);` at
/// class level.
pub(super) struct VariableDeclarators;

impl LinkStrategy for VariableDeclarators {
    fn kinds(&self) -> &'static [DiagnosticKind] {
        &[DiagnosticKind::VariableDeclarators]
    }

    fn link(&self, site: &DiagnosticSite<'_>) -> Result<Query, ContextError> {
        let tree = site.tree();
        let name = match site.parent() {
            Ok(parent) if matches!(tree.kind(parent), Some(NodeKind::QualifiedName { .. })) => {
                tree.render(parent)
            }
            _ => site.anchor_text(),
        };
        Ok(Query::new("syntaxerrorvariabledeclarators").param("methodonename", name))
    }
}
