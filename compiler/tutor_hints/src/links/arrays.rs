use crate::context::{as_array_creation, enclosing_fragment};
use crate::{simple_name, ContextError, DiagnosticKind, DiagnosticSite};

use super::{LinkStrategy, Query};

/// Name of the array variable being declared around the anchor.
fn array_name<'a>(site: &DiagnosticSite<'a>) -> Result<&'a str, ContextError> {
    enclosing_fragment(site.tree(), site.anchor())
        .map(|fragment| fragment.name)
        .ok_or(ContextError::NotFound("variable declaration"))
}

/// Element type of the array creation that is the anchor's parent.
fn creation_element_type(site: &DiagnosticSite<'_>) -> Result<String, ContextError> {
    let parent = site.parent()?;
    let creation =
        as_array_creation(site.tree(), parent).ok_or(ContextError::UnexpectedShape {
            expected: "array creation",
            node: parent,
        })?;
    Ok(simple_name(&site.tree().render(creation.element)).into_owned())
}

pub(super) struct MissingArrayDimension;

impl LinkStrategy for MissingArrayDimension {
    fn kinds(&self) -> &'static [DiagnosticKind] {
        &[DiagnosticKind::MissingArrayDimension]
    }

    fn link(&self, site: &DiagnosticSite<'_>) -> Result<Query, ContextError> {
        let name = array_name(site)?;
        Ok(Query::new("incorrectdimensionexpression1")
            .param("typename", simple_name(&site.anchor_text()))
            .param("arrname", name))
    }
}

pub(super) struct IllegalArrayDimension;

impl LinkStrategy for IllegalArrayDimension {
    fn kinds(&self) -> &'static [DiagnosticKind] {
        &[DiagnosticKind::IllegalArrayDimension]
    }

    fn link(&self, site: &DiagnosticSite<'_>) -> Result<Query, ContextError> {
        let ty = creation_element_type(site)?;
        Ok(Query::new("incorrectdimensionexpression2")
            .param("typename", ty)
            .param("arrname", array_name(site)?))
    }
}

pub(super) struct ArrayDimensionWithInitializer;

impl LinkStrategy for ArrayDimensionWithInitializer {
    fn kinds(&self) -> &'static [DiagnosticKind] {
        &[DiagnosticKind::ArrayDimensionWithInitializer]
    }

    fn link(&self, site: &DiagnosticSite<'_>) -> Result<Query, ContextError> {
        let ty = creation_element_type(site)?;
        Ok(Query::new("incorrectdimensionexpression3")
            .param("typename", ty)
            .param("arrname", array_name(site)?))
    }
}
