//! Array creation hints.

use crate::context::{creation_child, missing_dimension};
use crate::{ContextError, DemoValues, DiagnosticKind, DiagnosticSite, Hint, HintStrategy};

/// Size used in corrected array examples.
const EXAMPLE_SIZE: usize = 5;

/// `int[] nums = new int[];`
pub(super) struct MissingArrayDimension;

impl HintStrategy for MissingArrayDimension {
    fn kinds(&self) -> &'static [DiagnosticKind] {
        &[DiagnosticKind::MissingArrayDimension]
    }

    fn hints(
        &self,
        site: &DiagnosticSite<'_>,
        _demo: &mut DemoValues<'_>,
    ) -> Result<Vec<Hint>, ContextError> {
        let decl = missing_dimension(site)?;
        let (ty, name) = (&decl.element_type, &decl.name);

        Ok(vec![Hint::new(
            "You have not given the array a certain size.",
            "You may have forgotten to type the size of the array inside the brackets.",
        )
        .with_bad_code(format!("{ty}[] {name} = new {ty}[];"))
        .with_good_code(format!("{ty}[] {name} = new {ty}[{EXAMPLE_SIZE}];"))])
    }
}

/// `int[][] grid = new int[][5];`
pub(super) struct IllegalArrayDimension;

impl HintStrategy for IllegalArrayDimension {
    fn kinds(&self) -> &'static [DiagnosticKind] {
        &[DiagnosticKind::IllegalArrayDimension]
    }

    fn hints(
        &self,
        site: &DiagnosticSite<'_>,
        _demo: &mut DemoValues<'_>,
    ) -> Result<Vec<Hint>, ContextError> {
        let decl = creation_child(site)?;
        let (ty, name) = (&decl.element_type, &decl.name);
        let n = EXAMPLE_SIZE;

        Ok(vec![Hint::new(
            "In a 2D array, you have not given the innermost array a certain size.",
            "Specify the size of the innermost array.",
        )
        .with_bad_code(format!("{ty}[][] {name} = new {ty}[][{n}];"))
        .with_good_code(format!("{ty}[][] {name} = new {ty}[{n}][{n}];"))
        .with_good_code(format!("{ty}[][] {name} = new {ty}[{n}][];"))])
    }
}

/// `int[] nums = new int[5] {1, 2, 3, 4, 5};`
pub(super) struct ArrayDimensionWithInitializer;

impl HintStrategy for ArrayDimensionWithInitializer {
    fn kinds(&self) -> &'static [DiagnosticKind] {
        &[DiagnosticKind::ArrayDimensionWithInitializer]
    }

    fn hints(
        &self,
        site: &DiagnosticSite<'_>,
        demo: &mut DemoValues<'_>,
    ) -> Result<Vec<Hint>, ContextError> {
        let decl = creation_child(site)?;
        let (ty, name) = (&decl.element_type, &decl.name);
        let n = EXAMPLE_SIZE;
        let list = demo.initializer_list(ty, n);

        Ok(vec![Hint::new(
            "You defined an array twice.",
            "You may have used both methods to construct an array together.",
        )
        .with_bad_code(format!("{ty}[] {name} = new {ty}[{n}] {list};"))
        .with_good_code(format!("{ty}[] {name} = new {ty}[{n}];"))
        .with_good_code(format!("{ty}[] {name} = {list};"))])
    }
}
