//! Type usage hints.

use crate::context::{as_fragment, enclosing_fragment};
use crate::{
    simple_name, var_description, ContextError, DemoValues, DiagnosticKind, DiagnosticSite, Hint,
    HintStrategy,
};

/// A value of one type stored in a variable of another.
///
/// Arguments: provided type, required type.
pub(super) struct TypeMismatch;

impl HintStrategy for TypeMismatch {
    fn kinds(&self) -> &'static [DiagnosticKind] {
        &[DiagnosticKind::TypeMismatch]
    }

    fn hints(
        &self,
        site: &DiagnosticSite<'_>,
        demo: &mut DemoValues<'_>,
    ) -> Result<Vec<Hint>, ContextError> {
        let provided = simple_name(site.argument(0)?);
        let required = simple_name(site.argument(1)?);
        let (provided, required) = (&*provided, &*required);
        let parent = site.parent()?;
        let var = as_fragment(site.tree(), parent)
            .ok_or(ContextError::UnexpectedShape {
                expected: "variable declaration fragment",
                node: parent,
            })?
            .name;

        let problem = format!(
            "You are trying to use the {} {var} as a {}.",
            var_description(required),
            var_description(provided)
        );

        let retype = Hint::new(
            &problem,
            format!("You might need to change the variable declaration of {var} to type {provided}."),
        )
        .with_bad_code(demo.declaration_with_value(required, var, provided))
        .with_good_code(demo.declaration(provided, var));

        let revalue = Hint::new(
            &problem,
            format!("You might need to change the value of {var} to a {required}."),
        )
        .with_bad_code(demo.declaration_with_value(required, var, provided))
        .with_good_code(demo.declaration(required, var));

        let returned = demo.declaration(provided, var);
        let method =
            |ty: &str| format!("{ty} doSomething() {{\n  {returned}\n  return {var};\n}}");
        let return_type = Hint::new(
            &problem,
            format!("You might need to change the method's return type to {provided}."),
        )
        .with_bad_code(method(required))
        .with_good_code(method(provided));

        let mut hints = vec![retype, revalue, return_type];

        // Arithmetic mixing an int variable with a float literal.
        if provided == "float" && required == "int" {
            let update = format!("{var} = {var} + 3.14;");
            hints.push(
                Hint::new(
                    &problem,
                    format!(
                        "You may have used an int-type variable {var} in an operation involving \
                         the float type."
                    ),
                )
                .with_bad_code(format!("{}\n{update}", demo.declaration(required, var)))
                .with_good_code(format!("{}\n{update}", demo.declaration(provided, var))),
            );
        }

        Ok(hints)
    }
}

/// A class name the compiler cannot resolve.
///
/// Arguments: the unknown type.
pub(super) struct UndefinedType;

impl HintStrategy for UndefinedType {
    fn kinds(&self) -> &'static [DiagnosticKind] {
        &[DiagnosticKind::UndefinedType]
    }

    fn hints(
        &self,
        site: &DiagnosticSite<'_>,
        demo: &mut DemoValues<'_>,
    ) -> Result<Vec<Hint>, ContextError> {
        let class = simple_name(site.argument(0)?);
        let class = &*class;
        let var = enclosing_fragment(site.tree(), site.anchor())
            .ok_or(ContextError::NotFound("variable declaration"))?
            .name;

        let problem = format!(
            "You are trying to use a class, {class}, which the compiler does not recognize."
        );
        let declaration = demo.declaration(class, var);

        let typo = Hint::new(
            &problem,
            format!("You may have misspelled the name of the class {class}."),
        )
        .with_bad_code(&declaration)
        .with_good_code(demo.declaration("CorrectName", var));

        let library = Hint::new(
            &problem,
            format!("You may need to import the library that contains {class}."),
        )
        .with_bad_code(&declaration)
        .with_good_code(format!("import libraryname.*;\n\n{declaration}"));

        let project_file = Hint::new(
            &problem,
            format!("If {class} is defined in another file of your project, you may need to import it."),
        )
        .with_bad_code(&declaration)
        .with_good_code(format!("import yourpackage.{class};\n\n{declaration}"));

        let create = Hint::new(
            &problem,
            format!("You may need to create the class {class}."),
        )
        .with_bad_code(&declaration)
        .with_good_code(format!("class {class} {{\n  ...\n}}\n\n{declaration}"));

        Ok(vec![typo, library, project_file, create])
    }
}

#[cfg(test)]
mod tests;
