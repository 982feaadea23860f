//! Method call and declaration hints.

use crate::context::{call_at_parent, method_at_parent, type_name};
use crate::{
    method_declaration, method_signature, ContextError, DemoValues, DiagnosticKind,
    DiagnosticSite, Hint, HintStrategy,
};

/// Return type for methods the learner still has to write. The real one is
/// unknown; `int` is more familiar than `void`.
const PLACEHOLDER_RETURN_TYPE: &str = "int";

/// Call to a method the compiler does not know.
pub(super) struct UndefinedMethod;

impl HintStrategy for UndefinedMethod {
    fn kinds(&self) -> &'static [DiagnosticKind] {
        &[DiagnosticKind::UndefinedMethod]
    }

    fn hints(
        &self,
        site: &DiagnosticSite<'_>,
        demo: &mut DemoValues<'_>,
    ) -> Result<Vec<Hint>, ContextError> {
        let call = call_at_parent(site)?;
        let name = call.name;
        let args = call.arguments.join(", ");
        let with_parens = format!("{name}()");
        let current_call = format!("{name}({args})");
        let declaration =
            method_declaration(name, PLACEHOLDER_RETURN_TYPE, &call.argument_types);
        let class_with_method =
            format!("class YourClass {{\n  {declaration} {{\n    ...\n  }}\n}}\n");

        let problem = format!(
            "You are trying to use a function, {with_parens}, which the compiler does not \
             recognize. (\"Method\" and \"function\" are used interchangeably here.)"
        );

        let string_decl = demo.declaration("String", "str");
        let library_method = Hint::new(
            &problem,
            format!(
                "If you are trying to use an existing Java function, make sure you match the \
                 name of {with_parens} with the function."
            ),
        )
        .with_bad_code(format!("{string_decl}\nstr.{current_call};"))
        .with_good_code(format!("{string_decl}\nstr.correctName({args});"));

        let own_method = Hint::new(
            &problem,
            format!("You may need to change the name of {with_parens} to the method you created."),
        )
        .with_bad_code(format!("{current_call};"))
        .with_good_code(format!("{current_call};\n{declaration} {{\n  ...\n}}"));

        let object_decl = demo.declaration("YourClass", "myObject");
        let call_on_object = Hint::new(
            &problem,
            format!(
                "You may need to create an object of a class and call the method {with_parens} on it."
            ),
        )
        .with_bad_code(format!("{class_with_method}{current_call};"))
        .with_good_code(format!(
            "{class_with_method}{object_decl}\nmyObject.{current_call};"
        ));

        let create_method = Hint::new(
            &problem,
            format!("You may need to create the method {with_parens} in a class."),
        )
        .with_bad_code(format!(
            "class YourClass {{\n}}\n{object_decl}\nmyObject.{current_call};"
        ))
        .with_good_code(format!(
            "{class_with_method}{object_decl}\nmyObject.{current_call};"
        ));

        Ok(vec![library_method, own_method, call_on_object, create_method])
    }
}

/// Call whose arguments do not fit the method's parameters.
pub(super) struct ParameterMismatch;

impl HintStrategy for ParameterMismatch {
    fn kinds(&self) -> &'static [DiagnosticKind] {
        &[DiagnosticKind::ParameterMismatch]
    }

    fn hints(
        &self,
        site: &DiagnosticSite<'_>,
        demo: &mut DemoValues<'_>,
    ) -> Result<Vec<Hint>, ContextError> {
        let call = call_at_parent(site)?;
        let binding = call
            .binding
            .ok_or(ContextError::Unresolved("method binding"))?;
        let name = call.name;
        let required: Vec<String> = binding.parameter_types.iter().map(type_name).collect();
        let return_type = type_name(&binding.return_type);

        let signature = method_signature(name, &required);
        let declared = method_declaration(name, &return_type, &required);
        let redeclared = method_declaration(name, &return_type, &call.argument_types);
        let provided_call = format!("{name}({})", call.arguments.join(", "));

        let program = |declaration: &str, call: &str| {
            format!("{declaration} {{\n  ...\n}}\nvoid setup() {{\n  {call};\n}}\n")
        };
        let bad = program(&declared, &provided_call);
        let problem = format!("You are trying to use the method {signature} but with incorrect parameters.");

        let mut hints = vec![
            Hint::new(
                &problem,
                format!("You might need to change a parameter of {signature} to the expected type."),
            )
            .with_bad_code(&bad)
            .with_good_code(program(&declared, &demo.method_call(name, &required))),
            Hint::new(
                &problem,
                format!(
                    "You might need to change a parameter of {signature} in the method \
                     declaration to the expected type."
                ),
            )
            .with_bad_code(&bad)
            .with_good_code(program(&redeclared, &provided_call)),
        ];

        if call.argument_types.len() != required.len() {
            hints.push(
                Hint::new(
                    &problem,
                    format!(
                        "You may need to change the number of parameters to the expected \
                         amount when calling {signature}."
                    ),
                )
                .with_bad_code(&bad)
                .with_good_code(program(&declared, &demo.method_call(name, &required))),
            );
            hints.push(
                Hint::new(
                    &problem,
                    format!("Change the number of parameters in the {signature} method declaration."),
                )
                .with_bad_code(&bad)
                .with_good_code(program(&redeclared, &provided_call)),
            );
        }

        Ok(hints)
    }
}

/// Non-void method that can finish without returning.
pub(super) struct MissingReturn;

impl HintStrategy for MissingReturn {
    fn kinds(&self) -> &'static [DiagnosticKind] {
        &[DiagnosticKind::MissingReturn]
    }

    fn hints(
        &self,
        site: &DiagnosticSite<'_>,
        demo: &mut DemoValues<'_>,
    ) -> Result<Vec<Hint>, ContextError> {
        let method = method_at_parent(site)?;
        let ty = method.return_type.as_str();
        if ty == "void" {
            return Err(ContextError::NotFound("non-void return type"));
        }

        let signature = method_signature(method.name, &method.parameter_types);
        let declaration = method_declaration(method.name, ty, &method.parameter_types);
        let problem = format!(
            "You did not return a value of type {ty} like the definition of method {signature}."
        );

        let result = demo.declaration(ty, "result");
        let forgot_return = Hint::new(
            &problem,
            format!("You may have forgotten the return statement for the method {signature}."),
        )
        .with_bad_code(format!("{declaration} {{\n  {result}\n}}"))
        .with_good_code(format!("{declaration} {{\n  {result}\n  return result;\n}}"));

        let condition = demo.value("boolean");
        let first = demo.value(ty);
        let second = demo.value(ty);
        let branch = format!("  if ({condition}) {{\n    return {first};\n  }}");
        let every_branch = Hint::new(
            &problem,
            format!(
                "You may need to return a value of type {ty} from every branch of the method \
                 {signature}."
            ),
        )
        .with_bad_code(format!("{declaration} {{\n{branch}\n}}"))
        .with_good_code(format!(
            "{declaration} {{\n{branch} else {{\n    return {second};\n  }}\n}}"
        ))
        .with_good_code(format!(
            "{declaration} {{\n{branch}\n  return {second};\n}}"
        ));

        Ok(vec![forgot_return, every_branch])
    }
}
