//! Diagnostics as reported by the front end.

use std::fmt;

use tutor_ir::Span;

/// Kinds of compiler diagnostics the front end can report.
///
/// Not every kind has hints or a reference link; see
/// [`HintRegistry::builtin`](crate::HintRegistry::builtin) and
/// [`LinkRegistry::builtin`](crate::LinkRegistry::builtin).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DiagnosticKind {
    // Arrays
    /// `new int[]` with neither a size nor an initializer
    MissingArrayDimension,
    /// `new int[][5]`: an inner size given without the outer one
    IllegalArrayDimension,
    /// `new int[5] {1, 2}`: size and initializer together
    ArrayDimensionWithInitializer,

    // Methods
    /// Call to a method that does not exist
    UndefinedMethod,
    /// Call whose arguments do not match the parameters
    ParameterMismatch,
    /// Non-void method that can finish without returning
    MissingReturn,
    /// Instance method called from a static method
    NonStaticFromStatic,
    /// Method called on a receiver whose type does not have it
    MethodCallOnWrongType,

    // Types and variables
    /// Value assigned to a variable of an incompatible type
    TypeMismatch,
    /// Reference to a class that does not exist
    UndefinedType,
    /// Reference to a variable that does not exist
    UndefinedVariable,
    /// Read of a local variable before it is assigned
    UninitializedVariable,
    /// Malformed array variable declaration
    IncorrectVariableDeclaration,

    // Syntax
    /// Token the parser did not expect
    UnexpectedToken,
    /// Malformed list of variable declarators
    VariableDeclarators,

    // Reported, but with no hints or links
    /// Statement that can never run
    UnreachableCode,
    /// Variable declared twice in the same scope
    DuplicateVariable,
    /// Checked exception neither caught nor declared
    UnhandledException,
}

impl DiagnosticKind {
    /// All diagnostic kinds, in declaration order.
    pub const ALL: &[DiagnosticKind] = &[
        DiagnosticKind::MissingArrayDimension,
        DiagnosticKind::IllegalArrayDimension,
        DiagnosticKind::ArrayDimensionWithInitializer,
        DiagnosticKind::UndefinedMethod,
        DiagnosticKind::ParameterMismatch,
        DiagnosticKind::MissingReturn,
        DiagnosticKind::NonStaticFromStatic,
        DiagnosticKind::MethodCallOnWrongType,
        DiagnosticKind::TypeMismatch,
        DiagnosticKind::UndefinedType,
        DiagnosticKind::UndefinedVariable,
        DiagnosticKind::UninitializedVariable,
        DiagnosticKind::IncorrectVariableDeclaration,
        DiagnosticKind::UnexpectedToken,
        DiagnosticKind::VariableDeclarators,
        DiagnosticKind::UnreachableCode,
        DiagnosticKind::DuplicateVariable,
        DiagnosticKind::UnhandledException,
    ];

    /// Get the identifier used in logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            DiagnosticKind::MissingArrayDimension => "missing-array-dimension",
            DiagnosticKind::IllegalArrayDimension => "illegal-array-dimension",
            DiagnosticKind::ArrayDimensionWithInitializer => "array-dimension-with-initializer",
            DiagnosticKind::UndefinedMethod => "undefined-method",
            DiagnosticKind::ParameterMismatch => "parameter-mismatch",
            DiagnosticKind::MissingReturn => "missing-return",
            DiagnosticKind::NonStaticFromStatic => "non-static-from-static",
            DiagnosticKind::MethodCallOnWrongType => "method-call-on-wrong-type",
            DiagnosticKind::TypeMismatch => "type-mismatch",
            DiagnosticKind::UndefinedType => "undefined-type",
            DiagnosticKind::UndefinedVariable => "undefined-variable",
            DiagnosticKind::UninitializedVariable => "uninitialized-variable",
            DiagnosticKind::IncorrectVariableDeclaration => "incorrect-variable-declaration",
            DiagnosticKind::UnexpectedToken => "unexpected-token",
            DiagnosticKind::VariableDeclarators => "variable-declarators",
            DiagnosticKind::UnreachableCode => "unreachable-code",
            DiagnosticKind::DuplicateVariable => "duplicate-variable",
            DiagnosticKind::UnhandledException => "unhandled-exception",
        }
    }
}

impl fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A diagnostic reported by the front end.
///
/// `arguments` are kind-specific. For [`DiagnosticKind::TypeMismatch`],
/// argument 0 is the provided type and argument 1 the required type, both
/// possibly qualified.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub arguments: Vec<String>,
    pub span: Span,
}

impl Diagnostic {
    /// Create a diagnostic with no arguments.
    pub fn new(kind: DiagnosticKind, span: Span) -> Self {
        Diagnostic {
            kind,
            arguments: Vec::new(),
            span,
        }
    }

    /// Append an argument.
    #[must_use]
    pub fn with_argument(mut self, argument: impl Into<String>) -> Self {
        self.arguments.push(argument.into());
        self
    }

    /// Get an argument by position.
    pub fn argument(&self, index: usize) -> Option<&str> {
        self.arguments.get(index).map(String::as_str)
    }
}
