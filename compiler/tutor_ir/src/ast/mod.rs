//! Syntax tree node kinds.
//!
//! The node set covers what learner programs in a Java-like teaching
//! language contain: class/field/method declarations, local declarations,
//! statements, and the expression forms the type checker reports on.
//!
//! Children are referenced by [`NodeId`]. Every child listed by
//! [`NodeKind::children`] gets its parent link set when the tree is built.

mod operators;

pub use operators::{InfixOp, PostfixOp, PrefixOp};

use crate::{MethodBinding, NodeId, Span, TypeBinding};

/// A node in the syntax tree arena.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Node {
    pub(crate) kind: NodeKind,
    pub(crate) span: Span,
    pub(crate) parent: Option<NodeId>,
    pub(crate) resolved_type: Option<TypeBinding>,
}

impl Node {
    /// The node's kind and payload.
    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    /// Source range covered by this node.
    pub fn span(&self) -> Span {
        self.span
    }

    /// Parent node, `None` for the root.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// Type the front end resolved for this expression, if any.
    pub fn resolved_type(&self) -> Option<&TypeBinding> {
        self.resolved_type.as_ref()
    }
}

/// Node kinds.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum NodeKind {
    // Declarations
    CompilationUnit {
        types: Vec<NodeId>,
    },
    TypeDeclaration {
        name: NodeId,
        members: Vec<NodeId>,
    },
    FieldDeclaration {
        ty: NodeId,
        fragments: Vec<NodeId>,
    },
    MethodDeclaration {
        name: NodeId,
        /// `None` for constructors.
        return_type: Option<NodeId>,
        parameters: Vec<NodeId>,
        body: Option<NodeId>,
        binding: Option<MethodBinding>,
    },
    /// A method parameter: `int count`.
    SingleVariableDeclaration {
        ty: NodeId,
        name: NodeId,
    },
    /// One declarator inside a field or local declaration: `x = 5`.
    VariableDeclarationFragment {
        name: NodeId,
        initializer: Option<NodeId>,
        /// Declared type of the variable.
        binding: Option<TypeBinding>,
    },

    // Statements
    Block {
        statements: Vec<NodeId>,
    },
    VariableDeclarationStatement {
        ty: NodeId,
        fragments: Vec<NodeId>,
    },
    ExpressionStatement {
        expression: NodeId,
    },
    ReturnStatement {
        expression: Option<NodeId>,
    },
    IfStatement {
        condition: NodeId,
        then_branch: NodeId,
        else_branch: Option<NodeId>,
    },

    // Types
    PrimitiveType {
        keyword: String,
    },
    SimpleType {
        name: NodeId,
    },
    ArrayType {
        element: NodeId,
        dimensions: u32,
    },

    // Names
    SimpleName {
        identifier: String,
    },
    QualifiedName {
        qualifier: NodeId,
        name: NodeId,
    },

    // Literals (stored as written, quotes included)
    NumberLiteral {
        token: String,
    },
    StringLiteral {
        literal: String,
    },
    CharacterLiteral {
        literal: String,
    },
    BooleanLiteral {
        value: bool,
    },
    NullLiteral,

    // Expressions
    MethodInvocation {
        receiver: Option<NodeId>,
        name: NodeId,
        arguments: Vec<NodeId>,
        binding: Option<MethodBinding>,
    },
    ClassInstanceCreation {
        ty: NodeId,
        arguments: Vec<NodeId>,
    },
    /// `new int[5][]`, `new int[] {1, 2}`; `ty` is an [`NodeKind::ArrayType`].
    ArrayCreation {
        ty: NodeId,
        dimensions: Vec<NodeId>,
        initializer: Option<NodeId>,
    },
    ArrayInitializer {
        elements: Vec<NodeId>,
    },
    ArrayAccess {
        array: NodeId,
        index: NodeId,
    },
    Assignment {
        target: NodeId,
        value: NodeId,
    },
    PrefixExpression {
        operator: PrefixOp,
        operand: NodeId,
    },
    PostfixExpression {
        operator: PostfixOp,
        operand: NodeId,
    },
    InfixExpression {
        operator: InfixOp,
        left: NodeId,
        right: NodeId,
    },
    ConditionalExpression {
        condition: NodeId,
        then_expr: NodeId,
        else_expr: NodeId,
    },
    InstanceofExpression {
        expression: NodeId,
        ty: NodeId,
    },
    CastExpression {
        ty: NodeId,
        expression: NodeId,
    },
    ParenthesizedExpression {
        expression: NodeId,
    },
}

impl NodeKind {
    /// Direct children in source order.
    pub fn children(&self) -> Vec<NodeId> {
        let mut out = Vec::new();
        match self {
            NodeKind::CompilationUnit { types } => out.extend(types),
            NodeKind::TypeDeclaration { name, members } => {
                out.push(*name);
                out.extend(members);
            }
            NodeKind::FieldDeclaration { ty, fragments }
            | NodeKind::VariableDeclarationStatement { ty, fragments } => {
                out.push(*ty);
                out.extend(fragments);
            }
            NodeKind::MethodDeclaration {
                name,
                return_type,
                parameters,
                body,
                ..
            } => {
                out.extend(return_type);
                out.push(*name);
                out.extend(parameters);
                out.extend(body);
            }
            NodeKind::SingleVariableDeclaration { ty, name } => {
                out.push(*ty);
                out.push(*name);
            }
            NodeKind::VariableDeclarationFragment {
                name, initializer, ..
            } => {
                out.push(*name);
                out.extend(initializer);
            }
            NodeKind::Block { statements } => out.extend(statements),
            NodeKind::ExpressionStatement { expression }
            | NodeKind::ParenthesizedExpression { expression } => out.push(*expression),
            NodeKind::ReturnStatement { expression } => out.extend(expression),
            NodeKind::IfStatement {
                condition,
                then_branch,
                else_branch,
            } => {
                out.push(*condition);
                out.push(*then_branch);
                out.extend(else_branch);
            }
            NodeKind::SimpleType { name } => out.push(*name),
            NodeKind::ArrayType { element, .. } => out.push(*element),
            NodeKind::QualifiedName { qualifier, name } => {
                out.push(*qualifier);
                out.push(*name);
            }
            NodeKind::PrimitiveType { .. }
            | NodeKind::SimpleName { .. }
            | NodeKind::NumberLiteral { .. }
            | NodeKind::StringLiteral { .. }
            | NodeKind::CharacterLiteral { .. }
            | NodeKind::BooleanLiteral { .. }
            | NodeKind::NullLiteral => {}
            NodeKind::MethodInvocation {
                receiver,
                name,
                arguments,
                ..
            } => {
                out.extend(receiver);
                out.push(*name);
                out.extend(arguments);
            }
            NodeKind::ClassInstanceCreation { ty, arguments } => {
                out.push(*ty);
                out.extend(arguments);
            }
            NodeKind::ArrayCreation {
                ty,
                dimensions,
                initializer,
            } => {
                out.push(*ty);
                out.extend(dimensions);
                out.extend(initializer);
            }
            NodeKind::ArrayInitializer { elements } => out.extend(elements),
            NodeKind::ArrayAccess { array, index } => {
                out.push(*array);
                out.push(*index);
            }
            NodeKind::Assignment { target, value } => {
                out.push(*target);
                out.push(*value);
            }
            NodeKind::PrefixExpression { operand, .. }
            | NodeKind::PostfixExpression { operand, .. } => out.push(*operand),
            NodeKind::InfixExpression { left, right, .. } => {
                out.push(*left);
                out.push(*right);
            }
            NodeKind::ConditionalExpression {
                condition,
                then_expr,
                else_expr,
            } => {
                out.push(*condition);
                out.push(*then_expr);
                out.push(*else_expr);
            }
            NodeKind::InstanceofExpression { expression, ty } => {
                out.push(*expression);
                out.push(*ty);
            }
            NodeKind::CastExpression { ty, expression } => {
                out.push(*ty);
                out.push(*expression);
            }
        }
        out
    }

    /// Check if this node is an expression (names and literals included).
    pub fn is_expression(&self) -> bool {
        matches!(
            self,
            NodeKind::SimpleName { .. }
                | NodeKind::QualifiedName { .. }
                | NodeKind::NumberLiteral { .. }
                | NodeKind::StringLiteral { .. }
                | NodeKind::CharacterLiteral { .. }
                | NodeKind::BooleanLiteral { .. }
                | NodeKind::NullLiteral
                | NodeKind::MethodInvocation { .. }
                | NodeKind::ClassInstanceCreation { .. }
                | NodeKind::ArrayCreation { .. }
                | NodeKind::ArrayInitializer { .. }
                | NodeKind::ArrayAccess { .. }
                | NodeKind::Assignment { .. }
                | NodeKind::PrefixExpression { .. }
                | NodeKind::PostfixExpression { .. }
                | NodeKind::InfixExpression { .. }
                | NodeKind::ConditionalExpression { .. }
                | NodeKind::InstanceofExpression { .. }
                | NodeKind::CastExpression { .. }
                | NodeKind::ParenthesizedExpression { .. }
        )
    }

    /// Short name of the kind, for logs and error messages.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::CompilationUnit { .. } => "compilation unit",
            NodeKind::TypeDeclaration { .. } => "type declaration",
            NodeKind::FieldDeclaration { .. } => "field declaration",
            NodeKind::MethodDeclaration { .. } => "method declaration",
            NodeKind::SingleVariableDeclaration { .. } => "parameter",
            NodeKind::VariableDeclarationFragment { .. } => "declaration fragment",
            NodeKind::Block { .. } => "block",
            NodeKind::VariableDeclarationStatement { .. } => "declaration statement",
            NodeKind::ExpressionStatement { .. } => "expression statement",
            NodeKind::ReturnStatement { .. } => "return statement",
            NodeKind::IfStatement { .. } => "if statement",
            NodeKind::PrimitiveType { .. } => "primitive type",
            NodeKind::SimpleType { .. } => "simple type",
            NodeKind::ArrayType { .. } => "array type",
            NodeKind::SimpleName { .. } => "simple name",
            NodeKind::QualifiedName { .. } => "qualified name",
            NodeKind::NumberLiteral { .. } => "number literal",
            NodeKind::StringLiteral { .. } => "string literal",
            NodeKind::CharacterLiteral { .. } => "character literal",
            NodeKind::BooleanLiteral { .. } => "boolean literal",
            NodeKind::NullLiteral => "null literal",
            NodeKind::MethodInvocation { .. } => "method invocation",
            NodeKind::ClassInstanceCreation { .. } => "instance creation",
            NodeKind::ArrayCreation { .. } => "array creation",
            NodeKind::ArrayInitializer { .. } => "array initializer",
            NodeKind::ArrayAccess { .. } => "array access",
            NodeKind::Assignment { .. } => "assignment",
            NodeKind::PrefixExpression { .. } => "prefix expression",
            NodeKind::PostfixExpression { .. } => "postfix expression",
            NodeKind::InfixExpression { .. } => "infix expression",
            NodeKind::ConditionalExpression { .. } => "conditional expression",
            NodeKind::InstanceofExpression { .. } => "instanceof expression",
            NodeKind::CastExpression { .. } => "cast expression",
            NodeKind::ParenthesizedExpression { .. } => "parenthesized expression",
        }
    }
}
