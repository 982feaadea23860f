//! Rendering nodes back to source text.
//!
//! Hints quote the learner's own expressions (`foo(1, "a")`), so every node
//! kind renders to the Java-like surface syntax it was parsed from. Layout is
//! normalized: single spaces around binary operators, `, ` between list
//! items, one statement per line inside blocks.

use crate::{NodeId, NodeKind, SyntaxTree};

impl SyntaxTree {
    /// Render a node and its subtree as source text.
    ///
    /// Returns an empty string for an ID that is not in this tree.
    pub fn render(&self, id: NodeId) -> String {
        let mut unparser = Unparser {
            tree: self,
            out: String::new(),
        };
        if self.get(id).is_some() {
            unparser.node(id);
        }
        unparser.out
    }
}

struct Unparser<'t> {
    tree: &'t SyntaxTree,
    out: String,
}

impl Unparser<'_> {
    fn node(&mut self, id: NodeId) {
        let tree = self.tree;
        match &tree.node(id).kind {
            NodeKind::CompilationUnit { types } => self.separated(types, "\n\n"),
            NodeKind::TypeDeclaration { name, members } => {
                self.out.push_str("class ");
                self.node(*name);
                self.out.push_str(" {\n");
                for member in members {
                    self.node(*member);
                    self.out.push('\n');
                }
                self.out.push('}');
            }
            NodeKind::FieldDeclaration { ty, fragments }
            | NodeKind::VariableDeclarationStatement { ty, fragments } => {
                self.node(*ty);
                self.out.push(' ');
                self.separated(fragments, ", ");
                self.out.push(';');
            }
            NodeKind::MethodDeclaration {
                name,
                return_type,
                parameters,
                body,
                ..
            } => {
                if let Some(return_type) = return_type {
                    self.node(*return_type);
                    self.out.push(' ');
                }
                self.node(*name);
                self.parenthesized(parameters);
                match body {
                    Some(body) => {
                        self.out.push(' ');
                        self.node(*body);
                    }
                    None => self.out.push(';'),
                }
            }
            NodeKind::SingleVariableDeclaration { ty, name } => {
                self.node(*ty);
                self.out.push(' ');
                self.node(*name);
            }
            NodeKind::VariableDeclarationFragment {
                name, initializer, ..
            } => {
                self.node(*name);
                if let Some(initializer) = initializer {
                    self.out.push_str(" = ");
                    self.node(*initializer);
                }
            }
            NodeKind::Block { statements } => {
                self.out.push_str("{\n");
                for statement in statements {
                    self.node(*statement);
                    self.out.push('\n');
                }
                self.out.push('}');
            }
            NodeKind::ExpressionStatement { expression } => {
                self.node(*expression);
                self.out.push(';');
            }
            NodeKind::ReturnStatement { expression } => {
                self.out.push_str("return");
                if let Some(expression) = expression {
                    self.out.push(' ');
                    self.node(*expression);
                }
                self.out.push(';');
            }
            NodeKind::IfStatement {
                condition,
                then_branch,
                else_branch,
            } => {
                self.out.push_str("if (");
                self.node(*condition);
                self.out.push_str(") ");
                self.node(*then_branch);
                if let Some(else_branch) = else_branch {
                    self.out.push_str(" else ");
                    self.node(*else_branch);
                }
            }
            NodeKind::PrimitiveType { keyword } => self.out.push_str(keyword),
            NodeKind::SimpleType { name } => self.node(*name),
            NodeKind::ArrayType {
                element,
                dimensions,
            } => {
                self.node(*element);
                self.brackets(*dimensions);
            }
            NodeKind::SimpleName { identifier } => self.out.push_str(identifier),
            NodeKind::QualifiedName { qualifier, name } => {
                self.node(*qualifier);
                self.out.push('.');
                self.node(*name);
            }
            NodeKind::NumberLiteral { token } => self.out.push_str(token),
            NodeKind::StringLiteral { literal } | NodeKind::CharacterLiteral { literal } => {
                self.out.push_str(literal);
            }
            NodeKind::BooleanLiteral { value } => {
                self.out.push_str(if *value { "true" } else { "false" });
            }
            NodeKind::NullLiteral => self.out.push_str("null"),
            NodeKind::MethodInvocation {
                receiver,
                name,
                arguments,
                ..
            } => {
                if let Some(receiver) = receiver {
                    self.node(*receiver);
                    self.out.push('.');
                }
                self.node(*name);
                self.parenthesized(arguments);
            }
            NodeKind::ClassInstanceCreation { ty, arguments } => {
                self.out.push_str("new ");
                self.node(*ty);
                self.parenthesized(arguments);
            }
            NodeKind::ArrayCreation {
                ty,
                dimensions,
                initializer,
            } => {
                self.out.push_str("new ");
                let total = match &tree.node(*ty).kind {
                    NodeKind::ArrayType {
                        element,
                        dimensions,
                    } => {
                        self.node(*element);
                        *dimensions
                    }
                    _ => {
                        self.node(*ty);
                        0
                    }
                };
                for dimension in dimensions {
                    self.out.push('[');
                    self.node(*dimension);
                    self.out.push(']');
                }
                let given = u32::try_from(dimensions.len()).unwrap_or(u32::MAX);
                self.brackets(total.saturating_sub(given));
                if let Some(initializer) = initializer {
                    self.out.push(' ');
                    self.node(*initializer);
                }
            }
            NodeKind::ArrayInitializer { elements } => {
                self.out.push('{');
                self.separated(elements, ", ");
                self.out.push('}');
            }
            NodeKind::ArrayAccess { array, index } => {
                self.node(*array);
                self.out.push('[');
                self.node(*index);
                self.out.push(']');
            }
            NodeKind::Assignment { target, value } => {
                self.node(*target);
                self.out.push_str(" = ");
                self.node(*value);
            }
            NodeKind::PrefixExpression { operator, operand } => {
                self.out.push_str(operator.as_symbol());
                self.node(*operand);
            }
            NodeKind::PostfixExpression { operator, operand } => {
                self.node(*operand);
                self.out.push_str(operator.as_symbol());
            }
            NodeKind::InfixExpression {
                operator,
                left,
                right,
            } => {
                self.node(*left);
                self.out.push(' ');
                self.out.push_str(operator.as_symbol());
                self.out.push(' ');
                self.node(*right);
            }
            NodeKind::ConditionalExpression {
                condition,
                then_expr,
                else_expr,
            } => {
                self.node(*condition);
                self.out.push_str(" ? ");
                self.node(*then_expr);
                self.out.push_str(" : ");
                self.node(*else_expr);
            }
            NodeKind::InstanceofExpression { expression, ty } => {
                self.node(*expression);
                self.out.push_str(" instanceof ");
                self.node(*ty);
            }
            NodeKind::CastExpression { ty, expression } => {
                self.out.push('(');
                self.node(*ty);
                self.out.push_str(") ");
                self.node(*expression);
            }
            NodeKind::ParenthesizedExpression { expression } => {
                self.out.push('(');
                self.node(*expression);
                self.out.push(')');
            }
        }
    }

    fn separated(&mut self, ids: &[NodeId], separator: &str) {
        for (i, id) in ids.iter().enumerate() {
            if i > 0 {
                self.out.push_str(separator);
            }
            self.node(*id);
        }
    }

    fn parenthesized(&mut self, ids: &[NodeId]) {
        self.out.push('(');
        self.separated(ids, ", ");
        self.out.push(')');
    }

    fn brackets(&mut self, count: u32) {
        for _ in 0..count {
            self.out.push_str("[]");
        }
    }
}
