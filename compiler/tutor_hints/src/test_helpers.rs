//! Syntax tree fixtures shared by unit tests.
//!
//! Each fixture builds the tree the front end would hand over for one
//! learner mistake, and records the node the diagnostic is anchored at.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use tutor_ir::{
    InfixOp, MethodBinding, NodeId, NodeKind, SyntaxTree, TreeBuilder, TypeBinding,
};

use crate::DiagnosticSite;

pub(crate) struct Fixture {
    pub tree: SyntaxTree,
    pub anchor: NodeId,
}

impl Fixture {
    pub fn site<'a>(&'a self, arguments: &'a [String]) -> DiagnosticSite<'a> {
        DiagnosticSite::new(&self.tree, self.anchor, arguments)
    }

    /// Same tree, anchored somewhere else.
    pub fn site_at<'a>(&'a self, anchor: NodeId, arguments: &'a [String]) -> DiagnosticSite<'a> {
        DiagnosticSite::new(&self.tree, anchor, arguments)
    }
}

pub(crate) fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(ToString::to_string).collect()
}

/// `void setup() { <statements> }`
fn in_setup(b: &mut TreeBuilder, statements: Vec<NodeId>) -> NodeId {
    let ret = b.primitive_type("void");
    let name = b.name("setup");
    let body = b.push(NodeKind::Block { statements });
    b.push(NodeKind::MethodDeclaration {
        name,
        return_type: Some(ret),
        parameters: vec![],
        body: Some(body),
        binding: Some(MethodBinding::new(TypeBinding::new("void"), vec![])),
    })
}

/// `T[] name = <initializer>;` with the declared type built from `elem`.
fn array_statement(b: &mut TreeBuilder, elem: &str, dims: u32, name: &str, init: NodeId) -> NodeId {
    let decl_elem = b.primitive_type(elem);
    let decl_ty = b.array_type(decl_elem, dims);
    let name = b.name(name);
    let fragment = b.push(NodeKind::VariableDeclarationFragment {
        name,
        initializer: Some(init),
        binding: Some(TypeBinding::array(elem, dims)),
    });
    b.push(NodeKind::VariableDeclarationStatement {
        ty: decl_ty,
        fragments: vec![fragment],
    })
}

/// `int[] nums = new int[];`, anchored at the creation's `int`.
pub(crate) fn missing_dimension() -> Fixture {
    let mut b = TreeBuilder::new();
    let elem = b.primitive_type("int");
    let ty = b.array_type(elem, 1);
    let creation = b.push(NodeKind::ArrayCreation {
        ty,
        dimensions: vec![],
        initializer: None,
    });
    let stmt = array_statement(&mut b, "int", 1, "nums", creation);
    let root = in_setup(&mut b, vec![stmt]);
    Fixture {
        tree: b.finish(root).unwrap(),
        anchor: elem,
    }
}

/// `int[][] grid = new int[][5];`, anchored at the `5`.
pub(crate) fn illegal_dimension() -> Fixture {
    let mut b = TreeBuilder::new();
    let elem = b.primitive_type("int");
    let ty = b.array_type(elem, 2);
    let five = b.number("5", "int");
    let creation = b.push(NodeKind::ArrayCreation {
        ty,
        dimensions: vec![five],
        initializer: None,
    });
    let stmt = array_statement(&mut b, "int", 2, "grid", creation);
    let root = in_setup(&mut b, vec![stmt]);
    Fixture {
        tree: b.finish(root).unwrap(),
        anchor: five,
    }
}

/// `String[] words = new String[2] {"a", "b"};`, anchored at the initializer.
pub(crate) fn dimension_with_initializer() -> Fixture {
    let mut b = TreeBuilder::new();
    let elem = b.simple_type("String");
    let ty = b.array_type(elem, 1);
    let two = b.number("2", "int");
    let a = b.string("a");
    let c = b.string("b");
    let init = b.push_typed(
        NodeKind::ArrayInitializer {
            elements: vec![a, c],
        },
        TypeBinding::array("String", 1),
    );
    let creation = b.push(NodeKind::ArrayCreation {
        ty,
        dimensions: vec![two],
        initializer: Some(init),
    });

    let decl_elem = b.simple_type("String");
    let decl_ty = b.array_type(decl_elem, 1);
    let name = b.name("words");
    let fragment = b.push(NodeKind::VariableDeclarationFragment {
        name,
        initializer: Some(creation),
        binding: Some(TypeBinding::array("java.lang.String", 1)),
    });
    let stmt = b.push(NodeKind::VariableDeclarationStatement {
        ty: decl_ty,
        fragments: vec![fragment],
    });
    let root = in_setup(&mut b, vec![stmt]);
    Fixture {
        tree: b.finish(root).unwrap(),
        anchor: init,
    }
}

/// `foo(1, "a");` inside `setup()`, anchored at `foo`.
pub(crate) fn undefined_method() -> Fixture {
    let mut b = TreeBuilder::new();
    let one = b.number("1", "int");
    let a = b.string("a");
    let name = b.name("foo");
    let call = b.push(NodeKind::MethodInvocation {
        receiver: None,
        name,
        arguments: vec![one, a],
        binding: None,
    });
    let stmt = b.push(NodeKind::ExpressionStatement { expression: call });
    let root = in_setup(&mut b, vec![stmt]);
    Fixture {
        tree: b.finish(root).unwrap(),
        anchor: name,
    }
}

/// A call to `int add(<required>)` with literal arguments of the provided
/// types, anchored at `add`.
pub(crate) fn parameter_mismatch(provided: &[(&str, &str)], required: &[&str]) -> Fixture {
    let mut b = TreeBuilder::new();
    let arguments: Vec<NodeId> = provided
        .iter()
        .map(|(text, ty)| {
            b.push_typed(
                NodeKind::NumberLiteral {
                    token: (*text).to_string(),
                },
                TypeBinding::new(*ty),
            )
        })
        .collect();
    let name = b.name("add");
    let call = b.push(NodeKind::MethodInvocation {
        receiver: None,
        name,
        arguments,
        binding: Some(MethodBinding::new(
            TypeBinding::new("int"),
            required.iter().map(|ty| TypeBinding::new(*ty)).collect(),
        )),
    });
    let stmt = b.push(NodeKind::ExpressionStatement { expression: call });
    let root = in_setup(&mut b, vec![stmt]);
    Fixture {
        tree: b.finish(root).unwrap(),
        anchor: name,
    }
}

/// `int doSomething(int n) { if (n > 0) { return n; } }`, anchored at the
/// return type. `resolved` controls whether the method binding is present.
pub(crate) fn missing_return(resolved: bool) -> Fixture {
    let mut b = TreeBuilder::new();
    let ret = b.primitive_type("int");
    let name = b.name("doSomething");
    let pty = b.primitive_type("int");
    let pname = b.name("n");
    let param = b.push(NodeKind::SingleVariableDeclaration {
        ty: pty,
        name: pname,
    });

    let n = b.push_typed(
        NodeKind::SimpleName {
            identifier: "n".into(),
        },
        TypeBinding::new("int"),
    );
    let zero = b.number("0", "int");
    let cond = b.push_typed(
        NodeKind::InfixExpression {
            operator: InfixOp::Greater,
            left: n,
            right: zero,
        },
        TypeBinding::new("boolean"),
    );
    let result = b.push_typed(
        NodeKind::SimpleName {
            identifier: "n".into(),
        },
        TypeBinding::new("int"),
    );
    let ret_stmt = b.push(NodeKind::ReturnStatement {
        expression: Some(result),
    });
    let then_block = b.push(NodeKind::Block {
        statements: vec![ret_stmt],
    });
    let if_stmt = b.push(NodeKind::IfStatement {
        condition: cond,
        then_branch: then_block,
        else_branch: None,
    });
    let body = b.push(NodeKind::Block {
        statements: vec![if_stmt],
    });
    let binding = resolved.then(|| {
        MethodBinding::new(TypeBinding::new("int"), vec![TypeBinding::new("int")])
    });
    let method = b.push(NodeKind::MethodDeclaration {
        name,
        return_type: Some(ret),
        parameters: vec![param],
        body: Some(body),
        binding,
    });
    Fixture {
        tree: b.finish(method).unwrap(),
        anchor: ret,
    }
}

/// `int x = f;` where `f` is a `java.lang.Float`, anchored at `f`.
pub(crate) fn type_mismatch() -> Fixture {
    let mut b = TreeBuilder::new();
    let decl_ty = b.primitive_type("int");
    let f = b.push_typed(
        NodeKind::SimpleName {
            identifier: "f".into(),
        },
        TypeBinding::new("java.lang.Float"),
    );
    let x = b.name("x");
    let fragment = b.push(NodeKind::VariableDeclarationFragment {
        name: x,
        initializer: Some(f),
        binding: Some(TypeBinding::new("int")),
    });
    let stmt = b.push(NodeKind::VariableDeclarationStatement {
        ty: decl_ty,
        fragments: vec![fragment],
    });
    let root = in_setup(&mut b, vec![stmt]);
    Fixture {
        tree: b.finish(root).unwrap(),
        anchor: f,
    }
}

/// `Zorp z = new Zorp(), y;` as a field, anchored at the declared type's
/// name.
pub(crate) fn undefined_type() -> Fixture {
    let mut b = TreeBuilder::new();
    let zorp = b.name("Zorp");
    let decl_ty = b.push(NodeKind::SimpleType { name: zorp });
    let z = b.name("z");
    let created = b.simple_type("Zorp");
    let init = b.push(NodeKind::ClassInstanceCreation {
        ty: created,
        arguments: vec![],
    });
    let first = b.push(NodeKind::VariableDeclarationFragment {
        name: z,
        initializer: Some(init),
        binding: None,
    });
    let y = b.name("y");
    let second = b.push(NodeKind::VariableDeclarationFragment {
        name: y,
        initializer: None,
        binding: None,
    });
    let field = b.push(NodeKind::FieldDeclaration {
        ty: decl_ty,
        fragments: vec![first, second],
    });
    let class_name = b.name("Sketch");
    let class = b.push(NodeKind::TypeDeclaration {
        name: class_name,
        members: vec![field],
    });
    Fixture {
        tree: b.finish(class).unwrap(),
        anchor: zorp,
    }
}
