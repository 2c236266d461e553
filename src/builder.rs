use crate::ast::{Expr, Identifier, Node, Program};

impl Program {
    /// Create an empty program.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            statements: Vec::new(),
        }
    }

    /// Append a top-level statement.
    #[must_use]
    pub fn statement(mut self, node: Node) -> Self {
        self.statements.push(node);
        self
    }
}

impl Identifier {
    #[must_use]
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

impl Node {
    #[must_use]
    pub fn identifier(name: &str) -> Self {
        Self::Identifier(Identifier::new(name))
    }

    #[must_use]
    pub fn number(text: &str) -> Self {
        Self::NumberLiteral {
            text: text.to_string(),
        }
    }

    /// `type_name a, b, ...;`
    #[must_use]
    pub fn declaration(type_name: &str, names: &[&str]) -> Self {
        Self::Declaration {
            type_name: type_name.to_string(),
            identifiers: names.iter().map(|n| Identifier::new(n)).collect(),
        }
    }

    #[must_use]
    pub fn assignment(target: &str, value: Self) -> Self {
        Self::Assignment {
            target: Identifier::new(target),
            value: Box::new(value),
        }
    }

    #[must_use]
    pub fn unary(operator: &str, operand: Option<Self>) -> Self {
        Self::UnaryOperation {
            operator: operator.to_string(),
            operand: operand.map(Box::new),
        }
    }

    #[must_use]
    pub fn binary(operator: &str, left: Self, right: Self) -> Self {
        Self::BinaryOperation {
            operator: operator.to_string(),
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    #[must_use]
    pub const fn for_loop(init: Expr, condition: Expr, increment: Expr, body: Vec<Self>) -> Self {
        Self::ForLoop {
            init,
            condition,
            increment,
            body,
        }
    }

    #[must_use]
    pub const fn while_loop(condition: Expr, body: Vec<Self>) -> Self {
        Self::WhileLoop { condition, body }
    }

    #[must_use]
    pub const fn if_statement(condition: Expr, body: Vec<Self>) -> Self {
        Self::If { condition, body }
    }

    /// `handle_type name("path");`, with `path` including its quotes.
    #[must_use]
    pub fn handle_declaration(handle_type: &str, name: &str, path: &str) -> Self {
        Self::HandleDeclaration {
            handle_type: handle_type.to_string(),
            name: Identifier::new(name),
            path: path.to_string(),
        }
    }

    #[must_use]
    pub fn member_call(target: &str, method: &str) -> Self {
        Self::MemberCall {
            target: Identifier::new(target),
            method: method.to_string(),
        }
    }
}
