//! Plain-text renderings of token streams and syntax trees.
//!
//! Trees are printed one node per line with two-space indentation
//! per nesting level.

use std::fmt::Write as _;

use crate::ast::{Identifier, Node, Program};
use crate::token::Token;

/// One line per token: `Token: <text> Type: <kind> Line: <n>`.
#[must_use]
pub fn format_tokens(tokens: &[Token]) -> String {
    let mut out = String::new();
    for token in tokens {
        let _ = writeln!(
            out,
            "Token: {} Type: {} Line: {}",
            token.text, token.kind, token.line
        );
    }
    out
}

/// Render a parsed program as an indented tree.
#[must_use]
pub fn format_tree(program: &Program) -> String {
    let mut out = String::from("Program\n");
    for statement in &program.statements {
        format_node(&mut out, statement, 1);
    }
    out
}

fn format_node(out: &mut String, node: &Node, indent: usize) {
    push_indent(out, indent);

    match node {
        Node::Identifier(Identifier { name }) => {
            let _ = writeln!(out, "Identifier {name}");
        }
        Node::NumberLiteral { text } => {
            let _ = writeln!(out, "NumberLiteral {text}");
        }
        Node::Declaration {
            type_name,
            identifiers,
        } => {
            let names: Vec<_> = identifiers.iter().map(|id| id.name.as_str()).collect();
            let _ = writeln!(out, "Declaration {type_name} {}", names.join(", "));
        }
        Node::Assignment { target, value } => {
            let _ = writeln!(out, "Assignment {}", target.name);
            format_node(out, value, indent + 1);
        }
        Node::UnaryOperation { operator, operand } => {
            let _ = writeln!(out, "UnaryOperation {operator}");
            format_expr(out, operand.as_deref(), indent + 1);
        }
        Node::BinaryOperation {
            operator,
            left,
            right,
        } => {
            let _ = writeln!(out, "BinaryOperation {operator}");
            format_node(out, left, indent + 1);
            format_node(out, right, indent + 1);
        }
        Node::ForLoop {
            init,
            condition,
            increment,
            body,
        } => {
            out.push_str("ForLoop\n");
            format_expr(out, init.as_deref(), indent + 1);
            format_expr(out, condition.as_deref(), indent + 1);
            format_expr(out, increment.as_deref(), indent + 1);
            format_body(out, body, indent + 1);
        }
        Node::WhileLoop { condition, body } => {
            out.push_str("WhileLoop\n");
            format_expr(out, condition.as_deref(), indent + 1);
            format_body(out, body, indent + 1);
        }
        Node::If { condition, body } => {
            out.push_str("If\n");
            format_expr(out, condition.as_deref(), indent + 1);
            format_body(out, body, indent + 1);
        }
        Node::HandleDeclaration {
            handle_type,
            name,
            path,
        } => {
            let _ = writeln!(out, "HandleDeclaration {handle_type} {} {path}", name.name);
        }
        Node::MemberCall { target, method } => {
            let _ = writeln!(out, "MemberCall {}.{method}()", target.name);
        }
    }
}

/// Empty expression slots print as `_`.
fn format_expr(out: &mut String, expr: Option<&Node>, indent: usize) {
    match expr {
        Some(node) => format_node(out, node, indent),
        None => {
            push_indent(out, indent);
            out.push_str("_\n");
        }
    }
}

fn format_body(out: &mut String, body: &[Node], indent: usize) {
    push_indent(out, indent);
    out.push_str("Body\n");
    for statement in body {
        format_node(out, statement, indent + 1);
    }
}

fn push_indent(out: &mut String, indent: usize) {
    out.push_str(&"  ".repeat(indent));
}
