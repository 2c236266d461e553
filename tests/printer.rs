//! Token listing and tree rendering tests.

mod common;

use ccfront::{Identifier, Node, Program, format_tokens, format_tree, tokenize};
use common::parse_ok;

#[test]
fn tokens_one_per_line() {
    let listing = format_tokens(&tokenize("int a;\n@"));
    assert_eq!(
        listing,
        "Token: int Type: keyword Line: 1\n\
         Token: a Type: identifier Line: 1\n\
         Token: ; Type: punctuation Line: 1\n\
         Token: @ Type: unknown Line: 2\n"
    );
}

#[test]
fn tokens_empty() {
    assert_eq!(format_tokens(&[]), "");
}

#[test]
fn tree_of_empty_program() {
    assert_eq!(format_tree(&Program::new()), "Program\n");
}

#[test]
fn tree_of_parsed_program() {
    let program = parse_ok("ifstream f(\"a.txt\");\nfor (i; !j; k) {\n  f.close();\n}\n");
    assert_eq!(
        format_tree(&program),
        "Program\n\
         \x20 HandleDeclaration ifstream f \"a.txt\"\n\
         \x20 ForLoop\n\
         \x20   _\n\
         \x20   UnaryOperation !\n\
         \x20     _\n\
         \x20   _\n\
         \x20   Body\n\
         \x20     MemberCall f.close()\n"
    );
}

#[test]
fn tree_of_built_nodes() {
    let program = Program::new()
        .statement(Node::declaration("int", &["x", "y"]))
        .statement(Node::assignment(
            "x",
            Node::unary("!", Some(Node::identifier("y"))),
        ))
        .statement(Node::if_statement(
            Some(Box::new(Node::binary(
                "<",
                Node::identifier("x"),
                Node::number("10"),
            ))),
            vec![Node::member_call("out", "flush")],
        ));

    assert_eq!(
        format_tree(&program),
        "Program\n\
         \x20 Declaration int x, y\n\
         \x20 Assignment x\n\
         \x20   UnaryOperation !\n\
         \x20     Identifier y\n\
         \x20 If\n\
         \x20   BinaryOperation <\n\
         \x20     Identifier x\n\
         \x20     NumberLiteral 10\n\
         \x20   Body\n\
         \x20     MemberCall out.flush()\n"
    );
}

#[test]
fn builders_match_struct_literals() {
    assert_eq!(
        Node::member_call("f", "open"),
        Node::MemberCall {
            target: Identifier {
                name: "f".to_string()
            },
            method: "open".to_string(),
        }
    );
    assert_eq!(
        Node::number("42"),
        Node::NumberLiteral {
            text: "42".to_string()
        }
    );
    assert_eq!(
        Node::binary("+", Node::number("1"), Node::number("2")).kind_name(),
        "BinaryOperation"
    );
    assert_eq!(Node::identifier("z").body(), None);
}
