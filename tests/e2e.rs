//! End-to-end scenarios over whole programs.

mod common;

use ccfront::{
    Bracket, Node, ParseErrorKind, Token, TokenKind, format_tokens, format_tree, parse, tokenize,
};
use common::{parse_err, parse_ok};

#[test]
fn declaration_scenario() {
    let tokens = tokenize("int a, b;");
    assert_eq!(
        tokens,
        [
            Token::new(TokenKind::Keyword, "int", 1),
            Token::new(TokenKind::Identifier, "a", 1),
            Token::new(TokenKind::Punctuation, ",", 1),
            Token::new(TokenKind::Identifier, "b", 1),
            Token::new(TokenKind::Punctuation, ";", 1),
        ]
    );
    let program = parse(&tokens).unwrap();
    assert_eq!(program.statements, [Node::declaration("int", &["a", "b"])]);
}

#[test]
fn missing_semicolon_scenario() {
    let err = parse_err("int a\n");
    assert!(matches!(err.kind, ParseErrorKind::ExpectedToken { .. }));
    assert_eq!(err.line, 1);
}

#[test]
fn unclosed_while_scenario() {
    let err = parse_err("while (x) {\n");
    assert_eq!(
        err.kind,
        ParseErrorKind::MismatchedBracket {
            bracket: Bracket::Brace
        }
    );
    assert_eq!(err.line, 1);
}

#[test]
fn member_call_scenario() {
    let program = parse_ok("foo.bar();");
    assert_eq!(program.statements, [Node::member_call("foo", "bar")]);
}

#[test]
fn unknown_character_scenario() {
    let tokens = tokenize("@");
    assert_eq!(tokens, [Token::new(TokenKind::Unknown, "@", 1)]);
    let err = parse(&tokens).unwrap_err();
    assert!(matches!(err.kind, ParseErrorKind::UnexpectedToken { .. }));
}

const FILE_COPY: &str = "\
int lines, words;
string buffer;
ifstream inputFile(\"input.txt\");
ofstream outputFile(\"output.txt\");

while (!eof) {
    inputFile.read();
    if (buffer) {
        outputFile.write();
    }
}

for (i; n; step) {
    outputFile.flush();
}

inputFile.close();
outputFile.close();
";

#[test]
fn full_program_parses() {
    let program = parse_ok(FILE_COPY);
    assert_eq!(program.statements.len(), 8);
    assert_eq!(
        program.statements[0],
        Node::declaration("int", &["lines", "words"])
    );
    assert_eq!(
        program.statements[3],
        Node::handle_declaration("ofstream", "outputFile", "\"output.txt\"")
    );
    assert_eq!(
        program.statements[7],
        Node::member_call("outputFile", "close")
    );
}

#[test]
fn full_program_tree() {
    let program = parse_ok(FILE_COPY);
    let tree = format_tree(&program);
    assert!(tree.starts_with("Program\n  Declaration int lines, words\n"));
    assert!(tree.contains(
        "  WhileLoop\n    UnaryOperation !\n      _\n    Body\n      MemberCall inputFile.read()\n"
    ));
    assert!(tree.contains("      If\n        _\n        Body\n          MemberCall outputFile.write()\n"));
}

#[test]
fn full_program_token_lines() {
    let tokens = tokenize(FILE_COPY);
    let listing = format_tokens(&tokens);
    assert!(listing.starts_with("Token: int Type: keyword Line: 1\n"));
    assert!(listing.ends_with("Token: ; Type: punctuation Line: 18\n"));
}

#[test]
fn first_error_wins() {
    // The missing ';' is noticed at the next token, on line 3; the
    // stray `@` and the unclosed brace after it are never reached.
    let err = parse_err("int a;\nint b\nint c;\n@\nwhile (x) {\n");
    assert_eq!(err.line, 3);
    assert!(matches!(
        &err.kind,
        ParseErrorKind::ExpectedToken { found: Some(t), .. } if t == "int"
    ));
}

#[test]
fn sample_program_stops_at_bad_call() {
    let source = "\nint a;\nint b,c;\nifstream inputFile(\"input.txt\");\ninputFile.close(;\noutputFile.close();\n";
    let err = parse_err(source);
    assert_eq!(
        err.to_string(),
        "Expected ')' in file operation, got ';' at line 5."
    );
}
