/// Parsed program: the root returned by `parse`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub statements: Vec<Node>,
}

/// Bare identifier, also used as a declaration or call target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identifier {
    pub name: String,
}

/// Optional sub-expression slot.
///
/// Expression parsing only builds a node for unary `!`; any other
/// single consumed token leaves the slot empty.
pub type Expr = Option<Box<Node>>;

/// Syntax tree node. Every node owns its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// `name`
    Identifier(Identifier),
    /// Numeric literal text, kept verbatim.
    NumberLiteral { text: String },
    /// `int a, b;`
    Declaration {
        type_name: String,
        identifiers: Vec<Identifier>,
    },
    /// `target = value`
    Assignment { target: Identifier, value: Box<Self> },
    /// `op operand`
    UnaryOperation { operator: String, operand: Expr },
    /// `left op right`
    BinaryOperation {
        operator: String,
        left: Box<Self>,
        right: Box<Self>,
    },
    /// `for (init; condition; increment) { body }`
    ForLoop {
        init: Expr,
        condition: Expr,
        increment: Expr,
        body: Vec<Self>,
    },
    /// `while (condition) { body }`
    WhileLoop { condition: Expr, body: Vec<Self> },
    /// `if (condition) { body }`
    If { condition: Expr, body: Vec<Self> },
    /// `ifstream name("path");`
    HandleDeclaration {
        handle_type: String,
        name: Identifier,
        path: String,
    },
    /// `target.method();`
    MemberCall { target: Identifier, method: String },
}

impl Node {
    /// Stable variant name used in diagnostics and tree output.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Identifier(_) => "Identifier",
            Self::NumberLiteral { .. } => "NumberLiteral",
            Self::Declaration { .. } => "Declaration",
            Self::Assignment { .. } => "Assignment",
            Self::UnaryOperation { .. } => "UnaryOperation",
            Self::BinaryOperation { .. } => "BinaryOperation",
            Self::ForLoop { .. } => "ForLoop",
            Self::WhileLoop { .. } => "WhileLoop",
            Self::If { .. } => "If",
            Self::HandleDeclaration { .. } => "HandleDeclaration",
            Self::MemberCall { .. } => "MemberCall",
        }
    }

    /// Statements nested directly inside this node, if it has a body.
    #[must_use]
    pub fn body(&self) -> Option<&[Self]> {
        match self {
            Self::ForLoop { body, .. } | Self::WhileLoop { body, .. } | Self::If { body, .. } => {
                Some(body.as_slice())
            }
            _ => None,
        }
    }
}
