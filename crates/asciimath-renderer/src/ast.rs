#[cfg(feature = "serde")]
use serde::Serialize;

use crate::color::Rgb;
use crate::symbol::{SymbolId, SymbolValue};

/// A grammar symbol as it appeared in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Symbol {
    /// The resolved value from the symbol table.
    pub value: SymbolValue,
    /// The spelling that was matched in the source, e.g. `xx` for `×`.
    pub text: Box<str>,
}

impl Symbol {
    pub fn new(value: impl Into<SymbolValue>, text: impl Into<Box<str>>) -> Self {
        Symbol {
            value: value.into(),
            text: text.into(),
        }
    }

    /// The predefined id of this symbol, if it has one.
    #[inline]
    pub fn id(&self) -> Option<SymbolId> {
        match self.value {
            SymbolValue::Id(id) => Some(id),
            SymbolValue::Custom(_) => None,
        }
    }
}

/// AST node
///
/// Optional children are `None` when the source did not provide them; renderers treat
/// them as absent.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Node {
    /// Two or more nodes in a row. Use [`Node::sequence`] to construct this.
    Sequence(Vec<Node>),
    Symbol(Symbol),
    Identifier(Box<str>),
    Number(Box<str>),
    Text(Box<str>),
    /// A parenthesized expression with visible delimiters.
    ///
    /// A delimiter of `None` is invisible, either because the source used `{:`/`:}` or
    /// because the group was never closed.
    Paren {
        lparen: Option<Symbol>,
        body: Option<Box<Node>>,
        rparen: Option<Symbol>,
    },
    /// A parenthesized expression used as an operand; the delimiters are kept but not
    /// rendered.
    Group {
        lparen: Option<Symbol>,
        body: Option<Box<Node>>,
        rparen: Option<Symbol>,
    },
    SubSup {
        base: Box<Node>,
        sub: Option<Box<Node>>,
        sup: Option<Box<Node>>,
    },
    UnaryOp {
        operator: Symbol,
        operand: Option<Box<Node>>,
    },
    BinaryOp {
        operator: Symbol,
        operand1: Option<Box<Node>>,
        operand2: Option<Box<Node>>,
    },
    /// An operator written between its operands, e.g. `a/b`.
    InfixOp {
        operator: Symbol,
        operand1: Box<Node>,
        operand2: Box<Node>,
    },
    Matrix {
        lparen: Option<Symbol>,
        rows: Vec<Vec<Option<Node>>>,
        rparen: Option<Symbol>,
    },
    /// A resolved color literal, only produced as the first operand of `color`.
    Color { rgb: Rgb, text: Box<str> },
}

impl Node {
    /// Turn a vector of nodes into a single optional node.
    ///
    /// An empty vector gives `None`, a single node is returned as is, and anything longer
    /// becomes a `Node::Sequence`.
    pub fn sequence(mut nodes: Vec<Node>) -> Option<Node> {
        match nodes.len() {
            0 => None,
            1 => nodes.pop(),
            _ => Some(Node::Sequence(nodes)),
        }
    }

    /// Strip the visible delimiters of a `Node::Paren`, keeping it as a `Node::Group`.
    ///
    /// All other nodes are returned unchanged.
    pub fn unwrap_paren(self) -> Node {
        match self {
            Node::Paren {
                lparen,
                body,
                rparen,
            } => Node::Group {
                lparen,
                body,
                rparen,
            },
            node => node,
        }
    }

    /// Returns `true` if this is the identifier `name`.
    #[inline]
    pub fn is_identifier(&self, name: &str) -> bool {
        matches!(self, Node::Identifier(ident) if &**ident == name)
    }
}

/// Box an optional node.
#[inline]
pub fn boxed(node: Option<Node>) -> Option<Box<Node>> {
    node.map(Box::new)
}

static_assertions::assert_impl_all!(Node: Send, Sync);
