use strum_macros::IntoStaticStr;

use asciimath_renderer::ast::Symbol;

use crate::symbol_table::{GrammarClass, SymbolDescriptor};

#[derive(Debug, Clone, Copy, PartialEq, Eq, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum TokenKind {
    Symbol,
    Text,
    Number,
    Identifier,
    Unary,
    Binary,
    Infix,
    LParen,
    RParen,
    LRParen,
    Eof,
}

impl From<GrammarClass> for TokenKind {
    fn from(class: GrammarClass) -> Self {
        match class {
            GrammarClass::Symbol => TokenKind::Symbol,
            GrammarClass::Unary => TokenKind::Unary,
            GrammarClass::Binary => TokenKind::Binary,
            GrammarClass::Infix => TokenKind::Infix,
            GrammarClass::LParen => TokenKind::LParen,
            GrammarClass::RParen => TokenKind::RParen,
            GrammarClass::LRParen => TokenKind::LRParen,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Token<'source, 'table> {
    /// End of input.
    Eof,
    Number(&'source str),
    /// The content of `"..."` or `text(...)`, without the delimiters.
    Text(&'source str),
    /// A single unit that is not in the symbol table.
    Identifier(&'source str),
    /// A spelling found in the symbol table.
    Symbol {
        text: &'source str,
        descriptor: &'table SymbolDescriptor,
    },
}

impl<'source, 'table> Token<'source, 'table> {
    pub(crate) fn kind(&self) -> TokenKind {
        match self {
            Token::Eof => TokenKind::Eof,
            Token::Number(_) => TokenKind::Number,
            Token::Text(_) => TokenKind::Text,
            Token::Identifier(_) => TokenKind::Identifier,
            Token::Symbol { descriptor, .. } => descriptor.class.into(),
        }
    }

    /// The text as it appeared in the source.
    pub(crate) fn text(&self) -> &'source str {
        match self {
            Token::Eof => "",
            Token::Number(text) | Token::Text(text) | Token::Identifier(text) => text,
            Token::Symbol { text, .. } => text,
        }
    }

    /// Turn a symbol token into an AST symbol.
    pub(crate) fn to_symbol(self) -> Option<Symbol> {
        match self {
            Token::Symbol { text, descriptor } => {
                Some(Symbol::new(descriptor.value.clone(), text))
            }
            _ => None,
        }
    }
}
