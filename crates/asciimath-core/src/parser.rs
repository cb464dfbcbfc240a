use asciimath_renderer::ast::{Node, Symbol, boxed};
use asciimath_renderer::symbol::{DisplayClass, SymbolId, SymbolValue};

use crate::color_defs::ColorTable;
use crate::symbol_table::{GrammarClass, OperandConversion, SymbolTable};
use crate::token::{Token, TokenKind};
use crate::tokenizer::Tokenizer;

/// Recursive-descent parser for ASCIIMath.
///
/// The grammar is
///
/// ```text
/// expression   := intermediate ( '/' intermediate )*
/// intermediate := simple ( '_' simple ( '^' simple )? | '^' simple )?
/// simple       := lparen ( rparen | expression rparen ) | unary simple | binary simple simple
///               | number | text | identifier | symbol
/// ```
///
/// Parsing never fails. Missing parts are left out of the tree.
pub(crate) struct Parser<'source, 'table> {
    tokens: Tokenizer<'source, 'table>,
    colors: &'table ColorTable,
}

impl<'source, 'table> Parser<'source, 'table> {
    pub(crate) fn new(
        input: &'source str,
        symbols: &'table SymbolTable,
        colors: &'table ColorTable,
    ) -> Self {
        Parser {
            tokens: Tokenizer::new(input, symbols),
            colors,
        }
    }

    pub(crate) fn parse(mut self) -> Option<Node> {
        self.parse_expression(0)
    }

    /// `depth` is the number of enclosing groups.
    fn parse_expression(&mut self, depth: usize) -> Option<Node> {
        let mut nodes = Vec::new();
        while let Some(s1) = self.parse_intermediate(depth) {
            let t1 = self.tokens.next_token();
            if let Some(operator) = fraction_operator(&t1) {
                match self.parse_intermediate(depth) {
                    Some(s2) => nodes.push(Node::InfixOp {
                        operator,
                        operand1: Box::new(s1.unwrap_paren()),
                        operand2: Box::new(s2.unwrap_paren()),
                    }),
                    None => {
                        nodes.push(s1);
                        nodes.push(Node::Symbol(operator));
                    }
                }
                continue;
            }
            nodes.push(s1);
            if matches!(t1, Token::Eof) {
                break;
            }
            self.tokens.push_back(t1);
            if depth > 0 && matches!(t1.kind(), TokenKind::RParen | TokenKind::LRParen) {
                break;
            }
        }
        Node::sequence(nodes)
    }

    fn parse_intermediate(&mut self, depth: usize) -> Option<Node> {
        let base = self.parse_simple(depth)?;
        let mut sub = None;
        let mut sup = None;
        let t1 = self.tokens.next_token();
        match script_of(&t1) {
            Some(DisplayClass::Subscript) => {
                sub = self.parse_simple(depth);
                if sub.is_some() {
                    let t2 = self.tokens.next_token();
                    if script_of(&t2) == Some(DisplayClass::Superscript) {
                        sup = self.parse_simple(depth);
                    } else {
                        self.tokens.push_back(t2);
                    }
                }
            }
            Some(DisplayClass::Superscript) => {
                sup = self.parse_simple(depth);
            }
            _ => self.tokens.push_back(t1),
        }
        if sub.is_none() && sup.is_none() {
            return Some(base);
        }
        Some(Node::SubSup {
            base: Box::new(base),
            sub: boxed(sub.map(Node::unwrap_paren)),
            sup: boxed(sup.map(Node::unwrap_paren)),
        })
    }

    fn parse_simple(&mut self, depth: usize) -> Option<Node> {
        let t1 = self.tokens.next_token();
        match t1.kind() {
            TokenKind::LParen | TokenKind::LRParen => Some(self.parse_paren(t1, depth)),
            TokenKind::RParen => {
                if depth > 0 {
                    self.tokens.push_back(t1);
                    None
                } else {
                    t1.to_symbol().map(Node::Symbol)
                }
            }
            TokenKind::Unary => {
                let (operator, [conversion, _]) = symbol_and_conversions(t1)?;
                let operand = self.parse_operand(depth, conversion);
                Some(Node::UnaryOp {
                    operator,
                    operand: boxed(operand),
                })
            }
            TokenKind::Binary => {
                let (operator, [conversion1, conversion2]) = symbol_and_conversions(t1)?;
                let operand1 = self.parse_operand(depth, conversion1);
                let operand2 = self.parse_operand(depth, conversion2);
                Some(Node::BinaryOp {
                    operator,
                    operand1: boxed(operand1),
                    operand2: boxed(operand2),
                })
            }
            TokenKind::Eof => None,
            TokenKind::Number => Some(Node::Number(t1.text().into())),
            TokenKind::Text => Some(Node::Text(t1.text().into())),
            TokenKind::Identifier => Some(Node::Identifier(t1.text().into())),
            TokenKind::Symbol | TokenKind::Infix => t1.to_symbol().map(Node::Symbol),
        }
    }

    /// Parse the rest of a group that was opened by `open`.
    fn parse_paren(&mut self, open: Token<'source, 'table>, depth: usize) -> Node {
        let lparen = delimiter(open);
        let t2 = self.tokens.next_token();
        if matches!(t2.kind(), TokenKind::RParen | TokenKind::LRParen) {
            return Node::Paren {
                lparen,
                body: None,
                rparen: delimiter(t2),
            };
        }
        self.tokens.push_back(t2);
        let body = self.parse_expression(depth + 1);
        let t3 = self.tokens.next_token();
        if matches!(t3.kind(), TokenKind::RParen | TokenKind::LRParen) {
            convert_to_matrix(lparen, boxed(body), delimiter(t3))
        } else {
            self.tokens.push_back(t3);
            Node::Paren {
                lparen,
                body: boxed(body),
                rparen: None,
            }
        }
    }

    fn parse_operand(&mut self, depth: usize, conversion: OperandConversion) -> Option<Node> {
        let operand = self.parse_simple(depth).map(Node::unwrap_paren);
        match conversion {
            OperandConversion::None => operand,
            OperandConversion::ColorText => operand.map(|node| {
                let mut text = String::new();
                collect_text(&node, &mut text);
                Node::Color {
                    rgb: self.colors.resolve(&text),
                    text: text.into(),
                }
            }),
        }
    }
}

/// The fraction operator, if `token` is the infix `/`.
fn fraction_operator(token: &Token) -> Option<Symbol> {
    match token {
        Token::Symbol { descriptor, .. }
            if descriptor.class == GrammarClass::Infix
                && descriptor.value.class() == DisplayClass::Fraction =>
        {
            token.to_symbol()
        }
        _ => None,
    }
}

/// The script kind of a `_` or `^` token.
fn script_of(token: &Token) -> Option<DisplayClass> {
    match token {
        Token::Symbol { descriptor, .. } if descriptor.class == GrammarClass::Infix => {
            match descriptor.value.class() {
                class @ (DisplayClass::Subscript | DisplayClass::Superscript) => Some(class),
                _ => None,
            }
        }
        _ => None,
    }
}

fn symbol_and_conversions(token: Token) -> Option<(Symbol, [OperandConversion; 2])> {
    match token {
        Token::Symbol { descriptor, .. } => Some((token.to_symbol()?, descriptor.conversions)),
        _ => None,
    }
}

/// The AST form of a delimiter token; `{:` and `:}` are invisible and become `None`.
fn delimiter(token: Token) -> Option<Symbol> {
    let symbol = token.to_symbol()?;
    match symbol.value {
        SymbolValue::Id(SymbolId::LeftInvisible | SymbolId::RightInvisible) => None,
        _ => Some(symbol),
    }
}

fn is_separator(node: &Node) -> bool {
    node.is_identifier(",")
}

/// Check whether `node` is a row of a matrix with the given delimiters.
fn is_row(node: &Node, open: SymbolId, close: SymbolId) -> bool {
    matches!(
        node,
        Node::Paren { lparen: Some(l), rparen: Some(r), .. }
            if l.id() == Some(open) && r.id() == Some(close)
    )
}

/// The number of cells in a matrix row.
fn cell_count(row: &Node) -> usize {
    match row {
        Node::Paren { body, .. } => match body.as_deref() {
            Some(Node::Sequence(items)) => 1 + items.iter().filter(|n| is_separator(n)).count(),
            Some(node) if is_separator(node) => 2,
            _ => 1,
        },
        _ => 0,
    }
}

/// Split the body of a matrix row on `,`.
fn split_cells(row: Node) -> Vec<Option<Node>> {
    let body = match row {
        Node::Paren { body, .. } => body.map(|body| *body),
        node => Some(node),
    };
    let items = match body {
        Some(Node::Sequence(items)) => items,
        Some(node) => vec![node],
        None => Vec::new(),
    };
    let mut cells = Vec::new();
    let mut current = Vec::new();
    for item in items {
        if is_separator(&item) {
            cells.push(Node::sequence(std::mem::take(&mut current)));
        } else {
            current.push(item);
        }
    }
    cells.push(Node::sequence(current));
    cells
}

/// Reinterpret a closed group as a matrix if its body has the shape of one.
///
/// The body must be a sequence of at least two rows, separated by `,`. All rows must be
/// delimited by `(...)`, or all by `[...]`, and all rows must have the same number of cells.
/// Otherwise, the group is returned as a `Node::Paren`.
fn convert_to_matrix(
    lparen: Option<Symbol>,
    body: Option<Box<Node>>,
    rparen: Option<Symbol>,
) -> Node {
    let is_matrix = match body.as_deref() {
        Some(Node::Sequence(items)) => {
            let rows = items.iter().step_by(2);
            let separators = items.iter().skip(1).step_by(2);
            let num_rows = rows.len();
            let uniform_delimiters = [
                (SymbolId::LeftParen, SymbolId::RightParen),
                (SymbolId::LeftBracket, SymbolId::RightBracket),
            ]
            .into_iter()
            .any(|(open, close)| rows.clone().all(|row| is_row(row, open, close)));
            let num_cells = items.first().map_or(0, cell_count);
            num_rows > 1
                && num_rows > separators.len()
                && separators.clone().all(is_separator)
                && uniform_delimiters
                && rows.clone().all(|row| cell_count(row) == num_cells)
        }
        _ => false,
    };
    if !is_matrix {
        return Node::Paren {
            lparen,
            body,
            rparen,
        };
    }
    let items = match body.map(|body| *body) {
        Some(Node::Sequence(items)) => items,
        _ => Vec::new(),
    };
    let rows = items
        .into_iter()
        .step_by(2)
        .map(split_cells)
        .collect();
    Node::Matrix {
        lparen,
        rows,
        rparen,
    }
}

/// Append the source text of `node` to `text`.
///
/// Groups contribute their body only; everything else contributes all of its parts,
/// including delimiters and operator spellings.
fn collect_text(node: &Node, text: &mut String) {
    fn push_symbol(symbol: Option<&Symbol>, text: &mut String) {
        if let Some(symbol) = symbol {
            text.push_str(&symbol.text);
        }
    }

    match node {
        Node::Sequence(nodes) => {
            for node in nodes {
                collect_text(node, text);
            }
        }
        Node::Symbol(symbol) => text.push_str(&symbol.text),
        Node::Identifier(s) | Node::Number(s) | Node::Text(s) => text.push_str(s),
        Node::Paren {
            lparen,
            body,
            rparen,
        } => {
            push_symbol(lparen.as_ref(), text);
            if let Some(body) = body {
                collect_text(body, text);
            }
            push_symbol(rparen.as_ref(), text);
        }
        Node::Group { body, .. } => {
            if let Some(body) = body {
                collect_text(body, text);
            }
        }
        Node::SubSup { base, sub, sup } => {
            collect_text(base, text);
            if let Some(sub) = sub {
                text.push('_');
                collect_text(sub, text);
            }
            if let Some(sup) = sup {
                text.push('^');
                collect_text(sup, text);
            }
        }
        Node::UnaryOp { operator, operand } => {
            text.push_str(&operator.text);
            if let Some(operand) = operand {
                collect_text(operand, text);
            }
        }
        Node::BinaryOp {
            operator,
            operand1,
            operand2,
        } => {
            text.push_str(&operator.text);
            for operand in [operand1, operand2].into_iter().flatten() {
                collect_text(operand, text);
            }
        }
        Node::InfixOp {
            operator,
            operand1,
            operand2,
        } => {
            collect_text(operand1, text);
            text.push_str(&operator.text);
            collect_text(operand2, text);
        }
        Node::Matrix {
            lparen,
            rows,
            rparen,
        } => {
            push_symbol(lparen.as_ref(), text);
            for cell in rows.iter().flatten().flatten() {
                collect_text(cell, text);
            }
            push_symbol(rparen.as_ref(), text);
        }
        Node::Color { text: color, .. } => text.push_str(color),
    }
}
