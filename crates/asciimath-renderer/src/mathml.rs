//! MathML back end.

use std::fmt::{self, Write};

use crate::ast::{Node, Symbol};
use crate::color::Rgb;
use crate::escape::escape_html_content;
use crate::fmt::new_line_and_indent;
use crate::render::Emitter;
use crate::symbol::{DisplayClass, Position, SymbolId};

/// Writes MathML elements into a string.
///
/// The `<math>` element itself is written by the caller. With a base indent above 0, every
/// element starts on a new line, indented by its depth.
pub struct MathMLEmitter<'out> {
    s: &'out mut String,
    indent: usize,
}

impl<'out> MathMLEmitter<'out> {
    #[inline]
    pub fn new(s: &'out mut String, base_indent: usize) -> Self {
        Self {
            s,
            indent: base_indent,
        }
    }

    #[inline]
    fn new_line(&mut self) {
        new_line_and_indent(self.s, self.indent);
    }

    fn open(&mut self, tag: &str) -> fmt::Result {
        self.new_line();
        write!(self.s, "<{tag}>")?;
        self.descend();
        Ok(())
    }

    fn close(&mut self, tag: &str) -> fmt::Result {
        self.ascend();
        self.new_line();
        write!(self.s, "</{tag}>")
    }

    #[inline]
    fn descend(&mut self) {
        if self.indent > 0 {
            self.indent += 1;
        }
    }

    #[inline]
    fn ascend(&mut self) {
        if self.indent > 1 {
            self.indent -= 1;
        }
    }

    fn leaf(&mut self, tag: &str, content: &str) -> fmt::Result {
        self.new_line();
        write!(self.s, "<{tag}>")?;
        escape_html_content(self.s, content);
        write!(self.s, "</{tag}>")
    }

    fn operator(&mut self, symbol: &Symbol) -> fmt::Result {
        self.leaf("mo", symbol.value.unicode())
    }

    fn fence(&mut self, id: SymbolId) -> fmt::Result {
        self.leaf("mo", id.render().unicode)
    }

    /// A missing operand is an empty `<mrow>`, so that the parent keeps its arity.
    fn operand(&mut self, node: Option<&Node>) -> fmt::Result {
        match node {
            Some(node) => self.emit(node),
            None => {
                self.new_line();
                self.s.push_str("<mrow></mrow>");
                Ok(())
            }
        }
    }

    fn scripts(
        &mut self,
        base: &Node,
        sub: Option<&Node>,
        sup: Option<&Node>,
    ) -> fmt::Result {
        let limits = matches!(
            base,
            Node::Symbol(symbol) if symbol.value.class() == DisplayClass::LargeOperator
        );
        let tag = match (sub.is_some(), sup.is_some(), limits) {
            (true, true, false) => "msubsup",
            (true, false, false) => "msub",
            (false, true, false) => "msup",
            (true, true, true) => "munderover",
            (true, false, true) => "munder",
            (false, true, true) => "mover",
            (false, false, _) => return self.emit(base),
        };
        self.open(tag)?;
        self.emit(base)?;
        if let Some(sub) = sub {
            self.emit(sub)?;
        }
        if let Some(sup) = sup {
            self.emit(sup)?;
        }
        self.close(tag)
    }

    fn fraction(&mut self, numerator: Option<&Node>, denominator: Option<&Node>) -> fmt::Result {
        self.open("mfrac")?;
        self.operand(numerator)?;
        self.operand(denominator)?;
        self.close("mfrac")
    }

    /// `<mrow>` with the operator in front of its operands.
    fn prefix(&mut self, operator: &Symbol, operands: &[Option<&Node>]) -> fmt::Result {
        self.open("mrow")?;
        self.operator(operator)?;
        for operand in operands {
            self.operand(*operand)?;
        }
        self.close("mrow")
    }
}

impl Emitter for MathMLEmitter<'_> {
    fn emit_sequence(&mut self, nodes: &[Node]) -> fmt::Result {
        self.open("mrow")?;
        for node in nodes {
            self.emit(node)?;
        }
        self.close("mrow")
    }

    fn emit_symbol(&mut self, symbol: &Symbol) -> fmt::Result {
        let unicode = symbol.value.unicode();
        match symbol.value.class() {
            DisplayClass::Identifier | DisplayClass::Function => self.leaf("mi", unicode),
            DisplayClass::Text => self.leaf("mtext", unicode),
            DisplayClass::Space(width) => {
                self.new_line();
                write!(self.s, "<mspace width=\"{width}\"/>")
            }
            // Symbols that normally take operands but stand alone here.
            _ if unicode.is_empty() => self.leaf("mo", &symbol.text),
            _ => self.leaf("mo", unicode),
        }
    }

    fn emit_identifier(&mut self, name: &str) -> fmt::Result {
        if name.chars().all(char::is_alphanumeric) {
            self.leaf("mi", name)
        } else {
            self.leaf("mo", name)
        }
    }

    fn emit_number(&mut self, number: &str) -> fmt::Result {
        self.leaf("mn", number)
    }

    fn emit_text(&mut self, text: &str) -> fmt::Result {
        self.leaf("mtext", text)
    }

    fn emit_paren(
        &mut self,
        lparen: Option<&Symbol>,
        body: Option<&Node>,
        rparen: Option<&Symbol>,
    ) -> fmt::Result {
        self.open("mrow")?;
        if let Some(lparen) = lparen {
            self.operator(lparen)?;
        }
        if let Some(body) = body {
            self.emit(body)?;
        }
        if let Some(rparen) = rparen {
            self.operator(rparen)?;
        }
        self.close("mrow")
    }

    fn emit_group(&mut self, body: Option<&Node>) -> fmt::Result {
        self.operand(body)
    }

    fn emit_subsup(
        &mut self,
        base: &Node,
        sub: Option<&Node>,
        sup: Option<&Node>,
    ) -> fmt::Result {
        self.scripts(base, sub, sup)
    }

    fn emit_unary(&mut self, operator: &Symbol, operand: Option<&Node>) -> fmt::Result {
        match operator.value.class() {
            DisplayClass::Accent(Position::Over) => {
                self.open("mover accent=\"true\"")?;
                self.operand(operand)?;
                self.operator(operator)?;
                self.close("mover")
            }
            DisplayClass::Accent(Position::Under) => {
                self.open("munder accentunder=\"true\"")?;
                self.operand(operand)?;
                self.operator(operator)?;
                self.close("munder")
            }
            DisplayClass::Font(variant) => {
                self.new_line();
                write!(self.s, "<mstyle mathvariant=\"{}\">", variant.mathvariant())?;
                self.descend();
                self.operand(operand)?;
                self.close("mstyle")
            }
            DisplayClass::Wrap(left, right) => {
                self.open("mrow")?;
                self.fence(left)?;
                self.operand(operand)?;
                self.fence(right)?;
                self.close("mrow")
            }
            DisplayClass::Sqrt => {
                self.open("msqrt")?;
                self.operand(operand)?;
                self.close("msqrt")
            }
            DisplayClass::Cancel => {
                self.open("menclose notation=\"updiagonalstrike\"")?;
                self.operand(operand)?;
                self.close("menclose")
            }
            _ => self.prefix(operator, &[operand]),
        }
    }

    fn emit_binary(
        &mut self,
        operator: &Symbol,
        operand1: Option<&Node>,
        operand2: Option<&Node>,
    ) -> fmt::Result {
        match operator.value.class() {
            DisplayClass::Fraction => self.fraction(operand1, operand2),
            DisplayClass::Root => {
                self.open("mroot")?;
                self.operand(operand2)?;
                self.operand(operand1)?;
                self.close("mroot")
            }
            DisplayClass::Stack(position) => {
                let tag = match position {
                    Position::Over => "mover",
                    Position::Under => "munder",
                };
                self.open(tag)?;
                self.operand(operand2)?;
                self.operand(operand1)?;
                self.close(tag)
            }
            DisplayClass::Color => {
                let rgb = match operand1 {
                    Some(Node::Color { rgb, .. }) => *rgb,
                    _ => Rgb::BLACK,
                };
                self.new_line();
                self.s.push_str("<mstyle mathcolor=\"");
                rgb.append_as_hex(self.s);
                self.s.push_str("\">");
                self.descend();
                self.operand(operand2)?;
                self.close("mstyle")
            }
            _ => self.prefix(operator, &[operand1, operand2]),
        }
    }

    fn emit_infix(&mut self, operator: &Symbol, operand1: &Node, operand2: &Node) -> fmt::Result {
        match operator.value.class() {
            DisplayClass::Fraction => self.fraction(Some(operand1), Some(operand2)),
            DisplayClass::Subscript => self.scripts(operand1, Some(operand2), None),
            DisplayClass::Superscript => self.scripts(operand1, None, Some(operand2)),
            _ => {
                self.open("mrow")?;
                self.emit(operand1)?;
                self.operator(operator)?;
                self.emit(operand2)?;
                self.close("mrow")
            }
        }
    }

    fn emit_matrix(
        &mut self,
        lparen: Option<&Symbol>,
        rows: &[Vec<Option<Node>>],
        rparen: Option<&Symbol>,
    ) -> fmt::Result {
        self.open("mrow")?;
        if let Some(lparen) = lparen {
            self.operator(lparen)?;
        }
        self.open("mtable")?;
        for row in rows {
            self.open("mtr")?;
            for cell in row {
                self.open("mtd")?;
                if let Some(cell) = cell {
                    self.emit(cell)?;
                }
                self.close("mtd")?;
            }
            self.close("mtr")?;
        }
        self.close("mtable")?;
        if let Some(rparen) = rparen {
            self.operator(rparen)?;
        }
        self.close("mrow")
    }

    fn emit_color(&mut self, _rgb: Rgb, text: &str) -> fmt::Result {
        self.leaf("mtext", text)
    }
}
