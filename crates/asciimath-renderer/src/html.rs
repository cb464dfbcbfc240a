//! HTML back end.
//!
//! Every node becomes a `<span>` whose class names its role, e.g. `math-fraction`. Laying the
//! spans out is left to a style sheet.

use std::fmt::{self, Write};

use crate::ast::{Node, Symbol};
use crate::color::Rgb;
use crate::escape::escape_html_content;
use crate::render::Emitter;
use crate::symbol::{DisplayClass, Position, SymbolId};

pub struct HtmlEmitter<'out> {
    s: &'out mut String,
}

impl<'out> HtmlEmitter<'out> {
    #[inline]
    pub fn new(s: &'out mut String) -> Self {
        Self { s }
    }

    fn open(&mut self, class: &str) -> fmt::Result {
        write!(self.s, "<span class=\"{class}\">")
    }

    fn close(&mut self) {
        self.s.push_str("</span>");
    }

    fn leaf(&mut self, class: &str, content: &str) -> fmt::Result {
        self.open(class)?;
        escape_html_content(self.s, content);
        self.close();
        Ok(())
    }

    fn brace(&mut self, symbol: Option<&Symbol>) -> fmt::Result {
        match symbol {
            Some(symbol) => self.leaf("math-brace", symbol.value.unicode()),
            None => Ok(()),
        }
    }

    fn fence(&mut self, id: SymbolId) -> fmt::Result {
        self.leaf("math-brace", id.render().unicode)
    }

    fn operand(&mut self, node: Option<&Node>) -> fmt::Result {
        match node {
            Some(node) => self.emit(node),
            None => {
                self.open("math-row")?;
                self.close();
                Ok(())
            }
        }
    }

    /// Wrap `node` in a span with the given class.
    fn part(&mut self, class: &str, node: Option<&Node>) -> fmt::Result {
        self.open(class)?;
        if let Some(node) = node {
            self.emit(node)?;
        }
        self.close();
        Ok(())
    }

    fn scripts(&mut self, base: &Node, sub: Option<&Node>, sup: Option<&Node>) -> fmt::Result {
        let limits = matches!(
            base,
            Node::Symbol(symbol) if symbol.value.class() == DisplayClass::LargeOperator
        );
        if limits {
            self.open("math-underover")?;
            self.part("math-over", sup)?;
            self.part("math-base", Some(base))?;
            self.part("math-under", sub)?;
        } else {
            self.open("math-subsup")?;
            self.emit(base)?;
            if let Some(sub) = sub {
                self.part("math-sub", Some(sub))?;
            }
            if let Some(sup) = sup {
                self.part("math-sup", Some(sup))?;
            }
        }
        self.close();
        Ok(())
    }

    fn fraction(&mut self, numerator: Option<&Node>, denominator: Option<&Node>) -> fmt::Result {
        self.open("math-fraction")?;
        self.part("math-numerator", numerator)?;
        self.part("math-denominator", denominator)?;
        self.close();
        Ok(())
    }

    fn prefix(&mut self, operator: &Symbol, operands: &[Option<&Node>]) -> fmt::Result {
        self.open("math-row")?;
        self.emit_symbol(operator)?;
        for operand in operands {
            self.operand(*operand)?;
        }
        self.close();
        Ok(())
    }
}

impl Emitter for HtmlEmitter<'_> {
    fn emit_sequence(&mut self, nodes: &[Node]) -> fmt::Result {
        self.open("math-row")?;
        for node in nodes {
            self.emit(node)?;
        }
        self.close();
        Ok(())
    }

    fn emit_symbol(&mut self, symbol: &Symbol) -> fmt::Result {
        let unicode = symbol.value.unicode();
        match symbol.value.class() {
            DisplayClass::Identifier => self.leaf("math-identifier", unicode),
            DisplayClass::Function => self.leaf("math-function", unicode),
            DisplayClass::Text => self.leaf("math-text", unicode),
            DisplayClass::Space(_) => self.leaf("math-space", unicode),
            DisplayClass::LargeOperator => self.leaf("math-operator math-large", unicode),
            _ if unicode.is_empty() => self.leaf("math-operator", &symbol.text),
            _ => self.leaf("math-operator", unicode),
        }
    }

    fn emit_identifier(&mut self, name: &str) -> fmt::Result {
        if name.chars().all(char::is_alphanumeric) {
            self.leaf("math-identifier", name)
        } else {
            self.leaf("math-operator", name)
        }
    }

    fn emit_number(&mut self, number: &str) -> fmt::Result {
        self.leaf("math-number", number)
    }

    fn emit_text(&mut self, text: &str) -> fmt::Result {
        self.leaf("math-text", text)
    }

    fn emit_paren(
        &mut self,
        lparen: Option<&Symbol>,
        body: Option<&Node>,
        rparen: Option<&Symbol>,
    ) -> fmt::Result {
        self.open("math-row")?;
        self.brace(lparen)?;
        if let Some(body) = body {
            self.emit(body)?;
        }
        self.brace(rparen)?;
        self.close();
        Ok(())
    }

    fn emit_group(&mut self, body: Option<&Node>) -> fmt::Result {
        self.operand(body)
    }

    fn emit_subsup(&mut self, base: &Node, sub: Option<&Node>, sup: Option<&Node>) -> fmt::Result {
        self.scripts(base, sub, sup)
    }

    fn emit_unary(&mut self, operator: &Symbol, operand: Option<&Node>) -> fmt::Result {
        match operator.value.class() {
            DisplayClass::Accent(Position::Over) => {
                self.open("math-accent-over")?;
                self.leaf("math-accent", operator.value.unicode())?;
                self.part("math-base", operand)?;
                self.close();
            }
            DisplayClass::Accent(Position::Under) => {
                self.open("math-accent-under")?;
                self.part("math-base", operand)?;
                self.leaf("math-accent", operator.value.unicode())?;
                self.close();
            }
            DisplayClass::Font(variant) => {
                write!(self.s, "<span class=\"math-font-{}\">", variant.mathvariant())?;
                self.operand(operand)?;
                self.close();
            }
            DisplayClass::Wrap(left, right) => {
                self.open("math-row")?;
                self.fence(left)?;
                self.operand(operand)?;
                self.fence(right)?;
                self.close();
            }
            DisplayClass::Sqrt => {
                self.open("math-sqrt")?;
                self.leaf("math-radical", operator.value.unicode())?;
                self.part("math-radicand", operand)?;
                self.close();
            }
            DisplayClass::Cancel => {
                self.part("math-cancel", operand)?;
            }
            _ => self.prefix(operator, &[operand])?,
        }
        Ok(())
    }

    fn emit_binary(
        &mut self,
        operator: &Symbol,
        operand1: Option<&Node>,
        operand2: Option<&Node>,
    ) -> fmt::Result {
        match operator.value.class() {
            DisplayClass::Fraction => self.fraction(operand1, operand2)?,
            DisplayClass::Root => {
                self.open("math-root")?;
                self.part("math-index", operand1)?;
                self.leaf("math-radical", operator.value.unicode())?;
                self.part("math-radicand", operand2)?;
                self.close();
            }
            DisplayClass::Stack(Position::Over) => {
                self.open("math-stack")?;
                self.part("math-over", operand1)?;
                self.part("math-base", operand2)?;
                self.close();
            }
            DisplayClass::Stack(Position::Under) => {
                self.open("math-stack")?;
                self.part("math-base", operand2)?;
                self.part("math-under", operand1)?;
                self.close();
            }
            DisplayClass::Color => {
                let rgb = match operand1 {
                    Some(Node::Color { rgb, .. }) => *rgb,
                    _ => Rgb::BLACK,
                };
                self.s.push_str("<span class=\"math-color\" style=\"color:");
                rgb.append_as_hex(self.s);
                self.s.push_str("\">");
                self.operand(operand2)?;
                self.close();
            }
            _ => self.prefix(operator, &[operand1, operand2])?,
        }
        Ok(())
    }

    fn emit_infix(&mut self, operator: &Symbol, operand1: &Node, operand2: &Node) -> fmt::Result {
        match operator.value.class() {
            DisplayClass::Fraction => self.fraction(Some(operand1), Some(operand2)),
            DisplayClass::Subscript => self.scripts(operand1, Some(operand2), None),
            DisplayClass::Superscript => self.scripts(operand1, None, Some(operand2)),
            _ => {
                self.open("math-row")?;
                self.emit(operand1)?;
                self.emit_symbol(operator)?;
                self.emit(operand2)?;
                self.close();
                Ok(())
            }
        }
    }

    fn emit_matrix(
        &mut self,
        lparen: Option<&Symbol>,
        rows: &[Vec<Option<Node>>],
        rparen: Option<&Symbol>,
    ) -> fmt::Result {
        self.open("math-row")?;
        self.brace(lparen)?;
        self.open("math-matrix")?;
        for row in rows {
            self.open("math-matrix-row")?;
            for cell in row {
                self.part("math-matrix-cell", cell.as_ref())?;
            }
            self.close();
        }
        self.close();
        self.brace(rparen)?;
        self.close();
        Ok(())
    }

    fn emit_color(&mut self, _rgb: Rgb, text: &str) -> fmt::Result {
        self.leaf("math-text", text)
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;

    fn render(node: &Node) -> String {
        let mut output = String::new();
        HtmlEmitter::new(&mut output).emit(node).unwrap();
        output
    }

    fn sym(id: SymbolId, text: &str) -> Symbol {
        Symbol::new(id, text)
    }

    fn ident(name: &str) -> Box<Node> {
        Box::new(Node::Identifier(name.into()))
    }

    #[test]
    fn render_leaves() {
        assert_eq!(
            render(&Node::Identifier("x".into())),
            "<span class=\"math-identifier\">x</span>"
        );
        assert_eq!(
            render(&Node::Number("42".into())),
            "<span class=\"math-number\">42</span>"
        );
        assert_eq!(
            render(&Node::Symbol(sym(SymbolId::Times, "xx"))),
            "<span class=\"math-operator\">&#xD7;</span>"
        );
    }

    #[test]
    fn render_fraction() {
        let node = Node::InfixOp {
            operator: sym(SymbolId::Frac, "/"),
            operand1: ident("a"),
            operand2: ident("b"),
        };
        assert_snapshot!(render(&node), @r#"<span class="math-fraction"><span class="math-numerator"><span class="math-identifier">a</span></span><span class="math-denominator"><span class="math-identifier">b</span></span></span>"#);
    }

    #[test]
    fn render_subsup() {
        let node = Node::SubSup {
            base: ident("x"),
            sub: None,
            sup: Some(Box::new(Node::Number("2".into()))),
        };
        assert_snapshot!(render(&node), @r#"<span class="math-subsup"><span class="math-identifier">x</span><span class="math-sup"><span class="math-number">2</span></span></span>"#);
    }

    #[test]
    fn render_color() {
        let node = Node::BinaryOp {
            operator: sym(SymbolId::Color, "color"),
            operand1: Some(Box::new(Node::Color {
                rgb: Rgb::new(0, 0, 255),
                text: "blue".into(),
            })),
            operand2: Some(ident("x")),
        };
        assert_snapshot!(render(&node), @r#"<span class="math-color" style="color:#0000FF"><span class="math-identifier">x</span></span>"#);
    }

    #[test]
    fn render_paren_with_invisible_delimiter() {
        let node = Node::Paren {
            lparen: None,
            body: Some(ident("x")),
            rparen: Some(sym(SymbolId::RightParen, ")")),
        };
        assert_snapshot!(render(&node), @r#"<span class="math-row"><span class="math-identifier">x</span><span class="math-brace">)</span></span>"#);
    }
}
