//! LaTeX back end.

use std::fmt::{self, Write};

use crate::ast::{Node, Symbol};
use crate::color::Rgb;
use crate::escape::escape_latex;
use crate::render::Emitter;
use crate::symbol::{DisplayClass, SymbolValue};

pub struct LatexEmitter<'out> {
    s: &'out mut String,
}

impl<'out> LatexEmitter<'out> {
    #[inline]
    pub fn new(s: &'out mut String) -> Self {
        Self { s }
    }

    fn symbol(&mut self, symbol: &Symbol) {
        match &symbol.value {
            SymbolValue::Id(id) => {
                let latex = id.render().latex;
                if latex.is_empty() {
                    escape_latex(self.s, &symbol.text);
                } else {
                    self.s.push_str(latex);
                }
            }
            SymbolValue::Custom(value) => escape_latex(self.s, value),
        }
    }

    /// `\left` or `\right` followed by the delimiter, `.` if there is none.
    fn delimiter(&mut self, command: &str, symbol: Option<&Symbol>) {
        self.s.push_str(command);
        match symbol {
            Some(symbol) => self.symbol(symbol),
            None => self.s.push('.'),
        }
    }

    /// An operand in braces; a missing operand gives `{}`.
    fn operand(&mut self, node: Option<&Node>) -> fmt::Result {
        self.s.push('{');
        if let Some(node) = node {
            self.emit(node)?;
        }
        self.s.push('}');
        Ok(())
    }

    /// Scripts made of a single letter or digit are written without braces.
    fn script(&mut self, marker: char, node: &Node) -> fmt::Result {
        self.s.push(marker);
        match node {
            Node::Identifier(s) | Node::Number(s)
                if s.len() == 1 && s.bytes().all(|b| b.is_ascii_alphanumeric()) =>
            {
                self.s.push_str(s);
                Ok(())
            }
            node => self.operand(Some(node)),
        }
    }

    fn fraction(&mut self, numerator: Option<&Node>, denominator: Option<&Node>) -> fmt::Result {
        self.s.push_str(r"\frac");
        self.operand(numerator)?;
        self.operand(denominator)
    }
}

impl Emitter for LatexEmitter<'_> {
    fn emit_sequence(&mut self, nodes: &[Node]) -> fmt::Result {
        for (i, node) in nodes.iter().enumerate() {
            if i > 0 {
                self.s.push(' ');
            }
            self.emit(node)?;
        }
        Ok(())
    }

    fn emit_symbol(&mut self, symbol: &Symbol) -> fmt::Result {
        self.symbol(symbol);
        Ok(())
    }

    fn emit_identifier(&mut self, name: &str) -> fmt::Result {
        escape_latex(self.s, name);
        Ok(())
    }

    fn emit_number(&mut self, number: &str) -> fmt::Result {
        self.s.push_str(number);
        Ok(())
    }

    fn emit_text(&mut self, text: &str) -> fmt::Result {
        self.s.push_str(r"\text{");
        escape_latex(self.s, text);
        self.s.push('}');
        Ok(())
    }

    fn emit_paren(
        &mut self,
        lparen: Option<&Symbol>,
        body: Option<&Node>,
        rparen: Option<&Symbol>,
    ) -> fmt::Result {
        self.delimiter(r"\left", lparen);
        self.s.push(' ');
        if let Some(body) = body {
            self.emit(body)?;
            self.s.push(' ');
        }
        self.delimiter(r"\right", rparen);
        Ok(())
    }

    fn emit_group(&mut self, body: Option<&Node>) -> fmt::Result {
        match body {
            Some(body) => self.emit(body),
            None => Ok(()),
        }
    }

    fn emit_subsup(&mut self, base: &Node, sub: Option<&Node>, sup: Option<&Node>) -> fmt::Result {
        self.emit(base)?;
        if let Some(sub) = sub {
            self.script('_', sub)?;
        }
        if let Some(sup) = sup {
            self.script('^', sup)?;
        }
        Ok(())
    }

    fn emit_unary(&mut self, operator: &Symbol, operand: Option<&Node>) -> fmt::Result {
        if let DisplayClass::Wrap(left, right) = operator.value.class() {
            let left = Symbol::new(left, "");
            let right = Symbol::new(right, "");
            return self.emit_paren(Some(&left), operand, Some(&right));
        }
        self.symbol(operator);
        self.operand(operand)
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
                self.s.push_str(r"\sqrt[");
                if let Some(index) = operand1 {
                    self.emit(index)?;
                }
                self.s.push(']');
                self.operand(operand2)
            }
            DisplayClass::Color => {
                let rgb = match operand1 {
                    Some(Node::Color { rgb, .. }) => *rgb,
                    _ => Rgb::BLACK,
                };
                write!(self.s, r"\textcolor[RGB]{{{},{},{}}}", rgb.r, rgb.g, rgb.b)?;
                self.operand(operand2)
            }
            _ => {
                self.symbol(operator);
                self.operand(operand1)?;
                self.operand(operand2)
            }
        }
    }

    fn emit_infix(&mut self, operator: &Symbol, operand1: &Node, operand2: &Node) -> fmt::Result {
        match operator.value.class() {
            DisplayClass::Fraction => self.fraction(Some(operand1), Some(operand2)),
            DisplayClass::Subscript => self.emit_subsup(operand1, Some(operand2), None),
            DisplayClass::Superscript => self.emit_subsup(operand1, None, Some(operand2)),
            _ => {
                self.emit(operand1)?;
                self.s.push(' ');
                self.symbol(operator);
                self.s.push(' ');
                self.emit(operand2)
            }
        }
    }

    fn emit_matrix(
        &mut self,
        lparen: Option<&Symbol>,
        rows: &[Vec<Option<Node>>],
        rparen: Option<&Symbol>,
    ) -> fmt::Result {
        self.delimiter(r"\left", lparen);
        self.s.push_str(r" \begin{matrix} ");
        for (i, row) in rows.iter().enumerate() {
            if i > 0 {
                self.s.push_str(r" \\ ");
            }
            for (j, cell) in row.iter().enumerate() {
                if j > 0 {
                    self.s.push_str(" & ");
                }
                if let Some(cell) = cell {
                    self.emit(cell)?;
                }
            }
        }
        self.s.push_str(r" \end{matrix} ");
        self.delimiter(r"\right", rparen);
        Ok(())
    }

    fn emit_color(&mut self, _rgb: Rgb, text: &str) -> fmt::Result {
        escape_latex(self.s, text);
        Ok(())
    }

    fn emit_root(&mut self, root: Option<&Node>) -> fmt::Result {
        match root {
            Some(node) => self.emit(node),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use insta::assert_snapshot;

    use super::*;
    use crate::symbol::SymbolId;

    fn render(node: &Node) -> String {
        let mut output = String::new();
        LatexEmitter::new(&mut output)
            .emit_root(Some(node))
            .unwrap();
        output
    }

    fn sym(id: SymbolId, text: &str) -> Symbol {
        Symbol::new(id, text)
    }

    fn ident(name: &str) -> Box<Node> {
        Box::new(Node::Identifier(name.into()))
    }

    fn num(value: &str) -> Box<Node> {
        Box::new(Node::Number(value.into()))
    }

    fn square(name: &str) -> Node {
        Node::SubSup {
            base: ident(name),
            sub: None,
            sup: Some(num("2")),
        }
    }

    #[test]
    fn pythagoras() {
        let node = Node::Sequence(vec![
            square("a"),
            Node::Symbol(sym(SymbolId::Plus, "+")),
            square("b"),
            Node::Symbol(sym(SymbolId::Equals, "=")),
            square("c"),
        ]);
        assert_snapshot!(render(&node), @"a^2 + b^2 = c^2");
    }

    #[test]
    fn scripts_get_braces_when_needed() {
        let node = Node::SubSup {
            base: ident("z"),
            sub: Some(num("12")),
            sup: Some(Box::new(Node::Symbol(sym(SymbolId::Alpha, "alpha")))),
        };
        assert_snapshot!(render(&node), @r"z_{12}^{\alpha}");
    }

    #[test]
    fn control_words_are_spaced() {
        let node = Node::Sequence(vec![
            Node::Symbol(sym(SymbolId::Sin, "sin")),
            Node::Identifier("x".into()),
        ]);
        assert_snapshot!(render(&node), @r"\sin x");
    }

    #[test]
    fn paren_and_wrap() {
        let paren = Node::Paren {
            lparen: Some(sym(SymbolId::LeftParen, "(")),
            body: Some(ident("x")),
            rparen: None,
        };
        assert_snapshot!(render(&paren), @r"\left( x \right.");
        let abs = Node::UnaryOp {
            operator: sym(SymbolId::Floor, "floor"),
            operand: Some(ident("x")),
        };
        assert_snapshot!(render(&abs), @r"\left\lfloor x \right\rfloor");
    }

    #[test]
    fn operators_with_operands() {
        let sqrt = Node::UnaryOp {
            operator: sym(SymbolId::Sqrt, "sqrt"),
            operand: Some(ident("x")),
        };
        assert_snapshot!(render(&sqrt), @r"\sqrt{x}");
        let root = Node::BinaryOp {
            operator: sym(SymbolId::Root, "root"),
            operand1: Some(num("3")),
            operand2: Some(ident("x")),
        };
        assert_snapshot!(render(&root), @r"\sqrt[3]{x}");
        let frac = Node::BinaryOp {
            operator: sym(SymbolId::Frac, "frac"),
            operand1: Some(ident("a")),
            operand2: None,
        };
        assert_snapshot!(render(&frac), @r"\frac{a}{}");
        let color = Node::BinaryOp {
            operator: sym(SymbolId::Color, "color"),
            operand1: Some(Box::new(Node::Color {
                rgb: Rgb::new(17, 34, 51),
                text: "#123".into(),
            })),
            operand2: Some(ident("x")),
        };
        assert_snapshot!(render(&color), @r"\textcolor[RGB]{17,34,51}{x}");
    }

    #[test]
    fn matrix() {
        let node = Node::Matrix {
            lparen: Some(sym(SymbolId::LeftBracket, "[")),
            rows: vec![
                vec![Some(Node::Number("1".into())), Some(Node::Number("2".into()))],
                vec![Some(Node::Number("3".into())), None],
            ],
            rparen: Some(sym(SymbolId::RightBracket, "]")),
        };
        assert_snapshot!(render(&node), @r"\left[ \begin{matrix} 1 & 2 \\ 3 &  \end{matrix} \right]");
    }

    #[test]
    fn text_is_escaped() {
        assert_snapshot!(render(&Node::Text("50% off".into())), @r"\text{50\% off}");
    }
}
