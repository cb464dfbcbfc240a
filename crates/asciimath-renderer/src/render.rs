//! The contract shared by all back ends.

use std::fmt;

use crate::ast::{Node, Symbol};
use crate::color::Rgb;

/// A tree walker that writes one output format.
///
/// There is one handler per [`Node`] variant; [`Emitter::emit`] dispatches to them. Symbols
/// are resolved through [`SymbolId::render`](crate::symbol::SymbolId::render), never through
/// their surface spelling.
pub trait Emitter {
    fn emit_sequence(&mut self, nodes: &[Node]) -> fmt::Result;
    fn emit_symbol(&mut self, symbol: &Symbol) -> fmt::Result;
    fn emit_identifier(&mut self, name: &str) -> fmt::Result;
    fn emit_number(&mut self, number: &str) -> fmt::Result;
    fn emit_text(&mut self, text: &str) -> fmt::Result;
    fn emit_paren(
        &mut self,
        lparen: Option<&Symbol>,
        body: Option<&Node>,
        rparen: Option<&Symbol>,
    ) -> fmt::Result;
    /// A group's delimiters are never rendered, so only the body is passed on.
    fn emit_group(&mut self, body: Option<&Node>) -> fmt::Result;
    fn emit_subsup(&mut self, base: &Node, sub: Option<&Node>, sup: Option<&Node>)
    -> fmt::Result;
    fn emit_unary(&mut self, operator: &Symbol, operand: Option<&Node>) -> fmt::Result;
    fn emit_binary(
        &mut self,
        operator: &Symbol,
        operand1: Option<&Node>,
        operand2: Option<&Node>,
    ) -> fmt::Result;
    fn emit_infix(&mut self, operator: &Symbol, operand1: &Node, operand2: &Node) -> fmt::Result;
    fn emit_matrix(
        &mut self,
        lparen: Option<&Symbol>,
        rows: &[Vec<Option<Node>>],
        rparen: Option<&Symbol>,
    ) -> fmt::Result;
    fn emit_color(&mut self, rgb: Rgb, text: &str) -> fmt::Result;

    fn emit(&mut self, node: &Node) -> fmt::Result {
        match node {
            Node::Sequence(nodes) => self.emit_sequence(nodes),
            Node::Symbol(symbol) => self.emit_symbol(symbol),
            Node::Identifier(name) => self.emit_identifier(name),
            Node::Number(number) => self.emit_number(number),
            Node::Text(text) => self.emit_text(text),
            Node::Paren {
                lparen,
                body,
                rparen,
            } => self.emit_paren(lparen.as_ref(), body.as_deref(), rparen.as_ref()),
            Node::Group { body, .. } => self.emit_group(body.as_deref()),
            Node::SubSup { base, sub, sup } => {
                self.emit_subsup(base, sub.as_deref(), sup.as_deref())
            }
            Node::UnaryOp { operator, operand } => self.emit_unary(operator, operand.as_deref()),
            Node::BinaryOp {
                operator,
                operand1,
                operand2,
            } => self.emit_binary(operator, operand1.as_deref(), operand2.as_deref()),
            Node::InfixOp {
                operator,
                operand1,
                operand2,
            } => self.emit_infix(operator, operand1, operand2),
            Node::Matrix {
                lparen,
                rows,
                rparen,
            } => self.emit_matrix(lparen.as_ref(), rows, rparen.as_ref()),
            Node::Color { rgb, text } => self.emit_color(*rgb, text),
        }
    }

    /// Emit the root of an expression.
    ///
    /// The elements of a top-level sequence are emitted one after the other, without the
    /// wrapping that a nested sequence gets.
    fn emit_root(&mut self, root: Option<&Node>) -> fmt::Result {
        match root {
            Some(Node::Sequence(nodes)) => {
                for node in nodes {
                    self.emit(node)?;
                }
                Ok(())
            }
            Some(node) => self.emit(node),
            None => Ok(()),
        }
    }
}
