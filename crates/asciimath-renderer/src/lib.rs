//! Internal library for the `asciimath-core` crate for rendering ASCIIMath expressions.
//!
//! This library defines the AST produced by the parser and renders it as MathML, as HTML
//! markup or as LaTeX source. All back ends implement the [`render::Emitter`] trait.
//!
//! # Example
//!
//! ```rust
//! use asciimath_renderer::ast::{Node, Symbol};
//! use asciimath_renderer::mathml::MathMLEmitter;
//! use asciimath_renderer::render::Emitter;
//! use asciimath_renderer::symbol::SymbolId;
//!
//! let ast = Node::SubSup {
//!     base: Box::new(Node::Symbol(Symbol::new(SymbolId::Sum, "sum"))),
//!     sub: Some(Box::new(Node::Identifier("i".into()))),
//!     sup: None,
//! };
//!
//! let mut output = String::new();
//! MathMLEmitter::new(&mut output, 0).emit(&ast).unwrap();
//! assert_eq!(output, "<munder><mo>&#x2211;</mo><mi>i</mi></munder>");
//! ```
pub mod ast;
pub mod color;
pub mod escape;
pub mod fmt;
pub mod html;
mod itoa;
pub mod latex;
pub mod mathml;
pub mod render;
pub mod symbol;
