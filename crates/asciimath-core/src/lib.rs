//! Convert ASCIIMath to MathML, HTML or LaTeX.
//!
//! ASCIIMath is a plain-text notation for math, e.g. `sum_(i=1)^n i^3=((n(n+1))/2)^2`. This
//! crate parses it into an AST and renders the AST with one of the back ends of
//! `asciimath-renderer`.
//!
//! # Usage
//!
//! For the default symbols, the free function [`parse`] is all you need:
//!
//! ```rust
//! use asciimath_core::MathDisplay;
//!
//! let expression = asciimath_core::parse("a^2 + b^2 = c^2");
//! assert_eq!(expression.to_latex(), "a^2 + b^2 = c^2");
//! println!("{}", expression.to_mathml(MathDisplay::Block));
//! ```
//!
//! To customize the output or the symbols, create a [`Converter`] from an
//! [`AsciiMathConfig`]:
//!
//! ```rust
//! use asciimath_core::{AsciiMathConfig, Converter, CustomSymbol, GrammarClass, MathDisplay};
//!
//! let config = AsciiMathConfig {
//!     symbols: vec![CustomSymbol {
//!         spellings: vec!["colour".to_string()],
//!         id: Some("color".to_string()),
//!         class: GrammarClass::Binary,
//!         ..Default::default()
//!     }],
//!     ..Default::default()
//! };
//! let converter = Converter::new(config).unwrap();
//! let mathml = converter.to_mathml("colour(red)(x)", MathDisplay::Inline);
//! assert_eq!(mathml, "<math><mstyle mathcolor=\"#FF0000\"><mi>x</mi></mstyle></math>");
//! ```
//!
//! # Features
//!
//! - `serde`: With this feature, `AsciiMathConfig` implements serde's `Deserialize`, and the
//!   AST implements `Serialize`.
//!
mod color_defs;
mod error;
mod parser;
mod predefined;
mod symbol_table;
mod token;
mod tokenizer;

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use asciimath_renderer::ast::Node;
use asciimath_renderer::escape::escape_html_content;
use asciimath_renderer::fmt::new_line_and_indent;
use asciimath_renderer::html::HtmlEmitter;
use asciimath_renderer::latex::LatexEmitter;
use asciimath_renderer::mathml::MathMLEmitter;
use asciimath_renderer::render::Emitter;
use asciimath_renderer::symbol::{SymbolId, SymbolValue};

pub use asciimath_renderer as renderer;

pub use self::color_defs::{ColorTable, parse_hex_color};
pub use self::error::TableError;
pub use self::symbol_table::{
    GrammarClass, OperandConversion, SymbolDescriptor, SymbolTable, SymbolTableBuilder,
};
use self::parser::Parser;

/// Display mode of an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MathDisplay {
    /// Inside a line of text.
    Inline,
    /// On a line of its own.
    Block,
}

/// Configuration for pretty-printing the MathML output.
///
/// Pretty-printing means that newlines and indentation is added to the MathML output, to make it
/// easier to read.
#[derive(Debug, Clone, Copy, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
#[non_exhaustive]
pub enum PrettyPrint {
    /// Never pretty print.
    #[default]
    Never,
    /// Always pretty print.
    Always,
    /// Pretty print for block expressions only.
    Auto,
}

/// A symbol added to the default symbol table.
///
/// The symbol refers either to a predefined symbol by its snake case id (e.g. `"times"` or
/// `"big_wedge"`), or to a custom `value` that is displayed verbatim as an operator.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
pub struct CustomSymbol {
    pub spellings: Vec<String>,
    pub id: Option<String>,
    pub value: Option<String>,
    pub class: GrammarClass,
}

impl CustomSymbol {
    fn symbol_value(&self) -> Result<SymbolValue, TableError> {
        match (&self.id, &self.value) {
            (Some(id), _) => SymbolId::from_str(id)
                .map(SymbolValue::Id)
                .map_err(|_| TableError::UnknownSymbolId(id.clone())),
            (None, Some(value)) => Ok(SymbolValue::Custom(value.as_str().into())),
            (None, None) => Err(TableError::MissingValue),
        }
    }
}

/// Configuration object for the conversion.
///
/// # Example usage
///
/// ```rust
/// use asciimath_core::{AsciiMathConfig, PrettyPrint};
///
/// // Default values
/// let config = AsciiMathConfig::default();
///
/// // Pretty printing and an extra color
/// let config = AsciiMathConfig {
///     pretty_print: PrettyPrint::Auto,
///     colors: vec![("brand".to_string(), "#336699".to_string())],
///     ..Default::default()
/// };
/// ```
#[derive(Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "kebab-case"))]
pub struct AsciiMathConfig {
    /// A configuration for pretty-printing the MathML output. See [`PrettyPrint`] for details.
    pub pretty_print: PrettyPrint,
    /// If `true`, include `xmlns="http://www.w3.org/1998/Math/MathML"` in the `<math>` tag.
    pub xml_namespace: bool,
    /// If `true`, wrap the MathML output in `<semantics>` tags with an
    /// `<annotation encoding="text/x-asciimath">` child containing the source.
    pub annotation: bool,
    /// If `true`, entries in `symbols` may replace predefined spellings.
    pub allow_overwrite: bool,
    /// Symbols to add to the default symbol table.
    pub symbols: Vec<CustomSymbol>,
    /// Colors to add to the default color table; each tuple contains (name, `#RRGGBB` or
    /// `#RGB`).
    #[cfg_attr(feature = "serde", serde(with = "tuple_vec_map"))]
    pub colors: Vec<(String, String)>,
}

/// This struct contains those fields from `AsciiMathConfig` that are simple flags.
#[derive(Debug, Default, Clone, Copy)]
struct Flags {
    pretty_print: PrettyPrint,
    xml_namespace: bool,
    annotation: bool,
}

impl From<&AsciiMathConfig> for Flags {
    fn from(config: &AsciiMathConfig) -> Self {
        Self {
            pretty_print: config.pretty_print,
            xml_namespace: config.xml_namespace,
            annotation: config.annotation,
        }
    }
}

/// A parsed ASCIIMath expression.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    ast: Option<Node>,
}

impl Expression {
    /// The text the expression was parsed from.
    #[inline]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// The root of the AST, `None` for empty input.
    #[inline]
    pub fn ast(&self) -> Option<&Node> {
        self.ast.as_ref()
    }

    #[inline]
    pub fn into_ast(self) -> Option<Node> {
        self.ast
    }

    /// Render as MathML with default options.
    pub fn to_mathml(&self, display: MathDisplay) -> String {
        render_mathml(self, display, Flags::default())
    }

    /// Render as HTML markup.
    pub fn to_html(&self, display: MathDisplay) -> String {
        render_html(self, display)
    }

    /// Render as LaTeX source.
    pub fn to_latex(&self) -> String {
        let mut output = String::new();
        // Writing to a `String` never fails.
        let _ = LatexEmitter::new(&mut output).emit_root(self.ast());
        output
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Parse `source` with the default symbol and color tables.
#[inline]
pub fn parse(source: &str) -> Expression {
    parse_with(source, SymbolTable::default_table(), ColorTable::default_table())
}

/// Parse `source` with the given tables.
pub fn parse_with(source: &str, symbols: &SymbolTable, colors: &ColorTable) -> Expression {
    Expression {
        source: source.to_string(),
        ast: Parser::new(source, symbols, colors).parse(),
    }
}

/// A converter with fixed options and symbol tables.
#[derive(Debug, Default)]
pub struct Converter {
    flags: Flags,
    /// `None` means the default table.
    symbols: Option<SymbolTable>,
    colors: Option<ColorTable>,
}

impl Converter {
    /// Create a new `Converter` with the given configuration.
    ///
    /// This function returns an error if the custom symbols or colors in the configuration are
    /// invalid. The error contains the index of the entry that caused it, in `symbols` or in
    /// `colors` respectively.
    pub fn new(config: AsciiMathConfig) -> Result<Self, (TableError, usize)> {
        let symbols = if config.symbols.is_empty() {
            None
        } else {
            let mut builder = SymbolTable::default_table().to_builder();
            builder.allow_overwrite(config.allow_overwrite);
            for (idx, symbol) in config.symbols.iter().enumerate() {
                let spellings: Vec<&str> = symbol.spellings.iter().map(String::as_str).collect();
                symbol
                    .symbol_value()
                    .and_then(|value| builder.add(&spellings, value, symbol.class).map(|_| ()))
                    .map_err(|err| (err, idx))?;
            }
            Some(builder.build())
        };
        let colors = if config.colors.is_empty() {
            None
        } else {
            let mut table = ColorTable::default();
            for (idx, (name, value)) in config.colors.iter().enumerate() {
                table = table.with_hex_color(name, value).map_err(|err| (err, idx))?;
            }
            Some(table)
        };
        Ok(Self {
            flags: Flags::from(&config),
            symbols,
            colors,
        })
    }

    #[inline]
    pub fn symbols(&self) -> &SymbolTable {
        match self.symbols {
            Some(ref table) => table,
            None => SymbolTable::default_table(),
        }
    }

    #[inline]
    pub fn colors(&self) -> &ColorTable {
        match self.colors {
            Some(ref table) => table,
            None => ColorTable::default_table(),
        }
    }

    pub fn parse(&self, source: &str) -> Expression {
        parse_with(source, self.symbols(), self.colors())
    }

    /// Convert ASCIIMath text to MathML.
    ///
    /// ```rust
    /// use asciimath_core::{AsciiMathConfig, Converter, MathDisplay};
    ///
    /// let converter = Converter::new(AsciiMathConfig::default()).unwrap();
    /// let mathml = converter.to_mathml("x", MathDisplay::Block);
    /// assert_eq!(mathml, "<math display=\"block\"><mi>x</mi></math>");
    /// ```
    pub fn to_mathml(&self, source: &str, display: MathDisplay) -> String {
        render_mathml(&self.parse(source), display, self.flags)
    }

    pub fn to_html(&self, source: &str, display: MathDisplay) -> String {
        render_html(&self.parse(source), display)
    }

    pub fn to_latex(&self, source: &str) -> String {
        self.parse(source).to_latex()
    }
}

fn render_mathml(expression: &Expression, display: MathDisplay, flags: Flags) -> String {
    let mut output = String::new();
    output.push_str("<math");
    if flags.xml_namespace {
        output.push_str(" xmlns=\"http://www.w3.org/1998/Math/MathML\"");
    }
    if matches!(display, MathDisplay::Block) {
        output.push_str(" display=\"block\"");
    };
    output.push('>');

    let pretty_print = matches!(flags.pretty_print, PrettyPrint::Always)
        || (matches!(flags.pretty_print, PrettyPrint::Auto) && display == MathDisplay::Block);

    let base_indent = if pretty_print { 1 } else { 0 };
    // We ignore the result of `emit_root`, because the only possible error is a formatting error
    // when writing to the string, and `String`'s `write_str` never returns an error.
    if flags.annotation {
        new_line_and_indent(&mut output, base_indent);
        output.push_str("<semantics>");
        let child_indent = if pretty_print { base_indent + 1 } else { 0 };
        let mut emitter = MathMLEmitter::new(&mut output, child_indent);
        // `<semantics>` needs exactly one child, so a sequence keeps its `<mrow>`.
        let _ = match expression.ast() {
            Some(node) => emitter.emit(node),
            None => emitter.emit_sequence(&[]),
        };
        new_line_and_indent(&mut output, child_indent);
        output.push_str("<annotation encoding=\"text/x-asciimath\">");
        escape_html_content(&mut output, expression.source());
        output.push_str("</annotation>");
        new_line_and_indent(&mut output, base_indent);
        output.push_str("</semantics>");
    } else {
        let _ = MathMLEmitter::new(&mut output, base_indent).emit_root(expression.ast());
    }
    if pretty_print {
        output.push('\n');
    }
    output.push_str("</math>");
    output
}

fn render_html(expression: &Expression, display: MathDisplay) -> String {
    let mut output = String::new();
    let tag = match display {
        MathDisplay::Inline => {
            output.push_str("<span class=\"math-inline\">");
            "span"
        }
        MathDisplay::Block => {
            output.push_str("<div class=\"math-block\">");
            "div"
        }
    };
    let _ = HtmlEmitter::new(&mut output).emit_root(expression.ast());
    output.push_str("</");
    output.push_str(tag);
    output.push('>');
    output
}

#[cfg(test)]
mod tests {
    use asciimath_renderer::color::Rgb;
    use insta::assert_snapshot;

    use super::*;

    #[test]
    fn pythagoras_mathml() {
        let expression = parse("a^2 + b^2 = c^2");
        assert_snapshot!(expression.to_mathml(MathDisplay::Inline), @"<math><msup><mi>a</mi><mn>2</mn></msup><mo>+</mo><msup><mi>b</mi><mn>2</mn></msup><mo>=</mo><msup><mi>c</mi><mn>2</mn></msup></math>");
        assert_snapshot!(expression.to_latex(), @"a^2 + b^2 = c^2");
    }

    #[test]
    fn reparse_source() {
        for source in ["a^2 + b^2 = c^2", "((1,2),(3,4))", "color(red)(x)", "sum_(i=1)^n i"] {
            let expression = parse(source);
            assert_eq!(parse(expression.source()), expression);
            assert_eq!(expression.to_string(), source);
        }
    }

    #[test]
    fn empty_expression() {
        let expression = parse("");
        assert_eq!(expression.ast(), None);
        assert_eq!(expression.to_mathml(MathDisplay::Inline), "<math></math>");
        assert_eq!(expression.to_latex(), "");
        assert_eq!(
            expression.to_html(MathDisplay::Inline),
            "<span class=\"math-inline\"></span>"
        );
    }

    #[test]
    fn block_display() {
        let expression = parse("x");
        assert_eq!(
            expression.to_mathml(MathDisplay::Block),
            "<math display=\"block\"><mi>x</mi></math>"
        );
        assert_eq!(
            expression.to_html(MathDisplay::Block),
            "<div class=\"math-block\"><span class=\"math-identifier\">x</span></div>"
        );
    }

    #[test]
    fn pretty_print() {
        let config = AsciiMathConfig {
            pretty_print: PrettyPrint::Always,
            xml_namespace: true,
            ..Default::default()
        };
        let converter = Converter::new(config).unwrap();
        let mathml = converter.to_mathml("x^2", MathDisplay::Inline);
        assert_eq!(
            mathml,
            "<math xmlns=\"http://www.w3.org/1998/Math/MathML\">\n    <msup>\n        <mi>x</mi>\n        <mn>2</mn>\n    </msup>\n</math>"
        );
    }

    #[test]
    fn pretty_print_auto() {
        let config = AsciiMathConfig {
            pretty_print: PrettyPrint::Auto,
            ..Default::default()
        };
        let converter = Converter::new(config).unwrap();
        assert_eq!(
            converter.to_mathml("x", MathDisplay::Inline),
            "<math><mi>x</mi></math>"
        );
        assert_eq!(
            converter.to_mathml("x", MathDisplay::Block),
            "<math display=\"block\">\n    <mi>x</mi>\n</math>"
        );
    }

    #[test]
    fn annotation() {
        let config = AsciiMathConfig {
            annotation: true,
            ..Default::default()
        };
        let converter = Converter::new(config).unwrap();
        assert_snapshot!(converter.to_mathml("x<y", MathDisplay::Inline), @r#"<math><semantics><mrow><mi>x</mi><mo>&lt;</mo><mi>y</mi></mrow><annotation encoding="text/x-asciimath">x&lt;y</annotation></semantics></math>"#);
    }

    #[test]
    fn converter_tables() {
        let converter = Converter::default();
        assert!(std::ptr::eq(converter.symbols(), SymbolTable::default_table()));
        assert!(std::ptr::eq(converter.colors(), ColorTable::default_table()));

        let config = AsciiMathConfig {
            colors: vec![("brand".to_string(), "#369".to_string())],
            ..Default::default()
        };
        let converter = Converter::new(config).unwrap();
        assert!(std::ptr::eq(converter.symbols(), SymbolTable::default_table()));
        assert!(!std::ptr::eq(converter.colors(), ColorTable::default_table()));
        assert_eq!(converter.colors().lookup("brand"), Some(Rgb::new(51, 102, 153)));
    }

    #[test]
    fn custom_symbols() {
        let config = AsciiMathConfig {
            symbols: vec![
                CustomSymbol {
                    spellings: vec!["xor".to_string()],
                    value: Some("\u{22BB}".to_string()),
                    ..Default::default()
                },
                CustomSymbol {
                    spellings: vec!["cross".to_string()],
                    id: Some("times".to_string()),
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        let converter = Converter::new(config).unwrap();
        assert_eq!(
            converter.to_mathml("a xor b cross c", MathDisplay::Inline),
            "<math><mi>a</mi><mo>&#x22BB;</mo><mi>b</mi><mo>&#xD7;</mo><mi>c</mi></math>"
        );
        assert_eq!(converter.to_latex("a cross b"), r"a \times b");
        // The default table is unchanged.
        assert!(SymbolTable::default_table().lookup("xor").is_none());
    }

    #[test]
    fn custom_symbol_errors() {
        let unknown = AsciiMathConfig {
            symbols: vec![CustomSymbol {
                spellings: vec!["foo".to_string()],
                id: Some("no_such_symbol".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };
        assert_eq!(
            Converter::new(unknown).unwrap_err(),
            (TableError::UnknownSymbolId("no_such_symbol".to_string()), 0)
        );

        let missing = AsciiMathConfig {
            symbols: vec![
                CustomSymbol {
                    spellings: vec!["ok".to_string()],
                    value: Some("!".to_string()),
                    ..Default::default()
                },
                CustomSymbol {
                    spellings: vec!["bad".to_string()],
                    ..Default::default()
                },
            ],
            ..Default::default()
        };
        assert_eq!(
            Converter::new(missing).unwrap_err(),
            (TableError::MissingValue, 1)
        );

        let duplicate = AsciiMathConfig {
            symbols: vec![CustomSymbol {
                spellings: vec!["xx".to_string()],
                id: Some("ast".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };
        assert_eq!(
            Converter::new(duplicate).unwrap_err(),
            (TableError::DuplicateSpelling("xx".to_string()), 0)
        );
    }

    #[test]
    fn overwriting_symbols() {
        let config = AsciiMathConfig {
            allow_overwrite: true,
            symbols: vec![CustomSymbol {
                spellings: vec!["xx".to_string()],
                id: Some("ast".to_string()),
                ..Default::default()
            }],
            ..Default::default()
        };
        let converter = Converter::new(config).unwrap();
        assert_eq!(converter.to_latex("a xx b"), r"a \ast b");
    }

    #[test]
    fn custom_colors() {
        let config = AsciiMathConfig {
            colors: vec![("brand".to_string(), "#369".to_string())],
            ..Default::default()
        };
        let converter = Converter::new(config).unwrap();
        assert_eq!(
            converter.to_latex("color(brand)(x)"),
            r"\textcolor[RGB]{51,102,153}{x}"
        );
        assert_eq!(
            converter.to_latex("color(red)(x)"),
            r"\textcolor[RGB]{255,0,0}{x}"
        );

        let invalid = AsciiMathConfig {
            colors: vec![("brand".to_string(), "blue".to_string())],
            ..Default::default()
        };
        assert_eq!(
            Converter::new(invalid).unwrap_err(),
            (TableError::InvalidColor("blue".to_string()), 0)
        );
    }
}
