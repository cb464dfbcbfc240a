//! The render symbol table.
//!
//! Every predefined symbol has a [`SymbolId`]. The parser maps surface spellings to these ids;
//! the back ends map ids to display text through [`SymbolId::render`].

#[cfg(feature = "serde")]
use serde::Serialize;
use strum_macros::{EnumIter, EnumString, IntoStaticStr};

/// Placement of accents and stacked expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Over,
    Under,
}

/// Font variants selectable with `bb`, `cc`, `tt`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontVariant {
    Bold,
    DoubleStruck,
    Script,
    Fraktur,
    Monospace,
    SansSerif,
}

impl FontVariant {
    /// The value of the MathML `mathvariant` attribute.
    pub const fn mathvariant(self) -> &'static str {
        match self {
            FontVariant::Bold => "bold",
            FontVariant::DoubleStruck => "double-struck",
            FontVariant::Script => "script",
            FontVariant::Fraktur => "fraktur",
            FontVariant::Monospace => "monospace",
            FontVariant::SansSerif => "sans-serif",
        }
    }
}

/// How a symbol is displayed, and for operators, how their operands are laid out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayClass {
    /// `<mo>`
    Operator,
    /// An operator whose scripts go under and over it, e.g. `∑` or `lim`.
    LargeOperator,
    /// `<mi>`
    Identifier,
    /// A function name such as `sin`.
    Function,
    /// A word such as `and`, rendered as text.
    Text,
    /// Horizontal space of the given width.
    Space(&'static str),
    Accent(Position),
    Font(FontVariant),
    /// Surround the operand with the two given fences, e.g. `abs`.
    Wrap(SymbolId, SymbolId),
    Sqrt,
    Root,
    Fraction,
    /// Stack the first operand over or under the second one.
    Stack(Position),
    Color,
    Cancel,
    Subscript,
    Superscript,
}

/// The display data of a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderSymbol {
    /// Text used by the MathML and HTML back ends.
    pub unicode: &'static str,
    /// Text used by the LaTeX back end.
    pub latex: &'static str,
    pub class: DisplayClass,
}

macro_rules! symbols {
    ($($(#[$meta:meta])* $id:ident => $unicode:literal, $latex:literal, $class:expr;)*) => {
        /// The id of a predefined symbol.
        ///
        /// The snake case form of the name (e.g. `big_wedge`) is accepted by `FromStr`.
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, IntoStaticStr, EnumString, EnumIter,
        )]
        #[cfg_attr(feature = "serde", derive(Serialize))]
        #[strum(serialize_all = "snake_case")]
        #[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
        pub enum SymbolId {
            $($(#[$meta])* $id,)*
        }

        impl SymbolId {
            /// Look up the display data of this symbol.
            pub const fn render(self) -> RenderSymbol {
                match self {
                    $(SymbolId::$id => RenderSymbol {
                        unicode: $unicode,
                        latex: $latex,
                        class: $class,
                    },)*
                }
            }
        }
    };
}

use DisplayClass::*;

symbols! {
    // Operation symbols
    Plus => "+", "+", Operator;
    Minus => "\u{2212}", "-", Operator;
    Cdot => "\u{22C5}", r"\cdot", Operator;
    Ast => "\u{2217}", r"\ast", Operator;
    Star => "\u{22C6}", r"\star", Operator;
    Slash => "/", "/", Operator;
    Backslash => "\\", r"\backslash", Operator;
    Setminus => "\u{2216}", r"\setminus", Operator;
    Times => "\u{D7}", r"\times", Operator;
    Ltimes => "\u{22C9}", r"\ltimes", Operator;
    Rtimes => "\u{22CA}", r"\rtimes", Operator;
    Bowtie => "\u{22C8}", r"\bowtie", Operator;
    Div => "\u{F7}", r"\div", Operator;
    Circ => "\u{2218}", r"\circ", Operator;
    Oplus => "\u{2295}", r"\oplus", Operator;
    Otimes => "\u{2297}", r"\otimes", Operator;
    Odot => "\u{2299}", r"\odot", Operator;
    Sum => "\u{2211}", r"\sum", LargeOperator;
    Prod => "\u{220F}", r"\prod", LargeOperator;
    Wedge => "\u{2227}", r"\wedge", Operator;
    BigWedge => "\u{22C0}", r"\bigwedge", LargeOperator;
    Vee => "\u{2228}", r"\vee", Operator;
    BigVee => "\u{22C1}", r"\bigvee", LargeOperator;
    Cap => "\u{2229}", r"\cap", Operator;
    BigCap => "\u{22C2}", r"\bigcap", LargeOperator;
    Cup => "\u{222A}", r"\cup", Operator;
    BigCup => "\u{22C3}", r"\bigcup", LargeOperator;

    // Relation symbols
    Equals => "=", "=", Operator;
    NotEquals => "\u{2260}", r"\neq", Operator;
    LessThan => "<", "<", Operator;
    GreaterThan => ">", ">", Operator;
    LessEqual => "\u{2264}", r"\leq", Operator;
    GreaterEqual => "\u{2265}", r"\geq", Operator;
    MuchLess => "\u{226A}", r"\ll", Operator;
    MuchGreater => "\u{226B}", r"\gg", Operator;
    Prec => "\u{227A}", r"\prec", Operator;
    Succ => "\u{227B}", r"\succ", Operator;
    PrecEq => "\u{2AAF}", r"\preceq", Operator;
    SuccEq => "\u{2AB0}", r"\succeq", Operator;
    In => "\u{2208}", r"\in", Operator;
    NotIn => "\u{2209}", r"\notin", Operator;
    Subset => "\u{2282}", r"\subset", Operator;
    Supset => "\u{2283}", r"\supset", Operator;
    SubsetEq => "\u{2286}", r"\subseteq", Operator;
    SupsetEq => "\u{2287}", r"\supseteq", Operator;
    Equiv => "\u{2261}", r"\equiv", Operator;
    Cong => "\u{2245}", r"\cong", Operator;
    Approx => "\u{2248}", r"\approx", Operator;
    Sim => "\u{223C}", r"\sim", Operator;
    Propto => "\u{221D}", r"\propto", Operator;

    // Logical symbols
    And => "and", r"\text{and}", Text;
    Or => "or", r"\text{or}", Text;
    Neg => "\u{AC}", r"\neg", Operator;
    Implies => "\u{21D2}", r"\Rightarrow", Operator;
    If => "if", r"\text{if}", Text;
    Iff => "\u{21D4}", r"\Leftrightarrow", Operator;
    ForAll => "\u{2200}", r"\forall", Operator;
    Exists => "\u{2203}", r"\exists", Operator;
    Bot => "\u{22A5}", r"\bot", Operator;
    Top => "\u{22A4}", r"\top", Operator;
    Vdash => "\u{22A2}", r"\vdash", Operator;
    Models => "\u{22A8}", r"\models", Operator;

    // Grouping brackets
    LeftParen => "(", "(", Operator;
    RightParen => ")", ")", Operator;
    LeftBracket => "[", "[", Operator;
    RightBracket => "]", "]", Operator;
    LeftBrace => "{", r"\{", Operator;
    RightBrace => "}", r"\}", Operator;
    LeftAngle => "\u{27E8}", r"\langle", Operator;
    RightAngle => "\u{27E9}", r"\rangle", Operator;
    /// `{:`, which the parser turns into an absent delimiter.
    LeftInvisible => "", ".", Operator;
    /// `:}`, which the parser turns into an absent delimiter.
    RightInvisible => "", ".", Operator;
    VerticalBar => "|", "|", Operator;
    DoubleVerticalBar => "\u{2016}", r"\|", Operator;

    // Miscellaneous symbols
    Integral => "\u{222B}", r"\int", Operator;
    ContourIntegral => "\u{222E}", r"\oint", Operator;
    Partial => "\u{2202}", r"\partial", Identifier;
    Nabla => "\u{2207}", r"\nabla", Identifier;
    PlusMinus => "\u{B1}", r"\pm", Operator;
    MinusPlus => "\u{2213}", r"\mp", Operator;
    EmptySet => "\u{2205}", r"\emptyset", Identifier;
    Infinity => "\u{221E}", r"\infty", Identifier;
    Aleph => "\u{2135}", r"\aleph", Identifier;
    Therefore => "\u{2234}", r"\therefore", Operator;
    Because => "\u{2235}", r"\because", Operator;
    Ellipsis => "\u{2026}", r"\ldots", Operator;
    CenterDots => "\u{22EF}", r"\cdots", Operator;
    VerticalDots => "\u{22EE}", r"\vdots", Operator;
    DiagonalDots => "\u{22F1}", r"\ddots", Operator;
    Space => "\u{A0}", r"\ ", Space("0.2778em");
    Quad => "\u{2003}", r"\quad", Space("1em");
    Qquad => "\u{2003}\u{2003}", r"\qquad", Space("2em");
    Angle => "\u{2220}", r"\angle", Operator;
    Frown => "\u{2322}", r"\frown", Operator;
    Triangle => "\u{25B3}", r"\triangle", Operator;
    Diamond => "\u{22C4}", r"\diamond", Operator;
    Square => "\u{25A1}", r"\square", Operator;
    LeftFloor => "\u{230A}", r"\lfloor", Operator;
    RightFloor => "\u{230B}", r"\rfloor", Operator;
    LeftCeiling => "\u{2308}", r"\lceil", Operator;
    RightCeiling => "\u{2309}", r"\rceil", Operator;
    Complex => "\u{2102}", r"\mathbb{C}", Identifier;
    Naturals => "\u{2115}", r"\mathbb{N}", Identifier;
    Rationals => "\u{211A}", r"\mathbb{Q}", Identifier;
    Reals => "\u{211D}", r"\mathbb{R}", Identifier;
    Integers => "\u{2124}", r"\mathbb{Z}", Identifier;
    Prime => "\u{2032}", r"'", Operator;

    // Standard functions
    Sin => "sin", r"\sin", Function;
    Cos => "cos", r"\cos", Function;
    Tan => "tan", r"\tan", Function;
    Sec => "sec", r"\sec", Function;
    Csc => "csc", r"\csc", Function;
    Cot => "cot", r"\cot", Function;
    Arcsin => "arcsin", r"\arcsin", Function;
    Arccos => "arccos", r"\arccos", Function;
    Arctan => "arctan", r"\arctan", Function;
    Sinh => "sinh", r"\sinh", Function;
    Cosh => "cosh", r"\cosh", Function;
    Tanh => "tanh", r"\tanh", Function;
    Sech => "sech", r"\operatorname{sech}", Function;
    Csch => "csch", r"\operatorname{csch}", Function;
    Coth => "coth", r"\coth", Function;
    Exp => "exp", r"\exp", Function;
    Log => "log", r"\log", Function;
    Ln => "ln", r"\ln", Function;
    Det => "det", r"\det", Function;
    Dim => "dim", r"\dim", Function;
    Mod => "mod", r"\operatorname{mod}", Function;
    Gcd => "gcd", r"\gcd", Function;
    Lcm => "lcm", r"\operatorname{lcm}", Function;
    Lub => "lub", r"\operatorname{lub}", Function;
    Glb => "glb", r"\operatorname{glb}", Function;
    Min => "min", r"\min", LargeOperator;
    Max => "max", r"\max", LargeOperator;
    Lim => "lim", r"\lim", LargeOperator;
    CapitalLim => "Lim", r"\operatorname*{Lim}", LargeOperator;

    // Greek letters
    Alpha => "\u{3B1}", r"\alpha", Identifier;
    Beta => "\u{3B2}", r"\beta", Identifier;
    Gamma => "\u{3B3}", r"\gamma", Identifier;
    CapitalGamma => "\u{393}", r"\Gamma", Identifier;
    Delta => "\u{3B4}", r"\delta", Identifier;
    CapitalDelta => "\u{394}", r"\Delta", Identifier;
    Epsilon => "\u{3B5}", r"\epsilon", Identifier;
    VarEpsilon => "\u{25B}", r"\varepsilon", Identifier;
    Zeta => "\u{3B6}", r"\zeta", Identifier;
    Eta => "\u{3B7}", r"\eta", Identifier;
    Theta => "\u{3B8}", r"\theta", Identifier;
    CapitalTheta => "\u{398}", r"\Theta", Identifier;
    VarTheta => "\u{3D1}", r"\vartheta", Identifier;
    Iota => "\u{3B9}", r"\iota", Identifier;
    Kappa => "\u{3BA}", r"\kappa", Identifier;
    Lambda => "\u{3BB}", r"\lambda", Identifier;
    CapitalLambda => "\u{39B}", r"\Lambda", Identifier;
    Mu => "\u{3BC}", r"\mu", Identifier;
    Nu => "\u{3BD}", r"\nu", Identifier;
    Xi => "\u{3BE}", r"\xi", Identifier;
    CapitalXi => "\u{39E}", r"\Xi", Identifier;
    Pi => "\u{3C0}", r"\pi", Identifier;
    CapitalPi => "\u{3A0}", r"\Pi", Identifier;
    Rho => "\u{3C1}", r"\rho", Identifier;
    Sigma => "\u{3C3}", r"\sigma", Identifier;
    CapitalSigma => "\u{3A3}", r"\Sigma", Identifier;
    Tau => "\u{3C4}", r"\tau", Identifier;
    Upsilon => "\u{3C5}", r"\upsilon", Identifier;
    Phi => "\u{3D5}", r"\phi", Identifier;
    CapitalPhi => "\u{3A6}", r"\Phi", Identifier;
    VarPhi => "\u{3C6}", r"\varphi", Identifier;
    Chi => "\u{3C7}", r"\chi", Identifier;
    Psi => "\u{3C8}", r"\psi", Identifier;
    CapitalPsi => "\u{3A8}", r"\Psi", Identifier;
    Omega => "\u{3C9}", r"\omega", Identifier;
    CapitalOmega => "\u{3A9}", r"\Omega", Identifier;

    // Arrows
    UpArrow => "\u{2191}", r"\uparrow", Operator;
    DownArrow => "\u{2193}", r"\downarrow", Operator;
    RightArrow => "\u{2192}", r"\rightarrow", Operator;
    To => "\u{2192}", r"\to", Operator;
    RightArrowTail => "\u{21A3}", r"\rightarrowtail", Operator;
    TwoHeadRightArrow => "\u{21A0}", r"\twoheadrightarrow", Operator;
    TwoHeadRightArrowTail => "\u{2916}", r"\twoheadrightarrowtail", Operator;
    MapsTo => "\u{21A6}", r"\mapsto", Operator;
    LeftArrow => "\u{2190}", r"\leftarrow", Operator;
    LeftRightArrow => "\u{2194}", r"\leftrightarrow", Operator;
    DoubleRightArrow => "\u{21D2}", r"\Rightarrow", Operator;
    DoubleLeftArrow => "\u{21D0}", r"\Leftarrow", Operator;
    DoubleLeftRightArrow => "\u{21D4}", r"\Leftrightarrow", Operator;

    // Accents
    Hat => "^", r"\hat", Accent(Position::Over);
    Bar => "\u{AF}", r"\overline", Accent(Position::Over);
    Underline => "_", r"\underline", Accent(Position::Under);
    Vector => "\u{2192}", r"\vec", Accent(Position::Over);
    Tilde => "~", r"\tilde", Accent(Position::Over);
    Dot => "\u{2D9}", r"\dot", Accent(Position::Over);
    DoubleDot => "\u{A8}", r"\ddot", Accent(Position::Over);
    OverArc => "\u{23DC}", r"\overparen", Accent(Position::Over);
    OverBrace => "\u{23DE}", r"\overbrace", Accent(Position::Over);
    UnderBrace => "\u{23DF}", r"\underbrace", Accent(Position::Under);
    Cancel => "", r"\cancel", Cancel;

    // Font commands
    Bold => "", r"\mathbf", Font(FontVariant::Bold);
    DoubleStruck => "", r"\mathbb", Font(FontVariant::DoubleStruck);
    Script => "", r"\mathcal", Font(FontVariant::Script);
    Monospace => "", r"\mathtt", Font(FontVariant::Monospace);
    Fraktur => "", r"\mathfrak", Font(FontVariant::Fraktur);
    SansSerif => "", r"\mathsf", Font(FontVariant::SansSerif);

    // Operators with operands
    Abs => "", "", Wrap(SymbolId::VerticalBar, SymbolId::VerticalBar);
    Floor => "", "", Wrap(SymbolId::LeftFloor, SymbolId::RightFloor);
    Ceil => "", "", Wrap(SymbolId::LeftCeiling, SymbolId::RightCeiling);
    Norm => "", "", Wrap(SymbolId::DoubleVerticalBar, SymbolId::DoubleVerticalBar);
    Sqrt => "\u{221A}", r"\sqrt", Sqrt;
    Root => "\u{221A}", r"\sqrt", Root;
    Frac => "/", r"\frac", Fraction;
    StackRel => "", r"\stackrel", Stack(Position::Over);
    OverSet => "", r"\overset", Stack(Position::Over);
    UnderSet => "", r"\underset", Stack(Position::Under);
    Color => "", r"\textcolor", Color;
    Sub => "_", "_", Subscript;
    Sup => "^", "^", Superscript;
}

/// The value of a symbol: either a predefined id, or a custom value registered by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum SymbolValue {
    Id(SymbolId),
    /// A value without predefined meaning; it is displayed verbatim as an operator.
    Custom(Box<str>),
}

impl SymbolValue {
    /// The text shown by the MathML and HTML back ends.
    #[inline]
    pub fn unicode(&self) -> &str {
        match self {
            SymbolValue::Id(id) => id.render().unicode,
            SymbolValue::Custom(value) => value,
        }
    }

    #[inline]
    pub fn class(&self) -> DisplayClass {
        match self {
            SymbolValue::Id(id) => id.render().class,
            SymbolValue::Custom(_) => DisplayClass::Operator,
        }
    }
}

impl From<SymbolId> for SymbolValue {
    #[inline]
    fn from(id: SymbolId) -> Self {
        SymbolValue::Id(id)
    }
}

#[cfg(test)]
mod tests {
    use std::str::FromStr;

    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn names_round_trip() {
        for id in SymbolId::iter() {
            let name: &'static str = id.into();
            assert_eq!(SymbolId::from_str(name), Ok(id), "{name}");
        }
    }

    #[test]
    fn snake_case_names() {
        assert_eq!(<&str>::from(SymbolId::BigWedge), "big_wedge");
        assert_eq!(SymbolId::from_str("times"), Ok(SymbolId::Times));
    }

    #[test]
    fn wraps_refer_to_fences() {
        for id in SymbolId::iter() {
            if let DisplayClass::Wrap(left, right) = id.render().class {
                assert_eq!(left.render().class, DisplayClass::Operator, "{id:?}");
                assert_eq!(right.render().class, DisplayClass::Operator, "{id:?}");
            }
        }
    }

    #[test]
    fn custom_values_are_operators() {
        let value = SymbolValue::Custom("⊕".into());
        assert_eq!(value.unicode(), "⊕");
        assert_eq!(value.class(), DisplayClass::Operator);
    }
}
