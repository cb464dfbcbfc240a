//! The predefined spellings.
//!
//! The spellings, grammar classes and ids listed here are part of the public interface: custom
//! tables derived from the default table and stored ASCIIMath sources depend on them.

use asciimath_renderer::symbol::SymbolId::{self, *};

use crate::symbol_table::{GrammarClass, OperandConversion};

pub(crate) struct Entry {
    pub spellings: &'static [&'static str],
    pub id: SymbolId,
    pub class: GrammarClass,
    pub conversions: [OperandConversion; 2],
}

const NO_CONVERSION: [OperandConversion; 2] = [OperandConversion::None; 2];

const fn entry(spellings: &'static [&'static str], id: SymbolId, class: GrammarClass) -> Entry {
    Entry {
        spellings,
        id,
        class,
        conversions: NO_CONVERSION,
    }
}

const fn symbol(spellings: &'static [&'static str], id: SymbolId) -> Entry {
    entry(spellings, id, GrammarClass::Symbol)
}

const fn unary(spellings: &'static [&'static str], id: SymbolId) -> Entry {
    entry(spellings, id, GrammarClass::Unary)
}

const fn binary(spellings: &'static [&'static str], id: SymbolId) -> Entry {
    entry(spellings, id, GrammarClass::Binary)
}

pub(crate) static SYMBOLS: &[Entry] = &[
    // Operation symbols
    symbol(&["+"], Plus),
    symbol(&["-"], Minus),
    symbol(&["*", "cdot"], Cdot),
    symbol(&["**", "ast"], Ast),
    symbol(&["***", "star"], Star),
    symbol(&["//"], Slash),
    symbol(&[r"\\", "backslash"], Backslash),
    symbol(&["setminus"], Setminus),
    symbol(&["xx", "times"], Times),
    symbol(&["|><", "ltimes"], Ltimes),
    symbol(&["><|", "rtimes"], Rtimes),
    symbol(&["|><|", "bowtie"], Bowtie),
    symbol(&["-:", "div", "divide"], Div),
    symbol(&["@", "circ"], Circ),
    symbol(&["o+", "oplus"], Oplus),
    symbol(&["ox", "otimes"], Otimes),
    symbol(&["o.", "odot"], Odot),
    symbol(&["sum"], Sum),
    symbol(&["prod"], Prod),
    symbol(&["^^", "wedge"], Wedge),
    symbol(&["^^^", "bigwedge"], BigWedge),
    symbol(&["vv", "vee"], Vee),
    symbol(&["vvv", "bigvee"], BigVee),
    symbol(&["nn", "cap"], Cap),
    symbol(&["nnn", "bigcap"], BigCap),
    symbol(&["uu", "cup"], Cup),
    symbol(&["uuu", "bigcup"], BigCup),
    // Relation symbols
    symbol(&["="], Equals),
    symbol(&["!=", "ne"], NotEquals),
    symbol(&["<", "lt"], LessThan),
    symbol(&[">", "gt"], GreaterThan),
    symbol(&["<=", "le", "leq"], LessEqual),
    symbol(&[">=", "ge", "geq"], GreaterEqual),
    symbol(&["mlt", "ll"], MuchLess),
    symbol(&["mgt", "gg"], MuchGreater),
    symbol(&["-<", "-lt", "prec"], Prec),
    symbol(&[">-", "succ"], Succ),
    symbol(&["-<=", "preceq"], PrecEq),
    symbol(&[">-=", "succeq"], SuccEq),
    symbol(&["in"], In),
    symbol(&["!in", "notin"], NotIn),
    symbol(&["sub", "subset"], Subset),
    symbol(&["sup", "supset"], Supset),
    symbol(&["sube", "subseteq"], SubsetEq),
    symbol(&["supe", "supseteq"], SupsetEq),
    symbol(&["-=", "equiv"], Equiv),
    symbol(&["~=", "cong"], Cong),
    symbol(&["~~", "approx"], Approx),
    symbol(&["~", "sim"], Sim),
    symbol(&["prop", "propto"], Propto),
    // Logical symbols
    symbol(&["and"], And),
    symbol(&["or"], Or),
    symbol(&["not", "neg"], Neg),
    symbol(&["=>", "implies"], Implies),
    symbol(&["if"], If),
    symbol(&["<=>", "iff"], Iff),
    symbol(&["AA", "forall"], ForAll),
    symbol(&["EE", "exists"], Exists),
    symbol(&["_|_", "bot"], Bot),
    symbol(&["TT", "top"], Top),
    symbol(&["|--", "vdash"], Vdash),
    symbol(&["|==", "models"], Models),
    // Grouping brackets
    entry(&["("], LeftParen, GrammarClass::LParen),
    entry(&[")"], RightParen, GrammarClass::RParen),
    entry(&["["], LeftBracket, GrammarClass::LParen),
    entry(&["]"], RightBracket, GrammarClass::RParen),
    entry(&["{"], LeftBrace, GrammarClass::LParen),
    entry(&["}"], RightBrace, GrammarClass::RParen),
    entry(&["(:", "<<", "langle"], LeftAngle, GrammarClass::LParen),
    entry(&[":)", ">>", "rangle"], RightAngle, GrammarClass::RParen),
    entry(&["{:"], LeftInvisible, GrammarClass::LParen),
    entry(&[":}"], RightInvisible, GrammarClass::RParen),
    entry(&["|"], VerticalBar, GrammarClass::LRParen),
    entry(&["||"], DoubleVerticalBar, GrammarClass::LRParen),
    // Miscellaneous symbols
    symbol(&["int"], Integral),
    symbol(&["oint"], ContourIntegral),
    symbol(&["del", "partial"], Partial),
    symbol(&["grad", "nabla"], Nabla),
    symbol(&["+-", "pm"], PlusMinus),
    symbol(&["-+", "mp"], MinusPlus),
    symbol(&["O/", "emptyset"], EmptySet),
    symbol(&["oo", "infty"], Infinity),
    symbol(&["aleph"], Aleph),
    symbol(&[":.", "therefore"], Therefore),
    symbol(&[":'", "because"], Because),
    symbol(&["...", "ldots"], Ellipsis),
    symbol(&["cdots"], CenterDots),
    symbol(&["vdots"], VerticalDots),
    symbol(&["ddots"], DiagonalDots),
    symbol(&[r"\ "], Space),
    symbol(&["quad"], Quad),
    symbol(&["qquad"], Qquad),
    symbol(&["/_", "angle"], Angle),
    symbol(&["frown"], Frown),
    symbol(&[r"/_\", "triangle"], Triangle),
    symbol(&["diamond"], Diamond),
    symbol(&["square"], Square),
    symbol(&["|__", "lfloor"], LeftFloor),
    symbol(&["__|", "rfloor"], RightFloor),
    symbol(&["|~", "lceiling"], LeftCeiling),
    symbol(&["~|", "rceiling"], RightCeiling),
    symbol(&["CC"], Complex),
    symbol(&["NN"], Naturals),
    symbol(&["QQ"], Rationals),
    symbol(&["RR"], Reals),
    symbol(&["ZZ"], Integers),
    symbol(&["'", "prime"], Prime),
    // Standard functions
    symbol(&["sin"], Sin),
    symbol(&["cos"], Cos),
    symbol(&["tan"], Tan),
    symbol(&["sec"], Sec),
    symbol(&["csc"], Csc),
    symbol(&["cot"], Cot),
    symbol(&["arcsin"], Arcsin),
    symbol(&["arccos"], Arccos),
    symbol(&["arctan"], Arctan),
    symbol(&["sinh"], Sinh),
    symbol(&["cosh"], Cosh),
    symbol(&["tanh"], Tanh),
    symbol(&["sech"], Sech),
    symbol(&["csch"], Csch),
    symbol(&["coth"], Coth),
    symbol(&["exp"], Exp),
    symbol(&["log"], Log),
    symbol(&["ln"], Ln),
    symbol(&["det"], Det),
    symbol(&["dim"], Dim),
    symbol(&["mod"], Mod),
    symbol(&["gcd"], Gcd),
    symbol(&["lcm"], Lcm),
    symbol(&["lub"], Lub),
    symbol(&["glb"], Glb),
    symbol(&["min"], Min),
    symbol(&["max"], Max),
    symbol(&["lim"], Lim),
    symbol(&["Lim"], CapitalLim),
    // Greek letters
    symbol(&["alpha"], Alpha),
    symbol(&["beta"], Beta),
    symbol(&["gamma"], Gamma),
    symbol(&["Gamma"], CapitalGamma),
    symbol(&["delta"], Delta),
    symbol(&["Delta"], CapitalDelta),
    symbol(&["epsilon"], Epsilon),
    symbol(&["varepsilon"], VarEpsilon),
    symbol(&["zeta"], Zeta),
    symbol(&["eta"], Eta),
    symbol(&["theta"], Theta),
    symbol(&["Theta"], CapitalTheta),
    symbol(&["vartheta"], VarTheta),
    symbol(&["iota"], Iota),
    symbol(&["kappa"], Kappa),
    symbol(&["lambda"], Lambda),
    symbol(&["Lambda"], CapitalLambda),
    symbol(&["mu"], Mu),
    symbol(&["nu"], Nu),
    symbol(&["xi"], Xi),
    symbol(&["Xi"], CapitalXi),
    symbol(&["pi"], Pi),
    symbol(&["Pi"], CapitalPi),
    symbol(&["rho"], Rho),
    symbol(&["sigma"], Sigma),
    symbol(&["Sigma"], CapitalSigma),
    symbol(&["tau"], Tau),
    symbol(&["upsilon"], Upsilon),
    symbol(&["phi"], Phi),
    symbol(&["Phi"], CapitalPhi),
    symbol(&["varphi"], VarPhi),
    symbol(&["chi"], Chi),
    symbol(&["psi"], Psi),
    symbol(&["Psi"], CapitalPsi),
    symbol(&["omega"], Omega),
    symbol(&["Omega"], CapitalOmega),
    // Arrows
    symbol(&["uarr", "uparrow"], UpArrow),
    symbol(&["darr", "downarrow"], DownArrow),
    symbol(&["rarr", "rightarrow"], RightArrow),
    symbol(&["->", "to"], To),
    symbol(&[">->", "rightarrowtail"], RightArrowTail),
    symbol(&["->>", "twoheadrightarrow"], TwoHeadRightArrow),
    symbol(&[">->>", "twoheadrightarrowtail"], TwoHeadRightArrowTail),
    symbol(&["|->", "mapsto"], MapsTo),
    symbol(&["larr", "leftarrow"], LeftArrow),
    symbol(&["harr", "leftrightarrow"], LeftRightArrow),
    symbol(&["rArr", "Rightarrow"], DoubleRightArrow),
    symbol(&["lArr", "Leftarrow"], DoubleLeftArrow),
    symbol(&["hArr", "Leftrightarrow"], DoubleLeftRightArrow),
    // Accents
    unary(&["hat"], Hat),
    unary(&["bar", "overline"], Bar),
    unary(&["ul", "underline"], Underline),
    unary(&["vec"], Vector),
    unary(&["tilde"], Tilde),
    unary(&["dot"], Dot),
    unary(&["ddot"], DoubleDot),
    unary(&["overarc", "overparen"], OverArc),
    unary(&["obrace", "overbrace"], OverBrace),
    unary(&["ubrace", "underbrace"], UnderBrace),
    unary(&["cancel"], Cancel),
    // Font commands
    unary(&["bb", "mathbf"], Bold),
    unary(&["bbb", "mathbb"], DoubleStruck),
    unary(&["cc", "mathcal"], Script),
    unary(&["tt", "mathtt"], Monospace),
    unary(&["fr", "mathfrak"], Fraktur),
    unary(&["sf", "mathsf"], SansSerif),
    // Operators with operands
    unary(&["abs"], Abs),
    unary(&["floor"], Floor),
    unary(&["ceil"], Ceil),
    unary(&["norm"], Norm),
    unary(&["sqrt"], Sqrt),
    binary(&["frac"], Frac),
    binary(&["root"], Root),
    binary(&["stackrel"], StackRel),
    binary(&["overset"], OverSet),
    binary(&["underset"], UnderSet),
    Entry {
        spellings: &["color"],
        id: Color,
        class: GrammarClass::Binary,
        conversions: [OperandConversion::ColorText, OperandConversion::None],
    },
    entry(&["/"], Frac, GrammarClass::Infix),
    entry(&["_"], Sub, GrammarClass::Infix),
    entry(&["^"], Sup, GrammarClass::Infix),
];

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashSet;

    use super::*;

    #[test]
    fn spellings_are_unique() {
        let mut seen = FxHashSet::default();
        for entry in SYMBOLS {
            for spelling in entry.spellings {
                assert!(seen.insert(*spelling), "duplicate spelling {spelling:?}");
            }
        }
    }

    #[test]
    fn no_spelling_contains_whitespace_except_space() {
        for entry in SYMBOLS {
            for spelling in entry.spellings {
                assert!(!spelling.is_empty());
                if *spelling != r"\ " {
                    assert!(!spelling.contains(char::is_whitespace), "{spelling:?}");
                }
            }
        }
    }

    #[test]
    fn symbols_do_not_start_with_a_digit() {
        for entry in SYMBOLS {
            for spelling in entry.spellings {
                assert!(
                    !spelling.starts_with(|c: char| c.is_ascii_digit()),
                    "{spelling:?}"
                );
            }
        }
    }
}
