use asciimath_core::{
    AsciiMathConfig, Converter, GrammarClass, MathDisplay, PrettyPrint, TableError,
};

fn from_toml(source: &str) -> AsciiMathConfig {
    toml::from_str(source).unwrap()
}

#[test]
fn full_config() {
    let config = from_toml(
        r##"
pretty-print = "auto"
xml-namespace = true

[[symbols]]
spellings = ["cross"]
id = "times"

[[symbols]]
spellings = ["xor"]
value = "⊻"

[[symbols]]
spellings = ["fracc"]
id = "frac"
class = "binary"

[colors]
brand = "#336699"
"##,
    );
    assert!(matches!(config.pretty_print, PrettyPrint::Auto));
    assert!(config.xml_namespace);
    assert!(!config.annotation);
    assert_eq!(config.symbols.len(), 3);
    assert_eq!(config.symbols[0].class, GrammarClass::Symbol);
    assert_eq!(config.symbols[2].class, GrammarClass::Binary);
    assert_eq!(
        config.colors,
        vec![("brand".to_string(), "#336699".to_string())]
    );

    let converter = Converter::new(config).unwrap();
    assert_eq!(
        converter.to_mathml("a cross b", MathDisplay::Inline),
        "<math xmlns=\"http://www.w3.org/1998/Math/MathML\"><mi>a</mi><mo>&#xD7;</mo><mi>b</mi></math>"
    );
    assert_eq!(converter.to_latex("fracc 1 2"), r"\frac{1}{2}");
    assert_eq!(converter.to_latex("p xor q"), r#"p \char"22BB{} q"#);
    assert_eq!(
        converter.to_latex("color(Brand)(x)"),
        r"\textcolor[RGB]{51,102,153}{x}"
    );
}

#[test]
fn empty_config() {
    let config = from_toml("");
    assert!(matches!(config.pretty_print, PrettyPrint::Never));
    assert!(config.symbols.is_empty());
    assert!(config.colors.is_empty());

    let converter = Converter::new(config).unwrap();
    assert_eq!(converter.symbols().len(), asciimath_core::SymbolTable::default_table().len());
}

#[test]
fn annotation_from_config() {
    let config = from_toml("annotation = true");
    let converter = Converter::new(config).unwrap();
    assert_eq!(
        converter.to_mathml("", MathDisplay::Inline),
        "<math><semantics><mrow></mrow><annotation encoding=\"text/x-asciimath\"></annotation></semantics></math>"
    );
}

#[test]
fn invalid_entries() {
    let problems = [
        (
            "no_spelling",
            "[[symbols]]\nvalue = \"!\"",
            (TableError::NoSpelling, 0),
        ),
        (
            "empty_spelling",
            "[[symbols]]\nspellings = [\"\"]\nvalue = \"!\"",
            (TableError::EmptySpelling, 0),
        ),
        (
            "overwrite",
            "[[symbols]]\nspellings = [\"ok\"]\nvalue = \"!\"\n\n[[symbols]]\nspellings = [\"sin\"]\nid = \"cos\"",
            (TableError::DuplicateSpelling("sin".to_string()), 1),
        ),
        (
            "unknown_id",
            "[[symbols]]\nspellings = [\"foo\"]\nid = \"foo\"",
            (TableError::UnknownSymbolId("foo".to_string()), 0),
        ),
        (
            "missing_value",
            "[[symbols]]\nspellings = [\"foo\"]",
            (TableError::MissingValue, 0),
        ),
        (
            "bad_color",
            "[colors]\nok = \"#fff\"\nbad = \"#12345\"",
            (TableError::InvalidColor("#12345".to_string()), 1),
        ),
    ];

    for (name, source, expected) in problems.into_iter() {
        let result = Converter::new(from_toml(source));
        assert_eq!(result.err(), Some(expected), "{name}");
    }
}

#[test]
fn unknown_class_is_rejected() {
    let result: Result<AsciiMathConfig, _> =
        toml::from_str("[[symbols]]\nspellings = [\"x\"]\nvalue = \"x\"\nclass = \"ternary\"");
    assert!(result.is_err());
}
