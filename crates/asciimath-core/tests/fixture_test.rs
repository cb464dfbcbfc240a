use insta::assert_snapshot;

use asciimath_core::renderer::escape::escape_html_content;
use asciimath_core::renderer::symbol::DisplayClass;
use asciimath_core::{GrammarClass, MathDisplay, SymbolTable, parse};

#[test]
fn mathml_and_latex() {
    let problems = [
        ("empty", "", "", ""),
        ("identifier", "x", "<mi>x</mi>", "x"),
        ("decimal", "3.14", "<mn>3.14</mn>", "3.14"),
        ("negative", "-1", "<mn>-1</mn>", "-1"),
        (
            "minus",
            "- 1",
            "<mo>&#x2212;</mo><mn>1</mn>",
            "- 1",
        ),
        (
            "negative_exponent",
            "x^-2",
            "<msup><mi>x</mi><mn>-2</mn></msup>",
            "x^{-2}",
        ),
        (
            "relation",
            "x<y",
            "<mi>x</mi><mo>&lt;</mo><mi>y</mi>",
            "x < y",
        ),
        (
            "greek",
            "alpha xx beta",
            "<mi>&#x3B1;</mi><mo>&#xD7;</mo><mi>&#x3B2;</mi>",
            r"\alpha \times \beta",
        ),
        ("sqrt", "sqrt x", "<msqrt><mi>x</mi></msqrt>", r"\sqrt{x}"),
        (
            "root",
            "root(3)(x)",
            "<mroot><mi>x</mi><mn>3</mn></mroot>",
            r"\sqrt[3]{x}",
        ),
        (
            "frac_command",
            "frac{a}{b}",
            "<mfrac><mi>a</mi><mi>b</mi></mfrac>",
            r"\frac{a}{b}",
        ),
        (
            "frac_slash",
            "(a+b)/2",
            "<mfrac><mrow><mi>a</mi><mo>+</mo><mi>b</mi></mrow><mn>2</mn></mfrac>",
            r"\frac{a + b}{2}",
        ),
        (
            "abs",
            "abs(x)",
            "<mrow><mo>|</mo><mi>x</mi><mo>|</mo></mrow>",
            r"\left| x \right|",
        ),
        (
            "accent",
            "hat x",
            "<mover accent=\"true\"><mi>x</mi><mo>^</mo></mover>",
            r"\hat{x}",
        ),
        (
            "font",
            "bb A",
            "<mstyle mathvariant=\"bold\"><mi>A</mi></mstyle>",
            r"\mathbf{A}",
        ),
        (
            "text",
            "text(hi there)",
            "<mtext>hi there</mtext>",
            r"\text{hi there}",
        ),
        (
            "sum",
            "sum_(i=1)^n i",
            "<munderover><mo>&#x2211;</mo><mrow><mi>i</mi><mo>=</mo><mn>1</mn></mrow><mi>n</mi></munderover><mi>i</mi>",
            r"\sum_{i = 1}^n i",
        ),
        (
            "scripts",
            "z_12^34",
            "<msubsup><mi>z</mi><mn>12</mn><mn>34</mn></msubsup>",
            "z_{12}^{34}",
        ),
        (
            "matrix",
            "((1,2),(3,4))",
            "<mrow><mo>(</mo><mtable><mtr><mtd><mn>1</mn></mtd><mtd><mn>2</mn></mtd></mtr><mtr><mtd><mn>3</mn></mtd><mtd><mn>4</mn></mtd></mtr></mtable><mo>)</mo></mrow>",
            r"\left( \begin{matrix} 1 & 2 \\ 3 & 4 \end{matrix} \right)",
        ),
        (
            "color",
            "color(red)(x)",
            "<mstyle mathcolor=\"#FF0000\"><mi>x</mi></mstyle>",
            r"\textcolor[RGB]{255,0,0}{x}",
        ),
    ];

    for (name, source, mathml, latex) in problems.into_iter() {
        let expression = parse(source);
        assert_eq!(
            expression.to_mathml(MathDisplay::Inline),
            format!("<math>{mathml}</math>"),
            "MathML of {name}"
        );
        assert_eq!(expression.to_latex(), latex, "LaTeX of {name}");
    }
}

#[test]
fn html_fraction() {
    let html = parse("(a+b)/2").to_html(MathDisplay::Inline);
    assert_snapshot!(html, @r#"<span class="math-inline"><span class="math-fraction"><span class="math-numerator"><span class="math-row"><span class="math-identifier">a</span><span class="math-operator">+</span><span class="math-identifier">b</span></span></span><span class="math-denominator"><span class="math-number">2</span></span></span></span>"#);
}

#[test]
fn html_large_operator() {
    let html = parse("sum_i^n").to_html(MathDisplay::Block);
    assert_snapshot!(html, @r#"<div class="math-block"><span class="math-underover"><span class="math-over"><span class="math-identifier">n</span></span><span class="math-base"><span class="math-operator math-large">&#x2211;</span></span><span class="math-under"><span class="math-identifier">i</span></span></span></div>"#);
}

#[test]
fn non_ascii_is_escaped() {
    let expression = parse("\"é\"");
    assert_eq!(
        expression.to_mathml(MathDisplay::Inline),
        "<math><mtext>&#xE9;</mtext></math>"
    );
    assert_eq!(expression.to_latex(), r#"\text{\char"E9{}}"#);
}

#[test]
fn unclosed_brackets() {
    let expression = parse("(x");
    assert_snapshot!(expression.to_mathml(MathDisplay::Inline), @"<math><mrow><mo>(</mo><mi>x</mi></mrow></math>");
    assert_snapshot!(expression.to_latex(), @r"\left( x \right.");
}

#[test]
fn every_symbol_renders_its_display_text() {
    for (spelling, descriptor) in SymbolTable::default_table().iter() {
        if descriptor.class != GrammarClass::Symbol {
            continue;
        }
        let Some(id) = descriptor.id() else {
            panic!("{spelling:?} has no id");
        };
        let render = id.render();
        let mut escaped = String::new();
        escape_html_content(&mut escaped, render.unicode);
        let leaf = format!(">{escaped}</");

        let expression = parse(spelling);
        let mathml = expression.to_mathml(MathDisplay::Inline);
        if let DisplayClass::Space(width) = render.class {
            assert_eq!(
                mathml,
                format!("<math><mspace width=\"{width}\"/></math>"),
                "{spelling:?}"
            );
        } else {
            assert!(mathml.contains(&leaf), "{spelling:?}: {mathml}");
        }
        let html = expression.to_html(MathDisplay::Inline);
        assert!(html.contains(&leaf), "{spelling:?}: {html}");
        assert_eq!(expression.to_latex(), render.latex, "{spelling:?}");
    }
}
