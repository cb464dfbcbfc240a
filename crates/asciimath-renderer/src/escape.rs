use crate::itoa::{append_char_ref, append_u32_as_hex};

/// Escapes `input` for inclusion in HTML or MathML content.
///
/// `&`, `<` and `>` become named entities and every non-ASCII character becomes a numeric
/// character reference such as `&#x3B1;`, so the output is pure ASCII.
///
/// Pure ASCII input is scanned with `memchr`.
pub fn escape_html_content(output: &mut String, input: &str) {
    if !input.is_ascii() {
        for ch in input.chars() {
            match ch {
                '&' => output.push_str("&amp;"),
                '<' => output.push_str("&lt;"),
                '>' => output.push_str("&gt;"),
                ch if ch.is_ascii() => output.push(ch),
                ch => append_char_ref(output, ch),
            }
        }
        return;
    }

    let mut haystack = input;
    while let Some(index) = memchr::memchr3(b'&', b'<', b'>', haystack.as_bytes()) {
        // The special characters are ASCII, so `index` and `index + 1` are char boundaries.
        let (before, after) = haystack.split_at(index);
        output.push_str(before);
        match after.as_bytes()[0] {
            b'&' => output.push_str("&amp;"),
            b'<' => output.push_str("&lt;"),
            _ => output.push_str("&gt;"),
        }
        haystack = &after[1..];
    }
    output.push_str(haystack);
}

/// Escapes `input` for inclusion in LaTeX source.
///
/// Characters with a special meaning in LaTeX are escaped with a backslash or replaced by the
/// equivalent command. Non-ASCII characters are written as `\char"3B1{}`.
pub fn escape_latex(output: &mut String, input: &str) {
    for ch in input.chars() {
        match ch {
            '#' | '$' | '%' | '&' | '_' | '{' | '}' => {
                output.push('\\');
                output.push(ch);
            }
            '\\' => output.push_str(r"\backslash{}"),
            '^' => output.push_str(r"\^{}"),
            '~' => output.push_str(r"\~{}"),
            ch if ch.is_ascii() => output.push(ch),
            ch => {
                output.push_str("\\char\"");
                append_u32_as_hex(output, ch as u32);
                output.push_str("{}");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn html(input: &str) -> String {
        let mut output = String::new();
        escape_html_content(&mut output, input);
        output
    }

    fn latex(input: &str) -> String {
        let mut output = String::new();
        escape_latex(&mut output, input);
        output
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(html(""), "");
    }

    #[test]
    fn test_no_special_characters() {
        assert_eq!(html("Hello, World!"), "Hello, World!");
    }

    #[test]
    fn test_escape_ampersand() {
        assert_eq!(html("Tom & Jerry"), "Tom &amp; Jerry");
    }

    #[test]
    fn test_escape_angle_brackets() {
        assert_eq!(html("a<b>c"), "a&lt;b&gt;c");
        assert_eq!(html("<<>>"), "&lt;&lt;&gt;&gt;");
    }

    #[test]
    fn test_special_at_end() {
        assert_eq!(html("x>"), "x&gt;");
    }

    #[test]
    fn test_non_ascii() {
        assert_eq!(html("\u{3B1}"), "&#x3B1;");
        assert_eq!(html("a \u{2264} b & c"), "a &#x2264; b &amp; c");
        assert_eq!(html("\u{1D538}"), "&#x1D538;");
    }

    #[test]
    fn test_latex_specials() {
        assert_eq!(latex("a_b"), r"a\_b");
        assert_eq!(latex("50%"), r"50\%");
        assert_eq!(latex("{x}"), r"\{x\}");
        assert_eq!(latex(r"a\b"), r"a\backslash{}b");
        assert_eq!(latex("x^y"), r"x\^{}y");
    }

    #[test]
    fn test_latex_non_ascii() {
        assert_eq!(latex("\u{3B1}"), "\\char\"3B1{}");
    }
}
