const INDENT: &str = "    ";

/// Start a new line at the given indentation level.
///
/// Level 0 means that pretty printing is off, so nothing is written.
pub fn new_line_and_indent(s: &mut String, indent_num: usize) {
    if indent_num > 0 {
        s.push('\n');
    }
    for _ in 0..indent_num {
        s.push_str(INDENT);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_zero_writes_nothing() {
        let mut s = String::from("<math>");
        new_line_and_indent(&mut s, 0);
        assert_eq!(s, "<math>");
    }

    #[test]
    fn indents_per_level() {
        let mut s = String::new();
        new_line_and_indent(&mut s, 2);
        assert_eq!(s, "\n        ");
    }
}
