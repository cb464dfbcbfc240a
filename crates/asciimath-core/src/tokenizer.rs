use crate::symbol_table::SymbolTable;
use crate::token::Token;

/// Splits the input into tokens, one at a time.
///
/// A single token can be pushed back, to be returned again by the next call to
/// [`next_token`](Tokenizer::next_token).
pub(crate) struct Tokenizer<'source, 'table> {
    input: &'source str,
    /// Byte offset of the next character.
    pos: usize,
    symbols: &'table SymbolTable,
    pushback: Option<Token<'source, 'table>>,
}

impl<'source, 'table> Tokenizer<'source, 'table> {
    pub(crate) fn new(input: &'source str, symbols: &'table SymbolTable) -> Self {
        Tokenizer {
            input,
            pos: 0,
            symbols,
            pushback: None,
        }
    }

    /// Unread `token`.
    ///
    /// Only one token can be pushed back at a time. `Eof` is not stored, since the tokenizer
    /// keeps returning it anyway.
    pub(crate) fn push_back(&mut self, token: Token<'source, 'table>) {
        debug_assert!(self.pushback.is_none(), "pushback slot is occupied");
        if !matches!(token, Token::Eof) {
            self.pushback = Some(token);
        }
    }

    pub(crate) fn next_token(&mut self) -> Token<'source, 'table> {
        if let Some(token) = self.pushback.take() {
            return token;
        }
        self.skip_whitespace();
        let rest = self.rest();
        let Some(first) = rest.chars().next() else {
            return Token::Eof;
        };
        if first == '"' {
            return Token::Text(self.read_delimited(1, '"'));
        }
        if rest.starts_with("text(") {
            return Token::Text(self.read_delimited("text(".len(), ')'));
        }
        if (first.is_ascii_digit() || first == '-')
            && let Some(number) = self.read_number()
        {
            return Token::Number(number);
        }
        self.read_symbol()
    }

    #[inline]
    fn rest(&self) -> &'source str {
        self.input.get(self.pos..).unwrap_or_default()
    }

    fn skip_whitespace(&mut self) {
        let rest = self.rest();
        self.pos += rest.len() - rest.trim_start().len();
    }

    /// Read up to and including `close`, skipping `open_len` bytes of opening delimiter.
    ///
    /// Returns the content between the delimiters. Without a closing delimiter, everything up
    /// to the end of the input is content.
    fn read_delimited(&mut self, open_len: usize, close: char) -> &'source str {
        let rest = self.rest();
        let content = rest.get(open_len..).unwrap_or_default();
        match content.find(close) {
            Some(end) => {
                self.pos += open_len + end + close.len_utf8();
                content.get(..end).unwrap_or_default()
            }
            None => {
                self.pos = self.input.len();
                content
            }
        }
    }

    /// Read `-?[0-9]+(\.[0-9]+)?`.
    fn read_number(&mut self) -> Option<&'source str> {
        let rest = self.rest();
        let bytes = rest.as_bytes();
        let digits = |from: usize| {
            bytes
                .get(from..)
                .map_or(0, |b| b.iter().take_while(|b| b.is_ascii_digit()).count())
        };
        let sign = usize::from(bytes.first() == Some(&b'-'));
        let integer = digits(sign);
        if integer == 0 {
            return None;
        }
        let mut len = sign + integer;
        if bytes.get(len) == Some(&b'.') {
            let fraction = digits(len + 1);
            if fraction > 0 {
                len += 1 + fraction;
            }
        }
        self.pos += len;
        rest.get(..len)
    }

    /// Find the longest spelling in the symbol table that starts here.
    fn read_symbol(&mut self) -> Token<'source, 'table> {
        let rest = self.rest();
        let ends = unit_ends(rest, self.symbols.longest_spelling_length().max(1));
        for (i, &end) in ends.iter().enumerate().rev() {
            let candidate = rest.get(..end).unwrap_or_default();
            if let Some(descriptor) = self.symbols.lookup(candidate) {
                self.pos += end;
                return Token::Symbol {
                    text: candidate,
                    descriptor,
                };
            }
            if i == 0 {
                self.pos += end;
                return Token::Identifier(candidate);
            }
        }
        // There is no unit here; this only happens for a digit that failed to be a number.
        let len = rest.chars().next().map_or(rest.len(), char::len_utf8);
        self.pos += len;
        Token::Identifier(rest.get(..len).unwrap_or_default())
    }
}

/// The byte offsets at which each of the first `max_units` units of `s` ends.
///
/// A unit is a backslash followed by whitespace or a digit, or a single character that is
/// neither whitespace nor a digit.
fn unit_ends(s: &str, max_units: usize) -> Vec<usize> {
    let mut ends = Vec::with_capacity(max_units);
    let mut chars = s.char_indices().peekable();
    while ends.len() < max_units {
        let Some((idx, ch)) = chars.next() else {
            break;
        };
        if ch.is_whitespace() || ch.is_ascii_digit() {
            break;
        }
        let mut end = idx + ch.len_utf8();
        if ch == '\\'
            && let Some(&(next_idx, next)) = chars.peek()
            && (next.is_whitespace() || next.is_ascii_digit())
        {
            end = next_idx + next.len_utf8();
            chars.next();
        }
        ends.push(end);
    }
    ends
}
