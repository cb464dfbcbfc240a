pub fn append_u8_as_hex(output: &mut String, b: u8) {
    output.push(digit_to_hex_ascii(b >> 4));
    output.push(digit_to_hex_ascii(b & 0x0F));
}

/// Append `&#x...;` for the given character.
pub fn append_char_ref(output: &mut String, ch: char) {
    output.push_str("&#x");
    append_u32_as_hex(output, ch as u32);
    output.push(';');
}

/// Append the hexadecimal digits of `n`, without leading zeros.
pub fn append_u32_as_hex(output: &mut String, n: u32) {
    if n == 0 {
        output.push('0');
        return;
    }
    let mut shift = (u32::BITS - n.leading_zeros()).div_ceil(4) * 4;
    while shift > 0 {
        shift -= 4;
        output.push(digit_to_hex_ascii(((n >> shift) & 0x0F) as u8));
    }
}

#[inline]
fn digit_to_hex_ascii(digit: u8) -> char {
    match digit {
        0..=9 => (digit + b'0') as char,
        _ => (digit - 10 + b'A') as char,
    }
}
