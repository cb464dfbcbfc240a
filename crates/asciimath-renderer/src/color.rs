#[cfg(feature = "serde")]
use serde::Serialize;

use crate::itoa::append_u8_as_hex;

/// A color given by its red, green and blue components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Rgb { r, g, b }
    }

    /// Append the color in the form `#RRGGBB`.
    pub fn append_as_hex(&self, output: &mut String) {
        output.push('#');
        append_u8_as_hex(output, self.r);
        append_u8_as_hex(output, self.g);
        append_u8_as_hex(output, self.b);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_output() {
        let mut output = String::new();
        Rgb::new(17, 34, 51).append_as_hex(&mut output);
        assert_eq!(output, "#112233");
    }

    #[test]
    fn hex_output_extremes() {
        let mut output = String::new();
        Rgb::new(255, 0, 171).append_as_hex(&mut output);
        assert_eq!(output, "#FF00AB");
    }
}
