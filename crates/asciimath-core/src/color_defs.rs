use rustc_hash::{FxBuildHasher, FxHashMap};

use asciimath_renderer::color::Rgb;

use crate::error::TableError;

static COLORS: phf::Map<&'static str, Rgb> = phf::phf_map! {
    "aqua" => Rgb::new(0, 255, 255),
    "black" => Rgb::new(0, 0, 0),
    "blue" => Rgb::new(0, 0, 255),
    "fuchsia" => Rgb::new(255, 0, 255),
    "gray" => Rgb::new(128, 128, 128),
    "green" => Rgb::new(0, 128, 0),
    "lime" => Rgb::new(0, 255, 0),
    "maroon" => Rgb::new(128, 0, 0),
    "navy" => Rgb::new(0, 0, 128),
    "olive" => Rgb::new(128, 128, 0),
    "purple" => Rgb::new(128, 0, 128),
    "red" => Rgb::new(255, 0, 0),
    "silver" => Rgb::new(192, 192, 192),
    "teal" => Rgb::new(0, 128, 128),
    "white" => Rgb::new(255, 255, 255),
    "yellow" => Rgb::new(255, 255, 0),
};

static DEFAULT_TABLE: ColorTable = ColorTable {
    custom: FxHashMap::with_hasher(FxBuildHasher),
};

/// Color names understood by `color(...)`.
///
/// Lookups are case-insensitive. Colors added with [`ColorTable::with_color`] take precedence
/// over the predefined ones.
#[derive(Debug, Clone, Default)]
pub struct ColorTable {
    custom: FxHashMap<Box<str>, Rgb>,
}

impl ColorTable {
    /// The sixteen HTML 4 colors.
    #[inline]
    pub fn default_table() -> &'static ColorTable {
        &DEFAULT_TABLE
    }

    /// Add a color, or replace the color of that name.
    pub fn with_color(mut self, name: &str, rgb: Rgb) -> Self {
        self.custom.insert(name.to_ascii_lowercase().into(), rgb);
        self
    }

    /// Add a color given as `#RRGGBB` or `#RGB`.
    pub fn with_hex_color(self, name: &str, value: &str) -> Result<Self, TableError> {
        let rgb = parse_hex_color(value).ok_or_else(|| TableError::InvalidColor(value.into()))?;
        Ok(self.with_color(name, rgb))
    }

    pub fn lookup(&self, name: &str) -> Option<Rgb> {
        let name = name.to_ascii_lowercase();
        self.custom
            .get(name.as_str())
            .or_else(|| COLORS.get(name.as_str()))
            .copied()
    }

    /// Resolve the text of a color operand.
    ///
    /// `#RRGGBB` and `#RGB` are tried first, then the color names. Anything else is black.
    pub fn resolve(&self, text: &str) -> Rgb {
        parse_hex_color(text)
            .or_else(|| self.lookup(text))
            .unwrap_or(Rgb::BLACK)
    }
}

/// Parse `#RRGGBB`, or `#RGB` where each digit is doubled.
pub fn parse_hex_color(text: &str) -> Option<Rgb> {
    let digits = text.strip_prefix('#')?;
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }
    let component = |range: std::ops::Range<usize>| u8::from_str_radix(digits.get(range)?, 16).ok();
    match digits.len() {
        6 => Some(Rgb::new(component(0..2)?, component(2..4)?, component(4..6)?)),
        3 => {
            let (r, g, b) = (component(0..1)?, component(1..2)?, component(2..3)?);
            Some(Rgb::new(r * 17, g * 17, b * 17))
        }
        _ => None,
    }
}

static_assertions::assert_impl_all!(ColorTable: Send, Sync);
