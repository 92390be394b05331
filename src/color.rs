//! Stroke color parsing.

use std::fmt;
use std::str::FromStr;

use crate::error::MorphError;

/// An opaque RGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub const BLACK: Rgb = Rgb(0, 0, 0);
    pub const WHITE: Rgb = Rgb(255, 255, 255);

    /// Returns a CSS `rgb(r,g,b)` string.
    pub fn css(&self) -> String {
        let Rgb(r, g, b) = *self;
        format!("rgb({r},{g},{b})")
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }
}

impl FromStr for Rgb {
    type Err = MorphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_color(s).ok_or_else(|| MorphError::InvalidColor(s.to_string()))
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Rgb {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Rgb {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Names accepted by [`parse_color`], matched without regard to ASCII case.
const NAMED: &[(&str, Rgb)] = &[
    ("black", Rgb::BLACK),
    ("white", Rgb::WHITE),
    ("gray", Rgb(128, 128, 128)),
    ("grey", Rgb(128, 128, 128)),
    ("red", Rgb(255, 0, 0)),
    ("green", Rgb(0, 128, 0)),
    ("blue", Rgb(0, 0, 255)),
];

/// Parse a stroke color: `#rgb`, `#rrggbb`, or one of the names in
/// black, white, gray/grey, red, green and blue.
///
/// Surrounding whitespace is ignored.
///
/// ## Example
///
/// ```rust
/// use glyph_morph::{parse_color, Rgb};
///
/// assert_eq!(parse_color("#1a1a2e"), Some(Rgb(26, 26, 46)));
/// assert_eq!(parse_color("Grey"), Some(Rgb(128, 128, 128)));
/// ```
pub fn parse_color(s: &str) -> Option<Rgb> {
    let s = s.trim();
    match s.strip_prefix('#') {
        Some(hex) => parse_hex(hex),
        None => NAMED
            .iter()
            .find(|(name, _)| name.eq_ignore_ascii_case(s))
            .map(|&(_, rgb)| rgb),
    }
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    let nibbles = hex
        .chars()
        .map(|c| c.to_digit(16).map(|d| d as u8))
        .collect::<Option<Vec<u8>>>()?;

    match nibbles[..] {
        // Short form repeats each digit: #abc == #aabbcc
        [r, g, b] => Some(Rgb(r * 0x11, g * 0x11, b * 0x11)),
        [r1, r0, g1, g0, b1, b0] => Some(Rgb(r1 << 4 | r0, g1 << 4 | g0, b1 << 4 | b0)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn named_colors() {
        assert_eq!(parse_color("black"), Some(Rgb(0, 0, 0)));
        assert_eq!(parse_color("white"), Some(Rgb(255, 255, 255)));
        assert_eq!(parse_color("green"), Some(Rgb(0, 128, 0)));
        assert_eq!(parse_color("grey"), parse_color("gray"));
        // Only stroke-friendly names are recognized
        assert_eq!(parse_color("brown"), None);
    }

    #[test]
    fn named_colors_case_and_whitespace() {
        assert_eq!(parse_color("Black"), Some(Rgb::BLACK));
        assert_eq!(parse_color("\tWHITE\n"), Some(Rgb::WHITE));
    }

    #[test]
    fn hex_colors() {
        assert_eq!(parse_color("#FF0000"), Some(Rgb(255, 0, 0)));
        assert_eq!(parse_color("#f6f6f6"), Some(Rgb(246, 246, 246)));
        assert_eq!(parse_color("#abc"), Some(Rgb(170, 187, 204)));
        assert_eq!(parse_color(" #fff "), Some(Rgb::WHITE));
        assert_eq!(parse_color("#0F0"), Some(Rgb(0, 255, 0)));
    }

    #[test]
    fn invalid_colors() {
        for input in ["", "notacolor", "#", "#zz", "#12345", "#ééé", "# fff", "#+1+2+3"] {
            assert_eq!(parse_color(input), None, "{input:?}");
        }
    }

    #[test]
    fn from_str_reports_input() {
        assert_eq!("red".parse::<Rgb>(), Ok(Rgb(255, 0, 0)));
        assert_eq!(
            "mauve".parse::<Rgb>(),
            Err(MorphError::InvalidColor("mauve".into()))
        );
    }

    #[test]
    fn display_and_css() {
        let c = Rgb(26, 26, 46);
        assert_eq!(c.to_string(), "#1a1a2e");
        assert_eq!(c.css(), "rgb(26,26,46)");
    }
}
