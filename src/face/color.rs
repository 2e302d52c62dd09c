/*
 *  face/color.rs
 *
 *  LyMonS - worth the squeeze
 *  (c) 2020-26 Stuart Hunter
 *
 *  Face colors that adapt to the target's pixel format
 *
 *  This program is free software: you can redistribute it and/or modify
 *  it under the terms of the GNU General Public License as published by
 *  the Free Software Foundation, either version 3 of the License, or
 *  (at your option) any later version.
 *
 *  This program is distributed in the hope that it will be useful,
 *  but WITHOUT ANY WARRANTY; without even the implied warranty of
 *  MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *  GNU General Public License for more details.
 *
 *  See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *  Public License.
 *
 */

use embedded_graphics::pixelcolor::{BinaryColor, Gray4, Rgb888, RgbColor};
use std::fmt;
use std::str::FromStr;

use crate::constants::FULL_ALPHA;

/// Universal color value
///
/// Defined once on the face style, converted to whatever the draw target
/// speaks when the commands are painted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Color {
    /// Black/Off (0% intensity)
    Black,

    /// Dark gray (0x44)
    DarkGray,

    /// Gray (0x88)
    Gray,

    /// Light gray (0xCC)
    LightGray,

    /// White/On (100% intensity)
    White,

    /// Custom grayscale value (0-255)
    Grayscale(u8),

    /// Full color
    Rgb(u8, u8, u8),
}

impl Color {
    pub fn to_rgb888(&self) -> Rgb888 {
        match self {
            Color::Black => Rgb888::new(0, 0, 0),
            Color::DarkGray => Rgb888::new(0x44, 0x44, 0x44),
            Color::Gray => Rgb888::new(0x88, 0x88, 0x88),
            Color::LightGray => Rgb888::new(0xcc, 0xcc, 0xcc),
            Color::White => Rgb888::new(0xff, 0xff, 0xff),
            Color::Grayscale(v) => Rgb888::new(*v, *v, *v),
            Color::Rgb(r, g, b) => Rgb888::new(*r, *g, *b),
        }
    }

    /// Get luminance value (0-255), Rec.601 weights for RGB
    pub fn luminance(&self) -> u8 {
        match self {
            Color::Black => 0,
            Color::DarkGray => 0x44,
            Color::Gray => 0x88,
            Color::LightGray => 0xcc,
            Color::White => 255,
            Color::Grayscale(val) => *val,
            Color::Rgb(r, g, b) => {
                ((*r as u32 * 299 + *g as u32 * 587 + *b as u32 * 114) / 1000) as u8
            }
        }
    }

    /// Convert to BinaryColor for monochrome targets
    pub fn to_binary(&self) -> BinaryColor {
        if self.luminance() >= 128 {
            BinaryColor::On
        } else {
            BinaryColor::Off
        }
    }

    /// Convert to Gray4 (4-bit grayscale: 0-15)
    pub fn to_gray4(&self) -> Gray4 {
        Gray4::new(((self.luminance() as u16 * 15) / 255) as u8)
    }

    /// This color with the given alpha
    pub fn with_alpha(self, alpha: u8) -> Paint {
        Paint { color: self, alpha }
    }
}

/// Common color presets
impl Color {
    pub const PRIMARY: Color = Color::White;
    pub const SECONDARY: Color = Color::LightGray;
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::Black => f.write_str("black"),
            Color::DarkGray => f.write_str("darkgray"),
            Color::Gray => f.write_str("gray"),
            Color::LightGray => f.write_str("lightgray"),
            Color::White => f.write_str("white"),
            Color::Grayscale(v) => write!(f, "gray({v})"),
            Color::Rgb(r, g, b) => write!(f, "#{r:02x}{g:02x}{b:02x}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognised color '{0}' (expected a name, gray(N) or #rrggbb)")]
pub struct ParseColorError(pub String);

impl FromStr for Color {
    type Err = ParseColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let t = s.trim().to_ascii_lowercase();
        let named = match t.as_str() {
            "black" => Some(Color::Black),
            "darkgray" | "darkgrey" | "dkgray" => Some(Color::DarkGray),
            "gray" | "grey" => Some(Color::Gray),
            "lightgray" | "lightgrey" | "ltgray" => Some(Color::LightGray),
            "white" => Some(Color::White),
            _ => None,
        };
        if let Some(c) = named {
            return Ok(c);
        }

        if let Some(hex) = t.strip_prefix('#') {
            if hex.len() == 6 && hex.is_ascii() {
                let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
                if let (Ok(r), Ok(g), Ok(b)) = (channel(0), channel(2), channel(4)) {
                    return Ok(Color::Rgb(r, g, b));
                }
            }
        } else if let Some(inner) = t.strip_prefix("gray(").and_then(|r| r.strip_suffix(')')) {
            if let Ok(v) = inner.trim().parse::<u8>() {
                return Ok(Color::Grayscale(v));
            }
        }
        Err(ParseColorError(s.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = ParseColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}

/// A color plus the alpha it is laid down with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paint {
    pub color: Color,
    pub alpha: u8,
}

impl Paint {
    pub fn opaque(color: Color) -> Self {
        Self { color, alpha: FULL_ALPHA }
    }

    pub fn is_opaque(&self) -> bool {
        self.alpha == FULL_ALPHA
    }

    /// Composite over a black face, which is what the painter targets assume.
    pub fn over_black(&self) -> Color {
        if self.is_opaque() {
            return self.color;
        }
        let scale = |v: u8| ((v as u16 * self.alpha as u16) / 255) as u8;
        let c = self.color.to_rgb888();
        match self.color {
            Color::Rgb(..) => Color::Rgb(scale(c.r()), scale(c.g()), scale(c.b())),
            _ => Color::Grayscale(scale(self.color.luminance())),
        }
    }
}

impl From<Color> for Paint {
    fn from(c: Color) -> Self {
        Paint::opaque(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_conversion() {
        assert_eq!(Color::Black.to_binary(), BinaryColor::Off);
        assert_eq!(Color::White.to_binary(), BinaryColor::On);
        assert_eq!(Color::Grayscale(64).to_binary(), BinaryColor::Off);
        assert_eq!(Color::Grayscale(192).to_binary(), BinaryColor::On);
    }

    #[test]
    fn test_gray4_conversion() {
        assert_eq!(Color::Black.to_gray4(), Gray4::new(0));
        assert_eq!(Color::White.to_gray4(), Gray4::new(15));
        assert_eq!(Color::LightGray.to_gray4(), Gray4::new(12));
    }

    #[test]
    fn test_parse_colors() {
        assert_eq!("white".parse::<Color>(), Ok(Color::White));
        assert_eq!(" LtGray ".parse::<Color>(), Ok(Color::LightGray));
        assert_eq!("#ff8000".parse::<Color>(), Ok(Color::Rgb(255, 128, 0)));
        assert_eq!("gray(42)".parse::<Color>(), Ok(Color::Grayscale(42)));
        assert!("#ff80".parse::<Color>().is_err());
        assert!("mauve".parse::<Color>().is_err());
        assert!("gray(300)".parse::<Color>().is_err());
    }

    #[test]
    fn test_display_parses_back() {
        for c in [Color::DarkGray, Color::Grayscale(7), Color::Rgb(1, 2, 3)] {
            assert_eq!(c.to_string().parse::<Color>(), Ok(c));
        }
    }

    #[test]
    fn test_minor_tick_alpha_on_black() {
        let faded = Color::White.with_alpha(140).over_black();
        assert_eq!(faded, Color::Grayscale(140));
        // still lit on a monochrome panel
        assert_eq!(faded.to_binary(), BinaryColor::On);
        assert_eq!(Paint::opaque(Color::Gray).over_black(), Color::Gray);
    }
}
