/*
 *  face/metrics.rs
 *
 *  LyMonS - worth the squeeze
 *  (c) 2020-26 Stuart Hunter
 *
 *  Font metrics supplied by the host surface
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

use embedded_graphics::mono_font::{
    MonoFont,
    ascii::{
        FONT_4X6, FONT_5X7, FONT_5X8, FONT_6X9, FONT_6X10, FONT_6X12, FONT_6X13, FONT_7X13,
        FONT_7X14, FONT_8X13, FONT_9X15, FONT_9X18, FONT_10X20,
    },
};

/// Vertical extent of a font at some size, measured from the baseline.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VerticalMetrics {
    /// Top of the glyph box; negative, it sits above the baseline
    pub ascent: f32,
    /// Bottom of the glyph box; positive
    pub descent: f32,
}

impl VerticalMetrics {
    pub fn height(&self) -> f32 {
        self.descent - self.ascent
    }

    /// Baseline that puts the glyph box's middle on `center_y`.
    pub fn centered_baseline(&self, center_y: i32) -> i32 {
        (center_y as f32 - (self.ascent + self.descent) / 2.0) as i32
    }
}

/// The text measuring half of the host's 2D API.
pub trait FontMetrics {
    fn vertical(&self, size: f32) -> VerticalMetrics;
    fn text_width(&self, text: &str, size: f32) -> f32;
}

// ascending by height, widest last within a height
const MONO_FONTS: [&MonoFont<'static>; 13] = [
    &FONT_4X6, &FONT_5X7, &FONT_5X8, &FONT_6X9, &FONT_6X10, &FONT_6X12, &FONT_6X13,
    &FONT_7X13, &FONT_8X13, &FONT_7X14, &FONT_9X15, &FONT_9X18, &FONT_10X20,
];

/// Biggest built-in mono font that fits in `size` pixels of height,
/// or the smallest one when nothing fits.
pub fn mono_font_for_size(size: f32) -> &'static MonoFont<'static> {
    let px = size.max(0.0) as u32;
    MONO_FONTS
        .iter()
        .rev()
        .find(|f| f.character_size.height <= px)
        .copied()
        .unwrap_or(&FONT_4X6)
}

/// Metrics of the fonts the raster painter actually draws with.
#[derive(Debug, Default, Clone, Copy)]
pub struct MonoFontMetrics;

impl FontMetrics for MonoFontMetrics {
    fn vertical(&self, size: f32) -> VerticalMetrics {
        let font = mono_font_for_size(size);
        let baseline = font.baseline as f32;
        VerticalMetrics {
            ascent: -baseline,
            descent: font.character_size.height as f32 - baseline,
        }
    }

    fn text_width(&self, text: &str, size: f32) -> f32 {
        let font = mono_font_for_size(size);
        let n = text.chars().count() as u32;
        if n == 0 {
            return 0.0;
        }
        (n * font.character_size.width + (n - 1) * font.character_spacing) as f32
    }
}
