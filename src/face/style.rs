/*
 *  face/style.rs
 *
 *  LyMonS - worth the squeeze
 *  (c) 2020-26 Stuart Hunter
 *
 *  Clock face style: colors and display mode
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

use super::color::Color;

/// What the face draws
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    /// Dial, numerals and needles
    #[default]
    Analog,
    /// HH:MM:SS text with a small AM/PM suffix
    Digital,
}

/// Colors for every part of the face plus the display mode
///
/// The hour needle has its own color and does not borrow the numeral color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaceStyle {
    pub center_inner: Color,
    pub center_outer: Color,
    pub seconds_needle: Color,
    pub minutes_needle: Color,
    pub hours_needle: Color,
    pub degrees: Color,
    pub hours_values: Color,
    pub numbers: Color,
    pub mode: DisplayMode,
}

impl Default for FaceStyle {
    fn default() -> Self {
        Self {
            center_inner: Color::SECONDARY,
            center_outer: Color::PRIMARY,
            seconds_needle: Color::SECONDARY,
            minutes_needle: Color::PRIMARY,
            hours_needle: Color::PRIMARY,
            degrees: Color::PRIMARY,
            hours_values: Color::PRIMARY,
            numbers: Color::White,
            mode: DisplayMode::Analog,
        }
    }
}

impl FaceStyle {
    pub fn is_analog(&self) -> bool {
        self.mode == DisplayMode::Analog
    }
}
