/*
 *  face/command.rs
 *
 *  LyMonS - worth the squeeze
 *  (c) 2020-26 Stuart Hunter
 *
 *  Drawing commands emitted by the face renderer
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

use embedded_graphics::prelude::Point;

use super::color::Paint;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CircleStyle {
    Fill,
    Stroke { width: f32 },
}

/// Horizontal anchor of a text run relative to its origin
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Left,
    Center,
}

/// One primitive for the host surface, in paint order.
///
/// Coordinates are whole pixels relative to the widget's top-left; lengths
/// that the host scales (stroke widths, radii, text size) stay fractional.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// Stroked with round caps at both ends.
    Line {
        start: Point,
        end: Point,
        stroke_width: f32,
        paint: Paint,
    },
    Circle {
        center: Point,
        radius: f32,
        style: CircleStyle,
        paint: Paint,
    },
    /// `origin.y` is the alphabetic baseline.
    Text {
        text: String,
        origin: Point,
        size: f32,
        align: TextAlign,
        paint: Paint,
    },
}

impl DrawCommand {
    pub fn paint(&self) -> Paint {
        match self {
            DrawCommand::Line { paint, .. }
            | DrawCommand::Circle { paint, .. }
            | DrawCommand::Text { paint, .. } => *paint,
        }
    }

    pub fn is_line(&self) -> bool {
        matches!(self, DrawCommand::Line { .. })
    }

    pub fn is_text(&self) -> bool {
        matches!(self, DrawCommand::Text { .. })
    }
}
