/*
 *  raster/painter.rs
 *
 *  LyMonS - worth the squeeze
 *  (c) 2020-26 Stuart Hunter
 *
 *  Executes face draw commands on any embedded-graphics target
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

use embedded_graphics::{
    mono_font::MonoTextStyle,
    pixelcolor::{BinaryColor, Gray4, Rgb888},
    prelude::*,
    primitives::{Circle, Line, PrimitiveStyle, PrimitiveStyleBuilder},
    text::{Alignment, Baseline, Text, TextStyleBuilder},
};

use crate::face::color::{Color, Paint};
use crate::face::command::{CircleStyle, DrawCommand, TextAlign};
use crate::face::metrics::mono_font_for_size;

/// Pixel formats the face knows how to produce.
pub trait FacePixel: PixelColor {
    fn from_face_color(color: Color) -> Self;

    /// Faded paints are composited over a black face.
    fn from_paint(paint: Paint) -> Self {
        Self::from_face_color(paint.over_black())
    }
}

impl FacePixel for BinaryColor {
    fn from_face_color(color: Color) -> Self {
        color.to_binary()
    }
}

impl FacePixel for Gray4 {
    fn from_face_color(color: Color) -> Self {
        color.to_gray4()
    }
}

impl FacePixel for Rgb888 {
    fn from_face_color(color: Color) -> Self {
        color.to_rgb888()
    }
}

#[inline]
fn whole_px(len: f32) -> u32 {
    (len.round() as u32).max(1)
}

/// Paint `commands` in order; later commands overdraw earlier ones.
pub fn paint_commands<D>(target: &mut D, commands: &[DrawCommand]) -> Result<(), D::Error>
where
    D: DrawTarget,
    D::Color: FacePixel,
{
    for cmd in commands {
        paint_command(target, cmd)?;
    }
    Ok(())
}

pub fn paint_command<D>(target: &mut D, cmd: &DrawCommand) -> Result<(), D::Error>
where
    D: DrawTarget,
    D::Color: FacePixel,
{
    match cmd {
        DrawCommand::Line { start, end, stroke_width, paint } => {
            let color = D::Color::from_paint(*paint);
            let width = whole_px(*stroke_width);
            Line::new(*start, *end)
                .into_styled(PrimitiveStyle::with_stroke(color, width))
                .draw(target)?;
            // embedded-graphics lines end square, dot the ends for round caps
            if width > 2 {
                let dot = PrimitiveStyle::with_fill(color);
                Circle::with_center(*start, width).into_styled(dot).draw(target)?;
                Circle::with_center(*end, width).into_styled(dot).draw(target)?;
            }
        }
        DrawCommand::Circle { center, radius, style, paint } => {
            let color = D::Color::from_paint(*paint);
            let diameter = whole_px(radius * 2.0);
            let style = match style {
                CircleStyle::Fill => PrimitiveStyle::with_fill(color),
                CircleStyle::Stroke { width } => PrimitiveStyleBuilder::new()
                    .stroke_color(color)
                    .stroke_width(whole_px(*width))
                    .build(),
            };
            Circle::with_center(*center, diameter).into_styled(style).draw(target)?;
        }
        DrawCommand::Text { text, origin, size, align, paint } => {
            let character_style =
                MonoTextStyle::new(mono_font_for_size(*size), D::Color::from_paint(*paint));
            let text_style = TextStyleBuilder::new()
                .alignment(match align {
                    TextAlign::Left => Alignment::Left,
                    TextAlign::Center => Alignment::Center,
                })
                .baseline(Baseline::Alphabetic)
                .build();
            Text::with_text_style(text, *origin, character_style, text_style).draw(target)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::{FaceStyle, MonoFontMetrics, render, style::DisplayMode};
    use crate::raster::FrameBuf;
    use crate::time::ClockState;

    #[test]
    fn test_face_pixel_conversions() {
        assert_eq!(BinaryColor::from_face_color(Color::White), BinaryColor::On);
        assert_eq!(Gray4::from_face_color(Color::Black), Gray4::new(0));
        assert_eq!(Rgb888::from_face_color(Color::Rgb(1, 2, 3)), Rgb888::new(1, 2, 3));
        assert_eq!(
            Rgb888::from_paint(Color::White.with_alpha(140)),
            Rgb888::new(140, 140, 140)
        );
    }

    #[test]
    fn test_paint_line_and_hub() {
        let mut fb = FrameBuf::new(50, 50, BinaryColor::Off);
        let cmds = [
            DrawCommand::Line {
                start: Point::new(5, 5),
                end: Point::new(5, 20),
                stroke_width: 1.0,
                paint: Paint::opaque(Color::White),
            },
            DrawCommand::Circle {
                center: Point::new(30, 30),
                radius: 4.0,
                style: CircleStyle::Fill,
                paint: Paint::opaque(Color::White),
            },
        ];
        paint_commands(&mut fb, &cmds).unwrap();
        assert_eq!(fb.pixel(Point::new(5, 12)), Some(BinaryColor::On));
        assert_eq!(fb.pixel(Point::new(30, 30)), Some(BinaryColor::On));
        assert_eq!(fb.pixel(Point::new(0, 0)), Some(BinaryColor::Off));
    }

    #[test]
    fn test_thick_lines_get_round_ends() {
        let mut fb = FrameBuf::new(40, 20, BinaryColor::Off);
        let line = DrawCommand::Line {
            start: Point::new(10, 10),
            end: Point::new(30, 10),
            stroke_width: 5.0,
            paint: Paint::opaque(Color::White),
        };
        paint_command(&mut fb, &line).unwrap();
        // past both endpoints, only the end dots reach here
        assert_eq!(fb.pixel(Point::new(31, 10)), Some(BinaryColor::On));
        assert_eq!(fb.pixel(Point::new(9, 10)), Some(BinaryColor::On));
        assert_eq!(fb.pixel(Point::new(35, 10)), Some(BinaryColor::Off));
    }

    #[test]
    fn test_paint_analog_face() {
        let state = ClockState::from_hms(0, 0, 0);
        let cmds = render(&state, Size::new(128, 128), &FaceStyle::default(), &MonoFontMetrics);
        let mut fb = FrameBuf::new(128, 128, BinaryColor::Off);
        paint_commands(&mut fb, &cmds).unwrap();

        assert!(fb.count(BinaryColor::On) > 200);
        // all needles point up from the hub
        assert_eq!(fb.pixel(Point::new(64, 50)), Some(BinaryColor::On));
        // below the hub is empty
        assert_eq!(fb.pixel(Point::new(64, 80)), Some(BinaryColor::Off));
        // the 3 o'clock tick
        assert_eq!(fb.pixel(Point::new(124, 64)), Some(BinaryColor::On));
    }

    #[test]
    fn test_paint_digital_face_gray() {
        let style = FaceStyle { mode: DisplayMode::Digital, ..FaceStyle::default() };
        let state = ClockState::from_hms(10, 30, 0);
        let cmds = render(&state, Size::new(256, 256), &style, &MonoFontMetrics);
        let mut fb = FrameBuf::new(256, 256, Gray4::new(0));
        paint_commands(&mut fb, &cmds).unwrap();
        let lit = fb.as_slice().iter().filter(|p| **p != Gray4::new(0)).count();
        assert!(lit > 50);
        // text stays in the middle band
        for y in [0, 10, 245, 255] {
            for x in 0..256 {
                assert_eq!(fb.pixel(Point::new(x, y)), Some(Gray4::new(0)));
            }
        }
    }
}
