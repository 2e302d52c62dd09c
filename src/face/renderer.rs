/*
 *  face/renderer.rs
 *
 *  LyMonS - worth the squeeze
 *  (c) 2020-26 Stuart Hunter
 *
 *  Clock face renderer - time + bounds + style in, draw commands out
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

use embedded_graphics::prelude::{Point, Size};

use crate::constants::*;
use crate::time::ClockState;
use crate::trig::{dial_angle, polar_point};

use super::color::{Color, Paint};
use super::command::{CircleStyle, DrawCommand, TextAlign};
use super::geometry::Geometry;
use super::metrics::FontMetrics;
use super::style::{DisplayMode, FaceStyle};

/// Dial angles (degrees) of the three needles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NeedleAngles {
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
}

impl NeedleAngles {
    pub fn for_state(state: &ClockState) -> Self {
        Self {
            hour: dial_angle((state.hour % 12) as i32, HOUR_STEP_DEG),
            minute: dial_angle(state.minute as i32, TICK_STEP_DEG),
            second: dial_angle(state.second as i32, TICK_STEP_DEG),
        }
    }
}

/// Cardinal and five-minute ticks are drawn solid, the rest faded.
pub fn tick_alpha(angle_deg: i32) -> u8 {
    if angle_deg % RIGHT_ANGLE != 0 && angle_deg % FIVE_MINUTE_DEG != 0 {
        CUSTOM_ALPHA
    } else {
        FULL_ALPHA
    }
}

/// Dial angle of hour numeral `i` (1..=12).
pub fn numeral_angle(i: u32) -> i32 {
    dial_angle(i as i32, HOUR_STEP_DEG)
}

/// Produce the face for `state` inside `bounds`.
///
/// Pure apart from its inputs; the caller samples the clock.
pub fn render(
    state: &ClockState,
    bounds: Size,
    style: &FaceStyle,
    metrics: &dyn FontMetrics,
) -> Vec<DrawCommand> {
    let geo = Geometry::from_bounds(bounds);
    let mut out = Vec::with_capacity(80);
    if geo.side == 0 {
        return out;
    }

    match style.mode {
        DisplayMode::Analog => {
            draw_degrees(&mut out, &geo, style);
            draw_hours_values(&mut out, &geo, style, metrics);
            draw_needles(&mut out, &geo, style, state);
            draw_center(&mut out, &geo, style);
        }
        DisplayMode::Digital => draw_numbers(&mut out, &geo, style, state, metrics),
    }
    out
}

fn base_stroke(geo: &Geometry) -> f32 {
    geo.scaled(DEFAULT_DEGREE_STROKE_WIDTH)
}

fn draw_degrees(out: &mut Vec<DrawCommand>, geo: &Geometry, style: &FaceStyle) {
    let r_padded = geo.inset_radius(TICK_OUTER_INSET);
    let r_end = geo.inset_radius(TICK_INNER_INSET);
    let stroke_width = base_stroke(geo);

    for angle in (0..FULL_ANGLE).step_by(TICK_STEP_DEG as usize) {
        let a = angle as f64;
        out.push(DrawCommand::Line {
            start: polar_point(geo.center, r_padded, a),
            end: polar_point(geo.center, r_end, a),
            stroke_width,
            paint: style.degrees.with_alpha(tick_alpha(angle)),
        });
    }
}

fn draw_hours_values(
    out: &mut Vec<DrawCommand>,
    geo: &Geometry,
    style: &FaceStyle,
    metrics: &dyn FontMetrics,
) {
    let size = geo.scaled(HOUR_VALUES_TEXT_SIZE);
    let v = metrics.vertical(size);
    let radius = geo.inset_radius(HOUR_VALUES_INSET);

    for i in 1..=12u32 {
        let at = polar_point(geo.center, radius, numeral_angle(i) as f64);
        out.push(DrawCommand::Text {
            text: format!("{:02}", i),
            origin: Point::new(at.x, v.centered_baseline(at.y)),
            size,
            align: TextAlign::Center,
            paint: Paint::opaque(style.hours_values),
        });
    }
}

fn needle(geo: &Geometry, angle: i32, radius: i32, stroke_width: f32, color: Color) -> DrawCommand {
    DrawCommand::Line {
        start: geo.center,
        end: polar_point(geo.center, radius, angle as f64),
        stroke_width,
        paint: Paint::opaque(color),
    }
}

fn draw_needles(out: &mut Vec<DrawCommand>, geo: &Geometry, style: &FaceStyle, state: &ClockState) {
    let angles = NeedleAngles::for_state(state);
    let base = base_stroke(geo);
    let thick = MINUTE_NEEDLE_STROKE_FACTOR * base;

    out.push(needle(
        geo,
        angles.second,
        geo.inset_radius(SECOND_NEEDLE_INSET),
        base,
        style.seconds_needle,
    ));
    out.push(needle(
        geo,
        angles.minute,
        geo.inset_radius(MINUTE_NEEDLE_INSET),
        thick,
        style.minutes_needle,
    ));
    // hour needle keeps the minute needle's weight
    out.push(needle(
        geo,
        angles.hour,
        geo.inset_radius(HOUR_NEEDLE_INSET),
        thick,
        style.hours_needle,
    ));
}

fn draw_center(out: &mut Vec<DrawCommand>, geo: &Geometry, style: &FaceStyle) {
    out.push(DrawCommand::Circle {
        center: geo.center,
        radius: geo.scaled(HUB_INNER_RADIUS),
        style: CircleStyle::Fill,
        paint: Paint::opaque(style.center_inner),
    });
    out.push(DrawCommand::Circle {
        center: geo.center,
        radius: geo.scaled(HUB_OUTER_RADIUS),
        style: CircleStyle::Stroke { width: geo.scaled(HUB_OUTER_STROKE) },
        paint: Paint::opaque(style.center_outer),
    });
}

fn draw_numbers(
    out: &mut Vec<DrawCommand>,
    geo: &Geometry,
    style: &FaceStyle,
    state: &ClockState,
    metrics: &dyn FontMetrics,
) {
    let size = geo.scaled(DIGITAL_TEXT_SIZE);
    let suffix_size = size * MERIDIEM_RELATIVE_SIZE;
    let digits = state.digits();
    let suffix = state.meridiem.as_str();

    let digits_width = metrics.text_width(&digits, size);
    let block_width = digits_width + metrics.text_width(suffix, suffix_size);
    let v = metrics.vertical(size);

    let left = (geo.center.x as f32 - block_width / 2.0) as i32;
    let top = geo.center.y as f32 - v.height() / 2.0;
    let baseline = (top - v.ascent) as i32;
    let paint = Paint::opaque(style.numbers);

    out.push(DrawCommand::Text {
        text: digits,
        origin: Point::new(left, baseline),
        size,
        align: TextAlign::Left,
        paint,
    });
    // the suffix shares the baseline, smaller
    out.push(DrawCommand::Text {
        text: suffix.to_string(),
        origin: Point::new(left + digits_width as i32, baseline),
        size: suffix_size,
        align: TextAlign::Left,
        paint,
    });
}
