/*
 *  trig.rs
 *
 *  LyMonS - worth the squeeze
 *	(c) 2020-26 Stuart Hunter
 *
 *	Dial projection helpers
 *
 *	This program is free software: you can redistribute it and/or modify
 *	it under the terms of the GNU General Public License as published by
 *	the Free Software Foundation, either version 3 of the License, or
 *	(at your option) any later version.
 *
 *	This program is distributed in the hope that it will be useful,
 *	but WITHOUT ANY WARRANTY; without even the implied warranty of
 *	MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
 *	GNU General Public License for more details.
 *
 *	See <http://www.gnu.org/licenses/> to get a copy of the GNU General
 *	Public License.
 *
 */
//! Polar to screen projection for the dial.
//!
//! Angles are degrees, counter-clockwise from 3 o'clock, the way a maths
//! textbook draws them. Screen Y grows downwards so the sine term is
//! subtracted. Results are truncated toward zero, never rounded.

use embedded_graphics::prelude::Point;

pub const DEG_TO_RAD: f64 = core::f64::consts::PI / 180.0;

#[inline]
pub fn to_radians(degrees: f64) -> f64 {
    degrees * DEG_TO_RAD
}

/// Project `(angle_deg, radius)` around `center` onto pixel space.
#[inline]
pub fn polar_point(center: Point, radius: i32, angle_deg: f64) -> Point {
    let theta = to_radians(angle_deg);
    let r = radius as f64;
    let x = (center.x as f64 + r * theta.cos()) as i32;
    let y = (center.y as f64 - r * theta.sin()) as i32;
    Point::new(x, y)
}

/// Dial angle of a needle or label sitting at `steps` of `step_deg` past 12 o'clock.
#[inline]
pub fn dial_angle(steps: i32, step_deg: i32) -> i32 {
    crate::constants::RIGHT_ANGLE - steps * step_deg
}
