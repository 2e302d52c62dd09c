/*
 *  face/mod.rs
 *
 *  LyMonS - worth the squeeze
 *  (c) 2020-26 Stuart Hunter
 *
 *  Clock face: style, geometry and the command renderer
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

pub mod color;
pub mod command;
pub mod geometry;
pub mod metrics;
pub mod renderer;
pub mod style;

// Re-exports for convenience
pub use color::{Color, Paint, ParseColorError};
pub use command::{CircleStyle, DrawCommand, TextAlign};
pub use geometry::{Geometry, Padding, measure_square};
pub use metrics::{FontMetrics, MonoFontMetrics, VerticalMetrics};
pub use renderer::{NeedleAngles, render};
pub use style::{DisplayMode, FaceStyle};
