/*
 *  lib.rs
 *
 *  LyMonS - worth the squeeze
 *  (c) 2020-26 Stuart Hunter
 *
 *  Analog/digital clock face widget
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

//! A clock face widget split in two: a ticker that asks the host for a
//! redraw once a second while focused, and a pure renderer that turns the
//! current time into draw commands for an analog dial or a digital readout.

pub mod config;
pub mod constants;
pub mod error;
pub mod face;
pub mod raster;
pub mod ticker;
pub mod time;
pub mod trig;
pub mod widget;

pub use error::ClockError;
pub use face::{Color, DisplayMode, DrawCommand, FaceStyle, FontMetrics, MonoFontMetrics, render};
pub use ticker::{RedrawHandle, RedrawRequest, Ticker, TickerKind};
pub use time::{ClockState, FixedClock, LocalClock, Meridiem, TimeSource};
pub use widget::ClockWidget;
