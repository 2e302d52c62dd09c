//! This module contains the constants that shape the clock face and its ticker.
//!
//! Lengths are fractions of the face side so the face scales with the widget.

use std::time::Duration;

/// Degrees in a full turn of the dial.
pub const FULL_ANGLE: i32 = 360;
/// Angle between two neighbouring degree ticks (one minute/second).
pub const TICK_STEP_DEG: i32 = 6;
/// Quarter turn; 12 o'clock sits here in screen-polar coordinates.
pub const RIGHT_ANGLE: i32 = 90;
/// Ticks on multiples of this are the five-minute marks.
pub const FIVE_MINUTE_DEG: i32 = 15;
/// Angle covered by one hour on the dial.
pub const HOUR_STEP_DEG: i32 = 30;

/// Alpha of minor degree ticks (~55%).
pub const CUSTOM_ALPHA: u8 = 140;
/// Alpha of major ticks and everything else.
pub const FULL_ALPHA: u8 = 255;

/// Base stroke width for ticks and needles.
pub const DEFAULT_DEGREE_STROKE_WIDTH: f32 = 0.010;
/// Minute needle stroke multiplier.
pub const MINUTE_NEEDLE_STROKE_FACTOR: f32 = 1.5;

// radial insets, measured inwards from the face edge
pub const TICK_OUTER_INSET: f32 = 0.01;
pub const TICK_INNER_INSET: f32 = 0.05;
pub const HOUR_VALUES_INSET: f32 = 0.12;
pub const SECOND_NEEDLE_INSET: f32 = 0.2;
pub const MINUTE_NEEDLE_INSET: f32 = 0.3;
pub const HOUR_NEEDLE_INSET: f32 = 0.4;

// center hub
pub const HUB_INNER_RADIUS: f32 = 0.01;
pub const HUB_OUTER_RADIUS: f32 = 0.012;
pub const HUB_OUTER_STROKE: f32 = 0.005;

/// Text size of the hour numerals.
pub const HOUR_VALUES_TEXT_SIZE: f32 = 0.1;
/// Text size of the digital readout.
pub const DIGITAL_TEXT_SIZE: f32 = 0.2;
/// Relative size of the AM/PM suffix in the digital readout.
pub const MERIDIEM_RELATIVE_SIZE: f32 = 0.3;

/// Redraw cadence of the ticker.
pub const TICK_PERIOD: Duration = Duration::from_millis(1000);
