/*
 *  time.rs
 *
 *  LyMonS - worth the squeeze
 *  (c) 2020-26 Stuart Hunter
 *
 *  Wall-clock sampling for the clock face
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

use chrono::{Local, NaiveTime, Timelike};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Meridiem {
    Am,
    Pm,
}

impl Meridiem {
    pub fn as_str(&self) -> &'static str {
        match self {
            Meridiem::Am => "AM",
            Meridiem::Pm => "PM",
        }
    }
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Time of day as the face shows it, sampled fresh for every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClockState {
    /// 0..=11, noon and midnight are both 0
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    pub meridiem: Meridiem,
}

impl ClockState {
    /// Build from any chrono time value.
    pub fn from_time<T: Timelike>(t: &T) -> Self {
        let (is_pm, hour12) = t.hour12();
        Self {
            hour: hour12 % 12,
            minute: t.minute(),
            second: t.second(),
            meridiem: if is_pm { Meridiem::Pm } else { Meridiem::Am },
        }
    }

    /// Convenience for 24h wall-clock values; out of range parts wrap.
    pub fn from_hms(hour24: u32, minute: u32, second: u32) -> Self {
        let t = NaiveTime::from_hms_opt(hour24 % 24, minute % 60, second % 60)
            .unwrap_or(NaiveTime::MIN);
        Self::from_time(&t)
    }

    /// `HH:MM:SS` without the suffix.
    pub fn digits(&self) -> String {
        format!("{:02}:{:02}:{:02}", self.hour, self.minute, self.second)
    }
}

impl fmt::Display for ClockState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.digits(), self.meridiem)
    }
}

/// Where the widget reads "now" from.
pub trait TimeSource: Send {
    fn now(&self) -> ClockState;
}

/// System clock in the local timezone.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalClock;

impl TimeSource for LocalClock {
    fn now(&self) -> ClockState {
        ClockState::from_time(&Local::now())
    }
}

/// Always answers the same instant; for hosts that drive time themselves.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub ClockState);

impl TimeSource for FixedClock {
    fn now(&self) -> ClockState {
        self.0
    }
}
