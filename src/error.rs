/*
 *  error.rs
 *
 *  LyMonS - worth the squeeze
 *  (c) 2020-26 Stuart Hunter
 *
 *  Error types for the clock face widget
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

use thiserror::Error;

/// Errors surfaced while wiring a clock widget up.
///
/// Ticking and rendering themselves never fail; a stopped ticker is not an error.
/// Loading configuration has its own `ConfigError`.
#[derive(Debug, Error)]
pub enum ClockError {
    /// Cooperative ticking posts onto a tokio runtime and none was given or current
    #[error("cooperative ticker needs a tokio runtime, none is current")]
    NoRuntime,

    /// The OS refused the ticker thread
    #[error("failed to spawn ticker thread: {0}")]
    ThreadSpawn(#[from] std::io::Error),
}
