/*
 *  widget.rs
 *
 *  LyMonS - worth the squeeze
 *  (c) 2020-26 Stuart Hunter
 *
 *  Clock widget - the piece a host view adapter delegates to
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

use embedded_graphics::prelude::*;
use log::{debug, info, warn};

use crate::config::ClockConfig;
use crate::constants::TICK_PERIOD;
use crate::error::ClockError;
use crate::face::{
    DisplayMode, DrawCommand, FaceStyle, FontMetrics, MonoFontMetrics, Padding, measure_square,
    render,
};
use crate::raster::{FacePixel, paint_commands};
use crate::ticker::{RedrawHandle, Ticker, TickerKind, build_ticker};
use crate::time::{LocalClock, TimeSource};

/// Analog/digital clock widget
///
/// Owns the style, the current bounds and the ticker. The host adapter
/// forwards its measure, draw and focus callbacks here and supplies the
/// redraw primitive the ticker calls once a second while focused.
pub struct ClockWidget {
    style: FaceStyle,
    bounds: Size,
    padding: Padding,
    attached: bool,
    ticker: Box<dyn Ticker>,
    redraw: RedrawHandle,
    clock: Box<dyn TimeSource>,
}

impl ClockWidget {
    /// Default style, ticking with the `kind` backend.
    ///
    /// The cooperative backend needs to be created inside a tokio runtime.
    pub fn new(kind: TickerKind, redraw: RedrawHandle) -> Result<Self, ClockError> {
        let ticker = build_ticker(kind, redraw.clone(), TICK_PERIOD, None)?;
        Ok(Self::with_ticker(ticker, redraw))
    }

    /// Use an already built ticker.
    pub fn with_ticker(ticker: Box<dyn Ticker>, redraw: RedrawHandle) -> Self {
        Self {
            style: FaceStyle::default(),
            bounds: Size::zero(),
            padding: Padding::default(),
            attached: false,
            ticker,
            redraw,
            clock: Box::new(LocalClock),
        }
    }

    /// Style, mode, padding and ticker backend all come from `cfg`.
    pub fn from_config(
        cfg: &ClockConfig,
        redraw: RedrawHandle,
        runtime: Option<tokio::runtime::Handle>,
    ) -> Result<Self, ClockError> {
        let ticker = build_ticker(cfg.ticker_kind(), redraw.clone(), TICK_PERIOD, runtime)?;
        let mut widget = Self::with_ticker(ticker, redraw);
        widget.style = cfg.face_style();
        widget.padding = cfg.padding.unwrap_or_default();
        Ok(widget)
    }

    /// Read time from `clock` instead of the system clock.
    pub fn with_time_source(mut self, clock: impl TimeSource + 'static) -> Self {
        self.clock = Box::new(clock);
        self
    }

    fn invalidate(&self) {
        self.redraw.request_redraw();
    }

    pub fn set_show_analog(&mut self, show_analog: bool) {
        let mode = if show_analog { DisplayMode::Analog } else { DisplayMode::Digital };
        if mode != self.style.mode {
            info!("clock face mode: {:?} -> {:?}", self.style.mode, mode);
        }
        self.style.mode = mode;
        self.invalidate();
    }

    pub fn is_show_analog(&self) -> bool {
        self.style.is_analog()
    }

    /// Replace the whole style, mode included, and redraw.
    pub fn set_face_style(&mut self, style: FaceStyle) {
        self.style = style;
        self.invalidate();
    }

    pub fn face_style(&self) -> &FaceStyle {
        &self.style
    }

    pub fn set_padding(&mut self, padding: Padding) {
        self.padding = padding;
    }

    pub fn padding(&self) -> Padding {
        self.padding
    }

    /// Focus gained starts the ticker, focus lost stops it before returning.
    pub fn on_focus_changed(&mut self, has_focus: bool) {
        if has_focus {
            debug!("focus changed: gained");
            if let Err(e) = self.ticker.start() {
                // a frozen face beats a dead host
                warn!("clock ticker failed to start: {}", e);
            }
        } else {
            debug!("focus changed: lost");
            self.ticker.stop();
        }
    }

    pub fn is_ticking(&self) -> bool {
        self.ticker.is_active()
    }

    /// Negotiate a square size out of the space on offer.
    pub fn on_measure(&self, available: Size) -> Size {
        measure_square(available, self.padding)
    }

    pub fn on_size_changed(&mut self, size: Size) {
        self.bounds = size;
    }

    pub fn bounds(&self) -> Size {
        self.bounds
    }

    pub fn on_attach(&mut self) {
        self.attached = true;
    }

    /// Leaving the window also silences the ticker.
    pub fn on_detach(&mut self) {
        self.attached = false;
        self.ticker.stop();
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    /// Sample the clock and build this frame's commands.
    pub fn draw(&self, metrics: &dyn FontMetrics) -> Vec<DrawCommand> {
        let now = self.clock.now();
        render(&now, self.bounds, &self.style, metrics)
    }

    /// Draw straight onto an embedded-graphics target with the built-in fonts.
    pub fn draw_to<D>(&self, target: &mut D) -> Result<(), D::Error>
    where
        D: DrawTarget,
        D::Color: FacePixel,
    {
        let commands = self.draw(&MonoFontMetrics);
        paint_commands(target, &commands)
    }
}

impl Drop for ClockWidget {
    fn drop(&mut self) {
        self.ticker.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::face::Color;
    use crate::ticker::testing::RedrawCounter;
    use crate::time::{ClockState, FixedClock};
    use embedded_graphics::pixelcolor::BinaryColor;
    use std::sync::Arc;
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    /// Ticker double recording calls.
    #[derive(Default)]
    struct ScriptedTicker {
        active: Arc<AtomicBool>,
        starts: Arc<AtomicUsize>,
        fail: bool,
    }

    impl Ticker for ScriptedTicker {
        fn start(&mut self) -> Result<(), ClockError> {
            self.starts.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(ClockError::NoRuntime);
            }
            self.active.store(true, Ordering::SeqCst);
            Ok(())
        }
        fn stop(&mut self) {
            self.active.store(false, Ordering::SeqCst);
        }
        fn is_active(&self) -> bool {
            self.active.load(Ordering::SeqCst)
        }
        fn kind(&self) -> TickerKind {
            TickerKind::Thread
        }
    }

    fn widget() -> (Arc<RedrawCounter>, Arc<AtomicBool>, ClockWidget) {
        let (counter, redraw) = RedrawCounter::handle();
        let ticker = ScriptedTicker::default();
        let active = ticker.active.clone();
        let w = ClockWidget::with_ticker(Box::new(ticker), redraw)
            .with_time_source(FixedClock(ClockState::from_hms(1, 5, 9)));
        (counter, active, w)
    }

    #[test]
    fn test_show_analog_toggle_redraws() {
        let (counter, _, mut w) = widget();
        assert!(w.is_show_analog());
        w.set_show_analog(false);
        assert!(!w.is_show_analog());
        assert_eq!(counter.get(), 1);
        w.set_show_analog(true);
        assert!(w.is_show_analog());
        assert_eq!(counter.get(), 2);
    }

    #[test]
    fn test_set_face_style_redraws() {
        let (counter, _, mut w) = widget();
        let style = FaceStyle { hours_needle: Color::Gray, ..FaceStyle::default() };
        w.set_face_style(style);
        assert_eq!(w.face_style().hours_needle, Color::Gray);
        assert_eq!(counter.get(), 1);
    }

    #[test]
    fn test_focus_drives_ticker() {
        let (_, active, mut w) = widget();
        w.on_focus_changed(true);
        assert!(active.load(Ordering::SeqCst));
        assert!(w.is_ticking());
        w.on_focus_changed(false);
        assert!(!w.is_ticking());
        w.on_focus_changed(false);
        assert!(!w.is_ticking());
    }

    #[test]
    fn test_ticker_failure_is_swallowed() {
        let (_, redraw) = RedrawCounter::handle();
        let ticker = ScriptedTicker { fail: true, ..Default::default() };
        let starts = ticker.starts.clone();
        let mut w = ClockWidget::with_ticker(Box::new(ticker), redraw);
        w.on_focus_changed(true);
        assert_eq!(starts.load(Ordering::SeqCst), 1);
        assert!(!w.is_ticking());
    }

    #[test]
    fn test_detach_and_drop_stop_ticker() {
        let (_, active, mut w) = widget();
        w.on_attach();
        assert!(w.is_attached());
        w.on_focus_changed(true);
        w.on_detach();
        assert!(!w.is_attached());
        assert!(!active.load(Ordering::SeqCst));

        w.on_focus_changed(true);
        drop(w);
        assert!(!active.load(Ordering::SeqCst));
    }

    #[test]
    fn test_measure_uses_padding() {
        let (_, _, mut w) = widget();
        w.set_padding(Padding { left: 2, top: 4, right: 2, bottom: 4 });
        assert_eq!(w.on_measure(Size::new(100, 60)), Size::new(56, 60));
    }

    #[test]
    fn test_draw_reads_time_source() {
        let (_, _, mut w) = widget();
        w.on_size_changed(Size::new(200, 200));
        w.set_show_analog(false);
        let cmds = w.draw(&MonoFontMetrics);
        let text: String = cmds
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(text, "01:05:09AM");
    }

    #[test]
    fn test_draw_without_size_is_empty() {
        let (_, _, w) = widget();
        assert!(w.draw(&MonoFontMetrics).is_empty());
    }

    #[test]
    fn test_draw_to_framebuffer() {
        let (_, _, mut w) = widget();
        w.on_size_changed(Size::new(64, 64));
        let mut fb = crate::raster::FrameBuf::new(64, 64, BinaryColor::Off);
        w.draw_to(&mut fb).unwrap();
        assert!(fb.count(BinaryColor::On) > 0);
    }
}
