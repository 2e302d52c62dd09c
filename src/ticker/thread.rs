/*
 *  ticker/thread.rs
 *
 *  LyMonS - worth the squeeze
 *  (c) 2020-26 Stuart Hunter
 *
 *  Ticker backend on a dedicated thread
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

use log::{debug, warn};
use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use super::{RedrawHandle, Ticker, TickerKind};
use crate::error::ClockError;

struct Worker {
    cancel: Sender<()>,
    join: JoinHandle<()>,
}

/// Sleeps a period, requests a redraw, repeats until told to stop.
///
/// The sleep is a timed wait on a cancel channel, so stopping wakes the
/// thread at once instead of after the current period.
pub struct ThreadTicker {
    redraw: RedrawHandle,
    period: Duration,
    worker: Option<Worker>,
}

impl ThreadTicker {
    pub fn new(redraw: RedrawHandle, period: Duration) -> Self {
        Self { redraw, period, worker: None }
    }
}

fn run(redraw: RedrawHandle, period: Duration, cancel: mpsc::Receiver<()>) {
    debug!("ticker thread: begin");
    loop {
        match cancel.recv_timeout(period) {
            Err(RecvTimeoutError::Timeout) => {
                debug!("ticker thread: once");
                redraw.request_redraw();
            }
            // an interrupt is a stop request, not an error
            Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
        }
    }
    debug!("ticker thread: end");
}

impl Ticker for ThreadTicker {
    fn start(&mut self) -> Result<(), ClockError> {
        if self.is_active() {
            return Ok(());
        }
        // a worker that died on its own is reaped before starting fresh
        self.stop();

        let (cancel, rx) = mpsc::channel();
        let redraw = self.redraw.clone();
        let period = self.period;
        let join = thread::Builder::new()
            .name("clockface-ticker".into())
            .spawn(move || run(redraw, period, rx))?;
        self.worker = Some(Worker { cancel, join });
        Ok(())
    }

    fn stop(&mut self) {
        let Some(worker) = self.worker.take() else {
            return;
        };
        let _ = worker.cancel.send(());
        // joining ourselves would deadlock if stop is reached from a redraw callback
        if worker.join.thread().id() == thread::current().id() {
            return;
        }
        if worker.join.join().is_err() {
            warn!("ticker thread panicked");
        }
    }

    fn is_active(&self) -> bool {
        self.worker.as_ref().is_some_and(|w| !w.join.is_finished())
    }

    fn kind(&self) -> TickerKind {
        TickerKind::Thread
    }
}

impl Drop for ThreadTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticker::testing::RedrawCounter;
    use std::time::Instant;

    const FAST: Duration = Duration::from_millis(40);

    #[test]
    fn test_ticks_and_stops() {
        let (counter, redraw) = RedrawCounter::handle();
        let mut ticker = ThreadTicker::new(redraw, FAST);
        ticker.start().unwrap();
        assert!(ticker.is_active());

        thread::sleep(FAST * 5);
        ticker.stop();
        assert!(!ticker.is_active());
        let seen = counter.get();
        assert!(seen >= 2, "only {seen} ticks");

        thread::sleep(FAST * 4);
        assert_eq!(counter.get(), seen);
    }

    #[test]
    fn test_no_tick_before_first_period() {
        let (counter, redraw) = RedrawCounter::handle();
        let mut ticker = ThreadTicker::new(redraw, Duration::from_millis(500));
        ticker.start().unwrap();
        thread::sleep(Duration::from_millis(50));
        ticker.stop();
        assert_eq!(counter.get(), 0);
    }

    #[test]
    fn test_stop_is_prompt() {
        let (_, redraw) = RedrawCounter::handle();
        let mut ticker = ThreadTicker::new(redraw, Duration::from_secs(30));
        ticker.start().unwrap();
        let t0 = Instant::now();
        ticker.stop();
        assert!(t0.elapsed() < Duration::from_secs(1));
    }

    #[test]
    fn test_double_stop_and_restart() {
        let (counter, redraw) = RedrawCounter::handle();
        let mut ticker = ThreadTicker::new(redraw, FAST);
        ticker.stop();
        ticker.stop();
        assert!(!ticker.is_active());

        ticker.start().unwrap();
        // starting twice keeps one cadence
        ticker.start().unwrap();
        thread::sleep(FAST * 5 + FAST / 2);
        ticker.stop();
        ticker.stop();
        // a doubled cadence would have produced ~10
        assert!(counter.get() <= 6, "{} ticks", counter.get());
    }

    #[test]
    fn test_drop_stops_thread() {
        let (counter, redraw) = RedrawCounter::handle();
        {
            let mut ticker = ThreadTicker::new(redraw, FAST);
            ticker.start().unwrap();
        }
        let after_drop = counter.get();
        thread::sleep(FAST * 3);
        assert_eq!(counter.get(), after_drop);
    }
}
