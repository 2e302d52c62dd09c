/*
 *  ticker/cooperative.rs
 *
 *  LyMonS - worth the squeeze
 *  (c) 2020-26 Stuart Hunter
 *
 *  Ticker backend as a self-rescheduling task on the host's runtime
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

use log::debug;
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tokio::time::{self, Instant, MissedTickBehavior};

use super::{RedrawHandle, Ticker, TickerKind};
use crate::error::ClockError;

/// Posts "redraw, then again one period later" onto the host's event queue.
///
/// `stop` aborts the task. On a current-thread runtime the tick and `stop`
/// never overlap, so nothing follows it; on a multi-thread runtime a tick
/// already past its await can still deliver one request.
pub struct CooperativeTicker {
    redraw: RedrawHandle,
    period: Duration,
    runtime: Handle,
    task: Option<JoinHandle<()>>,
}

impl CooperativeTicker {
    pub fn new(redraw: RedrawHandle, period: Duration, runtime: Handle) -> Self {
        Self { redraw, period, runtime, task: None }
    }
}

impl Ticker for CooperativeTicker {
    fn start(&mut self) -> Result<(), ClockError> {
        if self.is_active() {
            return Ok(());
        }
        let redraw = self.redraw.clone();
        let period = self.period;

        self.task = Some(self.runtime.spawn(async move {
            let mut interval = time::interval_at(Instant::now() + period, period);
            // a late tick is not followed by a catch-up burst
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                debug!("cooperative tick");
                redraw.request_redraw();
            }
        }));
        Ok(())
    }

    fn stop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }

    fn is_active(&self) -> bool {
        self.task.as_ref().is_some_and(|t| !t.is_finished())
    }

    fn kind(&self) -> TickerKind {
        TickerKind::Cooperative
    }
}

impl Drop for CooperativeTicker {
    fn drop(&mut self) {
        self.stop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticker::testing::RedrawCounter;

    const PERIOD: Duration = Duration::from_millis(1000);

    fn ticker() -> (std::sync::Arc<RedrawCounter>, CooperativeTicker) {
        let (counter, redraw) = RedrawCounter::handle();
        (counter, CooperativeTicker::new(redraw, PERIOD, Handle::current()))
    }

    #[tokio::test(start_paused = true)]
    async fn test_one_request_per_period() {
        let (counter, mut t) = ticker();
        t.start().unwrap();
        assert!(t.is_active());

        time::sleep(Duration::from_millis(999)).await;
        assert_eq!(counter.get(), 0);

        time::sleep(Duration::from_millis(2501)).await;
        assert_eq!(counter.get(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stop_silences() {
        let (counter, mut t) = ticker();
        t.start().unwrap();
        time::sleep(Duration::from_millis(2500)).await;
        t.stop();
        assert!(!t.is_active());
        let seen = counter.get();
        assert_eq!(seen, 2);

        time::sleep(Duration::from_secs(5)).await;
        assert_eq!(counter.get(), seen);
    }

    #[tokio::test(start_paused = true)]
    async fn test_focus_flicker_keeps_single_cadence() {
        let (counter, mut t) = ticker();
        for _ in 0..5 {
            t.start().unwrap();
            t.start().unwrap();
            t.stop();
        }
        t.stop();
        t.start().unwrap();
        time::sleep(Duration::from_millis(3500)).await;
        assert_eq!(counter.get(), 3);
        t.stop();
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 2)]
    async fn test_stop_on_worker_pool_leaves_at_most_one_straggler() {
        let (counter, redraw) = RedrawCounter::handle();
        let fast = Duration::from_millis(20);
        let mut t = CooperativeTicker::new(redraw, fast, Handle::current());
        t.start().unwrap();
        time::sleep(fast * 5).await;
        t.stop();
        let seen = counter.get();

        time::sleep(fast * 10).await;
        assert!(counter.get() <= seen + 1, "{} -> {}", seen, counter.get());
    }

    #[tokio::test(start_paused = true)]
    async fn test_late_tick_does_not_burst() {
        let (counter, mut t) = ticker();
        t.start().unwrap();
        time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(counter.get(), 1);

        // hog the runtime past several deadlines
        time::advance(Duration::from_secs(5)).await;
        let after_stall = counter.get();
        time::sleep(Duration::from_millis(10)).await;
        assert!(counter.get() - after_stall <= 1);
        t.stop();
    }
}
