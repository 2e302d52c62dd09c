/*
 *  ticker/mod.rs
 *
 *  LyMonS - worth the squeeze
 *  (c) 2020-26 Stuart Hunter
 *
 *  Once-a-second redraw trigger with interchangeable backends
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

use std::sync::Arc;
use std::time::Duration;

use crate::error::ClockError;

pub mod cooperative;
pub mod thread;

pub use cooperative::CooperativeTicker;
pub use thread::ThreadTicker;

/// The host's "please redraw me" primitive.
///
/// Called from whatever context the ticker runs on; implementations only
/// post a request, the redraw itself happens on the host's UI thread.
pub trait RedrawRequest: Send + Sync {
    fn request_redraw(&self);
}

impl<F> RedrawRequest for F
where
    F: Fn() + Send + Sync,
{
    fn request_redraw(&self) {
        self()
    }
}

pub type RedrawHandle = Arc<dyn RedrawRequest>;

/// Which backend drives the once-a-second redraw
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default,
    serde::Serialize, serde::Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum TickerKind {
    /// Dedicated thread sleeping between requests
    Thread,
    /// Self-rescheduling task on the host's tokio runtime
    #[default]
    Cooperative,
}

/// A cancellable stream of redraw requests, one per period.
///
/// At most one stream is live per ticker: `start` on a running ticker and
/// `stop` on a stopped one are both no-ops.
pub trait Ticker: Send {
    fn start(&mut self) -> Result<(), ClockError>;

    /// Once this returns no further requests are issued, barring a single
    /// request that was already being delivered.
    fn stop(&mut self);

    fn is_active(&self) -> bool;

    fn kind(&self) -> TickerKind;
}

/// Build the backend for `kind`.
///
/// The cooperative backend posts onto `runtime`, or onto the current tokio
/// runtime when none is given.
pub fn build_ticker(
    kind: TickerKind,
    redraw: RedrawHandle,
    period: Duration,
    runtime: Option<tokio::runtime::Handle>,
) -> Result<Box<dyn Ticker>, ClockError> {
    match kind {
        TickerKind::Thread => Ok(Box::new(ThreadTicker::new(redraw, period))),
        TickerKind::Cooperative => {
            let handle = match runtime {
                Some(h) => h,
                None => tokio::runtime::Handle::try_current().map_err(|_| ClockError::NoRuntime)?,
            };
            Ok(Box::new(CooperativeTicker::new(redraw, period, handle)))
        }
    }
}


#[cfg(test)]
mod tests {
    use super::testing::RedrawCounter;
    use super::*;

    #[test]
    fn test_closure_is_a_redraw_request() {
        let hits = Arc::new(std::sync::atomic::AtomicUsize::new(0));
        let h = hits.clone();
        let redraw: RedrawHandle = Arc::new(move || {
            h.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
        });
        redraw.request_redraw();
        redraw.request_redraw();
        assert_eq!(hits.load(std::sync::atomic::Ordering::SeqCst), 2);
    }

    #[test]
    fn test_cooperative_without_runtime() {
        let (_, redraw) = RedrawCounter::handle();
        let res = build_ticker(TickerKind::Cooperative, redraw, Duration::from_secs(1), None);
        assert!(matches!(res, Err(ClockError::NoRuntime)));
    }

    #[test]
    fn test_build_thread_ticker() {
        let (_, redraw) = RedrawCounter::handle();
        let ticker = build_ticker(TickerKind::Thread, redraw, Duration::from_secs(1), None).unwrap();
        assert_eq!(ticker.kind(), TickerKind::Thread);
        assert!(!ticker.is_active());
    }

    #[tokio::test]
    async fn test_build_cooperative_inside_runtime() {
        let (_, redraw) = RedrawCounter::handle();
        let ticker =
            build_ticker(TickerKind::Cooperative, redraw, Duration::from_secs(1), None).unwrap();
        assert_eq!(ticker.kind(), TickerKind::Cooperative);
    }

    #[test]
    fn test_kind_names() {
        let k: TickerKind = serde_yaml::from_str("thread").unwrap();
        assert_eq!(k, TickerKind::Thread);
        assert_eq!(TickerKind::default(), TickerKind::Cooperative);
    }
}
