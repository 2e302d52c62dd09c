/*
 *  clockface-demo.rs
 *
 *  LyMonS - worth the squeeze
 *  (c) 2020-26 Stuart Hunter
 *
 *  Terminal host for the clock face widget
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

use anyhow::{Context, Result};
use embedded_graphics::pixelcolor::BinaryColor;
use env_logger::Env;
use log::{debug, info};
use std::fs::File;
use std::io::BufWriter;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::time::{Instant, timeout_at};

use lymons_clockface::config;
use lymons_clockface::raster::FrameBuf;
use lymons_clockface::ticker::RedrawHandle;
use lymons_clockface::widget::ClockWidget;

// the host's UI thread: one event queue, redraws run here
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let (cfg, cli) = config::load().context("loading configuration")?;

    if cli.dump_config {
        println!("{}", config::to_yaml(&cfg)?);
        return Ok(());
    }

    env_logger::Builder::from_env(Env::default().default_filter_or(cfg.level_filter().as_str()))
        .format_timestamp_millis()
        .init();

    info!("This {} worth the Squeeze", env!("CARGO_PKG_NAME"));
    info!("v.{}", env!("CARGO_PKG_VERSION"));

    let clock_cfg = cfg.clock_or_default();
    let (tx, mut rx) = mpsc::unbounded_channel::<()>();
    let redraw: RedrawHandle = Arc::new(move || {
        // a closed queue means the host is gone, nothing left to redraw
        let _ = tx.send(());
    });

    let mut widget = ClockWidget::from_config(&clock_cfg, redraw, None)
        .context("building clock widget")?;
    widget.on_attach();
    let size = widget.on_measure(clock_cfg.bounds());
    widget.on_size_changed(size);
    info!(
        "clock face {}x{} {} ticker={:?}",
        size.width,
        size.height,
        if widget.is_show_analog() { "analog" } else { "digital" },
        clock_cfg.ticker_kind()
    );

    let mut fb = FrameBuf::new(size.width, size.height, BinaryColor::Off);
    let mut frames = 0usize;
    render_frame(&widget, &mut fb, cli.pbm.as_deref(), frames)?;

    widget.on_focus_changed(true);
    let deadline = Instant::now() + Duration::from_secs(cli.seconds);
    while let Ok(Some(())) = timeout_at(deadline, rx.recv()).await {
        frames += 1;
        debug!("redraw request {}", frames);
        render_frame(&widget, &mut fb, cli.pbm.as_deref(), frames)?;
    }
    widget.on_focus_changed(false);
    widget.on_detach();

    info!("{} redraws in {}s", frames, cli.seconds);
    Ok(())
}

fn render_frame(
    widget: &ClockWidget,
    fb: &mut FrameBuf<BinaryColor>,
    pbm: Option<&std::path::Path>,
    frame: usize,
) -> Result<()> {
    fb.clear_color(BinaryColor::Off);
    // FrameBuf drawing is infallible
    let _ = widget.draw_to(fb);

    match pbm {
        Some(path) => {
            let f = File::create(path)
                .with_context(|| format!("creating {}", path.display()))?;
            fb.write_pbm(BufWriter::new(f))?;
            debug!("frame {} -> {}", frame, path.display());
        }
        None => {
            println!("{}", fb.to_text_art());
        }
    }
    Ok(())
}
