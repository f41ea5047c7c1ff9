// Copyright (c) 2026 rezky_nightky

use std::io::{Result, Write};
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Instant;

use crate::config::Settings;
use crate::rain::Rain;
use crate::terminal::render_frame;

/// Drives the animation until `shutdown` is raised or the configured
/// duration runs out. `size` is asked for the screen dimensions before every
/// frame. The flag is only checked between frames, so a frame is never cut
/// in half. Returns the number of frames drawn.
pub fn run<W, S>(
    settings: Settings,
    out: &mut W,
    mut size: S,
    shutdown: &AtomicBool,
) -> Result<u64>
where
    W: Write,
    S: FnMut() -> (u16, u16),
{
    let (w, h) = size();
    let mut rain = Rain::new(settings.rain, w, h);
    log::info!(
        "rain started at {}x{}, frame delay {:?}",
        w,
        h,
        settings.frame_delay
    );

    let end_time = settings.duration.map(|d| Instant::now() + d);
    let mut frames: u64 = 0;

    while !shutdown.load(Ordering::Relaxed) {
        if end_time.is_some_and(|end| Instant::now() >= end) {
            log::info!("duration elapsed");
            break;
        }

        let (w, h) = size();
        let frame = rain.step(w, h);
        render_frame(out, frame)?;
        frames = frames.saturating_add(1);

        thread::sleep(settings.frame_delay);
    }

    Ok(frames)
}
