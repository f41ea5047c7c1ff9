// Copyright (c) 2026 rezky_nightky

mod cell;
mod charset;
mod column;
mod config;
mod frame;
mod palette;
mod rain;
mod runtime;
mod terminal;

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;

#[cfg(unix)]
use signal_hook::consts::{SIGHUP, SIGINT, SIGTERM};

use crate::config::{print_info, print_list_colors, Args, Startup, VERSION_LINE};
use crate::terminal::{current_size, restore_terminal_best_effort, Terminal};

/// Interrupts only raise the flag; the frame loop notices it between frames
/// and the terminal is restored on the normal exit path.
fn install_shutdown_handler(flag: &Arc<AtomicBool>) -> anyhow::Result<()> {
    #[cfg(unix)]
    {
        for sig in [SIGINT, SIGTERM, SIGHUP] {
            signal_hook::flag::register(sig, Arc::clone(flag))
                .with_context(|| format!("failed to install handler for signal {}", sig))?;
        }
    }

    #[cfg(windows)]
    {
        let flag = Arc::clone(flag);
        ctrlc::set_handler(move || {
            flag.store(true, std::sync::atomic::Ordering::Relaxed);
        })
        .context("failed to install Ctrl-C handler")?;
    }

    Ok(())
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();
    let settings = match args.startup().map_err(anyhow::Error::msg)? {
        Startup::Version => {
            println!("{}", VERSION_LINE);
            return Ok(());
        }
        Startup::Info => {
            print_info();
            return Ok(());
        }
        Startup::ListColors => {
            print_list_colors();
            return Ok(());
        }
        Startup::Run(settings) => settings,
    };

    let shutdown = Arc::new(AtomicBool::new(false));
    install_shutdown_handler(&shutdown)?;

    std::panic::set_hook(Box::new(|info| {
        restore_terminal_best_effort();
        eprintln!("{}", info);
    }));

    let mut term = Terminal::new().context("failed to set up terminal")?;
    let frames = runtime::run(settings, &mut term, current_size, &shutdown)
        .context("failed to draw frame")?;
    drop(term);

    log::info!("stopped after {} frames", frames);
    Ok(())
}
