// Copyright (c) 2026 rezky_nightky

use std::io::IsTerminal;
use std::time::Duration;

use clap::builder::styling::{AnsiColor as ClapAnsiColor, Color as ClapColor};
use clap::builder::styling::{Effects as ClapEffects, Style as ClapStyle};
use clap::builder::Styles as ClapStyles;
use clap::{Parser, ValueEnum};

use crate::charset::printable_pool;
use crate::palette::ColorName;
use crate::rain::{RainConfig, DEFAULT_MAX_COLUMNS};

pub const VERSION_LINE: &str = concat!(
    "termrain terminal animation version ",
    env!("CARGO_PKG_VERSION")
);

/// One `-u` step is 1/40 s of frame delay.
const UPDATE_STEP_MS: u64 = 25;

pub fn color_enabled_stdout() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if matches!(std::env::var("CLICOLOR").ok().as_deref(), Some("0")) {
        return false;
    }
    std::io::stdout().is_terminal()
}

pub fn clap_styles() -> ClapStyles {
    ClapStyles::styled()
        .header(
            ClapStyle::new()
                .effects(ClapEffects::BOLD)
                .fg_color(Some(ClapColor::Ansi(ClapAnsiColor::Cyan))),
        )
        .usage(
            ClapStyle::new()
                .effects(ClapEffects::BOLD)
                .fg_color(Some(ClapColor::Ansi(ClapAnsiColor::Green))),
        )
        .literal(ClapStyle::new().fg_color(Some(ClapColor::Ansi(ClapAnsiColor::Yellow))))
        .placeholder(ClapStyle::new().fg_color(Some(ClapColor::Ansi(ClapAnsiColor::Magenta))))
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "termrain",
    about = "Digital rain in your terminal",
    disable_version_flag = true,
    styles = clap_styles()
)]
pub struct Args {
    #[arg(
        short = 'b',
        long = "bold",
        help_heading = "APPEARANCE",
        help = "Draw trail characters in bold"
    )]
    pub bold: bool,

    #[arg(
        short = 'C',
        long = "color",
        value_enum,
        default_value_t = ColorName::Green,
        help_heading = "APPEARANCE",
        help = "Trail color (see --list-colors)"
    )]
    pub color: ColorName,

    #[arg(
        short = 'r',
        long = "rainbow",
        help_heading = "APPEARANCE",
        help = "Pick a random color for every trail character"
    )]
    pub rainbow: bool,

    #[arg(
        short = 'u',
        long = "update",
        default_value_t = 4,
        value_parser = clap::value_parser!(u8).range(0..=10),
        help_heading = "PERFORMANCE",
        help = "Screen update delay (min 0 max 10), in 1/40 s steps"
    )]
    pub update: u8,

    #[arg(
        long = "max-columns",
        default_value_t = DEFAULT_MAX_COLUMNS as u16,
        value_parser = clap::value_parser!(u16).range(1..=1000),
        help_heading = "PERFORMANCE",
        help = "Max simultaneous columns (min 1 max 1000)"
    )]
    pub max_columns: u16,

    #[arg(
        long = "duration",
        allow_negative_numbers = true,
        help_heading = "GENERAL",
        help = "Stop after N seconds (min 0.1 max 86400; <=0 disables)"
    )]
    pub duration: Option<f64>,

    #[arg(
        long = "list-colors",
        help_heading = "HELP",
        help = "List available colors and exit"
    )]
    pub list_colors: bool,

    #[arg(
        long = "info",
        short = 'i',
        help_heading = "HELP",
        help = "Print version info and exit"
    )]
    pub info: bool,

    #[arg(
        long = "version",
        short = 'V',
        help_heading = "HELP",
        help = "Print version and exit"
    )]
    pub version: bool,
}

#[derive(Clone, Debug)]
pub struct Settings {
    pub frame_delay: Duration,
    pub duration: Option<Duration>,
    pub rain: RainConfig,
}

#[derive(Clone, Debug)]
pub enum Startup {
    Version,
    Info,
    ListColors,
    Run(Settings),
}

impl Args {
    /// What to do with these arguments. Only `Run` builds the animation.
    pub fn startup(&self) -> Result<Startup, String> {
        if self.version {
            return Ok(Startup::Version);
        }
        if self.info {
            return Ok(Startup::Info);
        }
        if self.list_colors {
            return Ok(Startup::ListColors);
        }

        let duration = match self.duration {
            None => None,
            Some(s) if !s.is_finite() => {
                return Err(format!(
                    "failed to apply --duration {} (must be a finite number)",
                    s
                ))
            }
            Some(s) if s <= 0.0 => None,
            Some(s) if !(0.1..=86400.0).contains(&s) => {
                return Err(format!(
                    "failed to apply --duration {} (min 0.1 max 86400)",
                    s
                ))
            }
            Some(s) => Some(Duration::from_secs_f64(s)),
        };

        Ok(Startup::Run(Settings {
            frame_delay: frame_delay(self.update),
            duration,
            rain: RainConfig {
                max_columns: self.max_columns as usize,
                bold: self.bold,
                rainbow: self.rainbow,
                base_color: self.color.color(),
                chars: printable_pool(),
            },
        }))
    }
}

pub fn frame_delay(update: u8) -> Duration {
    Duration::from_millis(update as u64 * UPDATE_STEP_MS)
}

pub fn print_info() {
    println!("Version: v{}", env!("CARGO_PKG_VERSION"));
    let sha = env!("TERMRAIN_GIT_SHA");
    if sha.is_empty() {
        println!("Build: {}", env!("TERMRAIN_BUILD"));
    } else {
        println!("Build: {} ({})", env!("TERMRAIN_BUILD"), sha);
    }
    println!("Copyright: (c) 2026 {}", env!("CARGO_PKG_AUTHORS"));
    println!("License: {}", env!("CARGO_PKG_LICENSE"));
    println!("Source: {}", env!("CARGO_PKG_REPOSITORY"));
}

pub fn print_list_colors() {
    if color_enabled_stdout() {
        println!("\x1b[1;36mAVAILABLE COLORS:\x1b[0m");
        println!("\x1b[2mNOTE: Use the VALUE with -C/--color.\x1b[0m");
    } else {
        println!("AVAILABLE COLORS:");
        println!("NOTE: Use the VALUE with -C/--color.");
    }
    println!();
    println!("VALUE");
    for name in ColorName::value_variants() {
        if *name == ColorName::Green {
            println!("{:<12} (default)", name.label());
        } else {
            println!("{}", name.label());
        }
    }
}

#[cfg(test)]
mod tests {
    use crossterm::style::Color;

    use super::*;
    use crate::palette::COLOR_TABLE;

    fn parse(argv: &[&str]) -> Result<Args, clap::Error> {
        let mut full = vec!["termrain"];
        full.extend_from_slice(argv);
        Args::try_parse_from(full)
    }

    fn run_settings(argv: &[&str]) -> Settings {
        match parse(argv).unwrap().startup().unwrap() {
            Startup::Run(s) => s,
            other => panic!("expected Run, got {:?}", other),
        }
    }

    #[test]
    fn defaults_match_classic_look() {
        let s = run_settings(&[]);
        assert_eq!(s.frame_delay, Duration::from_millis(100));
        assert_eq!(s.rain.base_color, Color::DarkGreen);
        assert_eq!(s.rain.max_columns, DEFAULT_MAX_COLUMNS);
        assert!(!s.rain.bold);
        assert!(!s.rain.rainbow);
        assert!(s.duration.is_none());
        assert_eq!(s.rain.chars.len(), 94);
    }

    #[test]
    fn flags_flow_into_rain_config() {
        let s = run_settings(&["-b", "-r", "-C", "cyan", "-u", "0"]);
        assert!(s.rain.bold);
        assert!(s.rain.rainbow);
        assert_eq!(s.rain.base_color, Color::DarkCyan);
        assert_eq!(s.frame_delay, Duration::ZERO);
    }

    #[test]
    fn update_delay_is_value_over_forty() {
        assert_eq!(frame_delay(10), Duration::from_millis(250));
        assert_eq!(frame_delay(2), Duration::from_millis(50));
    }

    #[test]
    fn out_of_range_update_is_rejected() {
        assert!(parse(&["-u", "11"]).is_err());
        assert!(parse(&["-u", "-1"]).is_err());
        assert!(parse(&["-u", "four"]).is_err());
        assert!(parse(&["-u", "10"]).is_ok());
    }

    #[test]
    fn unknown_color_is_rejected() {
        assert!(parse(&["-C", "puce"]).is_err());
        for &(label, _, _) in COLOR_TABLE.iter() {
            assert!(parse(&["-C", label]).is_ok());
        }
    }

    #[test]
    fn max_columns_must_be_positive() {
        assert!(parse(&["--max-columns", "0"]).is_err());
        assert_eq!(run_settings(&["--max-columns", "3"]).rain.max_columns, 3);
    }

    #[test]
    fn version_short_circuits_before_run() {
        let args = parse(&["-V", "-u", "2"]).unwrap();
        assert!(matches!(args.startup(), Ok(Startup::Version)));
        assert!(VERSION_LINE.ends_with(env!("CARGO_PKG_VERSION")));
    }

    #[test]
    fn duration_bounds() {
        assert!(run_settings(&["--duration", "0"]).duration.is_none());
        assert!(run_settings(&["--duration", "-5"]).duration.is_none());
        assert_eq!(
            run_settings(&["--duration", "1.5"]).duration,
            Some(Duration::from_millis(1500))
        );
        let args = parse(&["--duration", "0.01"]).unwrap();
        assert!(args.startup().is_err());
    }
}
