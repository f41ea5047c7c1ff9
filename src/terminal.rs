// Copyright (c) 2026 rezky_nightky

use std::io::{stdout, Result, Stdout, Write};

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, ExecutableCommand, QueueableCommand,
};

use crate::frame::Frame;

/// Used when the host cannot report a size.
pub const FALLBACK_SIZE: (u16, u16) = (80, 24);

/// Full-screen output device. Raw mode stays off so the interrupt key keeps
/// delivering SIGINT.
pub struct Terminal {
    stdout: Stdout,
}

impl Terminal {
    pub fn new() -> Result<Self> {
        let mut out = stdout();
        let init_res: Result<()> = (|| {
            out.execute(terminal::EnterAlternateScreen)?;
            out.execute(cursor::Hide)?;
            let _ = out.execute(terminal::DisableLineWrap);
            out.execute(SetAttribute(Attribute::Reset))?;
            out.execute(ResetColor)?;
            out.execute(terminal::Clear(terminal::ClearType::All))?;
            out.flush()?;
            Ok(())
        })();
        if let Err(e) = init_res {
            restore(&mut out);
            return Err(e);
        }
        Ok(Self { stdout: out })
    }
}

impl Write for Terminal {
    fn write(&mut self, buf: &[u8]) -> Result<usize> {
        self.stdout.write(buf)
    }

    fn flush(&mut self) -> Result<()> {
        self.stdout.flush()
    }
}

impl Drop for Terminal {
    fn drop(&mut self) {
        restore(&mut self.stdout);
    }
}

pub fn size_or_fallback(res: Result<(u16, u16)>) -> (u16, u16) {
    match res {
        Ok(size) => size,
        Err(e) => {
            log::debug!("terminal size unavailable ({}), using fallback", e);
            FALLBACK_SIZE
        }
    }
}

/// Current terminal size, or `FALLBACK_SIZE` when the host cannot say.
pub fn current_size() -> (u16, u16) {
    size_or_fallback(terminal::size())
}

/// Clears the whole screen, then repaints every row with per-cell style
/// prefixes. Flushes once.
pub fn render_frame<W: Write>(out: &mut W, frame: &Frame) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(ResetColor)?;
    out.queue(terminal::Clear(terminal::ClearType::All))?;

    let mut cur_fg: Option<Color> = None;
    let mut cur_bold = false;

    for (y, row) in frame.rows().enumerate() {
        out.queue(cursor::MoveTo(0, y as u16))?;
        for cell in row {
            if cell.fg != cur_fg {
                out.queue(SetForegroundColor(cell.fg.unwrap_or(Color::Reset)))?;
                cur_fg = cell.fg;
            }
            if cell.bold != cur_bold {
                out.queue(SetAttribute(if cell.bold {
                    Attribute::Bold
                } else {
                    Attribute::NormalIntensity
                }))?;
                cur_bold = cell.bold;
            }
            out.queue(Print(cell.ch))?;
        }
    }

    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(ResetColor)?;
    out.flush()
}

fn restore<W: Write>(out: &mut W) {
    let _ = out.execute(SetAttribute(Attribute::Reset));
    let _ = out.execute(ResetColor);
    let _ = out.execute(terminal::Clear(terminal::ClearType::All));
    let _ = out.execute(cursor::MoveTo(0, 0));
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::EnableLineWrap);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = out.flush();
}

pub fn restore_terminal_best_effort() {
    restore(&mut stdout());
}
