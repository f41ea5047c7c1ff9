// Copyright (c) 2026 rezky_nightky

use std::rc::Rc;

use crossterm::style::Color;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::column::{Column, ColumnStyle};
use crate::frame::Frame;

pub const DEFAULT_MAX_COLUMNS: usize = 20;

#[derive(Clone, Debug)]
pub struct RainConfig {
    pub max_columns: usize,
    pub bold: bool,
    pub rainbow: bool,
    pub base_color: Color,
    pub chars: Vec<char>,
}

pub struct Rain<R: Rng = StdRng> {
    pub width: u16,
    pub height: u16,

    max_columns: usize,
    style: ColumnStyle,

    columns: Vec<Column>,
    frame: Frame,

    rng: R,
}

impl Rain<StdRng> {
    pub fn new(config: RainConfig, width: u16, height: u16) -> Self {
        Self::with_rng(config, width, height, StdRng::from_os_rng())
    }
}

impl<R: Rng> Rain<R> {
    pub fn with_rng(config: RainConfig, width: u16, height: u16, rng: R) -> Self {
        let style = ColumnStyle {
            bold: config.bold,
            rainbow: config.rainbow,
            base_color: config.base_color,
            chars: Rc::from(config.chars),
        };
        Self {
            width,
            height,
            max_columns: config.max_columns,
            style,
            columns: Vec::new(),
            frame: Frame::new(width, height),
            rng,
        }
    }

    #[cfg(test)]
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    #[cfg(test)]
    pub fn frame(&self) -> &Frame {
        &self.frame
    }

    /// Adopts new terminal dimensions. Any change drops every column rather
    /// than rescaling it. Returns whether a reset happened.
    pub fn sync_size(&mut self, width: u16, height: u16) -> bool {
        if width == self.width && height == self.height {
            return false;
        }
        log::debug!(
            "resize {}x{} -> {}x{}, dropping {} columns",
            self.width,
            self.height,
            width,
            height,
            self.columns.len()
        );
        self.width = width;
        self.height = height;
        self.columns.clear();
        self.frame = Frame::new(width, height);
        true
    }

    /// Tries one random x. An occupied x is dropped without retrying, so a
    /// crowded screen spawns less often.
    pub fn spawn_column(&mut self) {
        if self.columns.len() >= self.max_columns || self.width == 0 {
            return;
        }

        let x = self.rng.random_range(0..self.width);
        if self.columns.iter().any(|c| c.x == x) {
            log::trace!("spawn at x={} rejected, column busy", x);
            return;
        }

        let tail_length = self.rng.random_range(self.height / 4..=self.height / 2);
        let column = Column::new(x, self.height, tail_length, self.style.clone());
        log::trace!(
            "spawn at x={} tail_length={}",
            column.x,
            column.tail_length()
        );
        self.columns.push(column);
    }

    /// Advances every column and keeps the ones still moving or visible.
    pub fn tick(&mut self) {
        let before = self.columns.len();
        self.columns = std::mem::take(&mut self.columns)
            .into_iter()
            .filter_map(|mut c| {
                // Both advances must run every tick.
                let moving = c.advance_head();
                let visible = c.advance_tail();
                if moving || visible {
                    Some(c)
                } else {
                    debug_assert!(c.is_finished());
                    None
                }
            })
            .collect();

        let removed = before - self.columns.len();
        if removed > 0 {
            log::trace!("{} columns finished", removed);
        }
    }

    pub fn composite(&mut self) -> &Frame {
        self.frame.clear();
        for column in &self.columns {
            for y in 0..self.height {
                if let Some(cell) = column.glyph_at(y, &mut self.rng) {
                    self.frame.set(column.x, y, cell);
                }
            }
        }
        &self.frame
    }

    /// One simulation frame against the current terminal size.
    pub fn step(&mut self, width: u16, height: u16) -> &Frame {
        self.sync_size(width, height);
        self.spawn_column();
        self.tick();
        self.composite()
    }
}
