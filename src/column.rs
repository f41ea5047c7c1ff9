// Copyright (c) 2026 rezky_nightky

use std::rc::Rc;

use crossterm::style::Color;
use rand::Rng;

use crate::cell::Cell;
use crate::palette::{ERASE_COLOR, HEAD_COLOR, RAINBOW};

/// Render settings every column copies from the engine at spawn.
#[derive(Clone, Debug)]
pub struct ColumnStyle {
    pub bold: bool,
    pub rainbow: bool,
    pub base_color: Color,
    pub chars: Rc<[char]>,
}

/// One falling streak at a fixed `x`.
///
/// `head` walks from 0 down to `screen_height`; `tail_start` starts at -1
/// and trails it, never overtaking it. Once the head has left the screen the
/// column is `done` but keeps rendering until the tail catches up.
#[derive(Clone, Debug)]
pub struct Column {
    pub x: u16,
    screen_height: i32,
    head: i32,
    tail_start: i32,
    tail_length: u16,
    done: bool,
    style: ColumnStyle,
}

impl Column {
    pub fn new(x: u16, screen_height: u16, tail_length: u16, style: ColumnStyle) -> Self {
        Self {
            x,
            screen_height: screen_height as i32,
            head: 0,
            tail_start: -1,
            tail_length,
            done: false,
            style,
        }
    }

    #[cfg(test)]
    pub fn head(&self) -> i32 {
        self.head
    }

    pub fn tail_start(&self) -> i32 {
        self.tail_start
    }

    pub fn tail_length(&self) -> u16 {
        self.tail_length
    }

    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Done and the tail has left the bottom of the screen.
    pub fn is_finished(&self) -> bool {
        self.is_done() && self.tail_start() >= self.screen_height
    }

    /// Moves the head down one row. Returns false only when the column was
    /// already done on entry.
    pub fn advance_head(&mut self) -> bool {
        if self.done {
            return false;
        }
        self.head += 1;
        if self.head >= self.screen_height {
            self.done = true;
        }
        true
    }

    /// Pulls the tail one row towards the head. Returns whether any of the
    /// tail can still be on screen.
    pub fn advance_tail(&mut self) -> bool {
        if self.tail_start < self.head {
            self.tail_start += 1;
        }
        self.tail_start < self.screen_height
    }

    pub fn glyph_at<R: Rng>(&self, y: u16, rng: &mut R) -> Option<Cell> {
        let y = y as i32;
        if y == self.head {
            Some(Cell::glyph(self.random_char(rng), HEAD_COLOR, true))
        } else if self.tail_start <= y && y < self.head {
            let fg = if self.style.rainbow {
                RAINBOW[rng.random_range(0..RAINBOW.len())]
            } else {
                self.style.base_color
            };
            Some(Cell::glyph(self.random_char(rng), fg, self.style.bold))
        } else if y == self.tail_start - 1 {
            Some(Cell::erase(ERASE_COLOR))
        } else {
            None
        }
    }

    fn random_char<R: Rng>(&self, rng: &mut R) -> char {
        let chars = &self.style.chars;
        if chars.is_empty() {
            return '0';
        }
        chars[rng.random_range(0..chars.len())]
    }

    #[cfg(test)]
    pub(crate) fn with_positions(mut self, head: i32, tail_start: i32) -> Self {
        self.head = head;
        self.tail_start = tail_start;
        self.done = head >= self.screen_height;
        self
    }
}

#[cfg(test)]
mod tests {
    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::charset::printable_pool;

    fn style(bold: bool, rainbow: bool) -> ColumnStyle {
        ColumnStyle {
            bold,
            rainbow,
            base_color: Color::DarkGreen,
            chars: printable_pool().into(),
        }
    }

    #[test]
    fn head_is_monotonic_and_capped_by_height() {
        let mut c = Column::new(3, 12, 4, style(false, false));
        let mut prev = c.head();
        for _ in 0..40 {
            c.advance_head();
            c.advance_tail();
            assert!(c.head() >= prev);
            assert!(c.head() <= 12);
            prev = c.head();
        }
        assert_eq!(c.head(), 12);
    }

    #[test]
    fn tail_never_passes_head() {
        let mut c = Column::new(0, 9, 3, style(false, false));
        for _ in 0..30 {
            c.advance_head();
            c.advance_tail();
            assert!(c.tail_start() <= c.head());
        }
    }

    #[test]
    fn advance_head_reports_work_on_the_tick_it_finishes() {
        let mut c = Column::new(0, 2, 1, style(false, false));
        assert!(c.advance_head());
        assert!(!c.is_done());
        assert!(c.advance_head());
        assert!(c.is_done());
        assert!(!c.advance_head());
        assert_eq!(c.head(), 2);
    }

    #[test]
    fn finishes_within_height_ticks_after_head_reaches_bottom() {
        let height = 15u16;
        let mut c = Column::new(0, height, 5, style(false, false));
        let mut ticks_after_bottom = None;
        for tick in 0..200u32 {
            let moving = c.advance_head();
            let visible = c.advance_tail();
            if c.is_done() && ticks_after_bottom.is_none() {
                ticks_after_bottom = Some(tick);
            }
            if !(moving || visible) {
                assert!(c.is_finished());
                let since = tick - ticks_after_bottom.unwrap();
                assert!(since <= height as u32);
                return;
            }
        }
        panic!("column never finished");
    }

    #[test]
    fn done_column_tail_catches_up_from_behind() {
        let mut c = Column::new(0, 20, 5, style(false, false)).with_positions(20, 16);
        assert!(c.is_done());
        for expected in 17..20 {
            assert!(!c.advance_head());
            assert!(c.advance_tail());
            assert_eq!(c.tail_start(), expected);
        }
        assert!(!c.advance_tail());
        assert!(c.is_finished());
    }

    #[test]
    fn glyph_zones_follow_head_and_tail() {
        let c = Column::new(4, 20, 5, style(false, false)).with_positions(10, 6);
        let mut rng = StdRng::seed_from_u64(7);

        let head = c.glyph_at(10, &mut rng).unwrap();
        assert_eq!(head.fg, Some(HEAD_COLOR));
        assert!(head.bold);
        assert!(head.ch.is_ascii_graphic());

        let trail = c.glyph_at(8, &mut rng).unwrap();
        assert_eq!(trail.fg, Some(Color::DarkGreen));
        assert!(!trail.bold);
        assert!(trail.ch.is_ascii_graphic());

        let erase = c.glyph_at(5, &mut rng).unwrap();
        assert_eq!(erase, Cell::erase(ERASE_COLOR));

        assert!(c.glyph_at(15, &mut rng).is_none());
        assert!(c.glyph_at(4, &mut rng).is_none());
    }

    #[test]
    fn rainbow_trail_uses_palette_and_bold_flag() {
        let c = Column::new(0, 20, 5, style(true, true)).with_positions(10, 0);
        let mut rng = StdRng::seed_from_u64(99);
        for y in 0..10 {
            let cell = c.glyph_at(y, &mut rng).unwrap();
            assert!(cell.bold);
            assert!(RAINBOW.contains(&cell.fg.unwrap()));
        }
        let head = c.glyph_at(10, &mut rng).unwrap();
        assert_eq!(head.fg, Some(HEAD_COLOR));
    }

    #[test]
    fn fresh_column_shows_only_its_head() {
        let c = Column::new(0, 10, 3, style(false, false));
        let mut rng = StdRng::seed_from_u64(1);
        assert!(c.glyph_at(0, &mut rng).is_some());
        for y in 1..10 {
            assert!(c.glyph_at(y, &mut rng).is_none());
        }
    }
}
