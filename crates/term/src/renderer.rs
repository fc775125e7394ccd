//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! First frame and size changes are full redraws; steady-state frames are
//! diffed against the previous one so only changed cells are rewritten.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.queue(terminal::DisableLineWrap)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(terminal::EnableLineWrap)?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Flush a frame, diffing against the previously drawn one.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        let needs_full = match &self.last {
            Some(last) => last.width() != fb.width() || last.height() != fb.height(),
            None => true,
        };

        if needs_full {
            self.full_redraw(fb)?;
        } else if let Some(last) = self.last.take() {
            self.diff_redraw(fb, &last)?;
            self.last = Some(last);
        }

        match &mut self.last {
            Some(last) => last.clone_from(fb),
            None => self.last = Some(fb.clone()),
        }
        Ok(())
    }

    fn full_redraw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.stdout.queue(terminal::Clear(terminal::ClearType::All))?;
        let mut style: Option<CellStyle> = None;
        for y in 0..fb.height() {
            self.stdout.queue(cursor::MoveTo(0, y))?;
            for x in 0..fb.width() {
                if let Some(cell) = fb.get(x, y) {
                    self.emit(cell, &mut style)?;
                }
            }
        }
        self.stdout.flush()?;
        Ok(())
    }

    fn diff_redraw(&mut self, fb: &FrameBuffer, prev: &FrameBuffer) -> Result<()> {
        let mut style: Option<CellStyle> = None;
        let mut cursor_at: Option<(u16, u16)> = None;
        for y in 0..fb.height() {
            for x in 0..fb.width() {
                let (cell, old) = match (fb.get(x, y), prev.get(x, y)) {
                    (Some(cell), Some(old)) => (cell, old),
                    _ => continue,
                };
                if cell == old {
                    continue;
                }
                // Move only when not already just past the previous write.
                if cursor_at != Some((x, y)) {
                    self.stdout.queue(cursor::MoveTo(x, y))?;
                }
                self.emit(cell, &mut style)?;
                cursor_at = Some((x + 1, y));
            }
        }
        self.stdout.flush()?;
        Ok(())
    }

    /// Queue one cell, emitting color changes only when the style differs
    /// from the previous write.
    fn emit(&mut self, cell: Cell, current: &mut Option<CellStyle>) -> Result<()> {
        if *current != Some(cell.style) {
            self.stdout
                .queue(SetForegroundColor(to_color(cell.style.fg)))?;
            self.stdout
                .queue(SetBackgroundColor(to_color(cell.style.bg)))?;
            *current = Some(cell.style);
        }
        self.stdout.queue(Print(cell.ch))?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}
