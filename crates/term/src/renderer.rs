//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after a size change or `invalidate`) is a
//! full redraw. Later frames only emit the runs of cells that changed since
//! the previous frame.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(32 * 1024),
        }
    }

    /// Switch to raw mode on the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Restore the terminal to its normal state.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw (e.g. after a resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `fb`, then swap it with the previous frame.
    ///
    /// After the call `fb` holds stale contents the caller can overwrite for
    /// the next frame, so no frame is ever cloned.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        match self.last.take() {
            Some(mut prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                std::mem::swap(&mut prev, fb);
                self.last = Some(prev);
            }
            _ => {
                encode_full_into(fb, &mut self.buf)?;
                self.last = Some(fb.clone());
            }
        }
        self.flush_buf()
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut current: Option<CellStyle> = None;
    for y in 0..fb.height() {
        out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            let cell = fb.get(x, y).unwrap_or_default();
            put_cell(out, &mut current, cell.ch, cell.style)?;
        }
    }
    finish(out)
}

/// Encode only the changed runs between `prev` and `next` into `out`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut current: Option<CellStyle> = None;
    for (x, y, len) in changed_runs(prev, next) {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let cell = next.get(x + dx, y).unwrap_or_default();
            put_cell(out, &mut current, cell.ch, cell.style)?;
        }
    }
    finish(out)
}

fn put_cell(
    out: &mut Vec<u8>,
    current: &mut Option<CellStyle>,
    ch: char,
    style: CellStyle,
) -> Result<()> {
    if *current != Some(style) {
        out.queue(SetAttribute(Attribute::Reset))?;
        out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
        if style.bold {
            out.queue(SetAttribute(Attribute::Bold))?;
        }
        *current = Some(style);
    }
    out.queue(Print(ch))?;
    Ok(())
}

fn finish(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Horizontal runs `(x, y, len)` of cells that differ between two frames.
///
/// Frames of different sizes are treated as entirely changed.
fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<(u16, u16, u16)> {
    let mut runs = Vec::new();
    let same_size = prev.width() == next.width() && prev.height() == next.height();

    for y in 0..next.height() {
        if !same_size {
            runs.push((0, y, next.width()));
            continue;
        }
        let mut x = 0;
        while x < next.width() {
            if prev.get(x, y) == next.get(x, y) {
                x += 1;
                continue;
            }
            let start = x;
            while x < next.width() && prev.get(x, y) != next.get(x, y) {
                x += 1;
            }
            runs.push((start, y, x - start));
        }
    }
    runs
}
