//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! The first frame (and any frame after a resize or `invalidate`) is a full
//! redraw; later frames only rewrite runs of cells that changed.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Colors, Print, ResetColor, SetAttribute, SetColors},
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

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
            buf: Vec::with_capacity(16 * 1024),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

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

    /// Force the next draw to be a full redraw (e.g. on resize events).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a frame, diffing against the previous one when sizes match.
    pub fn draw(&mut self, fb: &FrameBuffer) -> Result<()> {
        self.buf.clear();
        match &mut self.last {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(prev, fb, &mut self.buf)?;
                prev.clone_from(fb);
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

/// Encode a full-frame redraw into `out` without touching stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut w = StyledWriter::new(out);
    w.out.queue(terminal::Clear(terminal::ClearType::All))?;
    for y in 0..fb.height() {
        w.out.queue(cursor::MoveTo(0, y))?;
        for x in 0..fb.width() {
            w.put(fb.get(x, y).unwrap_or_default())?;
        }
    }
    w.finish()
}

/// Encode only the changed runs between two same-sized frames into `out`.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut w = StyledWriter::new(out);
    for (x, y, len) in changed_runs(prev, next) {
        w.out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            w.put(next.get(x + dx, y).unwrap_or_default())?;
        }
    }
    w.finish()
}

/// Queues cells, emitting style escapes only when the style changes.
struct StyledWriter<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl<'a> StyledWriter<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn put(&mut self, cell: Cell) -> Result<()> {
        if self.style != Some(cell.style) {
            let st = cell.style;
            self.out.queue(SetAttribute(Attribute::Reset))?;
            self.out.queue(SetColors(Colors::new(color(st.fg), color(st.bg))))?;
            if st.bold {
                self.out.queue(SetAttribute(Attribute::Bold))?;
            }
            if st.dim {
                self.out.queue(SetAttribute(Attribute::Dim))?;
            }
            self.style = Some(st);
        }
        self.out.queue(Print(cell.ch))?;
        Ok(())
    }

    fn finish(self) -> Result<()> {
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

fn color(c: Rgb) -> Color {
    Color::Rgb { r: c.r, g: c.g, b: c.b }
}

/// `(x, y, len)` runs of cells that differ, row by row.
///
/// Frames of different size are reported as fully dirty.
fn changed_runs(prev: &FrameBuffer, next: &FrameBuffer) -> Vec<(u16, u16, u16)> {
    let mut runs = Vec::new();
    if prev.width() != next.width() || prev.height() != next.height() {
        for y in 0..next.height() {
            runs.push((0, y, next.width()));
        }
        return runs;
    }

    for y in 0..next.height() {
        let mut run_start: Option<u16> = None;
        for x in 0..next.width() {
            let dirty = prev.get(x, y) != next.get(x, y);
            match (dirty, run_start) {
                (true, None) => run_start = Some(x),
                (false, Some(start)) => {
                    runs.push((start, y, x - start));
                    run_start = None;
                }
                _ => {}
            }
        }
        if let Some(start) = run_start {
            runs.push((start, y, next.width() - start));
        }
    }
    runs
}
