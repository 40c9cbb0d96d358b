//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Frames are diffed against the previous one and only changed runs of cells are
//! written. Encoding is separate from I/O so it can be tested against a `Vec<u8>`.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    event::{DisableMouseCapture, EnableMouseCapture},
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    last: FrameBuffer,
    full_redraw: bool,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            last: FrameBuffer::new(0, 0),
            full_redraw: true,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    /// Raw mode, alternate screen and mouse reporting.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(EnableMouseCapture)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()?;
        self.invalidate();
        Ok(())
    }

    /// Undo [`enter`](Self::enter). Safe to call after a failed frame.
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(DisableMouseCapture)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw (after a resize).
    pub fn invalidate(&mut self) {
        self.full_redraw = true;
    }

    /// Draw `fb`, then swap it with the previous frame.
    ///
    /// The caller gets the old frame back to render into, so no frame is cloned.
    /// Returns the number of bytes written.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<usize> {
        self.buf.clear();
        let resized = self.last.width() != fb.width() || self.last.height() != fb.height();
        if self.full_redraw || resized {
            encode_full_into(fb, &mut self.buf)?;
            self.full_redraw = false;
        } else {
            encode_diff_into(&self.last, fb, &mut self.buf)?;
        }
        let written = self.buf.len();
        if written > 0 {
            self.flush_buf()?;
        }
        std::mem::swap(&mut self.last, fb);
        fb.resize(self.last.width(), self.last.height());
        Ok(written)
    }

    pub fn writer(&self) -> &W {
        &self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Tracks style and cursor so repeated commands are skipped.
struct Encoder<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
    at: Option<(u16, u16)>,
}

impl<'a> Encoder<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self {
            out,
            style: None,
            at: None,
        }
    }

    fn move_to(&mut self, x: u16, y: u16) -> Result<()> {
        if self.at != Some((x, y)) {
            self.out.queue(cursor::MoveTo(x, y))?;
            self.at = Some((x, y));
        }
        Ok(())
    }

    fn print(&mut self, fb: &FrameBuffer, x: u16, y: u16) -> Result<()> {
        let cell = fb.get(x, y).unwrap_or_default();
        if self.style != Some(cell.style) {
            apply_style_into(self.out, cell.style)?;
            self.style = Some(cell.style);
        }
        self.out.queue(Print(cell.ch))?;
        self.at = self.at.map(|(cx, cy)| (cx + 1, cy));
        Ok(())
    }

    fn finish(self) -> Result<()> {
        if self.style.is_some() {
            self.out.queue(ResetColor)?;
            self.out.queue(SetAttribute(Attribute::Reset))?;
        }
        Ok(())
    }
}

/// Encode a full-frame redraw into `out`.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut enc = Encoder::new(out);
    for y in 0..fb.height() {
        enc.move_to(0, y)?;
        for x in 0..fb.width() {
            enc.print(fb, x, y)?;
        }
    }
    enc.finish()
}

/// Encode only the runs of cells that differ between `prev` and `next`.
///
/// Writes nothing when the frames are equal.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    let mut enc = Encoder::new(out);
    for_each_changed_run(prev, next, |x, y, len| {
        enc.move_to(x, y)?;
        for dx in 0..len {
            enc.print(next, x + dx, y)?;
        }
        Ok(())
    })?;
    enc.finish()
}

fn apply_style_into(out: &mut Vec<u8>, style: CellStyle) -> Result<()> {
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
    out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
    if style.bold {
        out.queue(SetAttribute(Attribute::Bold))?;
    }
    if style.dim {
        out.queue(SetAttribute(Attribute::Dim))?;
    }
    Ok(())
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Call `f(x, y, len)` for each horizontal run of changed cells.
///
/// A size mismatch marks every row dirty.
fn for_each_changed_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    let w = next.width();
    if prev.width() != w || prev.height() != next.height() {
        for y in 0..next.height() {
            f(0, y, w)?;
        }
        return Ok(());
    }

    let (a_cells, b_cells) = (prev.cells(), next.cells());
    for y in 0..next.height() {
        let row = (y as usize) * (w as usize);
        let a = &a_cells[row..row + w as usize];
        let b = &b_cells[row..row + w as usize];
        let mut x = 0usize;
        while x < b.len() {
            if a[x] == b[x] {
                x += 1;
                continue;
            }
            let start = x;
            while x < b.len() && a[x] != b[x] {
                x += 1;
            }
            f(start as u16, y, (x - start) as u16)?;
        }
    }
    Ok(())
}
