//! Double-buffered renderer.
//!
//! Screens draw into the back buffer; [`Renderer::present`] diffs it against
//! the previous frame, writes only what changed and swaps the two. The
//! renderer is generic over its output so frames can be captured in memory.
//!
//! Terminal modes switched on in [`Renderer::new`] (alternate screen,
//! hidden cursor, bracketed paste) are switched off again by
//! [`Renderer::cleanup`], which also runs on drop.

mod diff;

pub use diff::{BufferDiff, DirtyRun};

use crate::ansi::{self, AnsiWriter, ColorMode};
use crate::buffer::Buffer;
use crate::color::Rgb;
use crate::error::{Error, Result};
use std::io::{self, Write};
use std::time::{Duration, Instant};

/// Terminal setup performed by the renderer.
#[derive(Clone, Copy, Debug)]
pub struct RendererOptions {
    pub use_alt_screen: bool,
    pub hide_cursor: bool,
    pub bracketed_paste: bool,
    pub color_mode: ColorMode,
}

impl Default for RendererOptions {
    fn default() -> Self {
        Self {
            use_alt_screen: true,
            hide_cursor: true,
            bracketed_paste: true,
            color_mode: ColorMode::TrueColor,
        }
    }
}

impl RendererOptions {
    /// No terminal mode changes at all; used for captured output.
    #[must_use]
    pub fn inline() -> Self {
        Self {
            use_alt_screen: false,
            hide_cursor: false,
            bracketed_paste: false,
            color_mode: ColorMode::TrueColor,
        }
    }
}

#[derive(Clone, Debug, Default)]
pub struct RenderStats {
    pub frames: u64,
    pub last_frame_cells: usize,
    pub last_frame_bytes: usize,
    pub last_frame_time: Duration,
}

pub struct Renderer<W: Write> {
    width: u32,
    height: u32,
    front_buffer: Buffer,
    back_buffer: Buffer,
    out: W,
    scratch: Vec<u8>,
    options: RendererOptions,
    background: Rgb,
    force_redraw: bool,
    stats: RenderStats,
    last_present_at: Instant,
    active: bool,
}

impl<W: Write> Renderer<W> {
    /// Set up the terminal on `out` and allocate both buffers.
    pub fn new(out: W, width: u32, height: u32, options: RendererOptions) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        let mut renderer = Self {
            width,
            height,
            front_buffer: Buffer::new(width, height),
            back_buffer: Buffer::new(width, height),
            out,
            scratch: Vec::new(),
            options,
            background: Rgb::BLACK,
            force_redraw: true,
            stats: RenderStats::default(),
            last_present_at: Instant::now(),
            active: true,
        };

        let mut setup = String::new();
        if options.use_alt_screen {
            setup.push_str(ansi::ALT_SCREEN_ON);
        }
        if options.hide_cursor {
            setup.push_str(ansi::CURSOR_HIDE);
        }
        if options.bracketed_paste {
            setup.push_str(ansi::BRACKETED_PASTE_ON);
        }
        renderer.out.write_all(setup.as_bytes())?;
        renderer.out.flush()?;
        Ok(renderer)
    }

    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The back buffer, to draw the next frame into.
    pub fn buffer(&mut self) -> &mut Buffer {
        &mut self.back_buffer
    }

    /// The last presented frame.
    #[must_use]
    pub fn front_buffer(&self) -> &Buffer {
        &self.front_buffer
    }

    #[must_use]
    pub fn stats(&self) -> &RenderStats {
        &self.stats
    }

    #[must_use]
    pub fn writer(&self) -> &W {
        &self.out
    }

    pub fn writer_mut(&mut self) -> &mut W {
        &mut self.out
    }

    /// Color the back buffer is cleared to after each present and resize.
    pub fn set_background(&mut self, color: Rgb) {
        self.background = color;
        self.back_buffer.clear(color);
        self.force_redraw = true;
    }

    /// Write the back buffer to the terminal and swap.
    pub fn present(&mut self) -> io::Result<()> {
        let total = self.width as usize * self.height as usize;
        let diff = BufferDiff::compute(&self.front_buffer, &self.back_buffer);

        let cells = if self.force_redraw || diff.should_full_redraw(total) {
            self.write_full()?;
            self.force_redraw = false;
            total
        } else if diff.is_empty() {
            self.scratch.clear();
            0
        } else {
            self.write_runs(&diff)?;
            diff.change_count
        };
        self.update_stats(cells);

        std::mem::swap(&mut self.front_buffer, &mut self.back_buffer);
        self.back_buffer.clear(self.background);
        Ok(())
    }

    fn write_full(&mut self) -> io::Result<()> {
        self.scratch.clear();
        let mut writer = AnsiWriter::with_color_mode(&mut self.scratch, self.options.color_mode);
        writer.write_str(ansi::sync::BEGIN);
        writer.write_str(ansi::CURSOR_HOME);
        for y in 0..self.height {
            writer.move_cursor(y, 0);
            for x in 0..self.width {
                if let Some(cell) = self.back_buffer.get(x, y) {
                    writer.write_cell(cell);
                }
            }
        }
        writer.reset();
        writer.write_str(ansi::sync::END);
        writer.flush()?;
        self.out.write_all(&self.scratch)?;
        self.out.flush()
    }

    fn write_runs(&mut self, diff: &BufferDiff) -> io::Result<()> {
        self.scratch.clear();
        let mut writer = AnsiWriter::with_color_mode(&mut self.scratch, self.options.color_mode);
        writer.write_str(ansi::sync::BEGIN);
        for run in &diff.runs {
            for x in run.x..run.x + run.width {
                let Some(cell) = self.back_buffer.get(x, run.y) else {
                    continue;
                };
                if cell.is_continuation() {
                    continue;
                }
                writer.move_cursor(run.y, x);
                writer.write_cell(cell);
            }
        }
        writer.reset();
        writer.write_str(ansi::sync::END);
        writer.flush()?;
        self.out.write_all(&self.scratch)?;
        self.out.flush()
    }

    fn update_stats(&mut self, cells: usize) {
        let now = Instant::now();
        self.stats.frames = self.stats.frames.saturating_add(1);
        self.stats.last_frame_cells = cells;
        self.stats.last_frame_bytes = self.scratch.len();
        self.stats.last_frame_time = now.duration_since(self.last_present_at);
        self.last_present_at = now;
    }

    /// Reallocate both buffers; the next present repaints everything.
    pub fn resize(&mut self, width: u32, height: u32) -> Result<()> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimensions { width, height });
        }
        self.width = width;
        self.height = height;
        self.front_buffer.resize(width, height);
        self.back_buffer.resize(width, height);
        self.back_buffer.clear(self.background);
        self.out.write_all(ansi::CLEAR_SCREEN.as_bytes())?;
        self.force_redraw = true;
        Ok(())
    }

    /// Force the next present to repaint everything.
    pub fn invalidate(&mut self) {
        self.force_redraw = true;
    }

    pub fn set_title(&mut self, title: &str) -> io::Result<()> {
        ansi::write_title(&mut self.out, title)?;
        self.out.flush()
    }

    /// Undo the terminal setup. Safe to call more than once.
    pub fn cleanup(&mut self) -> io::Result<()> {
        if !self.active {
            return Ok(());
        }
        self.active = false;

        let mut teardown = String::from(ansi::RESET);
        if self.options.bracketed_paste {
            teardown.push_str(ansi::BRACKETED_PASTE_OFF);
        }
        if self.options.hide_cursor {
            teardown.push_str(ansi::CURSOR_SHOW);
        }
        if self.options.use_alt_screen {
            teardown.push_str(ansi::ALT_SCREEN_OFF);
        }
        self.out.write_all(teardown.as_bytes())?;
        self.out.flush()
    }
}

impl<W: Write> Drop for Renderer<W> {
    fn drop(&mut self) {
        let _ = self.cleanup();
    }
}
