//! Terminal abstraction used by the console and JSON displayers.

use std::io::Write;

/// Default width when the terminal size is unknown.
pub const DEFAULT_WIDTH: usize = 80;

pub trait Console {
    /// Write `text` without a trailing newline.
    fn show(&mut self, text: &str);
    fn new_line(&mut self);
    /// Columns available for output.
    fn width(&self) -> usize;
}

/// Collects output in memory.
#[derive(Clone, Debug)]
pub struct BufferConsole {
    out: String,
    width: usize,
}

impl BufferConsole {
    pub fn new(width: usize) -> Self {
        Self {
            out: String::new(),
            width,
        }
    }

    pub fn output(&self) -> &str {
        &self.out
    }

    /// Take the collected output, leaving the buffer empty.
    pub fn take(&mut self) -> String {
        std::mem::take(&mut self.out)
    }
}

impl Default for BufferConsole {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH)
    }
}

impl Console for BufferConsole {
    fn show(&mut self, text: &str) {
        self.out.push_str(text);
    }

    fn new_line(&mut self) {
        self.out.push('\n');
    }

    fn width(&self) -> usize {
        self.width
    }
}

/// Writes through to any `io::Write`, typically stdout.
///
/// Write failures (a closed pipe, usually) are logged and otherwise ignored.
pub struct WriteConsole<W> {
    writer: W,
    width: usize,
}

impl<W: Write> WriteConsole<W> {
    pub fn new(writer: W, width: usize) -> Self {
        Self { writer, width }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W: Write> Console for WriteConsole<W> {
    fn show(&mut self, text: &str) {
        if let Err(err) = self.writer.write_all(text.as_bytes()) {
            log::debug!("console write failed: {err}");
        }
    }

    fn new_line(&mut self) {
        if let Err(err) = self.writer.write_all(b"\n").and_then(|()| self.writer.flush()) {
            log::debug!("console write failed: {err}");
        }
    }

    fn width(&self) -> usize {
        self.width
    }
}
