//! Line input and the stdin-backed delete confirmation.

use std::io::{self, BufRead, Write};

use posts_core::Confirm;

/// Source of user input lines, without trailing newlines. `None` at EOF.
pub trait LineSource {
    fn next_line(&mut self) -> io::Result<Option<String>>;
}

/// Reads process stdin one line at a time.
///
/// The stdin lock is held only for the duration of a single read, so the
/// shell and the confirmation prompt can both use it.
#[derive(Debug, Clone, Copy, Default)]
pub struct StdinLines;

impl LineSource for StdinLines {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        read_one(&mut io::stdin().lock())
    }
}

impl<B: BufRead> LineSource for B {
    fn next_line(&mut self) -> io::Result<Option<String>> {
        read_one(self)
    }
}

fn read_one(reader: &mut impl BufRead) -> io::Result<Option<String>> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\n', '\r']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

/// Asks `[y/N]` on the terminal. Anything but `y`/`yes` declines, EOF and
/// I/O errors included.
pub struct TerminalConfirm<L, W> {
    input: L,
    out: W,
}

impl<L: LineSource, W: Write> TerminalConfirm<L, W> {
    pub fn new(input: L, out: W) -> Self {
        Self { input, out }
    }
}

impl<L: LineSource, W: Write> Confirm for TerminalConfirm<L, W> {
    fn confirm(&mut self, prompt: &str) -> bool {
        if write!(self.out, "{prompt} [y/N] ").and_then(|_| self.out.flush()).is_err() {
            return false;
        }
        match self.input.next_line() {
            Ok(Some(answer)) => matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes"),
            _ => false,
        }
    }
}
