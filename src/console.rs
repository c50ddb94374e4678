//! Line-oriented terminal access for menus and human input.

use derive_more::{Display, Error};
use std::io::{self, BufRead, Stdin, StdinLock, Stdout, Write};
use std::ops::RangeInclusive;
use tracing::{debug, instrument};

/// The input stream ended while the game was waiting for the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Error)]
#[display("Input closed")]
pub struct InputClosed;

/// Something that can show text and read lines back.
///
/// Players and the orchestrator share one terminal so prompts, boards, and
/// input stay in order.
pub trait Terminal {
    /// Reads one line without its terminator, `None` at end of input.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Writes text as-is and flushes it.
    fn write_str(&mut self, text: &str) -> io::Result<()>;

    /// Writes text followed by a newline.
    fn write_line(&mut self, line: &str) -> io::Result<()> {
        self.write_str(line)?;
        self.write_str("\n")
    }
}

/// A [`Terminal`] over any reader and writer.
#[derive(Debug)]
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    /// Creates a console reading from `input` and writing to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Consumes the console, returning the writer.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl Console<StdinLock<'static>, Stdout> {
    /// Console over the process's stdin and stdout.
    pub fn stdio() -> Self {
        let stdin: Stdin = io::stdin();
        Self::new(stdin.lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> Terminal for Console<R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn write_str(&mut self, text: &str) -> io::Result<()> {
        self.output.write_all(text.as_bytes())?;
        self.output.flush()
    }
}

/// Prompts until the user enters a whole number inside `valid`.
///
/// # Errors
///
/// Returns [`InputClosed`] if input ends first, or any I/O error.
#[instrument(skip(term))]
pub fn ask_number(
    term: &mut dyn Terminal,
    prompt: &str,
    valid: RangeInclusive<u32>,
) -> anyhow::Result<u32> {
    loop {
        term.write_str(prompt)?;
        let line = term.read_line()?.ok_or(InputClosed)?;
        match line.trim().parse::<u32>() {
            Ok(n) if valid.contains(&n) => return Ok(n),
            _ => {
                debug!(input = %line, "Rejected menu input");
                term.write_line(&format!(
                    "Invalid choice – enter {}-{}.",
                    valid.start(),
                    valid.end()
                ))?;
            }
        }
    }
}

/// Asks a yes/no question; only `y` or `yes` (any case) count as yes.
///
/// # Errors
///
/// Returns [`InputClosed`] if input ends first, or any I/O error.
#[instrument(skip(term))]
pub fn ask_yes_no(term: &mut dyn Terminal, prompt: &str) -> anyhow::Result<bool> {
    term.write_str(prompt)?;
    let line = term.read_line()?.ok_or(InputClosed)?;
    let answer = line.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
