//! Fixed-width board printer.

use crossterm::style::Stylize;
use strictly_tictactoe::{Board, Player as Mark, Square};

const ROW_SEPARATOR: &str = "\n---+---+---\n";

/// Renders boards as text, optionally colouring the marks.
///
/// Every square is two columns wide before styling and escape codes wrap
/// only the mark, so columns line up with or without colour.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardRenderer {
    color: bool,
}

impl BoardRenderer {
    /// Creates a renderer; `color` enables ANSI colours (X red, O blue).
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    fn square(&self, square: Square) -> String {
        let mark = match square {
            Square::Empty => return "--".to_string(),
            Square::Occupied(mark) => mark,
        };
        let text = mark.to_string();
        let styled = match (self.color, mark) {
            (false, _) => text,
            (true, Mark::X) => text.red().to_string(),
            (true, Mark::O) => text.blue().to_string(),
        };
        format!("{styled} ")
    }

    /// Renders the board as three rows separated by `---+---+---`.
    pub fn render(&self, board: &Board) -> String {
        let cells: Vec<String> = board.squares().iter().map(|sq| self.square(*sq)).collect();
        cells
            .chunks(3)
            .map(|row| format!(" {}| {}| {} ", row[0], row[1], row[2]))
            .collect::<Vec<_>>()
            .join(ROW_SEPARATOR)
    }
}

/// Formats a count with comma thousands separators (`1234567` → `1,234,567`).
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (idx, ch) in digits.chars().enumerate() {
        if idx > 0 && (digits.len() - idx) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}
