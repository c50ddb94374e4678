//! Game rules for tic-tac-toe.
//!
//! Pure functions over the 9-square board. They are the termination tests
//! of the search, so they stay allocation-free and uninstrumented.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, is_won};
