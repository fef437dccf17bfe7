pub mod countdown;
pub mod grid;
pub mod palette;
pub mod round;

pub use countdown::Countdown;
pub use grid::{GRID_COLS, GRID_ROWS};
pub use palette::{Color, Rgb};
pub use round::{GameEvent, GameState, Transition};
