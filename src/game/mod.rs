//! Core Connect Four game logic: board representation, win detection, player
//! types, and a turn-tracking game state.

mod board;
mod player;
mod state;
mod win;

pub use board::{Board, Cell, COLS, ROWS};
pub use player::Player;
pub use state::{GameOutcome, GameState};
pub use win::{any_win, check_win, winner, CONNECT};
