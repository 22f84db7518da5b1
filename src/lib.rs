//! # Four in a Row
//!
//! A Connect Four engine: board model, four-in-a-row detection, and an
//! automated opponent that picks moves with plain fixed-depth minimax over a
//! longest-run heuristic.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, win detection, player, game state
//! - [`ai`]: Agent trait, heuristics, minimax search, random agent
//! - [`arena`]: Headless agent-vs-agent matches and result metrics
//! - [`config`]: TOML configuration loading and validation
//! - [`error`]: Structured error types

pub mod ai;
pub mod arena;
pub mod config;
pub mod error;
pub mod game;
