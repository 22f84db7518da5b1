//! Headless matches between agents, with rolling result metrics.

pub mod metrics;
pub mod runner;

pub use metrics::{GameResult, MatchMetrics};
pub use runner::{Arena, ArenaConfig};
