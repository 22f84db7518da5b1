mod agent;
pub mod heuristic;
pub mod minimax;
mod random;

pub use agent::{Agent, AgentKind};
pub use heuristic::{DirectionalRunHeuristic, Heuristic, HeuristicKind, LongestRunHeuristic};
pub use minimax::{choose_move, MinimaxAgent, SearchConfig, SearchStats, DEFAULT_DEPTH};
pub use random::RandomAgent;
