use tracing::info;

use crate::ai::{Agent, AgentKind, MinimaxAgent, RandomAgent, SearchConfig};
use crate::config::BoardConfig;
use crate::error::ArenaError;
use crate::game::{Board, GameOutcome, GameState, Player};

use super::metrics::{GameResult, MatchMetrics};

/// Arena configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub games: usize,
    pub red: AgentKind,
    pub yellow: AgentKind,
    pub first: Player,
    pub log_interval: usize,
    /// Seed for random agents; fresh entropy when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        ArenaConfig {
            games: 10,
            red: AgentKind::Minimax,
            yellow: AgentKind::Random,
            first: Player::Yellow,
            log_interval: 1,
            seed: None,
        }
    }
}

/// Plays complete games between two agents on a fresh board each time.
pub struct Arena {
    config: ArenaConfig,
    board: BoardConfig,
    search: SearchConfig,
}

impl Arena {
    pub fn new(config: ArenaConfig, board: BoardConfig, search: SearchConfig) -> Self {
        Arena {
            config,
            board,
            search,
        }
    }

    /// Build the agent that plays `player` according to the config.
    pub fn build_agent(&self, player: Player) -> Box<dyn Agent> {
        let kind = match player {
            Player::Red => self.config.red,
            Player::Yellow => self.config.yellow,
        };
        match kind {
            AgentKind::Minimax => Box::new(MinimaxAgent::from_config(&self.search)),
            AgentKind::Random => match self.config.seed {
                // distinct streams when both sides are random
                Some(seed) => Box::new(RandomAgent::with_seed(
                    seed.wrapping_add(player as u64),
                )),
                None => Box::new(RandomAgent::new()),
            },
        }
    }

    /// Run the configured number of games with agents built from the config.
    pub fn run(&self) -> Result<MatchMetrics, ArenaError> {
        let mut red = self.build_agent(Player::Red);
        let mut yellow = self.build_agent(Player::Yellow);
        self.run_with(red.as_mut(), yellow.as_mut())
    }

    /// Run the configured number of games between the given agents.
    pub fn run_with(
        &self,
        red: &mut dyn Agent,
        yellow: &mut dyn Agent,
    ) -> Result<MatchMetrics, ArenaError> {
        let mut metrics = MatchMetrics::new();

        info!(
            games = self.config.games,
            red = red.name(),
            yellow = yellow.name(),
            first = self.config.first.name(),
            rows = self.board.rows,
            cols = self.board.cols,
            "starting match"
        );

        for game in 1..=self.config.games {
            let result = self.play_game(red, yellow)?;
            metrics.record_game(result);

            if game % self.config.log_interval == 0 {
                let window = self.config.log_interval;
                let winner = result.winner.map(Player::name).unwrap_or("draw");
                info!(
                    game,
                    winner,
                    moves = result.game_length,
                    red_rate = metrics.win_rate(Player::Red, window),
                    yellow_rate = metrics.win_rate(Player::Yellow, window),
                    draw_rate = metrics.draw_rate(window),
                    avg_len = metrics.average_game_length(window),
                    "game finished"
                );
            }
        }

        info!(
            games = metrics.total_games(),
            red_wins = metrics.wins(Player::Red),
            yellow_wins = metrics.wins(Player::Yellow),
            draws = metrics.draws(),
            avg_len = metrics.overall_average_length(),
            "match complete"
        );

        Ok(metrics)
    }

    /// Play one game to completion.
    pub fn play_game(
        &self,
        red: &mut dyn Agent,
        yellow: &mut dyn Agent,
    ) -> Result<GameResult, ArenaError> {
        let board = Board::new(self.board.rows, self.board.cols);
        let mut state = GameState::new(board, self.config.first);

        while !state.is_terminal() {
            let agent: &mut dyn Agent = match state.current_player() {
                Player::Red => &mut *red,
                Player::Yellow => &mut *yellow,
            };
            let column = agent.select_action(&state)?;
            state
                .apply_move_mut(column)
                .map_err(|source| ArenaError::IllegalMove {
                    agent: agent.name().to_string(),
                    column,
                    source,
                })?;
        }

        let winner = match state.outcome() {
            Some(GameOutcome::Winner(player)) => Some(player),
            _ => None,
        };

        Ok(GameResult {
            winner,
            game_length: state.move_count(),
        })
    }
}
