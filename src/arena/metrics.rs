use std::collections::VecDeque;

use crate::game::Player;

/// Result of a single game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub winner: Option<Player>,
    pub game_length: usize,
}

/// Match results with lifetime totals and rolling window computations.
pub struct MatchMetrics {
    results: VecDeque<GameResult>,
    capacity: usize,
    total_games: usize, // lifetime counts, never capped
    red_wins: usize,
    yellow_wins: usize,
    draws: usize,
    total_moves: usize,
}

impl MatchMetrics {
    pub fn with_capacity(capacity: usize) -> Self {
        MatchMetrics {
            results: VecDeque::with_capacity(capacity),
            capacity,
            total_games: 0,
            red_wins: 0,
            yellow_wins: 0,
            draws: 0,
            total_moves: 0,
        }
    }

    pub fn new() -> Self {
        Self::with_capacity(100)
    }

    pub fn record_game(&mut self, result: GameResult) {
        self.total_games += 1;
        self.total_moves += result.game_length;
        match result.winner {
            Some(Player::Red) => self.red_wins += 1,
            Some(Player::Yellow) => self.yellow_wins += 1,
            None => self.draws += 1,
        }

        self.results.push_back(result);
        if self.results.len() > self.capacity {
            self.results.pop_front();
        }
    }

    /// Win rate for `player` in the last N games.
    pub fn win_rate(&self, player: Player, last_n: usize) -> f32 {
        let n = self.results.len().min(last_n);
        if n == 0 {
            return 0.0;
        }
        let wins = self
            .results
            .iter()
            .rev()
            .take(n)
            .filter(|r| r.winner == Some(player))
            .count();
        wins as f32 / n as f32
    }

    /// Draw rate in the last N games.
    pub fn draw_rate(&self, last_n: usize) -> f32 {
        let n = self.results.len().min(last_n);
        if n == 0 {
            return 0.0;
        }
        let draws = self
            .results
            .iter()
            .rev()
            .take(n)
            .filter(|r| r.winner.is_none())
            .count();
        draws as f32 / n as f32
    }

    /// Average game length over the last N games.
    pub fn average_game_length(&self, last_n: usize) -> f32 {
        let n = self.results.len().min(last_n);
        if n == 0 {
            return 0.0;
        }
        let total: usize = self
            .results
            .iter()
            .rev()
            .take(n)
            .map(|r| r.game_length)
            .sum();
        total as f32 / n as f32
    }

    pub fn total_games(&self) -> usize {
        self.total_games
    }

    pub fn wins(&self, player: Player) -> usize {
        match player {
            Player::Red => self.red_wins,
            Player::Yellow => self.yellow_wins,
        }
    }

    pub fn draws(&self) -> usize {
        self.draws
    }

    /// Average game length over every recorded game.
    pub fn overall_average_length(&self) -> f32 {
        if self.total_games == 0 {
            return 0.0;
        }
        self.total_moves as f32 / self.total_games as f32
    }
}

impl Default for MatchMetrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(winner: Option<Player>, game_length: usize) -> GameResult {
        GameResult {
            winner,
            game_length,
        }
    }

    #[test]
    fn empty_metrics_are_zero() {
        let metrics = MatchMetrics::new();
        assert_eq!(metrics.total_games(), 0);
        assert_eq!(metrics.win_rate(Player::Red, 10), 0.0);
        assert_eq!(metrics.draw_rate(10), 0.0);
        assert_eq!(metrics.average_game_length(10), 0.0);
        assert_eq!(metrics.overall_average_length(), 0.0);
    }

    #[test]
    fn rates_over_window() {
        let mut metrics = MatchMetrics::new();
        metrics.record_game(result(Some(Player::Red), 10));
        metrics.record_game(result(Some(Player::Yellow), 20));
        metrics.record_game(result(None, 42));
        metrics.record_game(result(Some(Player::Red), 8));

        assert_eq!(metrics.total_games(), 4);
        assert!((metrics.win_rate(Player::Red, 4) - 0.5).abs() < 1e-6);
        assert!((metrics.win_rate(Player::Yellow, 4) - 0.25).abs() < 1e-6);
        assert!((metrics.draw_rate(4) - 0.25).abs() < 1e-6);
        // last two games only
        assert!((metrics.average_game_length(2) - 25.0).abs() < 1e-6);
        assert!((metrics.win_rate(Player::Red, 1) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn window_is_capped_but_totals_are_not() {
        let mut metrics = MatchMetrics::with_capacity(2);
        metrics.record_game(result(None, 42));
        metrics.record_game(result(Some(Player::Red), 7));
        metrics.record_game(result(Some(Player::Red), 9));

        assert_eq!(metrics.total_games(), 3);
        assert_eq!(metrics.draws(), 1);
        assert_eq!(metrics.wins(Player::Red), 2);
        assert_eq!(metrics.draw_rate(10), 0.0);
        assert!((metrics.average_game_length(10) - 8.0).abs() < 1e-6);
        assert!((metrics.overall_average_length() - 58.0 / 3.0).abs() < 1e-5);
    }
}
