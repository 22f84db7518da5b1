//! Fixed-depth minimax over a single shared board.
//!
//! Every explored move is a `drop_piece` on the caller's board followed, after
//! the recursive call returns, by an `undo_top` on the same column. Nothing is
//! pruned and nothing is cached: each call visits the full tree to `depth`.

use tracing::debug;

use crate::error::SearchError;
use crate::game::{any_win, Board, GameState, Player};

use super::agent::Agent;
use super::heuristic::{Heuristic, HeuristicKind};

/// Search depth used when none is configured.
pub const DEFAULT_DEPTH: usize = 3;

/// Minimax search configuration.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Plies searched, counting the root move
    pub depth: usize,
    pub heuristic: HeuristicKind,
}

impl Default for SearchConfig {
    fn default() -> Self {
        SearchConfig {
            depth: DEFAULT_DEPTH,
            heuristic: HeuristicKind::LongestRun,
        }
    }
}

/// Counters for one `choose_move` call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions reached by a speculative drop
    pub nodes: u64,
    /// Heuristic evaluations
    pub leaves: u64,
}

struct Search<'a> {
    board: &'a mut Board,
    automated: Player,
    heuristic: &'a dyn Heuristic,
    stats: SearchStats,
}

impl Search<'_> {
    fn evaluate(&mut self) -> i32 {
        self.stats.leaves += 1;
        self.heuristic.evaluate(self.board, self.automated)
    }

    fn minimax(&mut self, depth: usize, maximizing: bool) -> i32 {
        if depth == 0 || any_win(self.board) {
            return self.evaluate();
        }

        let mover = if maximizing {
            self.automated
        } else {
            self.automated.other()
        };

        // A node with no legal column keeps its starting extreme
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for col in 0..self.board.cols() {
            if self.board.drop_piece(col, mover.to_cell()).is_err() {
                continue;
            }
            self.stats.nodes += 1;

            let value = self.minimax(depth - 1, !maximizing);

            let undone = self.board.undo_top(col);
            debug_assert_eq!(undone, Some(mover.to_cell()));

            best = if maximizing {
                best.max(value)
            } else {
                best.min(value)
            };
        }

        best
    }

    fn choose(&mut self, depth: usize) -> Option<(usize, i32)> {
        let mut best: Option<(usize, i32)> = None;

        for col in 0..self.board.cols() {
            if self.board.drop_piece(col, self.automated.to_cell()).is_err() {
                continue;
            }
            self.stats.nodes += 1;

            let value = if depth == 0 {
                self.evaluate()
            } else {
                self.minimax(depth - 1, false)
            };

            let undone = self.board.undo_top(col);
            debug_assert_eq!(undone, Some(self.automated.to_cell()));

            // Strictly greater: the leftmost column keeps ties
            if best.map_or(true, |(_, score)| value > score) {
                best = Some((col, value));
            }
        }

        best
    }
}

/// Score the position with `depth` plies of minimax, from `automated`'s view.
///
/// `maximizing` says whether `automated` is the side to move. The board is
/// left exactly as it was passed in.
pub fn minimax(
    board: &mut Board,
    depth: usize,
    maximizing: bool,
    automated: Player,
    heuristic: &dyn Heuristic,
) -> i32 {
    let mut search = Search {
        board,
        automated,
        heuristic,
        stats: SearchStats::default(),
    };
    search.minimax(depth, maximizing)
}

/// Pick the column for `automated` to play, searching `depth` plies deep
/// (the root move counts as the first ply).
pub fn choose_move(
    board: &mut Board,
    depth: usize,
    automated: Player,
    heuristic: &dyn Heuristic,
) -> Result<usize, SearchError> {
    choose_move_with_stats(board, depth, automated, heuristic).map(|(col, _)| col)
}

/// Like [`choose_move`], also returning node counts for the search.
pub fn choose_move_with_stats(
    board: &mut Board,
    depth: usize,
    automated: Player,
    heuristic: &dyn Heuristic,
) -> Result<(usize, SearchStats), SearchError> {
    let mut search = Search {
        board,
        automated,
        heuristic,
        stats: SearchStats::default(),
    };

    let (col, score) = search.choose(depth).ok_or(SearchError::NoLegalMove)?;
    let stats = search.stats;

    debug!(
        player = automated.name(),
        depth,
        column = col,
        score,
        nodes = stats.nodes,
        leaves = stats.leaves,
        "minimax chose a column"
    );

    Ok((col, stats))
}

/// Minimax agent: exhaustive fixed-depth search, no pruning.
pub struct MinimaxAgent {
    depth: usize,
    kind: HeuristicKind,
    heuristic: Box<dyn Heuristic>,
    last_stats: SearchStats,
}

impl MinimaxAgent {
    pub fn new(depth: usize) -> Self {
        Self::with_heuristic(depth, HeuristicKind::default())
    }

    pub fn with_heuristic(depth: usize, kind: HeuristicKind) -> Self {
        MinimaxAgent {
            depth,
            kind,
            heuristic: kind.build(),
            last_stats: SearchStats::default(),
        }
    }

    pub fn from_config(config: &SearchConfig) -> Self {
        Self::with_heuristic(config.depth, config.heuristic)
    }

    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Counters from the most recent search
    pub fn last_stats(&self) -> SearchStats {
        self.last_stats
    }

    /// Pick a column for `automated` directly on `board`, restoring it after.
    pub fn choose_move(&mut self, board: &mut Board, automated: Player) -> Result<usize, SearchError> {
        let (col, stats) =
            choose_move_with_stats(board, self.depth, automated, self.heuristic.as_ref())?;
        self.last_stats = stats;
        Ok(col)
    }
}

impl Default for MinimaxAgent {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl Agent for MinimaxAgent {
    fn select_action(&mut self, state: &GameState) -> Result<usize, SearchError> {
        if state.is_terminal() {
            return Err(SearchError::NoLegalMove);
        }
        // One scratch board for the whole search
        let mut board = state.board().clone();
        self.choose_move(&mut board, state.current_player())
    }

    fn name(&self) -> &str {
        "Minimax"
    }

    fn clone_agent(&self) -> Box<dyn Agent> {
        Box::new(MinimaxAgent::with_heuristic(self.depth, self.kind))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ai::heuristic::{DirectionalRunHeuristic, LongestRunHeuristic};
    use crate::ai::RandomAgent;
    use crate::game::{GameOutcome, COLS};

    const STRIPES: [&str; 6] = [
        "RRYYRRY", "YYRRYYR", "RRYYRRY", "YYRRYYR", "RRYYRRY", "YYRRYYR",
    ];

    fn stripes_with_open_top(open: usize) -> Board {
        let mut board = Board::from_rows(&STRIPES).unwrap();
        for _ in 0..open {
            board.undo_top(6).unwrap();
        }
        board
    }

    #[test]
    fn empty_board_returns_a_column() {
        let mut board = Board::standard();
        let col = choose_move(&mut board, 3, Player::Red, &LongestRunHeuristic).unwrap();
        assert!(col < COLS);
        // every reply scores alike on an empty board, so the leftmost wins
        assert_eq!(col, 0);
        assert_eq!(board, Board::standard());
    }

    #[test]
    fn search_restores_the_board() {
        let mut board = Board::from_rows(&[
            ".......",
            ".......",
            "...Y...",
            "..RR...",
            ".YRY...",
            "RYYRY.R",
        ])
        .unwrap();
        let before = board.clone();
        for depth in 0..=4 {
            choose_move(&mut board, depth, Player::Yellow, &DirectionalRunHeuristic).unwrap();
            assert_eq!(board, before, "board changed after depth {depth}");
        }
        minimax(&mut board, 3, true, Player::Red, &LongestRunHeuristic);
        assert_eq!(board, before);
    }

    #[test]
    fn full_board_has_no_legal_move() {
        let mut board = Board::from_rows(&STRIPES).unwrap();
        assert_eq!(
            choose_move(&mut board, 3, Player::Red, &LongestRunHeuristic),
            Err(SearchError::NoLegalMove)
        );
    }

    #[test]
    fn exhausted_nodes_keep_their_sentinel() {
        let mut board = Board::from_rows(&STRIPES).unwrap();
        let h = LongestRunHeuristic;
        assert_eq!(minimax(&mut board, 2, true, Player::Red, &h), i32::MIN);
        assert_eq!(minimax(&mut board, 2, false, Player::Red, &h), i32::MAX);
        assert_eq!(minimax(&mut board, 0, true, Player::Red, &h), 0);
    }

    #[test]
    fn near_full_board_still_returns_the_open_column() {
        // Two cells left in column 6: at depth 3 the only line of play ends
        // in an exhausted maximizing node scored i32::MIN
        for open in 1..=2 {
            let mut board = stripes_with_open_top(open);
            for depth in 1..=4 {
                let col = choose_move(&mut board, depth, Player::Red, &LongestRunHeuristic);
                assert_eq!(col, Ok(6), "open={open} depth={depth}");
            }
        }
    }

    #[test]
    fn takes_winning_move() {
        let mut board = Board::from_rows(&[
            ".......",
            ".......",
            ".......",
            ".......",
            "YYY....",
            "RRR....",
        ])
        .unwrap();
        for depth in 1..=4 {
            let col = choose_move(&mut board, depth, Player::Red, &LongestRunHeuristic).unwrap();
            assert_eq!(col, 3, "depth {depth}");
        }
    }

    #[test]
    fn blocks_open_three() {
        let mut board = Board::from_rows(&[
            ".......",
            ".......",
            ".......",
            ".......",
            ".......",
            "YYY..RR",
        ])
        .unwrap();
        let col = choose_move(&mut board, 3, Player::Red, &LongestRunHeuristic).unwrap();
        assert_eq!(col, 3);
    }

    #[test]
    fn stats_count_every_node() {
        let mut board = Board::standard();
        let h = LongestRunHeuristic;

        let (_, stats) = choose_move_with_stats(&mut board, 1, Player::Red, &h).unwrap();
        assert_eq!(stats, SearchStats { nodes: 7, leaves: 7 });

        let (_, stats) = choose_move_with_stats(&mut board, 2, Player::Red, &h).unwrap();
        assert_eq!(stats, SearchStats { nodes: 56, leaves: 49 });
    }

    #[test]
    fn symmetric_for_both_colors() {
        let mut board = Board::from_rows(&[
            ".......",
            ".......",
            ".......",
            ".......",
            "YYY....",
            "RRR....",
        ])
        .unwrap();
        board.swap_colors();
        let col = choose_move(&mut board, 3, Player::Yellow, &LongestRunHeuristic).unwrap();
        assert_eq!(col, 3);
    }

    // --- Agent tests ---

    #[test]
    fn agent_selects_legal_action() {
        let mut agent = MinimaxAgent::default();
        let state = GameState::initial();
        let legal = state.legal_actions();
        let action = agent.select_action(&state).unwrap();
        assert!(legal.contains(&action), "Action {action} is not legal");
        assert!(agent.last_stats().nodes > 0);
    }

    #[test]
    fn agent_refuses_finished_game() {
        let mut state = GameState::initial();
        for col in 0..4 {
            state.apply_move_mut(col).unwrap();
            if col < 3 {
                state.apply_move_mut(col).unwrap();
            }
        }
        assert!(state.is_terminal());
        let mut agent = MinimaxAgent::new(2);
        assert_eq!(agent.select_action(&state), Err(SearchError::NoLegalMove));
    }

    #[test]
    fn full_game_vs_random_completes() {
        let mut minimax = MinimaxAgent::new(3);
        let mut random = RandomAgent::with_seed(7);
        let mut state = GameState::new(Board::standard(), Player::Yellow);

        while !state.is_terminal() {
            let action = match state.current_player() {
                Player::Red => minimax.select_action(&state).unwrap(),
                Player::Yellow => random.select_action(&state).unwrap(),
            };
            state.apply_move_mut(action).unwrap();
        }

        assert!(matches!(
            state.outcome(),
            Some(GameOutcome::Draw) | Some(GameOutcome::Winner(_))
        ));
    }

    #[test]
    fn name_and_clone() {
        let agent = MinimaxAgent::with_heuristic(2, HeuristicKind::Directional);
        assert_eq!(agent.name(), "Minimax");
        let cloned = agent.clone_agent();
        assert_eq!(cloned.name(), "Minimax");
        assert_eq!(agent.depth(), 2);
    }
}
