use crate::game::{Board, Player};

/// Forward directions scanned by the run heuristics: horizontal, vertical,
/// diagonal (top-left to bottom-right), diagonal (bottom-left to top-right).
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (-1, 1)];

/// Points per disc of difference between the two longest runs.
pub const RUN_WEIGHT: i32 = 5;

/// Trait for evaluating a board position from a player's perspective.
pub trait Heuristic: Send {
    fn evaluate(&self, board: &Board, player: Player) -> i32;

    fn name(&self) -> &str;
}

/// Which heuristic a search should use; selectable from config.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum HeuristicKind {
    #[default]
    LongestRun,
    Directional,
}

impl HeuristicKind {
    pub fn build(self) -> Box<dyn Heuristic> {
        match self {
            HeuristicKind::LongestRun => Box::new(LongestRunHeuristic),
            HeuristicKind::Directional => Box::new(DirectionalRunHeuristic),
        }
    }
}

/// Length of the run of `player` discs starting at `(row, col)` and walking
/// forward along `dir`.
fn run_from(board: &Board, player: Player, row: usize, col: usize, dir: (isize, isize)) -> usize {
    let cell = player.to_cell();
    let (mut r, mut c) = (row as isize, col as isize);
    let mut count = 0;
    while r >= 0
        && c >= 0
        && (r as usize) < board.rows()
        && (c as usize) < board.cols()
        && board.get(r as usize, c as usize) == cell
    {
        count += 1;
        r += dir.0;
        c += dir.1;
    }
    count
}

/// Longest forward run of `player` along one direction, over every start cell.
fn longest_run_along(board: &Board, player: Player, dir: (isize, isize)) -> usize {
    let mut best = 0;
    for row in 0..board.rows() {
        for col in 0..board.cols() {
            best = best.max(run_from(board, player, row, col, dir));
        }
    }
    best
}

/// Longest run of `player` discs in any of the four directions.
pub fn longest_run(board: &Board, player: Player) -> usize {
    DIRECTIONS
        .iter()
        .map(|&dir| longest_run_along(board, player, dir))
        .max()
        .unwrap_or(0)
}

/// Scores `5 * (own longest run - opponent longest run)`.
///
/// Purely static: it knows nothing about whose turn it is.
pub struct LongestRunHeuristic;

impl Heuristic for LongestRunHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i32 {
        let own = longest_run(board, player) as i32;
        let opp = longest_run(board, player.other()) as i32;
        RUN_WEIGHT * (own - opp)
    }

    fn name(&self) -> &str {
        "longest-run"
    }
}

/// Per-direction variant: the run difference is taken separately along each
/// of the four directions and the four terms are summed.
pub struct DirectionalRunHeuristic;

impl Heuristic for DirectionalRunHeuristic {
    fn evaluate(&self, board: &Board, player: Player) -> i32 {
        DIRECTIONS
            .iter()
            .map(|&dir| {
                let own = longest_run_along(board, player, dir) as i32;
                let opp = longest_run_along(board, player.other(), dir) as i32;
                RUN_WEIGHT * (own - opp)
            })
            .sum()
    }

    fn name(&self) -> &str {
        "directional"
    }
}
