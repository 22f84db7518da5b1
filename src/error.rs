use std::path::PathBuf;

/// Errors that can occur when applying a move to a board or game.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MoveError {
    #[error("column {column} is full")]
    ColumnFull { column: usize },

    #[error("column {column} is out of range (board has {cols} columns)")]
    InvalidColumn { column: usize, cols: usize },

    #[error("cannot drop an empty cell")]
    EmptyDisc,

    #[error("game is already over")]
    GameOver,

    #[error("failed to parse board: {0}")]
    Parse(String),
}

/// Errors that can occur while searching for a move.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    #[error("no legal move: the board is full")]
    NoLegalMove,
}

/// Errors that can occur while running matches between agents.
#[derive(Debug, thiserror::Error)]
pub enum ArenaError {
    #[error("agent {agent} selected illegal column {column}: {source}")]
    IllegalMove {
        agent: String,
        column: usize,
        source: MoveError,
    },

    #[error("search failed: {0}")]
    Search(#[from] SearchError),
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse TOML: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("config validation error: {0}")]
    Validation(String),
}
