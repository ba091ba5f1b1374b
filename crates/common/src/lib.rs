pub mod board;
pub mod model;

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ModelError {
    #[error("unknown cell code {0}")]
    UnknownCell(i64),
    #[error("unknown side {0:?}")]
    UnknownSide(String),
    #[error("unknown winner value {0:?}")]
    UnknownWinner(String),
    #[error("row {row} has {len} cells, expected {expected}")]
    RaggedBoard {
        row: usize,
        len: usize,
        expected: usize,
    },
    #[error("response carries no {0} and no error")]
    MissingField(&'static str),
}
