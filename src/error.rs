use thiserror::Error;

use crate::cell::Family;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum LifeError {
    #[error("unexpected character {0:?} in board text")]
    InvalidInputCharacter(char),

    #[error("board text is empty")]
    EmptyInput,

    #[error("line {line} has {found} cells, expected {expected}")]
    JaggedInput {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("({x}, {y}) is outside the {height}x{width} board")]
    OutOfBounds {
        x: isize,
        y: isize,
        height: usize,
        width: usize,
    },

    #[error("{expected} cell evolved with a {found} neighbour")]
    MixedFamilyNeighbors { expected: Family, found: Family },

    #[error("cannot place a {found} cell on a {expected} board")]
    FamilyMismatch { expected: Family, found: Family },

    #[error("cannot place a border cell at ({x}, {y})")]
    BorderCell { x: isize, y: isize },

    #[error("unknown rule family {0:?}")]
    UnknownFamily(String),
}

pub type Result<T, E = LifeError> = std::result::Result<T, E>;
