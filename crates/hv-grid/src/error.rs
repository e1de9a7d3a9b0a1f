//! Grid error type.

use thiserror::Error;

use hv_core::Coord;

use crate::CellKind;

/// Errors produced by `hv-grid`.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("cell {0} is outside the grid")]
    OutOfBounds(Coord),

    #[error("cell {0} already holds an item")]
    CellOccupied(Coord),

    #[error("cell {0} holds no item")]
    CellEmpty(Coord),

    #[error("cell {coord} is {found:?}, expected {expected:?}")]
    WrongCellKind {
        coord:    Coord,
        expected: CellKind,
        found:    CellKind,
    },

    #[error("cell {0} is already reserved by another task")]
    AlreadyReserved(Coord),

    #[error("invalid grid layout: {0}")]
    InvalidLayout(String),
}

pub type GridResult<T> = Result<T, GridError>;
