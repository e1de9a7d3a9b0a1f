//! Which coordinates become Entry, Exit, or Interior cells.

use hv_core::Coord;

use crate::CellKind;

/// Placement of the Entry and Exit cells on a `width × height` floor.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridLayout {
    /// Entry cells along the left column and top row, Exit cells along the
    /// right column and bottom row, Interior everywhere else.  The top-right
    /// corner is an Entry and the bottom-left corner an Exit.
    #[default]
    Perimeter,

    /// Exactly the listed Entry and Exit cells; every other cell is Interior.
    Explicit {
        entries: Vec<Coord>,
        exits:   Vec<Coord>,
    },
}

impl GridLayout {
    /// Kind of the cell at `coord` on a `width × height` floor.
    ///
    /// `coord` is assumed to be in bounds; validation happens in
    /// [`Grid::new`][crate::Grid::new].
    pub fn kind_at(&self, coord: Coord, width: i32, height: i32) -> CellKind {
        match self {
            GridLayout::Perimeter => {
                let bottom = coord.y == height - 1;
                if (coord.x == 0 || coord.y == 0) && !bottom {
                    CellKind::Entry
                } else if coord.x == width - 1 || bottom {
                    CellKind::Exit
                } else {
                    CellKind::Interior
                }
            }
            GridLayout::Explicit { entries, exits } => {
                if entries.contains(&coord) {
                    CellKind::Entry
                } else if exits.contains(&coord) {
                    CellKind::Exit
                } else {
                    CellKind::Interior
                }
            }
        }
    }
}
