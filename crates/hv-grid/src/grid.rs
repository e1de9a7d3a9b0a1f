//! The `Grid`: cell storage, reservations, and nearest-cell queries.
//!
//! # Data layout
//!
//! Cells live in one `Vec<Cell>` in row-major order:
//!
//! ```text
//! index = y * width + x
//! ```
//!
//! Row-major order is also the **scan order**: every query that has to pick
//! between equally good cells returns the first one found in this order.
//!
//! # Nearest-cell queries
//!
//! A linear scan over all cells, filtered by kind, `reserved == false`, and
//! an occupancy predicate, minimising Manhattan distance to the origin.  The
//! floor is small (tens of cells per side) so a scan is cheaper than keeping
//! a spatial index consistent through every item move.

use hv_core::{Coord, Item, ItemId};

use crate::{Cell, CellKind, GridError, GridLayout, GridResult};

/// A fixed `width × height` rectangle of typed cells.
#[derive(Clone, Debug)]
pub struct Grid {
    width:  i32,
    height: i32,
    cells:  Vec<Cell>,
}

impl Grid {
    /// Build an empty floor with cell kinds taken from `layout`.
    pub fn new(width: i32, height: i32, layout: &GridLayout) -> GridResult<Self> {
        if width < 1 || height < 1 {
            return Err(GridError::InvalidLayout(format!(
                "dimensions must be positive, got {width}x{height}"
            )));
        }
        if let GridLayout::Explicit { entries, exits } = layout {
            let in_bounds = |c: &Coord| c.x >= 0 && c.y >= 0 && c.x < width && c.y < height;
            if let Some(c) = entries.iter().chain(exits).find(|c| !in_bounds(c)) {
                return Err(GridError::InvalidLayout(format!("cell {c} is outside {width}x{height}")));
            }
            if let Some(c) = entries.iter().find(|c| exits.contains(c)) {
                return Err(GridError::InvalidLayout(format!("cell {c} is both entry and exit")));
            }
        }

        let cells = (0..height)
            .flat_map(|y| (0..width).map(move |x| Coord::new(x, y)))
            .map(|coord| Cell::new(coord, layout.kind_at(coord, width, height)))
            .collect();

        Ok(Self { width, height, cells })
    }

    // ── Dimensions ────────────────────────────────────────────────────────

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    pub fn contains(&self, coord: Coord) -> bool {
        coord.x >= 0 && coord.y >= 0 && coord.x < self.width && coord.y < self.height
    }

    #[inline]
    fn index(&self, coord: Coord) -> GridResult<usize> {
        if !self.contains(coord) {
            return Err(GridError::OutOfBounds(coord));
        }
        Ok((coord.y * self.width + coord.x) as usize)
    }

    // ── Cell access ───────────────────────────────────────────────────────

    pub fn cell(&self, coord: Coord) -> GridResult<&Cell> {
        let i = self.index(coord)?;
        Ok(&self.cells[i])
    }

    pub fn cell_mut(&mut self, coord: Coord) -> GridResult<&mut Cell> {
        let i = self.index(coord)?;
        Ok(&mut self.cells[i])
    }

    /// All cells in scan order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter()
    }

    /// All cells of `kind` in scan order.
    pub fn cells_of(&self, kind: CellKind) -> impl Iterator<Item = &Cell> + '_ {
        self.cells.iter().filter(move |c| c.kind() == kind)
    }

    /// Total number of items stored on the floor, Exit lists included.
    pub fn item_count(&self) -> usize {
        self.cells
            .iter()
            .map(|c| if c.kind() == CellKind::Exit { c.exit_items().len() } else { c.is_occupied() as usize })
            .sum()
    }

    // ── Mutation ──────────────────────────────────────────────────────────

    /// Store `item` at `coord` (see [`Cell::add_item`]).
    pub fn add_item(&mut self, coord: Coord, item: Item) -> GridResult<()> {
        self.cell_mut(coord)?.add_item(item)
    }

    /// Take the item from an Entry or Interior cell.  The reservation flag
    /// is left as-is.
    pub fn remove_item(&mut self, coord: Coord) -> GridResult<Item> {
        self.cell_mut(coord)?.remove_item()
    }

    /// Mark `coord` as the target of an in-flight task.
    pub fn reserve(&mut self, coord: Coord) -> GridResult<()> {
        let cell = self.cell_mut(coord)?;
        if cell.reserved {
            return Err(GridError::AlreadyReserved(coord));
        }
        cell.reserved = true;
        Ok(())
    }

    /// Clear the reservation on `coord`.  Releasing a free cell is a no-op.
    pub fn release(&mut self, coord: Coord) -> GridResult<()> {
        self.cell_mut(coord)?.reserved = false;
        Ok(())
    }

    // ── Queries ───────────────────────────────────────────────────────────

    /// The unreserved cell satisfying `pred` nearest to `origin`, ties broken
    /// by scan order.
    pub fn nearest<P>(&self, origin: Coord, pred: P) -> Option<Coord>
    where
        P: Fn(&Cell) -> bool,
    {
        self.cells
            .iter()
            .filter(|c| !c.reserved && pred(c))
            // `min_by_key` returns the first of several equal minima.
            .min_by_key(|c| origin.manhattan(c.coord))
            .map(|c| c.coord)
    }

    /// Nearest empty, unreserved Interior cell (a staging slot).
    pub fn find_nearest_unoccupied_interior(&self, origin: Coord) -> Option<Coord> {
        self.nearest(origin, |c| c.kind() == CellKind::Interior && !c.is_occupied())
    }

    /// Nearest Entry cell holding an item that no bot is fetching yet.
    pub fn find_nearest_occupied_entry(&self, origin: Coord) -> Option<Coord> {
        self.nearest(origin, |c| c.kind() == CellKind::Entry && c.is_occupied())
    }

    /// Nearest Exit cell that is empty, unbound, and unreserved.
    pub fn find_nearest_free_exit(&self, origin: Coord) -> Option<Coord> {
        self.nearest(origin, |c| {
            c.kind() == CellKind::Exit && !c.is_occupied() && c.exit_order().is_none()
        })
    }

    /// Nearest unreserved Interior cell holding `item`, skipping `exclude`.
    pub fn find_nearest_holding(&self, origin: Coord, item: ItemId, exclude: &[Coord]) -> Option<Coord> {
        self.nearest(origin, |c| {
            c.kind() == CellKind::Interior && c.holds(item) && !exclude.contains(&c.coord)
        })
    }

    /// First Entry cell in scan order that can accept a new item.
    pub fn first_free_entry(&self) -> Option<Coord> {
        self.cells
            .iter()
            .find(|c| c.kind() == CellKind::Entry && !c.reserved && !c.is_occupied())
            .map(|c| c.coord)
    }
}
