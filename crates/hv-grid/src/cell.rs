//! A single warehouse cell and its variant-specific contents.

use hv_core::{Coord, Item, ItemId, OrderId, Rgb};

use crate::{GridError, GridResult};

/// Discriminant of a [`Cell`].
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CellKind {
    Entry,
    Interior,
    Exit,
}

impl CellKind {
    /// Fill color used by renderers.
    pub fn color(self) -> Rgb {
        match self {
            CellKind::Entry    => Rgb::new(0xf0, 0xff, 0xff),
            CellKind::Interior => Rgb::new(0xff, 0xf8, 0xdc),
            CellKind::Exit     => Rgb::new(0xf0, 0xf8, 0xff),
        }
    }
}

/// Variant-specific cell state.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CellContents {
    Entry { item: Option<Item> },
    Interior { item: Option<Item> },
    Exit { items: Vec<Item>, order: Option<OrderId> },
}

impl CellContents {
    fn empty(kind: CellKind) -> Self {
        match kind {
            CellKind::Entry    => CellContents::Entry { item: None },
            CellKind::Interior => CellContents::Interior { item: None },
            CellKind::Exit     => CellContents::Exit { items: Vec::new(), order: None },
        }
    }
}

/// One cell of the floor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    pub coord: Coord,
    /// `true` while exactly one in-flight bot task targets this cell.
    pub reserved: bool,
    contents: CellContents,
}

impl Cell {
    /// An empty, unreserved cell of `kind` at `coord`.
    pub fn new(coord: Coord, kind: CellKind) -> Self {
        Self {
            coord,
            reserved: false,
            contents: CellContents::empty(kind),
        }
    }

    pub fn kind(&self) -> CellKind {
        match self.contents {
            CellContents::Entry { .. }    => CellKind::Entry,
            CellContents::Interior { .. } => CellKind::Interior,
            CellContents::Exit { .. }     => CellKind::Exit,
        }
    }

    pub fn contents(&self) -> &CellContents {
        &self.contents
    }

    /// The single item held by an Entry or Interior cell.  Always `None` for
    /// Exit cells; use [`exit_items`][Self::exit_items] there.
    pub fn item(&self) -> Option<&Item> {
        match &self.contents {
            CellContents::Entry { item } | CellContents::Interior { item } => item.as_ref(),
            CellContents::Exit { .. } => None,
        }
    }

    /// `true` if the cell holds at least one item.
    pub fn is_occupied(&self) -> bool {
        match &self.contents {
            CellContents::Entry { item } | CellContents::Interior { item } => item.is_some(),
            CellContents::Exit { items, .. } => !items.is_empty(),
        }
    }

    /// `true` if the cell holds an item with id `id`.
    pub fn holds(&self, id: ItemId) -> bool {
        self.item().is_some_and(|item| item.id == id)
    }

    /// Items accumulated at an Exit cell (empty slice for other kinds).
    pub fn exit_items(&self) -> &[Item] {
        match &self.contents {
            CellContents::Exit { items, .. } => items,
            _ => &[],
        }
    }

    /// Order whose items are being assembled at this Exit cell.
    pub fn exit_order(&self) -> Option<OrderId> {
        match &self.contents {
            CellContents::Exit { order, .. } => *order,
            _ => None,
        }
    }

    /// Store `item`.
    ///
    /// Entry and Interior cells hold one item and fail with
    /// [`GridError::CellOccupied`] when full; Exit cells always append.
    pub fn add_item(&mut self, item: Item) -> GridResult<()> {
        match &mut self.contents {
            CellContents::Entry { item: slot } | CellContents::Interior { item: slot } => {
                if slot.is_some() {
                    return Err(GridError::CellOccupied(self.coord));
                }
                *slot = Some(item);
            }
            CellContents::Exit { items, .. } => items.push(item),
        }
        Ok(())
    }

    /// Take the item out of an Entry or Interior cell.
    ///
    /// Does not touch `reserved`; the caller releases the cell separately.
    pub fn remove_item(&mut self) -> GridResult<Item> {
        match &mut self.contents {
            CellContents::Entry { item } | CellContents::Interior { item } => {
                item.take().ok_or(GridError::CellEmpty(self.coord))
            }
            CellContents::Exit { .. } => Err(GridError::WrongCellKind {
                coord:    self.coord,
                expected: CellKind::Interior,
                found:    CellKind::Exit,
            }),
        }
    }

    /// Bind an Exit cell to `order`.
    pub fn assign_order(&mut self, order: OrderId) -> GridResult<()> {
        if let CellContents::Exit { order: slot, .. } = &mut self.contents {
            *slot = Some(order);
            return Ok(());
        }
        Err(self.not_exit())
    }

    /// Empty an Exit cell for pickup, returning its order and items.
    pub fn take_exit(&mut self) -> GridResult<(Option<OrderId>, Vec<Item>)> {
        if let CellContents::Exit { items, order } = &mut self.contents {
            return Ok((order.take(), std::mem::take(items)));
        }
        Err(self.not_exit())
    }

    fn not_exit(&self) -> GridError {
        GridError::WrongCellKind {
            coord:    self.coord,
            expected: CellKind::Exit,
            found:    self.kind(),
        }
    }
}
