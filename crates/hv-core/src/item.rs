//! Inventory units.

use crate::{CoreError, CoreResult, ItemId, Rgb};

/// One inventory unit.
///
/// Immutable after creation.  Where the item currently is (a cell or a
/// bot's storage) is tracked by whichever container owns the value, never by
/// the item itself.  Moving the `Item` moves the unit.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Item {
    pub id:          ItemId,
    pub quantity:    u32,
    pub name:        String,
    pub color:       Rgb,
    /// Complement of `color`, computed once for label contrast.
    pub label_color: Rgb,
}

impl Item {
    /// Create an item.  Fails if `quantity` is zero.
    pub fn new(id: ItemId, quantity: u32, name: impl Into<String>, color: Rgb) -> CoreResult<Self> {
        if quantity == 0 {
            return Err(CoreError::InvalidQuantity(id));
        }
        Ok(Self {
            id,
            quantity,
            name: name.into(),
            color,
            label_color: color.inverse(),
        })
    }
}
