//! Fulfillment requests.

use std::fmt;

use crate::{ItemId, OrderId};

/// Lifecycle of an [`Order`].
///
/// `Init → Picking → Fulfilled`; transitions are driven by the dispatcher.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OrderStatus {
    /// Queued, waiting for a bot and for every item to be staged.
    #[default]
    Init,
    /// Decomposed into pick tasks and assigned to a bot.
    Picking,
    /// Every item has been delivered to the order's Exit cell.
    Fulfilled,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            OrderStatus::Init      => "INIT",
            OrderStatus::Picking   => "PICKING",
            OrderStatus::Fulfilled => "FULFILLED",
        })
    }
}

/// A request to assemble `items` at an Exit cell.
///
/// `items` may contain the same id more than once; each occurrence is one
/// unit to pick.  De-duplication, if wanted, is the caller's job.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Order {
    pub id:     OrderId,
    pub items:  Vec<ItemId>,
    pub status: OrderStatus,
}

impl Order {
    /// Create an order in `Init` status.
    pub fn new(id: OrderId, items: impl IntoIterator<Item = ItemId>) -> Self {
        Self {
            id,
            items:  items.into_iter().collect(),
            status: OrderStatus::Init,
        }
    }

    /// `true` if every id in `self.items` (counted with multiplicity) is
    /// present in `delivered`.
    pub fn is_satisfied_by<'a>(&self, delivered: impl IntoIterator<Item = &'a ItemId>) -> bool {
        let mut remaining = self.items.clone();
        for id in delivered {
            if let Some(pos) = remaining.iter().position(|want| want == id) {
                remaining.swap_remove(pos);
            }
        }
        remaining.is_empty()
    }
}
