//! Bot tasks.

use std::fmt;

use hv_core::{Coord, ItemId, OrderId};

/// One unit of bot work.  Every variant carries the cell the bot must reach.
///
/// The set is closed: the dispatcher matches it exhaustively, so a new
/// variant cannot be added without handling it there.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BotTask {
    /// Go to an Entry cell and pick up its item.
    RetrieveItem { target: Coord, item: ItemId },

    /// Go to an Interior cell and drop off a carried item.
    PlaceItem { target: Coord, item: ItemId },

    /// Go to an Interior cell holding one of `order`'s items and pick it up.
    PickItem { target: Coord, item: ItemId, order: OrderId },

    /// Go to an Exit cell and drop off every carried item of `order`.
    PlaceOrder { target: Coord, order: OrderId },
}

impl BotTask {
    #[inline]
    pub fn target(&self) -> Coord {
        match *self {
            BotTask::RetrieveItem { target, .. }
            | BotTask::PlaceItem { target, .. }
            | BotTask::PickItem { target, .. }
            | BotTask::PlaceOrder { target, .. } => target,
        }
    }

    /// Short upper-case label, used in logs and output files.
    pub fn label(&self) -> &'static str {
        match self {
            BotTask::RetrieveItem { .. } => "RETRIEVE_ITEM",
            BotTask::PlaceItem { .. }    => "PLACE_ITEM",
            BotTask::PickItem { .. }     => "PICK_ITEM",
            BotTask::PlaceOrder { .. }   => "PLACE_ORDER",
        }
    }
}

impl fmt::Display for BotTask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} @ {}", self.label(), self.target())
    }
}
