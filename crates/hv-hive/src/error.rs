use hv_bot::BotError;
use hv_core::{BotId, Coord, ItemId, OrderId};
use hv_grid::GridError;
use hv_tour::TourError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum HiveError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("bot error: {0}")]
    Bot(#[from] BotError),

    #[error("tour error: {0}")]
    Tour(#[from] TourError),

    #[error("all entry cells are occupied")]
    NoFreeEntryCell,

    #[error("no free interior cell to stage item {item} carried by bot {bot}")]
    NoStagingSpace {
        bot:  BotId,
        item: ItemId,
    },

    #[error("order {order} needs item {item}, which is not staged in any free interior cell")]
    ItemUnavailable {
        order: OrderId,
        item:  ItemId,
    },

    #[error("no free exit cell for order {0}")]
    NoFreeExit(OrderId),

    #[error("order {0} not found")]
    UnknownOrder(OrderId),

    #[error("bot {0} not found")]
    UnknownBot(BotId),

    #[error("exit cell {0} has a delivery in flight")]
    ExitInUse(Coord),

    #[error("order {0} is not waiting at any exit cell")]
    OrderNotAtExit(OrderId),
}

pub type HiveResult<T> = Result<T, HiveError>;
