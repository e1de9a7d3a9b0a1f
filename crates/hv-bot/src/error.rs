use hv_core::{BotId, ItemId};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BotError {
    #[error("cannot assign tasks, bot {0} is busy")]
    BotBusy(BotId),

    #[error("item {item} is not carried by bot {bot}")]
    ItemNotFound {
        bot:  BotId,
        item: ItemId,
    },
}

pub type BotResult<T> = Result<T, BotError>;
