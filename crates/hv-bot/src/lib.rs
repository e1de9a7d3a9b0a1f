//! `hv-bot`: mobile workers and their task queues.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                   |
//! |---------------|------------------------------------------------------------|
//! | [`direction`] | `Direction`, heading and the axis-priority rule            |
//! | [`task`]      | `BotTask`, the four task variants                          |
//! | [`bot`]       | `Bot`, `BotState`, `BotStep`, `TaskHandler`                |
//! | [`error`]     | `BotError`, `BotResult<T>`                                 |
//!
//! # Movement model
//!
//! Bots move one cell per tick, axis-aligned, always closing the X gap
//! before the Y gap.  A call to [`Bot::tick`]:
//!
//! 1. completes every queued task whose target is the current cell,
//! 2. steps one cell toward the front task's target,
//! 3. completes every task whose target is the new cell.
//!
//! Each completion pops the task and hands it to a [`TaskHandler`] before
//! the next task is looked at, so several tasks at one coordinate finish in
//! one tick and the handler can append follow-up work that is considered
//! immediately.
//!
//! Bots never touch grid cells.  The handler (the dispatcher) performs every
//! cell mutation using the completed task's coordinates.

pub mod bot;
pub mod direction;
pub mod error;
pub mod task;

#[cfg(test)]
mod tests;

pub use bot::{Bot, BotState, BotStep, TaskHandler};
pub use direction::Direction;
pub use error::{BotError, BotResult};
pub use task::BotTask;
