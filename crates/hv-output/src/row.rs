//! Plain data rows written by output backends.

use hv_bot::Bot;
use hv_core::Tick;
use hv_hive::TickSummary;

/// One bot's state at a snapshot tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BotSnapshotRow {
    pub bot_id:    u32,
    pub name:      String,
    pub tick:      u64,
    pub x:         i32,
    pub y:         i32,
    /// `STOPPED`, `UP`, `DOWN`, `LEFT` or `RIGHT`.
    pub direction: String,
    /// Label of the task in progress; empty when idle.
    pub task:      &'static str,
    /// Target of the task in progress; `None` when idle.
    pub target:    Option<(i32, i32)>,
    pub queued:    u32,
    pub carried:   u32,
}

impl BotSnapshotRow {
    pub fn from_bot(tick: Tick, bot: &Bot) -> Self {
        let current = bot.current_task();
        Self {
            bot_id:    bot.id.0,
            name:      bot.name.clone(),
            tick:      tick.0,
            x:         bot.position().x,
            y:         bot.position().y,
            direction: bot.direction().to_string(),
            task:      current.map_or("", |t| t.label()),
            target:    current.map(|t| (t.target().x, t.target().y)),
            queued:    bot.tasks().len() as u32,
            carried:   bot.storage().len() as u32,
        }
    }
}

/// Counters for one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:             u64,
    pub moving_bots:      u64,
    pub completed_tasks:  u64,
    pub assigned_bots:    u64,
    pub fulfilled_orders: u64,
}

impl From<&TickSummary> for TickSummaryRow {
    fn from(s: &TickSummary) -> Self {
        Self {
            tick:             s.tick.0,
            moving_bots:      s.moving as u64,
            completed_tasks:  s.completed as u64,
            assigned_bots:    s.assigned as u64,
            fulfilled_orders: s.fulfilled as u64,
        }
    }
}
