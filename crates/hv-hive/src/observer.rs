//! Observer hooks for progress reporting and data collection.

use hv_bot::{Bot, BotTask};
use hv_core::{BotId, Order, Tick};
use hv_grid::Grid;

/// Counters for one tick, handed to [`HiveObserver::on_tick_end`] and
/// returned from [`Hive::tick`][crate::Hive::tick].
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct TickSummary {
    pub tick:      Tick,
    /// Bots that changed cell.
    pub moving:    usize,
    /// Tasks completed across all bots.
    pub completed: usize,
    /// Idle bots that received a new task list.
    pub assigned:  usize,
    /// Orders that reached FULFILLED.
    pub fulfilled: usize,
}

/// Callbacks invoked by the [`Hive`][crate::Hive] tick loop.
///
/// Every method defaults to a no-op.
///
/// # Example: delivery log
///
/// ```rust,ignore
/// struct Deliveries(Vec<(Tick, OrderId)>);
///
/// impl HiveObserver for Deliveries {
///     fn on_order_fulfilled(&mut self, tick: Tick, order: &Order) {
///         self.0.push((tick, order.id));
///     }
/// }
/// ```
pub trait HiveObserver {
    /// Called before any bot moves.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after the dispatcher has applied a completed task.
    fn on_task_completed(&mut self, _tick: Tick, _bot: BotId, _task: &BotTask) {}

    /// Called when a delivery satisfies `order`.
    fn on_order_fulfilled(&mut self, _tick: Tick, _order: &Order) {}

    /// Called at the end of every tick, including ticks that return an error.
    fn on_tick_end(&mut self, _tick: Tick, _summary: &TickSummary) {}

    /// Called every `config.output_interval_ticks` ticks with read-only
    /// access to the floor and the roster.
    fn on_snapshot(&mut self, _tick: Tick, _grid: &Grid, _bots: &[Bot]) {}

    /// Called once when [`Hive::run`][crate::Hive::run] finishes.
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`HiveObserver`] that ignores everything.
pub struct NoopObserver;

impl HiveObserver for NoopObserver {}
