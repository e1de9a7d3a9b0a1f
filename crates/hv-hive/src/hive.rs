//! The `Hive` struct and its tick loop.

use hv_bot::{Bot, BotError, BotTask};
use hv_core::{BotId, Coord, HiveRng, Item, Order, OrderId, Tick};
use hv_grid::{CellKind, Grid};
use tracing::{debug, info, warn};

use crate::dispatch::Dispatch;
use crate::{HiveConfig, HiveError, HiveObserver, HiveResult, NoopObserver, OrderBook, TickSummary};

// ── Assignment candidates ─────────────────────────────────────────────────────

/// What the assignment pass found for one idle bot.
enum Work {
    /// Put down cargo left over from a failed staging attempt.
    Restage(BotTask),
    /// Pick and deliver an order.
    Order(OrderId, Vec<BotTask>),
    /// Fetch an item from an entry cell.
    Retrieve(BotTask),
    /// The bot holds cargo, there is nowhere to put it, and no order to pick.
    Stranded,
    /// Nothing for this bot.
    Nothing,
}

// ── Hive ──────────────────────────────────────────────────────────────────────

/// The dispatcher: sole owner of the floor, the roster, and the order book.
///
/// Each tick runs three phases:
///
/// 1. **Motion**: every bot takes one [`Bot::tick`] step in roster order.
/// 2. **Completion**: tasks that finish during motion are applied to the
///    grid by [`Dispatch`], synchronously, keyed by task variant.
/// 3. **Assignment**: idle bots, in roster order, receive re-staging work,
///    an order, or an entry retrieval, in that priority.
///
/// Create via [`HiveBuilder`][crate::HiveBuilder].
pub struct Hive {
    config:      HiveConfig,
    grid:        Grid,
    bots:        Vec<Bot>,
    orders:      OrderBook,
    rng:         HiveRng,
    clock:       Tick,
    next_bot_id: u32,
}

impl Hive {
    /// Empty roster over a prepared grid.  Validation lives in the builder.
    pub(crate) fn from_parts(config: HiveConfig, grid: Grid) -> Self {
        Self {
            rng:         HiveRng::new(config.seed),
            config,
            grid,
            bots:        Vec::new(),
            orders:      OrderBook::new(),
            clock:       Tick::ZERO,
            next_bot_id: 0,
        }
    }

    // ── Roster ────────────────────────────────────────────────────────────

    /// Place a new idle bot at `position` and return its id.
    pub fn add_bot(&mut self, name: impl Into<String>, position: Coord) -> HiveResult<BotId> {
        if !self.grid.contains(position) {
            return Err(HiveError::Config(format!("bot position {position} outside grid")));
        }
        let id = BotId(self.next_bot_id);
        self.next_bot_id += 1;
        let bot = Bot::new(id, name, position);
        debug!(bot = %id, name = %bot.name, at = %position, "bot added");
        self.bots.push(bot);
        Ok(id)
    }

    /// Take a bot off the floor.
    ///
    /// # Errors
    ///
    /// [`BotError::BotBusy`] if the bot has queued tasks or carries items;
    /// [`HiveError::UnknownBot`] if no such bot exists.
    pub fn remove_bot(&mut self, id: BotId) -> HiveResult<Bot> {
        let idx = self.bot_index(id)?;
        let bot = &self.bots[idx];
        if !bot.is_idle() || !bot.storage().is_empty() {
            return Err(BotError::BotBusy(id).into());
        }
        debug!(bot = %id, "bot removed");
        Ok(self.bots.remove(idx))
    }

    fn bot_index(&self, id: BotId) -> HiveResult<usize> {
        self.bots
            .iter()
            .position(|b| b.id == id)
            .ok_or(HiveError::UnknownBot(id))
    }

    // ── Intake ────────────────────────────────────────────────────────────

    /// Admit `item` at the first free entry cell in scan order.
    ///
    /// # Errors
    ///
    /// [`HiveError::NoFreeEntryCell`] if every entry cell holds an item.
    /// Callers typically retry on a later tick.
    pub fn add_item(&mut self, item: Item) -> HiveResult<Coord> {
        let cell = self.grid.first_free_entry().ok_or(HiveError::NoFreeEntryCell)?;
        debug!(item = %item.id, name = %item.name, at = %cell, "item admitted");
        self.grid.add_item(cell, item)?;
        Ok(cell)
    }

    /// Queue `order` for assignment.  Never fails.
    pub fn add_order(&mut self, order: Order) {
        debug!(order = %order.id, items = order.items.len(), "order queued");
        self.orders.push(order);
    }

    // ── Decomposition ─────────────────────────────────────────────────────

    /// Plan `order` as a pick tour starting from `origin`.
    ///
    /// Each item occurrence is matched to the nearest unreserved interior
    /// cell holding it (distinct cells for repeated ids); the picks are
    /// sequenced by the annealing tour solver and followed by a delivery to
    /// the free exit nearest the last pick.  Returns
    /// `[PICK_ITEM × N, PLACE_ORDER]`.
    ///
    /// Reserves nothing and leaves the order's status unchanged; the
    /// assignment pass does both when it hands the list to a bot.
    ///
    /// # Errors
    ///
    /// - [`HiveError::UnknownOrder`]
    /// - [`HiveError::ItemUnavailable`] if some item is not staged in a free
    ///   interior cell (still at an entry, or in transit).
    /// - [`HiveError::NoFreeExit`]
    pub fn decompose_order(&mut self, order_id: OrderId, origin: Coord) -> HiveResult<Vec<BotTask>> {
        let items = self
            .orders
            .get(order_id)
            .ok_or(HiveError::UnknownOrder(order_id))?
            .items
            .clone();

        let mut claimed: Vec<Coord> = Vec::with_capacity(items.len());
        for &item in &items {
            let cell = self
                .grid
                .find_nearest_holding(origin, item, &claimed)
                .ok_or(HiveError::ItemUnavailable { order: order_id, item })?;
            claimed.push(cell);
        }

        // Point 0 is the bot; point k is claimed[k - 1].
        let mut points = Vec::with_capacity(claimed.len() + 1);
        points.push(origin);
        points.extend_from_slice(&claimed);
        let tour = hv_tour::solve(&points, self.config.annealing(), &mut self.rng)?;

        let mut tasks: Vec<BotTask> = tour
            .iter()
            .skip(1)
            .map(|&k| BotTask::PickItem {
                target: claimed[k - 1],
                item:   items[k - 1],
                order:  order_id,
            })
            .collect();

        let last = tasks.last().map_or(origin, BotTask::target);
        let exit = self
            .grid
            .find_nearest_free_exit(last)
            .ok_or(HiveError::NoFreeExit(order_id))?;
        tasks.push(BotTask::PlaceOrder { target: exit, order: order_id });
        Ok(tasks)
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Advance one tick without observer callbacks.
    pub fn tick(&mut self) -> HiveResult<TickSummary> {
        self.step(&mut NoopObserver)
    }

    /// Run from the current tick to `config.end_tick()`.
    ///
    /// Stops at the first failing tick and returns its error; the hive stays
    /// consistent and can be stepped again.
    pub fn run<O: HiveObserver>(&mut self, observer: &mut O) -> HiveResult<()> {
        while self.clock < self.config.end_tick() {
            self.step(observer)?;
        }
        observer.on_sim_end(self.clock);
        Ok(())
    }

    /// Run exactly `n` ticks, ignoring `end_tick`.
    pub fn run_ticks<O: HiveObserver>(&mut self, n: u64, observer: &mut O) -> HiveResult<()> {
        for _ in 0..n {
            self.step(observer)?;
        }
        Ok(())
    }

    /// Advance one tick, reporting to `observer`.
    ///
    /// The clock advances even when the tick fails.  A completion error is
    /// returned only after every bot has moved, and skips that tick's
    /// assignment pass.
    pub fn step<O: HiveObserver>(&mut self, observer: &mut O) -> HiveResult<TickSummary> {
        let now = self.clock;
        observer.on_tick_start(now);
        let mut summary = TickSummary { tick: now, ..TickSummary::default() };

        // ── Phases 1 + 2: motion and completion ──────────────────────────
        let mut first_err: Option<HiveError> = None;
        {
            let mut dispatch = Dispatch {
                grid:     &mut self.grid,
                orders:   &mut self.orders,
                observer: &mut *observer,
                summary:  &mut summary,
                tick:     now,
            };
            for bot in &mut self.bots {
                match bot.tick(&mut dispatch) {
                    Ok(step) => {
                        if step.moved {
                            dispatch.summary.moving += 1;
                        }
                    }
                    Err(e) => {
                        warn!(tick = %now, bot = %bot.id, error = %e, "task completion failed");
                        if first_err.is_none() {
                            first_err = Some(e);
                        }
                    }
                }
            }
        }

        // ── Phase 3: assignment ──────────────────────────────────────────
        let outcome = match first_err {
            Some(e) => Err(e),
            None    => self.assign(&mut summary),
        };

        observer.on_tick_end(now, &summary);
        let interval = self.config.output_interval_ticks;
        if interval > 0 && now.0.is_multiple_of(interval) {
            observer.on_snapshot(now, &self.grid, &self.bots);
        }
        self.clock = now.next();

        outcome.map(|()| summary)
    }

    // ── Assignment pass ───────────────────────────────────────────────────

    fn assign(&mut self, summary: &mut TickSummary) -> HiveResult<()> {
        for idx in 0..self.bots.len() {
            if !self.bots[idx].is_idle() {
                continue;
            }
            let tasks = match self.find_work(idx)? {
                Work::Restage(task) | Work::Retrieve(task) => vec![task],
                Work::Order(order, tasks) => {
                    self.orders.start_picking(order);
                    info!(order = %order, bot = %self.bots[idx].id, picks = tasks.len() - 1,
                          "order assigned");
                    tasks
                }
                // A later bot may still have work.
                Work::Stranded | Work::Nothing => continue,
            };

            // Reserve before the next bot is considered.
            for task in &tasks {
                self.grid.reserve(task.target())?;
            }
            let bot = &mut self.bots[idx];
            debug!(bot = %bot.id, first = %tasks[0], count = tasks.len(), "tasks assigned");
            bot.assign_tasks(tasks)?;
            summary.assigned += 1;
        }
        Ok(())
    }

    /// Highest-priority work for the idle bot at `idx`.
    fn find_work(&mut self, idx: usize) -> HiveResult<Work> {
        let bot = &self.bots[idx];
        let (id, origin) = (bot.id, bot.position());

        // ── (0) loose cargo ───────────────────────────────────────────────
        // Without a free slot the bot can still pick an order; picking
        // empties interior cells, and the cargo is re-staged afterwards.
        let loose = bot.storage().first().map(|i| i.id);
        if let Some(item) = loose {
            if let Some(slot) = self.grid.find_nearest_unoccupied_interior(origin) {
                return Ok(Work::Restage(BotTask::PlaceItem { target: slot, item }));
            }
        }

        // ── (a) oldest decomposable order ─────────────────────────────────
        if self.orders.pending_len() > 0 {
            for order in self.orders.pending() {
                match self.decompose_order(order, origin) {
                    Ok(tasks) => return Ok(Work::Order(order, tasks)),
                    Err(e @ (HiveError::ItemUnavailable { .. } | HiveError::NoFreeExit(_))) => {
                        debug!(order = %order, reason = %e, "order deferred");
                    }
                    Err(e) => return Err(e),
                }
            }
        }

        if let Some(item) = loose {
            warn!(bot = %id, item = %item, "no staging space for carried item");
            return Ok(Work::Stranded);
        }

        // ── (b) nearest waiting entry ─────────────────────────────────────
        if let Some(cell) = self.grid.find_nearest_occupied_entry(origin) {
            if let Some(item) = self.grid.cell(cell)?.item().map(|i| i.id) {
                return Ok(Work::Retrieve(BotTask::RetrieveItem { target: cell, item }));
            }
        }

        Ok(Work::Nothing)
    }

    // ── Exit pickup ───────────────────────────────────────────────────────

    /// Remove everything waiting at exit `coord` from the simulation.
    ///
    /// The cell's order binding is cleared; the order itself stays in the
    /// book as history.
    ///
    /// # Errors
    ///
    /// [`HiveError::ExitInUse`] while a delivery to the cell is in flight;
    /// [`GridError::WrongCellKind`][hv_grid::GridError::WrongCellKind] if
    /// `coord` is not an exit.
    pub fn collect_exit(&mut self, coord: Coord) -> HiveResult<Vec<Item>> {
        let cell = self.grid.cell_mut(coord)?;
        if cell.kind() == CellKind::Exit && cell.reserved {
            return Err(HiveError::ExitInUse(coord));
        }
        let (order, items) = cell.take_exit()?;
        if let Some(order) = order {
            info!(order = %order, exit = %coord, items = items.len(), "order collected");
        }
        Ok(items)
    }

    /// As [`collect_exit`][Self::collect_exit], locating the exit bound to
    /// `order`.
    pub fn collect_order(&mut self, order: OrderId) -> HiveResult<Vec<Item>> {
        let coord = self
            .grid
            .cells_of(CellKind::Exit)
            .find(|c| c.exit_order() == Some(order))
            .map(|c| c.coord)
            .ok_or(HiveError::OrderNotAtExit(order))?;
        self.collect_exit(coord)
    }

    // ── Read-only queries ─────────────────────────────────────────────────

    pub fn config(&self) -> &HiveConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn bots(&self) -> &[Bot] {
        &self.bots
    }

    pub fn bot(&self, id: BotId) -> Option<&Bot> {
        self.bots.iter().find(|b| b.id == id)
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }

    #[cfg(test)]
    pub(crate) fn bot_mut(&mut self, id: BotId) -> Option<&mut Bot> {
        self.bots.iter_mut().find(|b| b.id == id)
    }

    pub fn orders(&self) -> &OrderBook {
        &self.orders
    }

    pub fn order(&self, id: OrderId) -> Option<&Order> {
        self.orders.get(id)
    }

    /// The tick the next call to [`tick`][Self::tick] will execute.
    pub fn tick_count(&self) -> Tick {
        self.clock
    }

    /// Items resting on interior cells, in scan order.
    pub fn staged_items(&self) -> impl Iterator<Item = (Coord, &Item)> + '_ {
        self.grid
            .cells_of(CellKind::Interior)
            .filter_map(|c| c.item().map(|i| (c.coord, i)))
    }

    /// Forecast path of one bot (`None` if idle or unknown).
    pub fn trajectory(&self, id: BotId) -> Option<Vec<Coord>> {
        self.bot(id).and_then(Bot::extrapolate_trajectory)
    }

    /// Forecast paths for the whole roster, in roster order.
    pub fn forecast(&self) -> Vec<(BotId, Option<Vec<Coord>>)> {
        #[cfg(not(feature = "parallel"))]
        {
            self.bots
                .iter()
                .map(|b| (b.id, b.extrapolate_trajectory()))
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            self.bots
                .par_iter()
                .map(|b| (b.id, b.extrapolate_trajectory()))
                .collect()
        }
    }
}
