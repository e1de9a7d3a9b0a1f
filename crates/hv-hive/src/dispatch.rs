//! Applying completed tasks to the floor.
//!
//! [`Dispatch`] is the [`TaskHandler`] the hive hands to every
//! [`Bot::tick`] call.  It borrows exactly the state a completion may touch,
//! so the bot itself can be borrowed mutably alongside it.

use hv_bot::{Bot, BotTask, TaskHandler};
use hv_core::{Coord, ItemId, OrderId, OrderStatus, Tick};
use hv_grid::Grid;
use tracing::{debug, info, warn};

use crate::{HiveError, HiveObserver, HiveResult, OrderBook, TickSummary};

/// Completion context for one tick.
pub struct Dispatch<'a, O: HiveObserver + ?Sized> {
    pub grid:     &'a mut Grid,
    pub orders:   &'a mut OrderBook,
    pub observer: &'a mut O,
    pub summary:  &'a mut TickSummary,
    pub tick:     Tick,
}

impl<O: HiveObserver + ?Sized> TaskHandler for Dispatch<'_, O> {
    type Error = HiveError;

    fn on_task_completed(&mut self, bot: &mut Bot, task: BotTask) -> HiveResult<()> {
        match task {
            BotTask::RetrieveItem { target, item } => self.retrieve(bot, target, item)?,
            BotTask::PlaceItem { target, item }    => self.place(bot, target, item)?,
            BotTask::PickItem { target, item, .. } => self.pick(bot, target, item)?,
            BotTask::PlaceOrder { target, order }  => self.deliver(bot, target, order)?,
        }
        self.summary.completed += 1;
        self.observer.on_task_completed(self.tick, bot.id, &task);
        debug!(tick = %self.tick, bot = %bot.id, task = %task, "task completed");
        Ok(())
    }
}

impl<O: HiveObserver + ?Sized> Dispatch<'_, O> {
    /// Entry → bot, then queue a PLACE_ITEM at the nearest free interior cell.
    fn retrieve(&mut self, bot: &mut Bot, target: Coord, expected: ItemId) -> HiveResult<()> {
        let item = self.grid.remove_item(target)?;
        self.grid.release(target)?;
        if item.id != expected {
            warn!(bot = %bot.id, cell = %target, expected = %expected, found = %item.id,
                  "entry held a different item than planned");
        }
        let id = item.id;
        bot.add_item(item);

        let slot = self
            .grid
            .find_nearest_unoccupied_interior(bot.position())
            .ok_or(HiveError::NoStagingSpace { bot: bot.id, item: id })?;
        self.grid.reserve(slot)?;
        bot.push_task(BotTask::PlaceItem { target: slot, item: id });
        Ok(())
    }

    /// Bot → interior.
    fn place(&mut self, bot: &mut Bot, target: Coord, item: ItemId) -> HiveResult<()> {
        let item = bot.remove_item(item)?;
        self.grid.add_item(target, item)?;
        self.grid.release(target)?;
        Ok(())
    }

    /// Interior → bot.
    fn pick(&mut self, bot: &mut Bot, target: Coord, expected: ItemId) -> HiveResult<()> {
        let item = self.grid.remove_item(target)?;
        self.grid.release(target)?;
        if item.id != expected {
            warn!(bot = %bot.id, cell = %target, expected = %expected, found = %item.id,
                  "interior cell held a different item than planned");
        }
        bot.add_item(item);
        Ok(())
    }

    /// Bot → exit.  Marks the order FULFILLED once the exit holds every
    /// item it asked for.
    fn deliver(&mut self, bot: &mut Bot, target: Coord, order_id: OrderId) -> HiveResult<()> {
        let wanted = self
            .orders
            .get(order_id)
            .ok_or(HiveError::UnknownOrder(order_id))?
            .items
            .clone();

        for id in wanted {
            if bot.carries(id) {
                let item = bot.remove_item(id)?;
                self.grid.add_item(target, item)?;
            }
        }

        let cell = self.grid.cell_mut(target)?;
        cell.assign_order(order_id)?;
        cell.reserved = false;
        let delivered = cell.exit_items().iter().map(|i| &i.id);

        let order = self
            .orders
            .get_mut(order_id)
            .ok_or(HiveError::UnknownOrder(order_id))?;
        if order.is_satisfied_by(delivered) {
            order.status = OrderStatus::Fulfilled;
            self.summary.fulfilled += 1;
            info!(tick = %self.tick, order = %order_id, exit = %target, "order fulfilled");
            self.observer.on_order_fulfilled(self.tick, order);
        } else {
            warn!(order = %order_id, exit = %target, "delivery left the order incomplete");
        }
        Ok(())
    }
}
