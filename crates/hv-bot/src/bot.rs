//! The `Bot` state machine.

use std::collections::VecDeque;

use hv_core::{BotId, Coord, Item, ItemId};

use crate::{BotError, BotResult, BotTask, Direction};

/// Coarse bot state, derived from the task queue.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BotState {
    /// Task queue empty.
    Idle,
    /// Working through at least one queued task.
    Moving,
}

/// Receives each task a bot completes.
///
/// Implemented by the dispatcher.  The handler gets the bot mutably so it
/// can move items in and out of storage and append follow-up tasks with
/// [`Bot::push_task`].  An error aborts the rest of the bot's tick.
pub trait TaskHandler {
    type Error;

    fn on_task_completed(&mut self, bot: &mut Bot, task: BotTask) -> Result<(), Self::Error>;
}

/// What one call to [`Bot::tick`] did.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
pub struct BotStep {
    /// `true` if the bot changed cell.
    pub moved:     bool,
    /// Tasks completed during the tick.
    pub completed: usize,
}

/// A mobile worker.
///
/// A bot is idle iff its task queue is empty.  The front of the queue is
/// the current target.
#[derive(Clone, Debug)]
pub struct Bot {
    pub id:    BotId,
    pub name:  String,
    position:  Coord,
    direction: Direction,
    storage:   Vec<Item>,
    tasks:     VecDeque<BotTask>,
}

impl Bot {
    /// An idle bot with empty storage at `position`.
    pub fn new(id: BotId, name: impl Into<String>, position: Coord) -> Self {
        Self {
            id,
            name:      name.into(),
            position,
            direction: Direction::Stopped,
            storage:   Vec::new(),
            tasks:     VecDeque::new(),
        }
    }

    // ── Read access ───────────────────────────────────────────────────────

    #[inline]
    pub fn position(&self) -> Coord {
        self.position
    }

    /// Heading toward the current target (`Stopped` when idle).
    #[inline]
    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn storage(&self) -> &[Item] {
        &self.storage
    }

    pub fn tasks(&self) -> impl ExactSizeIterator<Item = &BotTask> + '_ {
        self.tasks.iter()
    }

    pub fn current_task(&self) -> Option<&BotTask> {
        self.tasks.front()
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn state(&self) -> BotState {
        if self.is_idle() { BotState::Idle } else { BotState::Moving }
    }

    /// `true` if an item with id `item` is in storage.
    pub fn carries(&self, item: ItemId) -> bool {
        self.storage.iter().any(|i| i.id == item)
    }

    // ── Task queue ────────────────────────────────────────────────────────

    /// Replace the (empty) task queue with `tasks`.
    ///
    /// # Errors
    ///
    /// [`BotError::BotBusy`] if the bot still has queued work.
    pub fn assign_tasks(&mut self, tasks: impl IntoIterator<Item = BotTask>) -> BotResult<()> {
        if !self.is_idle() {
            return Err(BotError::BotBusy(self.id));
        }
        self.tasks = tasks.into_iter().collect();
        self.direction = self.heading();
        Ok(())
    }

    /// Append a follow-up task behind whatever is queued.
    pub fn push_task(&mut self, task: BotTask) {
        self.tasks.push_back(task);
        self.direction = self.heading();
    }

    // ── Storage ───────────────────────────────────────────────────────────

    pub fn add_item(&mut self, item: Item) {
        self.storage.push(item);
    }

    /// Remove the first carried item with id `item`.
    ///
    /// # Errors
    ///
    /// [`BotError::ItemNotFound`] if no such item is carried.
    pub fn remove_item(&mut self, item: ItemId) -> BotResult<Item> {
        let idx = self
            .storage
            .iter()
            .position(|i| i.id == item)
            .ok_or(BotError::ItemNotFound { bot: self.id, item })?;
        Ok(self.storage.remove(idx))
    }

    // ── Motion ────────────────────────────────────────────────────────────

    /// Advance one discrete step (see the crate docs for the three phases).
    pub fn tick<H: TaskHandler>(&mut self, handler: &mut H) -> Result<BotStep, H::Error> {
        let mut step = BotStep {
            moved:     false,
            completed: self.complete_arrived(handler)?,
        };

        let heading = self.heading();
        if heading != Direction::Stopped {
            self.position = heading.step(self.position);
            step.moved = true;
        }

        step.completed += self.complete_arrived(handler)?;
        self.direction = self.heading();
        Ok(step)
    }

    /// Pop and hand over every front task whose target is the current cell.
    fn complete_arrived<H: TaskHandler>(&mut self, handler: &mut H) -> Result<usize, H::Error> {
        let mut completed = 0;
        while self.current_task().is_some_and(|t| t.target() == self.position) {
            let Some(task) = self.tasks.pop_front() else { break };
            completed += 1;
            handler.on_task_completed(self, task)?;
        }
        Ok(completed)
    }

    fn heading(&self) -> Direction {
        self.current_task()
            .map_or(Direction::Stopped, |t| Direction::toward(self.position, t.target()))
    }

    // ── Forecasting ───────────────────────────────────────────────────────

    /// Every cell the bot will occupy while working through its current
    /// queue, starting with its present position.
    ///
    /// Applies the same axis-priority rule as [`tick`][Self::tick], leg by
    /// leg.  `None` when idle.  Pure: never mutates the bot.
    pub fn extrapolate_trajectory(&self) -> Option<Vec<Coord>> {
        if self.is_idle() {
            return None;
        }
        let mut path = vec![self.position];
        let mut at = self.position;
        for task in &self.tasks {
            let target = task.target();
            loop {
                let dir = Direction::toward(at, target);
                if dir == Direction::Stopped {
                    break;
                }
                at = dir.step(at);
                path.push(at);
            }
        }
        Some(path)
    }
}
