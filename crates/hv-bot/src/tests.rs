//! Unit tests for hv-bot.

use hv_core::{BotId, Coord, Item, ItemId, OrderId, Rgb};

use crate::{Bot, BotTask, TaskHandler};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn c(x: i32, y: i32) -> Coord {
    Coord::new(x, y)
}

fn place(x: i32, y: i32) -> BotTask {
    BotTask::PlaceItem { target: c(x, y), item: ItemId(0) }
}

fn item(id: u32) -> Item {
    Item::new(ItemId(id), 2, "crate", Rgb::new(1, 2, 3)).unwrap()
}

/// Records every completed task and the bot position at completion.
#[derive(Default)]
struct Recorder {
    done: Vec<(BotTask, Coord)>,
}

impl TaskHandler for Recorder {
    type Error = ();

    fn on_task_completed(&mut self, bot: &mut Bot, task: BotTask) -> Result<(), ()> {
        self.done.push((task, bot.position()));
        Ok(())
    }
}

// ── Queue & state ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod queue {
    use super::*;
    use crate::{BotError, BotState, Direction};

    #[test]
    fn new_bot_is_idle() {
        let bot = Bot::new(BotId(0), "A", c(1, 1));
        assert!(bot.is_idle());
        assert_eq!(bot.state(), BotState::Idle);
        assert_eq!(bot.direction(), Direction::Stopped);
        assert!(bot.current_task().is_none());
    }

    #[test]
    fn assign_to_busy_bot_fails() {
        let mut bot = Bot::new(BotId(3), "A", c(0, 0));
        bot.assign_tasks([place(2, 0)]).unwrap();
        assert_eq!(bot.state(), BotState::Moving);
        assert_eq!(bot.direction(), Direction::Right);
        let err = bot.assign_tasks([place(0, 2)]).unwrap_err();
        assert_eq!(err, BotError::BotBusy(BotId(3)));
        assert_eq!(bot.tasks().len(), 1);
    }

    #[test]
    fn push_task_appends() {
        let mut bot = Bot::new(BotId(0), "A", c(0, 0));
        bot.push_task(place(0, 3));
        bot.push_task(place(3, 3));
        let targets: Vec<Coord> = bot.tasks().map(|t| t.target()).collect();
        assert_eq!(targets, vec![c(0, 3), c(3, 3)]);
        assert_eq!(bot.direction(), Direction::Down);
    }
}

// ── Storage ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod storage {
    use super::*;
    use crate::BotError;

    #[test]
    fn carry_and_drop() {
        let mut bot = Bot::new(BotId(0), "A", c(0, 0));
        bot.add_item(item(1));
        bot.add_item(item(2));
        assert!(bot.carries(ItemId(2)));
        assert_eq!(bot.remove_item(ItemId(1)).unwrap().id, ItemId(1));
        assert_eq!(bot.storage().len(), 1);
        assert!(!bot.carries(ItemId(1)));
    }

    #[test]
    fn removing_uncarried_item_fails() {
        let mut bot = Bot::new(BotId(2), "A", c(0, 0));
        bot.add_item(item(1));
        let err = bot.remove_item(ItemId(9)).unwrap_err();
        assert_eq!(err, BotError::ItemNotFound { bot: BotId(2), item: ItemId(9) });
        assert_eq!(bot.storage().len(), 1);
    }
}

// ── Motion ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod motion {
    use super::*;
    use crate::Direction;

    #[test]
    fn clears_x_before_y() {
        let mut bot = Bot::new(BotId(0), "A", c(0, 0));
        bot.assign_tasks([place(2, 1)]).unwrap();
        let mut rec = Recorder::default();
        let mut visited = Vec::new();
        for _ in 0..3 {
            bot.tick(&mut rec).unwrap();
            visited.push(bot.position());
        }
        assert_eq!(visited, vec![c(1, 0), c(2, 0), c(2, 1)]);
        assert_eq!(rec.done, vec![(place(2, 1), c(2, 1))]);
        assert!(bot.is_idle());
        assert_eq!(bot.direction(), Direction::Stopped);
    }

    #[test]
    fn direction_labels() {
        let labels: Vec<String> = [Direction::Stopped, Direction::Up, Direction::Right]
            .iter()
            .map(ToString::to_string)
            .collect();
        assert_eq!(labels, ["STOPPED", "UP", "RIGHT"]);
    }

    #[test]
    fn moves_left_and_up() {
        let mut bot = Bot::new(BotId(0), "A", c(3, 3));
        bot.assign_tasks([place(2, 1)]).unwrap();
        let mut rec = Recorder::default();
        bot.tick(&mut rec).unwrap();
        assert_eq!(bot.position(), c(2, 3));
        assert_eq!(bot.direction(), Direction::Up);
        bot.tick(&mut rec).unwrap();
        assert_eq!(bot.position(), c(2, 2));
    }

    #[test]
    fn zero_distance_tasks_complete_without_moving() {
        let mut bot = Bot::new(BotId(0), "A", c(1, 1));
        bot.assign_tasks([place(1, 1), place(1, 1)]).unwrap();
        let mut rec = Recorder::default();
        let step = bot.tick(&mut rec).unwrap();
        assert!(!step.moved);
        assert_eq!(step.completed, 2);
        assert_eq!(bot.position(), c(1, 1));
        assert!(bot.is_idle());
    }

    #[test]
    fn colocated_tasks_complete_in_the_arrival_tick() {
        let mut bot = Bot::new(BotId(0), "A", c(0, 0));
        bot.assign_tasks([place(1, 0), place(1, 0), place(3, 0)]).unwrap();
        let mut rec = Recorder::default();
        let step = bot.tick(&mut rec).unwrap();
        assert!(step.moved);
        assert_eq!(step.completed, 2);
        assert_eq!(bot.tasks().len(), 1);
    }

    #[test]
    fn idle_tick_is_a_no_op() {
        let mut bot = Bot::new(BotId(0), "A", c(2, 2));
        let step = bot.tick(&mut Recorder::default()).unwrap();
        assert_eq!(step, crate::BotStep::default());
        assert_eq!(bot.position(), c(2, 2));
    }

    /// Appends a follow-up at the completed target the first time.
    struct Chainer {
        chained: bool,
        seen:    usize,
    }

    impl TaskHandler for Chainer {
        type Error = ();

        fn on_task_completed(&mut self, bot: &mut Bot, task: BotTask) -> Result<(), ()> {
            self.seen += 1;
            if !self.chained {
                self.chained = true;
                bot.push_task(BotTask::PlaceOrder { target: task.target(), order: OrderId(1) });
            }
            Ok(())
        }
    }

    #[test]
    fn follow_up_task_considered_in_same_tick() {
        let mut bot = Bot::new(BotId(0), "A", c(0, 0));
        bot.assign_tasks([place(1, 0)]).unwrap();
        let mut handler = Chainer { chained: false, seen: 0 };
        let step = bot.tick(&mut handler).unwrap();
        assert_eq!(step.completed, 2);
        assert_eq!(handler.seen, 2);
        assert!(bot.is_idle());
    }

    struct Failing;

    impl TaskHandler for Failing {
        type Error = &'static str;

        fn on_task_completed(&mut self, _bot: &mut Bot, _task: BotTask) -> Result<(), &'static str> {
            Err("no space")
        }
    }

    #[test]
    fn handler_error_stops_the_tick() {
        let mut bot = Bot::new(BotId(0), "A", c(0, 0));
        bot.assign_tasks([place(0, 0), place(0, 0)]).unwrap();
        assert_eq!(bot.tick(&mut Failing), Err("no space"));
        // The failing task was consumed; the second one is still queued.
        assert_eq!(bot.tasks().len(), 1);
        assert_eq!(bot.position(), c(0, 0));
    }
}

// ── Trajectory ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod trajectory {
    use super::*;

    #[test]
    fn idle_has_no_trajectory() {
        assert!(Bot::new(BotId(0), "A", c(0, 0)).extrapolate_trajectory().is_none());
    }

    #[test]
    fn follows_each_leg() {
        let mut bot = Bot::new(BotId(0), "A", c(0, 0));
        bot.assign_tasks([place(2, 0), place(2, 2), place(1, 2)]).unwrap();
        let path = bot.extrapolate_trajectory().unwrap();
        assert_eq!(path, vec![c(0, 0), c(1, 0), c(2, 0), c(2, 1), c(2, 2), c(1, 2)]);
    }

    #[test]
    fn forecast_matches_actual_motion() {
        let mut bot = Bot::new(BotId(0), "A", c(4, 1));
        bot.assign_tasks([place(1, 3), place(3, 0)]).unwrap();
        let forecast = bot.extrapolate_trajectory().unwrap();
        let mut actual = vec![bot.position()];
        let mut rec = Recorder::default();
        while !bot.is_idle() {
            bot.tick(&mut rec).unwrap();
            actual.push(bot.position());
        }
        assert_eq!(forecast, actual);
    }

    #[test]
    fn extrapolation_does_not_mutate() {
        let mut bot = Bot::new(BotId(0), "A", c(0, 0));
        bot.assign_tasks([place(3, 3)]).unwrap();
        let before = (bot.position(), bot.direction(), bot.tasks().len());
        let _ = bot.extrapolate_trajectory();
        let _ = bot.extrapolate_trajectory();
        assert_eq!(before, (bot.position(), bot.direction(), bot.tasks().len()));
    }
}
