//! Run configuration for a [`Hive`][crate::Hive].

use hv_core::Tick;
use hv_grid::GridLayout;
use hv_tour::{Annealing, TourObjective};

use crate::{HiveError, HiveResult};

/// Everything needed to lay out the floor and drive the tick loop.
///
/// With the `serde` feature the struct deserializes from partial documents:
/// missing fields take their [`Default`] values.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct HiveConfig {
    /// Floor width in cells.
    pub width: i32,

    /// Floor height in cells.
    pub height: i32,

    /// Placement of Entry and Exit cells.
    pub layout: GridLayout,

    /// Seed for the dispatcher's RNG (used by the tour solver).
    pub seed: u64,

    /// Annealing cooling rate, strictly between 0 and 1.
    pub cooling_rate: f64,

    /// Whether pick tours count the leg back to the start.
    pub tour_objective: TourObjective,

    /// Number of ticks [`Hive::run`][crate::Hive::run] executes.
    pub total_ticks: u64,

    /// Call `on_snapshot` every this many ticks.  0 disables snapshots.
    pub output_interval_ticks: u64,
}

impl Default for HiveConfig {
    fn default() -> Self {
        Self {
            width:                 22,
            height:                22,
            layout:                GridLayout::Perimeter,
            seed:                  42,
            cooling_rate:          Annealing::default().cooling_rate,
            tour_objective:        TourObjective::Closed,
            total_ticks:           1_000,
            output_interval_ticks: 1,
        }
    }
}

impl HiveConfig {
    /// Annealing parameters derived from this config.
    pub fn annealing(&self) -> Annealing {
        Annealing {
            cooling_rate: self.cooling_rate,
            objective:    self.tour_objective,
        }
    }

    /// The first tick [`Hive::run`][crate::Hive::run] does not execute.
    pub fn end_tick(&self) -> Tick {
        Tick(self.total_ticks)
    }

    /// Reject settings no floor can be built from.
    pub fn validate(&self) -> HiveResult<()> {
        if self.width <= 0 || self.height <= 0 {
            return Err(HiveError::Config(format!(
                "grid must be at least 1×1, got {}×{}",
                self.width, self.height
            )));
        }
        self.annealing().validate()?;
        Ok(())
    }
}
