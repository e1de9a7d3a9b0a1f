//! Annealing schedule and solver entry points.

use hv_core::{Coord, HiveRng};

use crate::{Tour, TourError, TourObjective, TourResult};

/// Initial temperature is this multiple of the first leg's length.
const INITIAL_TEMPERATURE_FACTOR: f64 = 100.0;

/// Annealing stops once the temperature drops below this.
const MIN_TEMPERATURE: f64 = 1e-6;

/// Annealing parameters.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Annealing {
    /// Multiplicative cooling per iteration.  Closer to 1 means slower
    /// convergence and better tours.
    pub cooling_rate: f64,
    pub objective:    TourObjective,
}

impl Default for Annealing {
    fn default() -> Self {
        Self {
            cooling_rate: 0.999,
            objective:    TourObjective::Closed,
        }
    }
}

impl Annealing {
    pub fn validate(&self) -> TourResult<()> {
        if !(self.cooling_rate > 0.0 && self.cooling_rate < 1.0) {
            return Err(TourError::InvalidCoolingRate(self.cooling_rate));
        }
        Ok(())
    }
}

/// Order `points` into a short tour starting at `points[0]`.
///
/// Returns a permutation of `0..points.len()` with `0` first.
pub fn solve(points: &[Coord], params: Annealing, rng: &mut HiveRng) -> TourResult<Vec<usize>> {
    solve_with(points, params, rng, |_, _| {})
}

/// As [`solve`], calling `on_iteration(&tour, temperature)` after every
/// annealing step.
pub fn solve_with<F>(
    points:           &[Coord],
    params:           Annealing,
    rng:              &mut HiveRng,
    mut on_iteration: F,
) -> TourResult<Vec<usize>>
where
    F: FnMut(&Tour, f64),
{
    params.validate()?;
    let mut tour = Tour::new(points, params.objective);
    // With the origin pinned, fewer than three points leave nothing to permute.
    if points.len() < 3 {
        return Ok(tour.into_order());
    }

    let mut temperature = INITIAL_TEMPERATURE_FACTOR * points[0].manhattan(points[1]) as f64;
    while temperature > MIN_TEMPERATURE {
        tour.change(temperature, rng);
        on_iteration(&tour, temperature);
        temperature *= params.cooling_rate;
    }
    Ok(tour.into_order())
}
