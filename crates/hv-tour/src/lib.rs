//! `hv-tour`: orders a bot's pick locations into a short tour.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                     |
//! |-------------|--------------------------------------------------------------|
//! | [`tour`]    | `Tour`, a permutation with a precomputed distance matrix     |
//! | [`anneal`]  | `Annealing` parameters, `solve`, `solve_with`                |
//! | [`error`]   | `TourError`, `TourResult<T>`                                 |
//!
//! # Algorithm
//!
//! Simulated annealing over the visiting order, with position 0 pinned as
//! the bot's origin:
//!
//! ```text
//! T = 100 × d(p0, p1)
//! while T > 1e-6:
//!     pick random positions i, j ∈ [1, n)
//!     Δ = tour length after swapping i and j − length before
//!     swap if Δ < 0 or U(0,1) < exp(−Δ / T)
//!     T *= cooling_rate
//! ```
//!
//! By default the objective is a **closed** tour (the last stop connects back
//! to the origin) even though a bot never drives that last leg.
//! [`TourObjective::Open`] drops the closing leg.

pub mod anneal;
pub mod error;
pub mod tour;

#[cfg(test)]
mod tests;

pub use anneal::{Annealing, solve, solve_with};
pub use error::{TourError, TourResult};
pub use tour::{Tour, TourObjective};
