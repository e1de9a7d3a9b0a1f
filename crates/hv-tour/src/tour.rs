//! A visiting order over a fixed point set.

use hv_core::{Coord, HiveRng};

/// What the annealer minimises.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TourObjective {
    /// Sum of all legs including the one from the last stop back to the
    /// origin.
    #[default]
    Closed,
    /// Sum of legs from the origin to the last stop only.
    Open,
}

/// A permutation of `points` plus their full Manhattan distance matrix.
///
/// `order[k]` is the index (into the input slice) of the `k`-th stop.
/// `order[0]` is always `0`: the origin never moves.
#[derive(Clone, Debug)]
pub struct Tour {
    order:     Vec<usize>,
    distances: Vec<u32>,
    objective: TourObjective,
}

impl Tour {
    /// Identity tour over `points`.
    pub fn new(points: &[Coord], objective: TourObjective) -> Self {
        let n = points.len();
        let distances = points
            .iter()
            .flat_map(|a| points.iter().map(move |b| a.manhattan(*b)))
            .collect();
        Self {
            order: (0..n).collect(),
            distances,
            objective,
        }
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Current visiting order as indices into the input points.
    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn into_order(self) -> Vec<usize> {
        self.order
    }

    /// Distance between the stops at tour positions `a` and `b`.
    #[inline]
    fn distance(&self, a: usize, b: usize) -> u32 {
        self.distances[self.order[a] * self.len() + self.order[b]]
    }

    /// Length of the leg leaving tour position `k`.
    #[inline]
    fn leg(&self, k: usize) -> u32 {
        let n = self.len();
        let next = (k + 1) % n;
        if next == 0 && self.objective == TourObjective::Open {
            return 0;
        }
        self.distance(k, next)
    }

    /// Total length under the tour's objective.
    pub fn size(&self) -> u32 {
        (0..self.len()).map(|k| self.leg(k)).sum()
    }

    pub fn swap(&mut self, i: usize, j: usize) {
        self.order.swap(i, j);
    }

    /// Change in [`size`][Self::size] if positions `i` and `j` were swapped.
    ///
    /// Only the (at most four) legs touching `i` or `j` can change, so this
    /// is O(1) regardless of tour length.
    pub fn delta(&mut self, i: usize, j: usize) -> i64 {
        let n = self.len();
        let mut legs = [(i + n - 1) % n, i, (j + n - 1) % n, j];
        legs.sort_unstable();
        let mut touched = legs.to_vec();
        touched.dedup();

        let cost = |tour: &Tour| -> i64 { touched.iter().map(|&k| tour.leg(k) as i64).sum() };
        let before = cost(&*self);
        self.swap(i, j);
        let after = cost(&*self);
        self.swap(i, j);
        after - before
    }

    /// One Metropolis step at `temperature`: propose a random swap of two
    /// non-origin positions and accept it if it shortens the tour, or with
    /// probability `exp(−Δ / T)` otherwise.  Returns `true` if accepted.
    pub fn change(&mut self, temperature: f64, rng: &mut HiveRng) -> bool {
        let i = self.random_pos(rng);
        let j = self.random_pos(rng);
        let delta = self.delta(i, j);
        let accept = delta < 0 || rng.random::<f64>() < (-(delta as f64) / temperature).exp();
        if accept {
            self.swap(i, j);
        }
        accept
    }

    /// Uniform position in `[1, n)`.
    #[inline]
    fn random_pos(&self, rng: &mut HiveRng) -> usize {
        1 + rng.gen_range(0..self.len() - 1)
    }
}
