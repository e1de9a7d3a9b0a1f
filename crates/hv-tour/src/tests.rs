//! Unit tests for hv-tour.

use hv_core::{Coord, HiveRng};

use crate::{Annealing, Tour, TourObjective, solve, solve_with};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn pts(raw: &[(i32, i32)]) -> Vec<Coord> {
    raw.iter().map(|&p| Coord::from(p)).collect()
}

fn scatter(n: usize, seed: u64) -> Vec<Coord> {
    let mut rng = HiveRng::new(seed);
    (0..n)
        .map(|_| Coord::new(rng.gen_range(0..20), rng.gen_range(0..20)))
        .collect()
}

fn open() -> Annealing {
    Annealing { objective: TourObjective::Open, ..Annealing::default() }
}

// ── Tour ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tour {
    use super::*;

    #[test]
    fn closed_size_includes_return_leg() {
        let t = Tour::new(&pts(&[(0, 0), (3, 0), (3, 4)]), TourObjective::Closed);
        assert_eq!(t.size(), 3 + 4 + 7);
    }

    #[test]
    fn open_size_excludes_return_leg() {
        let t = Tour::new(&pts(&[(0, 0), (3, 0), (3, 4)]), TourObjective::Open);
        assert_eq!(t.size(), 3 + 4);
    }

    #[test]
    fn delta_matches_recomputed_size() {
        for objective in [TourObjective::Closed, TourObjective::Open] {
            let points = scatter(7, 3);
            let mut t = Tour::new(&points, objective);
            for i in 1..7 {
                for j in 1..7 {
                    let before = t.size() as i64;
                    let predicted = t.delta(i, j);
                    t.swap(i, j);
                    assert_eq!(t.size() as i64 - before, predicted, "{objective:?} swap {i},{j}");
                }
            }
        }
    }

    #[test]
    fn delta_leaves_order_untouched() {
        let mut t = Tour::new(&scatter(5, 9), TourObjective::Closed);
        let before = t.order().to_vec();
        t.delta(1, 3);
        assert_eq!(t.order(), &before[..]);
    }
}

// ── Solver ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod solver {
    use super::*;
    use crate::TourError;

    #[test]
    fn fewer_than_two_points_unchanged() {
        let mut rng = HiveRng::new(1);
        assert_eq!(solve(&[], Annealing::default(), &mut rng).unwrap(), Vec::<usize>::new());
        assert_eq!(solve(&pts(&[(4, 4)]), Annealing::default(), &mut rng).unwrap(), vec![0]);
        assert_eq!(solve(&pts(&[(4, 4), (0, 0)]), Annealing::default(), &mut rng).unwrap(), vec![0, 1]);
    }

    #[test]
    fn result_is_a_permutation_with_origin_first() {
        let points = scatter(9, 17);
        let mut rng = HiveRng::new(17);
        let order = solve(&points, Annealing::default(), &mut rng).unwrap();
        assert_eq!(order[0], 0);
        let mut sorted = order.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..9).collect::<Vec<_>>());
    }

    #[test]
    fn open_objective_finds_the_sweep() {
        // Origin at the end of a line; stops given out of order.
        let points = pts(&[(0, 0), (3, 0), (1, 0), (2, 0)]);
        let mut rng = HiveRng::new(5);
        let order = solve(&points, open(), &mut rng).unwrap();
        assert_eq!(order, vec![0, 2, 3, 1]);
    }

    #[test]
    fn closed_objective_reaches_optimum_on_a_line() {
        let points = pts(&[(0, 0), (3, 0), (1, 0), (2, 0)]);
        let mut rng = HiveRng::new(8);
        let order = solve(&points, Annealing::default(), &mut rng).unwrap();
        let n = order.len();
        let length: u32 = (0..n)
            .map(|k| points[order[k]].manhattan(points[order[(k + 1) % n]]))
            .sum();
        assert_eq!(length, 6);
    }

    #[test]
    fn three_collinear_points_never_lengthen() {
        let points = pts(&[(0, 0), (2, 0), (5, 0)]);
        let mut rng = HiveRng::new(11);
        let mut sizes = Vec::new();
        solve_with(&points, Annealing::default(), &mut rng, |tour, _| sizes.push(tour.size())).unwrap();
        assert!(!sizes.is_empty());
        assert!(sizes.windows(2).all(|w| w[1] <= w[0]));
    }

    #[test]
    fn temperature_decreases_every_iteration() {
        let points = scatter(5, 2);
        let mut rng = HiveRng::new(2);
        let mut temps = Vec::new();
        solve_with(&points, Annealing::default(), &mut rng, |_, t| temps.push(t)).unwrap();
        assert!(temps.windows(2).all(|w| w[1] < w[0]));
        assert!(temps.last().is_none_or(|&t| t > 1e-6));
    }

    #[test]
    fn same_seed_same_tour() {
        let points = scatter(8, 4);
        let a = solve(&points, Annealing::default(), &mut HiveRng::new(77)).unwrap();
        let b = solve(&points, Annealing::default(), &mut HiveRng::new(77)).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_cooling_rate_rejected() {
        let mut rng = HiveRng::new(0);
        for rate in [0.0, 1.0, 1.5, -0.2, f64::NAN] {
            let params = Annealing { cooling_rate: rate, ..Annealing::default() };
            let err = solve(&scatter(4, 1), params, &mut rng).unwrap_err();
            assert!(matches!(err, TourError::InvalidCoolingRate(_)));
        }
    }
}
