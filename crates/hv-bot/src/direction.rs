//! Bot headings.

use std::fmt;

use hv_core::Coord;

/// Which way a bot is moving this tick.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    /// Not fulfilling any task, or standing on the current target.
    #[default]
    Stopped,
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step `(dx, dy)`.  `y` grows downwards, so `Up` is `(0, -1)`.
    #[inline]
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Stopped => (0, 0),
            Direction::Up      => (0, -1),
            Direction::Down    => (0, 1),
            Direction::Left    => (-1, 0),
            Direction::Right   => (1, 0),
        }
    }

    /// Heading from `from` toward `to`: horizontal mismatch first, then
    /// vertical.  `Stopped` when the two coincide.
    pub fn toward(from: Coord, to: Coord) -> Direction {
        if from.x > to.x {
            Direction::Left
        } else if from.x < to.x {
            Direction::Right
        } else if from.y < to.y {
            Direction::Down
        } else if from.y > to.y {
            Direction::Up
        } else {
            Direction::Stopped
        }
    }

    /// `from` advanced one step in this direction.
    #[inline]
    pub fn step(self, from: Coord) -> Coord {
        let (dx, dy) = self.delta();
        from.offset(dx, dy)
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Stopped => "STOPPED",
            Direction::Up      => "UP",
            Direction::Down    => "DOWN",
            Direction::Left    => "LEFT",
            Direction::Right   => "RIGHT",
        })
    }
}
