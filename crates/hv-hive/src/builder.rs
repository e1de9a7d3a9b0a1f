//! Fluent builder for constructing a [`Hive`].

use hv_core::Coord;
use hv_grid::{CellKind, Grid};

use crate::{Hive, HiveConfig, HiveError, HiveResult};

/// Fluent builder for [`Hive`].
///
/// ```rust,ignore
/// let hive = HiveBuilder::new(config)
///     .bot("A", Coord::new(2, 2))
///     .bot("B", Coord::new(3, 8))
///     .build()?;
/// ```
///
/// Bots receive ids `0, 1, 2, …` in the order they are added.
pub struct HiveBuilder {
    config: HiveConfig,
    bots:   Vec<(String, Coord)>,
}

impl HiveBuilder {
    pub fn new(config: HiveConfig) -> Self {
        Self { config, bots: Vec::new() }
    }

    /// Add one bot at `position`.
    pub fn bot(mut self, name: impl Into<String>, position: Coord) -> Self {
        self.bots.push((name.into(), position));
        self
    }

    /// Add several bots at once.
    pub fn bots<N: Into<String>>(mut self, bots: impl IntoIterator<Item = (N, Coord)>) -> Self {
        self.bots.extend(bots.into_iter().map(|(n, c)| (n.into(), c)));
        self
    }

    /// Validate the config, lay out the floor, place the bots.
    pub fn build(self) -> HiveResult<Hive> {
        self.config.validate()?;
        let grid = Grid::new(self.config.width, self.config.height, &self.config.layout)?;

        // ── A floor without entries or exits can never fulfil anything ────
        for kind in [CellKind::Entry, CellKind::Exit] {
            if grid.cells_of(kind).next().is_none() {
                return Err(HiveError::Config(format!("layout has no {kind:?} cells")));
            }
        }

        let mut hive = Hive::from_parts(self.config, grid);
        for (name, position) in self.bots {
            hive.add_bot(name, position)?;
        }
        Ok(hive)
    }
}
