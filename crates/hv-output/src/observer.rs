//! `HiveOutputObserver<W>`: bridges `HiveObserver` to an `OutputWriter`.

use hv_bot::Bot;
use hv_core::Tick;
use hv_grid::Grid;
use hv_hive::{HiveObserver, TickSummary};

use crate::row::{BotSnapshotRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`HiveObserver`] that records bot snapshots and tick summaries through
/// any [`OutputWriter`].
///
/// Observer hooks cannot fail, so the first write error is kept and can be
/// collected with [`take_error`][Self::take_error] once the run returns.
pub struct HiveOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> HiveOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// The first write error, if any.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Flush the writer.  `run` does this in `on_sim_end`; callers stepping
    /// the hive themselves call it when done.
    pub fn finish(&mut self) {
        let result = self.writer.finish();
        self.store_err(result);
    }

    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> HiveObserver for HiveOutputObserver<W> {
    fn on_tick_end(&mut self, _tick: Tick, summary: &TickSummary) {
        let result = self.writer.write_tick_summary(&TickSummaryRow::from(summary));
        self.store_err(result);
    }

    fn on_snapshot(&mut self, tick: Tick, _grid: &Grid, bots: &[Bot]) {
        if bots.is_empty() {
            return;
        }
        let rows: Vec<BotSnapshotRow> = bots.iter().map(|b| BotSnapshotRow::from_bot(tick, b)).collect();
        let result = self.writer.write_snapshots(&rows);
        self.store_err(result);
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        self.finish();
    }
}
