//! The `OutputWriter` trait.

use crate::{BotSnapshotRow, OutputResult, TickSummaryRow};

/// A sink for snapshot and summary rows.
///
/// The observer never propagates these errors; it keeps the first one for
/// [`HiveOutputObserver::take_error`][crate::HiveOutputObserver::take_error].
pub trait OutputWriter {
    fn write_snapshots(&mut self, rows: &[BotSnapshotRow]) -> OutputResult<()>;

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()>;

    /// Flush everything.  Safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
