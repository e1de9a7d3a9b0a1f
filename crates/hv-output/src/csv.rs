//! CSV output backend.
//!
//! Creates `bot_snapshots.csv` and `tick_summaries.csv` in the output
//! directory.

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{BotSnapshotRow, OutputResult, TickSummaryRow};

pub const SNAPSHOT_HEADER: [&str; 11] = [
    "bot_id", "name", "tick", "x", "y", "direction", "task", "target_x", "target_y", "queued", "carried",
];

pub const SUMMARY_HEADER: [&str; 5] = [
    "tick", "moving_bots", "completed_tasks", "assigned_bots", "fulfilled_orders",
];

/// Writes hive output to two CSV files.
pub struct CsvWriter {
    snapshots: Writer<File>,
    summaries: Writer<File>,
    finished:  bool,
}

impl CsvWriter {
    /// Create (or truncate) both files in `dir` and write their headers.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut snapshots = Writer::from_path(dir.join("bot_snapshots.csv"))?;
        snapshots.write_record(SNAPSHOT_HEADER)?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record(SUMMARY_HEADER)?;

        Ok(Self {
            snapshots,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_snapshots(&mut self, rows: &[BotSnapshotRow]) -> OutputResult<()> {
        for row in rows {
            // Idle bots leave the target columns blank.
            let (tx, ty) = row
                .target
                .map_or((String::new(), String::new()), |(x, y)| (x.to_string(), y.to_string()));
            self.snapshots.write_record(&[
                row.bot_id.to_string(),
                row.name.clone(),
                row.tick.to_string(),
                row.x.to_string(),
                row.y.to_string(),
                row.direction.clone(),
                row.task.to_owned(),
                tx,
                ty,
                row.queued.to_string(),
                row.carried.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.moving_bots.to_string(),
            row.completed_tasks.to_string(),
            row.assigned_bots.to_string(),
            row.fulfilled_orders.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.snapshots.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
