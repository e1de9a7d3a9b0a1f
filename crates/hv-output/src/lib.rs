//! `hv-output`: per-tick CSV output for the hive simulator.
//!
//! | Backend | Files created                                  |
//! |---------|------------------------------------------------|
//! | CSV     | `bot_snapshots.csv`, `tick_summaries.csv`      |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`HiveOutputObserver`], which implements `hv_hive::HiveObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use hv_output::{CsvWriter, HiveOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = HiveOutputObserver::new(writer);
//! hive.run(&mut obs)?;
//! if let Some(e) = obs.take_error() {
//!     eprintln!("output error: {e}");
//! }
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(test)]
mod tests;

pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::HiveOutputObserver;
pub use row::{BotSnapshotRow, TickSummaryRow};
pub use writer::OutputWriter;
