//! Integration tests for hv-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::{CsvWriter, SNAPSHOT_HEADER, SUMMARY_HEADER};
    use crate::row::{BotSnapshotRow, TickSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn snap_row(bot_id: u32, tick: u64) -> BotSnapshotRow {
        BotSnapshotRow {
            bot_id,
            name:      format!("bot-{bot_id}"),
            tick,
            x:         bot_id as i32,
            y:         2,
            direction: "STOPPED".to_owned(),
            task:      "",
            target:    None,
            queued:    0,
            carried:   0,
        }
    }

    fn read_all(path: &std::path::Path) -> Vec<csv::StringRecord> {
        let mut rdr = csv::Reader::from_path(path).unwrap();
        rdr.records().map(|r| r.unwrap()).collect()
    }

    #[test]
    fn files_created_with_headers() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("bot_snapshots.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, SNAPSHOT_HEADER);

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, SUMMARY_HEADER);
    }

    #[test]
    fn idle_bot_has_blank_target() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let busy = BotSnapshotRow {
            task:    "PICK_ITEM",
            target:  Some((4, 1)),
            queued:  2,
            carried: 1,
            ..snap_row(1, 3)
        };
        w.write_snapshots(&[snap_row(0, 3), busy]).unwrap();
        w.finish().unwrap();

        let rows = read_all(&dir.path().join("bot_snapshots.csv"));
        assert_eq!(rows.len(), 2);
        assert_eq!(&rows[0][1], "bot-0");
        assert_eq!(&rows[0][6], "");
        assert_eq!(&rows[0][7], "");
        assert_eq!(&rows[1][6], "PICK_ITEM");
        assert_eq!(&rows[1][7], "4");
        assert_eq!(&rows[1][8], "1");
        assert_eq!(&rows[1][9], "2");
        assert_eq!(&rows[1][10], "1");
    }

    #[test]
    fn tick_summary_columns() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_tick_summary(&TickSummaryRow {
            tick:             7,
            moving_bots:      2,
            completed_tasks:  3,
            assigned_bots:    1,
            fulfilled_orders: 1,
        })
        .unwrap();
        w.finish().unwrap();

        let rows = read_all(&dir.path().join("tick_summaries.csv"));
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].iter().collect::<Vec<_>>(), ["7", "2", "3", "1", "1"]);
    }

    #[test]
    fn finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tmp();
        let result = CsvWriter::new(&dir.path().join("no/such/dir"));
        assert!(result.is_err());
    }
}

// ── Observer ──────────────────────────────────────────────────────────────────

#[cfg(test)]
mod observer_tests {
    use hv_core::{Coord, Item, ItemId, Rgb};
    use hv_grid::GridLayout;
    use hv_hive::{HiveBuilder, HiveConfig};

    use crate::csv::CsvWriter;
    use crate::observer::HiveOutputObserver;

    #[test]
    fn run_writes_snapshots_and_summaries() {
        let config = HiveConfig {
            width:                 5,
            height:                5,
            layout:                GridLayout::Explicit {
                entries: vec![Coord::new(0, 0)],
                exits:   vec![Coord::new(4, 4)],
            },
            total_ticks:           6,
            output_interval_ticks: 2,
            ..HiveConfig::default()
        };
        let mut hive = HiveBuilder::new(config)
            .bot("A", Coord::new(0, 0))
            .bot("B", Coord::new(2, 2))
            .build()
            .unwrap();
        hive.add_item(Item::new(ItemId(1), 3, "widget", Rgb::new(0, 128, 255)).unwrap())
            .unwrap();

        let dir = tempfile::tempdir().unwrap();
        let mut obs = HiveOutputObserver::new(CsvWriter::new(dir.path()).unwrap());
        hive.run(&mut obs).unwrap();
        assert!(obs.take_error().is_none(), "no write errors expected");

        // Snapshots at ticks 0, 2, 4 for two bots.
        let mut rdr = csv::Reader::from_path(dir.path().join("bot_snapshots.csv")).unwrap();
        let snaps: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(snaps.len(), 6);
        // Bot A was handed the retrieval at the end of tick 0.
        assert_eq!(&snaps[0][1], "A");
        assert_eq!(&snaps[0][2], "0");
        assert_eq!(&snaps[0][6], "RETRIEVE_ITEM");
        assert_eq!(&snaps[1][1], "B");
        assert_eq!(&snaps[1][6], "");

        let mut rdr = csv::Reader::from_path(dir.path().join("tick_summaries.csv")).unwrap();
        let sums: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(sums.len(), 6);
        assert_eq!(&sums[0][3], "1");
        assert_eq!(&sums[1][2], "2");
    }
}
