//! warehouse: drives a hive with random stock and random orders.
//!
//! Three bots work a 22×22 floor: entries along the top and left edges,
//! exits along the bottom and right.  Stock arrives at random intervals and
//! is retried later when every entry is full; orders are cut from whatever
//! is on the shelves, and customers pick finished orders up after a short
//! wait.
//!
//! ```text
//! cargo run -p warehouse                   # built-in settings
//! cargo run -p warehouse -- hive.json      # HiveConfig as JSON (partial is fine)
//! RUST_LOG=hv_hive=debug cargo run -p warehouse
//! ```

mod catalogue;

use std::collections::HashSet;
use std::path::Path;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use hv_bot::{Bot, BotTask};
use hv_core::{BotId, Coord, HiveRng, ItemId, Order, OrderId, OrderStatus, Tick};
use hv_grid::Grid;
use hv_hive::{HiveBuilder, HiveConfig, HiveError, HiveObserver, TickSummary};
use hv_output::{CsvWriter, HiveOutputObserver, OutputWriter};

use catalogue::Catalogue;

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:                  u64 = 42;
const TOTAL_TICKS:           u64 = 2_000;
const OUTPUT_INTERVAL_TICKS: u64 = 10;
const OUTPUT_DIR:            &str = "output/warehouse";

/// Ticks to wait before the next delivery after one was accepted / refused.
const RESTOCK_AFTER_SUCCESS: (u64, u64) = (2, 20);
const RESTOCK_AFTER_FAILURE: (u64, u64) = (3, 30);

/// Ticks between customer orders, and items per order.
const ORDER_GAP:   (u64, u64)     = (10, 40);
const ORDER_SIZE:  (usize, usize) = (1, 3);

/// Ticks a finished order waits at its exit before pickup.
const PICKUP_DELAY: u64 = 15;

const BOTS: [(&str, Coord); 3] = [
    ("A", Coord::new(2, 2)),
    ("B", Coord::new(3, 8)),
    ("C", Coord::new(6, 9)),
];

// ── Observer wrapper ──────────────────────────────────────────────────────────

/// Forwards to the CSV observer and remembers when each order was finished.
struct WarehouseObserver<W: OutputWriter> {
    inner:      HiveOutputObserver<W>,
    ready:      Vec<(Tick, OrderId)>,
    tasks_done: usize,
}

impl<W: OutputWriter> HiveObserver for WarehouseObserver<W> {
    fn on_task_completed(&mut self, _tick: Tick, _bot: BotId, _task: &BotTask) {
        self.tasks_done += 1;
    }

    fn on_order_fulfilled(&mut self, tick: Tick, order: &Order) {
        self.ready.push((tick, order.id));
    }

    fn on_tick_end(&mut self, tick: Tick, summary: &TickSummary) {
        self.inner.on_tick_end(tick, summary);
    }

    fn on_snapshot(&mut self, tick: Tick, grid: &Grid, bots: &[Bot]) {
        self.inner.on_snapshot(tick, grid, bots);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── Config ────────────────────────────────────────────────────────────────────

fn load_config() -> Result<HiveConfig> {
    match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?;
            let config = serde_json::from_str(&text).with_context(|| format!("parsing {path}"))?;
            Ok(config)
        }
        None => Ok(HiveConfig {
            seed:                  SEED,
            total_ticks:           TOTAL_TICKS,
            output_interval_ticks: OUTPUT_INTERVAL_TICKS,
            ..HiveConfig::default()
        }),
    }
}

fn between(rng: &mut HiveRng, (lo, hi): (u64, u64)) -> u64 {
    rng.gen_range(lo..=hi)
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = load_config()?;
    println!("=== warehouse — hive simulator ===");
    println!(
        "Floor: {}×{}  |  Bots: {}  |  Ticks: {}  |  Seed: {}",
        config.width,
        config.height,
        BOTS.len(),
        config.total_ticks,
        config.seed
    );
    println!();

    // 1. Build the hive.
    let mut hive = HiveBuilder::new(config.clone()).bots(BOTS).build()?;

    // 2. Load generator on its own stream so it never shifts the tour solver.
    let mut catalogue = Catalogue::new(HiveRng::new(config.seed).child(1));

    // 3. Opening stock: fill the entries.
    let mut refused = 0usize;
    loop {
        let item = catalogue.next_item()?;
        match hive.add_item(item) {
            Ok(_) => {}
            Err(HiveError::NoFreeEntryCell) => {
                refused += 1;
                break;
            }
            Err(e) => return Err(e.into()),
        }
    }
    info!(items = catalogue.issued() as usize - refused, "opening stock placed");

    // 4. Output.
    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvWriter::new(Path::new(OUTPUT_DIR))?;
    let mut obs = WarehouseObserver {
        inner:      HiveOutputObserver::new(writer),
        ready:      Vec::new(),
        tasks_done: 0,
    };

    // 5. Drive.
    let mut next_restock = 0u64;
    let mut next_order = between(catalogue.rng(), ORDER_GAP);
    let mut order_seq = 0u32;
    let mut requested: HashSet<ItemId> = HashSet::new();
    let mut collected = 0usize;
    let mut tick_errors = 0usize;

    let t0 = Instant::now();
    while hive.tick_count() < config.end_tick() {
        let now = hive.tick_count().0;

        if now >= next_restock {
            let item = catalogue.next_item()?;
            let wait = match hive.add_item(item) {
                Ok(_) => RESTOCK_AFTER_SUCCESS,
                Err(HiveError::NoFreeEntryCell) => {
                    refused += 1;
                    RESTOCK_AFTER_FAILURE
                }
                Err(e) => return Err(e.into()),
            };
            next_restock = now + between(catalogue.rng(), wait);
        }

        if now >= next_order {
            let want = catalogue.rng().gen_range(ORDER_SIZE.0..=ORDER_SIZE.1);
            let items: Vec<ItemId> = hive
                .staged_items()
                .map(|(_, item)| item.id)
                .filter(|id| !requested.contains(id))
                .take(want)
                .collect();
            if !items.is_empty() {
                requested.extend(items.iter().copied());
                hive.add_order(Order::new(OrderId(order_seq), items));
                order_seq += 1;
            }
            next_order = now + between(catalogue.rng(), ORDER_GAP);
        }

        // Errors are transient: the hive stays consistent, try again next tick.
        if let Err(e) = hive.step(&mut obs) {
            tick_errors += 1;
            warn!(tick = now, error = %e, "tick failed");
        }

        let (due, waiting): (Vec<_>, Vec<_>) =
            obs.ready.drain(..).partition(|(t, _)| t.0 + PICKUP_DELAY <= now);
        obs.ready = waiting;
        for (_, order) in due {
            let items = hive.collect_order(order)?;
            collected += items.len();
        }
    }
    obs.on_sim_end(hive.tick_count());
    let elapsed = t0.elapsed();

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 6. Summary.
    let orders = hive.orders();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!("  items issued     : {}", catalogue.issued());
    println!("  items refused    : {refused}");
    println!("  items staged     : {}", hive.staged_items().count());
    println!("  items collected  : {collected}");
    println!("  tasks completed  : {}", obs.tasks_done);
    println!("  tick errors      : {tick_errors}");
    println!(
        "  orders           : {} placed, {} waiting, {} picking, {} fulfilled",
        orders.len(),
        orders.count(OrderStatus::Init),
        orders.count(OrderStatus::Picking),
        orders.count(OrderStatus::Fulfilled),
    );
    println!("  output           : {OUTPUT_DIR}/bot_snapshots.csv, tick_summaries.csv");
    println!();

    // 7. Final bot table.
    println!("{:<6} {:<10} {:<8} {:<8} {:<24}", "Bot", "Position", "State", "Carried", "Task");
    println!("{}", "-".repeat(60));
    for bot in hive.bots() {
        let task = bot.current_task().map(ToString::to_string).unwrap_or_default();
        println!(
            "{:<6} {:<10} {:<8} {:<8} {:<24}",
            bot.name,
            bot.position().to_string(),
            format!("{:?}", bot.state()),
            bot.storage().len(),
            task,
        );
    }

    Ok(())
}
