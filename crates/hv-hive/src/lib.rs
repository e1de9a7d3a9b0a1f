//! `hv-hive`: the dispatcher that owns the grid, the bots, and the orders.
//!
//! # Tick loop
//!
//! ```text
//! for each tick:
//!   ① Motion      : every bot takes one `Bot::tick` step, in roster order.
//!   ② Completion  : tasks finishing during ① are handled synchronously:
//!                     RETRIEVE_ITEM → entry → bot, stage at nearest free interior
//!                     PLACE_ITEM    → bot → interior
//!                     PICK_ITEM     → interior → bot
//!                     PLACE_ORDER   → bot → exit; order FULFILLED when complete
//!   ③ Assignment  : each idle bot, in roster order, takes the first of:
//!                     re-stage cargo it still carries
//!                     an INIT order whose items are all staged
//!                     the nearest occupied, unreserved entry cell
//!                   Task targets are reserved as soon as they are assigned.
//! ```
//!
//! An error in ② is returned from the tick after every bot has moved, and
//! ③ is skipped for that tick.
//!
//! # Cargo features
//!
//! | Feature    | Effect                                                  |
//! |------------|---------------------------------------------------------|
//! | `parallel` | `Hive::forecast` runs on Rayon's thread pool.           |
//! | `fx-hash`  | FxHash for the order index.                             |
//! | `serde`    | `Serialize`/`Deserialize` on `HiveConfig`.              |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use hv_core::Coord;
//! use hv_hive::{HiveBuilder, HiveConfig, NoopObserver};
//!
//! let mut hive = HiveBuilder::new(HiveConfig::default())
//!     .bot("A", Coord::new(2, 2))
//!     .build()?;
//! hive.add_item(item)?;
//! hive.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod hive;
pub mod observer;
pub mod orders;


pub use builder::HiveBuilder;
pub use config::HiveConfig;
pub use error::{HiveError, HiveResult};
pub use hive::Hive;
pub use observer::{NoopObserver, HiveObserver, TickSummary};
pub use orders::OrderBook;
