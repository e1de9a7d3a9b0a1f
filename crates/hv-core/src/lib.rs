//! `hv-core`: foundational types for the `hive` warehouse simulator.
//!
//! Every other `hv-*` crate depends on this one.  It has no `hv-*`
//! dependencies and only `rand` and `thiserror` externally (plus optional
//! `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `BotId`, `ItemId`, `OrderId`                          |
//! | [`geo`]     | `Coord`, Manhattan distance                           |
//! | [`time`]    | `Tick`                                                |
//! | [`rng`]     | `HiveRng` (seeded, simulation-wide)                   |
//! | [`color`]   | `Rgb` and its complementary color                     |
//! | [`item`]    | `Item`, one inventory unit                            |
//! | [`order`]   | `Order`, `OrderStatus`                                |
//! | [`error`]   | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod color;
pub mod error;
pub mod geo;
pub mod ids;
pub mod item;
pub mod order;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use color::Rgb;
pub use error::{CoreError, CoreResult};
pub use geo::Coord;
pub use ids::{BotId, ItemId, OrderId};
pub use item::Item;
pub use order::{Order, OrderStatus};
pub use rng::HiveRng;
pub use time::Tick;
