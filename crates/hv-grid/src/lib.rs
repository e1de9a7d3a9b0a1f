//! `hv-grid`: the warehouse floor, a fixed rectangle of typed cells.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                    |
//! |-------------|-------------------------------------------------------------|
//! | [`cell`]    | `Cell`, `CellKind`, `CellContents`                          |
//! | [`layout`]  | `GridLayout`, which coordinates are Entry / Exit            |
//! | [`grid`]    | `Grid`, storage, reservations, nearest-cell queries         |
//! | [`error`]   | `GridError`, `GridResult<T>`                                |
//!
//! # Cell model
//!
//! | Kind       | Holds                                  | Role                      |
//! |------------|----------------------------------------|---------------------------|
//! | `Entry`    | at most one `Item`                     | items enter the warehouse |
//! | `Interior` | at most one `Item`                     | staging                   |
//! | `Exit`     | a list of `Item`s + the owning order   | order pickup              |
//!
//! Every cell also carries a `reserved` flag: set while one in-flight bot
//! task targets the cell.  It is a cooperative single-writer flag, not a
//! lock; the dispatcher is the only writer.
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `CellKind`/`GridLayout`. |

pub mod cell;
pub mod error;
pub mod grid;
pub mod layout;


pub use cell::{Cell, CellContents, CellKind};
pub use error::{GridError, GridResult};
pub use grid::Grid;
pub use layout::GridLayout;
