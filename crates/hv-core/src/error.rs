//! Core error type.
//!
//! Higher crates define their own error enums and wrap this one (or their
//! siblings') through `#[from]` variants.

use thiserror::Error;

use crate::ItemId;

/// Errors raised while constructing core value types.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("item {0} must have a positive quantity")]
    InvalidQuantity(ItemId),

    #[error("cannot parse color {0:?}; expected #rrggbb")]
    InvalidColor(String),
}

/// Shorthand result type for `hv-core`.
pub type CoreResult<T> = Result<T, CoreError>;
