//! Strongly typed identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they work as map keys without ceremony.
//! Ids are assigned by whoever creates the entity: the dispatcher numbers
//! bots, while items and orders arrive from external collaborators already
//! numbered.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        impl From<$inner> for $name {
            #[inline(always)]
            fn from(n: $inner) -> $name {
                $name(n)
            }
        }
    };
}

typed_id! {
    /// Index of a bot in the dispatcher's roster.
    pub struct BotId(u32);
}

typed_id! {
    /// Identity of an inventory unit.
    ///
    /// Two physical units may share an id when a collaborator re-deposits
    /// the same product; the dispatcher treats the id as "any unit of this".
    pub struct ItemId(u32);
}

typed_id! {
    /// Identity of a fulfillment request.
    pub struct OrderId(u32);
}
