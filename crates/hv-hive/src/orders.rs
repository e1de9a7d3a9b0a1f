//! Arrival-ordered order storage with lookup by id.

use hv_core::{Order, OrderId, OrderStatus};

#[cfg(feature = "fx-hash")]
type OrderIndex = rustc_hash::FxHashMap<OrderId, usize>;
#[cfg(not(feature = "fx-hash"))]
type OrderIndex = std::collections::HashMap<OrderId, usize>;

/// Every order the hive has accepted, oldest first.
///
/// Orders are never removed: FULFILLED orders stay as an archive.  If an id
/// is submitted twice, lookups resolve to the most recent submission and an
/// older copy still waiting for a bot is dropped from the queue.
///
/// INIT orders are also tracked in a separate queue, so the assignment pass
/// never walks the archive.
#[derive(Clone, Debug, Default)]
pub struct OrderBook {
    orders:  Vec<Order>,
    index:   OrderIndex,
    /// Positions in `orders` still in INIT, oldest first.
    waiting: Vec<usize>,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }

    pub fn push(&mut self, order: Order) {
        let pos = self.orders.len();
        if let Some(old) = self.index.insert(order.id, pos) {
            self.waiting.retain(|&w| w != old);
        }
        if order.status == OrderStatus::Init {
            self.waiting.push(pos);
        }
        self.orders.push(order);
    }

    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.index.get(&id).map(|&i| &self.orders[i])
    }

    pub(crate) fn get_mut(&mut self, id: OrderId) -> Option<&mut Order> {
        self.index.get(&id).map(|&i| &mut self.orders[i])
    }

    /// Take `id` off the waiting queue and mark it PICKING.
    pub(crate) fn start_picking(&mut self, id: OrderId) -> Option<&mut Order> {
        let pos = *self.index.get(&id)?;
        self.waiting.retain(|&w| w != pos);
        let order = &mut self.orders[pos];
        order.status = OrderStatus::Picking;
        Some(order)
    }

    /// All orders in arrival order.
    pub fn iter(&self) -> impl Iterator<Item = &Order> + '_ {
        self.orders.iter()
    }

    /// Ids of orders still waiting for a bot, oldest first.
    pub fn pending(&self) -> Vec<OrderId> {
        self.waiting.iter().map(|&i| self.orders[i].id).collect()
    }

    /// Number of orders still waiting for a bot.
    pub fn pending_len(&self) -> usize {
        self.waiting.len()
    }

    /// Number of orders in `status`.
    pub fn count(&self, status: OrderStatus) -> usize {
        self.orders.iter().filter(|o| o.status == status).count()
    }
}
