use std::collections::{BTreeMap, VecDeque};

use crate::error::EngineError;
use crate::models::{OrderRecord, Price, Quantity, Side};

/// One side of one instrument's book, ordered by price-time priority:
/// best price first (highest for Buy, lowest for Sell), ascending sequence
/// within a price level.
///
/// Levels are per-price FIFO buckets keyed in a `BTreeMap`, so enqueue is
/// O(log n) and arrival order within a level is preserved without any explicit
/// sorting. Empty levels are removed eagerly; an empty bucket is never
/// retained.
#[derive(Debug)]
pub struct PriceTimeQueue {
    side: Side,
    levels: BTreeMap<Price, VecDeque<OrderRecord>>,
    len: usize,
}

impl PriceTimeQueue {
    pub fn new(side: Side) -> Self {
        Self {
            side,
            levels: BTreeMap::new(),
            len: 0,
        }
    }

    pub fn side(&self) -> Side {
        self.side
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of resting orders across all levels.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Sum of resting quantity across all levels.
    pub fn total_quantity(&self) -> Quantity {
        self.levels
            .values()
            .flat_map(|level| level.iter())
            .map(|order| order.quantity)
            .sum()
    }

    /// Insert at the price-time-correct position. Always succeeds; orders at
    /// the same price queue behind earlier arrivals.
    pub fn enqueue(&mut self, order: OrderRecord) {
        debug_assert_eq!(order.side, self.side);
        debug_assert!(order.quantity > 0);
        self.levels.entry(order.price).or_default().push_back(order);
        self.len += 1;
    }

    /// Read-only access to the best-priority order.
    pub fn peek_front(&self) -> Result<&OrderRecord, EngineError> {
        let (_, level) = self.best_level().ok_or(EngineError::EmptyQueue)?;
        level.front().ok_or(EngineError::EmptyQueue)
    }

    /// Remove and return the best-priority order.
    pub fn dequeue_front(&mut self) -> Result<OrderRecord, EngineError> {
        let price = self.best_price().ok_or(EngineError::EmptyQueue)?;
        let Some(level) = self.levels.get_mut(&price) else {
            return Err(EngineError::EmptyQueue);
        };
        let Some(order) = level.pop_front() else {
            return Err(EngineError::EmptyQueue);
        };
        if level.is_empty() {
            self.levels.remove(&price);
        }
        self.len -= 1;
        Ok(order)
    }

    /// Reduce the head order by `quantity` (a partial or full fill) and return
    /// its remaining quantity. A partially filled head keeps its queue position
    /// and original sequence; a fully filled head is removed along with its
    /// level if that empties it.
    pub fn fill_front(&mut self, quantity: Quantity) -> Result<Quantity, EngineError> {
        let price = self.best_price().ok_or(EngineError::EmptyQueue)?;
        let Some(level) = self.levels.get_mut(&price) else {
            return Err(EngineError::EmptyQueue);
        };
        let Some(front) = level.front_mut() else {
            return Err(EngineError::EmptyQueue);
        };
        debug_assert!(quantity <= front.quantity);
        front.quantity = front.quantity.saturating_sub(quantity);
        let remaining = front.quantity;
        if remaining == 0 {
            level.pop_front();
            if level.is_empty() {
                self.levels.remove(&price);
            }
            self.len -= 1;
        }
        Ok(remaining)
    }

    /// Best price level as `(price, total quantity)`, if any.
    pub fn best_level_summary(&self) -> Option<(Price, Quantity)> {
        self.best_level()
            .map(|(price, level)| (*price, level.iter().map(|o| o.quantity).sum()))
    }

    /// Up to `depth` levels, best price first, aggregated per level.
    pub fn depth_levels(&self, depth: usize) -> Vec<(Price, Quantity)> {
        let summarize = |(price, level): (&Price, &VecDeque<OrderRecord>)| {
            (*price, level.iter().map(|o| o.quantity).sum())
        };
        match self.side {
            Side::Buy => self.levels.iter().rev().take(depth).map(summarize).collect(),
            Side::Sell => self.levels.iter().take(depth).map(summarize).collect(),
        }
    }

    /// Resting orders in priority order (best level first, FIFO within).
    pub fn iter(&self) -> impl Iterator<Item = &OrderRecord> {
        let levels: Vec<&VecDeque<OrderRecord>> = match self.side {
            Side::Buy => self.levels.values().rev().collect(),
            Side::Sell => self.levels.values().collect(),
        };
        levels.into_iter().flat_map(|level| level.iter())
    }

    fn best_price(&self) -> Option<Price> {
        match self.side {
            Side::Buy => self.levels.keys().next_back().copied(),
            Side::Sell => self.levels.keys().next().copied(),
        }
    }

    fn best_level(&self) -> Option<(&Price, &VecDeque<OrderRecord>)> {
        match self.side {
            Side::Buy => self.levels.last_key_value(),
            Side::Sell => self.levels.first_key_value(),
        }
    }
}
