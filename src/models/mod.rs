use std::fmt;

use serde::{Deserialize, Serialize};

pub type Instrument = String;
pub type OrderSeq = u64;
pub type Price = u64;
pub type Quantity = u64;

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "buy"),
            Side::Sell => write!(f, "sell"),
        }
    }
}

/// One resting order. `quantity` is the only mutable field and only ever
/// decreases through partial fills; an order reaching zero quantity is removed
/// from its queue, never retained.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OrderRecord {
    pub side: Side,
    pub instrument: Instrument,
    pub quantity: Quantity,
    pub price: Price,
    /// Assigned by the engine at submission; establishes time priority and
    /// survives partial fills.
    pub sequence: OrderSeq,
}

/// Output of a match. Emitted once, never mutated; the core keeps no trade
/// history.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TradeRecord {
    pub instrument: Instrument,
    pub quantity: Quantity,
    pub price: Price,
    pub buy_sequence: OrderSeq,
    pub sell_sequence: OrderSeq,
}

/// Aggregated per-level depth view of one book, best price first on both sides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BookSnapshot {
    pub bids: Vec<(Price, Quantity)>,
    pub asks: Vec<(Price, Quantity)>,
}
