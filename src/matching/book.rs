use crate::matching::queue::PriceTimeQueue;
use crate::models::{BookSnapshot, Instrument, OrderRecord, Price, Quantity, Side, TradeRecord};

/// Both sides of one instrument's book. Orders never cross instrument
/// boundaries; the registry hands each submission to exactly one book.
#[derive(Debug)]
pub struct InstrumentBook {
    instrument: Instrument,
    bids: PriceTimeQueue,
    asks: PriceTimeQueue,
}

impl InstrumentBook {
    pub fn new(instrument: impl Into<Instrument>) -> Self {
        Self {
            instrument: instrument.into(),
            bids: PriceTimeQueue::new(Side::Buy),
            asks: PriceTimeQueue::new(Side::Sell),
        }
    }

    pub fn instrument(&self) -> &str {
        &self.instrument
    }

    pub fn enqueue(&mut self, order: OrderRecord) {
        match order.side {
            Side::Buy => self.bids.enqueue(order),
            Side::Sell => self.asks.enqueue(order),
        }
    }

    /// Match crossing top-of-book orders until the spread opens or one side
    /// empties, emitting one trade per crossing.
    ///
    /// Only the heads compete: in a price-time book they are provably the best
    /// available on each side, so if they cannot cross, none can. Trades print
    /// at the ask head's limit price. Partially filled heads keep their queue
    /// position and original sequence; fully filled orders are removed. Safe to
    /// call with either side empty (no-op) and idempotent once exhausted.
    pub fn match_orders(&mut self) -> Vec<TradeRecord> {
        let mut trades = Vec::new();
        loop {
            let (Ok(bid), Ok(ask)) = (self.bids.peek_front(), self.asks.peek_front()) else {
                break;
            };
            if bid.price < ask.price {
                break;
            }
            let quantity = bid.quantity.min(ask.quantity);
            let trade = TradeRecord {
                instrument: self.instrument.clone(),
                quantity,
                price: ask.price,
                buy_sequence: bid.sequence,
                sell_sequence: ask.sequence,
            };
            if self.bids.fill_front(quantity).is_err() || self.asks.fill_front(quantity).is_err() {
                break;
            }
            trades.push(trade);
        }
        trades
    }

    pub fn best_bid(&self) -> Option<(Price, Quantity)> {
        self.bids.best_level_summary()
    }

    pub fn best_ask(&self) -> Option<(Price, Quantity)> {
        self.asks.best_level_summary()
    }

    pub fn snapshot(&self, depth: usize) -> BookSnapshot {
        BookSnapshot {
            bids: self.bids.depth_levels(depth),
            asks: self.asks.depth_levels(depth),
        }
    }

    pub fn has_both_sides(&self) -> bool {
        !self.bids.is_empty() && !self.asks.is_empty()
    }

    pub fn resting_orders(&self, side: Side) -> usize {
        self.side_queue(side).len()
    }

    pub fn resting_quantity(&self, side: Side) -> Quantity {
        self.side_queue(side).total_quantity()
    }

    /// Resting orders on one side in priority order, for inspection and tests.
    pub fn orders(&self, side: Side) -> impl Iterator<Item = &OrderRecord> {
        self.side_queue(side).iter()
    }

    fn side_queue(&self, side: Side) -> &PriceTimeQueue {
        match side {
            Side::Buy => &self.bids,
            Side::Sell => &self.asks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(side: Side, quantity: Quantity, price: Price, sequence: u64) -> OrderRecord {
        OrderRecord {
            side,
            instrument: "X".to_string(),
            quantity,
            price,
            sequence,
        }
    }

    #[test]
    fn crossing_heads_trade_at_ask_price() {
        let mut book = InstrumentBook::new("X");
        book.enqueue(order(Side::Buy, 100, 50, 1));
        book.enqueue(order(Side::Sell, 60, 45, 2));
        let trades = book.match_orders();
        assert_eq!(
            trades,
            vec![TradeRecord {
                instrument: "X".to_string(),
                quantity: 60,
                price: 45,
                buy_sequence: 1,
                sell_sequence: 2,
            }]
        );
        assert_eq!(book.best_bid(), Some((50, 40)));
        assert_eq!(book.best_ask(), None);
    }

    #[test]
    fn open_spread_stops_the_loop() {
        let mut book = InstrumentBook::new("X");
        book.enqueue(order(Side::Buy, 10, 40, 1));
        book.enqueue(order(Side::Sell, 10, 45, 2));
        assert!(book.match_orders().is_empty());
        assert_eq!(book.best_bid(), Some((40, 10)));
        assert_eq!(book.best_ask(), Some((45, 10)));
    }

    #[test]
    fn one_crossing_order_sweeps_multiple_levels() {
        let mut book = InstrumentBook::new("X");
        book.enqueue(order(Side::Sell, 2, 100, 1));
        book.enqueue(order(Side::Sell, 2, 101, 2));
        book.enqueue(order(Side::Buy, 5, 101, 3));
        let trades = book.match_orders();
        assert_eq!(trades.len(), 2);
        assert_eq!((trades[0].price, trades[0].quantity), (100, 2));
        assert_eq!((trades[1].price, trades[1].quantity), (101, 2));
        assert_eq!(book.best_bid(), Some((101, 1)));
        assert_eq!(book.best_ask(), None);
    }

    #[test]
    fn partial_residue_matches_first_on_next_call() {
        let mut book = InstrumentBook::new("X");
        book.enqueue(order(Side::Buy, 100, 50, 1));
        book.enqueue(order(Side::Sell, 60, 45, 2));
        book.match_orders();
        book.enqueue(order(Side::Buy, 40, 50, 3));
        book.enqueue(order(Side::Sell, 20, 45, 4));
        let trades = book.match_orders();
        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].buy_sequence, 1);
        assert_eq!(trades[0].quantity, 20);
    }
}
