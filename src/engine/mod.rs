pub mod registry;

use tracing::{debug, instrument};

use crate::error::EngineError;
use crate::matching::InstrumentBook;
use crate::models::{BookSnapshot, Instrument, OrderRecord, OrderSeq, Price, Quantity, Side, TradeRecord};
use self::registry::BookRegistry;

/// Public entry point of the matching core.
///
/// Single-threaded and run-to-completion: each call is atomic from the
/// caller's perspective. Callers needing concurrency must serialize access per
/// instrument book; books for different instruments share no state.
#[derive(Debug)]
pub struct MatchingEngine {
    registry: BookRegistry,
    next_sequence: OrderSeq,
}

impl Default for MatchingEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl MatchingEngine {
    pub fn new() -> Self {
        Self {
            registry: BookRegistry::new(),
            next_sequence: 1,
        }
    }

    /// Accept a new order intent and rest it on the correct side of its
    /// instrument's book, creating the book on first use.
    ///
    /// Returns the assigned sequence number so callers can correlate later
    /// fills. Rejects zero quantity or zero price with [`EngineError::InvalidOrder`]
    /// before any state is touched: no book is created and no sequence is
    /// consumed by a rejected order.
    pub fn submit(
        &mut self,
        side: Side,
        instrument: impl Into<Instrument>,
        quantity: Quantity,
        price: Price,
    ) -> Result<OrderSeq, EngineError> {
        if quantity == 0 {
            return Err(EngineError::InvalidOrder("quantity must be positive"));
        }
        if price == 0 {
            return Err(EngineError::InvalidOrder("price must be positive"));
        }

        let instrument = instrument.into();
        let sequence = self.next_sequence;
        self.next_sequence += 1;

        debug!(%side, %instrument, quantity, price, sequence, "order accepted");
        let book = self.registry.get_or_create(instrument.clone());
        book.enqueue(OrderRecord {
            side,
            instrument,
            quantity,
            price,
            sequence,
        });
        metrics::counter!("tickermatch_orders_submitted_total").increment(1);
        Ok(sequence)
    }

    /// Match crossing orders for one instrument, returning the emitted trades.
    ///
    /// A no-op (empty vec) for unknown instruments or when either side is
    /// empty; that is the expected steady state, not an error. Idempotent once
    /// exhausted: matching only ever reduces outstanding quantity.
    #[instrument(skip(self))]
    pub fn match_instrument(&mut self, instrument: &str) -> Vec<TradeRecord> {
        let Some(book) = self.registry.get_mut(instrument) else {
            return Vec::new();
        };
        let trades = book.match_orders();
        if !trades.is_empty() {
            debug!(instrument, trades = trades.len(), "matched");
            metrics::counter!("tickermatch_trades_emitted_total").increment(trades.len() as u64);
        }
        trades
    }

    /// Match every instrument with a populated book, in ascending instrument
    /// order (stable, so identical runs emit identical trade sequences).
    pub fn match_all(&mut self) -> Vec<TradeRecord> {
        let mut trades = Vec::new();
        for book in self.registry.iter_mut() {
            if book.has_both_sides() {
                trades.extend(book.match_orders());
            }
        }
        if !trades.is_empty() {
            metrics::counter!("tickermatch_trades_emitted_total").increment(trades.len() as u64);
        }
        trades
    }

    /// Read-only access to one instrument's book. Unlike `submit`, queries do
    /// not create books on demand.
    pub fn book(&self, instrument: &str) -> Result<&InstrumentBook, EngineError> {
        self.registry
            .get(instrument)
            .ok_or_else(|| EngineError::UnknownInstrument(instrument.to_string()))
    }

    /// Aggregated depth view of one instrument's book.
    pub fn snapshot(&self, instrument: &str, depth: usize) -> Result<BookSnapshot, EngineError> {
        self.book(instrument).map(|book| book.snapshot(depth))
    }

    /// Total quantity resting on one side across all instruments.
    pub fn resting_quantity(&self, side: Side) -> Quantity {
        self.registry
            .iter()
            .map(|book| book.resting_quantity(side))
            .sum()
    }

    pub fn num_instruments(&self) -> usize {
        self.registry.len()
    }

    /// Instruments with at least one order ever submitted, ascending.
    pub fn instruments(&self) -> impl Iterator<Item = &str> {
        self.registry.iter().map(|book| book.instrument())
    }
}
