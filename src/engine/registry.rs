use std::collections::BTreeMap;

use crate::matching::InstrumentBook;
use crate::models::Instrument;

/// Instrument -> book mapping. Books are created lazily on the first order for
/// an instrument and never removed (no delisting).
///
/// Backed by a `BTreeMap` so iteration is ascending by instrument identifier;
/// `MatchingEngine::match_all` relies on that for reproducible cross-instrument
/// ordering.
#[derive(Debug, Default)]
pub struct BookRegistry {
    books: BTreeMap<Instrument, InstrumentBook>,
}

impl BookRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get_or_create(&mut self, instrument: Instrument) -> &mut InstrumentBook {
        self.books
            .entry(instrument.clone())
            .or_insert_with(|| InstrumentBook::new(instrument))
    }

    pub fn get(&self, instrument: &str) -> Option<&InstrumentBook> {
        self.books.get(instrument)
    }

    pub fn get_mut(&mut self, instrument: &str) -> Option<&mut InstrumentBook> {
        self.books.get_mut(instrument)
    }

    /// Books in ascending instrument order.
    pub fn iter(&self) -> impl Iterator<Item = &InstrumentBook> {
        self.books.values()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut InstrumentBook> {
        self.books.values_mut()
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}
