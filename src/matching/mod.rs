pub mod book;
pub mod queue;

pub use book::InstrumentBook;
pub use queue::PriceTimeQueue;
