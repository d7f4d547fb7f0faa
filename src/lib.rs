pub mod config;
pub mod engine;
pub mod error;
pub mod matching;
pub mod models;

pub mod metrics;

pub use engine::MatchingEngine;
pub use error::EngineError;
pub use models::{BookSnapshot, Instrument, OrderRecord, OrderSeq, Price, Quantity, Side, TradeRecord};
