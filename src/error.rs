use crate::models::Instrument;

#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum EngineError {
    /// Submission rejected before any state was touched.
    #[error("invalid order: {0}")]
    InvalidOrder(&'static str),
    /// Internal queue signal; `match_instrument`/`match_all` check emptiness
    /// first, so public callers never observe this.
    #[error("queue is empty")]
    EmptyQueue,
    /// Read-only queries do not create books on demand.
    #[error("unknown instrument: {0}")]
    UnknownInstrument(Instrument),
}
