use thiserror::Error;

/// Faults surfaced by the per-day step store.
///
/// `Storage` covers I/O and corruption; it propagates out of the rollover
/// write path so a failed commit is never silently dropped. `NotFound` only
/// means "no history yet" and is expected from `first_entry`/`last_entry`
/// on a fresh store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage fault: {0}")]
    Storage(String),

    #[error("step history is empty")]
    NotFound,

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("database worker terminated unexpectedly")]
    WorkerGone,
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Storage(err.to_string())
    }
}
