//! Failure kinds surfaced by the cleaning pipeline.
//!
//! Everything propagates through `anyhow`, but the three kinds below stay
//! downcastable so callers and tests can distinguish an unreadable file from
//! malformed CSV content or an absent required column.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum CleanError {
    #[error("I/O error: {0}")]
    Io(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Schema error: {0}")]
    Schema(String),
}
