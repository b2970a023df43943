use thiserror::Error;

use crate::types::Position;

#[derive(Debug, Error)]
pub enum GiveawayError {
    #[error("invalid starting position data: {0}")]
    StartingPositionJson(#[from] serde_json::Error),
    #[error("starting chip at row {row}, column {col} is off the board")]
    StartOffBoard { row: u8, col: u8 },
    #[error("starting position places two chips on {0:?}")]
    StartOverlap(Position),
    #[error("row/col out of range: ({row}, {col})")]
    OutOfRange { row: u8, col: u8 },
    #[error("invalid engine config: {0}")]
    Config(String),
}
