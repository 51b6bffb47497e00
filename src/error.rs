use std::io;

use thiserror::Error;

/// Errors raised while loading configuration or persisting the best score.
#[derive(Debug, Error)]
pub enum Error {
    #[error("i/o error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("cell size must be positive")]
    ZeroCellSize,
    #[error("board {width}x{height} is not a whole number of {cell_size}px cells")]
    MisalignedBoard {
        width: i32,
        height: i32,
        cell_size: i32,
    },
    #[error("initial speed must be positive")]
    ZeroSpeed,
    #[error("max speed {max_speed} is below the initial speed {initial_speed}")]
    MaxSpeedTooLow { max_speed: u32, initial_speed: u32 },
}

pub type Result<T> = std::result::Result<T, Error>;
