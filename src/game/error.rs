use thiserror::Error;

/// The one fatal construction failure. No game state exists after it.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    /// Seat count outside the supported table size.
    #[error("number of players should be in between 1 and 10, got {0}")]
    InvalidPlayerCount(usize),
}
