use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board size and palette size must both be positive")]
    InvalidConfiguration,
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Color index is outside the palette")]
    InvalidColor,
    #[error("Board layout must be a non-empty square")]
    InvalidBoardShape,
}

pub type Result<T> = core::result::Result<T, GameError>;
