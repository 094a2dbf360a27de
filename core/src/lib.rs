#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use cell::*;
pub use color::*;
pub use error::*;
pub use event::*;
pub use flood::*;
pub use game::*;
pub use generator::*;
pub use grid::*;
pub use snapshot::*;
pub use types::*;

mod cell;
mod color;
mod error;
mod event;
mod flood;
mod game;
mod generator;
mod grid;
mod snapshot;
mod types;

/// Extra moves granted on top of board side plus palette size.
pub const MOVE_LIMIT_OFFSET: MoveCount = 10;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameConfig {
    pub board_size: Coord,
    pub palette_size: ColorIndex,
}

impl GameConfig {
    pub const fn new_unchecked(board_size: Coord, palette_size: ColorIndex) -> Self {
        Self {
            board_size,
            palette_size,
        }
    }

    pub fn new(board_size: Coord, palette_size: ColorIndex) -> Result<Self> {
        if board_size == 0 || palette_size == 0 {
            return Err(GameError::InvalidConfiguration);
        }
        Ok(Self::new_unchecked(board_size, palette_size))
    }

    /// The 14x14 board with six colors.
    pub const fn classic() -> Self {
        Self::new_unchecked(14, 6)
    }

    pub const fn total_cells(&self) -> CellCount {
        cell_total(self.board_size)
    }

    pub const fn move_limit(&self) -> MoveCount {
        move_limit(self.board_size, self.palette_size)
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::classic()
    }
}

pub const fn move_limit(board_size: Coord, palette_size: ColorIndex) -> MoveCount {
    board_size as MoveCount + palette_size as MoveCount + MOVE_LIMIT_OFFSET
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn move_limit_adds_fixed_offset() {
        assert_eq!(move_limit(14, 6), 30);
        assert_eq!(move_limit(10, 5), 25);
        assert_eq!(GameConfig::classic().move_limit(), 30);
        assert_eq!(move_limit(Coord::MAX, ColorIndex::MAX), 520);
    }

    #[test]
    fn config_rejects_non_positive_sizes() {
        assert_eq!(GameConfig::new(0, 6), Err(GameError::InvalidConfiguration));
        assert_eq!(GameConfig::new(14, 0), Err(GameError::InvalidConfiguration));
        assert_eq!(GameConfig::new(14, 6), Ok(GameConfig::classic()));
    }
}
