use alloc::format;
use alloc::string::String;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Side length of a drawn cell when the host does not pick one.
pub const DEFAULT_CELL_PIXELS: u32 = 20;

/// Read-only picture of a game for renderers.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: Coord,
    pub colors: Array2<ColorIndex>,
    pub flooded: Array2<bool>,
    pub palette: Palette,
    pub moves: MoveCount,
    pub move_limit: MoveCount,
    pub elapsed_ticks: TickCount,
    pub status: GameStatus,
}

impl Snapshot {
    pub fn from_game<G: GridGenerator>(game: &Game<G>) -> Self {
        let grid = game.grid();
        Self {
            size: grid.size(),
            colors: grid.colors(),
            flooded: grid.flood_mask(),
            palette: grid.palette().clone(),
            moves: game.moves(),
            move_limit: game.move_limit(),
            elapsed_ticks: game.elapsed_ticks(),
            status: game.status(),
        }
    }

    pub fn color_index_at(&self, coords: Coord2) -> Option<ColorIndex> {
        self.colors.get(nd_index(coords)).copied()
    }

    pub fn color_at(&self, coords: Coord2) -> Option<Rgb> {
        self.color_index_at(coords)
            .and_then(|index| self.palette.get(index))
    }

    pub fn status_line(&self) -> String {
        format!("Steps: {} / {}", self.moves, self.move_limit)
    }

    pub fn time_line(&self) -> String {
        format!("Time: {}", self.elapsed_ticks)
    }

    pub fn banner(&self) -> Option<&'static str> {
        match self.status {
            GameStatus::Playing => None,
            GameStatus::Won => Some("You won!"),
            GameStatus::Lost => Some("You lost!"),
        }
    }

    /// Width and height of the drawn board.
    pub fn scene_size(&self, cell_pixels: u32) -> (u32, u32) {
        let side = u32::from(self.size).saturating_mul(cell_pixels);
        (side, side)
    }

    /// Cell under the pixel `(x, y)`, where `x` runs along columns and `y` along rows.
    pub fn locate(&self, x: u32, y: u32, cell_pixels: u32) -> Option<Coord2> {
        if cell_pixels == 0 {
            return None;
        }
        let row = Coord::try_from(y / cell_pixels).ok()?;
        let col = Coord::try_from(x / cell_pixels).ok()?;
        (row < self.size && col < self.size).then_some((row, col))
    }
}
