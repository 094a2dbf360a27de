use core::ops::Index;
use ndarray::Array2;
use serde::{Deserialize, Serialize};

use crate::*;

/// Square board of cells stored row-major, flooding outward from [`Grid::ORIGIN`].
///
/// Adjacency is never stored: neighbours are computed from positions, so links are always
/// symmetric.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Grid {
    cells: Array2<Cell>,
    palette: Palette,
}

impl Grid {
    /// Top-left cell, the fixed seed of the flood region.
    pub const ORIGIN: Coord2 = (0, 0);

    /// Builds a random board for `config`. Prefer a [`GridGenerator`] when reproducibility
    /// matters across resets.
    pub fn create<R: rand::Rng>(config: GameConfig, rng: &mut R) -> Result<Self> {
        let config = GameConfig::new(config.board_size, config.palette_size)?;
        let palette = Palette::random(config.palette_size, rng)?;
        let size = config.board_size;

        let colors = Array2::from_shape_fn((usize::from(size), usize::from(size)), |_| {
            rng.random_range(0..config.palette_size)
        });

        Self::from_colors(colors, palette)
    }

    /// Builds a board from an explicit color layout. Only the origin starts flooded.
    pub fn from_colors(colors: Array2<ColorIndex>, palette: Palette) -> Result<Self> {
        let (rows, cols) = colors.dim();
        if rows == 0 || rows != cols || rows > usize::from(Coord::MAX) {
            return Err(GameError::InvalidBoardShape);
        }
        if colors.iter().any(|&color| !palette.contains(color)) {
            return Err(GameError::InvalidColor);
        }

        let mut cells = colors.mapv(|color| Cell::new(color, false));
        cells[nd_index(Self::ORIGIN)].mark_flooded();

        Ok(Self { cells, palette })
    }

    /// Side length of the board.
    pub fn size(&self) -> Coord {
        // from_colors caps the side length at Coord::MAX
        self.cells.nrows() as Coord
    }

    pub fn total_cells(&self) -> CellCount {
        cell_total(self.size())
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn contains(&self, coords: Coord2) -> bool {
        coords.0 < self.size() && coords.1 < self.size()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if self.contains(coords) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn cell_at(&self, coords: Coord2) -> Result<Cell> {
        let coords = self.validate_coords(coords)?;
        Ok(self[coords])
    }

    /// Color shared by the flood region, which is always the origin's color.
    pub fn region_color(&self) -> ColorIndex {
        self[Self::ORIGIN].color()
    }

    /// In-bounds 4-neighbours of `coords`, in left, top, right, bottom order.
    pub fn neighbors(&self, coords: Coord2) -> impl Iterator<Item = Coord2> + use<> {
        neighbors(coords, self.size())
    }

    /// All cells with their positions, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord2, Cell)> + '_ {
        self.cells
            .indexed_iter()
            .map(|((row, col), &cell)| ((row as Coord, col as Coord), cell))
    }

    pub fn flooded(&self) -> impl Iterator<Item = Coord2> + '_ {
        self.iter()
            .filter(|(_, cell)| cell.is_flooded())
            .map(|(coords, _)| coords)
    }

    pub fn flooded_count(&self) -> CellCount {
        self.cells
            .iter()
            .filter(|cell| cell.is_flooded())
            .count()
            .try_into()
            .unwrap_or(CellCount::MAX)
    }

    /// Whether every cell has the origin's color.
    pub fn is_uniform(&self) -> bool {
        let region_color = self.region_color();
        self.cells.iter().all(|cell| cell.color() == region_color)
    }

    /// Colors by position, for renderers.
    pub fn colors(&self) -> Array2<ColorIndex> {
        self.cells.mapv(Cell::color)
    }

    pub fn flood_mask(&self) -> Array2<bool> {
        self.cells.mapv(Cell::is_flooded)
    }

    pub(crate) fn cell_mut(&mut self, coords: Coord2) -> &mut Cell {
        &mut self.cells[nd_index(coords)]
    }
}

impl Index<Coord2> for Grid {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[nd_index(coords)]
    }
}
