use alloc::collections::{BTreeSet, VecDeque};
use alloc::vec::Vec;

use crate::*;

/// Result of one flood or spread pass.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum FloodOutcome {
    NoChange,
    Changed {
        /// Cells already in the region that took the new color.
        recolored: CellCount,
        /// Cells that joined the region during this pass.
        absorbed: CellCount,
    },
}

impl FloodOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed { .. } => true,
        }
    }

    pub const fn absorbed(self) -> CellCount {
        match self {
            Self::NoChange => 0,
            Self::Changed { absorbed, .. } => absorbed,
        }
    }
}

/// Grows the flooded region of a [`Grid`] one ring at a time.
///
/// Every pass works from the set of cells flooded when the pass starts; cells that join
/// during the pass are not used as seeds until the next one.
#[derive(Debug)]
pub struct FloodEngine<'a> {
    grid: &'a mut Grid,
}

impl<'a> FloodEngine<'a> {
    pub fn new(grid: &'a mut Grid) -> Self {
        Self { grid }
    }

    /// Recolors the flooded region containing `seed` to `new_color`, then floods its direct
    /// neighbours that still carry the region's previous color.
    ///
    /// A flood from a cell outside the region, or to the color the region already has, does
    /// nothing.
    pub fn flood(&mut self, seed: Coord2, new_color: ColorIndex) -> Result<FloodOutcome> {
        let seed = self.grid.validate_coords(seed)?;
        if !self.grid.palette().contains(new_color) {
            return Err(GameError::InvalidColor);
        }

        if !self.grid[seed].is_flooded() {
            log::debug!("Not flooding from {:?}, it is outside the region", seed);
            return Ok(FloodOutcome::NoChange);
        }

        let old_color = self.grid[seed].color();
        if old_color == new_color {
            return Ok(FloodOutcome::NoChange);
        }

        let region = self.region_from(seed);
        let grid = &*self.grid;
        let frontier: BTreeSet<Coord2> = region
            .iter()
            .flat_map(|&coords| grid.neighbors(coords))
            .filter(|&pos| {
                let cell = grid[pos];
                !cell.is_flooded() && cell.color() == old_color
            })
            .collect();
        log::trace!(
            "Flooding {} cells from {:?} to color {}, frontier: {:?}",
            region.len(),
            seed,
            new_color,
            frontier
        );

        for &coords in &region {
            let cell = self.grid.cell_mut(coords);
            cell.paint(new_color);
            cell.mark_flooded();
        }
        for &coords in &frontier {
            let cell = self.grid.cell_mut(coords);
            cell.paint(new_color);
            cell.mark_flooded();
        }

        Ok(FloodOutcome::Changed {
            recolored: count(region.len()),
            absorbed: count(frontier.len()),
        })
    }

    /// Lets every flooded cell absorb its direct neighbours that already share its color.
    /// Colors are left untouched.
    pub fn spread(&mut self) -> FloodOutcome {
        let grid = &*self.grid;
        let frontier: BTreeSet<Coord2> = grid
            .flooded()
            .flat_map(|coords| {
                let color = grid[coords].color();
                grid.neighbors(coords).filter(move |&pos| {
                    let cell = grid[pos];
                    !cell.is_flooded() && cell.color() == color
                })
            })
            .collect();

        if frontier.is_empty() {
            return FloodOutcome::NoChange;
        }

        log::trace!("Spreading into {:?}", frontier);
        for &coords in &frontier {
            self.grid.cell_mut(coords).mark_flooded();
        }

        FloodOutcome::Changed {
            recolored: 0,
            absorbed: count(frontier.len()),
        }
    }

    /// Flooded cells connected to `seed` through other flooded cells, `seed` included.
    fn region_from(&self, seed: Coord2) -> Vec<Coord2> {
        let mut visited = BTreeSet::from([seed]);
        let mut to_visit = VecDeque::from([seed]);
        let mut region = Vec::new();

        while let Some(coords) = to_visit.pop_front() {
            region.push(coords);
            to_visit.extend(
                self.grid
                    .neighbors(coords)
                    .filter(|&pos| self.grid[pos].is_flooded())
                    .filter(|&pos| visited.insert(pos)),
            );
        }

        region
    }
}

fn count(len: usize) -> CellCount {
    len.try_into().unwrap_or(CellCount::MAX)
}
