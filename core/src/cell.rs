use serde::{Deserialize, Serialize};

use crate::ColorIndex;

/// A single board square: its palette color and whether it has joined the origin region.
///
/// Position is implied by where the cell lives in the [`Grid`](crate::Grid).
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    color: ColorIndex,
    flooded: bool,
}

impl Cell {
    pub const fn new(color: ColorIndex, flooded: bool) -> Self {
        Self { color, flooded }
    }

    pub const fn color(self) -> ColorIndex {
        self.color
    }

    pub const fn is_flooded(self) -> bool {
        self.flooded
    }

    pub(crate) fn paint(&mut self, color: ColorIndex) {
        self.color = color;
    }

    /// Once flooded, a cell stays flooded until the grid is replaced.
    pub(crate) fn mark_flooded(&mut self) {
        self.flooded = true;
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::new(0, false)
    }
}
