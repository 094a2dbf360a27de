/// Single coordinate axis used for the board side length and positions.
pub type Coord = u8;

/// Count type used for cell totals and flood sizes.
pub type CellCount = u16;

/// Two-dimensional coordinates `(row, col)`.
pub type Coord2 = (Coord, Coord);

/// Index into a [`Palette`](crate::Palette).
pub type ColorIndex = u8;

/// Count type for moves taken and the move limit.
pub type MoveCount = u16;

/// Count type for elapsed host ticks.
pub type TickCount = u32;

/// Number of cells on a square board. A `Coord::MAX` side still fits in `CellCount`.
pub const fn cell_total(side: Coord) -> CellCount {
    side as CellCount * side as CellCount
}

/// `ndarray` index of `(row, col)`.
pub(crate) fn nd_index((row, col): Coord2) -> [usize; 2] {
    [row.into(), col.into()]
}

/// The four links every cell has on a board, some of which fall off the edge.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Top,
    Right,
    Bottom,
}

impl Direction {
    pub const ALL: [Self; 4] = [Self::Left, Self::Top, Self::Right, Self::Bottom];

    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Top => Self::Bottom,
            Self::Right => Self::Left,
            Self::Bottom => Self::Top,
        }
    }

    /// The cell one step away on a `side` x `side` board, or `None` past the edge.
    pub fn step(self, (row, col): Coord2, side: Coord) -> Option<Coord2> {
        let next = match self {
            Self::Left => (row, col.checked_sub(1)?),
            Self::Top => (row.checked_sub(1)?, col),
            Self::Right => (row, col.checked_add(1)?),
            Self::Bottom => (row.checked_add(1)?, col),
        };
        (next.0 < side && next.1 < side).then_some(next)
    }
}

/// In-bounds 4-neighbours of `coords`, in left, top, right, bottom order.
pub fn neighbors(coords: Coord2, side: Coord) -> impl Iterator<Item = Coord2> {
    Direction::ALL
        .into_iter()
        .filter_map(move |direction| direction.step(coords, side))
}
