use serde::{Deserialize, Serialize};

use crate::*;

/// Input delivered by the host loop. Pixel-to-cell translation happens on the host side,
/// see [`Snapshot::locate`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// Click on the cell at `(row, col)`.
    Select { row: Coord, col: Coord },
    /// Direct pick of a palette entry.
    SelectColor(ColorIndex),
    /// Key press; only [`Event::RESET_KEY`] does anything.
    Key(char),
    /// One frame of the host clock.
    Tick,
    Reset,
}

impl Event {
    pub const RESET_KEY: char = 'r';
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum EventOutcome {
    Ignored,
    Move(MoveOutcome),
    Tick(FloodOutcome),
    Reset,
}

impl EventOutcome {
    /// Whether the host should redraw. Ticks always advance the clock.
    pub const fn has_update(self) -> bool {
        match self {
            Self::Ignored => false,
            Self::Move(outcome) => outcome.has_update(),
            Self::Tick(_) => true,
            Self::Reset => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn redraw_needed_only_for_changes() {
        let changed = FloodOutcome::Changed {
            recolored: 0,
            absorbed: 2,
        };
        let cases = [
            (EventOutcome::Ignored, false),
            (EventOutcome::Move(MoveOutcome::Ignored), false),
            (EventOutcome::Move(MoveOutcome::Flooded), true),
            (EventOutcome::Move(MoveOutcome::Won), true),
            (EventOutcome::Move(MoveOutcome::Lost), true),
            (EventOutcome::Tick(FloodOutcome::NoChange), true),
            (EventOutcome::Tick(changed), true),
            (EventOutcome::Reset, true),
        ];

        for (outcome, expected) in cases {
            assert_eq!(outcome.has_update(), expected, "{:?}", outcome);
        }
    }

    #[test]
    fn move_outcome_update_flags() {
        assert!(!MoveOutcome::Ignored.has_update());
        assert!(MoveOutcome::Flooded.has_update());
        assert!(MoveOutcome::Won.has_update());
        assert!(MoveOutcome::Lost.has_update());
        assert!(!FloodOutcome::NoChange.has_update());
    }
}
