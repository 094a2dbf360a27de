use crate::*;
pub use random::*;

mod random;

/// Source of fresh boards, consulted at game start and on every reset.
pub trait GridGenerator {
    fn generate(&mut self, config: GameConfig) -> Result<Grid>;
}
