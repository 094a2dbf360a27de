use rand::SeedableRng;
use rand::rngs::SmallRng;

use super::*;

/// Generation strategy that paints every cell uniformly at random from a freshly rolled
/// palette. Successive boards come from one seeded stream, so a seed fixes the whole
/// sequence of boards a session will see.
#[derive(Clone, Debug)]
pub struct RandomGridGenerator {
    seed: u64,
    rng: SmallRng,
}

impl RandomGridGenerator {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }
}

impl GridGenerator for RandomGridGenerator {
    fn generate(&mut self, config: GameConfig) -> Result<Grid> {
        let grid = Grid::create(config, &mut self.rng)?;

        if config.palette_size > 1 && grid.is_uniform() {
            log::warn!(
                "Generated a board that is already solved, size: {}, colors: {}",
                config.board_size,
                config.palette_size
            );
        }
        log::debug!(
            "Generated {0}x{0} board with {1} colors from seed {2}",
            config.board_size,
            config.palette_size,
            self.seed
        );
        Ok(grid)
    }
}
