use core::num::Saturating;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    Playing,
    Won,
    Lost,
}

impl GameStatus {
    pub const fn is_over(self) -> bool {
        matches!(self, Self::Won | Self::Lost)
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Playing => "Playing",
            Self::Won => "Won",
            Self::Lost => "Lost",
        }
    }
}

impl Default for GameStatus {
    fn default() -> Self {
        Self::Playing
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MoveOutcome {
    Ignored,
    Flooded,
    Won,
    Lost,
}

impl MoveOutcome {
    pub const fn has_update(self) -> bool {
        use MoveOutcome::*;
        match self {
            Ignored => false,
            Flooded => true,
            Won => true,
            Lost => true,
        }
    }
}

/// One flood-it session: the board, the move budget and the tick clock.
///
/// Status is derived from the board and the counters on every query.
#[derive(Clone, Debug)]
pub struct Game<G = RandomGridGenerator> {
    config: GameConfig,
    generator: G,
    grid: Grid,
    moves: Saturating<MoveCount>,
    elapsed: Saturating<TickCount>,
}

impl Game {
    /// Starts a game on a random board drawn from `seed`.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        Self::with_generator(config, RandomGridGenerator::new(seed))
    }
}

impl<G: GridGenerator> Game<G> {
    pub fn with_generator(config: GameConfig, mut generator: G) -> Result<Self> {
        let config = GameConfig::new(config.board_size, config.palette_size)?;
        let grid = generator.generate(config)?;
        Ok(Self::from_parts(config, generator, grid))
    }

    /// Starts a game on a prepared board. `generator` only supplies boards after a reset.
    pub fn from_grid(grid: Grid, generator: G) -> Self {
        // palettes hold at most ColorIndex::MAX entries
        let palette_size = grid.palette().len() as ColorIndex;
        let config = GameConfig::new_unchecked(grid.size(), palette_size);
        Self::from_parts(config, generator, grid)
    }

    fn from_parts(config: GameConfig, generator: G, grid: Grid) -> Self {
        Self {
            config,
            generator,
            grid,
            moves: Saturating(0),
            elapsed: Saturating(0),
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn moves(&self) -> MoveCount {
        self.moves.0
    }

    pub fn move_limit(&self) -> MoveCount {
        self.config.move_limit()
    }

    pub fn moves_left(&self) -> MoveCount {
        self.move_limit().saturating_sub(self.moves())
    }

    pub fn elapsed_ticks(&self) -> TickCount {
        self.elapsed.0
    }

    /// Whether every cell has the origin's color.
    pub fn is_won(&self) -> bool {
        self.grid.is_uniform()
    }

    pub fn is_over(&self) -> bool {
        self.is_won() || self.moves() >= self.move_limit()
    }

    pub fn status(&self) -> GameStatus {
        if self.is_won() {
            GameStatus::Won
        } else if self.moves() >= self.move_limit() {
            GameStatus::Lost
        } else {
            GameStatus::Playing
        }
    }

    /// Floods the origin region with `color`. Ignored once the game is over, for colors
    /// outside the palette, and for the color the region already has.
    pub fn select_color(&mut self, color: ColorIndex) -> MoveOutcome {
        if self.is_over() {
            log::debug!("Ignoring color {} after game over", color);
            return MoveOutcome::Ignored;
        }
        if color == self.grid.region_color() {
            log::debug!("Ignoring color {}, region already has it", color);
            return MoveOutcome::Ignored;
        }

        let outcome = match FloodEngine::new(&mut self.grid).flood(Grid::ORIGIN, color) {
            Ok(outcome) => outcome,
            Err(err) => {
                log::debug!("Ignoring color {}: {}", color, err);
                return MoveOutcome::Ignored;
            }
        };
        self.moves += 1;
        log::debug!(
            "Flooded to color {}, absorbed {} cells, move {}/{}",
            color,
            outcome.absorbed(),
            self.moves(),
            self.move_limit()
        );

        match self.status() {
            GameStatus::Playing => MoveOutcome::Flooded,
            GameStatus::Won => {
                log::debug!("Game won in {} moves", self.moves());
                MoveOutcome::Won
            }
            GameStatus::Lost => {
                log::debug!("Game lost, move limit {} reached", self.move_limit());
                MoveOutcome::Lost
            }
        }
    }

    /// Selects the color of the cell at `coords`, as a click on that cell would.
    pub fn select_cell(&mut self, coords: Coord2) -> MoveOutcome {
        if self.is_over() {
            log::debug!("Ignoring click at {:?} after game over", coords);
            return MoveOutcome::Ignored;
        }
        match self.grid.cell_at(coords) {
            Ok(cell) => self.select_color(cell.color()),
            Err(err) => {
                log::debug!("Ignoring click at {:?}: {}", coords, err);
                MoveOutcome::Ignored
            }
        }
    }

    /// Advances the clock by one tick. While playing, flooded cells also absorb neighbours
    /// of their own color.
    pub fn tick(&mut self) -> FloodOutcome {
        let outcome = if self.is_over() {
            FloodOutcome::NoChange
        } else {
            FloodEngine::new(&mut self.grid).spread()
        };
        self.elapsed += 1;
        outcome
    }

    /// Replaces the board with a fresh one and zeroes both counters.
    pub fn reset(&mut self) -> Result<()> {
        self.grid = self.generator.generate(self.config)?;
        self.moves = Saturating(0);
        self.elapsed = Saturating(0);
        log::debug!("Game reset");
        Ok(())
    }

    pub fn handle(&mut self, event: Event) -> Result<EventOutcome> {
        Ok(match event {
            Event::Select { row, col } => EventOutcome::Move(self.select_cell((row, col))),
            Event::SelectColor(color) => EventOutcome::Move(self.select_color(color)),
            Event::Tick => EventOutcome::Tick(self.tick()),
            Event::Reset => {
                self.reset()?;
                EventOutcome::Reset
            }
            Event::Key(key) if key == Event::RESET_KEY => {
                self.reset()?;
                EventOutcome::Reset
            }
            Event::Key(key) => {
                log::trace!("Ignoring key {:?}", key);
                EventOutcome::Ignored
            }
        })
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_game(self)
    }

    #[cfg(test)]
    pub(crate) fn grid_mut(&mut self) -> &mut Grid {
        &mut self.grid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;
    use alloc::vec::Vec;
    use ndarray::{Array2, array};

    fn palette(size: usize) -> Palette {
        let colors = vec![Rgb::new(220, 40, 40), Rgb::new(40, 40, 220), Rgb::new(40, 220, 40)];
        Palette::new(colors[..size].to_vec()).unwrap()
    }

    fn game(colors: Array2<ColorIndex>, palette_size: usize) -> Game {
        let grid = Grid::from_colors(colors, palette(palette_size)).unwrap();
        Game::from_grid(grid, RandomGridGenerator::new(9))
    }

    #[test]
    fn selection_floods_and_counts_move() {
        let mut game = game(array![[0, 1], [0, 1]], 2);

        assert_eq!(game.select_color(1), MoveOutcome::Won);
        assert_eq!(game.moves(), 1);
        assert_eq!(
            game.grid().flooded().collect::<Vec<_>>(),
            [(0, 0), (1, 0)]
        );
        assert_eq!(game.status(), GameStatus::Won);
    }

    #[test]
    fn selecting_region_color_is_ignored() {
        let mut game = game(array![[0, 1], [1, 1]], 2);

        assert_eq!(game.select_color(0), MoveOutcome::Ignored);
        assert_eq!(game.select_cell((0, 0)), MoveOutcome::Ignored);
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn out_of_range_inputs_are_ignored() {
        let mut game = game(array![[0, 1], [1, 1]], 2);
        let before = game.grid().clone();

        assert_eq!(game.select_color(7), MoveOutcome::Ignored);
        assert_eq!(game.select_cell((5, 0)), MoveOutcome::Ignored);
        assert_eq!(game.grid(), &before);
        assert_eq!(game.moves(), 0);
    }

    #[test]
    fn click_selects_clicked_cell_color() {
        let mut game = game(array![[0, 1, 2], [1, 2, 0], [2, 0, 1]], 3);

        assert_eq!(game.select_cell((2, 0)), MoveOutcome::Flooded);
        assert_eq!(game.grid().region_color(), 2);
    }

    #[test]
    fn reaching_move_limit_loses() {
        // alternating 0 and 1 never reaches the bottom row
        let mut game = game(array![[0, 1], [2, 2]], 3);
        assert_eq!(game.move_limit(), 2 + 3 + 10);

        let picks: Vec<MoveOutcome> = [1, 0]
            .into_iter()
            .cycle()
            .take(game.move_limit().into())
            .map(|color| game.select_color(color))
            .collect();

        let (last, rest) = picks.split_last().unwrap();
        assert!(rest.iter().all(|&outcome| outcome == MoveOutcome::Flooded));
        assert_eq!(*last, MoveOutcome::Lost);
        assert!(game.is_over());
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.snapshot().status.label(), "Lost");
    }

    #[test]
    fn lost_game_reports_lost_when_limit_hit_without_win() {
        let mut game = game(array![[0, 1], [2, 2]], 3);
        game.moves = Saturating(game.move_limit() - 1);

        assert_eq!(game.select_color(1), MoveOutcome::Lost);
        assert!(game.is_over());
        assert!(!game.is_won());
        assert_eq!(game.status(), GameStatus::Lost);
        assert_eq!(game.select_color(2), MoveOutcome::Ignored);
    }

    #[test]
    fn forcing_one_color_wins() {
        let mut game = game(array![[0, 1], [1, 0]], 2);
        assert!(!game.is_won());

        for coords in [(0, 1), (1, 0)] {
            game.grid_mut().cell_mut(coords).paint(0);
        }

        assert!(game.is_won());
        assert!(game.is_over());
        assert_eq!(game.snapshot().status, GameStatus::Won);
    }

    #[test]
    fn tick_spreads_and_always_counts() {
        let mut game = game(array![[0, 0], [1, 1]], 2);

        assert_eq!(game.tick().absorbed(), 1);
        assert_eq!(game.elapsed_ticks(), 1);
        assert_eq!(game.grid().flooded_count(), 2);

        game.grid_mut().cell_mut((1, 0)).paint(0);
        game.grid_mut().cell_mut((1, 1)).paint(0);
        assert!(game.is_over());

        assert_eq!(game.tick(), FloodOutcome::NoChange);
        assert_eq!(game.elapsed_ticks(), 2);
        assert_eq!(game.grid().flooded_count(), 2);
    }

    #[test]
    fn reset_zeroes_counters_and_replaces_board() {
        let mut game = Game::new(GameConfig::classic(), 5).unwrap();
        let original = game.grid().clone();
        game.tick();
        let pick = game
            .grid()
            .neighbors(Grid::ORIGIN)
            .map(|pos| game.grid()[pos].color())
            .find(|&color| color != game.grid().region_color())
            .unwrap_or((game.grid().region_color() + 1) % 6);
        game.select_color(pick);
        assert!(game.moves() > 0);
        assert!(game.elapsed_ticks() > 0);

        game.reset().unwrap();

        assert_eq!(game.moves(), 0);
        assert_eq!(game.elapsed_ticks(), 0);
        assert_ne!(game.grid(), &original);
        assert_eq!(game.grid().flooded().collect::<Vec<_>>(), [Grid::ORIGIN]);
        assert_eq!(game.grid().size(), 14);
    }

    #[test]
    fn events_dispatch_to_operations() {
        let mut game = game(array![[0, 1], [2, 1]], 3);

        assert_eq!(
            game.handle(Event::Select { row: 0, col: 1 }),
            Ok(EventOutcome::Move(MoveOutcome::Flooded))
        );
        assert_eq!(
            game.handle(Event::Tick),
            Ok(EventOutcome::Tick(FloodOutcome::Changed {
                recolored: 0,
                absorbed: 1
            }))
        );
        assert_eq!(game.handle(Event::Key('x')), Ok(EventOutcome::Ignored));
        assert_eq!(game.handle(Event::Key('r')), Ok(EventOutcome::Reset));
        assert_eq!(game.moves(), 0);
        assert_eq!(game.elapsed_ticks(), 0);
        assert_eq!(game.grid().palette().len(), 3);
    }

    #[test]
    fn flooded_cells_never_unflood() {
        let mut game = Game::new(GameConfig::new(8, 4).unwrap(), 11).unwrap();
        let mut mask = game.grid().flood_mask();

        for step in 0..40u8 {
            if step % 3 == 0 {
                game.tick();
            } else {
                game.select_color(step % 4);
            }
            let next = game.grid().flood_mask();
            assert!(mask.iter().zip(next.iter()).all(|(&was, &is)| !was || is));
            mask = next;
        }
    }

    #[test]
    fn with_generator_rejects_invalid_config() {
        assert!(matches!(
            Game::new(GameConfig::new_unchecked(0, 6), 1),
            Err(GameError::InvalidConfiguration)
        ));
        assert!(matches!(
            Game::new(GameConfig::new_unchecked(6, 0), 1),
            Err(GameError::InvalidConfiguration)
        ));
    }
}
