use alloc::vec::Vec;
use core::fmt;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub fn random<R: Rng>(rng: &mut R) -> Self {
        // channels stay below 255, like the classic game did
        Self::new(
            rng.random_range(0..255),
            rng.random_range(0..255),
            rng.random_range(0..255),
        )
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Ordered set of colors a board is painted with. Cells refer to entries by index, so two
/// entries are different colors even when their RGB values coincide.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    pub fn new(colors: Vec<Rgb>) -> Result<Self> {
        if colors.is_empty() || colors.len() > usize::from(ColorIndex::MAX) {
            return Err(GameError::InvalidConfiguration);
        }
        Ok(Self { colors })
    }

    pub fn random<R: Rng>(size: ColorIndex, rng: &mut R) -> Result<Self> {
        if size == 0 {
            return Err(GameError::InvalidConfiguration);
        }
        let colors: Vec<Rgb> = (0..size).map(|_| Rgb::random(rng)).collect();
        Self::new(colors)
    }

    /// Number of entries. Never zero.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn contains(&self, index: ColorIndex) -> bool {
        usize::from(index) < self.colors.len()
    }

    pub fn get(&self, index: ColorIndex) -> Option<Rgb> {
        self.colors.get(usize::from(index)).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = Rgb> + '_ {
        self.colors.iter().copied()
    }

    pub fn as_slice(&self) -> &[Rgb] {
        &self.colors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    #[test]
    fn random_palette_has_requested_size() {
        let mut rng = SmallRng::seed_from_u64(7);
        let palette = Palette::random(6, &mut rng).unwrap();

        assert_eq!(palette.len(), 6);
        assert!(palette.contains(5));
        assert!(!palette.contains(6));
        assert!(palette.iter().all(|c| c.r < 255 && c.g < 255 && c.b < 255));
    }

    #[test]
    fn empty_palette_is_rejected() {
        let mut rng = SmallRng::seed_from_u64(7);
        assert_eq!(
            Palette::random(0, &mut rng),
            Err(GameError::InvalidConfiguration)
        );
        assert_eq!(Palette::new(vec![]), Err(GameError::InvalidConfiguration));
    }

    #[test]
    fn rgb_displays_as_hex() {
        assert_eq!(Rgb::new(255, 0, 16).to_string(), "#ff0010");
    }
}
