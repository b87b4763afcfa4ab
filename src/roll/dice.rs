use super::source::RollSource;
use crate::Pins;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Production rolls off a small fast RNG, seedable for replayable games.
#[derive(Debug, Clone)]
pub struct Dice {
    rng: SmallRng,
}

impl Dice {
    pub fn new() -> Self {
        Self {
            rng: SmallRng::from_os_rng(),
        }
    }

    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: SmallRng::seed_from_u64(seed),
        }
    }
}

impl Default for Dice {
    fn default() -> Self {
        Self::new()
    }
}

impl RollSource for Dice {
    fn next(&mut self, bound: Pins) -> Pins {
        self.rng.random_range(0..bound)
    }
}
