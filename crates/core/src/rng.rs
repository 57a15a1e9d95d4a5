use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

/// Seeded RNG used for deck ordering. The same seed always produces the
/// same sequence of shuffles.
#[derive(Debug, Clone)]
pub struct DeckRng {
    seed: u64,
    rng: StdRng,
}

impl DeckRng {
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fisher-Yates shuffle in place, uniform over permutations.
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        items.shuffle(&mut self.rng);
    }

    /// Returns a shuffled copy, leaving the input untouched.
    pub fn shuffled<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut copy = items.to_vec();
        self.shuffle(&mut copy);
        copy
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_order() {
        let items: Vec<u32> = (0..32).collect();
        let mut a = DeckRng::from_seed(99);
        let mut b = DeckRng::from_seed(99);
        assert_eq!(a.shuffled(&items), b.shuffled(&items));
    }

    #[test]
    fn shuffled_keeps_input_intact() {
        let items: Vec<u32> = (0..16).collect();
        let mut rng = DeckRng::from_seed(7);
        let mut out = rng.shuffled(&items);
        assert_eq!(items, (0..16).collect::<Vec<u32>>());
        out.sort_unstable();
        assert_eq!(out, items);
    }
}
