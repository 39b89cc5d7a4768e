//! Adversary strategies
//!
//! An adversary picks the hidden word for each round from a candidate pool.

use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

/// Chooses the word the guesser has to face
pub trait Adversary {
    /// Pick a word from `pool`, or `None` if the pool is empty
    fn choose_word<'a>(&mut self, pool: &'a [String]) -> Option<&'a str>;
}

/// Uniformly random choice
#[derive(Debug, Clone)]
pub struct RandomAdversary {
    rng: StdRng,
}

impl RandomAdversary {
    /// Seeded from the operating system
    #[must_use]
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible sequence of choices
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAdversary {
    fn default() -> Self {
        Self::new()
    }
}

impl Adversary for RandomAdversary {
    fn choose_word<'a>(&mut self, pool: &'a [String]) -> Option<&'a str> {
        pool.choose(&mut self.rng).map(String::as_str)
    }
}

/// Walks the pool in order, wrapping around at the end
#[derive(Debug, Clone, Default)]
pub struct SequentialAdversary {
    next: usize,
}

impl SequentialAdversary {
    #[must_use]
    pub const fn new() -> Self {
        Self { next: 0 }
    }
}

impl Adversary for SequentialAdversary {
    fn choose_word<'a>(&mut self, pool: &'a [String]) -> Option<&'a str> {
        if pool.is_empty() {
            return None;
        }
        let word = &pool[self.next % pool.len()];
        self.next = (self.next + 1) % pool.len();
        Some(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pool() -> Vec<String> {
        ["cat", "dog", "ant"].iter().map(ToString::to_string).collect()
    }

    #[test]
    fn random_picks_from_pool() {
        let pool = pool();
        let mut adversary = RandomAdversary::new();
        for _ in 0..20 {
            let word = adversary.choose_word(&pool).unwrap();
            assert!(pool.iter().any(|w| w == word));
        }
    }

    #[test]
    fn seeded_random_is_reproducible() {
        let pool = pool();
        let mut first = RandomAdversary::with_seed(7);
        let mut second = RandomAdversary::with_seed(7);
        for _ in 0..10 {
            assert_eq!(first.choose_word(&pool), second.choose_word(&pool));
        }
    }

    #[test]
    fn empty_pool_gives_nothing() {
        let empty: Vec<String> = Vec::new();
        assert_eq!(RandomAdversary::with_seed(1).choose_word(&empty), None);
        assert_eq!(SequentialAdversary::new().choose_word(&empty), None);
    }

    #[test]
    fn sequential_wraps_around() {
        let pool = pool();
        let mut adversary = SequentialAdversary::new();
        let picks: Vec<&str> = (0..4).filter_map(|_| adversary.choose_word(&pool)).collect();
        assert_eq!(picks, vec!["cat", "dog", "ant", "cat"]);
    }
}
