//! Move selection strategies for computer-controlled players.

use super::types::Coord;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::collections::VecDeque;
use tracing::{debug, instrument};

/// Picks one coordinate out of the legal moves.
pub trait MoveSelector {
    /// Chooses a move from `legal`.
    ///
    /// Returns `None` only when `legal` is empty.
    fn select(&mut self, legal: &[Coord]) -> Option<Coord>;

    /// Short name for logging.
    fn name(&self) -> &str;
}

impl<S: MoveSelector + ?Sized> MoveSelector for Box<S> {
    fn select(&mut self, legal: &[Coord]) -> Option<Coord> {
        (**self).select(legal)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Uniformly random choice among legal moves.
#[derive(Debug, Clone)]
pub struct RandomSelector<R> {
    rng: R,
}

impl<R: Rng> RandomSelector<R> {
    /// Wraps an existing random number generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl RandomSelector<StdRng> {
    /// Seeds from operating system entropy.
    #[instrument]
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }

    /// Reproducible sequence of choices.
    #[instrument]
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }
}

impl<R: Rng> MoveSelector for RandomSelector<R> {
    fn select(&mut self, legal: &[Coord]) -> Option<Coord> {
        let choice = legal.choose(&mut self.rng).copied();
        debug!(?choice, options = legal.len(), "Random selection");
        choice
    }

    fn name(&self) -> &str {
        "random"
    }
}

/// Always takes the first legal move.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstAvailable;

impl MoveSelector for FirstAvailable {
    fn select(&mut self, legal: &[Coord]) -> Option<Coord> {
        legal.first().copied()
    }

    fn name(&self) -> &str {
        "first-available"
    }
}

/// Plays a fixed list of coordinates in order.
///
/// Scripted coordinates that are no longer legal are skipped. Once the
/// script runs dry it falls back to the first legal move.
#[derive(Debug, Clone, Default)]
pub struct Scripted {
    script: VecDeque<Coord>,
}

impl Scripted {
    /// Creates a selector that replays `moves`.
    pub fn new(moves: impl IntoIterator<Item = Coord>) -> Self {
        Self {
            script: moves.into_iter().collect(),
        }
    }

    /// Scripted moves not yet played.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl MoveSelector for Scripted {
    fn select(&mut self, legal: &[Coord]) -> Option<Coord> {
        while let Some(next) = self.script.pop_front() {
            if legal.contains(&next) {
                return Some(next);
            }
            debug!(?next, "Skipping scripted move that is no longer legal");
        }
        legal.first().copied()
    }

    fn name(&self) -> &str {
        "scripted"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_picks_from_legal() {
        let legal = [Coord::new(0, 1), Coord::new(2, 2), Coord::new(1, 0)];
        let mut selector = RandomSelector::seeded(7);
        for _ in 0..50 {
            let choice = selector.select(&legal).unwrap();
            assert!(legal.contains(&choice));
        }
    }

    #[test]
    fn test_random_reaches_every_option() {
        let mut selector = RandomSelector::seeded(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..500 {
            seen.insert(selector.select(&Coord::ALL).unwrap());
        }
        assert_eq!(seen.len(), Coord::ALL.len());
    }

    #[test]
    fn test_same_seed_same_choices() {
        let mut a = RandomSelector::seeded(3);
        let mut b = RandomSelector::seeded(3);
        for _ in 0..20 {
            assert_eq!(a.select(&Coord::ALL), b.select(&Coord::ALL));
        }
    }

    #[test]
    fn test_empty_legal_moves() {
        assert_eq!(RandomSelector::seeded(1).select(&[]), None);
        assert_eq!(FirstAvailable.select(&[]), None);
        assert_eq!(Scripted::new([Coord::new(0, 0)]).select(&[]), None);
    }

    #[test]
    fn test_first_available() {
        let legal = [Coord::new(1, 1), Coord::new(2, 0)];
        assert_eq!(FirstAvailable.select(&legal), Some(Coord::new(1, 1)));
    }

    #[test]
    fn test_scripted_skips_taken_cells() {
        let mut selector = Scripted::new([Coord::new(0, 0), Coord::new(2, 2)]);
        let legal = [Coord::new(1, 1), Coord::new(2, 2)];
        assert_eq!(selector.select(&legal), Some(Coord::new(2, 2)));
        assert_eq!(selector.remaining(), 0);
        assert_eq!(selector.select(&legal), Some(Coord::new(1, 1)));
    }

    #[test]
    fn test_boxed_selector() {
        let mut boxed: Box<dyn MoveSelector> = Box::new(FirstAvailable);
        assert_eq!(boxed.name(), "first-available");
        assert_eq!(boxed.select(&Coord::ALL), Some(Coord::new(0, 0)));
    }
}
