//! Board sources for new sessions.

use crate::Board;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::sync::{Mutex, PoisonError};
use tracing::instrument;

/// Produces the board for each new session.
pub trait BoardGenerator: Send + Sync + std::fmt::Debug {
    /// Returns a fresh board.
    fn next_board(&self) -> Board;
}

impl<T: BoardGenerator + ?Sized> BoardGenerator for Box<T> {
    fn next_board(&self) -> Board {
        (**self).next_board()
    }
}

/// Uniformly random boards from the thread-local RNG.
#[derive(Debug, Clone, Copy, derive_new::new)]
pub struct RandomBoards {
    size: usize,
}

impl BoardGenerator for RandomBoards {
    fn next_board(&self) -> Board {
        Board::random(self.size)
    }
}

/// Reproducible board sequence from a fixed seed.
///
/// Uses ChaCha8 so the same seed yields the same games on every platform.
#[derive(Debug)]
pub struct SeededBoards {
    size: usize,
    rng: Mutex<ChaCha8Rng>,
}

impl SeededBoards {
    /// Creates a generator whose first board depends only on `seed`.
    #[instrument]
    pub fn new(size: usize, seed: u64) -> Self {
        Self {
            size,
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

impl BoardGenerator for SeededBoards {
    fn next_board(&self) -> Board {
        let mut rng = self.rng.lock().unwrap_or_else(PoisonError::into_inner);
        Board::generate(self.size, &mut *rng)
    }
}

/// Hands out the same board every time.
#[derive(Debug, Clone, derive_new::new)]
pub struct FixedBoard {
    board: Board,
}

impl BoardGenerator for FixedBoard {
    fn next_board(&self) -> Board {
        self.board.clone()
    }
}
