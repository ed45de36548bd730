//! Core game state and logic
//!
//! `Game` owns the board, the falling piece, the lookahead slot and the
//! counters, and is driven from outside by discrete commands plus
//! `advance()` calls carrying elapsed time. It never reads a clock itself,
//! so gravity is deterministic under test.

use crate::board::{Board, Matrix};
use crate::piece::Piece;
use crate::score::Score;
use crate::tetromino::TetrominoType;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::Duration;

/// Smallest playable board: the I bar spans 4 cells
const MIN_BOARD_DIM: usize = 4;
/// Keeps render geometry comfortably inside u16 terminal coordinates
const MAX_BOARD_DIM: usize = 256;

/// Input commands the game can process. Anything else at the input layer
/// simply never becomes a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    MoveLeft,
    MoveRight,
    SoftDrop,
    RotateCw,
    RotateCcw,
    HardDrop,
    NewGame,
}

/// The whole mutable game state
pub struct Game {
    pub board: Board,
    /// The piece currently falling
    pub piece: Piece,
    /// Single-slot lookahead, promoted to the falling piece on spawn
    pub next: Matrix,
    pub score: Score,
    rng: ChaCha8Rng,
    /// Time accumulated toward the next gravity step
    drop_timer: Duration,
}

impl Game {
    pub fn new() -> Self {
        Self::with_seed(rand::random())
    }

    /// A game on a board of the given dimensions. Dimensions are clamped:
    /// a board narrower than the I bar wedges every spawn against the wall,
    /// so merging could never be reached safely.
    pub fn sized(width: usize, height: usize) -> Self {
        let w = width.clamp(MIN_BOARD_DIM, MAX_BOARD_DIM);
        let h = height.clamp(MIN_BOARD_DIM, MAX_BOARD_DIM);
        if (w, h) != (width, height) {
            tracing::warn!(width, height, "board dimensions out of range, clamped to {w}x{h}");
        }
        Self::build(Board::new(w, h), rand::random())
    }

    /// Seeded constructor for a reproducible piece sequence
    pub fn with_seed(seed: u64) -> Self {
        Self::build(Board::default(), seed)
    }

    fn build(board: Board, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let first = TetrominoType::random(&mut rng).shape();
        let next = TetrominoType::random(&mut rng).shape();
        Self {
            piece: Piece::spawn(first, board.width()),
            next,
            board,
            score: Score::new(),
            rng,
            drop_timer: Duration::ZERO,
        }
    }

    /// Accumulate elapsed time; past the level's drop interval, take one
    /// gravity step and start over.
    pub fn advance(&mut self, elapsed: Duration) {
        self.drop_timer += elapsed;
        if self.drop_timer > self.score.drop_interval() {
            self.drop();
        }
    }

    pub fn apply(&mut self, command: Command) {
        match command {
            Command::MoveLeft => {
                self.piece.try_move(&self.board, -1);
            }
            Command::MoveRight => {
                self.piece.try_move(&self.board, 1);
            }
            Command::SoftDrop => self.drop(),
            Command::RotateCw => {
                self.piece.try_rotate(&self.board, 1);
            }
            Command::RotateCcw => {
                self.piece.try_rotate(&self.board, -1);
            }
            Command::HardDrop => self.hard_drop(),
            Command::NewGame => self.restart(),
        }
    }

    /// One downward step. A blocked step locks the piece where it was.
    fn drop(&mut self) {
        self.piece.y += 1;
        if self.board.collides(&self.piece.matrix, self.piece.x, self.piece.y) {
            self.piece.y -= 1;
            self.lock();
        }
        self.drop_timer = Duration::ZERO;
    }

    /// Slam the piece straight down and lock it, all within one frame
    fn hard_drop(&mut self) {
        while !self.board.collides(&self.piece.matrix, self.piece.x, self.piece.y) {
            self.piece.y += 1;
        }
        self.piece.y -= 1;
        self.lock();
    }

    /// Commit the piece to the board, credit any cleared rows, respawn
    fn lock(&mut self) {
        self.board.merge(&self.piece.matrix, self.piece.x, self.piece.y);
        let cleared = self.board.sweep();
        if cleared > 0 {
            self.score.on_clear(cleared);
            tracing::debug!(
                cleared,
                points = self.score.points,
                level = self.score.level,
                "rows swept"
            );
        }
        self.spawn();
    }

    /// Promote the lookahead piece and refill the slot. A spawn that
    /// collides means the stack reached the top: the game silently restarts
    /// with the board and counters wiped, keeping the freshly spawned piece.
    fn spawn(&mut self) {
        let matrix = std::mem::replace(
            &mut self.next,
            TetrominoType::random(&mut self.rng).shape(),
        );
        self.piece = Piece::spawn(matrix, self.board.width());
        if self.board.collides(&self.piece.matrix, self.piece.x, self.piece.y) {
            tracing::info!(
                points = self.score.points,
                lines = self.score.lines,
                "topped out, restarting"
            );
            self.board.clear();
            self.score.reset();
            self.drop_timer = Duration::ZERO;
        }
    }

    /// Fresh board, counters and pieces
    fn restart(&mut self) {
        self.board.clear();
        self.score.reset();
        self.drop_timer = Duration::ZERO;
        let first = TetrominoType::random(&mut self.rng).shape();
        self.piece = Piece::spawn(first, self.board.width());
        self.next = TetrominoType::random(&mut self.rng).shape();
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}
