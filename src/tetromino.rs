//! Tetromino shape catalog and random selection
//!
//! Every shape lives in a square bounding box (the I bar in 4x4, O in 2x2,
//! the rest in 3x3) so the transpose-based rotation in `piece` is exact for
//! all of them.

use crate::board::{Cell, Matrix};
use rand::Rng;

/// The 7 tetromino types, each with a distinct cell id 1-7
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TetrominoType {
    I,
    O,
    T,
    S,
    Z,
    L,
    J,
}

impl TetrominoType {
    /// The cell id this piece's shape is built from
    #[allow(dead_code)]
    pub fn id(&self) -> Cell {
        match self {
            TetrominoType::I => 1,
            TetrominoType::O => 2,
            TetrominoType::T => 3,
            TetrominoType::S => 4,
            TetrominoType::Z => 5,
            TetrominoType::L => 6,
            TetrominoType::J => 7,
        }
    }

    pub fn all() -> [TetrominoType; 7] {
        [
            TetrominoType::I,
            TetrominoType::O,
            TetrominoType::T,
            TetrominoType::S,
            TetrominoType::Z,
            TetrominoType::L,
            TetrominoType::J,
        ]
    }

    /// A fresh, independently mutable copy of the shape in its spawn
    /// orientation. Rotating a piece in play never touches the catalog.
    pub fn shape(&self) -> Matrix {
        match self {
            TetrominoType::I => vec![
                vec![0, 0, 0, 0],
                vec![1, 1, 1, 1],
                vec![0, 0, 0, 0],
                vec![0, 0, 0, 0],
            ],
            TetrominoType::O => vec![
                vec![2, 2],
                vec![2, 2],
            ],
            TetrominoType::T => vec![
                vec![0, 3, 0],
                vec![3, 3, 3],
                vec![0, 0, 0],
            ],
            TetrominoType::S => vec![
                vec![0, 4, 4],
                vec![4, 4, 0],
                vec![0, 0, 0],
            ],
            TetrominoType::Z => vec![
                vec![5, 5, 0],
                vec![0, 5, 5],
                vec![0, 0, 0],
            ],
            TetrominoType::L => vec![
                vec![6, 0, 0],
                vec![6, 6, 6],
                vec![0, 0, 0],
            ],
            TetrominoType::J => vec![
                vec![0, 0, 7],
                vec![7, 7, 7],
                vec![0, 0, 0],
            ],
        }
    }

    /// Independent uniform draw, 1/7 each with replacement. Repeats are
    /// possible; there is no bag.
    pub fn random<R: Rng>(rng: &mut R) -> TetrominoType {
        Self::all()[rng.gen_range(0..7)]
    }
}
