//! Active falling piece: movement, rotation and the single-offset wall kick

use crate::board::{Board, Matrix};

/// The piece currently in play. `x`/`y` locate the matrix's top-left cell in
/// board coordinates; the matrix is an exclusively owned copy of a catalog
/// shape.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Piece {
    pub matrix: Matrix,
    pub x: i32,
    pub y: i32,
}

impl Piece {
    /// Place a matrix centered at the top of a board of the given width
    pub fn spawn(matrix: Matrix, board_width: usize) -> Self {
        let x = (board_width as i32 - matrix[0].len() as i32) / 2;
        Self { matrix, x, y: 0 }
    }

    /// Shift horizontally; reverts and reports false when the move collides
    pub fn try_move(&mut self, board: &Board, dx: i32) -> bool {
        self.x += dx;
        if board.collides(&self.matrix, self.x, self.y) {
            self.x -= dx;
            return false;
        }
        true
    }

    /// Quarter turn with a minimal wall kick. The turn itself is always
    /// clockwise; `kick` (+1 or -1) is the horizontal offset tried when the
    /// rotated piece collides in place. If the kicked position collides too,
    /// the rotation is undone entirely and the piece is left unchanged.
    pub fn try_rotate(&mut self, board: &Board, kick: i32) -> bool {
        rotate_cw(&mut self.matrix);
        if !board.collides(&self.matrix, self.x, self.y) {
            return true;
        }
        self.x += kick;
        if !board.collides(&self.matrix, self.x, self.y) {
            return true;
        }
        self.x -= kick;
        // three more quarter turns bring the matrix back to where it started
        for _ in 0..3 {
            rotate_cw(&mut self.matrix);
        }
        false
    }
}

/// Rotate a square matrix 90 degrees clockwise in place: transpose, then
/// reverse each row.
pub fn rotate_cw(matrix: &mut Matrix) {
    for y in 0..matrix.len() {
        for x in 0..y {
            let tmp = matrix[y][x];
            matrix[y][x] = matrix[x][y];
            matrix[x][y] = tmp;
        }
    }
    for row in matrix.iter_mut() {
        row.reverse();
    }
}
