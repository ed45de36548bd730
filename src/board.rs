//! Game board representation, collision detection, merging and line sweeping

/// Canonical board dimensions
pub const BOARD_WIDTH: usize = 10;
pub const BOARD_HEIGHT: usize = 20;

/// A cell on the board - 0 is empty, 1-7 is the id of the piece that filled it
pub type Cell = u8;

/// A piece shape: rows of cells, row 0 at the top
pub type Matrix = Vec<Vec<Cell>>;

/// The playfield. Row 0 is the top row, y grows downward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    rows: Vec<Vec<Cell>>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new(BOARD_WIDTH, BOARD_HEIGHT)
    }
}

impl Board {
    /// Create a new empty board
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            rows: vec![vec![0; width]; height],
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the cell at (x, y), or None when outside the grid
    pub fn cell(&self, x: i32, y: i32) -> Option<Cell> {
        if x < 0 || y < 0 {
            return None;
        }
        self.rows
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
    }

    #[allow(dead_code)]
    pub fn set(&mut self, x: usize, y: usize, cell: Cell) {
        self.rows[y][x] = cell;
    }

    /// Test a piece matrix at offset (x, y) against walls, floor and settled cells.
    /// Cells above the top row (board y < 0) have no backing cell and never collide.
    pub fn collides(&self, matrix: &Matrix, x: i32, y: i32) -> bool {
        for (py, row) in matrix.iter().enumerate() {
            for (px, &cell) in row.iter().enumerate() {
                if cell == 0 {
                    continue;
                }
                let bx = x + px as i32;
                let by = y + py as i32;
                if bx < 0 || bx >= self.width as i32 || by >= self.height as i32 {
                    return true;
                }
                if by < 0 {
                    continue;
                }
                if self.rows[by as usize][bx as usize] != 0 {
                    return true;
                }
            }
        }
        false
    }

    /// Write every nonzero cell of the matrix into the board.
    /// The placement must not collide; callers check before merging.
    pub fn merge(&mut self, matrix: &Matrix, x: i32, y: i32) {
        debug_assert!(
            !self.collides(matrix, x, y),
            "merge called with a colliding placement"
        );
        for (py, row) in matrix.iter().enumerate() {
            for (px, &cell) in row.iter().enumerate() {
                if cell == 0 {
                    continue;
                }
                let by = y + py as i32;
                if by < 0 {
                    // still above the board, nothing to write into
                    continue;
                }
                self.rows[by as usize][(x + px as i32) as usize] = cell;
            }
        }
    }

    /// Remove every full row, dropping the rows above it and inserting fresh
    /// empty rows at the top. Returns the number of rows cleared.
    pub fn sweep(&mut self) -> usize {
        let mut cleared = 0;
        let mut y = self.height;
        while y > 0 {
            y -= 1;
            if self.rows[y].iter().all(|&cell| cell != 0) {
                let mut row = self.rows.remove(y);
                row.fill(0);
                self.rows.insert(0, row);
                cleared += 1;
                // the row above just shifted into this index, re-examine it
                y += 1;
            }
        }
        cleared
    }

    /// Zero every cell (full-game reset)
    pub fn clear(&mut self) {
        for row in &mut self.rows {
            row.fill(0);
        }
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|row| row.iter().all(|&cell| cell == 0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(id: Cell) -> Matrix {
        vec![vec![id, id], vec![id, id]]
    }

    #[test]
    fn test_new_board_is_empty() {
        let board = Board::new(BOARD_WIDTH, BOARD_HEIGHT);
        assert!(board.is_empty());
        assert_eq!(board.width(), BOARD_WIDTH);
        assert_eq!(board.height(), BOARD_HEIGHT);
    }

    #[test]
    fn test_empty_placement_does_not_collide() {
        let board = Board::default();
        assert!(!board.collides(&square(2), 0, 0));
        assert!(!board.collides(&square(2), 8, 18));
    }

    #[test]
    fn test_wall_and_floor_collisions() {
        let board = Board::default();
        assert!(board.collides(&square(2), -1, 0));
        assert!(board.collides(&square(2), 9, 0));
        assert!(board.collides(&square(2), 0, 19));
    }

    #[test]
    fn test_above_board_does_not_collide() {
        let board = Board::default();
        assert!(!board.collides(&square(2), 4, -2));
    }

    #[test]
    fn test_partially_above_board_hits_occupied_top_row() {
        let mut board = Board::default();
        board.set(4, 0, 7);
        assert!(board.collides(&square(2), 4, -1));
    }

    #[test]
    fn test_occupied_cell_collides() {
        let mut board = Board::default();
        board.set(5, 10, 3);
        assert!(board.collides(&square(2), 4, 9));
        assert!(!board.collides(&square(2), 6, 9));
    }

    #[test]
    fn test_merge_then_collide() {
        let mut board = Board::default();
        let piece = square(4);
        assert!(!board.collides(&piece, 3, 5));
        board.merge(&piece, 3, 5);
        assert!(board.collides(&piece, 3, 5));
        assert_eq!(board.cell(3, 5), Some(4));
        assert_eq!(board.cell(4, 6), Some(4));
    }

    #[test]
    fn test_merge_ignores_empty_cells() {
        let mut board = Board::default();
        board.set(0, 1, 7);
        let matrix = vec![vec![1, 1], vec![0, 1]];
        board.merge(&matrix, 0, 0);
        // the zero in the matrix must not overwrite the existing cell
        assert_eq!(board.cell(0, 1), Some(7));
    }

    #[test]
    fn test_sweep_clears_full_row() {
        let mut board = Board::default();
        for x in 0..BOARD_WIDTH {
            board.set(x, 19, 1);
        }
        board.set(0, 18, 5);
        assert_eq!(board.sweep(), 1);
        // the block above the cleared row drops by one
        assert_eq!(board.cell(0, 19), Some(5));
        assert_eq!(board.cell(0, 18), Some(0));
    }

    #[test]
    fn test_sweep_ignores_incomplete_rows() {
        let mut board = Board::default();
        for x in 0..BOARD_WIDTH - 1 {
            board.set(x, 19, 1);
        }
        assert_eq!(board.sweep(), 0);
        assert_eq!(board.cell(0, 19), Some(1));
    }

    #[test]
    fn test_sweep_multiple_rows_preserves_order() {
        let mut board = Board::default();
        // rows 17 and 19 full, row 18 partial, a lone block on row 16
        for x in 0..BOARD_WIDTH {
            board.set(x, 17, 1);
            board.set(x, 19, 2);
        }
        board.set(3, 18, 6);
        board.set(7, 16, 4);
        assert_eq!(board.sweep(), 2);
        // the partial row lands on the floor, the lone block one above it
        assert_eq!(board.cell(3, 19), Some(6));
        assert_eq!(board.cell(7, 18), Some(4));
        assert_eq!(board.cell(7, 16), Some(0));
    }

    #[test]
    fn test_sweep_adjacent_full_rows() {
        let mut board = Board::default();
        for y in 16..20 {
            for x in 0..BOARD_WIDTH {
                board.set(x, y, 3);
            }
        }
        assert_eq!(board.sweep(), 4);
        assert!(board.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut board = Board::default();
        board.set(4, 4, 2);
        board.clear();
        assert!(board.is_empty());
    }
}
