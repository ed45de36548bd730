//! Score, level and line counters with classic scoring

use std::time::Duration;

/// Lines needed per level step
pub const LINES_PER_LEVEL: u32 = 10;

/// Gravity cadence: base interval, decrement per level, and the floor
const BASE_DROP_MS: u64 = 1000;
const DROP_DECREMENT_MS: u64 = 100;
const MIN_DROP_MS: u64 = 150;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    pub points: u32,
    pub level: u32,
    pub lines: u32,
}

impl Default for Score {
    fn default() -> Self {
        Self::new()
    }
}

impl Score {
    pub fn new() -> Self {
        Self {
            points: 0,
            level: 1,
            lines: 0,
        }
    }

    /// Credit a sweep that cleared `rows` rows. Points scale with the level
    /// at the time of the clear; one big sweep can advance several levels.
    pub fn on_clear(&mut self, rows: usize) {
        if rows == 0 {
            return;
        }
        self.lines += rows as u32;
        self.points += base_points(rows) * self.level;
        while self.lines >= self.level * LINES_PER_LEVEL {
            self.level += 1;
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Time between automatic gravity steps at the current level
    pub fn drop_interval(&self) -> Duration {
        let ms = BASE_DROP_MS
            .saturating_sub((self.level as u64 - 1) * DROP_DECREMENT_MS)
            .max(MIN_DROP_MS);
        Duration::from_millis(ms)
    }
}

/// Classic per-clear base points. The board is 20 rows tall and a piece spans
/// at most 4, so counts past 4 share the quad value.
fn base_points(rows: usize) -> u32 {
    match rows {
        1 => 40,
        2 => 100,
        3 => 300,
        _ => 1200,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_points_at_level_one() {
        for (rows, expected) in [(1, 40), (2, 100), (3, 300), (4, 1200)] {
            let mut score = Score::new();
            score.on_clear(rows);
            assert_eq!(score.points, expected);
            assert_eq!(score.lines, rows as u32);
        }
    }

    #[test]
    fn test_points_scale_with_level() {
        let mut score = Score::new();
        score.level = 3;
        score.on_clear(2);
        assert_eq!(score.points, 300);
    }

    #[test]
    fn test_zero_clears_change_nothing() {
        let mut score = Score::new();
        score.on_clear(0);
        assert_eq!(score, Score::new());
    }

    #[test]
    fn test_level_up_at_ten_lines() {
        let mut score = Score::new();
        for _ in 0..9 {
            score.on_clear(1);
        }
        assert_eq!(score.level, 1);
        score.on_clear(1);
        assert_eq!(score.level, 2);
        assert_eq!(score.drop_interval(), Duration::from_millis(900));
    }

    #[test]
    fn test_one_sweep_can_advance_multiple_levels() {
        let mut score = Score::new();
        score.lines = 18;
        score.level = 1;
        score.on_clear(4);
        // 22 lines: past the level-2 threshold (10) and the level-3 one (20)
        assert_eq!(score.level, 3);
    }

    #[test]
    fn test_drop_interval_floor() {
        let mut score = Score::new();
        assert_eq!(score.drop_interval(), Duration::from_millis(1000));
        score.level = 9;
        assert_eq!(score.drop_interval(), Duration::from_millis(200));
        score.level = 10;
        assert_eq!(score.drop_interval(), Duration::from_millis(150));
        score.level = 30;
        assert_eq!(score.drop_interval(), Duration::from_millis(150));
    }

    #[test]
    fn test_reset() {
        let mut score = Score::new();
        score.on_clear(4);
        score.reset();
        assert_eq!(score, Score::new());
    }
}
