use serde::{Deserialize, Serialize};

/// Counters accumulated over one game.
///
/// The score is simply the total number of rows cleared; there is no bonus
/// for clearing several rows at once.
///
/// # Example
///
/// ```
/// use dropgrid_engine::GameStats;
///
/// let mut stats = GameStats::new();
/// stats.record_lock();
/// stats.record_cleared_rows(2);
///
/// assert_eq!(stats.score(), 2);
/// assert_eq!(stats.locked_pieces(), 1);
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameStats {
    cleared_rows: usize,
    locked_pieces: usize,
}

impl GameStats {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            cleared_rows: 0,
            locked_pieces: 0,
        }
    }

    /// Returns the score (total rows cleared).
    #[must_use]
    pub const fn score(&self) -> usize {
        self.cleared_rows
    }

    /// Returns the number of pieces locked into the board.
    #[must_use]
    pub const fn locked_pieces(&self) -> usize {
        self.locked_pieces
    }

    pub const fn record_lock(&mut self) {
        self.locked_pieces += 1;
    }

    pub const fn record_cleared_rows(&mut self, count: usize) {
        self.cleared_rows += count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_is_zeroed() {
        let stats = GameStats::new();
        assert_eq!(stats, GameStats::default());
        assert_eq!(stats.score(), 0);
        assert_eq!(stats.locked_pieces(), 0);
    }

    #[test]
    fn test_accumulates() {
        let mut stats = GameStats::new();
        stats.record_cleared_rows(0);
        stats.record_lock();
        stats.record_lock();
        stats.record_cleared_rows(1);
        stats.record_cleared_rows(3);
        assert_eq!(stats.score(), 4);
        assert_eq!(stats.locked_pieces(), 2);
    }
}
