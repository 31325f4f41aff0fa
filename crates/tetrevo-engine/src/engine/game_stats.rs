/// Cost charged for every locked piece.
const PIECE_COST: i64 = 1;
/// Reward granted per cleared line.
const LINE_REWARD: i64 = 10;

/// Game statistics tracking score, lines cleared, and piece count.
///
/// # Scoring
///
/// Every locked piece costs 1 point and every cleared line earns 10 points,
/// so a session that clears nothing drifts negative. There are no combo,
/// level, or back-to-back multipliers; the score stays comparable across
/// sessions of different lengths, which the trainer's score-per-line fitness
/// relies on.
///
/// # Example
///
/// ```
/// use tetrevo_engine::GameStats;
///
/// let mut stats = GameStats::new();
/// stats.complete_piece_drop(4);
///
/// assert_eq!(stats.score(), 39);
/// assert_eq!(stats.total_cleared_lines(), 4);
/// assert_eq!(stats.line_cleared_counter()[4], 1);
/// ```
#[derive(Debug, Clone)]
pub struct GameStats {
    score: i64,
    completed_pieces: usize,
    total_cleared_lines: usize,
    line_cleared_counter: [usize; 5],
}

impl Default for GameStats {
    fn default() -> Self {
        Self::new()
    }
}

impl GameStats {
    /// Creates a new game statistics tracker with all counters at zero.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            score: 0,
            completed_pieces: 0,
            total_cleared_lines: 0,
            line_cleared_counter: [0; 5],
        }
    }

    /// Returns the current score. Can be negative.
    #[must_use]
    pub const fn score(&self) -> i64 {
        self.score
    }

    /// Returns the current level based on total lines cleared.
    ///
    /// Starts at 1 and increases by 1 for every 10 lines cleared. Reporting
    /// only; it never feeds back into scoring or gameplay.
    #[must_use]
    pub const fn level(&self) -> usize {
        self.total_cleared_lines / 10 + 1
    }

    /// Returns the total number of pieces that have been locked into place.
    #[must_use]
    pub const fn completed_pieces(&self) -> usize {
        self.completed_pieces
    }

    /// Returns the total number of lines cleared across all line clears.
    #[must_use]
    pub const fn total_cleared_lines(&self) -> usize {
        self.total_cleared_lines
    }

    /// Returns a histogram of line clears by count.
    ///
    /// Array indices represent:
    /// - `[0]`: Number of drops with 0 lines cleared
    /// - `[1]`: Number of singles (1 line)
    /// - `[2]`: Number of doubles (2 lines)
    /// - `[3]`: Number of triples (3 lines)
    /// - `[4]`: Number of tetrises (4 lines)
    #[must_use]
    pub const fn line_cleared_counter(&self) -> &[usize; 5] {
        &self.line_cleared_counter
    }

    /// Updates statistics after a piece drop.
    ///
    /// This should be called each time a piece is locked into place.
    ///
    /// # Arguments
    ///
    /// * `cleared_lines` - Number of lines cleared (0-4)
    #[expect(clippy::cast_possible_wrap)]
    pub const fn complete_piece_drop(&mut self, cleared_lines: usize) {
        self.completed_pieces += 1;
        self.total_cleared_lines += cleared_lines;
        if cleared_lines < self.line_cleared_counter.len() {
            self.line_cleared_counter[cleared_lines] += 1;
        }
        self.score += LINE_REWARD * cleared_lines as i64 - PIECE_COST;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_score_goes_negative_without_clears() {
        let mut stats = GameStats::new();
        for _ in 0..5 {
            stats.complete_piece_drop(0);
        }
        assert_eq!(stats.score(), -5);
        assert_eq!(stats.completed_pieces(), 5);
        assert_eq!(stats.total_cleared_lines(), 0);
    }

    #[test]
    fn test_line_reward_has_no_level_multiplier() {
        let mut stats = GameStats::new();
        for _ in 0..15 {
            stats.complete_piece_drop(1);
        }
        // 15 singles: level has advanced to 2, but every line still pays 10.
        assert_eq!(stats.level(), 2);
        assert_eq!(stats.score(), 15 * 10 - 15);
    }

    #[test]
    fn test_level_starts_at_one() {
        let stats = GameStats::new();
        assert_eq!(stats.level(), 1);

        let mut stats = GameStats::new();
        stats.complete_piece_drop(4);
        stats.complete_piece_drop(4);
        stats.complete_piece_drop(2);
        assert_eq!(stats.total_cleared_lines(), 10);
        assert_eq!(stats.level(), 2);
    }

    #[test]
    fn test_line_cleared_histogram() {
        let mut stats = GameStats::new();
        stats.complete_piece_drop(0);
        stats.complete_piece_drop(1);
        stats.complete_piece_drop(1);
        stats.complete_piece_drop(4);
        assert_eq!(stats.line_cleared_counter(), &[1, 2, 0, 0, 1]);
    }
}
