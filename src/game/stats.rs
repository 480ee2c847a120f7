//! Running play statistics
//!
//! Updated once per terminal transition and kept in memory for the lifetime
//! of the process.

use crate::core::MAX_GUESSES;

/// Win/loss counters and the per-turn win distribution
#[derive(Debug, Default, Clone)]
pub struct GameStats {
    games_played: u32,
    wins: u32,
    current_streak: u32,
    max_streak: u32,
    guess_distribution: [u32; MAX_GUESSES],
}

impl GameStats {
    /// Fresh, all-zero record
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a win achieved on turn `turns` (1-based)
    pub fn record_win(&mut self, turns: usize) {
        self.games_played += 1;
        self.wins += 1;
        self.current_streak += 1;
        self.max_streak = self.max_streak.max(self.current_streak);

        if (1..=MAX_GUESSES).contains(&turns) {
            self.guess_distribution[turns - 1] += 1;
        }
    }

    /// Record a loss; breaks the streak
    pub fn record_loss(&mut self) {
        self.games_played += 1;
        self.current_streak = 0;
    }

    #[must_use]
    pub const fn games_played(&self) -> u32 {
        self.games_played
    }

    #[must_use]
    pub const fn wins(&self) -> u32 {
        self.wins
    }

    #[must_use]
    pub const fn current_streak(&self) -> u32 {
        self.current_streak
    }

    #[must_use]
    pub const fn max_streak(&self) -> u32 {
        self.max_streak
    }

    /// Wins per turn number; index 0 is a first-guess win
    #[must_use]
    pub const fn guess_distribution(&self) -> &[u32; MAX_GUESSES] {
        &self.guess_distribution
    }

    /// Percentage of games won, rounded
    #[must_use]
    pub fn win_percentage(&self) -> u32 {
        if self.games_played == 0 {
            return 0;
        }
        (f64::from(self.wins) / f64::from(self.games_played) * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn win_updates_all_counters() {
        let mut stats = GameStats::new();
        stats.record_win(3);

        assert_eq!(stats.games_played(), 1);
        assert_eq!(stats.wins(), 1);
        assert_eq!(stats.current_streak(), 1);
        assert_eq!(stats.max_streak(), 1);
        assert_eq!(stats.guess_distribution()[2], 1);
        assert_eq!(stats.win_percentage(), 100);
    }

    #[test]
    fn loss_breaks_streak_but_keeps_max() {
        let mut stats = GameStats::new();
        stats.record_win(2);
        stats.record_win(4);
        stats.record_loss();

        assert_eq!(stats.games_played(), 3);
        assert_eq!(stats.current_streak(), 0);
        assert_eq!(stats.max_streak(), 2);
        assert_eq!(stats.win_percentage(), 67);
    }

    #[test]
    fn out_of_range_turn_count_not_binned() {
        let mut stats = GameStats::new();
        stats.record_win(0);
        stats.record_win(MAX_GUESSES + 1);

        assert_eq!(stats.wins(), 2);
        assert!(stats.guess_distribution().iter().all(|&n| n == 0));
    }

    #[test]
    fn empty_record_has_zero_percentage() {
        assert_eq!(GameStats::new().win_percentage(), 0);
    }
}
