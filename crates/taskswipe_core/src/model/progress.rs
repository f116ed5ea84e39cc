//! Gamification counters: day streak and experience points.
//!
//! # Invariants
//! - Streak advances at most once per calendar day.
//! - XP only grows; reopening a task never takes XP back.

use chrono::NaiveDate;

/// XP granted for each completion unless configured otherwise.
pub const DEFAULT_XP_PER_COMPLETION: u32 = 10;

/// Persisted gamification state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Progress {
    /// Consecutive days with at least one completion.
    pub streak: u32,
    /// Total experience points.
    pub xp: u32,
    /// Last day a completion advanced the streak.
    pub last_active_day: Option<NaiveDate>,
}

impl Progress {
    /// Records one completion on `day` and returns the XP gained.
    ///
    /// The streak continues from yesterday, holds for a second completion
    /// on the same day, and restarts at 1 after a gap.
    pub fn record_completion(&mut self, day: NaiveDate, xp_gained: u32) -> u32 {
        self.xp = self.xp.saturating_add(xp_gained);

        self.streak = match self.last_active_day {
            Some(last) if last == day => self.streak.max(1),
            Some(last) if last.succ_opt() == Some(day) => self.streak.saturating_add(1),
            _ => 1,
        };
        self.last_active_day = Some(day);

        xp_gained
    }
}
