//! Calendar day-grid generation.
//!
//! # Responsibility
//! - Build the ordered day cells for week and month windows.
//! - Move the window anchor backward/forward by one window.
//!
//! # Invariants
//! - Functions here are pure; callers rebuild cells whenever inputs change.
//! - Cells are strictly consecutive and ascending by date.

use crate::model::task::Task;
use chrono::{Datelike, Days, NaiveDate};
use std::collections::HashSet;

/// Calendar grid size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CalendarWindow {
    /// Seven days centered on the anchor.
    #[default]
    Week,
    /// Thirty days starting fifteen days before the anchor.
    Month,
}

impl CalendarWindow {
    /// Number of cells in the window.
    pub fn size(self) -> u32 {
        match self {
            Self::Week => 7,
            Self::Month => 30,
        }
    }

    /// Days shown before the anchor.
    pub fn lead_days(self) -> u32 {
        match self {
            Self::Week => 3,
            Self::Month => 15,
        }
    }
}

/// Navigation direction for the chevron buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Previous,
    Next,
}

/// One calendar grid entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DayCell {
    pub date: NaiveDate,
    /// Abbreviated weekday, e.g. `Mon`.
    pub day_name: String,
    /// Day of month, 1-based.
    pub day_number: u32,
    pub is_today: bool,
    pub is_selected: bool,
    pub has_tasks: bool,
}

/// Returns `window_size` consecutive dates starting `lead_days` before `anchor`.
///
/// The sequence is cut short instead of panicking when it would leave the
/// representable date range.
pub fn day_range(anchor: NaiveDate, window_size: u32, lead_days: u32) -> Vec<NaiveDate> {
    let Some(start) = anchor.checked_sub_days(Days::new(u64::from(lead_days))) else {
        return Vec::new();
    };
    start.iter_days().take(window_size as usize).collect()
}

/// Builds the grid cells for `window` around `anchor`.
pub fn build_day_cells(
    anchor: NaiveDate,
    window: CalendarWindow,
    today: NaiveDate,
    selected: NaiveDate,
    tasks: &[Task],
) -> Vec<DayCell> {
    let due_dates: HashSet<NaiveDate> = tasks.iter().map(|task| task.due_date).collect();

    day_range(anchor, window.size(), window.lead_days())
        .into_iter()
        .map(|date| DayCell {
            date,
            day_name: date.format("%a").to_string(),
            day_number: date.day(),
            is_today: date == today,
            is_selected: date == selected,
            has_tasks: due_dates.contains(&date),
        })
        .collect()
}

/// Moves `anchor` by one full window in `direction`.
///
/// Returns the anchor unchanged when the move would overflow.
pub fn shift_anchor(anchor: NaiveDate, window: CalendarWindow, direction: Direction) -> NaiveDate {
    let step = Days::new(u64::from(window.size()));
    let shifted = match direction {
        Direction::Previous => anchor.checked_sub_days(step),
        Direction::Next => anchor.checked_add_days(step),
    };
    shifted.unwrap_or(anchor)
}
