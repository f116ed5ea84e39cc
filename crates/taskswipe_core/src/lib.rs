//! Core domain logic for TaskSwipe.
//! This crate is the single source of truth for task, gesture and progress rules.

pub mod calendar;
pub mod config;
pub mod db;
pub mod gesture;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use calendar::{build_day_cells, day_range, shift_anchor, CalendarWindow, DayCell, Direction};
pub use config::BoardConfig;
pub use gesture::classifier::{
    GestureState, SwipeAction, SwipeClassifier, SwipeDirection, SwipePhase,
};
pub use gesture::config::{SwipeConfig, SwipeConfigError};
pub use gesture::feedback::{
    feedback_for, indicator_opacity, intent_tint, offset, opacity, IntentTint, SwipeFeedback,
};
pub use logging::{init_logging, logging_status, LogConfig, LogLevel, LoggingError};
pub use model::progress::{Progress, DEFAULT_XP_PER_COMPLETION};
pub use model::task::{
    Category, Priority, Task, TaskDraft, TaskId, TaskList, TaskValidationError,
};
pub use service::board::{
    BoardError, BoardNotice, BoardResult, DayProgress, TaskBoard, ViewMode,
};
pub use store::{
    KeyValueBackend, KeyValueStorage, MemoryBackend, MemoryStorage, SqliteBackend,
    SqliteStorage, StoreError, StoreResult, TaskStorage,
};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
