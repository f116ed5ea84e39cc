//! Task domain model.
//!
//! # Responsibility
//! - Define the canonical task record rendered by list and calendar views.
//! - Define the add-task draft and its submit-time validation.
//! - Provide completion toggle helpers that keep timestamps consistent.
//!
//! # Invariants
//! - `id` is stable and never nil.
//! - `title` is non-empty after trimming.
//! - `completed_at` is `Some` exactly when `completed` is `true`.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::error::Error;
use std::fmt::{Display, Formatter};
use uuid::Uuid;

/// Stable identifier for every task.
pub type TaskId = Uuid;

/// Ordered task collection as loaded from and saved to storage.
pub type TaskList = Vec<Task>;

const DUE_TIME_FORMAT: &str = "%H:%M";

/// Task urgency shown as a colored dot next to the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Task grouping shown as a colored chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    #[default]
    Personal,
    Work,
    Health,
    Shopping,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Personal => "personal",
            Self::Work => "work",
            Self::Health => "health",
            Self::Shopping => "shopping",
        }
    }
}

/// Validation errors for task construction and persisted task state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    NilId,
    EmptyTitle,
    CompletionMismatch { id: TaskId, completed: bool },
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NilId => write!(f, "task id must not be nil"),
            Self::EmptyTitle => write!(f, "task title must not be empty"),
            Self::CompletionMismatch { id, completed } => write!(
                f,
                "task {id} has completed={completed} but completed_at does not match"
            ),
        }
    }
}

impl Error for TaskValidationError {}

/// Add-task form state.
///
/// Mirrors the fields a user can edit before submitting. A draft is only
/// turned into a `Task` through `Task::from_draft`, which validates it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskDraft {
    pub title: String,
    pub due_date: NaiveDate,
    #[serde(default, with = "due_time_format")]
    pub due_time: Option<NaiveTime>,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub category: Category,
}

impl TaskDraft {
    /// Creates an empty draft due on `due_date` with form defaults.
    pub fn for_date(due_date: NaiveDate) -> Self {
        Self {
            title: String::new(),
            due_date,
            due_time: None,
            priority: Priority::default(),
            category: Category::default(),
        }
    }

    /// Returns whether the form can be submitted.
    pub fn is_submittable(&self) -> bool {
        !self.title.trim().is_empty()
    }
}

/// Canonical task record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawTask")]
pub struct Task {
    pub id: TaskId,
    pub title: String,
    pub due_date: NaiveDate,
    #[serde(with = "due_time_format")]
    pub due_time: Option<NaiveTime>,
    pub priority: Priority,
    pub category: Category,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Creates a new open task from a submitted draft with a generated ID.
    ///
    /// # Errors
    /// - `EmptyTitle` when the draft title is blank.
    pub fn from_draft(draft: TaskDraft, now: DateTime<Utc>) -> Result<Self, TaskValidationError> {
        Self::with_id(Uuid::new_v4(), draft, now)
    }

    /// Creates a new open task with a caller-provided stable ID.
    ///
    /// Used by import paths where identity already exists externally.
    /// The title is stored trimmed.
    pub fn with_id(
        id: TaskId,
        draft: TaskDraft,
        now: DateTime<Utc>,
    ) -> Result<Self, TaskValidationError> {
        let task = Self {
            id,
            title: draft.title.trim().to_string(),
            due_date: draft.due_date,
            due_time: draft.due_time,
            priority: draft.priority,
            category: draft.category,
            completed: false,
            completed_at: None,
            created_at: now,
        };
        task.validate()?;
        Ok(task)
    }

    /// Validates task invariants.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        if self.id.is_nil() {
            return Err(TaskValidationError::NilId);
        }
        if self.title.trim().is_empty() {
            return Err(TaskValidationError::EmptyTitle);
        }
        if self.completed != self.completed_at.is_some() {
            return Err(TaskValidationError::CompletionMismatch {
                id: self.id,
                completed: self.completed,
            });
        }
        Ok(())
    }

    /// Flips completion state and returns the new `completed` value.
    ///
    /// Completing stamps `completed_at = now`; reopening clears it.
    pub fn toggle_completed(&mut self, now: DateTime<Utc>) -> bool {
        self.completed = !self.completed;
        self.completed_at = if self.completed { Some(now) } else { None };
        self.completed
    }

    /// Returns whether this task is due on `date`.
    pub fn is_due_on(&self, date: NaiveDate) -> bool {
        self.due_date == date
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawTask {
    id: TaskId,
    title: String,
    due_date: NaiveDate,
    #[serde(default, with = "due_time_format")]
    due_time: Option<NaiveTime>,
    #[serde(default)]
    priority: Priority,
    #[serde(default)]
    category: Category,
    #[serde(default)]
    completed: bool,
    #[serde(default)]
    completed_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
}

impl TryFrom<RawTask> for Task {
    type Error = TaskValidationError;

    fn try_from(raw: RawTask) -> Result<Self, Self::Error> {
        let task = Self {
            id: raw.id,
            title: raw.title,
            due_date: raw.due_date,
            due_time: raw.due_time,
            priority: raw.priority,
            category: raw.category,
            completed: raw.completed,
            completed_at: raw.completed_at,
            created_at: raw.created_at,
        };
        task.validate()?;
        Ok(task)
    }
}

/// `HH:MM` wire format for optional due times.
///
/// An empty string decodes to `None`, matching an untouched time input.
mod due_time_format {
    use super::{Deserialize, Deserializer, NaiveTime, Serializer, DUE_TIME_FORMAT};

    pub fn serialize<S>(value: &Option<NaiveTime>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(time) => serializer.serialize_str(&time.format(DUE_TIME_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveTime>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        let Some(raw) = raw else {
            return Ok(None);
        };
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Ok(None);
        }
        NaiveTime::parse_from_str(trimmed, DUE_TIME_FORMAT)
            .or_else(|_| NaiveTime::parse_from_str(trimmed, "%H:%M:%S"))
            .map(Some)
            .map_err(|err| serde::de::Error::custom(format!("invalid due time `{trimmed}`: {err}")))
    }
}
