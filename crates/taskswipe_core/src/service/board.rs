//! Task board use-case service.
//!
//! # Responsibility
//! - Own the task list, progress counters and view state for one UI shell.
//! - Route finished swipe gestures into complete/delete mutations.
//! - Persist through the injected `TaskStorage` on every mutation.
//!
//! # Invariants
//! - In-memory tasks change only after the matching save succeeded.
//! - XP is awarded on completion only, never on reopen.
//! - Task titles are never written to logs.

use crate::calendar::{build_day_cells, shift_anchor, CalendarWindow, DayCell, Direction};
use crate::config::BoardConfig;
use crate::gesture::classifier::{SwipeAction, SwipeClassifier, SwipePhase};
use crate::gesture::config::SwipeConfigError;
use crate::gesture::feedback::{feedback_for, SwipeFeedback};
use crate::model::progress::Progress;
use crate::model::task::{Task, TaskDraft, TaskId, TaskList, TaskValidationError};
use crate::store::{StoreError, TaskStorage};
use chrono::{DateTime, NaiveDate, Utc};
use log::{error, info};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type BoardResult<T> = Result<T, BoardError>;

/// Board operation failure.
#[derive(Debug)]
pub enum BoardError {
    Config(SwipeConfigError),
    Validation(TaskValidationError),
    Store(StoreError),
    TaskNotFound(TaskId),
}

impl Display for BoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid board config: {err}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Store(err) => write!(f, "{err}"),
            Self::TaskNotFound(id) => write!(f, "task not found: {id}"),
        }
    }
}

impl Error for BoardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            Self::TaskNotFound(_) => None,
        }
    }
}

impl From<SwipeConfigError> for BoardError {
    fn from(value: SwipeConfigError) -> Self {
        Self::Config(value)
    }
}

impl From<TaskValidationError> for BoardError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for BoardError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Top-level view of the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Today,
    Calendar,
}

impl ViewMode {
    /// Header title for the view.
    pub fn title(self) -> &'static str {
        match self {
            Self::Today => "Today",
            Self::Calendar => "Calendar",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Today => Self::Calendar,
            Self::Calendar => Self::Today,
        }
    }
}

/// User-facing outcome of a mutation, rendered as a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardNotice {
    TaskAdded { id: TaskId },
    TaskCompleted { id: TaskId, xp_gained: u32 },
    TaskReopened { id: TaskId },
    TaskDeleted { id: TaskId },
}

impl BoardNotice {
    pub fn message(&self) -> String {
        match self {
            Self::TaskAdded { .. } => "Task added successfully!".to_string(),
            Self::TaskCompleted { xp_gained, .. } => format!("Task completed! +{xp_gained} XP"),
            Self::TaskReopened { .. } => "Task reopened".to_string(),
            Self::TaskDeleted { .. } => "Task deleted".to_string(),
        }
    }
}

/// Completion summary for one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayProgress {
    pub total: usize,
    pub completed: usize,
    /// Rounded completion percentage; 0 when the day has no tasks.
    pub percent: u8,
}

/// Application shell state over an injected storage.
pub struct TaskBoard<S: TaskStorage> {
    storage: S,
    config: BoardConfig,
    tasks: TaskList,
    progress: Progress,
    today: NaiveDate,
    selected_date: NaiveDate,
    view: ViewMode,
    calendar_window: CalendarWindow,
    calendar_anchor: NaiveDate,
    swipe: SwipeClassifier<TaskId>,
}

impl<S: TaskStorage> TaskBoard<S> {
    /// Loads persisted state and opens the board on `today`.
    ///
    /// # Errors
    /// - `Config` when swipe thresholds are invalid.
    /// - `Store` when persisted state cannot be read or is malformed.
    pub fn open(storage: S, config: BoardConfig, today: NaiveDate) -> BoardResult<Self> {
        config.validate()?;

        let tasks = storage.load().map_err(|err| {
            error!("event=board_open module=board status=error error_code=load_tasks_failed error={err}");
            err
        })?;
        let progress = storage.load_progress()?;

        info!(
            "event=board_open module=board status=ok tasks={} streak={} xp={}",
            tasks.len(),
            progress.streak,
            progress.xp
        );

        Ok(Self {
            storage,
            config,
            tasks,
            progress,
            today,
            selected_date: today,
            view: ViewMode::default(),
            calendar_window: CalendarWindow::default(),
            calendar_anchor: today,
            swipe: SwipeClassifier::new(config.swipe),
        })
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn config(&self) -> &BoardConfig {
        &self.config
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }

    /// Tasks due on `date`, in creation order.
    pub fn tasks_for(&self, date: NaiveDate) -> Vec<&Task> {
        self.tasks.iter().filter(|task| task.is_due_on(date)).collect()
    }

    /// Tasks due on the selected date.
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.tasks_for(self.selected_date)
    }

    pub fn day_progress(&self, date: NaiveDate) -> DayProgress {
        let due = self.tasks_for(date);
        let total = due.len();
        let completed = due.iter().filter(|task| task.completed).count();
        let percent = if total == 0 {
            0
        } else {
            ((completed as f64 / total as f64) * 100.0).round() as u8
        };
        DayProgress {
            total,
            completed,
            percent,
        }
    }

    pub fn progress(&self) -> Progress {
        self.progress
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    /// Advances the board clock. Hosts call this when the local date
    /// changes; completions count toward this day for the streak.
    pub fn set_today(&mut self, today: NaiveDate) {
        self.today = today;
    }

    pub fn selected_date(&self) -> NaiveDate {
        self.selected_date
    }

    pub fn select_date(&mut self, date: NaiveDate) {
        self.selected_date = date;
    }

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn title(&self) -> &'static str {
        self.view.title()
    }

    pub fn toggle_view(&mut self) -> ViewMode {
        self.view = self.view.toggled();
        self.view
    }

    /// Fresh add-task form for the selected date.
    pub fn draft_for_selected(&self) -> TaskDraft {
        TaskDraft::for_date(self.selected_date)
    }

    /// Validates and stores a new open task.
    pub fn add_task(&mut self, draft: TaskDraft, now: DateTime<Utc>) -> BoardResult<BoardNotice> {
        let task = Task::from_draft(draft, now)?;
        let id = task.id;
        let due_date = task.due_date;

        let mut next = self.tasks.clone();
        next.push(task);
        self.commit_tasks(next)?;

        info!("event=task_add module=board status=ok task_id={id} due_date={due_date}");
        Ok(BoardNotice::TaskAdded { id })
    }

    /// Flips completion of `id`; completing awards XP and advances the streak.
    ///
    /// `now` stamps `completed_at`. The streak day is the board's `today`,
    /// not the UTC date of `now`, so it stays correct for hosts east or west
    /// of UTC as long as they keep `set_today` current.
    ///
    /// # Errors
    /// - `TaskNotFound` for an unknown id; nothing changes.
    /// - `Store` when saving tasks fails; nothing changes.
    /// - `Store` when saving progress fails after the task save succeeded.
    ///   The task then stays completed while XP and streak are not updated.
    pub fn toggle_complete(&mut self, id: TaskId, now: DateTime<Utc>) -> BoardResult<BoardNotice> {
        let index = self.index_of(id)?;
        let mut next = self.tasks.clone();
        let completed = next[index].toggle_completed(now);
        self.commit_tasks(next)?;

        if !completed {
            info!("event=task_reopen module=board status=ok task_id={id}");
            return Ok(BoardNotice::TaskReopened { id });
        }

        let mut progress = self.progress;
        let xp_gained = progress.record_completion(self.today, self.config.xp_per_completion);
        self.storage.save_progress(&progress)?;
        self.progress = progress;

        info!(
            "event=task_complete module=board status=ok task_id={id} xp_gained={xp_gained} streak={}",
            progress.streak
        );
        Ok(BoardNotice::TaskCompleted { id, xp_gained })
    }

    /// Removes `id` from the board.
    pub fn delete_task(&mut self, id: TaskId) -> BoardResult<BoardNotice> {
        let index = self.index_of(id)?;
        let mut next = self.tasks.clone();
        next.remove(index);
        self.commit_tasks(next)?;

        info!("event=task_delete module=board status=ok task_id={id}");
        Ok(BoardNotice::TaskDeleted { id })
    }

    /// Dispatches a resolved swipe to the matching mutation.
    pub fn apply_swipe(
        &mut self,
        action: SwipeAction<TaskId>,
        now: DateTime<Utc>,
    ) -> BoardResult<Option<BoardNotice>> {
        match action {
            SwipeAction::NoAction => Ok(None),
            SwipeAction::Complete(id) => self.toggle_complete(id, now).map(Some),
            SwipeAction::Delete(id) => self.delete_task(id).map(Some),
        }
    }

    pub fn swipe_begin(&mut self, id: TaskId, x: f64) {
        self.swipe.begin(id, x);
    }

    pub fn swipe_update(&mut self, id: TaskId, x: f64) {
        self.swipe.update(id, x);
    }

    /// Ends the gesture on `id` and applies whatever it resolved to.
    pub fn swipe_end(&mut self, id: TaskId, now: DateTime<Utc>) -> BoardResult<Option<BoardNotice>> {
        let action = self.swipe.end(id);
        self.apply_swipe(action, now)
    }

    pub fn swipe_cancel(&mut self) {
        self.swipe.cancel();
    }

    pub fn swipe_phase(&self, id: TaskId) -> SwipePhase {
        self.swipe.phase(id)
    }

    /// Drag feedback for rendering row `id`.
    pub fn swipe_feedback(&self, id: TaskId) -> SwipeFeedback {
        feedback_for(self.swipe.state(), id, self.swipe.config())
    }

    pub fn calendar_window(&self) -> CalendarWindow {
        self.calendar_window
    }

    pub fn set_calendar_window(&mut self, window: CalendarWindow) {
        self.calendar_window = window;
    }

    pub fn calendar_anchor(&self) -> NaiveDate {
        self.calendar_anchor
    }

    pub fn shift_calendar(&mut self, direction: Direction) -> NaiveDate {
        self.calendar_anchor = shift_anchor(self.calendar_anchor, self.calendar_window, direction);
        self.calendar_anchor
    }

    pub fn reset_calendar_anchor(&mut self) {
        self.calendar_anchor = self.today;
    }

    pub fn calendar_cells(&self) -> Vec<DayCell> {
        build_day_cells(
            self.calendar_anchor,
            self.calendar_window,
            self.today,
            self.selected_date,
            &self.tasks,
        )
    }

    fn index_of(&self, id: TaskId) -> BoardResult<usize> {
        self.tasks
            .iter()
            .position(|task| task.id == id)
            .ok_or(BoardError::TaskNotFound(id))
    }

    fn commit_tasks(&mut self, next: TaskList) -> BoardResult<()> {
        if let Err(err) = self.storage.save(&next) {
            error!("event=store_save module=board status=error error_code=save_tasks_failed error={err}");
            return Err(err.into());
        }
        self.tasks = next;
        Ok(())
    }
}
