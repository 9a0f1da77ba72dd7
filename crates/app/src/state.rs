//! Observable state behind the task list view.
//!
//! The view owns one [`TaskListState`] inside a `Signal` — one instance per
//! active list, no process-wide singleton. Mutations never patch the
//! collection locally: each success triggers a full reload, so the UI shows
//! the backend's truth (briefly stale while the reload is in flight) and a
//! failed mutation leaves local state untouched.

use chrono::NaiveDate;
use shared_types::Task;

use crate::api::ApiError;

/// Fixed user-facing message for list-loading failures.
pub const LOAD_ERROR: &str = "Cannot load tasks";

/// Fixed user-facing message for create/update/delete failures.
pub const SAVE_ERROR: &str = "Cannot save changes";

/// The task collection plus the loading flag and error message the view
/// renders from.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskListState {
    tasks: Vec<Task>,
    loading: bool,
    error: Option<String>,
    refresh_seq: u64,
}

impl TaskListState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Start a reload cycle. Returns the sequence tag identifying it; the
    /// matching [`finish_load`](Self::finish_load) must pass the tag back.
    pub fn begin_load(&mut self) -> u64 {
        self.loading = true;
        self.refresh_seq += 1;
        self.refresh_seq
    }

    /// Apply a finished load. Responses from superseded reloads are dropped
    /// wholesale — a stale completion neither writes the collection nor
    /// clears the loading flag, so the newest request always wins.
    pub fn finish_load(&mut self, seq: u64, result: Result<Vec<Task>, ApiError>) {
        if seq != self.refresh_seq {
            return;
        }
        self.loading = false;
        match result {
            Ok(tasks) => {
                self.tasks = tasks;
                self.error = None;
            }
            Err(_) => self.error = Some(LOAD_ERROR.to_string()),
        }
    }

    /// Record a failed mutation. The collection stays untouched; nothing was
    /// speculatively changed, so there is nothing to roll back.
    pub fn mutation_failed(&mut self) {
        self.error = Some(SAVE_ERROR.to_string());
    }
}

/// Form fields for the new-task entry row, bound as plain strings.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewTaskInput {
    pub title: String,
    pub description: String,
    pub due_date: String,
}

impl NewTaskInput {
    /// Build the create payload. `None` when the title is blank — the caller
    /// issues no request and keeps the fields as typed. Empty description and
    /// due-date strings become absent fields, not empty values.
    pub fn to_task(&self) -> Option<Task> {
        let title = self.title.trim();
        if title.is_empty() {
            return None;
        }
        let description = (!self.description.is_empty()).then(|| self.description.clone());
        let due_date = NaiveDate::parse_from_str(self.due_date.trim(), "%Y-%m-%d").ok();
        Some(Task::new(title, description, due_date))
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
