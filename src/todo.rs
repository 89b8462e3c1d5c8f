use serde::{Deserialize, Serialize};
use std::fmt;

/// A single task with a title and a completion flag
///
/// The title is fixed at construction; only the done state changes,
/// through [`mark_done`](Todo::mark_done) and
/// [`mark_undone`](Todo::mark_undone).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    /// Title describing the task
    title: String,
    /// Completion flag
    #[serde(default)]
    done: bool,
}

impl Todo {
    /// Create a new undone todo with the given title
    ///
    /// # Arguments
    /// * `title` - Display title for the task
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            done: false,
        }
    }

    /// The task's title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Mark the task as done. Idempotent.
    pub fn mark_done(&mut self) {
        self.done = true;
    }

    /// Mark the task as not done. Idempotent.
    pub fn mark_undone(&mut self) {
        self.done = false;
    }

    /// Check whether the task is done
    pub fn is_done(&self) -> bool {
        self.done
    }
}

impl fmt::Display for Todo {
    /// Renders as `[X] <title>` when done, `[ ] <title>` otherwise
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.done { "X" } else { " " };
        write!(f, "[{}] {}", marker, self.title)
    }
}
