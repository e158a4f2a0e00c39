//! State behind the "Add Task" modal

use crate::types::{NewTask, TaskStatus};

#[derive(Debug, Clone, Default)]
pub struct TaskForm {
    pub open: bool,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    /// A creation request from this form has not completed yet
    pub submitting: bool,
}

impl TaskForm {
    pub fn show(&mut self) {
        self.open = true;
    }

    /// Close without clearing; reopening shows the previous input.
    pub fn cancel(&mut self) {
        self.open = false;
    }

    /// Creation body, or `None` when the title is blank. Fields are sent as typed.
    pub fn draft(&self) -> Option<NewTask> {
        if self.title.trim().is_empty() {
            return None;
        }
        Some(NewTask {
            title: self.title.clone(),
            description: self.description.clone(),
            status: self.status,
        })
    }

    pub fn can_submit(&self) -> bool {
        !self.submitting && self.draft().is_some()
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
