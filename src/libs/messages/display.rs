//! Display implementation for quicktd application messages.
//!
//! Converts the structured `Message` enum into the human-readable text shown
//! to the user. All user-facing wording lives here, in one place, so the rest
//! of the application works with typed variants instead of string literals.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter) -> Result {
        let text = match self {
            // === SESSION MESSAGES ===
            Message::Welcome => "Welcome to quicktd".to_string(),
            Message::Farewell => "Thanks for using quicktd!".to_string(),
            Message::Intro(action) => format!("quicktd - {}", action),

            // === TASK MESSAGES ===
            Message::TaskAdded(name) => format!("Task '{}' added successfully.", name),
            Message::TaskRenamed => "Task updated successfully.".to_string(),
            Message::TaskDeleted => "Task permanently deleted.".to_string(),
            Message::StatusesUpdated => "Task statuses updated.".to_string(),
            Message::AllCaughtUp => "All caught up!".to_string(),
            Message::PendingHeader => "Pending tasks".to_string(),
            Message::NoTasksToManage => "There are no tasks to manage.".to_string(),
            Message::NoTasksToDelete => "There are no tasks to delete.".to_string(),
            Message::NoTasksMatchingFilter => "No tasks found to delete.".to_string(),
            Message::NoCompletedOn(date) => format!("No tasks completed on {}.", date),
            Message::CompletedOnHeader(date) => format!("Tasks completed on {}", date),

            // === PROMPT MESSAGES ===
            Message::PromptMainMenu => "What would you like to do?".to_string(),
            Message::PromptUpsertSelect => "Select a task to edit, or create a new one".to_string(),
            Message::PromptNewTaskName => "Description of the new task".to_string(),
            Message::PromptEditTaskName => "Edit the task description".to_string(),
            Message::PromptManageSelect => "Select the tasks that are completed (space to toggle)".to_string(),
            Message::PromptSearchDate => "Completion date (YYYY-MM-DD)".to_string(),
            Message::PromptDeleteSelect => "Select the task to delete".to_string(),
            Message::ConfirmDeleteTask(name) => format!("Delete \"{}\"?", name),
            Message::CreateNewTaskLabel => "New task".to_string(),
            Message::CreateNewTaskHint => "Create a new entry".to_string(),
            Message::HintCompleted => "Completed".to_string(),
            Message::HintPending => "Pending".to_string(),
            Message::HintDoneOn(date) => format!("Done on {}", date),

            // === VALIDATION MESSAGES ===
            Message::EmptyTaskName => "A task description is required.".to_string(),
            Message::InvalidDateFormat => "Required format: YYYY-MM-DD".to_string(),

            // === GENERIC MESSAGES ===
            Message::OperationCancelled => "Operation cancelled.".to_string(),
            Message::UnexpectedError(err) => format!("Unexpected error: {}", err),
        };
        write!(f, "{}", text)
    }
}
