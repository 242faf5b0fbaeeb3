/// A single to-do item.
///
/// `completed_at` holds the calendar day (`YYYY-MM-DD`) the task was marked
/// done and is present exactly when `completed` is true.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: Option<i64>,
    pub name: String,
    pub completed: bool,
    pub completed_at: Option<String>,
}

impl Task {
    pub fn new(name: &str) -> Self {
        Task {
            id: None,
            name: name.to_string(),
            completed: false,
            completed_at: None,
        }
    }
}

/// Row filters understood by the task repository.
#[derive(Debug, Clone)]
pub enum TaskFilter {
    /// Every task, in rowid order.
    All,
    /// Tasks not yet completed.
    Pending,
    /// Tasks completed on an exact calendar day (`YYYY-MM-DD`).
    CompletedOn(String),
    /// Case-insensitive substring match on the task name.
    NameLike(String),
}

/// Returns true when a task description is usable: non-empty after trimming.
pub fn is_valid_name(name: &str) -> bool {
    !name.trim().is_empty()
}
