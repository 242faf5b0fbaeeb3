use super::task::Task;

const PENDING_MARKER: &str = "⏳";
const COMPLETED_MARKER: &str = "✅";

/// Console rendering for task listings.
pub struct View {}

impl View {
    /// Renders pending tasks, one per line with the pending marker.
    pub fn pending(tasks: &[Task]) {
        for task in tasks {
            println!("{} {}", PENDING_MARKER, task.name);
        }
    }

    /// Renders tasks with a status icon derived from the completion flag.
    ///
    /// Search results are completed by construction, but the icon is still
    /// derived per row so labels stay consistent with the other views.
    pub fn with_status(tasks: &[Task]) {
        for task in tasks {
            let icon = if task.completed { COMPLETED_MARKER } else { PENDING_MARKER };
            println!("{} {}", icon, task.name);
        }
    }
}
