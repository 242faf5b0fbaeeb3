use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::TaskFilter;
use crate::libs::view::View;
use crate::{msg_print, msg_warning};
use anyhow::Result;

pub fn cmd() -> Result<()> {
    msg_print!(Message::Intro("View pending tasks".to_string()));
    print_pending()?;
    msg_print!(Message::Farewell);

    Ok(())
}

/// Prints pending tasks, or the all-caught-up notice when there are none.
pub fn print_pending() -> Result<()> {
    let mut tasks = Tasks::new()?;
    let pending = tasks.fetch(TaskFilter::Pending)?;

    if pending.is_empty() {
        msg_warning!(Message::AllCaughtUp);
    } else {
        msg_print!(Message::PendingHeader, true);
        View::pending(&pending);
    }

    Ok(())
}
