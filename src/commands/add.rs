use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::{is_valid_name, Task};
use crate::{msg_error, msg_print, msg_success};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Words of the task description, joined with spaces
    #[arg(num_args = 0..)]
    description: Vec<String>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    msg_print!(Message::Intro("Add a task".to_string()));
    add_task(&args.description.join(" "))?;
    msg_print!(Message::Farewell);

    Ok(())
}

/// Validates and inserts a new task; an empty description only prints an
/// error and never reaches the repository.
pub fn add_task(name: &str) -> Result<()> {
    if !is_valid_name(name) {
        msg_error!(Message::EmptyTaskName);
        return Ok(());
    }

    let mut tasks = Tasks::new()?;
    tasks.insert(&Task::new(name))?;
    msg_success!(Message::TaskAdded(name.to_string()));

    Ok(())
}
