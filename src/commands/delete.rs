use super::menu::task_option;
use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::prompt::{self, Prompt, SelectOption};
use crate::libs::task::{Task, TaskFilter};
use crate::{msg_info, msg_print, msg_warning};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Filter text matched case-insensitively against task names
    #[arg(short, long)]
    filter: Option<String>,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    msg_print!(Message::Intro("Delete a task".to_string()));
    delete_with_filter(args.filter.as_deref())?;
    msg_print!(Message::Farewell);

    Ok(())
}

/// Deletes a task found through an optional name filter.
///
/// When the filter matches exactly one task and equals its name
/// (trim + case-insensitive), the selection step is skipped and only the
/// confirmation remains.
pub fn delete_with_filter(filter: Option<&str>) -> Result<()> {
    let mut tasks_db = Tasks::new()?;
    let task_filter = match filter {
        Some(text) => TaskFilter::NameLike(text.to_string()),
        None => TaskFilter::All,
    };
    let matches = tasks_db.fetch(task_filter)?;

    if matches.is_empty() {
        msg_warning!(Message::NoTasksMatchingFilter);
        return Ok(());
    }

    let unambiguous = matches.len() == 1
        && filter
            .map(|text| text.trim().to_lowercase() == matches[0].name.trim().to_lowercase())
            .unwrap_or(false);

    let task = if unambiguous {
        matches[0].clone()
    } else {
        let options: Vec<SelectOption> = matches.iter().map(task_option).collect();
        match prompt::select(&Message::PromptDeleteSelect.to_string(), &options)? {
            Prompt::Submitted(index) => matches[index].clone(),
            Prompt::Cancelled => return Ok(()),
        }
    };

    confirm_and_delete(&mut tasks_db, &task)
}

/// Final confirmation gate shared by the CLI path and the interactive menu.
pub(crate) fn confirm_and_delete(tasks_db: &mut Tasks, task: &Task) -> Result<()> {
    match prompt::confirm(&Message::ConfirmDeleteTask(task.name.clone()).to_string())? {
        Prompt::Submitted(true) => {
            if let Some(id) = task.id {
                tasks_db.delete(id)?;
            }
            msg_warning!(Message::TaskDeleted);
        }
        Prompt::Submitted(false) | Prompt::Cancelled => {
            msg_info!(Message::OperationCancelled);
        }
    }

    Ok(())
}
