//! Interactive session loop.
//!
//! Presents the main menu and dispatches each chosen action: view pending,
//! create/edit, manage completion states, search by completion date, delete,
//! exit. Every action, whether it completes or is cancelled, returns control
//! to the menu; only the exit choice (or cancelling the menu itself) ends
//! the session. Tasks are read fresh from the repository on every action.

use super::{add, delete, list, search};
use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::prompt::{self, Prompt, SelectOption};
use crate::libs::task::{is_valid_name, Task, TaskFilter};
use crate::{msg_print, msg_success, msg_warning};
use anyhow::Result;
use chrono::Local;

const MENU_LABELS: [&str; 6] = [
    "View pending tasks",
    "Create / edit a task",
    "Manage statuses (done / pending)",
    "Search completed tasks",
    "Delete a task",
    "Exit",
];

pub fn cmd() -> Result<()> {
    msg_print!(Message::Welcome, true);

    // Fixed for the whole session; every completion marked here lands on
    // the same calendar day.
    let today = Local::now().format("%Y-%m-%d").to_string();

    loop {
        let options: Vec<SelectOption> = MENU_LABELS.iter().map(|label| SelectOption::new(*label)).collect();
        let choice = match prompt::select(&Message::PromptMainMenu.to_string(), &options)? {
            Prompt::Submitted(index) => index,
            Prompt::Cancelled => break,
        };

        match choice {
            0 => list::print_pending()?,
            1 => upsert()?,
            2 => manage(&today)?,
            3 => search_completed(&today)?,
            4 => delete_task()?,
            _ => break,
        }
    }

    msg_print!(Message::Farewell, true);

    Ok(())
}

/// Builds the select entry for a task: completion hint, strike-through flag.
pub(crate) fn task_option(task: &Task) -> SelectOption {
    let hint = match &task.completed_at {
        Some(date) => Message::HintDoneOn(date.clone()).to_string(),
        None => Message::HintPending.to_string(),
    };
    SelectOption::new(task.name.clone()).with_hint(hint).completed(task.completed)
}

fn validate_name(value: &String) -> std::result::Result<(), String> {
    if is_valid_name(value) {
        Ok(())
    } else {
        Err(Message::EmptyTaskName.to_string())
    }
}

fn validate_date(value: &String) -> std::result::Result<(), String> {
    if search::is_valid_date(value) {
        Ok(())
    } else {
        Err(Message::InvalidDateFormat.to_string())
    }
}

/// Create a new task or rename an existing one. Cancelling at any step
/// abandons the whole action with no repository mutation.
fn upsert() -> Result<()> {
    let mut tasks_db = Tasks::new()?;
    let all = tasks_db.fetch(TaskFilter::All)?;

    let mut options = vec![SelectOption::new(Message::CreateNewTaskLabel.to_string()).with_hint(Message::CreateNewTaskHint.to_string())];
    options.extend(all.iter().map(task_option));

    let index = match prompt::select(&Message::PromptUpsertSelect.to_string(), &options)? {
        Prompt::Submitted(index) => index,
        Prompt::Cancelled => return Ok(()),
    };

    if index == 0 {
        if let Prompt::Submitted(name) = prompt::text(&Message::PromptNewTaskName.to_string(), None, validate_name)? {
            add::add_task(&name)?;
        }
    } else {
        let task = &all[index - 1];
        if let Prompt::Submitted(name) = prompt::text(&Message::PromptEditTaskName.to_string(), Some(&task.name), validate_name)? {
            if let Some(id) = task.id {
                tasks_db.rename(id, &name)?;
            }
            msg_success!(Message::TaskRenamed);
        }
    }

    Ok(())
}

/// Bulk completion-state replace: the multi-select starts pre-checked for
/// currently-completed tasks and the submitted selection becomes the entire
/// new completion state.
fn manage(today: &str) -> Result<()> {
    let mut tasks_db = Tasks::new()?;
    let all = tasks_db.fetch(TaskFilter::All)?;

    if all.is_empty() {
        msg_warning!(Message::NoTasksToManage);
        return Ok(());
    }

    let options: Vec<SelectOption> = all.iter().map(task_option).collect();
    let checked: Vec<bool> = all.iter().map(|task| task.completed).collect();

    if let Prompt::Submitted(indices) = prompt::multi_select(&Message::PromptManageSelect.to_string(), &options, &checked)? {
        let ids: Vec<i64> = indices.iter().filter_map(|&index| all[index].id).collect();
        tasks_db.set_completion_state(&ids, today)?;
        msg_success!(Message::StatusesUpdated);
    }

    Ok(())
}

fn search_completed(today: &str) -> Result<()> {
    if let Prompt::Submitted(date) = prompt::text(&Message::PromptSearchDate.to_string(), Some(today), validate_date)? {
        search::print_completed_on(&date)?;
    }

    Ok(())
}

fn delete_task() -> Result<()> {
    let mut tasks_db = Tasks::new()?;
    let all = tasks_db.fetch(TaskFilter::All)?;

    if all.is_empty() {
        msg_warning!(Message::NoTasksToDelete);
        return Ok(());
    }

    let options: Vec<SelectOption> = all.iter().map(task_option).collect();
    match prompt::select(&Message::PromptDeleteSelect.to_string(), &options)? {
        Prompt::Submitted(index) => delete::confirm_and_delete(&mut tasks_db, &all[index]),
        Prompt::Cancelled => Ok(()),
    }
}
