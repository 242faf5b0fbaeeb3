use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::TaskFilter;
use crate::libs::view::View;
use crate::{msg_error, msg_print, msg_warning};
use anyhow::Result;
use clap::Args;
use regex::Regex;
use std::sync::OnceLock;

static DATE_FORMAT: OnceLock<Regex> = OnceLock::new();

/// Strict calendar-day check: exactly `YYYY-MM-DD`.
pub fn is_valid_date(value: &str) -> bool {
    DATE_FORMAT
        .get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"))
        .is_match(value)
}

#[derive(Debug, Args)]
pub struct SearchArgs {
    /// Completion date to search for (YYYY-MM-DD)
    date: String,
}

pub fn cmd(args: SearchArgs) -> Result<()> {
    msg_print!(Message::Intro("Search completed tasks".to_string()));
    print_completed_on(&args.date)?;
    msg_print!(Message::Farewell);

    Ok(())
}

/// Prints the tasks completed on the given date, with status icons.
///
/// A malformed date prints an error and performs no lookup.
pub fn print_completed_on(date: &str) -> Result<()> {
    if !is_valid_date(date) {
        msg_error!(Message::InvalidDateFormat);
        return Ok(());
    }

    let mut tasks = Tasks::new()?;
    let results = tasks.fetch(TaskFilter::CompletedOn(date.to_string()))?;

    if results.is_empty() {
        msg_warning!(Message::NoCompletedOn(date.to_string()));
    } else {
        msg_print!(Message::CompletedOnHeader(date.to_string()), true);
        View::with_status(&results);
    }

    Ok(())
}
