//! Thin wrappers around `dialoguer` used by the interactive flows.
//!
//! Every prompt returns a [`Prompt`] value so call sites match explicitly on
//! cancellation instead of inspecting sentinel values. Pressing Esc (or
//! interrupting input) maps to [`Prompt::Cancelled`] everywhere.
//!
//! Presentation concerns live here too: completed tasks are rendered with
//! strike-through styling and an optional hint, derived from plain fields on
//! [`SelectOption`] rather than pre-styled strings.

use anyhow::Result;
use console::style;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, MultiSelect, Select};

/// Outcome of an interactive prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt<T> {
    Submitted(T),
    Cancelled,
}

/// One selectable entry in a select or multi-select prompt.
#[derive(Debug, Clone)]
pub struct SelectOption {
    pub label: String,
    pub hint: Option<String>,
    pub completed: bool,
}

impl SelectOption {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            hint: None,
            completed: false,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = completed;
        self
    }

    /// Renders the display string; styling is applied here, never stored.
    fn render(&self) -> String {
        let label = if self.completed {
            style(&self.label).strikethrough().to_string()
        } else {
            self.label.clone()
        };
        match &self.hint {
            Some(hint) => format!("{} ({})", label, style(hint).dim()),
            None => label,
        }
    }
}

/// Maps an interrupted read to a cancellation; other errors propagate.
fn interrupted_as_cancel<T>(err: dialoguer::Error) -> Result<Prompt<T>> {
    match err {
        dialoguer::Error::IO(ref io_err) if io_err.kind() == std::io::ErrorKind::Interrupted => Ok(Prompt::Cancelled),
        other => Err(other.into()),
    }
}

/// Free-text input with optional pre-filled value and inline validation.
pub fn text<V>(message: &str, initial: Option<&str>, validator: V) -> Result<Prompt<String>>
where
    V: Fn(&String) -> std::result::Result<(), String>,
{
    let theme = ColorfulTheme::default();
    let mut input = Input::with_theme(&theme).with_prompt(message).validate_with(validator);
    if let Some(initial) = initial {
        input = input.with_initial_text(initial);
    }

    match input.interact_text() {
        Ok(value) => Ok(Prompt::Submitted(value)),
        Err(err) => interrupted_as_cancel(err),
    }
}

/// Single-select among options; returns the chosen index.
pub fn select(message: &str, options: &[SelectOption]) -> Result<Prompt<usize>> {
    let items: Vec<String> = options.iter().map(SelectOption::render).collect();

    match Select::with_theme(&ColorfulTheme::default())
        .with_prompt(message)
        .items(&items)
        .default(0)
        .interact_opt()
    {
        Ok(Some(index)) => Ok(Prompt::Submitted(index)),
        Ok(None) => Ok(Prompt::Cancelled),
        Err(err) => interrupted_as_cancel(err),
    }
}

/// Multi-select with pre-checked defaults; zero selections are allowed.
pub fn multi_select(message: &str, options: &[SelectOption], checked: &[bool]) -> Result<Prompt<Vec<usize>>> {
    let items: Vec<String> = options.iter().map(SelectOption::render).collect();

    match MultiSelect::with_theme(&ColorfulTheme::default())
        .with_prompt(message)
        .items(&items)
        .defaults(checked)
        .interact_opt()
    {
        Ok(Some(indices)) => Ok(Prompt::Submitted(indices)),
        Ok(None) => Ok(Prompt::Cancelled),
        Err(err) => interrupted_as_cancel(err),
    }
}

/// Binary confirmation; declining and cancelling are distinct outcomes.
pub fn confirm(message: &str) -> Result<Prompt<bool>> {
    match Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(message)
        .default(false)
        .interact_opt()
    {
        Ok(Some(answer)) => Ok(Prompt::Submitted(answer)),
        Ok(None) => Ok(Prompt::Cancelled),
        Err(err) => interrupted_as_cancel(err),
    }
}
