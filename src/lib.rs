//! # Quicktd - a quick terminal to-do list
//!
//! A command-line utility for tracking personal tasks: create, edit,
//! complete, search by completion date, and delete.
//!
//! ## Features
//!
//! - **Task Management**: Create, rename, and delete tasks
//! - **Completion Tracking**: Mark tasks done on a calendar day, atomically
//! - **Search**: Find tasks completed on a given date
//! - **Interactive Menu**: A full prompt-driven session loop
//! - **Direct Sub-actions**: `add`, `list`, `search`, and `delete` from the shell
//!
//! ## Usage
//!
//! ```rust,no_run
//! use quicktd::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
