pub mod add;
pub mod delete;
pub mod list;
pub mod menu;
pub mod search;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Add a new task")]
    Add(add::AddArgs),
    #[command(about = "List pending tasks")]
    List,
    #[command(about = "Search tasks completed on a date")]
    Search(search::SearchArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    // Anything unrecognized falls back to the interactive menu
    #[command(external_subcommand)]
    External(Vec<String>),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

impl Cli {
    pub fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Some(Commands::Add(args)) => add::cmd(args),
            Some(Commands::List) => list::cmd(),
            Some(Commands::Search(args)) => search::cmd(args),
            Some(Commands::Delete(args)) => delete::cmd(args),
            Some(Commands::External(_)) | None => menu::cmd(),
        }
    }
}
