use anyhow::Result;
use std::env::consts::OS;
use std::env::var;
use std::fs;
use std::path::{Path, PathBuf};

pub const APP_NAME: &str = "quicktd";

/// Default database file name; override with the `QUICKTD_DB_NAME`
/// environment variable.
pub const DB_FILE_NAME: &str = "todos.db";
pub const DB_FILE_ENV: &str = "QUICKTD_DB_NAME";

#[derive(Clone)]
pub struct DataStorage {
    base_path: PathBuf,
}

impl DataStorage {
    pub fn new() -> Self {
        let base_path = match OS {
            "windows" => var("LOCALAPPDATA").unwrap_or_else(|_| ".".into()),
            "macos" => var("HOME").unwrap_or_else(|_| ".".into()) + "/Library/Application Support",
            _ => var("HOME").unwrap_or_else(|_| ".".into()) + "/.local/share",
        };
        let base_path = Path::new(&base_path).join(APP_NAME);

        Self { base_path }
    }

    pub fn get_path(&self, file_name: &str) -> Result<PathBuf> {
        if !self.base_path.exists() {
            fs::create_dir_all(&self.base_path)?;
        }
        Ok(self.base_path.join(file_name))
    }

    /// Resolves the database file path, honoring the env override.
    pub fn db_path(&self) -> Result<PathBuf> {
        let file_name = var(DB_FILE_ENV).unwrap_or_else(|_| DB_FILE_NAME.into());
        self.get_path(&file_name)
    }
}

impl Default for DataStorage {
    fn default() -> Self {
        Self::new()
    }
}
