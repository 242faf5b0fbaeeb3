use crate::libs::data_storage::DataStorage;
use crate::msg_debug;
use anyhow::Result;
use rusqlite::Connection;

/// Owns the SQLite connection for the per-user task store.
///
/// Constructed explicitly at the start of each operation and passed along;
/// there is no shared global handle.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    pub fn new() -> Result<Db> {
        let db_file_path = DataStorage::new().db_path()?;
        msg_debug!("Opening database at {}", db_file_path.display());
        let conn = Connection::open(db_file_path)?;

        Ok(Db { conn })
    }
}
