use super::db::Db;
use crate::libs::task::{Task, TaskFilter};
use anyhow::Result;
use rusqlite::{params, params_from_iter, Connection};

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    name TEXT NOT NULL,
    completed INTEGER NOT NULL DEFAULT 0,
    completed_at TEXT DEFAULT NULL
);";
const INSERT_TASK: &str = "INSERT INTO tasks (name) VALUES (?)";
const SELECT_TASKS: &str = "SELECT id, name, completed, completed_at FROM tasks";
const WHERE_PENDING: &str = "WHERE completed = 0";
const WHERE_COMPLETED_AT: &str = "WHERE completed_at = ?";
const WHERE_NAME_LIKE: &str = "WHERE LOWER(name) LIKE '%' || LOWER(?) || '%'";
const RENAME_TASK: &str = "UPDATE tasks SET name = ?1 WHERE id = ?2";
const RESET_COMPLETION: &str = "UPDATE tasks SET completed = 0, completed_at = NULL";
const MARK_COMPLETED: &str = "UPDATE tasks SET completed = 1, completed_at = ?1 WHERE id = ?2";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?";

/// Repository for the `tasks` relation.
///
/// Owns the database connection for its lifetime; the schema is applied
/// idempotently on construction.
pub struct Tasks {
    pub conn: Connection,
}

impl Tasks {
    pub fn new() -> Result<Tasks> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_TASKS, [])?;

        Ok(Tasks { conn: db.conn })
    }

    /// Inserts a new pending task. The caller validates the name first.
    pub fn insert(&mut self, task: &Task) -> Result<()> {
        self.conn.execute(INSERT_TASK, params![task.name])?;

        Ok(())
    }

    /// Fetches tasks matching the given filter, in rowid order.
    pub fn fetch(&mut self, filter: TaskFilter) -> Result<Vec<Task>> {
        let (mut stmt, params): (_, Vec<String>) = match filter {
            TaskFilter::All => (self.conn.prepare(SELECT_TASKS)?, vec![]),
            TaskFilter::Pending => (self.conn.prepare(&format!("{} {}", SELECT_TASKS, WHERE_PENDING))?, vec![]),
            TaskFilter::CompletedOn(date) => (self.conn.prepare(&format!("{} {}", SELECT_TASKS, WHERE_COMPLETED_AT))?, vec![date]),
            TaskFilter::NameLike(text) => (self.conn.prepare(&format!("{} {}", SELECT_TASKS, WHERE_NAME_LIKE))?, vec![text]),
        };

        let task_iter = stmt.query_map(params_from_iter(params.iter()), |row| {
            Ok(Task {
                id: row.get(0)?,
                name: row.get(1)?,
                completed: row.get(2)?,
                completed_at: row.get(3)?,
            })
        })?;
        let mut tasks = Vec::new();
        for task_result in task_iter {
            tasks.push(task_result?);
        }

        Ok(tasks)
    }

    /// Updates only the name of the task with the given id.
    ///
    /// Returns the number of affected rows; an unknown id affects zero rows
    /// and is not an error.
    pub fn rename(&mut self, id: i64, name: &str) -> Result<usize> {
        let affected = self.conn.execute(RENAME_TASK, params![name, id])?;

        Ok(affected)
    }

    /// Replaces the completion state of the entire task set atomically.
    ///
    /// Every task is reset to pending, then each id in `ids` is marked
    /// completed on `date`. Runs inside a single transaction: if any step
    /// fails the transaction rolls back on drop and the prior state is
    /// preserved.
    pub fn set_completion_state(&mut self, ids: &[i64], date: &str) -> Result<()> {
        let tx = self.conn.transaction()?;
        tx.execute(RESET_COMPLETION, [])?;
        for id in ids {
            tx.execute(MARK_COMPLETED, params![date, id])?;
        }
        tx.commit()?;

        Ok(())
    }

    /// Hard-deletes the task with the given id.
    ///
    /// Returns the number of affected rows; an unknown id is a no-op.
    pub fn delete(&mut self, id: i64) -> Result<usize> {
        let affected = self.conn.execute(DELETE_TASK, params![id])?;

        Ok(affected)
    }
}
