//! Database layer for the quicktd application.
//!
//! A small persistence layer built on SQLite. The schema is a single `tasks`
//! relation, created idempotently on startup; no migration framework beyond
//! `CREATE TABLE IF NOT EXISTS`.

/// Core database connection and initialization module.
pub mod db;

/// Task repository: CRUD operations and the bulk completion-state replace.
pub mod tasks;
