//! Core library modules for the quicktd application.
//!
//! ## Features
//!
//! - **Core Infrastructure**: Data storage resolution, messaging
//! - **Task Model**: The task entity and repository filters
//! - **User Interface**: Prompt wrappers and console rendering

pub mod data_storage;
pub mod messages;
pub mod prompt;
pub mod task;
pub mod view;
