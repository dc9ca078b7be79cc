//! task-cli library
//!
//! A to-do list kept as JSON in the user's config directory: the task list
//! and its store, plus the interactive commands that drive it.

pub mod commands;
pub mod config;
pub mod error;
pub mod logging;
pub mod tasks;

pub use error::TaskError;
pub use tasks::{Task, TaskList};
