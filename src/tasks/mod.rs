//! Task list domain: the task entity, the list container, and its JSON store

pub mod list;
pub mod store;
pub mod task;

pub use list::TaskList;
pub use task::Task;
