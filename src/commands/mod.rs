//! CLI commands

pub mod add;
pub mod complete;
pub mod delete;
pub mod help;
pub mod menu;
pub mod session;
pub mod utils;
pub mod view;

pub use session::{Outcome, Session};
pub use view::ViewFilter;
