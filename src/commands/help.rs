//! Help command - Print usage

use anyhow::Result;
use std::io::Write;

use super::session::Outcome;
use super::utils::{self, Style};

pub const USAGE: &str = "\
Usage: task-cli [OPTIONS] [COMMAND] [ARGS]

Run without a command to pick an action from a menu.

Commands:
  help | h                     Show this help message and exit
  add | new | create           Add a new task (interactive)
  delete | del | rm [ID]       Remove a task by ID
  complete | c | finish [ID]   Mark a task as complete
  reopen | uncomplete [ID]     Mark a task as incomplete
  view | ls | list [FILTER]    View tasks (default: incomplete)

'complete' and 'reopen' ask for y/N confirmation before saving. If the task
is already in the requested state they say so and change nothing.

Filters for 'view':
  all | a                              Show all tasks
  complete | done | finished | c       Show completed tasks
  incomplete | unfinished | pending    Show incomplete tasks
Any other filter is rejected with a usage error.

Options:
  --file <PATH>    Use this task list instead of <config dir>/task-cli/tasklist.json
  -v, --verbose    Log what is happening to stderr (repeat for more)
  -V, --version    Print version

Examples:
  task-cli add
  task-cli delete 2
  task-cli complete 1
  task-cli view complete
  task-cli ls all";

/// Execute the help command
pub fn execute<W: Write>(out: &mut W) -> Result<Outcome> {
    writeln!(out, "{}", utils::paint(USAGE, Style::Label))?;
    Ok(Outcome::Done)
}
