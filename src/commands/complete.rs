//! Complete command - Mark a task as complete (or back to incomplete)

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::info;

use super::session::{Outcome, Session};
use super::utils::{self, Style};
use crate::error::TaskError;

/// Execute the complete command
///
/// `value` is the completion flag to set: `true` for `complete`, `false`
/// for `reopen`. The change is confirmed with y/n before it is saved.
pub fn execute<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    id_arg: Option<&str>,
    value: bool,
) -> Result<Outcome> {
    let state = if value { "complete" } else { "incomplete" };

    let question = format!("Enter task ID to mark as {}:\n> ", state);
    let id = utils::resolve_id(session, id_arg, &question)?;

    let (details, unchanged) = match session.list.get(id) {
        Some(task) => (utils::format_task(task), task.is_complete() == value),
        None => return Err(TaskError::NotFound(id).into()),
    };

    writeln!(
        session.out(),
        "{}\n{}",
        utils::paint("Task found:", Style::Success),
        details
    )?;

    if unchanged {
        writeln!(
            session.out(),
            "{}",
            utils::paint(&format!("Task {} is already {}.", id, state), Style::Warning)
        )?;
        return Ok(Outcome::Done);
    }

    let answer = session.ask(&format!("Mark task {} as {}? [y/N]\n> ", id, state))?;
    match answer.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => {
            session.list.set_complete(id, value);
            session.save()?;
            info!(id, complete = value, "Task status changed");
            writeln!(
                session.out(),
                "{}",
                utils::paint(&format!("Task {} marked as {}.", id, state), Style::Success)
            )?;
            Ok(Outcome::Done)
        }
        "" | "n" | "no" => {
            writeln!(session.out(), "Discarding input.")?;
            Ok(Outcome::Discarded)
        }
        other => Err(TaskError::invalid_input(format!(
            "expected 'y' or 'n', got '{}'",
            other
        ))
        .into()),
    }
}
