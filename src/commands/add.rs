//! Add command - Create a task from interactive input

use anyhow::Result;
use chrono::Utc;
use std::io::{BufRead, Write};
use tracing::info;

use super::session::{Outcome, Session};
use super::utils::{self, Style};

/// Execute the add command
///
/// Asks for a title and description, shows a preview, and commits only on
/// `y`. `n` (or an empty answer) discards; `q` quits without saving.
pub fn execute<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<Outcome> {
    writeln!(
        session.out(),
        "{}",
        utils::paint("--- Add a task ---", Style::Heading)
    )?;

    let title = loop {
        let title = session.ask("New task name: ")?;
        let title = title.trim();
        if !title.is_empty() {
            break title.to_string();
        }
        writeln!(session.out(), "{}", utils::paint("A task needs a name.", Style::Failure))?;
    };
    let description = session.ask("New task description: ")?.trim().to_string();

    let preview = utils::format_details(
        session.list.next_id(),
        &title,
        &description,
        false,
        Utc::now(),
    );
    writeln!(session.out(), "New task:\n{}", preview)?;

    loop {
        let answer = session.ask("Create this task? [y/N (q to quit)] ")?;
        match answer.trim().to_ascii_lowercase().as_str() {
            "y" | "yes" => {
                let id = session.list.add(title, description).id();
                session.save()?;
                info!(id, "Task added");
                writeln!(
                    session.out(),
                    "{} ID {}",
                    utils::paint("Task added:", Style::Success),
                    id
                )?;
                return Ok(Outcome::Done);
            }
            "" | "n" | "no" => {
                writeln!(session.out(), "OK - Discarding task.")?;
                return Ok(Outcome::Discarded);
            }
            "q" | "quit" => {
                writeln!(session.out(), "Exiting.")?;
                return Ok(Outcome::Quit);
            }
            _ => {
                writeln!(
                    session.out(),
                    "{}",
                    utils::paint("Invalid selection.", Style::Failure)
                )?;
            }
        }
    }
}
