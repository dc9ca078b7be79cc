//! Interactive menu shown when no command is given

use anyhow::Result;
use std::io::{BufRead, Write};

use super::session::{Outcome, Session};
use super::utils::{self, Style};
use super::view::ViewFilter;
use super::{add, complete, delete, view};

const MENU: &str = "
Select an option:
    1. Create a new task
    2. Remove a task
    3. Mark a task as complete
    4. View task list
    5. Save task list to file

    'q' or '0' to quit.

> ";

/// Run one menu selection. End of input quits.
pub fn execute<R: BufRead, W: Write>(session: &mut Session<R, W>) -> Result<Outcome> {
    writeln!(session.out(), "{}", utils::paint("Terminal TODO", Style::Heading))?;

    loop {
        let Some(choice) = session.prompt(MENU)? else {
            return Ok(Outcome::Quit);
        };

        match choice.trim() {
            "q" | "0" => {
                writeln!(session.out(), "Exiting.")?;
                return Ok(Outcome::Quit);
            }
            "1" => return add::execute(session),
            "2" => return delete::execute(session, None),
            "3" => return complete::execute(session, None, true),
            "4" => {
                let answer = session
                    .ask("Show which tasks? [all/complete/incomplete] (default: incomplete)\n> ")?;
                let filter = if answer.trim().is_empty() {
                    ViewFilter::default()
                } else {
                    answer.parse()?
                };
                return view::execute(session, filter);
            }
            "5" => {
                session.save()?;
                let path = session.path().display().to_string();
                writeln!(
                    session.out(),
                    "{} {}",
                    utils::paint("Task list saved to", Style::Success),
                    path
                )?;
                return Ok(Outcome::Done);
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::TaskList;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn open(tmp: &TempDir, input: &str) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
        let path = tmp.path().join("tasklist.json");
        Session::open(path, Cursor::new(input.as_bytes().to_vec()), Vec::new()).unwrap()
    }

    #[test]
    fn test_quit() {
        let tmp = TempDir::new().unwrap();
        for input in ["q\n", "0\n", ""] {
            let mut session = open(&tmp, input);
            assert_eq!(execute(&mut session).unwrap(), Outcome::Quit);
        }
    }

    #[test]
    fn test_create_from_menu() {
        let tmp = TempDir::new().unwrap();
        let mut session = open(&tmp, "1\nBuy milk\n2%\ny\n");

        assert_eq!(execute(&mut session).unwrap(), Outcome::Done);
        assert_eq!(TaskList::load(session.path()).unwrap().len(), 1);
    }

    #[test]
    fn test_invalid_selection_reprompts() {
        let tmp = TempDir::new().unwrap();
        let mut session = open(&tmp, "9\nabc\nq\n");

        assert_eq!(execute(&mut session).unwrap(), Outcome::Quit);
        let out = String::from_utf8(session.into_output()).unwrap();
        assert_eq!(out.matches("Invalid selection.").count(), 2);
    }

    #[test]
    fn test_view_defaults_to_incomplete() {
        let tmp = TempDir::new().unwrap();
        let mut session = open(&tmp, "4\n\n");
        session.list.add("Buy milk", "2%");
        session.list.add("Call Bob", "");
        session.list.set_complete(1, true);

        assert_eq!(execute(&mut session).unwrap(), Outcome::Done);
        let out = String::from_utf8(session.into_output()).unwrap();
        assert!(out.contains("Incomplete tasks"));
        assert!(out.contains("Buy milk"));
        assert!(!out.contains("Call Bob"));
    }

    #[test]
    fn test_save_from_menu() {
        let tmp = TempDir::new().unwrap();
        let mut session = open(&tmp, "5\n");
        session.list.add("Buy milk", "2%");

        assert_eq!(execute(&mut session).unwrap(), Outcome::Done);
        assert_eq!(TaskList::load(session.path()).unwrap().len(), 1);
    }
}
