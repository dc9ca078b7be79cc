//! Delete command - Remove a task by ID

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::info;

use super::session::{Outcome, Session};
use super::utils::{self, Style};
use crate::error::TaskError;

/// Execute the delete command
pub fn execute<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    id_arg: Option<&str>,
) -> Result<Outcome> {
    if id_arg.is_none() {
        writeln!(
            session.out(),
            "{}",
            utils::paint("--- Remove a task ---", Style::Heading)
        )?;
    }
    let id = utils::resolve_id(session, id_arg, "Enter task ID:\n> ")?;

    if !session.list.delete(id) {
        return Err(TaskError::NotFound(id).into());
    }
    session.save()?;
    info!(id, remaining = session.list.len(), "Task deleted");

    writeln!(
        session.out(),
        "{} ID {}",
        utils::paint("Task deleted:", Style::Success),
        id
    )?;
    Ok(Outcome::Done)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::TaskList;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn seeded(tmp: &TempDir, input: &str) -> Session<Cursor<Vec<u8>>, Vec<u8>> {
        let path = tmp.path().join("tasklist.json");
        let mut list = TaskList::new();
        list.add("Buy milk", "2%");
        list.add("Call Bob", "re: project");
        list.save(&path).unwrap();
        Session::open(path, Cursor::new(input.as_bytes().to_vec()), Vec::new()).unwrap()
    }

    #[test]
    fn test_delete_by_argument() {
        let tmp = TempDir::new().unwrap();
        let mut session = seeded(&tmp, "");

        assert_eq!(execute(&mut session, Some("0")).unwrap(), Outcome::Done);

        let stored = TaskList::load(session.path()).unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored.list_all()[0].id(), 1);
        assert_eq!(stored.next_id(), 2);
    }

    #[test]
    fn test_delete_by_prompt() {
        let tmp = TempDir::new().unwrap();
        let mut session = seeded(&tmp, "1\n");

        assert_eq!(execute(&mut session, None).unwrap(), Outcome::Done);
        assert!(session.list.get(1).is_none());

        let out = String::from_utf8(session.into_output()).unwrap();
        assert!(out.contains("Enter task ID"));
        assert!(out.contains("Task deleted:"));
    }

    #[test]
    fn test_delete_unknown_id_is_not_found() {
        let tmp = TempDir::new().unwrap();
        let mut session = seeded(&tmp, "");

        let err = execute(&mut session, Some("7")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TaskError>(),
            Some(TaskError::NotFound(7))
        ));
        assert_eq!(TaskList::load(session.path()).unwrap().len(), 2);
    }

    #[test]
    fn test_delete_bad_id_is_invalid_input() {
        let tmp = TempDir::new().unwrap();
        let mut session = seeded(&tmp, "");

        let err = execute(&mut session, Some("first")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<TaskError>(),
            Some(TaskError::InvalidInput(_))
        ));
        assert_eq!(session.list.len(), 2);
    }
}
