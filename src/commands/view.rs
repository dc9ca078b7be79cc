//! View command - Show tasks, optionally filtered by status

use anyhow::Result;
use std::fmt;
use std::io::{BufRead, Write};
use std::str::FromStr;

use super::session::{Outcome, Session};
use super::utils::{self, Style};
use crate::error::TaskError;
use crate::tasks::{Task, TaskList};

/// Which tasks to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewFilter {
    All,
    Complete,
    #[default]
    Incomplete,
}

impl FromStr for ViewFilter {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "all" | "a" => Ok(Self::All),
            "complete" | "completed" | "done" | "finished" | "c" => Ok(Self::Complete),
            "incomplete" | "unfinished" | "pending" | "ic" => Ok(Self::Incomplete),
            other => Err(TaskError::invalid_input(format!(
                "unknown filter '{}' (use all, complete, or incomplete)",
                other
            ))),
        }
    }
}

impl fmt::Display for ViewFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => write!(f, "all"),
            Self::Complete => write!(f, "complete"),
            Self::Incomplete => write!(f, "incomplete"),
        }
    }
}

/// Render the tasks selected by `filter`
pub fn render(list: &TaskList, filter: ViewFilter) -> String {
    let (heading, tasks, empty): (&str, Vec<&Task>, &str) = match filter {
        ViewFilter::All => (
            "--- All tasks ---",
            list.list_all().iter().collect(),
            "You have no tasks yet. Add one with `task-cli add`.",
        ),
        ViewFilter::Complete => (
            "--- Completed tasks ---",
            list.list_by_status(true),
            "You have no completed tasks!",
        ),
        ViewFilter::Incomplete => (
            "--- Incomplete tasks ---",
            list.list_by_status(false),
            "Nothing left to do!",
        ),
    };

    let body = if tasks.is_empty() {
        empty.to_string()
    } else {
        utils::task_table(&tasks)
    };

    format!("{}\n{}", utils::paint(heading, Style::Heading), body)
}

/// Execute the view command
pub fn execute<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    filter: ViewFilter,
) -> Result<Outcome> {
    let output = render(&session.list, filter);
    writeln!(session.out(), "{}", output)?;
    Ok(Outcome::Done)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use std::path::PathBuf;

    fn sample() -> TaskList {
        let mut list = TaskList::new();
        list.add("Buy milk", "2%");
        list.add("Call Bob", "re: project");
        list.set_complete(1, true);
        list
    }

    #[test]
    fn test_filter_parse_aliases() {
        for s in ["all", "a", "ALL"] {
            assert_eq!(s.parse::<ViewFilter>().unwrap(), ViewFilter::All);
        }
        for s in ["complete", "done", "finished", "c"] {
            assert_eq!(s.parse::<ViewFilter>().unwrap(), ViewFilter::Complete);
        }
        for s in ["incomplete", "unfinished", "pending", "ic"] {
            assert_eq!(s.parse::<ViewFilter>().unwrap(), ViewFilter::Incomplete);
        }
        assert!("everything".parse::<ViewFilter>().is_err());
    }

    #[test]
    fn test_default_is_incomplete() {
        assert_eq!(ViewFilter::default(), ViewFilter::Incomplete);
    }

    #[test]
    fn test_render_filters() {
        let list = sample();

        let pending = render(&list, ViewFilter::Incomplete);
        assert!(pending.contains("Buy milk"));
        assert!(!pending.contains("Call Bob"));

        let done = render(&list, ViewFilter::Complete);
        assert!(done.contains("Call Bob"));
        assert!(!done.contains("Buy milk"));

        let all = render(&list, ViewFilter::All);
        assert!(all.contains("Buy milk"));
        assert!(all.contains("Call Bob"));
    }

    #[test]
    fn test_render_empty() {
        let list = TaskList::new();
        assert!(render(&list, ViewFilter::Complete).contains("You have no completed tasks!"));
        assert!(render(&list, ViewFilter::Incomplete).contains("Nothing left to do!"));
    }

    #[test]
    fn test_execute_writes_output() {
        let mut session = Session::new(
            sample(),
            PathBuf::from("unused.json"),
            Cursor::new(Vec::new()),
            Vec::new(),
        );
        let outcome = execute(&mut session, ViewFilter::All).unwrap();
        assert_eq!(outcome, Outcome::Done);
        let out = String::from_utf8(session.into_output()).unwrap();
        assert!(out.contains("All tasks"));
        assert!(out.contains("Call Bob"));
    }
}
