//! Shared utilities for commands

use chrono::{DateTime, Local, Utc};
use comfy_table::{presets::UTF8_FULL_CONDENSED, Cell, Color, ContentArrangement, Table};
use owo_colors::OwoColorize;
use std::io::{BufRead, Write};

use super::session::Session;
use crate::error::TaskError;
use crate::tasks::Task;

/// Text styles used in command output
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Heading,
    Label,
    Note,
    Success,
    Warning,
    Failure,
    /// Green when complete, red otherwise
    Status(bool),
}

/// Render `text` in `style`
pub fn paint(text: &str, style: Style) -> String {
    match style {
        Style::Heading => text.green().bold().to_string(),
        Style::Label => text.cyan().to_string(),
        Style::Note => text.yellow().to_string(),
        Style::Success | Style::Status(true) => text.green().to_string(),
        Style::Warning => text.yellow().bold().to_string(),
        Style::Failure | Style::Status(false) => text.red().to_string(),
    }
}

/// Short word for a completion flag
pub fn status_word(complete: bool) -> &'static str {
    if complete {
        "done"
    } else {
        "pending"
    }
}

/// Creation date in local time, e.g. "Mar 09 2024"
pub fn format_date(date: DateTime<Utc>) -> String {
    date.with_timezone(&Local).format("%b %d %Y").to_string()
}

/// Multi-line description of a single task
pub fn format_details(
    id: u64,
    title: &str,
    description: &str,
    complete: bool,
    added: DateTime<Utc>,
) -> String {
    let description = if description.is_empty() {
        "(none)"
    } else {
        description
    };

    [
        format!("  Task {} (added {})", id, format_date(added)),
        format!("    {} {}", paint("Title:", Style::Label), title),
        format!("    {} {}", paint("Description:", Style::Note), description),
        format!(
            "    Status: {}",
            paint(status_word(complete), Style::Status(complete))
        ),
    ]
    .join("\n")
}

pub fn format_task(task: &Task) -> String {
    format_details(
        task.id(),
        task.title(),
        task.description(),
        task.is_complete(),
        task.date_added(),
    )
}

/// Table of tasks for the view command
pub fn task_table(tasks: &[&Task]) -> String {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("ID"),
        Cell::new("Status"),
        Cell::new("Title"),
        Cell::new("Description"),
        Cell::new("Added"),
    ]);

    for task in tasks {
        let status_color = if task.is_complete() {
            Color::Green
        } else {
            Color::Red
        };
        table.add_row(vec![
            Cell::new(task.id()),
            Cell::new(status_word(task.is_complete())).fg(status_color),
            Cell::new(task.title()),
            Cell::new(task.description()),
            Cell::new(format_date(task.date_added())),
        ]);
    }

    table.to_string()
}

/// Parse a task ID typed by the user
pub fn parse_id(raw: &str) -> Result<u64, TaskError> {
    let raw = raw.trim();
    raw.parse::<u64>()
        .map_err(|_| TaskError::invalid_input(format!("'{}' is not a valid task ID", raw)))
}

/// Take the ID from the command line, or ask for it
pub fn resolve_id<R: BufRead, W: Write>(
    session: &mut Session<R, W>,
    arg: Option<&str>,
    question: &str,
) -> anyhow::Result<u64> {
    let raw = match arg {
        Some(raw) => raw.to_string(),
        None => session.ask(question)?,
    };
    Ok(parse_id(&raw)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::TaskList;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("3").unwrap(), 3);
        assert_eq!(parse_id("  12 ").unwrap(), 12);
        assert!(matches!(parse_id("abc"), Err(TaskError::InvalidInput(_))));
        assert!(matches!(parse_id("-1"), Err(TaskError::InvalidInput(_))));
        assert!(matches!(parse_id(""), Err(TaskError::InvalidInput(_))));
    }

    #[test]
    fn test_paint_keeps_text() {
        for style in [
            Style::Heading,
            Style::Label,
            Style::Note,
            Style::Success,
            Style::Warning,
            Style::Failure,
            Style::Status(true),
            Style::Status(false),
        ] {
            assert!(paint("hello", style).contains("hello"));
        }
    }

    #[test]
    fn test_status_colors_differ() {
        assert_ne!(paint("x", Style::Status(true)), paint("x", Style::Status(false)));
    }

    #[test]
    fn test_format_task() {
        let mut list = TaskList::new();
        list.add("Buy milk", "");
        let text = format_task(&list.list_all()[0]);
        assert!(text.contains("Task 0"));
        assert!(text.contains("Buy milk"));
        assert!(text.contains("(none)"));
        assert!(text.contains("pending"));
    }

    #[test]
    fn test_task_table_lists_rows() {
        let mut list = TaskList::new();
        list.add("Buy milk", "2%");
        list.add("Call Bob", "re: project");
        list.set_complete(1, true);

        let tasks: Vec<&Task> = list.list_all().iter().collect();
        let table = task_table(&tasks);
        assert!(table.contains("Buy milk"));
        assert!(table.contains("re: project"));
        assert!(table.contains("done"));
        assert!(table.contains("pending"));
    }
}
