//! Per-invocation state shared by the commands

use anyhow::Result;
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

use crate::error::TaskError;
use crate::tasks::TaskList;

/// How a command ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The command ran to completion
    Done,
    /// The user declined; nothing was changed
    Discarded,
    /// The user asked to quit; nothing was saved
    Quit,
}

/// The loaded task list, where it lives, and the terminal it talks to
pub struct Session<R, W> {
    pub list: TaskList,
    path: PathBuf,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(list: TaskList, path: PathBuf, input: R, output: W) -> Self {
        Self {
            list,
            path,
            input,
            output,
        }
    }

    /// Load the list stored at `path`
    pub fn open(path: PathBuf, input: R, output: W) -> Result<Self, TaskError> {
        let list = TaskList::load(&path)?;
        Ok(Self::new(list, path, input, output))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.output
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Persist the list to its file
    pub fn save(&self) -> Result<(), TaskError> {
        self.list.save(&self.path)
    }

    /// Print `question` and read one line. `None` at end of input.
    pub fn prompt(&mut self, question: &str) -> Result<Option<String>> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            writeln!(self.output)?;
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    /// Like [`prompt`](Self::prompt), but running out of input is an error
    pub fn ask(&mut self, question: &str) -> Result<String> {
        match self.prompt(question)? {
            Some(answer) => Ok(answer),
            None => Err(TaskError::invalid_input("unexpected end of input").into()),
        }
    }
}
