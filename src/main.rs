//! task-cli: manage a to-do list from the terminal

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use owo_colors::OwoColorize;
use std::io::{self, StdinLock, Stdout};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::debug;

use task_cli::commands::{self, Outcome, Session, ViewFilter};
use task_cli::{config, logging, TaskError};

#[derive(Parser)]
#[command(name = "task-cli")]
#[command(about = "Manage a to-do list from the terminal", long_about = None)]
#[command(version, disable_help_subcommand = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Task list file to use instead of <config dir>/task-cli/tasklist.json
    #[arg(long, global = true, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Log to stderr (-v for info, -vv for debug)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Show usage and examples
    #[command(visible_alias = "h")]
    Help,

    /// Add a new task (interactive)
    #[command(visible_aliases = ["new", "create"])]
    Add,

    /// Remove a task by ID
    #[command(visible_aliases = ["del", "rm"])]
    Delete {
        /// Task ID (prompts if omitted)
        #[arg(allow_hyphen_values = true)]
        id: Option<String>,
    },

    /// Mark a task as complete
    #[command(visible_aliases = ["c", "finish"])]
    Complete {
        /// Task ID (prompts if omitted)
        #[arg(allow_hyphen_values = true)]
        id: Option<String>,
    },

    /// Mark a task as incomplete again
    #[command(visible_alias = "uncomplete")]
    Reopen {
        /// Task ID (prompts if omitted)
        #[arg(allow_hyphen_values = true)]
        id: Option<String>,
    },

    /// View tasks: all, complete, or incomplete (default: incomplete)
    #[command(visible_aliases = ["ls", "list"])]
    View {
        /// all | complete | incomplete
        filter: Option<ViewFilter>,
    },
}

type TerminalSession = Session<StdinLock<'static>, Stdout>;

fn main() -> ExitCode {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {:#}", "Error:".red(), err);
            exit_code(&err)
        }
    }
}

/// Not-found and invalid input exit with 2, everything else with 1
fn exit_code(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<TaskError>() {
        Some(e) if e.is_user_error() => ExitCode::from(2),
        _ => ExitCode::FAILURE,
    }
}

fn open_session(file: Option<&Path>) -> Result<TerminalSession> {
    let path = config::storage_file(file)?;
    debug!(path = %path.display(), "Using task list");
    let session = Session::open(path, io::stdin().lock(), io::stdout())
        .context("Could not load the task list")?;
    Ok(session)
}

fn run(cli: Cli) -> Result<()> {
    let file = cli.file.as_deref();

    let outcome = match cli.command {
        Some(Commands::Help) => commands::help::execute(&mut io::stdout())?,
        None => commands::menu::execute(&mut open_session(file)?)?,
        Some(Commands::Add) => commands::add::execute(&mut open_session(file)?)?,
        Some(Commands::Delete { id }) => {
            commands::delete::execute(&mut open_session(file)?, id.as_deref())?
        }
        Some(Commands::Complete { id }) => {
            commands::complete::execute(&mut open_session(file)?, id.as_deref(), true)?
        }
        Some(Commands::Reopen { id }) => {
            commands::complete::execute(&mut open_session(file)?, id.as_deref(), false)?
        }
        Some(Commands::View { filter }) => {
            commands::view::execute(&mut open_session(file)?, filter.unwrap_or_default())?
        }
    };

    if outcome == Outcome::Quit {
        debug!("Quit without saving");
    }
    Ok(())
}
