//! Command-line interface for todofile.
//!
//! This module provides the command definitions and the execution layer
//! that turns them into process output.

mod run;


pub use run::{run, CliOutput};

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// File-backed todo list with a compact search query language.
///
/// Todos live in a single JSON file, by default `~/.todofile/todos.json`.
/// Search queries mix free text with filter tokens, for example:
///
///   todofile list milk status:all "due:<tomorrow"
#[derive(Parser, Debug)]
#[command(name = "todofile")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Directory holding the store file (defaults to ~/.todofile)
    #[arg(long, global = true, value_name = "DIR")]
    pub dir: Option<PathBuf>,

    /// Store file name (defaults to todos.json)
    #[arg(long, global = true, value_name = "NAME")]
    pub file: Option<String>,

    /// The command to execute
    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Add a new todo.
    Add {
        /// Title of the todo
        title: String,

        /// Longer description
        #[arg(long, default_value = "")]
        description: String,

        /// Due date: "today", "tomorrow", "2024-06-01", or RFC 3339
        #[arg(long)]
        due: Option<String>,
    },

    /// List todos matching a query.
    ///
    /// With no query, incomplete todos are shown. Query words may be free
    /// text (matched against titles) or filter tokens:
    ///
    ///   status:done   only completed todos
    ///   status:all    completed and incomplete todos
    ///   due:>DATE     due strictly after DATE
    ///   due:<DATE     due strictly before DATE
    List {
        /// Query words and filter tokens
        query: Vec<String>,
    },

    /// Show a single todo by id.
    Show {
        /// Todo id
        id: String,
    },

    /// Edit fields of an existing todo.
    Edit {
        /// Todo id
        id: String,

        /// New title
        #[arg(long)]
        title: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New due date
        #[arg(long, conflicts_with = "clear_due")]
        due: Option<String>,

        /// Remove the due date
        #[arg(long)]
        clear_due: bool,

        /// Set the completion state directly
        #[arg(long)]
        completed: Option<bool>,
    },

    /// Flip a todo between complete and incomplete.
    Toggle {
        /// Todo id
        id: String,
    },

    /// Print the resolved store file path.
    Path,

    /// Show version information.
    Version,
}
