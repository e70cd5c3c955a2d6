//! Command execution for the CLI.
//!
//! This module handles running CLI commands and producing output.

use crate::change_log;
use crate::cli::{Cli, Command};
use crate::config::Config;
use crate::paths;
use crate::query;
use crate::service::{TodoService, TodoUpdate};
use crate::store::FileStore;
use crate::todo::Todo;
use serde::Serialize;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

/// Output from running the CLI, with separate stdout and stderr messages.
#[derive(Debug)]
pub struct CliOutput {
    /// Exit code for the process.
    pub exit_code: ExitCode,
    /// Messages to print to stdout.
    pub stdout: Vec<String>,
    /// Messages to print to stderr.
    pub stderr: Vec<String>,
}

/// Run a CLI command.
pub fn run(cli: Cli) -> CliOutput {
    let Cli { dir, file, command } = cli;
    let dir = dir.as_deref();
    let file = file.as_deref();

    match command {
        Command::Add { title, description, due } => {
            run_add(dir, file, &title, &description, due.as_deref())
        }
        Command::List { query } => run_list(dir, file, &query),
        Command::Show { id } => run_show(dir, file, &id),
        Command::Edit { id, title, description, due, clear_due, completed } => {
            match edit_update(title, description, due.as_deref(), clear_due, completed) {
                Ok(update) => run_edit(dir, file, &id, update),
                Err(message) => error_output(message),
            }
        }
        Command::Toggle { id } => run_toggle(dir, file, &id),
        Command::Path => run_path(dir, file),
        Command::Version => run_version(),
    }
}

// === Commands ===

fn run_add(
    dir: Option<&Path>,
    file: Option<&str>,
    title: &str,
    description: &str,
    due: Option<&str>,
) -> CliOutput {
    let due_date = match due {
        Some(raw) => match query::guess_date(raw) {
            Some(date) => Some(date),
            None => return error_output(format!("Unrecognized due date: {raw}")),
        },
        None => None,
    };

    let (mut service, config) = match open_service(dir, file) {
        Ok(v) => v,
        Err(e) => return error_output(e),
    };

    match service.create(title, description, due_date) {
        Ok(todo) => {
            change_log::record_change(
                &config,
                service.store().directory(),
                "append",
                &todo.id,
                service.todos().len(),
            );
            json_output(&TodoOutput::from_todo(&todo))
        }
        Err(e) => error_output(e.to_string()),
    }
}

fn run_list(dir: Option<&Path>, file: Option<&str>, query_words: &[String]) -> CliOutput {
    let (service, _config) = match open_service(dir, file) {
        Ok(v) => v,
        Err(e) => return error_output(e),
    };

    let raw_query = query_words.join(" ");
    let matched = service.search(&raw_query);

    let output = ListOutput {
        total: service.todos().len(),
        matched: matched.len(),
        todos: matched.into_iter().map(TodoOutput::from_todo).collect(),
    };
    json_output(&output)
}

fn run_show(dir: Option<&Path>, file: Option<&str>, id: &str) -> CliOutput {
    let (service, _config) = match open_service(dir, file) {
        Ok(v) => v,
        Err(e) => return error_output(e),
    };

    match service.todos().iter().find(|todo| todo.id == id) {
        Some(todo) => json_output(&TodoOutput::from_todo(todo)),
        None => error_output(format!("Todo not found: {id}")),
    }
}

/// Build a partial update from edit flags, parsing the due date.
fn edit_update(
    title: Option<String>,
    description: Option<String>,
    due: Option<&str>,
    clear_due: bool,
    completed: Option<bool>,
) -> Result<TodoUpdate, String> {
    let due_date = if clear_due {
        Some(None)
    } else {
        match due {
            Some(raw) => match query::guess_date(raw) {
                Some(date) => Some(Some(date)),
                None => return Err(format!("Unrecognized due date: {raw}")),
            },
            None => None,
        }
    };

    Ok(TodoUpdate { title, description, completed, due_date })
}

fn run_edit(dir: Option<&Path>, file: Option<&str>, id: &str, update: TodoUpdate) -> CliOutput {
    if update.is_empty() {
        return error_output(
            "Nothing to change: pass at least one of --title, --description, --due, \
             --clear-due, or --completed"
                .to_string(),
        );
    }

    let (mut service, config) = match open_service(dir, file) {
        Ok(v) => v,
        Err(e) => return error_output(e),
    };

    match service.edit(id, update) {
        Ok(Some(todo)) => {
            change_log::record_change(
                &config,
                service.store().directory(),
                "update",
                &todo.id,
                service.todos().len(),
            );
            json_output(&TodoOutput::from_todo(&todo))
        }
        Ok(None) => error_output(format!("Todo not found: {id}")),
        Err(e) => error_output(e.to_string()),
    }
}

fn run_toggle(dir: Option<&Path>, file: Option<&str>, id: &str) -> CliOutput {
    let (mut service, config) = match open_service(dir, file) {
        Ok(v) => v,
        Err(e) => return error_output(e),
    };

    match service.toggle(id) {
        Ok(Some(todo)) => {
            change_log::record_change(
                &config,
                service.store().directory(),
                "update",
                &todo.id,
                service.todos().len(),
            );
            json_output(&TodoOutput::from_todo(&todo))
        }
        Ok(None) => error_output(format!("Todo not found: {id}")),
        Err(e) => error_output(e.to_string()),
    }
}

fn run_path(dir: Option<&Path>, file: Option<&str>) -> CliOutput {
    match open_store(dir, file) {
        Ok((store, _config)) => success_output(store.file_path().display().to_string()),
        Err(e) => error_output(e),
    }
}

fn run_version() -> CliOutput {
    CliOutput {
        exit_code: ExitCode::SUCCESS,
        stdout: vec![],
        stderr: vec![format!("todofile v{}", crate::VERSION)],
    }
}

// === Helper Functions ===

/// Resolve the store location from flags, config, and built-in defaults.
///
/// Flags take precedence over config values, which take precedence over the
/// defaults. The config file is read from `--dir` when given, otherwise from
/// the default data directory.
fn open_store(
    dir: Option<&Path>,
    file: Option<&str>,
) -> Result<(FileStore<Todo>, Config), String> {
    let config = match dir.map(Path::to_path_buf).or_else(paths::data_dir) {
        Some(base) => match Config::load_from(&base) {
            Ok(config) => config.unwrap_or_default(),
            Err(e) => return Err(format!("Could not read config: {e}")),
        },
        None => Config::default(),
    };

    let directory = dir
        .map(Path::to_path_buf)
        .or_else(|| config.data_directory.as_ref().map(PathBuf::from))
        .or_else(paths::data_dir)
        .ok_or_else(|| {
            "Could not determine a data directory (no home directory). Pass --dir.".to_string()
        })?;

    let file_name = file
        .map(str::to_string)
        .or_else(|| config.file_name.clone())
        .unwrap_or_else(|| paths::STORE_FILE_NAME.to_string());

    Ok((FileStore::new(directory, file_name), config))
}

fn open_service(
    dir: Option<&Path>,
    file: Option<&str>,
) -> Result<(TodoService, Config), String> {
    let (store, config) = open_store(dir, file)?;
    let service = TodoService::new(store).map_err(|e| e.to_string())?;
    Ok((service, config))
}

fn json_output<T: Serialize>(value: &T) -> CliOutput {
    match serde_json::to_string_pretty(value) {
        Ok(json) => CliOutput { exit_code: ExitCode::SUCCESS, stdout: vec![json], stderr: vec![] },
        Err(e) => error_output(e.to_string()),
    }
}

fn success_output(message: String) -> CliOutput {
    CliOutput { exit_code: ExitCode::SUCCESS, stdout: vec![message], stderr: vec![] }
}

fn error_output(message: String) -> CliOutput {
    CliOutput { exit_code: ExitCode::from(1), stdout: vec![], stderr: vec![message] }
}

// === Output Types ===

/// Single todo for display.
#[derive(Debug, Serialize)]
struct TodoOutput {
    id: String,
    title: String,
    description: String,
    completed: bool,
    due_date: Option<String>,
}

impl TodoOutput {
    fn from_todo(todo: &Todo) -> Self {
        Self {
            id: todo.id.clone(),
            title: todo.title.clone(),
            description: todo.description.clone(),
            completed: todo.is_completed,
            due_date: todo.due_date.map(|date| date.to_rfc3339()),
        }
    }
}

/// Output of the `list` command.
#[derive(Debug, Serialize)]
struct ListOutput {
    total: usize,
    matched: usize,
    todos: Vec<TodoOutput>,
}
