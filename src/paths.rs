//! Path utilities for determining data storage locations.
//!
//! Todos live in a single JSON file inside the data directory, which is
//! `~/.todofile/` unless overridden by configuration or CLI flags. The
//! config file and the change log live in the same directory.

use std::path::PathBuf;

/// The base directory name for todofile data.
const DATA_DIR_NAME: &str = ".todofile";

/// Default name of the JSON file holding the todo records.
pub const STORE_FILE_NAME: &str = "todos.json";

/// Get the base data directory for todofile.
///
/// Returns `~/.todofile/` or `None` if the home directory cannot be
/// determined.
#[must_use]
pub fn data_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(DATA_DIR_NAME))
}
