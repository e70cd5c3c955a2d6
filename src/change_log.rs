//! Change logging for store mutations.
//!
//! When `log_changes` is enabled in the config, every successful mutation is
//! appended as a JSONL line to `changes.jsonl` next to the store file. This
//! gives a replayable record of what changed and when.
//!
//! Errors are silently ignored; a failed log write never fails the mutation.

use crate::config::Config;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Log file name within the data directory.
const CHANGES_FILE: &str = "changes.jsonl";

/// Log a mutation if change logging is enabled.
///
/// `operation` names the store operation, `id` is the record it touched,
/// and `records` is the list length after the write.
pub fn record_change(config: &Config, data_dir: &Path, operation: &str, id: &str, records: usize) {
    if !config.log_changes {
        return;
    }

    write_change(data_dir, operation, id, records);
}

/// Write the change entry to the log file.
fn write_change(data_dir: &Path, operation: &str, id: &str, records: usize) {
    if std::fs::create_dir_all(data_dir).is_err() {
        return;
    }

    let entry = serde_json::json!({
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "operation": operation,
        "id": id,
        "records": records,
    });

    let log_path = data_dir.join(CHANGES_FILE);
    let Ok(mut file) = OpenOptions::new().create(true).append(true).open(&log_path) else {
        return;
    };

    // Write the entry as a single line
    let _ = writeln!(file, "{entry}");
}
