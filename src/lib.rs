//! # `todofile`
//!
//! A file-backed todo list with a compact search query language.
//!
//! Records live as a JSON array in a single file that is created on first
//! use. [`store::FileStore`] handles persistence for any record type,
//! [`todo::Todo`] is the record this crate ships, and [`query`] and
//! [`filter`] turn free-form query strings into record predicates.

pub mod change_log;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod error;
pub mod filter;
pub mod id;
pub mod paths;
pub mod query;
pub mod service;
pub mod store;
pub mod todo;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_exists() {
        assert!(!VERSION.is_empty());
    }
}
