//! Search query parsing.
//!
//! A query is a whitespace-separated token list. `status:` and `due:`
//! tokens set the completion filter and due-date bounds; any other token is
//! free text matched against titles. Tokens are interpreted left to right
//! and later tokens of the same kind overwrite earlier ones. An empty query
//! shows only incomplete todos.

use chrono::{DateTime, Duration, NaiveDate, NaiveDateTime, Utc};

/// Completion states a filter can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Completion {
    /// Only completed todos (`status:done`).
    Completed,
    /// Only incomplete todos (the default view).
    #[default]
    Incomplete,
    /// All todos regardless of completion (`status:all`).
    Any,
}

/// The structured result of parsing one raw query string.
///
/// Rebuilt from scratch on every query change; never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchFilter {
    /// Free-text token, matched case-sensitively against titles.
    pub text: Option<String>,
    /// Completion requirement.
    pub completion: Completion,
    /// Exclusive lower bound on due dates.
    pub due_after: Option<DateTime<Utc>>,
    /// Exclusive upper bound on due dates.
    pub due_before: Option<DateTime<Utc>>,
}

/// Parse a raw query string against the current clock.
#[must_use]
pub fn parse_query(raw: &str) -> SearchFilter {
    parse_query_at(raw, Utc::now())
}

/// Parse a raw query string, resolving date keywords against `now`.
///
/// Parsing never fails: unrecognized directives become the text token and
/// unparsable dates clear the corresponding bound.
#[must_use]
pub fn parse_query_at(raw: &str, now: DateTime<Utc>) -> SearchFilter {
    let mut filter = SearchFilter::default();

    for token in raw.split_whitespace() {
        if token == "status:done" {
            filter.completion = Completion::Completed;
        } else if token == "status:all" {
            filter.completion = Completion::Any;
        } else if let Some(rest) = token.strip_prefix("due:>") {
            filter.due_after = guess_date_at(rest, now);
        } else if let Some(rest) = token.strip_prefix("due:<") {
            filter.due_before = guess_date_at(rest, now);
        } else if let Some(rest) = token.strip_prefix("due:") {
            // A bare due: pins both bounds to the same instant
            let date = guess_date_at(rest, now);
            filter.due_after = date;
            filter.due_before = date;
        } else {
            filter.text = Some(token.to_string());
        }
    }

    filter
}

/// Guess a date from a user-supplied string against the current clock.
#[must_use]
pub fn guess_date(input: &str) -> Option<DateTime<Utc>> {
    guess_date_at(input, Utc::now())
}

/// Guess a date from a user-supplied string, resolving keywords against
/// `now`.
///
/// Recognizes `today` and `now` (the current instant), `tomorrow` (one day
/// later), RFC 3339 timestamps, and the calendar forms `2024-05-01`,
/// `2024/05/01`, `2024-05-01 09:30`, and `2024-05-01T09:30:00`. Date-only
/// forms resolve to midnight UTC. Anything unrecognized yields `None`.
#[must_use]
pub fn guess_date_at(input: &str, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    match input {
        "today" | "now" => return Some(now),
        "tomorrow" => return Some(now + Duration::days(1)),
        _ => {}
    }

    if let Ok(parsed) = DateTime::parse_from_rfc3339(input) {
        return Some(parsed.with_timezone(&Utc));
    }

    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(parsed) = NaiveDateTime::parse_from_str(input, format) {
            return Some(parsed.and_utc());
        }
    }

    for format in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(parsed) = NaiveDate::parse_from_str(input, format) {
            return parsed.and_hms_opt(0, 0, 0).map(|dt| dt.and_utc());
        }
    }

    None
}
