//! Todo id generation.
//!
//! Ids are derived from the title: ASCII alphanumerics are lowercased,
//! everything else becomes a hyphen, runs of hyphens collapse, the ends are
//! trimmed, and the slug is capped at 50 characters before a 4-character
//! random hex suffix is appended. Titles with no usable characters fall back
//! to a `todo-` prefix.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};

/// Maximum length of the slug portion of an id.
const MAX_SLUG_LEN: usize = 50;

/// Global counter for deterministic id generation in tests.
static TEST_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Whether to use deterministic ids (for testing).
static USE_DETERMINISTIC_IDS: AtomicBool = AtomicBool::new(false);

/// Enable deterministic id generation for testing.
///
/// When enabled, id suffixes count up from zero instead of being random.
pub fn enable_deterministic_ids() {
    USE_DETERMINISTIC_IDS.store(true, Ordering::SeqCst);
    TEST_COUNTER.store(0, Ordering::SeqCst);
}

/// Disable deterministic id generation.
pub fn disable_deterministic_ids() {
    USE_DETERMINISTIC_IDS.store(false, Ordering::SeqCst);
}

/// Convert a title to a lowercase hyphenated slug of at most 50 characters.
#[must_use]
pub fn slugify(title: &str) -> String {
    let mut slug = String::with_capacity(title.len());
    let mut last_was_hyphen = true; // Start true to avoid a leading hyphen

    for c in title.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_was_hyphen = false;
        } else if !last_was_hyphen {
            slug.push('-');
            last_was_hyphen = true;
        }
    }

    // Slug is pure ASCII, so byte truncation is char-safe
    if slug.len() > MAX_SLUG_LEN {
        slug.truncate(MAX_SLUG_LEN);
    }

    // Truncation or a trailing separator can leave hyphens at the end
    while slug.ends_with('-') {
        slug.pop();
    }

    slug
}

/// Generate a fresh todo id from a title.
///
/// The id is the slugified title plus a 4-character hex suffix, or
/// `todo-<suffix>` when the title slugifies to nothing.
#[must_use]
pub fn generate_todo_id(title: &str) -> String {
    let slug = slugify(title);
    let suffix = random_suffix();

    if slug.is_empty() {
        format!("todo-{suffix}")
    } else {
        format!("{slug}-{suffix}")
    }
}

/// Generate a random 4-character hex suffix.
#[allow(clippy::cast_possible_truncation)]
fn random_suffix() -> String {
    if USE_DETERMINISTIC_IDS.load(Ordering::SeqCst) {
        let count = TEST_COUNTER.fetch_add(1, Ordering::SeqCst);
        format!("{count:04x}")
    } else {
        use std::collections::hash_map::RandomState;
        use std::hash::{BuildHasher, Hasher};

        let state = RandomState::new();
        let mut hasher = state.build_hasher();
        hasher.write_u64(
            std::time::SystemTime::now()
                .duration_since(std::time::UNIX_EPOCH)
                .map_or(0, |d| d.as_nanos() as u64),
        );
        let hash = hasher.finish();
        format!("{:04x}", hash & 0xFFFF)
    }
}
