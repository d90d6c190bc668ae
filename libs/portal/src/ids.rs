//! Record id generation

use chrono::Utc;
use rand::{Rng, distributions::Alphanumeric, thread_rng};

/// Generate a collection-record id
///
/// Millisecond timestamp plus a short random alphanumeric suffix, so ids
/// sort roughly by creation time. The format is stable across releases.
pub fn record_id() -> String {
    let suffix: String = thread_rng()
        .sample_iter(&Alphanumeric)
        .take(6)
        .map(char::from)
        .collect();

    format!(
        "{}-{}",
        Utc::now().timestamp_millis(),
        suffix.to_lowercase()
    )
}
