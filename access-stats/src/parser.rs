use std::sync::LazyLock;

use regex::Regex;

use crate::{models::LogEntry, pattern::COMBINED_LOG_PATTERN};

static COMBINED_LOG: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(COMBINED_LOG_PATTERN).expect("valid log pattern"));

/// Extracts the four tracked fields from one access-log line.
///
/// Returns `None` for empty lines and for anything that does not follow the
/// combined log format. A mismatch is not an error: callers skip the line.
pub fn parse_log_line(line: &str) -> Option<LogEntry> {
    if line.is_empty() {
        return None;
    }
    let caps = COMBINED_LOG.captures(line)?;
    Some(LogEntry {
        ip: caps.get(1)?.as_str().into(),
        path: caps.get(2)?.as_str().into(),
        status_code: caps.get(3)?.as_str().into(),
        user_agent: caps.get(4)?.as_str().into(),
    })
}
