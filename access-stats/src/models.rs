use crate::invariants::{ClientAddr, RequestPath, StatusCode, UserAgent};

/// One access-log line that matched the combined log grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub ip: ClientAddr,
    pub path: RequestPath,
    pub status_code: StatusCode,
    pub user_agent: UserAgent,
}

/// A value and its occurrence count, as produced by a top-N query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RankedItem {
    pub value: String,
    pub count: usize,
}

impl RankedItem {
    pub fn new(value: impl Into<String>, count: usize) -> Self {
        Self {
            value: value.into(),
            count,
        }
    }
}
