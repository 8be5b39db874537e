use std::{collections::HashMap, fmt::Display, hash::Hash};

use crate::{
    invariants::{ClientAddr, RequestPath, StatusCode, UserAgent},
    models::{LogEntry, RankedItem},
    parser::parse_log_line,
};

/// Occurrence counts for one tracked field. Counts only ever go up.
#[derive(Debug, Clone)]
pub struct FrequencyTable<K> {
    counts: HashMap<K, usize>,
}

impl<K> Default for FrequencyTable<K> {
    fn default() -> Self {
        Self {
            counts: HashMap::new(),
        }
    }
}

impl<K: Eq + Hash> FrequencyTable<K> {
    pub fn record(&mut self, key: K) {
        *self.counts.entry(key).or_default() += 1;
    }

    #[cfg(test)]
    pub fn get<Q>(&self, key: &Q) -> usize
    where
        K: std::borrow::Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.counts.get(key).copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, usize)> {
        self.counts.iter().map(|(k, v)| (k, *v))
    }
}

/// Ranks a table by count, highest first, and keeps at most `n` entries.
///
/// Equal counts are ordered by ascending value so that repeated runs over
/// the same log print the same report.
pub fn top_n<K: Eq + Hash + Display>(table: &FrequencyTable<K>, n: usize) -> Vec<RankedItem> {
    let mut entries: Vec<_> = table
        .iter()
        .map(|(k, v)| RankedItem::new(k.to_string(), v))
        .collect();
    entries.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.value.cmp(&b.value)));
    entries.truncate(n);
    entries
}

#[derive(Debug, Default)]
pub struct Analytics {
    ips: FrequencyTable<ClientAddr>,
    paths: FrequencyTable<RequestPath>,
    statuses: FrequencyTable<StatusCode>,
    user_agents: FrequencyTable<UserAgent>,
    lines_seen: usize,
    lines_matched: usize,
}

impl Analytics {
    /// Counts one line. Lines outside the combined log format are ignored.
    pub fn observe(&mut self, line: &str) {
        self.lines_seen += 1;
        if let Some(entry) = parse_log_line(line) {
            self.record(entry);
        }
    }

    pub fn analyze<'a, I>(&mut self, lines: I)
    where
        I: IntoIterator<Item = &'a str>,
    {
        for line in lines.into_iter().filter(|l| !l.is_empty()) {
            self.observe(line);
        }
    }

    pub fn analyze_text(&mut self, text: &str) {
        self.analyze(text.split('\n'));
    }

    fn record(&mut self, entry: LogEntry) {
        let LogEntry {
            ip,
            path,
            status_code,
            user_agent,
        } = entry;
        self.ips.record(ip);
        self.paths.record(path);
        self.statuses.record(status_code);
        self.user_agents.record(user_agent);
        self.lines_matched += 1;
    }

    pub fn lines_seen(&self) -> usize {
        self.lines_seen
    }

    pub fn lines_matched(&self) -> usize {
        self.lines_matched
    }

    pub fn ips(&self) -> &FrequencyTable<ClientAddr> {
        &self.ips
    }

    pub fn paths(&self) -> &FrequencyTable<RequestPath> {
        &self.paths
    }

    pub fn statuses(&self) -> &FrequencyTable<StatusCode> {
        &self.statuses
    }

    pub fn user_agents(&self) -> &FrequencyTable<UserAgent> {
        &self.user_agents
    }

    pub fn top_ips(&self, n: usize) -> Vec<RankedItem> {
        top_n(&self.ips, n)
    }

    pub fn top_paths(&self, n: usize) -> Vec<RankedItem> {
        top_n(&self.paths, n)
    }

    pub fn top_statuses(&self, n: usize) -> Vec<RankedItem> {
        top_n(&self.statuses, n)
    }

    pub fn top_user_agents(&self, n: usize) -> Vec<RankedItem> {
        top_n(&self.user_agents, n)
    }
}
