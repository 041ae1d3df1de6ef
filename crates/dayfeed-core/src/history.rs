//! `?q=` query-string state and back/forward navigation.

use serde::{Deserialize, Serialize};
use url::form_urlencoded;

const QUERY_KEY: &str = "q";

/// `"?q=<percent-encoded term>"`; spaces become `%20`.
pub fn to_query_string(term: &str) -> String {
    format!("?{QUERY_KEY}={}", urlencoding::encode(term))
}

/// The search term in a query string, with or without the leading `?`.
/// Accepts `+` as well as `%20` for spaces. Blank terms count as absent.
pub fn query_from(query_string: &str) -> Option<String> {
    form_urlencoded::parse(query_string.trim_start_matches('?').as_bytes())
        .find(|(key, _)| key == QUERY_KEY)
        .map(|(_, value)| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

/// What the front-end must do after moving through history.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "query", rename_all = "lowercase")]
pub enum Navigation {
    /// Re-run this search without recording a new entry.
    Search(String),
    /// No term: back to the initial state with results hidden.
    Reset,
}

impl Navigation {
    fn for_entry(entry: &Option<String>) -> Self {
        match entry {
            Some(term) => Navigation::Search(term.clone()),
            None => Navigation::Reset,
        }
    }
}

/// Linear back/forward stack of search terms.
///
/// Entry 0 is the page as first opened. Submitted and located searches are
/// pushed; searches replayed from history are not.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchHistory {
    entries: Vec<Option<String>>,
    cursor: usize,
}

impl Default for SearchHistory {
    fn default() -> Self {
        Self {
            entries: vec![None],
            cursor: 0,
        }
    }
}

impl SearchHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// History whose first entry comes from an initial query string.
    pub fn from_query_string(query_string: &str) -> Self {
        Self {
            entries: vec![query_from(query_string)],
            cursor: 0,
        }
    }

    /// Search to run on first load, if the initial entry has one.
    pub fn initial_search(&self) -> Option<&str> {
        self.entries.first().and_then(|e| e.as_deref())
    }

    /// Record a completed search. Drops any forward entries.
    pub fn push(&mut self, term: &str) {
        self.entries.truncate(self.cursor + 1);
        self.entries.push(Some(term.to_string()));
        self.cursor = self.entries.len() - 1;
    }

    pub fn back(&mut self) -> Option<Navigation> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        Some(Navigation::for_entry(&self.entries[self.cursor]))
    }

    pub fn forward(&mut self) -> Option<Navigation> {
        if self.cursor + 1 >= self.entries.len() {
            return None;
        }
        self.cursor += 1;
        Some(Navigation::for_entry(&self.entries[self.cursor]))
    }

    pub fn can_go_back(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_go_forward(&self) -> bool {
        self.cursor + 1 < self.entries.len()
    }

    pub fn current(&self) -> Option<&str> {
        self.entries.get(self.cursor).and_then(|e| e.as_deref())
    }

    /// Query string of the current entry, empty when it has no term.
    pub fn current_query_string(&self) -> String {
        self.current().map(to_query_string).unwrap_or_default()
    }
}
