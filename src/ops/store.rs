use regex::Regex;

use crate::model::{Celebrity, RecordId};

/// The canonical record list plus the active search query.
///
/// The filtered view holds indices into `records` and is rebuilt whenever
/// the query or the list changes, so it is never stale.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<Celebrity>,
    query: String,
    /// Case-insensitive literal pattern for `query`, shared with highlighting
    matcher: Option<Regex>,
    filtered: Vec<usize>,
}

impl RecordStore {
    pub fn new(records: Vec<Celebrity>) -> Self {
        let mut store = RecordStore {
            records,
            query: String::new(),
            matcher: None,
            filtered: Vec::new(),
        };
        store.refilter();
        store
    }

    /// All records, in load order
    pub fn records(&self) -> &[Celebrity] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// The compiled query, `None` when the query is empty
    pub fn matcher(&self) -> Option<&Regex> {
        self.matcher.as_ref()
    }

    pub fn get(&self, id: RecordId) -> Option<&Celebrity> {
        self.records.iter().find(|c| c.id == id)
    }

    /// Records matching the current query, in load order
    pub fn filtered(&self) -> impl Iterator<Item = &Celebrity> + '_ {
        self.filtered.iter().map(|&i| &self.records[i])
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// The `n`th record of the filtered view
    pub fn filtered_nth(&self, n: usize) -> Option<&Celebrity> {
        self.filtered.get(n).map(|&i| &self.records[i])
    }

    /// Position of `id` within the filtered view
    pub fn filtered_position(&self, id: RecordId) -> Option<usize> {
        self.filtered.iter().position(|&i| self.records[i].id == id)
    }

    /// Replace the search query and recompute the filtered view
    pub fn set_query(&mut self, text: &str) {
        self.query = text.to_string();
        self.matcher = if text.is_empty() {
            None
        } else {
            Regex::new(&format!("(?i){}", regex::escape(text))).ok()
        };
        self.refilter();
    }

    /// Remove the record with `id`. Returns false (and changes nothing)
    /// when no such record exists.
    pub fn delete_record(&mut self, id: RecordId) -> bool {
        let before = self.records.len();
        self.records.retain(|c| c.id != id);
        let removed = self.records.len() != before;
        if removed {
            self.refilter();
        }
        removed
    }

    /// Replace the record with the same id. Returns false (and changes
    /// nothing) when no such record exists.
    pub fn update_record(&mut self, record: Celebrity) -> bool {
        match self.records.iter_mut().find(|c| c.id == record.id) {
            Some(slot) => {
                *slot = record;
                self.refilter();
                true
            }
            None => false,
        }
    }

    fn refilter(&mut self) {
        let matcher = self.matcher.as_ref();
        self.filtered = self
            .records
            .iter()
            .enumerate()
            .filter(|(_, c)| matcher.is_none_or(|re| re.is_match(&c.fullname)))
            .map(|(i, _)| i)
            .collect();
    }
}
