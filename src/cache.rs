use super::NameList;
use compact_str::CompactString;
use crossbeam_utils::sync::ShardedLock;
use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::{Arc, PoisonError, Weak};
use tracing::{debug, trace};

const INITIAL_SWEEP_THRESHOLD: usize = 64;

static GLOBAL: Lazy<ParseCache> = Lazy::new(ParseCache::new);

pub(crate) fn global() -> &'static ParseCache {
    &GLOBAL
}

/// Shares parsed name lists by their exact source text.
///
/// The cache holds only weak references: a list stays cached for as long as
/// some caller keeps it alive, and is reclaimed with the last of them.
/// [`NameList::parse`] uses a process-wide instance; create your own to keep
/// a separate pool.
///
/// ```
/// use bibtex_names::ParseCache;
/// use std::sync::Arc;
///
/// let cache = ParseCache::new();
/// let a = cache.parse("Smith, John");
/// assert!(Arc::ptr_eq(&a, &cache.parse("Smith, John")));
/// assert!(!Arc::ptr_eq(&a, &cache.parse("Smith,  John")));
/// ```
#[derive(Debug)]
pub struct ParseCache {
    entries: ShardedLock<Entries>,
}

#[derive(Debug)]
struct Entries {
    lists: HashMap<CompactString, Weak<NameList>>,
    // Dead entries are swept once the map grows to this size
    sweep_threshold: usize,
}

impl ParseCache {
    pub fn new() -> ParseCache {
        ParseCache {
            entries: ShardedLock::new(Entries {
                lists: HashMap::new(),
                sweep_threshold: INITIAL_SWEEP_THRESHOLD,
            }),
        }
    }

    /// Parse `text`, or return the live list already parsed from it.
    pub fn parse(&self, text: &str) -> Arc<NameList> {
        if let Some(list) = self.lookup(text) {
            trace!(text, "name list cache hit");
            return list;
        }
        trace!(text, "name list cache miss");

        let parsed = Arc::new(NameList::parse_uncached(text));

        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        // Another thread may have parsed the same text since the lookup
        if let Some(winner) = entries.lists.get(text).and_then(Weak::upgrade) {
            return winner;
        }
        entries.insert(text, &parsed);
        parsed
    }

    fn lookup(&self, text: &str) -> Option<Arc<NameList>> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries.lists.get(text).and_then(Weak::upgrade)
    }

    /// Number of cached lists that are still alive.
    pub fn len(&self) -> usize {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        entries
            .lists
            .values()
            .filter(|list| list.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Forget every entry. Lists already handed out are unaffected.
    pub fn clear(&self) {
        let mut entries = self.entries.write().unwrap_or_else(PoisonError::into_inner);
        entries.lists.clear();
        entries.sweep_threshold = INITIAL_SWEEP_THRESHOLD;
    }
}

impl Default for ParseCache {
    fn default() -> ParseCache {
        ParseCache::new()
    }
}

impl Entries {
    fn insert(&mut self, text: &str, list: &Arc<NameList>) {
        if self.lists.len() >= self.sweep_threshold {
            self.sweep();
        }
        self.lists.insert(CompactString::new(text), Arc::downgrade(list));
    }

    fn sweep(&mut self) {
        let before = self.lists.len();
        self.lists.retain(|_, list| list.strong_count() > 0);
        self.sweep_threshold = (self.lists.len() * 2).max(INITIAL_SWEEP_THRESHOLD);
        debug!(
            before,
            after = self.lists.len(),
            "swept reclaimed name lists from cache"
        );
    }
}
