//! Generic filter/sort pipeline shared by every list page.
//!
//! Each page supplies its own sort-key enum and status predicate; the
//! filtering and ordering rules live here exactly once.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};

//
// ─── SORT ORDER ────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SortOrder {
    Asc,
    Desc,
}

impl SortOrder {
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            SortOrder::Asc => SortOrder::Desc,
            SortOrder::Desc => SortOrder::Asc,
        }
    }
}

/// A sortable field value. Text compares case-insensitively; numbers and
/// timestamps compare numerically.
#[derive(Debug, Clone, PartialEq)]
pub enum SortValue<'a> {
    Text(&'a str),
    Number(f64),
    Time(DateTime<Utc>),
}

impl SortValue<'_> {
    fn compare(&self, other: &Self) -> Ordering {
        match (self, other) {
            (SortValue::Text(a), SortValue::Text(b)) => {
                a.to_lowercase().cmp(&b.to_lowercase())
            }
            (SortValue::Number(a), SortValue::Number(b)) => a.total_cmp(b),
            (SortValue::Time(a), SortValue::Time(b)) => a.cmp(b),
            // A key accessor always yields one variant; mixed variants mean
            // a page bug, and the items are left in their current order.
            _ => Ordering::Equal,
        }
    }
}

//
// ─── PAGE CONTRACTS ────────────────────────────────────────────────────────────
//

/// A page's sort-key enum: which columns exist and which direction a column
/// starts in when freshly selected.
pub trait SortKey: Copy + Eq {
    fn default_order(&self) -> SortOrder;
}

/// Extraction of the sortable value for a key from one item.
pub trait SortKeyOf<T>: SortKey {
    fn value<'a>(&self, item: &'a T) -> SortValue<'a>;
}

/// An item exposes the text fields the search box matches against
/// (title, name, email; each page picks its own).
pub trait Searchable {
    fn haystacks(&self) -> Vec<&str>;
}

//
// ─── FILTER STATE ──────────────────────────────────────────────────────────────
//

/// Per-page list controls. Initialized to defaults on mount, mutated by user
/// input, never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState<K: SortKey> {
    pub search_query: String,
    pub sort_key: K,
    pub sort_order: SortOrder,
}

impl<K: SortKey> FilterState<K> {
    #[must_use]
    pub fn new(sort_key: K) -> Self {
        Self {
            search_query: String::new(),
            sort_key,
            sort_order: sort_key.default_order(),
        }
    }

    /// Column-header click semantics: re-selecting the active column flips
    /// the order, selecting a new column resets to that column's default.
    pub fn toggle_sort(&mut self, key: K) {
        if self.sort_key == key {
            self.sort_order = self.sort_order.toggled();
        } else {
            self.sort_key = key;
            self.sort_order = key.default_order();
        }
    }
}

//
// ─── PIPELINE ──────────────────────────────────────────────────────────────────
//

/// Keep items whose haystacks contain the query (case-insensitive substring,
/// empty query keeps everything) and that the status predicate accepts.
#[must_use]
pub fn apply_filter<T>(items: &[T], query: &str, status: impl Fn(&T) -> bool) -> Vec<T>
where
    T: Searchable + Clone,
{
    let needle = query.trim().to_lowercase();
    items
        .iter()
        .filter(|item| {
            if !status(item) {
                return false;
            }
            if needle.is_empty() {
                return true;
            }
            item.haystacks()
                .iter()
                .any(|haystack| haystack.to_lowercase().contains(&needle))
        })
        .cloned()
        .collect()
}

/// Stable sort by the given key; equal keys keep their input order.
pub fn apply_sort<T, K: SortKeyOf<T>>(items: &mut [T], key: K, order: SortOrder) {
    items.sort_by(|a, b| {
        let ordering = key.value(a).compare(&key.value(b));
        match order {
            SortOrder::Asc => ordering,
            SortOrder::Desc => ordering.reverse(),
        }
    });
}

/// The full pipeline: filter, then sort. Pure; recomputed whenever items or
/// state change.
#[must_use]
pub fn displayed<T, K>(items: &[T], state: &FilterState<K>, status: impl Fn(&T) -> bool) -> Vec<T>
where
    T: Searchable + Clone,
    K: SortKeyOf<T>,
{
    let mut visible = apply_filter(items, &state.search_query, status);
    apply_sort(&mut visible, state.sort_key, state.sort_order);
    visible
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
