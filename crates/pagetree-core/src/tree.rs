//! Incrementally loaded page tree.
//!
//! Pages usually arrive in batches (one per fetched result page), and a
//! child can arrive before its parent. [`PageTree`] keeps every record it has
//! been given; a record whose parent is still missing is shown as an orphan
//! root, and moves under its parent as soon as a later batch supplies it.

use std::collections::HashSet;

use crate::hierarchy::{Hierarchy, HierarchyOptions};
use crate::record::Hierarchical;

/// Accumulates page batches and arranges them on demand.
pub struct PageTree<T> {
    records: Vec<T>,
    options: HierarchyOptions,
}

impl<T: Hierarchical> Default for PageTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hierarchical> PageTree<T> {
    /// Create an empty tree with default options.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(HierarchyOptions::default())
    }

    /// Create an empty tree.
    #[must_use]
    pub fn with_options(options: HierarchyOptions) -> Self {
        Self {
            records: Vec::new(),
            options,
        }
    }

    /// Add a batch of records.
    ///
    /// Siblings are ordered by arrival, so children from earlier batches come
    /// before children from this one.
    pub fn add<I>(&mut self, batch: I)
    where
        I: IntoIterator<Item = T>,
    {
        let before = self.records.len();
        self.records.extend(batch);
        tracing::debug!(
            added = self.records.len() - before,
            total = self.records.len(),
            "Page batch added"
        );
    }

    /// Number of records loaded so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if nothing has been loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Parent ids referenced by loaded records but not loaded themselves.
    ///
    /// Listed once each, in order of first reference.
    #[must_use]
    pub fn missing_parents(&self) -> Vec<&T::Id> {
        let loaded: HashSet<&T::Id> = self.records.iter().map(|r| r.id()).collect();
        let mut reported = HashSet::new();

        self.records
            .iter()
            .filter_map(|r| r.parent_id())
            .filter(|parent| !loaded.contains(parent) && reported.insert(*parent))
            .collect()
    }

    /// Arrange everything loaded so far.
    #[must_use]
    pub fn hierarchy(&self) -> Hierarchy<&T> {
        Hierarchy::build(&self.records, &self.options)
    }

    /// Records in display order.
    #[must_use]
    pub fn hierarchy_list(&self) -> Vec<&T> {
        self.hierarchy().into_records()
    }
}
