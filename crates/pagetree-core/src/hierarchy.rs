//! Display-ordered page hierarchy.
//!
//! Rebuilds the forest implied by parent pointers and flattens it into a
//! depth-first pre-order walk, the order in which an indented page list is
//! rendered.
//!
//! # Architecture
//!
//! Records are kept in a flat `Vec<T>` in input order. Everything else is
//! tracked by input position:
//! - O(1) id lookups via the `id_index` `HashMap`
//! - children lists built once from resolved parent positions
//! - an explicit stack instead of recursion, so deep chains cannot
//!   overflow the call stack
//! - a visited bitmap, so parent cycles terminate
//!
//! Building is O(n) in time and space.
//!
//! Malformed input never fails. Records whose parent is absent become
//! [`Placement::Orphan`] roots, and each parent cycle that no genuine root
//! reaches is rooted at its earliest member ([`Placement::CycleBreak`]).

use std::collections::{HashMap, HashSet};
use std::fmt;

use serde::Serialize;

use crate::record::Hierarchical;

/// Which record a duplicated id resolves to when children look up their parent.
///
/// Duplicates are never dropped; this only decides where children attach.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DuplicateIds {
    /// The first record with the id is the parent.
    #[default]
    FirstWins,
    /// The last record with the id is the parent.
    LastWins,
}

/// Where orphaned records go relative to genuine top-level records.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OrphanPlacement {
    /// Orphans keep their input position among the top-level records.
    #[default]
    Interleave,
    /// Orphans follow all top-level records, in input order.
    Append,
}

/// Options for [`Hierarchy::build`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct HierarchyOptions {
    /// Duplicate id resolution.
    pub duplicate_ids: DuplicateIds,
    /// Orphan root placement.
    pub orphans: OrphanPlacement,
}

/// Why a record sits where it does in the output.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Placement {
    /// Record has no parent.
    TopLevel,
    /// Record is nested under its parent.
    Child,
    /// Record's parent is not in the input; shown as a root.
    Orphan,
    /// Record is part of a parent cycle and was chosen to root it.
    CycleBreak,
}

/// A record in display order with its nesting depth.
#[derive(Debug, PartialEq, Eq)]
pub struct HierarchyEntry<'a, T> {
    /// The record.
    pub record: &'a T,
    /// Nesting depth, 0 for roots.
    pub depth: usize,
    /// Why the record is placed here.
    pub placement: Placement,
}

impl<T> HierarchyEntry<'_, T> {
    /// True if the record is shown nested under another record.
    #[must_use]
    pub fn has_visible_parent(&self) -> bool {
        self.depth > 0
    }
}

// Manual impls: derive would require `T: Clone`.
impl<T> Clone for HierarchyEntry<'_, T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for HierarchyEntry<'_, T> {}

/// Summary counts for a built hierarchy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct HierarchyStats {
    /// Number of records.
    pub total: usize,
    /// Records at depth 0, of any placement.
    pub roots: usize,
    /// Records whose parent is absent.
    pub orphans: usize,
    /// Cycles broken to root them.
    pub cycle_breaks: usize,
    /// Deepest nesting level.
    pub max_depth: usize,
}

/// Navigation tree node.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct NavNode<'a, T> {
    /// The record.
    #[serde(flatten)]
    pub record: &'a T,
    /// Child nodes in display order.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<NavNode<'a, T>>,
}

// Drain descendants into a worklist so deep chains drop without recursion.
impl<T> Drop for NavNode<'_, T> {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}

/// Records arranged into a display-ordered forest.
///
/// Built fresh from a record snapshot with [`Hierarchy::build`]; holds no
/// state beyond that snapshot.
pub struct Hierarchy<T: Hierarchical> {
    records: Vec<T>,
    order: Vec<usize>,
    depths: Vec<usize>,
    placements: Vec<Placement>,
    parents: Vec<Option<usize>>,
    children: Vec<Vec<usize>>,
    id_index: HashMap<T::Id, usize>,
    stats: HierarchyStats,
}

impl<T: Hierarchical + fmt::Debug> fmt::Debug for Hierarchy<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Hierarchy")
            .field("entries", &self.iter().collect::<Vec<_>>())
            .field("stats", &self.stats)
            .finish_non_exhaustive()
    }
}

/// Reorder records into display order using default options.
///
/// Parents precede their children, siblings keep their input order, and
/// every input record appears exactly once in the output.
pub fn build_hierarchy<T, I>(records: I) -> Vec<T>
where
    T: Hierarchical,
    I: IntoIterator<Item = T>,
{
    Hierarchy::build(records, &HierarchyOptions::default()).into_records()
}

impl<T: Hierarchical> Hierarchy<T> {
    /// Build the hierarchy for a snapshot of records.
    pub fn build<I>(records: I, options: &HierarchyOptions) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        let records: Vec<T> = records.into_iter().collect();
        let len = records.len();
        let id_index = index_ids(&records, options.duplicate_ids);

        let mut resolved = vec![None; len];
        let mut declared_children = vec![Vec::new(); len];
        let mut placements = vec![Placement::Child; len];
        let mut roots = Vec::new();

        for (pos, record) in records.iter().enumerate() {
            match record.parent_id() {
                None => {
                    placements[pos] = Placement::TopLevel;
                    roots.push(pos);
                }
                Some(parent_id) => match id_index.get(parent_id) {
                    Some(&parent) => {
                        resolved[pos] = Some(parent);
                        declared_children[parent].push(pos);
                    }
                    None => {
                        placements[pos] = Placement::Orphan;
                        roots.push(pos);
                    }
                },
            }
        }

        if options.orphans == OrphanPlacement::Append {
            // Stable: both groups keep input order.
            roots.sort_by_key(|&pos| placements[pos] == Placement::Orphan);
        }

        let mut walk = Walk::new(len, &declared_children);
        for &root in &roots {
            walk.visit(root);
        }

        // Anything left is only reachable through a parent cycle.
        let mut cycle_breaks = 0;
        for start in 0..len {
            if walk.visited[start] {
                continue;
            }
            let root = cycle_root(start, &resolved);
            placements[root] = Placement::CycleBreak;
            cycle_breaks += 1;
            walk.visit(root);
        }

        let stats = HierarchyStats {
            total: len,
            roots: walk.order.iter().filter(|&&pos| walk.depths[pos] == 0).count(),
            orphans: placements
                .iter()
                .filter(|&&p| p == Placement::Orphan)
                .count(),
            cycle_breaks,
            max_depth: walk.depths.iter().copied().max().unwrap_or(0),
        };

        if cycle_breaks > 0 {
            tracing::warn!(cycle_breaks, "Parent cycles found in page records");
        }
        tracing::debug!(
            total = stats.total,
            roots = stats.roots,
            orphans = stats.orphans,
            max_depth = stats.max_depth,
            "Hierarchy built"
        );

        let Walk {
            order,
            depths,
            parents,
            children,
            ..
        } = walk;

        Self {
            records,
            order,
            depths,
            placements,
            parents,
            children,
            id_index,
            stats,
        }
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// True if there are no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Summary counts.
    #[must_use]
    pub fn stats(&self) -> HierarchyStats {
        self.stats
    }

    /// Entries in display order.
    pub fn iter(&self) -> impl Iterator<Item = HierarchyEntry<'_, T>> + '_ {
        self.order.iter().map(|&pos| self.entry(pos))
    }

    /// Root records (depth 0) in display order.
    #[must_use]
    pub fn roots(&self) -> Vec<&T> {
        self.order
            .iter()
            .filter(|&&pos| self.depths[pos] == 0)
            .map(|&pos| &self.records[pos])
            .collect()
    }

    /// Get a record by id.
    ///
    /// With duplicate ids this is the record children resolve to.
    #[must_use]
    pub fn get(&self, id: &T::Id) -> Option<&T> {
        self.id_index.get(id).map(|&pos| &self.records[pos])
    }

    /// Get the display entry for an id.
    #[must_use]
    pub fn entry_for(&self, id: &T::Id) -> Option<HierarchyEntry<'_, T>> {
        self.id_index.get(id).map(|&pos| self.entry(pos))
    }

    /// Nesting depth of a record.
    #[must_use]
    pub fn depth_of(&self, id: &T::Id) -> Option<usize> {
        self.entry_for(id).map(|entry| entry.depth)
    }

    /// Placement of a record.
    #[must_use]
    pub fn placement_of(&self, id: &T::Id) -> Option<Placement> {
        self.entry_for(id).map(|entry| entry.placement)
    }

    /// Children shown under a record, in display order.
    ///
    /// Empty for unknown ids and leaf records.
    #[must_use]
    pub fn children(&self, id: &T::Id) -> Vec<&T> {
        self.id_index
            .get(id)
            .map(|&pos| {
                self.children[pos]
                    .iter()
                    .map(|&child| &self.records[child])
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Ancestors shown above a record, root first.
    ///
    /// The record itself is not included. Empty for roots and unknown ids.
    #[must_use]
    pub fn breadcrumbs(&self, id: &T::Id) -> Vec<&T> {
        let Some(&pos) = self.id_index.get(id) else {
            return Vec::new();
        };

        let mut ancestors = Vec::new();
        let mut current = self.parents[pos];
        while let Some(i) = current {
            ancestors.push(&self.records[i]);
            current = self.parents[i];
        }
        ancestors.reverse();
        ancestors
    }

    /// Nested navigation forest.
    ///
    /// Built from the flat pre-order walk with an explicit stack, and nodes
    /// drop iteratively, so arbitrarily deep chains are safe to build and
    /// discard. Serializing the nested tree with serde recurses once per
    /// level; use [`navigation_json`](Self::navigation_json) for deep input.
    #[must_use]
    pub fn navigation(&self) -> Vec<NavNode<'_, T>> {
        fn attach<'a, T>(
            node: NavNode<'a, T>,
            stack: &mut [NavNode<'a, T>],
            forest: &mut Vec<NavNode<'a, T>>,
        ) {
            match stack.last_mut() {
                Some(parent) => parent.children.push(node),
                None => forest.push(node),
            }
        }

        let mut forest = Vec::new();
        let mut stack: Vec<NavNode<'_, T>> = Vec::new();

        for &pos in &self.order {
            let depth = self.depths[pos];
            while stack.len() > depth {
                if let Some(node) = stack.pop() {
                    attach(node, &mut stack, &mut forest);
                }
            }
            stack.push(NavNode {
                record: &self.records[pos],
                children: Vec::new(),
            });
        }
        while let Some(node) = stack.pop() {
            attach(node, &mut stack, &mut forest);
        }

        forest
    }

    /// Consume the hierarchy, returning records in display order.
    #[must_use]
    pub fn into_records(self) -> Vec<T> {
        let mut slots: Vec<Option<T>> = self.records.into_iter().map(Some).collect();
        self.order
            .iter()
            .filter_map(|&pos| slots[pos].take())
            .collect()
    }

    fn entry(&self, pos: usize) -> HierarchyEntry<'_, T> {
        HierarchyEntry {
            record: &self.records[pos],
            depth: self.depths[pos],
            placement: self.placements[pos],
        }
    }
}

/// Map each id to the position children resolve it to.
fn index_ids<T: Hierarchical>(records: &[T], policy: DuplicateIds) -> HashMap<T::Id, usize> {
    let mut index = HashMap::with_capacity(records.len());
    for (pos, record) in records.iter().enumerate() {
        match policy {
            DuplicateIds::FirstWins => {
                index.entry(record.id().clone()).or_insert(pos);
            }
            DuplicateIds::LastWins => {
                index.insert(record.id().clone(), pos);
            }
        }
    }
    index
}

/// Find the member of the cycle above `start` with the smallest position.
///
/// `start` must be unreachable from any root, which means its parent chain
/// ends in a cycle.
fn cycle_root(start: usize, resolved: &[Option<usize>]) -> usize {
    let mut seen = HashSet::new();
    let mut current = start;
    while seen.insert(current) {
        match resolved[current] {
            Some(parent) => current = parent,
            None => return current,
        }
    }

    // `current` is the first repeat, so it lies on the cycle.
    let entry = current;
    let mut earliest = entry;
    let mut member = entry;
    while let Some(next) = resolved[member] {
        if next == entry {
            break;
        }
        earliest = earliest.min(next);
        member = next;
    }
    earliest
}

/// Guarded pre-order traversal state.
struct Walk<'a> {
    declared_children: &'a [Vec<usize>],
    visited: Vec<bool>,
    order: Vec<usize>,
    depths: Vec<usize>,
    parents: Vec<Option<usize>>,
    children: Vec<Vec<usize>>,
    stack: Vec<(usize, usize, Option<usize>)>,
}

impl<'a> Walk<'a> {
    fn new(len: usize, declared_children: &'a [Vec<usize>]) -> Self {
        Self {
            declared_children,
            visited: vec![false; len],
            order: Vec::with_capacity(len),
            depths: vec![0; len],
            parents: vec![None; len],
            children: vec![Vec::new(); len],
            stack: Vec::new(),
        }
    }

    /// Emit `root` and its unvisited descendants in pre-order.
    fn visit(&mut self, root: usize) {
        self.stack.push((root, 0, None));
        while let Some((pos, depth, parent)) = self.stack.pop() {
            if self.visited[pos] {
                continue;
            }
            self.visited[pos] = true;
            self.order.push(pos);
            self.depths[pos] = depth;
            self.parents[pos] = parent;
            if let Some(parent) = parent {
                self.children[parent].push(pos);
            }

            // Reverse so the first child is popped first.
            for &child in self.declared_children[pos].iter().rev() {
                if !self.visited[child] {
                    self.stack.push((child, depth + 1, Some(pos)));
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::record::{PageId, PageRecord};

    fn page(id: u64, parent: u64) -> PageRecord {
        PageRecord::new(id, parent)
    }

    fn ids(records: &[PageRecord]) -> Vec<u64> {
        records.iter().map(|r| r.id.0).collect()
    }

    fn ids_and_depths(hierarchy: &Hierarchy<PageRecord>) -> Vec<(u64, usize)> {
        hierarchy
            .iter()
            .map(|entry| (entry.record.id.0, entry.depth))
            .collect()
    }

    fn build(records: Vec<PageRecord>) -> Hierarchy<PageRecord> {
        Hierarchy::build(records, &HierarchyOptions::default())
    }

    #[test]
    fn test_empty_input_returns_empty() {
        let sorted = build_hierarchy(Vec::<PageRecord>::new());

        assert!(sorted.is_empty());
    }

    #[test]
    fn test_flat_list_keeps_input_order() {
        let records: Vec<_> = (1..=1000).map(|id| page(id, 0)).collect();

        let hierarchy = build(records.clone());

        assert_eq!(hierarchy.len(), 1000);
        assert!(hierarchy.iter().all(|entry| entry.depth == 0));
        assert_eq!(hierarchy.into_records(), records);
    }

    #[test]
    fn test_three_level_nesting() {
        let hierarchy = build(vec![page(1, 0), page(2, 1), page(3, 2)]);

        assert_eq!(ids_and_depths(&hierarchy), vec![(1, 0), (2, 1), (3, 2)]);
    }

    #[test]
    fn test_children_listed_before_parent_are_moved_after_it() {
        let sorted = build_hierarchy(vec![page(3, 2), page(2, 1), page(1, 0)]);

        assert_eq!(ids(&sorted), vec![1, 2, 3]);
    }

    #[test]
    fn test_sibling_order_is_input_order() {
        let hierarchy = build(vec![page(1, 0), page(30, 1), page(10, 1), page(20, 1)]);

        assert_eq!(
            ids(&hierarchy.children(&PageId(1)).into_iter().cloned().collect::<Vec<_>>()),
            vec![30, 10, 20]
        );
        assert_eq!(ids(&hierarchy.into_records()), vec![1, 30, 10, 20]);
    }

    #[test]
    fn test_pre_order_descends_before_next_sibling() {
        let hierarchy = build(vec![
            page(1, 0),
            page(2, 1),
            page(3, 1),
            page(4, 2),
            page(5, 0),
            page(6, 3),
        ]);

        assert_eq!(
            ids_and_depths(&hierarchy),
            vec![(1, 0), (2, 1), (4, 2), (3, 1), (6, 2), (5, 0)]
        );
    }

    #[test]
    fn test_orphan_becomes_root() {
        let hierarchy = build(vec![page(1, 99)]);

        let entry = hierarchy.entry_for(&PageId(1)).unwrap();
        assert_eq!(entry.depth, 0);
        assert_eq!(entry.placement, Placement::Orphan);
        assert!(!entry.has_visible_parent());
    }

    #[test]
    fn test_mixed_orphans_and_tree() {
        let hierarchy = build(vec![page(1, 0), page(2, 1), page(3, 50)]);

        assert_eq!(ids_and_depths(&hierarchy), vec![(1, 0), (2, 1), (3, 0)]);
        assert_eq!(hierarchy.placement_of(&PageId(3)), Some(Placement::Orphan));
    }

    #[test]
    fn test_orphans_interleave_by_default() {
        let hierarchy = build(vec![page(1, 100), page(2, 0), page(3, 2), page(4, 200)]);

        assert_eq!(
            ids_and_depths(&hierarchy),
            vec![(1, 0), (2, 0), (3, 1), (4, 0)]
        );
    }

    #[test]
    fn test_orphans_appended_when_configured() {
        let options = HierarchyOptions {
            orphans: OrphanPlacement::Append,
            ..HierarchyOptions::default()
        };
        let hierarchy = Hierarchy::build(
            vec![page(1, 100), page(2, 0), page(5, 1), page(3, 2), page(4, 200)],
            &options,
        );

        assert_eq!(
            ids_and_depths(&hierarchy),
            vec![(2, 0), (3, 1), (1, 0), (5, 1), (4, 0)]
        );
    }

    #[test]
    fn test_orphan_keeps_its_subtree() {
        let hierarchy = build(vec![page(10, 0), page(1, 500), page(2, 1), page(3, 2)]);

        assert_eq!(
            ids_and_depths(&hierarchy),
            vec![(10, 0), (1, 0), (2, 1), (3, 2)]
        );
        assert_eq!(hierarchy.stats().orphans, 1);
    }

    #[test]
    fn test_two_node_cycle_terminates() {
        let hierarchy = build(vec![page(1, 2), page(2, 1)]);

        assert_eq!(ids_and_depths(&hierarchy), vec![(1, 0), (2, 1)]);
        assert_eq!(hierarchy.placement_of(&PageId(1)), Some(Placement::CycleBreak));
        assert_eq!(hierarchy.placement_of(&PageId(2)), Some(Placement::Child));
        assert_eq!(hierarchy.stats().cycle_breaks, 1);
    }

    #[test]
    fn test_self_parent_terminates() {
        let hierarchy = build(vec![page(7, 7)]);

        assert_eq!(ids_and_depths(&hierarchy), vec![(7, 0)]);
        assert_eq!(hierarchy.placement_of(&PageId(7)), Some(Placement::CycleBreak));
    }

    #[test]
    fn test_cycle_rooted_at_earliest_member() {
        // 4 hangs off the cycle formed by 1, 2 and 3 and is listed first.
        let hierarchy = build(vec![page(4, 2), page(3, 2), page(1, 3), page(2, 1)]);

        // Position 1 (id 3) is the earliest cycle member.
        assert_eq!(
            ids_and_depths(&hierarchy),
            vec![(3, 0), (1, 1), (2, 2), (4, 3)]
        );
    }

    #[test]
    fn test_cycle_descendant_follows_parent() {
        let hierarchy = build(vec![page(3, 1), page(1, 2), page(2, 1)]);

        let order: Vec<u64> = hierarchy.iter().map(|e| e.record.id.0).collect();
        let position = |id| order.iter().position(|&x| x == id).unwrap();
        assert!(position(1) < position(3));
        assert_eq!(order.len(), 3);
    }

    #[test]
    fn test_cycles_appended_after_roots() {
        let hierarchy = build(vec![page(1, 2), page(2, 1), page(3, 0), page(4, 99)]);

        assert_eq!(
            ids_and_depths(&hierarchy),
            vec![(3, 0), (4, 0), (1, 0), (2, 1)]
        );
    }

    #[test]
    fn test_duplicate_ids_first_wins() {
        let hierarchy = build(vec![
            page(1, 0).with_title("first"),
            page(1, 0).with_title("second"),
            page(2, 1),
        ]);

        let titles: Vec<(&str, usize)> = hierarchy
            .iter()
            .map(|e| (e.record.title.as_str(), e.depth))
            .collect();
        assert_eq!(titles, vec![("first", 0), ("", 1), ("second", 0)]);
        assert_eq!(hierarchy.get(&PageId(1)).unwrap().title, "first");
    }

    #[test]
    fn test_duplicate_ids_last_wins() {
        let options = HierarchyOptions {
            duplicate_ids: DuplicateIds::LastWins,
            ..HierarchyOptions::default()
        };
        let hierarchy = Hierarchy::build(
            vec![
                page(1, 0).with_title("first"),
                page(1, 0).with_title("second"),
                page(2, 1),
            ],
            &options,
        );

        let titles: Vec<(&str, usize)> = hierarchy
            .iter()
            .map(|e| (e.record.title.as_str(), e.depth))
            .collect();
        assert_eq!(titles, vec![("first", 0), ("second", 0), ("", 1)]);
    }

    #[test]
    fn test_deep_chain_does_not_overflow() {
        let depth = 100_000;
        let records: Vec<_> = (1..=depth).map(|id| page(id, id - 1)).rev().collect();

        let hierarchy = build(records);

        assert_eq!(hierarchy.stats().max_depth, usize::try_from(depth - 1).unwrap());
        assert_eq!(hierarchy.roots().len(), 1);
        assert_eq!(hierarchy.breadcrumbs(&PageId(depth)).len(), hierarchy.stats().max_depth);
    }

    #[test]
    fn test_deep_chain_navigation_builds_and_drops() {
        let depth = 100_000;
        let records: Vec<_> = (1..=depth).map(|id| page(id, id - 1)).collect();
        let hierarchy = build(records);

        let nav = hierarchy.navigation();

        assert_eq!(nav.len(), 1);
        let mut node = &nav[0];
        let mut levels = 1;
        while let Some(child) = node.children.first() {
            node = child;
            levels += 1;
        }
        assert_eq!(levels, depth);
        assert_eq!(node.record.id, PageId(depth));
        drop(nav);
    }

    #[test]
    fn test_debug_lists_entries_in_display_order() {
        let hierarchy = build(vec![page(2, 1), page(1, 0), page(3, 3)]);

        let debug = format!("{hierarchy:?}");

        assert!(debug.starts_with("Hierarchy { entries: ["));
        let first = debug.find("PageId(1)").unwrap();
        let second = debug.find("PageId(2)").unwrap();
        assert!(first < second);
        assert!(debug.contains("CycleBreak"));
        assert!(debug.contains("cycle_breaks: 1"));
    }

    #[test]
    fn test_roots_lists_all_depth_zero_records() {
        let hierarchy = build(vec![page(1, 0), page(2, 1), page(3, 9), page(4, 5), page(5, 4)]);

        let roots: Vec<u64> = hierarchy.roots().iter().map(|r| r.id.0).collect();
        assert_eq!(roots, vec![1, 3, 4]);
        assert_eq!(hierarchy.stats().roots, 3);
    }

    #[test]
    fn test_breadcrumbs_root_first() {
        let hierarchy = build(vec![page(1, 0), page(2, 1), page(3, 2), page(4, 3)]);

        let crumbs: Vec<u64> = hierarchy
            .breadcrumbs(&PageId(4))
            .iter()
            .map(|r| r.id.0)
            .collect();
        assert_eq!(crumbs, vec![1, 2, 3]);
    }

    #[test]
    fn test_breadcrumbs_root_and_unknown_are_empty() {
        let hierarchy = build(vec![page(1, 0)]);

        assert!(hierarchy.breadcrumbs(&PageId(1)).is_empty());
        assert!(hierarchy.breadcrumbs(&PageId(42)).is_empty());
    }

    #[test]
    fn test_breadcrumbs_inside_cycle_stop_at_break() {
        let hierarchy = build(vec![page(1, 3), page(2, 1), page(3, 2)]);

        let crumbs: Vec<u64> = hierarchy
            .breadcrumbs(&PageId(3))
            .iter()
            .map(|r| r.id.0)
            .collect();
        assert_eq!(crumbs, vec![1, 2]);
    }

    #[test]
    fn test_children_unknown_id_is_empty() {
        let hierarchy = build(vec![page(1, 0)]);

        assert!(hierarchy.children(&PageId(9)).is_empty());
    }

    #[test]
    fn test_navigation_nests_children() {
        let hierarchy = build(vec![page(1, 0), page(2, 1), page(3, 2), page(4, 0)]);

        let nav = hierarchy.navigation();

        assert_eq!(nav.len(), 2);
        assert_eq!(nav[0].record.id, PageId(1));
        assert_eq!(nav[0].children.len(), 1);
        assert_eq!(nav[0].children[0].children[0].record.id, PageId(3));
        assert!(nav[1].children.is_empty());
    }

    #[test]
    fn test_navigation_serializes_flat_record_fields() {
        let hierarchy = build(vec![
            page(1, 0).with_title("About"),
            page(2, 1).with_title("Team"),
        ]);

        let json = serde_json::to_value(hierarchy.navigation()).unwrap();

        assert_eq!(
            json,
            serde_json::json!([{
                "id": 1,
                "parent_id": null,
                "title": "About",
                "children": [{"id": 2, "parent_id": 1, "title": "Team"}]
            }])
        );
    }

    #[test]
    fn test_string_ids() {
        struct Doc {
            slug: String,
            parent: Option<String>,
        }

        impl Hierarchical for Doc {
            type Id = String;

            fn id(&self) -> &String {
                &self.slug
            }

            fn parent_id(&self) -> Option<&String> {
                self.parent.as_ref().filter(|p| !p.is_empty())
            }
        }

        let doc = |slug: &str, parent: &str| Doc {
            slug: slug.to_owned(),
            parent: Some(parent.to_owned()),
        };

        let sorted = build_hierarchy(vec![doc("setup", "guide"), doc("guide", ""), doc("faq", "")]);

        let slugs: Vec<&str> = sorted.iter().map(|d| d.slug.as_str()).collect();
        assert_eq!(slugs, vec!["guide", "setup", "faq"]);
    }

    #[test]
    fn test_has_visible_parent() {
        let hierarchy = build(vec![page(1, 0), page(2, 1)]);

        let visible: Vec<bool> = hierarchy.iter().map(|e| e.has_visible_parent()).collect();
        assert_eq!(visible, vec![false, true]);
    }

    static_assertions::assert_impl_all!(Hierarchy<PageRecord>: Send, Sync);
}
