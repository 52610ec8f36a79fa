//! Page hierarchy reconstruction for pagetree.
//!
//! This crate provides:
//! - [`Hierarchy`]: display-ordered forest built from parent pointers
//! - [`build_hierarchy`]: one-shot reorder of a record list
//! - [`PageTree`]: batch-by-batch loading with orphan relocation
//! - [`Hierarchy::navigation_json`]: navigation forest as JSON at any depth
//! - [`parse_records`] / [`load_records`]: JSON record input
//!
//! # Quick Start
//!
//! ```
//! use pagetree_core::{Hierarchy, HierarchyOptions, PageId, PageRecord};
//!
//! let records = vec![
//!     PageRecord::new(3, 2).with_title("Setup"),
//!     PageRecord::new(1, 0).with_title("Home"),
//!     PageRecord::new(2, 1).with_title("Guide"),
//! ];
//!
//! let hierarchy = Hierarchy::build(records, &HierarchyOptions::default());
//! let lines: Vec<String> = hierarchy
//!     .iter()
//!     .map(|entry| format!("{}{}", "  ".repeat(entry.depth), entry.record.title))
//!     .collect();
//!
//! assert_eq!(lines, ["Home", "  Guide", "    Setup"]);
//! assert_eq!(hierarchy.breadcrumbs(&PageId(3)).len(), 2);
//! ```

mod hierarchy;
mod nav_json;
mod record;
mod records;
mod tree;


pub use hierarchy::{
    DuplicateIds, Hierarchy, HierarchyEntry, HierarchyOptions, HierarchyStats, NavNode,
    OrphanPlacement, Placement, build_hierarchy,
};
pub use nav_json::JsonStyle;
pub use record::{Hierarchical, PageId, PageRecord};
pub use records::{RecordsError, load_records, parse_records};
pub use tree::PageTree;
