//! Page records and the [`Hierarchical`] trait.
//!
//! Any record type that exposes an identifier and an optional parent
//! identifier can be arranged into a [`Hierarchy`](crate::Hierarchy).
//! [`PageRecord`] is the concrete record used by the CLI and JSON input.

use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Deserializer, Serialize};

/// A record that knows its own identifier and its parent's identifier.
pub trait Hierarchical {
    /// Identifier type shared by `id` and `parent_id`.
    type Id: Eq + Hash + Clone;

    /// Identifier of this record.
    fn id(&self) -> &Self::Id;

    /// Identifier of the parent record, `None` for top-level records.
    ///
    /// Implementations should map sentinel values ("0", empty) to `None`.
    fn parent_id(&self) -> Option<&Self::Id>;
}

impl<T: Hierarchical + ?Sized> Hierarchical for &T {
    type Id = T::Id;

    fn id(&self) -> &Self::Id {
        (**self).id()
    }

    fn parent_id(&self) -> Option<&Self::Id> {
        (**self).parent_id()
    }
}

/// Numeric page identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PageId(pub u64);

impl fmt::Display for PageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl From<u64> for PageId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

/// Page data as supplied by the caller.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageRecord {
    /// Page identifier.
    pub id: PageId,
    /// Parent page identifier. `0`, `null` and a missing field all mean top-level.
    #[serde(
        default,
        alias = "parentId",
        alias = "parent",
        deserialize_with = "deserialize_parent_id"
    )]
    pub parent_id: Option<PageId>,
    /// Display title.
    #[serde(default)]
    pub title: String,
}

impl PageRecord {
    /// Create a record. A `parent_id` of `0` means top-level.
    #[must_use]
    pub fn new(id: u64, parent_id: u64) -> Self {
        Self {
            id: PageId(id),
            parent_id: (parent_id != 0).then_some(PageId(parent_id)),
            title: String::new(),
        }
    }

    /// Set the display title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }
}

impl Hierarchical for PageRecord {
    type Id = PageId;

    fn id(&self) -> &PageId {
        &self.id
    }

    fn parent_id(&self) -> Option<&PageId> {
        self.parent_id.as_ref()
    }
}

fn deserialize_parent_id<'de, D>(deserializer: D) -> Result<Option<PageId>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<u64>::deserialize(deserializer)?;
    Ok(raw.filter(|&id| id != 0).map(PageId))
}
