//! CLI command implementations.

pub(crate) mod breadcrumbs;
pub(crate) mod input;
pub(crate) mod nav;
pub(crate) mod sort;

pub(crate) use breadcrumbs::BreadcrumbsArgs;
pub(crate) use nav::NavArgs;
pub(crate) use sort::SortArgs;
