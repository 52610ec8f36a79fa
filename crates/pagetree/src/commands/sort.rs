//! `pagetree sort` command implementation.

use clap::{Args, ValueEnum};
use pagetree_config::{CliSettings, OutputFormat};
use pagetree_core::{Hierarchy, HierarchyEntry, HierarchyStats, PageId, PageRecord, Placement};
use serde::Serialize;

use super::input::{DuplicatesArg, InputArgs, OrphansArg};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the sort command.
#[derive(Args)]
pub(crate) struct SortArgs {
    #[command(flatten)]
    pub(crate) input: InputArgs,

    /// Output format (overrides config).
    #[arg(short, long, value_enum)]
    format: Option<FormatArg>,

    /// Orphan placement (overrides config).
    #[arg(long, value_enum)]
    orphans: Option<OrphansArg>,

    /// Duplicate id resolution (overrides config).
    #[arg(long, value_enum)]
    duplicates: Option<DuplicatesArg>,
}

/// Output format argument.
#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    /// Indented text.
    Text,
    /// JSON array.
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Record as written by `--format json`.
#[derive(Serialize)]
struct SortedRecord<'a> {
    id: PageId,
    parent_id: Option<PageId>,
    title: &'a str,
    depth: usize,
    placement: Placement,
}

impl<'a> From<HierarchyEntry<'a, PageRecord>> for SortedRecord<'a> {
    fn from(entry: HierarchyEntry<'a, PageRecord>) -> Self {
        Self {
            id: entry.record.id,
            parent_id: entry.record.parent_id,
            title: &entry.record.title,
            depth: entry.depth,
            placement: entry.placement,
        }
    }
}

impl SortArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let settings = CliSettings {
            format: self.format.map(Into::into),
            orphans: self.orphans.map(Into::into),
            duplicate_ids: self.duplicates.map(Into::into),
        };
        let (config, hierarchy) = self.input.build(&settings)?;

        match config.output.format {
            OutputFormat::Text => {
                for entry in hierarchy.iter() {
                    output.data(&format_line(&entry, config.output.indent))?;
                }
            }
            OutputFormat::Json => {
                output.data(&to_json(&hierarchy)?)?;
            }
        }

        report_stats(&output, hierarchy.stats());
        Ok(())
    }
}

/// Format one record as `<indent> id: <id>, parent: <parent>[  <title>]`.
fn format_line(entry: &HierarchyEntry<'_, PageRecord>, indent: usize) -> String {
    let record = entry.record;
    let parent = record.parent_id.map_or(0, |id| id.0);
    let mut line = format!(
        "{} id: {}, parent: {parent}",
        " ".repeat(indent * entry.depth),
        record.id
    );
    if !record.title.is_empty() {
        line.push_str("  ");
        line.push_str(&record.title);
    }
    line
}

fn to_json(hierarchy: &Hierarchy<PageRecord>) -> Result<String, CliError> {
    let records: Vec<SortedRecord<'_>> = hierarchy.iter().map(SortedRecord::from).collect();
    Ok(serde_json::to_string_pretty(&records)?)
}

fn report_stats(output: &Output, stats: HierarchyStats) {
    output.info(&format!(
        "{} pages, {} roots, max depth {}",
        stats.total, stats.roots, stats.max_depth
    ));
    if stats.orphans > 0 {
        output.warning(&format!(
            "{} pages reference a parent that is not in the input",
            stats.orphans
        ));
    }
    if stats.cycle_breaks > 0 {
        output.warning(&format!(
            "{} parent cycles were broken to place their pages",
            stats.cycle_breaks
        ));
    }
}
