//! `pagetree breadcrumbs` command implementation.

use clap::Args;
use pagetree_config::CliSettings;
use pagetree_core::{PageId, PageRecord};

use super::input::InputArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the breadcrumbs command.
#[derive(Args)]
pub(crate) struct BreadcrumbsArgs {
    #[command(flatten)]
    pub(crate) input: InputArgs,

    /// Page id to look up.
    #[arg(long)]
    id: u64,
}

impl BreadcrumbsArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let (_, hierarchy) = self.input.build(&CliSettings::default())?;
        let id = PageId(self.id);
        if hierarchy.get(&id).is_none() {
            return Err(CliError::Validation(format!("Page {id} not found")));
        }

        let ancestors = hierarchy.breadcrumbs(&id);
        if ancestors.is_empty() {
            output.info(&format!("Page {id} is shown at the top level"));
        }
        for ancestor in ancestors {
            output.data(&crumb(ancestor))?;
        }

        Ok(())
    }
}

fn crumb(record: &PageRecord) -> String {
    if record.title.is_empty() {
        record.id.to_string()
    } else {
        format!("{}  {}", record.id, record.title)
    }
}
