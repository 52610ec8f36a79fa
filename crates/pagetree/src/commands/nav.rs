//! `pagetree nav` command implementation.

use clap::Args;
use pagetree_config::CliSettings;
use pagetree_core::{Hierarchy, JsonStyle, PageRecord};

use super::input::InputArgs;
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the nav command.
#[derive(Args)]
pub(crate) struct NavArgs {
    #[command(flatten)]
    pub(crate) input: InputArgs,

    /// Print JSON without whitespace.
    #[arg(long)]
    compact: bool,
}

impl NavArgs {
    pub(crate) fn execute(self) -> Result<(), CliError> {
        let output = Output::new();

        let (_, hierarchy) = self.input.build(&CliSettings::default())?;
        output.data(&render(&hierarchy, self.compact)?)?;

        Ok(())
    }
}

fn render(hierarchy: &Hierarchy<PageRecord>, compact: bool) -> Result<String, CliError> {
    let style = if compact {
        JsonStyle::Compact
    } else {
        JsonStyle::Pretty
    };
    Ok(hierarchy.navigation_json(style)?)
}
