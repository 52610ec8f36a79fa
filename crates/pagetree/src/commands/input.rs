//! Arguments and loading shared by every command.

use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Args, ValueEnum};
use pagetree_config::{
    CliSettings, Config, DuplicateIds as ConfigDuplicateIds,
    OrphanPlacement as ConfigOrphanPlacement,
};
use pagetree_core::{
    DuplicateIds, Hierarchy, HierarchyOptions, OrphanPlacement, PageRecord, load_records,
    parse_records,
};

use crate::error::CliError;

/// Record input and configuration arguments.
#[derive(Args)]
pub(crate) struct InputArgs {
    /// JSON file with an array of page records (default: stdin).
    file: Option<PathBuf>,

    /// Path to configuration file (default: auto-discover pagetree.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub(crate) verbose: bool,
}

/// Orphan placement argument.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum OrphansArg {
    /// Orphans keep their input position.
    Interleave,
    /// Orphans follow all top-level pages.
    Append,
}

impl From<OrphansArg> for ConfigOrphanPlacement {
    fn from(arg: OrphansArg) -> Self {
        match arg {
            OrphansArg::Interleave => Self::Interleave,
            OrphansArg::Append => Self::Append,
        }
    }
}

/// Duplicate id resolution argument.
#[derive(Clone, Copy, ValueEnum)]
pub(crate) enum DuplicatesArg {
    /// First page with an id is the parent.
    First,
    /// Last page with an id is the parent.
    Last,
}

impl From<DuplicatesArg> for ConfigDuplicateIds {
    fn from(arg: DuplicatesArg) -> Self {
        match arg {
            DuplicatesArg::First => Self::First,
            DuplicatesArg::Last => Self::Last,
        }
    }
}

impl InputArgs {
    /// Load configuration with CLI overrides.
    pub(crate) fn load_config(&self, settings: &CliSettings) -> Result<Config, CliError> {
        let config = Config::load(self.config.as_deref(), Some(settings))?;
        if let Some(path) = &config.config_path {
            tracing::info!(path = %path.display(), "Loaded configuration");
        }
        Ok(config)
    }

    /// Read records from the input file, or stdin when none (or `-`) is given.
    pub(crate) fn read_records(&self) -> Result<Vec<PageRecord>, CliError> {
        let records = match self.file.as_deref() {
            Some(path) if path != Path::new("-") => load_records(path)?,
            _ => {
                let mut json = String::new();
                std::io::stdin().read_to_string(&mut json)?;
                parse_records(&json)?
            }
        };
        tracing::info!(count = records.len(), "Read page records");
        Ok(records)
    }

    /// Load configuration and records, then build the hierarchy.
    pub(crate) fn build(
        &self,
        settings: &CliSettings,
    ) -> Result<(Config, Hierarchy<PageRecord>), CliError> {
        let config = self.load_config(settings)?;
        let records = self.read_records()?;
        let hierarchy = Hierarchy::build(records, &hierarchy_options(&config));
        Ok((config, hierarchy))
    }
}

/// Map configuration to hierarchy options.
pub(crate) fn hierarchy_options(config: &Config) -> HierarchyOptions {
    HierarchyOptions {
        duplicate_ids: match config.hierarchy.duplicate_ids {
            ConfigDuplicateIds::First => DuplicateIds::FirstWins,
            ConfigDuplicateIds::Last => DuplicateIds::LastWins,
        },
        orphans: match config.hierarchy.orphans {
            ConfigOrphanPlacement::Interleave => OrphanPlacement::Interleave,
            ConfigOrphanPlacement::Append => OrphanPlacement::Append,
        },
    }
}
