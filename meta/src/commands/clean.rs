use std::path::PathBuf;

use cavemeta_manifest::MetaToml;
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;
use crate::{
    ops,
    reports::{Report, TerminalOutput},
};

#[derive(Args)]
pub struct CleanCommand {
    /// Path to cavemeta.toml (defaults to ./cavemeta.toml)
    #[arg(short, long, default_value = "cavemeta.toml")]
    pub config: PathBuf,

    /// Preview what would be deleted without actually deleting
    #[arg(long)]
    pub dry_run: bool,
}

impl CleanCommand {
    pub fn run(&self) -> Result<()> {
        let meta_toml = MetaToml::open(&self.config).unwrap_or_exit();

        let report = ops::clean(
            &meta_toml,
            ops::clean::CleanOptions {
                dry_run: self.dry_run,
            },
        )?;

        report.render(&mut TerminalOutput::new());
        Ok(())
    }
}
