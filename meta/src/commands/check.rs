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
pub struct CheckCommand {
    /// Path to cavemeta.toml (defaults to ./cavemeta.toml)
    #[arg(short, long, default_value = "cavemeta.toml")]
    pub config: PathBuf,

    /// Stop at the first missing header (overrides `on_missing`)
    #[arg(long)]
    pub strict: bool,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let meta_toml = MetaToml::open(&self.config).unwrap_or_exit();

        let report = ops::check(&meta_toml, self.strict);

        report.render(&mut TerminalOutput::new());
        if !report.is_valid() {
            std::process::exit(1);
        }
        Ok(())
    }
}
