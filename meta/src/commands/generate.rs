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
pub struct GenerateCommand {
    /// Path to cavemeta.toml (defaults to ./cavemeta.toml)
    #[arg(short, long, default_value = "cavemeta.toml")]
    pub config: PathBuf,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,

    /// Stop at the first missing header (overrides `on_missing`)
    #[arg(long)]
    pub strict: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let meta_toml = MetaToml::open(&self.config).unwrap_or_exit();

        let report = ops::generate(
            &meta_toml,
            ops::generate::GenerateOptions {
                dry_run: self.dry_run,
                strict: self.strict,
            },
        );

        report.render(&mut TerminalOutput::new());
        if report.has_failures() {
            std::process::exit(1);
        }
        Ok(())
    }
}
