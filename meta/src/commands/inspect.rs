use std::path::PathBuf;

use cavemeta_manifest::{MarkerConfig, MetaToml};
use cavemeta_scan::{MarkerSet, Scanner};
use clap::Args;
use eyre::{Context, Result};

use super::UnwrapOrExit;
use crate::reports::{InspectReport, Report, TerminalOutput};

#[derive(Args)]
pub struct InspectCommand {
    /// Header file to scan
    pub header: PathBuf,

    /// Path to cavemeta.toml; default markers are used when it does not exist
    #[arg(short, long, default_value = "cavemeta.toml")]
    pub config: PathBuf,

    /// Print the scan result as JSON
    #[arg(long)]
    pub json: bool,
}

impl InspectCommand {
    pub fn run(&self) -> Result<()> {
        let markers = self.markers();
        let src = std::fs::read_to_string(&self.header)
            .wrap_err_with(|| format!("Failed to read '{}'", self.header.display()))?;

        let filename = self.header.display().to_string();
        let result = Scanner::new(&markers).scan(&src, &filename).unwrap_or_exit();

        if self.json {
            let json = serde_json::to_string_pretty(&result)
                .wrap_err("Failed to serialize scan result")?;
            println!("{}", json);
            return Ok(());
        }

        let report = InspectReport {
            header: self.header.clone(),
            result,
        };
        report.render(&mut TerminalOutput::new());
        Ok(())
    }

    fn markers(&self) -> MarkerSet {
        let config = if self.config.exists() {
            MetaToml::open(&self.config)
                .unwrap_or_exit()
                .manifest()
                .markers
                .clone()
        } else {
            MarkerConfig::default()
        };
        MarkerSet::new(config.class, config.property)
    }
}
