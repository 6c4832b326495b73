use std::path::PathBuf;

use cavemeta_core::{File, FileRules, WriteResult};
use cavemeta_manifest::{DEFAULT_MANIFEST, MANIFEST_FILE_NAME};
use clap::Args;
use eyre::{Context, Result};

#[derive(Args)]
pub struct InitCommand {
    /// Directory to create cavemeta.toml in (defaults to current directory)
    #[arg(short, long, default_value = ".")]
    pub output: PathBuf,

    /// Overwrite an existing cavemeta.toml
    #[arg(long)]
    pub force: bool,
}

impl InitCommand {
    pub fn run(&self) -> Result<()> {
        let path = self.output.join(MANIFEST_FILE_NAME);
        let rules = if self.force {
            FileRules::default()
        } else {
            FileRules::if_missing()
        };

        let result = File::new(&path, DEFAULT_MANIFEST)
            .with_rules(rules)
            .write()
            .wrap_err("Failed to write manifest")?;

        match result {
            WriteResult::Written => {
                println!("Created {}", path.display());
                println!();
                println!("Next steps:");
                println!("  list your annotated headers under [inputs] files");
                println!("  cavemeta generate");
            }
            WriteResult::Unchanged => println!("{} is already up to date", path.display()),
            WriteResult::Skipped => {
                println!(
                    "{} already exists (use --force to overwrite)",
                    path.display()
                );
            }
        }
        Ok(())
    }
}
