//! Spell designer binary.
//!
//! # Examples
//!
//! ```bash
//! spell-designer cost 0 5
//! spell-designer render "Ignites at {level}, spreads at {level+1}" --level 10
//! spell-designer --data-dir ./crates/hermetic/content/data guidelines Creo Ignem 10
//! ```

use anyhow::Result;
use clap::Parser;
use spell_designer::{Cli, logging};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    logging::setup_logging(cli.verbose)?;

    let output = cli.run()?;
    if !output.is_empty() {
        println!("{}", output);
    }
    Ok(())
}
