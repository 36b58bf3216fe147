//! Save command: persist the value at a path.

use std::path::PathBuf;

use clap::Args;

use objscope_core::errors::Result;
use objscope_store::CONFIG_FILE;

use super::{build_session, FormatArg};

#[derive(Debug, Args)]
pub struct SaveArgs {
    /// Path of the value to save
    pub path: String,

    /// Output file
    pub out: PathBuf,

    /// On-disk format
    #[arg(long, value_enum, default_value_t = FormatArg::Portable)]
    pub format: FormatArg,

    /// Files to load into the session first
    #[arg(long = "load")]
    pub inputs: Vec<PathBuf>,

    /// Configuration document to use
    #[arg(long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Confirm overwrites and large files without prompting
    #[arg(long)]
    pub force: bool,
}

pub fn execute(args: SaveArgs) -> Result<()> {
    let mut session = build_session(&args.config, &args.inputs, args.force)?;
    session.select(&args.path)?;

    let outcome = match args.format {
        FormatArg::Native => session.save_native(&args.out)?,
        FormatArg::Portable => session.save_portable(&args.out)?,
    };

    println!("Saved {}", outcome.path);
    println!("Method: {}", outcome.method);
    println!("Size:   {} bytes", outcome.byte_len);
    Ok(())
}
