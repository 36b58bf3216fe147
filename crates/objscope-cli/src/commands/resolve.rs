//! Resolve command: re-locate a path and summarize the value.

use std::path::PathBuf;

use clap::Args;

use objscope_core::errors::Result;
use objscope_store::CONFIG_FILE;

use super::build_session;

#[derive(Debug, Args)]
pub struct ResolveArgs {
    /// Path expression to resolve
    pub path: String,

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

pub fn execute(args: ResolveArgs) -> Result<()> {
    let mut session = build_session(&args.config, &args.inputs, args.force)?;
    let view = session.select(&args.path)?;
    let summary = &view.summary;

    println!("Path:     {}", summary.path);
    println!("Type:     {}", summary.type_name);
    println!("Kind:     {:?}", summary.kind);
    if let Some(len) = summary.len {
        println!("Length:   {}", len);
    }
    println!("Approx:   {} bytes", summary.approx_bytes);

    Ok(())
}
