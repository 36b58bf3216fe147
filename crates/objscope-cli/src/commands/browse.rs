//! Browse command: expand and print the session tree.

use std::path::PathBuf;

use clap::Args;
use serde_json::json;

use objscope_core::errors::Result;
use objscope_store::CONFIG_FILE;

use super::{build_session, print_tree};

#[derive(Debug, Args)]
pub struct BrowseArgs {
    /// Files to load into the session before browsing
    pub inputs: Vec<PathBuf>,

    /// Configuration document to use
    #[arg(long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Only show branches whose labels match this query
    #[arg(long)]
    pub query: Option<String>,

    /// Override the configured expansion depth
    #[arg(long)]
    pub depth: Option<usize>,

    /// Confirm overwrites and large files without prompting
    #[arg(long)]
    pub force: bool,
}

pub fn execute(args: BrowseArgs) -> Result<()> {
    let mut session = build_session(&args.config, &args.inputs, args.force)?;

    if let Some(depth) = args.depth {
        session
            .config_mut()
            .set("browser", "max_depth", json!(depth));
    }

    let nodes = match &args.query {
        Some(query) => session.search(query),
        None => session.tree(),
    };

    print_tree(&nodes, 0);
    Ok(())
}
