//! Load command: bring a file into the session and describe the result.

use std::path::PathBuf;

use clap::Args;

use objscope_core::errors::Result;
use objscope_core::named_store::STORE_ROOT;
use objscope_core::path::ObjectPath;
use objscope_core::traversal::expand_root;
use objscope_store::CONFIG_FILE;

use super::{build_session, gate_for, object_name_for, print_tree, FormatArg};

#[derive(Debug, Args)]
pub struct LoadArgs {
    /// File to load
    pub file: PathBuf,

    /// Store name for the loaded object (defaults to the file stem)
    #[arg(long)]
    pub name: Option<String>,

    /// On-disk format
    #[arg(long, value_enum, default_value_t = FormatArg::Portable)]
    pub format: FormatArg,

    /// Configuration document to use
    #[arg(long, default_value = CONFIG_FILE)]
    pub config: PathBuf,

    /// Confirm overwrites and large files without prompting
    #[arg(long)]
    pub force: bool,
}

pub fn execute(args: LoadArgs) -> Result<()> {
    let mut session = build_session(&args.config, &[], args.force)?;
    let name = args
        .name
        .clone()
        .unwrap_or_else(|| object_name_for(&args.file));
    let mut gate = gate_for(args.force);

    let outcome = match args.format {
        FormatArg::Native => session.load_native(&args.file, &name, gate.as_mut())?,
        FormatArg::Portable => session.load_portable(&args.file, &name, gate.as_mut())?,
    };

    println!("Loaded '{}'", outcome.name);
    println!("Type:      {}", outcome.type_name);
    println!("File size: {} bytes", outcome.byte_len);

    if let Some(report) = &outcome.report {
        println!("Interpretation: {}", report.interpretation);
        if !report.attempts.is_empty() {
            println!("Attempted: {}", report.attempts.join(", "));
        }
    }

    let value =
        session
            .store()
            .get(&name)
            .ok_or_else(|| objscope_core::errors::ObjScopeError::NameNotFound {
                name: name.clone(),
            })?;
    let tree = expand_root(
        name.clone(),
        &value,
        ObjectPath::root(STORE_ROOT).key(&name),
        session.config().max_depth(),
    );
    print_tree(&tree.children, 0);

    Ok(())
}
