//! Members command: the detail table for one selected value.

use std::path::PathBuf;

use clap::Args;

use objscope_core::errors::Result;
use objscope_core::model::{Member, MemberCategory};
use objscope_store::CONFIG_FILE;

use super::build_session;

#[derive(Debug, Args)]
pub struct MembersArgs {
    /// Path of the value to inspect (e.g. root.config or loaded['data'])
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

pub fn execute(args: MembersArgs) -> Result<()> {
    let mut session = build_session(&args.config, &args.inputs, args.force)?;
    let view = session.select(&args.path)?;

    println!("{} ({})", view.path, view.type_name);

    print_section(
        "📊 Properties",
        &view.members,
        MemberCategory::Property,
    );
    print_section("⚙️ Callables", &view.members, MemberCategory::Callable);
    print_section(
        "🔮 Reserved",
        &view.members,
        MemberCategory::ReservedProperty,
    );
    print_section(
        "🔮 Reserved callables",
        &view.members,
        MemberCategory::ReservedCallable,
    );

    Ok(())
}

fn print_section(heading: &str, members: &[Member], category: MemberCategory) {
    let rows: Vec<&Member> = members.iter().filter(|m| m.category == category).collect();
    if rows.is_empty() {
        return;
    }
    println!("{}:", heading);
    for member in rows {
        match category {
            MemberCategory::Callable | MemberCategory::ReservedCallable => {
                println!("  {}{}", member.name, member.preview);
            }
            _ => {
                println!("  {} ({}) = {}", member.name, member.type_name, member.preview);
            }
        }
    }
}
