//! ObjScope CLI
//!
//! Command-line front end for the object browser stack. Stands in for
//! the GUI shell: every subcommand drives a `BrowserSession`.

use clap::{Parser, Subcommand};
use objscope_core::logging_facility::{self, Profile};

mod commands;

#[derive(Debug, Parser)]
#[command(name = "objscope")]
#[command(about = "ObjScope - object graph browser and persistence toolkit", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Expand the session's object tree, optionally filtered
    Browse(commands::browse::BrowseArgs),
    /// List the members of the value at a path
    Members(commands::members::MembersArgs),
    /// Resolve a path and summarize the value it denotes
    Resolve(commands::resolve::ResolveArgs),
    /// Save the value at a path to a file
    Save(commands::save::SaveArgs),
    /// Load a file into the session and describe the result
    Load(commands::load::LoadArgs),
    /// Inspect or edit the configuration document
    Config(commands::config::ConfigArgs),
}

fn main() {
    logging_facility::init(Profile::Development);

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Browse(args) => commands::browse::execute(args),
        Commands::Members(args) => commands::members::execute(args),
        Commands::Resolve(args) => commands::resolve::execute(args),
        Commands::Save(args) => commands::save::execute(args),
        Commands::Load(args) => commands::load::execute(args),
        Commands::Config(args) => commands::config::execute(args),
    };

    if let Err(e) = result {
        eprintln!("Error [{}]: {}", e.code(), e);
        std::process::exit(1);
    }
}
