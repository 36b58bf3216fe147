//! Config command: inspect and edit the configuration document.

use std::path::PathBuf;

use clap::{Args, Subcommand};
use serde_json::Value as JsonValue;

use objscope_core::errors::{ObjScopeError, Result};
use objscope_store::config::Config;
use objscope_store::CONFIG_FILE;

#[derive(Debug, Args)]
pub struct ConfigArgs {
    /// Configuration document to operate on
    #[arg(long, default_value = CONFIG_FILE)]
    pub file: PathBuf,

    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the effective document (defaults merged under)
    Show,
    /// Print one setting
    Get { category: String, key: String },
    /// Change one setting and save
    Set {
        category: String,
        key: String,
        /// New value, parsed as JSON when possible, else kept as a string
        value: String,
    },
    /// Restore the defaults and save
    Reset,
    /// Write the effective document to another path
    Export { out: PathBuf },
    /// Replace the document with one from another path and save
    Import { from: PathBuf },
}

pub fn execute(args: ConfigArgs) -> Result<()> {
    match args.command {
        ConfigCommand::Show => {
            let config = Config::load(&args.file);
            println!("{}", render(config.document())?);
        }
        ConfigCommand::Get { category, key } => {
            let config = Config::load(&args.file);
            let value =
                config
                    .get(&category, &key)
                    .ok_or_else(|| ObjScopeError::InvalidConfig {
                        reason: format!("no setting {}.{}", category, key),
                    })?;
            println!("{}", render(value)?);
        }
        ConfigCommand::Set {
            category,
            key,
            value,
        } => {
            let mut config = Config::load(&args.file);
            let parsed: JsonValue =
                serde_json::from_str(&value).unwrap_or(JsonValue::String(value));
            config.set(&category, &key, parsed);
            config.save(&args.file)?;
            println!("Saved {}", args.file.display());
        }
        ConfigCommand::Reset => {
            let config = Config::defaults();
            config.save(&args.file)?;
            println!("Reset {}", args.file.display());
        }
        ConfigCommand::Export { out } => {
            let config = Config::load(&args.file);
            config.export(&out)?;
            println!("Exported to {}", out.display());
        }
        ConfigCommand::Import { from } => {
            let config = Config::import(&from)?;
            config.save(&args.file)?;
            println!("Imported {} into {}", from.display(), args.file.display());
        }
    }
    Ok(())
}

fn render(value: &JsonValue) -> Result<String> {
    serde_json::to_string_pretty(value).map_err(|e| ObjScopeError::Io {
        op: "render_config".to_string(),
        message: e.to_string(),
    })
}
