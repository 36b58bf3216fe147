pub mod browse;
pub mod config;
pub mod load;
pub mod members;
pub mod resolve;
pub mod save;

use std::path::{Path, PathBuf};

use clap::ValueEnum;

use objscope_core::errors::Result;
use objscope_core::model::Node;
use objscope_engine::{ApproveAllGate, BrowserSession, ConfirmGate, DenyAllGate};
use objscope_store::config::Config;

/// On-disk format selector shared by save and load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// Content-sniffed byte file
    Portable,
    /// Full-fidelity structural encoding
    Native,
}

/// Gate for non-interactive runs: `--force` approves everything,
/// otherwise confirmations are declined.
pub fn gate_for(force: bool) -> Box<dyn ConfirmGate> {
    if force {
        Box::new(ApproveAllGate)
    } else {
        Box::new(DenyAllGate)
    }
}

/// Build a session from a config file and load the given inputs into
/// the named store (portable sniffing, names from file stems).
pub fn build_session(config_path: &Path, inputs: &[PathBuf], force: bool) -> Result<BrowserSession> {
    let mut session = BrowserSession::new(Config::load(config_path));
    let mut gate = gate_for(force);
    for input in inputs {
        let name = object_name_for(input);
        session.load_portable(input, &name, gate.as_mut())?;
    }
    Ok(session)
}

/// Default store name for a loaded file: its stem.
pub fn object_name_for(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| "object".to_string())
}

/// Print a node forest as an indented outline.
pub fn print_tree(nodes: &[Node], indent: usize) {
    for node in nodes {
        println!("{}{}", "  ".repeat(indent), node.label);
        print_tree(&node.children, indent + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_object_name_from_stem() {
        assert_eq!(object_name_for(Path::new("/tmp/data.bin")), "data");
        assert_eq!(object_name_for(Path::new("archive.tar.gz")), "archive.tar");
    }
}
