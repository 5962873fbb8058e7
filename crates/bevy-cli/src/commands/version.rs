//! Version command
//!
//! Usage: bevy version

use bevy_core::{CommandSpec, Invocation, Result};
use std::io::Write;

pub const VERSION_ECHO: &str = "version called";

/// Placeholder until the tool and contract versions are wired in
pub const TOOL_VERSION: &str = "0.0.0-not_implemented";

pub fn command() -> CommandSpec {
    CommandSpec::new("version", "Print the client and contract version", execute)
}

/// Execute version command
///
/// # Errors
///
/// Returns `ShellError::Io` if the output sink cannot be written.
pub fn execute(_invocation: &Invocation, out: &mut dyn Write) -> Result<()> {
    // Contract version line; the contract lookup does not exist yet.
    writeln!(out, "{}", VERSION_ECHO)?;
    writeln!(out, "{}", TOOL_VERSION)?;
    Ok(())
}
