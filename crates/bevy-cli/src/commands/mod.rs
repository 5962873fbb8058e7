//! Command tree for the `bevy` binary

use bevy_core::{Result, Root};

pub mod init;
pub mod version;

pub const ROOT_NAME: &str = "bevy";

const ROOT_ABOUT: &str = "Bevy - manage a repo as a contributor-owned project";

/// Build the command tree
///
/// The tree is constructed fresh per process and handed to `Root::dispatch`.
///
/// # Errors
///
/// Fails only if two commands share a name or a command repeats a flag.
pub fn build_root() -> Result<Root> {
    Root::new(ROOT_NAME, ROOT_ABOUT)
        .register(init::command())?
        .register(version::command())
}
