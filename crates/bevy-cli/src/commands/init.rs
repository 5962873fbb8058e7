//! Init command
//!
//! Usage: bevy init [--passphrase <STRING>] [--wallet-path <STRING>]

use bevy_core::{CommandSpec, FlagSpec, Invocation, Result};
use bevy_core_types::Sensitive;
use std::io::Write;
use std::path::PathBuf;

pub const SETUP_MESSAGE: &str = "Setting up Bevy management";

pub const FLAG_PASSPHRASE: &str = "passphrase";
pub const FLAG_WALLET_PATH: &str = "wallet-path";

const LONG_ABOUT: &str = "Set up a repo for management by Bevy.

This will check that the repo is part of an active project, set up your
wallet, and get everything in order for participating in a project:

* Deploy a management contract to the configured blockchain
* Create a bevy config with the contract's address";

pub fn command() -> CommandSpec {
    CommandSpec::new("init", "Initialize a repo for Bevy management", execute)
        .with_long(LONG_ABOUT)
        .with_flag(FlagSpec::string(FLAG_PASSPHRASE, "", "Passphrase for a new wallet").sensitive())
        .with_flag(FlagSpec::string(FLAG_WALLET_PATH, "", "Path to a wallet to use"))
}

/// Inputs the setup steps will consume once they exist
#[derive(Debug)]
pub struct InitRequest {
    pub passphrase: Sensitive<String>,
    pub wallet_path: Option<PathBuf>,
    pub args: Vec<String>,
}

impl InitRequest {
    pub fn from_invocation(invocation: &Invocation) -> Self {
        let passphrase = invocation
            .secret(FLAG_PASSPHRASE)
            .unwrap_or_else(|| Sensitive::new(String::new()));
        let wallet_path = invocation
            .flag(FLAG_WALLET_PATH)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from);

        Self {
            passphrase,
            wallet_path,
            args: invocation.args().to_vec(),
        }
    }
}

/// Execute init command
///
/// Prints the setup line only. Contract deployment, config generation and
/// wallet setup are not implemented, so the parsed request is logged and
/// dropped.
///
/// # Errors
///
/// Returns `ShellError::Io` if the output sink cannot be written.
pub fn execute(invocation: &Invocation, out: &mut dyn Write) -> Result<()> {
    let request = InitRequest::from_invocation(invocation);

    writeln!(out, "{}", SETUP_MESSAGE)?;

    tracing::debug!(
        component = module_path!(),
        passphrase_set = request.passphrase.is_set(),
        wallet_path = ?request.wallet_path,
        arg_count = request.args.len(),
        "init has no setup steps yet"
    );

    Ok(())
}
