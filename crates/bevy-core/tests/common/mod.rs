use bevy_core::{CommandSpec, FlagSpec, Invocation, Outcome, Result, Root, ShellError};
use std::io::Write;

/// Prints one line per declared flag, then one line per positional arg
pub fn echo_handler(inv: &Invocation, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "command={}", inv.command())?;
    for name in ["passphrase", "wallet-path"] {
        if let Some(value) = inv.flag(name) {
            writeln!(out, "{}={}", name, value)?;
        }
    }
    for arg in inv.args() {
        writeln!(out, "arg={}", arg)?;
    }
    Ok(())
}

pub fn ping_handler(_: &Invocation, out: &mut dyn Write) -> Result<()> {
    writeln!(out, "pong")?;
    Ok(())
}

/// A two-command root resembling the real binary
#[allow(dead_code)]
pub fn test_root(name: &'static str) -> Root {
    Root::new(name, "Test shell")
        .register(
            CommandSpec::new("init", "Set up", echo_handler)
                .with_long("Set up a repo for testing")
                .with_flag(FlagSpec::string("passphrase", "", "Passphrase").sensitive())
                .with_flag(FlagSpec::string("wallet-path", "", "Wallet path")),
        )
        .and_then(|root| root.register(CommandSpec::new("ping", "Reply", ping_handler)))
        .unwrap()
}

/// Dispatch and capture stdout as a String
#[allow(dead_code)]
pub fn run(root: &Root, args: &[&str]) -> (std::result::Result<Outcome, ShellError>, String) {
    let mut out = Vec::new();
    let argv = std::iter::once(root.name()).chain(args.iter().copied());
    let result = root.dispatch(argv, &mut out);
    (result, String::from_utf8(out).unwrap())
}
