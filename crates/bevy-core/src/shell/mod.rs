//! Command shell: declarations, invocation and dispatch
//!
//! A `Root` owns an ordered list of `CommandSpec`s. Each command declares its
//! help text, its flags and a plain function `Handler`. Dispatch lowers the
//! tree to a `clap::Command`, parses the process arguments and calls the
//! selected handler with an `Invocation`.

mod root;

pub use root::{Outcome, Root};

use crate::errors::Result;
use bevy_core_types::Sensitive;
use std::io::Write;

/// Handler invoked when its command is selected
pub type Handler = fn(&Invocation, &mut dyn Write) -> Result<()>;

/// Value type of a declared flag
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlagKind {
    /// Takes exactly one string value
    String,
}

/// A named flag declared on a command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlagSpec {
    pub name: &'static str,
    pub kind: FlagKind,
    pub default: &'static str,
    pub help: &'static str,
    /// Value is redacted wherever an `Invocation` is formatted
    pub sensitive: bool,
}

impl FlagSpec {
    /// Declare a string flag, used as `--name VALUE` or `--name=VALUE`
    pub fn string(name: &'static str, default: &'static str, help: &'static str) -> Self {
        Self {
            name,
            kind: FlagKind::String,
            default,
            help,
            sensitive: false,
        }
    }

    /// Mark the flag value as secret
    pub fn sensitive(mut self) -> Self {
        self.sensitive = true;
        self
    }
}

/// A named command with its help text, flags and handler
#[derive(Debug, Clone)]
pub struct CommandSpec {
    pub name: &'static str,
    pub short: &'static str,
    pub long: Option<&'static str>,
    pub flags: Vec<FlagSpec>,
    pub handler: Handler,
}

impl CommandSpec {
    pub fn new(name: &'static str, short: &'static str, handler: Handler) -> Self {
        Self {
            name,
            short,
            long: None,
            flags: Vec::new(),
            handler,
        }
    }

    /// Set the long description shown by `--help`
    pub fn with_long(mut self, long: &'static str) -> Self {
        self.long = Some(long);
        self
    }

    /// Append a flag declaration; declaration order is help order
    pub fn with_flag(mut self, flag: FlagSpec) -> Self {
        self.flags.push(flag);
        self
    }

    /// Find a declared flag by name
    pub fn flag(&self, name: &str) -> Option<&FlagSpec> {
        self.flags.iter().find(|f| f.name == name)
    }
}

#[derive(Debug, Clone)]
enum FlagValue {
    Plain(String),
    Secret(Sensitive<String>),
}

impl FlagValue {
    fn as_str(&self) -> &str {
        match self {
            FlagValue::Plain(v) => v,
            FlagValue::Secret(v) => v.expose(),
        }
    }
}

/// Parsed input handed to a handler
///
/// Every declared flag is present, holding either the supplied value or its
/// default. `Debug` output redacts flags declared `sensitive`.
#[derive(Debug, Clone)]
pub struct Invocation {
    command: &'static str,
    flags: Vec<(&'static str, FlagValue)>,
    args: Vec<String>,
}

impl Invocation {
    pub(crate) fn new(command: &'static str) -> Self {
        Self {
            command,
            flags: Vec::new(),
            args: Vec::new(),
        }
    }

    pub(crate) fn push_flag(&mut self, spec: &FlagSpec, value: String) {
        let value = if spec.sensitive {
            FlagValue::Secret(Sensitive::new(value))
        } else {
            FlagValue::Plain(value)
        };
        self.flags.push((spec.name, value));
    }

    pub(crate) fn set_args(&mut self, args: Vec<String>) {
        self.args = args;
    }

    /// Name of the selected command
    pub fn command(&self) -> &'static str {
        self.command
    }

    /// Value of a declared flag; `None` only for undeclared names
    pub fn flag(&self, name: &str) -> Option<&str> {
        self.flags
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Value of a declared flag wrapped for safe passing around
    pub fn secret(&self, name: &str) -> Option<Sensitive<String>> {
        self.flag(name).map(|v| Sensitive::new(v.to_string()))
    }

    /// Positional arguments following the command name, in order
    pub fn args(&self) -> &[String] {
        &self.args
    }
}
