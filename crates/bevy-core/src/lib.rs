//! Bevy Core - command shell engine
//!
//! This crate provides everything the `bevy` binary needs apart from the
//! commands themselves:
//! - Command/flag declarations and an explicitly constructed `Root`
//! - Dispatch of process arguments to a registered handler
//! - A structured error taxonomy with stable codes
//! - The logging facility (profiles, operation macros, test capture)
//! - Environment-driven shell configuration

pub mod config;
pub mod errors;
pub mod logging_facility;
pub mod shell;

pub use bevy_core_types as types;

#[doc(hidden)]
pub use tracing as __tracing;

pub use config::ShellConfig;
pub use errors::{Result, ShellError, ShellErrorKind};
pub use shell::{CommandSpec, FlagKind, FlagSpec, Handler, Invocation, Outcome, Root};
