//! Root command tree and dispatch

use super::{CommandSpec, Invocation};
use crate::errors::{Result, ShellError};
use crate::{log_op_end, log_op_error, log_op_start};
use bevy_core_types::RequestId;
use clap::error::{ContextKind, ContextValue, ErrorKind};
use clap::{Arg, ArgAction};
use std::ffi::OsString;
use std::io::Write;
use std::time::Instant;

const OP_DISPATCH: &str = "shell.dispatch";
const POSITIONAL_ID: &str = "__positional";
const HELP_COMMAND: &str = "help";
const RESERVED_COMMANDS: &[&str] = &[HELP_COMMAND];

/// What a successful dispatch did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The named command's handler ran to completion
    Ran { command: &'static str },
    /// Help or usage text was written instead of running a handler
    Help,
}

/// The command tree: a binary name plus its registered commands
///
/// Built once by an explicit constructor and never mutated afterwards.
#[derive(Debug, Clone)]
pub struct Root {
    name: &'static str,
    about: &'static str,
    commands: Vec<CommandSpec>,
}

impl Root {
    pub fn new(name: &'static str, about: &'static str) -> Self {
        Self {
            name,
            about,
            commands: Vec::new(),
        }
    }

    /// Register a command
    ///
    /// # Errors
    ///
    /// - `DuplicateCommand` if a sibling already has this name, or the name
    ///   is reserved for the built-in `help` command
    /// - `DuplicateFlag` if the command declares a flag name twice
    pub fn register(mut self, command: CommandSpec) -> Result<Self> {
        if RESERVED_COMMANDS.contains(&command.name) || self.command(command.name).is_some() {
            return Err(ShellError::DuplicateCommand {
                name: command.name.to_string(),
            });
        }

        for (i, flag) in command.flags.iter().enumerate() {
            if command.flags[..i].iter().any(|f| f.name == flag.name) {
                return Err(ShellError::DuplicateFlag {
                    flag: flag.name.to_string(),
                    command: command.name.to_string(),
                });
            }
        }

        self.commands.push(command);
        Ok(self)
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Registered commands in registration order
    pub fn commands(&self) -> &[CommandSpec] {
        &self.commands
    }

    pub fn command(&self, name: &str) -> Option<&CommandSpec> {
        self.commands.iter().find(|c| c.name == name)
    }

    /// Render the root usage text
    pub fn render_help(&self) -> String {
        self.to_clap().render_help().to_string()
    }

    /// Parse `args` and run the selected handler, writing its output to `out`
    ///
    /// The first element of `args` is the binary name, as with
    /// `std::env::args_os()`.
    ///
    /// # Errors
    ///
    /// - `UnknownCommand` if the first token names no registered command
    /// - `UnknownFlag` if an undeclared flag is supplied
    /// - `InvalidUsage` for any other parse failure
    /// - whatever the handler returns
    pub fn dispatch<I, T>(&self, args: I, out: &mut dyn Write) -> Result<Outcome>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        let request_id = RequestId::new();
        let started = Instant::now();

        log_op_start!(OP_DISPATCH, root = self.name, request_id = %request_id);

        let result = self.dispatch_inner(&args, out);
        let duration_ms = started.elapsed().as_millis() as u64;

        match &result {
            Ok(Outcome::Ran { command }) => {
                log_op_end!(
                    OP_DISPATCH,
                    duration_ms = duration_ms,
                    root = self.name,
                    request_id = %request_id,
                    command = *command
                );
            }
            Ok(Outcome::Help) => {
                log_op_end!(
                    OP_DISPATCH,
                    duration_ms = duration_ms,
                    root = self.name,
                    request_id = %request_id,
                    help = true
                );
            }
            Err(err) => {
                log_op_error!(
                    OP_DISPATCH,
                    err,
                    duration_ms = duration_ms,
                    root = self.name,
                    request_id = %request_id
                );
            }
        }

        result
    }

    fn dispatch_inner(&self, args: &[OsString], out: &mut dyn Write) -> Result<Outcome> {
        let matches = match self.to_clap().try_get_matches_from(args) {
            Ok(matches) => matches,
            Err(err) => return self.translate_parse_error(err, args, out),
        };

        let Some((name, sub)) = matches.subcommand() else {
            write!(out, "{}", self.render_help())?;
            return Ok(Outcome::Help);
        };

        let command = self
            .command(name)
            .ok_or_else(|| ShellError::UnknownCommand {
                name: name.to_string(),
                root: self.name.to_string(),
            })?;

        let mut invocation = Invocation::new(command.name);
        for flag in &command.flags {
            let value = sub
                .get_one::<String>(flag.name)
                .cloned()
                .unwrap_or_else(|| flag.default.to_string());
            invocation.push_flag(flag, value);
        }
        invocation.set_args(
            sub.get_many::<String>(POSITIONAL_ID)
                .map(|values| values.cloned().collect())
                .unwrap_or_default(),
        );

        tracing::debug!(
            component = module_path!(),
            command = command.name,
            invocation = ?invocation,
            "invoking handler"
        );

        (command.handler)(&invocation, out)?;
        Ok(Outcome::Ran {
            command: command.name,
        })
    }

    fn to_clap(&self) -> clap::Command {
        let mut root = clap::Command::new(self.name)
            .about(self.about)
            .arg_required_else_help(true);

        for command in &self.commands {
            let mut sub = clap::Command::new(command.name).about(command.short);
            if let Some(long) = command.long {
                sub = sub.long_about(long);
            }
            for flag in &command.flags {
                sub = sub.arg(
                    Arg::new(flag.name)
                        .long(flag.name)
                        .help(flag.help)
                        .value_name("STRING")
                        .num_args(1)
                        .default_value(flag.default)
                        .hide_default_value(flag.default.is_empty() || flag.sensitive)
                        .allow_hyphen_values(true)
                        .overrides_with(flag.name)
                        .action(ArgAction::Set),
                );
            }
            sub = sub.arg(
                Arg::new(POSITIONAL_ID)
                    .value_name("ARGS")
                    .num_args(0..)
                    .action(ArgAction::Append),
            );
            root = root.subcommand(sub);
        }

        root
    }

    fn translate_parse_error(
        &self,
        err: clap::Error,
        args: &[OsString],
        out: &mut dyn Write,
    ) -> Result<Outcome> {
        match err.kind() {
            ErrorKind::DisplayHelp
            | ErrorKind::DisplayHelpOnMissingArgumentOrSubcommand
            | ErrorKind::DisplayVersion => {
                write!(out, "{}", err.render())?;
                Ok(Outcome::Help)
            }
            ErrorKind::InvalidSubcommand => {
                let name = context_string(&err, ContextKind::InvalidSubcommand)
                    .unwrap_or_else(|| self.first_token(args));
                self.unknown_command(name, args, out)
            }
            ErrorKind::UnknownArgument => {
                let flag = context_string(&err, ContextKind::InvalidArg)
                    .unwrap_or_else(|| self.first_token(args));
                if flag.starts_with('-') {
                    let command = self.selected_command(args, &flag).to_string();
                    Err(ShellError::UnknownFlag { flag, command })
                } else {
                    self.unknown_command(flag, args, out)
                }
            }
            _ => Err(ShellError::InvalidUsage {
                message: summarize(&err),
            }),
        }
    }

    /// `help <unknown>` prints a notice plus root usage and succeeds;
    /// anything else is `UnknownCommand`
    fn unknown_command(
        &self,
        name: String,
        args: &[OsString],
        out: &mut dyn Write,
    ) -> Result<Outcome> {
        if self.first_token(args) == HELP_COMMAND {
            writeln!(out, "Unknown help topic [`{}`]", name)?;
            write!(out, "{}", self.render_help())?;
            return Ok(Outcome::Help);
        }
        Err(ShellError::UnknownCommand {
            name,
            root: self.name.to_string(),
        })
    }

    fn first_token(&self, args: &[OsString]) -> String {
        args.get(1)
            .map(|a| a.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    /// The command an offending flag was aimed at: the first command name
    /// before it, or the root
    fn selected_command(&self, args: &[OsString], flag: &str) -> &'static str {
        let with_value = format!("{}=", flag);
        args.iter()
            .skip(1)
            .filter_map(|a| a.to_str())
            .take_while(|a| *a != flag && !a.starts_with(&with_value))
            .filter(|a| !a.starts_with('-'))
            .find_map(|a| self.command(a).map(|c| c.name))
            .unwrap_or(self.name)
    }
}

fn context_string(err: &clap::Error, kind: ContextKind) -> Option<String> {
    match err.get(kind) {
        Some(ContextValue::String(s)) => Some(s.clone()),
        _ => None,
    }
}

/// First line of a clap error, without the `error: ` prefix
fn summarize(err: &clap::Error) -> String {
    let rendered = err.render().to_string();
    let first = rendered.lines().next().unwrap_or_default();
    first.strip_prefix("error: ").unwrap_or(first).to_string()
}
