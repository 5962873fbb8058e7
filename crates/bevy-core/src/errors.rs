use thiserror::Error;

/// Result type alias using ShellError
pub type Result<T> = std::result::Result<T, ShellError>;

/// Canonical error kind taxonomy
///
/// Each kind maps to a stable error code usable for programmatic handling,
/// log assertions and test expectations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShellErrorKind {
    // Dispatch
    UnknownCommand,
    UnknownFlag,
    InvalidUsage,

    // Registration
    DuplicateCommand,
    DuplicateFlag,

    // Configuration
    InvalidConfig,

    // Output
    Io,
}

impl ShellErrorKind {
    /// Get the stable error code for this kind
    pub fn code(&self) -> &'static str {
        match self {
            ShellErrorKind::UnknownCommand => "ERR_UNKNOWN_COMMAND",
            ShellErrorKind::UnknownFlag => "ERR_UNKNOWN_FLAG",
            ShellErrorKind::InvalidUsage => "ERR_INVALID_USAGE",
            ShellErrorKind::DuplicateCommand => "ERR_DUPLICATE_COMMAND",
            ShellErrorKind::DuplicateFlag => "ERR_DUPLICATE_FLAG",
            ShellErrorKind::InvalidConfig => "ERR_INVALID_CONFIG",
            ShellErrorKind::Io => "ERR_IO",
        }
    }
}

/// Error taxonomy for shell registration, configuration and dispatch
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ShellError {
    /// The first token names no registered command
    #[error("unknown command \"{name}\" for \"{root}\"")]
    UnknownCommand { name: String, root: String },

    /// A flag was supplied that the selected command does not declare
    #[error("unknown flag: {flag}")]
    UnknownFlag { flag: String, command: String },

    /// Arguments could not be parsed for another reason (e.g. a missing flag value)
    #[error("invalid usage: {message}")]
    InvalidUsage { message: String },

    /// A command with this name is already registered on the root
    #[error("command \"{name}\" is already registered")]
    DuplicateCommand { name: String },

    /// A command declares the same flag more than once
    #[error("flag \"--{flag}\" is declared more than once on command \"{command}\"")]
    DuplicateFlag { flag: String, command: String },

    /// An environment setting holds a value the shell does not understand
    #[error("invalid value \"{value}\" for {key}")]
    InvalidConfig { key: String, value: String },

    /// Writing command or help output failed
    #[error("I/O error: {message}")]
    Io { message: String },
}

impl ShellError {
    /// Get the error kind
    pub fn kind(&self) -> ShellErrorKind {
        match self {
            ShellError::UnknownCommand { .. } => ShellErrorKind::UnknownCommand,
            ShellError::UnknownFlag { .. } => ShellErrorKind::UnknownFlag,
            ShellError::InvalidUsage { .. } => ShellErrorKind::InvalidUsage,
            ShellError::DuplicateCommand { .. } => ShellErrorKind::DuplicateCommand,
            ShellError::DuplicateFlag { .. } => ShellErrorKind::DuplicateFlag,
            ShellError::InvalidConfig { .. } => ShellErrorKind::InvalidConfig,
            ShellError::Io { .. } => ShellErrorKind::Io,
        }
    }

    /// Get the stable error code
    pub fn code(&self) -> &'static str {
        self.kind().code()
    }

    /// Whether the user should be pointed at `--help`
    pub fn is_usage_error(&self) -> bool {
        matches!(
            self.kind(),
            ShellErrorKind::UnknownCommand
                | ShellErrorKind::UnknownFlag
                | ShellErrorKind::InvalidUsage
        )
    }
}

impl From<std::io::Error> for ShellError {
    fn from(err: std::io::Error) -> Self {
        ShellError::Io {
            message: err.to_string(),
        }
    }
}
