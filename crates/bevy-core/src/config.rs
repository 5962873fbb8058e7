//! Shell configuration read from the process environment
//!
//! Only logging is configurable today. Command inputs come from flags.

use crate::errors::{Result, ShellError};
use crate::logging_facility::Profile;

/// Selects the logging profile; unset keeps logging silent
pub const ENV_LOG_PROFILE: &str = "BEVY_LOG_PROFILE";

/// Process-level settings for the shell
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ShellConfig {
    /// Logging profile to install, if any
    pub log_profile: Option<Profile>,
}

impl ShellConfig {
    /// Read configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns `ShellError::InvalidConfig` if `BEVY_LOG_PROFILE` is set to
    /// an unrecognised profile name.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    ///
    /// # Errors
    ///
    /// Same as [`ShellConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_profile = match lookup(ENV_LOG_PROFILE) {
            None => None,
            Some(raw) if raw.trim().is_empty() => None,
            Some(raw) => Some(raw.parse::<Profile>().map_err(|_| {
                ShellError::InvalidConfig {
                    key: ENV_LOG_PROFILE.to_string(),
                    value: raw.clone(),
                }
            })?),
        };

        Ok(Self { log_profile })
    }
}
