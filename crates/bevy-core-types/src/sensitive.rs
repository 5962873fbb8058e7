//! Sensitive data marker for automatic redaction
//!
//! `Sensitive<T>` keeps secrets such as a wallet passphrase out of log
//! output and error messages.

use std::fmt;

const REDACTED: &str = "***REDACTED***";

/// Wrapper for sensitive data that redacts itself in Debug and Display
///
/// # Example
///
/// ```
/// use bevy_core_types::Sensitive;
///
/// let passphrase = Sensitive::new("correct horse battery staple");
/// assert_eq!(format!("{:?}", passphrase), "***REDACTED***");
/// assert_eq!(format!("{}", passphrase), "***REDACTED***");
///
/// assert_eq!(passphrase.expose(), &"correct horse battery staple");
/// ```
pub struct Sensitive<T>(T);

impl<T> Sensitive<T> {
    /// Wrap a sensitive value
    pub fn new(value: T) -> Self {
        Self(value)
    }

    /// Expose the underlying sensitive value
    ///
    /// Only call this where the secret is actually consumed, e.g. when
    /// unlocking a wallet.
    pub fn expose(&self) -> &T {
        &self.0
    }
}

impl<T: AsRef<str>> Sensitive<T> {
    /// Whether a non-empty secret was supplied
    ///
    /// Safe to log: reveals presence, not content.
    pub fn is_set(&self) -> bool {
        !self.0.as_ref().is_empty()
    }
}

impl<T> fmt::Debug for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl<T> fmt::Display for Sensitive<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

impl<T: Clone> Clone for Sensitive<T> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}
