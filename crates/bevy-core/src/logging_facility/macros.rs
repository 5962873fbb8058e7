//! Canonical logging macros
//!
//! Every operation boundary in the shell is logged through these so that
//! field names and event names stay uniform.

/// Log the start of an operation
///
/// # Example
///
/// ```
/// # use bevy_core::log_op_start;
/// log_op_start!("shell.dispatch");
/// log_op_start!("shell.dispatch", root = "bevy");
/// ```
#[macro_export]
macro_rules! log_op_start {
    ($op:expr) => {
        $crate::__tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::types::schema::EVENT_START,
        );
    };
    ($op:expr, $($field:tt)*) => {
        $crate::__tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::types::schema::EVENT_START,
            $($field)*
        );
    };
}

/// Log the successful end of an operation
///
/// # Example
///
/// ```
/// # use bevy_core::log_op_end;
/// log_op_end!("shell.dispatch", duration_ms = 3);
/// ```
#[macro_export]
macro_rules! log_op_end {
    ($op:expr, duration_ms = $duration:expr) => {
        $crate::__tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::types::schema::EVENT_END,
            duration_ms = $duration,
        );
    };
    ($op:expr, duration_ms = $duration:expr, $($field:tt)*) => {
        $crate::__tracing::info!(
            component = module_path!(),
            op = $op,
            event = $crate::types::schema::EVENT_END,
            duration_ms = $duration,
            $($field)*
        );
    };
}

/// Log an operation error
///
/// `$err` must be a `ShellError` (or a reference to one).
///
/// # Example
///
/// ```
/// # use bevy_core::{log_op_error, ShellError};
/// let err = ShellError::UnknownCommand { name: "bogus".into(), root: "bevy".into() };
/// log_op_error!("shell.dispatch", err, duration_ms = 1);
/// ```
#[macro_export]
macro_rules! log_op_error {
    ($op:expr, $err:expr, duration_ms = $duration:expr) => {{
        let shell_err: &$crate::errors::ShellError = &$err;
        $crate::__tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?shell_err.kind(),
            err.code = shell_err.code(),
        );
    }};
    ($op:expr, $err:expr, duration_ms = $duration:expr, $($field:tt)*) => {{
        let shell_err: &$crate::errors::ShellError = &$err;
        $crate::__tracing::error!(
            component = module_path!(),
            op = $op,
            event = $crate::types::schema::EVENT_END_ERROR,
            duration_ms = $duration,
            err.kind = ?shell_err.kind(),
            err.code = shell_err.code(),
            $($field)*
        );
    }};
}
