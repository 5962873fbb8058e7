//! Core types shared across the Bevy shell facilities
//!
//! - **Correlation**: `RequestId` tagging every dispatch in the logs
//! - **Sensitive data**: `Sensitive<T>` marker for automatic redaction
//! - **Schema constants**: canonical field keys and event names

pub mod correlation;
pub mod schema;
pub mod sensitive;

pub use correlation::RequestId;
pub use sensitive::Sensitive;
