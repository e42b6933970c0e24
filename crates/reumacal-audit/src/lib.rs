//! reumacal-audit
//!
//! Structured audit events for score access, emitted through `tracing`.

pub mod error;
pub mod events;

pub use error::AuditError;
pub use events::{AuditAction, AuditEvent};
