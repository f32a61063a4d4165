//! Quantity resolution over a collection of articles.
//!
//! Mutation happens outside the engine; callers re-run [`recalculate_all`]
//! over the whole collection afterwards and read the refreshed `quantity`
//! fields. Resolution is a pure computation over the snapshot it is handed:
//! no I/O, no shared state, no dirty tracking. Broken references (dangling
//! targets, cycles) never raise; they degrade to zero contributions and are
//! reported by the audit pass as data.

pub mod diagnostics;
pub mod projection;
pub mod recalc;
pub mod resolver;

#[cfg(test)]
mod tests;

pub use diagnostics::audit_links;
pub use projection::{RowProjection, project_display};
pub use recalc::{RecalcReport, RecalcStatus, recalculate_all, recalculate_with_report};
pub use resolver::{AncestorPath, resolve_quantity};
