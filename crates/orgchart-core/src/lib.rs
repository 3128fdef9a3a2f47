//! OrgChart Core - in-memory hierarchy manager
//!
//! This crate provides the member tree and the operations on it:
//! - Member and move-record models
//! - Lookup by id and supervisor search over the tree
//! - Reparenting with cycle rejection and all-or-nothing mutation
//! - A linear move history with undo/redo
//! - Chart validation, pre-order traversal and shape digests
//! - A serde command boundary for scripted replays

pub mod apply;
pub mod commands;
pub mod errors;
pub mod history;
pub mod logging_facility;
pub mod manager;
pub mod model;
pub mod ops;
pub mod rules;
pub mod snapshot;
pub mod traversal;

// Used by the logging macros so callers need no direct dependency.
#[doc(hidden)]
pub use orgchart_core_types as core_types;
#[doc(hidden)]
pub use tracing;

// Re-export commonly used types
pub use apply::{apply, CommandOutcome};
pub use commands::Command;
pub use errors::{ExError, ExErrorKind, OrgChartError, Result};
pub use history::History;
pub use manager::HierarchyManager;
pub use model::{Member, MemberId, MoveRecord};
pub use ops::Chart;
