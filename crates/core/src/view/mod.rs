//! Derived board views
//!
//! Everything here is a pure function of a task snapshot, the stage set and
//! the caller's view parameters. Nothing in this module mutates tasks.

mod groups;
mod params;
mod projection;
mod projector;

pub use groups::{StageCounts, StageGroups};
pub use params::ViewParams;
pub use projection::{
    apply_filters, counts_by_stage, group_by_stage, has_active_filters, visible_count,
};
pub use projector::{BoardView, ColumnSummary, EmptyState, ViewProjector};
