//! Memoized board projection
//!
//! Caches the grouping per task snapshot and the full view per
//! `(snapshot, params)` pair. Snapshots are compared by `Arc` identity; the
//! cache holds its own clone so an address cannot be reused while cached.

use std::sync::Arc;

use serde::Serialize;

use super::groups::{StageCounts, StageGroups};
use super::params::ViewParams;
use super::projection::{apply_filters, counts_by_stage, group_by_stage, visible_count};
use crate::stage::StageSet;
use crate::task::Task;

/// Why a column renders no cards
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum EmptyState {
    /// The column has tasks but none survive the filters
    NoMatches,
    /// The column has no tasks at all
    Empty,
}

impl EmptyState {
    pub fn message(self) -> &'static str {
        match self {
            Self::NoMatches => "No tasks match your filters.",
            Self::Empty => "No tasks here yet. Drop a card to get started.",
        }
    }
}

/// Display summary for one column
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSummary {
    pub key: String,
    pub label: String,
    pub visible: usize,
    pub total: usize,
    /// `"3"` or, with filters active, `"1/3"`
    pub badge: String,
    pub badge_label: String,
    pub empty_state: Option<EmptyState>,
}

impl ColumnSummary {
    fn new(key: &str, label: &str, visible: usize, total: usize, filtered: bool) -> Self {
        let (badge, badge_label) = if filtered {
            (
                format!("{}/{}", visible, total),
                format!("{} of {} tasks", visible, total),
            )
        } else {
            (visible.to_string(), format!("{} tasks", visible))
        };

        let empty_state = match visible {
            0 if filtered && total > 0 => Some(EmptyState::NoMatches),
            0 => Some(EmptyState::Empty),
            _ => None,
        };

        Self {
            key: key.to_string(),
            label: label.to_string(),
            visible,
            total,
            badge,
            badge_label,
            empty_state,
        }
    }
}

/// Everything a board renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardView {
    pub grouped: Arc<StageGroups>,
    pub totals: StageCounts,
    pub filtered: Arc<StageGroups>,
    pub visible_count: usize,
    pub total_count: usize,
    pub has_active_filters: bool,
    pub columns: Vec<ColumnSummary>,
}

struct GroupCache {
    tasks: Arc<[Task]>,
    grouped: Arc<StageGroups>,
    totals: StageCounts,
}

struct ViewCache {
    tasks: Arc<[Task]>,
    params: ViewParams,
    view: Arc<BoardView>,
}

pub struct ViewProjector {
    stages: StageSet,
    groups: Option<GroupCache>,
    view: Option<ViewCache>,
}

impl ViewProjector {
    pub fn new(stages: StageSet) -> Self {
        Self {
            stages,
            groups: None,
            view: None,
        }
    }

    pub fn stages(&self) -> &StageSet {
        &self.stages
    }

    /// Project `tasks` through `params`, reusing cached work when possible
    pub fn project(&mut self, tasks: &Arc<[Task]>, params: &ViewParams) -> Arc<BoardView> {
        if let Some(cache) = &self.view {
            if Arc::ptr_eq(&cache.tasks, tasks) && cache.params == *params {
                return Arc::clone(&cache.view);
            }
        }

        let (grouped, totals) = self.grouped(tasks);
        let filtered = apply_filters(&grouped, &params.search_text, params.priority_only);
        let has_active_filters = params.has_active_filters();

        let columns = self
            .stages
            .iter()
            .map(|stage| {
                ColumnSummary::new(
                    &stage.key,
                    &stage.label,
                    filtered.get(&stage.key).len(),
                    totals.get(&stage.key),
                    has_active_filters,
                )
            })
            .collect();

        let view = Arc::new(BoardView {
            visible_count: visible_count(&filtered),
            total_count: tasks.len(),
            grouped,
            totals,
            filtered,
            has_active_filters,
            columns,
        });

        self.view = Some(ViewCache {
            tasks: Arc::clone(tasks),
            params: params.clone(),
            view: Arc::clone(&view),
        });
        view
    }

    fn grouped(&mut self, tasks: &Arc<[Task]>) -> (Arc<StageGroups>, StageCounts) {
        if let Some(cache) = &self.groups {
            if Arc::ptr_eq(&cache.tasks, tasks) {
                return (Arc::clone(&cache.grouped), cache.totals.clone());
            }
        }

        let grouped = Arc::new(group_by_stage(&self.stages, tasks));
        let totals = counts_by_stage(&grouped);

        self.groups = Some(GroupCache {
            tasks: Arc::clone(tasks),
            grouped: Arc::clone(&grouped),
            totals: totals.clone(),
        });
        (grouped, totals)
    }
}
