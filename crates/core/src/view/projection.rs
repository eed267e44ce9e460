//! Grouping and filtering

use std::sync::Arc;

use super::groups::{StageCounts, StageGroups};
use crate::stage::StageSet;
use crate::task::Task;

/// Group tasks by stage, keeping collection order within each stage
///
/// Every configured stage appears in the result, even when empty.
pub fn group_by_stage(stages: &StageSet, tasks: &[Task]) -> StageGroups {
    let groups = stages
        .keys()
        .map(|key| {
            let tasks = tasks.iter().filter(|t| t.stage == key).cloned().collect();
            (key.to_string(), tasks)
        })
        .collect();

    StageGroups::from_groups(groups)
}

pub fn counts_by_stage(groups: &StageGroups) -> StageCounts {
    StageCounts::from_counts(
        groups
            .iter()
            .map(|(key, tasks)| (key.to_string(), tasks.len()))
            .collect(),
    )
}

/// Filter each stage by priority and search text
///
/// Returns `groups` itself (same `Arc`) when no filter is active.
pub fn apply_filters(
    groups: &Arc<StageGroups>,
    search_text: &str,
    priority_only: bool,
) -> Arc<StageGroups> {
    if !has_active_filters(search_text, priority_only) {
        return Arc::clone(groups);
    }

    let query = search_text.trim().to_lowercase();
    let filtered = groups
        .iter()
        .map(|(key, tasks)| {
            let tasks = tasks
                .iter()
                .filter(|t| !priority_only || t.is_priority)
                .filter(|t| t.matches_query(&query))
                .cloned()
                .collect();
            (key.to_string(), tasks)
        })
        .collect();

    Arc::new(StageGroups::from_groups(filtered))
}

pub fn visible_count(groups: &StageGroups) -> usize {
    groups.iter().map(|(_, tasks)| tasks.len()).sum()
}

pub fn has_active_filters(search_text: &str, priority_only: bool) -> bool {
    priority_only || !search_text.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(title: &str, description: &str, stage: &str, is_priority: bool) -> Task {
        Task {
            is_priority,
            ..Task::new(title, description, stage)
        }
    }

    fn sample() -> Vec<Task> {
        vec![
            task("Fix bug", "", "todo", true),
            task("Write docs", "explain the parser", "todo", false),
            task("Ship release", "", "done", false),
            task("Triage BUG reports", "", "in-progress", false),
        ]
    }

    #[test]
    fn test_group_empty_collection() {
        let groups = group_by_stage(&StageSet::default(), &[]);
        assert_eq!(
            groups.keys().collect::<Vec<_>>(),
            vec!["todo", "in-progress", "done"]
        );
        assert_eq!(visible_count(&groups), 0);
    }

    #[test]
    fn test_group_preserves_order() {
        let tasks = sample();
        let groups = group_by_stage(&StageSet::default(), &tasks);

        let todo: Vec<&str> = groups.get("todo").iter().map(|t| t.title.as_str()).collect();
        assert_eq!(todo, vec!["Fix bug", "Write docs"]);

        let counts = counts_by_stage(&groups);
        assert_eq!(counts.get("todo"), 2);
        assert_eq!(counts.get("in-progress"), 1);
        assert_eq!(counts.get("done"), 1);
    }

    #[test]
    fn test_no_filters_is_pass_through() {
        let groups = Arc::new(group_by_stage(&StageSet::default(), &sample()));

        let filtered = apply_filters(&groups, "", false);
        assert!(Arc::ptr_eq(&groups, &filtered));

        let filtered = apply_filters(&groups, "   ", false);
        assert!(Arc::ptr_eq(&groups, &filtered));
    }

    #[test]
    fn test_search_filter() {
        let groups = Arc::new(group_by_stage(&StageSet::default(), &sample()));

        let filtered = apply_filters(&groups, "  BUG ", false);
        assert_eq!(visible_count(&filtered), 2);
        assert_eq!(filtered.get("todo")[0].title, "Fix bug");
        assert_eq!(filtered.get("in-progress")[0].title, "Triage BUG reports");
        assert!(filtered.get("done").is_empty());

        // Description matches too
        let filtered = apply_filters(&groups, "parser", false);
        assert_eq!(visible_count(&filtered), 1);
        assert_eq!(filtered.get("todo")[0].title, "Write docs");
    }

    #[test]
    fn test_priority_filter_combines_with_search() {
        let groups = Arc::new(group_by_stage(&StageSet::default(), &sample()));

        let filtered = apply_filters(&groups, "", true);
        assert_eq!(visible_count(&filtered), 1);
        assert_eq!(filtered.len(), 3);

        let filtered = apply_filters(&groups, "bug", true);
        assert_eq!(visible_count(&filtered), 1);

        let filtered = apply_filters(&groups, "docs", true);
        assert_eq!(visible_count(&filtered), 0);
    }

    #[test]
    fn test_has_active_filters() {
        assert!(!has_active_filters("", false));
        assert!(!has_active_filters(" \t", false));
        assert!(has_active_filters("x", false));
        assert!(has_active_filters("", true));
    }
}
