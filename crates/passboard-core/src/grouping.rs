//! Grouping of normalized runs by model and task
//!
//! The grouping is the shared substrate for both aggregate views: the
//! leaderboard walks it model-first, the task view transposes it task-first.
//! Map iteration order carries no meaning (the aggregators impose explicit
//! sorts); the order of runs inside a task's vector is the arrival order and
//! defines the 1-based run index shown everywhere downstream.

use std::collections::{BTreeMap, BTreeSet};

use crate::record::RunRecord;

/// Two-level grouping: model -> task -> runs in arrival order
#[derive(Debug, Default)]
pub struct Grouping {
    runs: BTreeMap<String, BTreeMap<String, Vec<RunRecord>>>,
    tasks: BTreeSet<String>,
}

impl Grouping {
    /// Partition normalized records, preserving arrival order per task
    pub fn build(records: Vec<RunRecord>) -> Self {
        let mut grouping = Grouping::default();
        for record in records {
            grouping.tasks.insert(record.task.clone());
            grouping
                .runs
                .entry(record.model.clone())
                .or_default()
                .entry(record.task.clone())
                .or_default()
                .push(record);
        }
        grouping
    }

    /// All models with their per-task run lists
    pub fn by_model(&self) -> &BTreeMap<String, BTreeMap<String, Vec<RunRecord>>> {
        &self.runs
    }

    /// Every distinct task observed across all models
    pub fn task_names(&self) -> &BTreeSet<String> {
        &self.tasks
    }

    /// Number of distinct models
    pub fn model_count(&self) -> usize {
        self.runs.len()
    }

    /// Total number of runs across all models and tasks
    pub fn run_count(&self) -> usize {
        self.runs
            .values()
            .flat_map(|tasks| tasks.values())
            .map(Vec::len)
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Outcome;

    fn run(model: &str, task: &str, outcome: Outcome) -> RunRecord {
        RunRecord {
            model: model.to_string(),
            task: task.to_string(),
            outcome,
            message: None,
        }
    }

    #[test]
    fn test_build_groups_by_model_and_task() {
        let grouping = Grouping::build(vec![
            run("a", "t1", Outcome::Success),
            run("b", "t1", Outcome::Fail),
            run("a", "t2", Outcome::Fail),
            run("a", "t1", Outcome::Fail),
        ]);

        assert_eq!(grouping.model_count(), 2);
        assert_eq!(grouping.run_count(), 4);
        assert_eq!(grouping.by_model()["a"]["t1"].len(), 2);
        assert_eq!(grouping.by_model()["a"]["t2"].len(), 1);
        assert_eq!(grouping.by_model()["b"]["t1"].len(), 1);
    }

    #[test]
    fn test_task_set_spans_models() {
        let grouping = Grouping::build(vec![
            run("a", "t1", Outcome::Success),
            run("b", "t2", Outcome::Success),
        ]);
        let tasks: Vec<_> = grouping.task_names().iter().cloned().collect();
        assert_eq!(tasks, vec!["t1", "t2"]);
    }

    #[test]
    fn test_arrival_order_preserved() {
        let grouping = Grouping::build(vec![
            run("a", "t1", Outcome::Fail),
            run("a", "t1", Outcome::Success),
            run("a", "t1", Outcome::Fail),
        ]);
        let outcomes: Vec<_> = grouping.by_model()["a"]["t1"]
            .iter()
            .map(|r| r.outcome)
            .collect();
        assert_eq!(
            outcomes,
            vec![Outcome::Fail, Outcome::Success, Outcome::Fail]
        );
    }

    #[test]
    fn test_empty_input() {
        let grouping = Grouping::build(Vec::new());
        assert!(grouping.is_empty());
        assert_eq!(grouping.run_count(), 0);
        assert!(grouping.task_names().is_empty());
    }
}
