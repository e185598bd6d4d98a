//! Aggregate views over grouped runs
//!
//! Two deliberately different policies live here. The leaderboard averages
//! per-task pass rates so every task weighs the same for a model no matter
//! how many runs it got. The task view pools runs across all models into a
//! single rate, answering how hard the task is for the field as a whole.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::Serialize;

use crate::config::BoardConfig;
use crate::grouping::Grouping;
use crate::metrics::{pass_at_k, round_pct};
use crate::record::{Outcome, RunRecord};

/// One leaderboard row
#[derive(Debug, Clone, Serialize)]
pub struct ModelSummary {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: String,
    /// Mean per-task pass@1, percent
    pub p1: f64,
    /// Mean per-task pass@5, percent
    pub p5: f64,
    /// Fraction of tasks where every run passed, percent
    #[serde(rename = "pAll")]
    pub p_all: f64,
    /// Total runs across all tasks
    pub runs: usize,
    /// Distinct tasks attempted
    pub tasks: usize,
}

/// One run in a model's detail listing
#[derive(Debug, Clone, Serialize)]
pub struct RunRow {
    pub task: String,
    pub result: Outcome,
    /// 1-based run index within the task, in arrival order
    pub run: usize,
    pub message: Option<String>,
}

/// One row of the task list, pooled across all models
#[derive(Debug, Clone, Serialize)]
pub struct TaskSummary {
    pub name: String,
    /// Pooled pass@1 over every run of the task, percent
    pub p1: f64,
    /// Pooled run count
    pub count: usize,
}

/// One run cell in a task breakdown, S for success and F for fail
#[derive(Debug, Clone, Serialize)]
pub struct RunCell {
    pub r: usize,
    pub val: char,
}

/// One model's slice of a task breakdown
#[derive(Debug, Clone, Serialize)]
pub struct BreakdownRow {
    pub model: String,
    pub p1: f64,
    pub runs: Vec<RunCell>,
}

/// The complete aggregate handed to the rendering collaborator
#[derive(Debug, Clone, Default, Serialize)]
pub struct Board {
    pub leaderboard: Vec<ModelSummary>,
    pub tasks: Vec<TaskSummary>,
    pub details: BTreeMap<String, Vec<RunRow>>,
    pub task_details: BTreeMap<String, Vec<BreakdownRow>>,
}

impl Board {
    /// Derive both aggregate views from a grouping
    pub fn build(grouping: &Grouping, config: &BoardConfig) -> Self {
        let mut board = Board::default();
        board.build_leaderboard(grouping, config);
        board.build_tasks(grouping);
        board
    }

    fn build_leaderboard(&mut self, grouping: &Grouping, config: &BoardConfig) {
        for (model, tasks) in grouping.by_model() {
            let mut p1s = Vec::with_capacity(tasks.len());
            let mut p5s = Vec::with_capacity(tasks.len());
            let mut fully_passed = 0usize;
            let mut total_runs = 0usize;
            let mut rows = Vec::new();

            for (task, runs) in tasks {
                let n = runs.len();
                let c = success_count(runs);
                total_runs += n;
                p1s.push(pass_at_k(n, c, 1));
                p5s.push(pass_at_k(n, c, 5));
                if n > 0 && c == n {
                    fully_passed += 1;
                }
                for (idx, record) in runs.iter().enumerate() {
                    rows.push(RunRow {
                        task: task.clone(),
                        result: record.outcome,
                        run: idx + 1,
                        message: record.message.clone(),
                    });
                }
            }

            let task_count = tasks.len();
            let p_all = if task_count > 0 {
                fully_passed as f64 / task_count as f64 * 100.0
            } else {
                0.0
            };

            self.leaderboard.push(ModelSummary {
                id: model.clone(),
                kind: config.model_kind(model).to_string(),
                p1: round_pct(mean(&p1s)),
                p5: round_pct(mean(&p5s)),
                p_all: round_pct(p_all),
                runs: total_runs,
                tasks: task_count,
            });

            rows.sort_by(|a, b| a.task.cmp(&b.task).then(a.run.cmp(&b.run)));
            self.details.insert(model.clone(), rows);
        }

        // Stable sort keeps ties in lexicographic model order
        self.leaderboard
            .sort_by(|a, b| b.p5.partial_cmp(&a.p5).unwrap_or(Ordering::Equal));
    }

    fn build_tasks(&mut self, grouping: &Grouping) {
        for task in grouping.task_names() {
            let mut pooled_n = 0usize;
            let mut pooled_c = 0usize;
            let mut breakdown = Vec::new();

            for (model, tasks) in grouping.by_model() {
                let Some(runs) = tasks.get(task) else {
                    continue;
                };
                let n = runs.len();
                let c = success_count(runs);
                pooled_n += n;
                pooled_c += c;
                breakdown.push(BreakdownRow {
                    model: model.clone(),
                    p1: round_pct(pass_at_k(n, c, 1)),
                    runs: runs
                        .iter()
                        .enumerate()
                        .map(|(idx, r)| RunCell {
                            r: idx + 1,
                            val: r.outcome.cell(),
                        })
                        .collect(),
                });
            }

            self.tasks.push(TaskSummary {
                name: task.clone(),
                p1: round_pct(pass_at_k(pooled_n, pooled_c, 1)),
                count: pooled_n,
            });

            breakdown.sort_by(|a, b| b.p1.partial_cmp(&a.p1).unwrap_or(Ordering::Equal));
            self.task_details.insert(task.clone(), breakdown);
        }

        // Hardest tasks first
        self.tasks
            .sort_by(|a, b| a.p1.partial_cmp(&b.p1).unwrap_or(Ordering::Equal));
    }

    /// Pooled success rate over every run on the board, percent
    pub fn overall_pass_rate(&self) -> f64 {
        let mut n = 0usize;
        let mut c = 0usize;
        for rows in self.details.values() {
            n += rows.len();
            c += rows
                .iter()
                .filter(|row| row.result == Outcome::Success)
                .count();
        }
        round_pct(pass_at_k(n, c, 1))
    }

    /// Total runs attributed across the leaderboard
    pub fn total_runs(&self) -> usize {
        self.leaderboard.iter().map(|m| m.runs).sum()
    }
}

fn success_count(runs: &[RunRecord]) -> usize {
    runs.iter().filter(|r| r.outcome.is_success()).count()
}

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        0.0
    } else {
        values.iter().sum::<f64>() / values.len() as f64
    }
}
