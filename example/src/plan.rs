//! The action plan checklist that owns the completion ratio.

use anyhow::{Result, bail};
use tracing::info;

/// One step of the user's action plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlanTask {
    pub id: String,
    pub title: String,
    pub description: String,
    pub due_date: Option<String>,
    pub completed: bool,
}

impl PlanTask {
    fn new(id: &str, title: &str, description: &str, due_date: &str, completed: bool) -> Self {
        Self {
            id: id.to_string(),
            title: title.to_string(),
            description: description.to_string(),
            due_date: Some(due_date.to_string()),
            completed,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionPlan {
    tasks: Vec<PlanTask>,
}

impl ActionPlan {
    pub fn new(tasks: Vec<PlanTask>) -> Self {
        Self { tasks }
    }

    /// The plan shown to a new user after the eligibility check.
    pub fn sample() -> Self {
        Self::new(vec![
            PlanTask::new(
                "1",
                "Apply for Sumbangan Tunai Rahmah (STR)",
                "Submit application via official portal at https://bantuanrakyat.gov.my",
                "March 31, 2024",
                false,
            ),
            PlanTask::new(
                "2",
                "Register for Skills Training Program",
                "Enroll in GIATMARA digital skills training program",
                "April 15, 2024",
                false,
            ),
            PlanTask::new(
                "3",
                "Update Bank Account Information",
                "Ensure BSN account is active for aid disbursement",
                "Immediately",
                true,
            ),
            PlanTask::new(
                "4",
                "Attend Financial Literacy Workshop",
                "Join the online session by Bank Negara Malaysia",
                "May 5, 2024",
                false,
            ),
            PlanTask::new(
                "5",
                "Apply for Affordable Housing Scheme",
                "Submit application for Rumah Mesra Rakyat program",
                "June 30, 2024",
                false,
            ),
            PlanTask::new(
                "6",
                "Schedule Healthcare Checkup",
                "Use PeKa B40 benefits at nearest clinic",
                "April 20, 2024",
                false,
            ),
        ])
    }

    /// Marks the first `count` tasks completed and the rest open.
    pub fn with_completed(mut self, count: usize) -> Self {
        for (index, task) in self.tasks.iter_mut().enumerate() {
            task.completed = index < count;
        }
        self
    }

    pub fn tasks(&self) -> &[PlanTask] {
        &self.tasks
    }

    pub fn completed(&self) -> usize {
        self.tasks.iter().filter(|task| task.completed).count()
    }

    pub fn total(&self) -> usize {
        self.tasks.len()
    }

    /// Completed share of the plan; 0 for an empty plan.
    pub fn completion_ratio(&self) -> f32 {
        if self.tasks.is_empty() {
            0.0
        } else {
            self.completed() as f32 / self.total() as f32
        }
    }

    pub fn caption(&self) -> String {
        format!("{} of {} tasks completed", self.completed(), self.total())
    }

    /// Flips the completion of task `id` and returns its new state.
    pub fn toggle(&mut self, id: &str) -> Result<bool> {
        let Some(task) = self.tasks.iter_mut().find(|task| task.id == id) else {
            bail!("no task with id `{id}` in the action plan");
        };
        task.completed = !task.completed;
        info!(id, completed = task.completed, "toggled plan task");
        Ok(task.completed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sample_plan_has_one_task_done() {
        let plan = ActionPlan::sample();
        assert_eq!(plan.total(), 6);
        assert_eq!(plan.completed(), 1);
        assert_eq!(plan.caption(), "1 of 6 tasks completed");
        assert!((plan.completion_ratio() - 1.0 / 6.0).abs() < 1e-6);
    }

    #[test]
    fn toggle_flips_completion() {
        let mut plan = ActionPlan::sample();
        assert!(plan.toggle("1").unwrap());
        assert_eq!(plan.completed(), 2);
        assert!(!plan.toggle("1").unwrap());
        assert_eq!(plan.completed(), 1);
    }

    #[test]
    fn toggle_unknown_task_is_an_error() {
        let mut plan = ActionPlan::sample();
        let err = plan.toggle("42").unwrap_err();
        assert!(err.to_string().contains("42"));
        assert_eq!(plan.completed(), 1);
    }

    #[test]
    fn empty_plan_has_zero_ratio() {
        let plan = ActionPlan::default();
        assert_eq!(plan.completion_ratio(), 0.0);
        assert_eq!(plan.caption(), "0 of 0 tasks completed");
    }

    #[test]
    fn with_completed_saturates_at_total() {
        let plan = ActionPlan::sample().with_completed(10);
        assert_eq!(plan.completion_ratio(), 1.0);
        assert_eq!(ActionPlan::sample().with_completed(0).completed(), 0);
    }
}
