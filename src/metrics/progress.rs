//! Completion percentages

use crate::models::{AssetDiligence, Task};

/// Completed over total tasks in percent; 0 when there are no tasks
pub fn diligence_progress(tasks: &[Task]) -> f64 {
    if tasks.is_empty() {
        return 0.0;
    }
    let completed = tasks.iter().filter(|t| t.is_completed()).count();
    completed as f64 / tasks.len() as f64 * 100.0
}

/// Progress across every selected asset's task list
pub fn draft_progress(diligence: &[AssetDiligence]) -> f64 {
    let tasks: Vec<Task> = diligence.iter().flat_map(|d| d.tasks.iter().cloned()).collect();
    diligence_progress(&tasks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AssetId, TaskStatus};

    #[test]
    fn test_progress() {
        let mut tasks = vec![Task::new("a"), Task::new("b"), Task::new("c"), Task::new("d")];
        assert_eq!(diligence_progress(&tasks), 0.0);
        tasks[0].status = TaskStatus::Completed;
        tasks[1].status = TaskStatus::InProgress;
        assert_eq!(diligence_progress(&tasks), 25.0);
        assert_eq!(diligence_progress(&[]), 0.0);
    }

    #[test]
    fn test_draft_progress_spans_assets() {
        let mut a = AssetDiligence::with_default_tasks(AssetId::new("1"));
        let b = AssetDiligence::with_default_tasks(AssetId::new("2"));
        a.tasks[0].status = TaskStatus::Completed;
        a.tasks[1].status = TaskStatus::Completed;
        a.tasks[2].status = TaskStatus::Completed;
        assert_eq!(draft_progress(&[a, b]), 50.0);
    }
}
