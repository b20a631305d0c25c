//! Due-diligence tasks and documents

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::{AssetId, DocumentId, TaskId};

/// Names of the tasks every newly selected asset starts with
pub const DEFAULT_TASKS: [&str; 3] = [
    "Legal review",
    "Environmental and sustainability review",
    "Financials review",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    NotStarted,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// Cycle forward through the statuses, wrapping back to NotStarted
    pub fn cycle(self) -> Self {
        match self {
            Self::NotStarted => Self::InProgress,
            Self::InProgress => Self::Completed,
            Self::Completed => Self::NotStarted,
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotStarted => write!(f, "Not Started"),
            Self::InProgress => write!(f, "In Progress"),
            Self::Completed => write!(f, "Completed"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub name: String,
    #[serde(default)]
    pub status: TaskStatus,
    /// Assignee e-mail address
    #[serde(default)]
    pub assignee: Option<String>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
}

impl Task {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: TaskId::new(),
            name: name.into(),
            status: TaskStatus::NotStarted,
            assignee: None,
            due_date: None,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    #[default]
    Legal,
    Financial,
    Technical,
}

impl DocumentKind {
    pub const ALL: [DocumentKind; 3] = [Self::Legal, Self::Financial, Self::Technical];
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legal => write!(f, "Legal"),
            Self::Financial => write!(f, "Financial"),
            Self::Technical => write!(f, "Technical"),
        }
    }
}

impl std::str::FromStr for DocumentKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "legal" => Ok(Self::Legal),
            "financial" => Ok(Self::Financial),
            "technical" => Ok(Self::Technical),
            other => Err(format!("Unknown document type: {}", other)),
        }
    }
}

/// An uploaded due-diligence document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub name: String,
    pub kind: DocumentKind,
    pub uploaded_at: DateTime<Utc>,
    /// File size in bytes
    pub size: u64,
    /// Task this document supports
    #[serde(default)]
    pub task_id: Option<TaskId>,
}

impl Document {
    pub fn new(name: impl Into<String>, kind: DocumentKind, size: u64) -> Self {
        Self {
            id: DocumentId::new(),
            name: name.into(),
            kind,
            uploaded_at: Utc::now(),
            size,
            task_id: None,
        }
    }

    pub fn for_task(mut self, task_id: TaskId) -> Self {
        self.task_id = Some(task_id);
        self
    }

    /// Size for display, e.g. "2.4 KB"
    pub fn size_label(&self) -> String {
        match self.size {
            s if s >= 1_048_576 => format!("{:.1} MB", s as f64 / 1_048_576.0),
            s if s >= 1024 => format!("{:.1} KB", s as f64 / 1024.0),
            s => format!("{} B", s),
        }
    }
}

/// Tasks and documents tracked for one selected asset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetDiligence {
    pub asset_id: AssetId,
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub documents: Vec<Document>,
}

impl AssetDiligence {
    /// Diligence entry seeded with the default task list
    pub fn with_default_tasks(asset_id: AssetId) -> Self {
        Self {
            asset_id,
            tasks: DEFAULT_TASKS.iter().map(|name| Task::new(*name)).collect(),
            documents: Vec::new(),
        }
    }

    pub fn task(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn task_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    pub fn completed_tasks(&self) -> usize {
        self.tasks.iter().filter(|t| t.is_completed()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_tasks() {
        let dd = AssetDiligence::with_default_tasks(AssetId::new("1"));
        let names: Vec<_> = dd.tasks.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, DEFAULT_TASKS);
        assert!(dd.tasks.iter().all(|t| t.status == TaskStatus::NotStarted));
        assert_eq!(dd.completed_tasks(), 0);
    }

    #[test]
    fn test_status_cycle() {
        assert_eq!(TaskStatus::NotStarted.cycle(), TaskStatus::InProgress);
        assert_eq!(TaskStatus::Completed.cycle(), TaskStatus::NotStarted);
        assert_eq!(TaskStatus::InProgress.to_string(), "In Progress");
    }

    #[test]
    fn test_size_label() {
        assert_eq!(Document::new("a.pdf", DocumentKind::Legal, 512).size_label(), "512 B");
        assert_eq!(Document::new("a.pdf", DocumentKind::Legal, 2048).size_label(), "2.0 KB");
        assert_eq!(
            Document::new("a.pdf", DocumentKind::Legal, 3 * 1_048_576).size_label(),
            "3.0 MB"
        );
    }
}
