//! Due-diligence helpers: document intake and task reminders

use std::fs;
use std::path::Path;

use tracing::info;

use crate::error::{DealDeskError, DealResult};
use crate::models::{Document, DocumentKind, Task, TaskId};

/// Build a document record from a file on disk
///
/// Only the name and size are read; the file itself is not copied.
pub fn document_from_path(
    path: &Path,
    kind: DocumentKind,
    task_id: Option<TaskId>,
) -> DealResult<Document> {
    let metadata = fs::metadata(path)
        .map_err(|e| DealDeskError::Io(format!("Cannot read {}: {}", path.display(), e)))?;
    if !metadata.is_file() {
        return Err(DealDeskError::Io(format!("{} is not a file", path.display())));
    }

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .ok_or_else(|| DealDeskError::Io(format!("{} has no file name", path.display())))?;

    let mut document = Document::new(name, kind, metadata.len());
    if let Some(task_id) = task_id {
        document = document.for_task(task_id);
    }
    info!(document = %document.name, size = document.size, "Attached document");
    Ok(document)
}

/// A reminder notification for an assigned task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub title: &'static str,
    pub message: String,
}

/// Reminder for a task's assignee
///
/// Nothing is delivered; the caller shows the message as a notification.
pub fn reminder_message(task: &Task) -> DealResult<Reminder> {
    let email = task
        .assignee
        .as_deref()
        .filter(|e| !e.trim().is_empty())
        .ok_or_else(|| {
            DealDeskError::Validation(format!("Task '{}' has no assignee", task.name))
        })?;

    info!(task = %task.name, assignee = email, "Reminder requested");
    Ok(Reminder {
        title: "Reminder Sent",
        message: format!("Email sent to {} for task: {}", email, task.name),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_document_from_path() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("title-deed.pdf");
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(&[0u8; 2048]).unwrap();

        let task = Task::new("Legal review");
        let doc = document_from_path(&path, DocumentKind::Legal, Some(task.id)).unwrap();
        assert_eq!(doc.name, "title-deed.pdf");
        assert_eq!(doc.size, 2048);
        assert_eq!(doc.size_label(), "2.0 KB");
        assert_eq!(doc.task_id, Some(task.id));
    }

    #[test]
    fn test_missing_path_is_io_error() {
        let temp_dir = TempDir::new().unwrap();
        let err = document_from_path(&temp_dir.path().join("nope.pdf"), DocumentKind::Legal, None)
            .unwrap_err();
        assert!(matches!(err, DealDeskError::Io(_)));

        let err = document_from_path(temp_dir.path(), DocumentKind::Legal, None).unwrap_err();
        assert!(matches!(err, DealDeskError::Io(_)));
    }

    #[test]
    fn test_reminder() {
        let mut task = Task::new("Financials review");
        assert!(reminder_message(&task).unwrap_err().is_validation());

        task.assignee = Some("anna.schmidt@example.com".into());
        let reminder = reminder_message(&task).unwrap();
        assert_eq!(reminder.title, "Reminder Sent");
        assert_eq!(
            reminder.message,
            "Email sent to anna.schmidt@example.com for task: Financials review"
        );
    }
}
