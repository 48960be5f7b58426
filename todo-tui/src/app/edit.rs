use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::Date;
use todo_client::{NewTodo, Todo};

use super::state::{FormField, TextInput};
use super::App;

const DUE_DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");

/// The one create/edit form. When `App::editing_id` is set the draft
/// mirrors an existing task; otherwise submitting creates a new one.
#[derive(Debug, Clone, Default)]
pub struct TaskDraft {
    pub title: TextInput,
    pub description: TextInput,
    pub due_date: TextInput,
    pub focused_field: FormField,
}

impl TaskDraft {
    pub fn from_todo(todo: &Todo) -> Self {
        let due = todo
            .due_date
            .map(|d| d.format(DUE_DATE_FORMAT).unwrap_or_default())
            .unwrap_or_default();
        Self {
            title: TextInput::from_str(&todo.title),
            description: TextInput::from_str(todo.description.as_deref().unwrap_or("")),
            due_date: TextInput::from_str(&due),
            focused_field: FormField::Title,
        }
    }

    pub fn clear(&mut self) {
        self.title.clear();
        self.description.clear();
        self.due_date.clear();
        self.focused_field = FormField::Title;
    }

    pub fn active_input(&mut self) -> &mut TextInput {
        match self.focused_field {
            FormField::Title => &mut self.title,
            FormField::Description => &mut self.description,
            FormField::DueDate => &mut self.due_date,
        }
    }

    /// Validate the draft into a request payload. Runs before any request
    /// is sent; a failing draft issues no HTTP traffic at all.
    pub fn payload(&self) -> Result<NewTodo, DraftError> {
        let title = self.title.value.trim();
        if title.is_empty() {
            return Err(DraftError::EmptyTitle);
        }

        let due_raw = self.due_date.value.trim();
        let due_date = if due_raw.is_empty() {
            None
        } else {
            Some(Date::parse(due_raw, DUE_DATE_FORMAT).map_err(|_| DraftError::BadDueDate)?)
        };

        let description = self.description.value.trim();
        Ok(NewTodo {
            title: title.to_string(),
            description: if description.is_empty() {
                None
            } else {
                Some(description.to_string())
            },
            due_date,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DraftError {
    EmptyTitle,
    BadDueDate,
}

impl DraftError {
    pub fn message(self) -> &'static str {
        match self {
            DraftError::EmptyTitle => "Title is required",
            DraftError::BadDueDate => "Due date must be YYYY-MM-DD",
        }
    }
}

impl App {
    /// Start editing an existing task. Any unsaved new-task draft is
    /// discarded; the same field set is reused.
    pub fn begin_edit(&mut self, todo: &Todo) {
        self.editing_id = Some(todo.id);
        self.draft = TaskDraft::from_todo(todo);
        self.focused_pane = super::FocusedPane::Form;
    }

    /// Drop edit mode and reset the draft to empty defaults.
    pub fn cancel_edit(&mut self) {
        self.editing_id = None;
        self.draft.clear();
    }

    /// Called after a successful create or update.
    pub fn finish_submit(&mut self) {
        self.editing_id = None;
        self.draft.clear();
        self.focused_pane = super::FocusedPane::List;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TodoConfig;
    use time::macros::date;

    fn existing_task() -> Todo {
        Todo {
            id: 7,
            title: "A".to_string(),
            description: Some("notes".to_string()),
            due_date: Some(date!(2024 - 05 - 01)),
            completed: false,
        }
    }

    #[test]
    fn blank_title_is_rejected() {
        let mut draft = TaskDraft::default();
        assert_eq!(draft.payload(), Err(DraftError::EmptyTitle));
        draft.title = TextInput::from_str("   \t");
        assert_eq!(draft.payload(), Err(DraftError::EmptyTitle));
    }

    #[test]
    fn malformed_due_date_is_rejected() {
        let mut draft = TaskDraft::default();
        draft.title = TextInput::from_str("Buy milk");
        draft.due_date = TextInput::from_str("tomorrow");
        assert_eq!(draft.payload(), Err(DraftError::BadDueDate));
    }

    #[test]
    fn valid_draft_builds_the_request_payload() {
        let mut draft = TaskDraft::default();
        draft.title = TextInput::from_str("  Buy milk ");
        draft.due_date = TextInput::from_str("2024-05-01");
        let payload = draft.payload().unwrap();
        assert_eq!(payload.title, "Buy milk");
        assert_eq!(payload.description, None);
        assert_eq!(payload.due_date, Some(date!(2024 - 05 - 01)));
    }

    #[test]
    fn begin_edit_mirrors_the_task_into_the_draft() {
        let mut app = App::new(TodoConfig::default());
        app.draft.title = TextInput::from_str("unsaved new task");
        app.begin_edit(&existing_task());

        assert_eq!(app.editing_id, Some(7));
        assert_eq!(app.draft.title.value, "A");
        assert_eq!(app.draft.description.value, "notes");
        assert_eq!(app.draft.due_date.value, "2024-05-01");
    }

    #[test]
    fn edited_draft_submits_the_changed_title() {
        let mut app = App::new(TodoConfig::default());
        app.begin_edit(&existing_task());
        app.draft.title = TextInput::from_str("B");

        let payload = app.draft.payload().unwrap();
        assert_eq!(app.editing_id, Some(7));
        assert_eq!(payload.title, "B");

        app.finish_submit();
        assert_eq!(app.editing_id, None);
        assert!(app.draft.title.value.is_empty());
        assert!(app.draft.due_date.value.is_empty());
    }

    #[test]
    fn cancel_edit_resets_both_id_and_draft() {
        let mut app = App::new(TodoConfig::default());
        app.begin_edit(&existing_task());
        app.cancel_edit();
        assert_eq!(app.editing_id, None);
        assert!(app.draft.title.value.is_empty());
    }
}
