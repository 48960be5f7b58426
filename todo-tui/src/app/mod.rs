use std::time::{Duration, Instant};

use todo_client::Todo;

use crate::config::{Theme, TodoConfig};

mod edit;
mod state;
pub mod view_model;

pub use edit::{DraftError, TaskDraft};
pub use state::{
    AuthField, AuthForm, DeleteContext, Filter, FocusedPane, FormField, TextInput, View,
};

/// How long a status message stays on screen before auto-dismissing.
pub const STATUS_DISMISS_AFTER: Duration = Duration::from_secs(5);

/// Single owner of all client-side state: the cached task list, the form
/// draft, auth inputs and UI chrome. Mutated only from the event loop.
pub struct App {
    pub running: bool,
    pub current_view: View,

    // Cached task list; replaced wholesale after every mutation.
    pub todos: Vec<Todo>,
    pub filter: Filter,
    pub list_index: usize,
    pub focused_pane: FocusedPane,

    // Create/edit form (single draft, dual mode)
    pub draft: TaskDraft,
    pub editing_id: Option<i32>,

    // Auth views
    pub login_form: AuthForm,
    pub register_form: AuthForm,

    // Delete confirmation
    pub delete_context: Option<DeleteContext>,

    // Status line, auto-dismissed after STATUS_DISMISS_AFTER
    pub status_message: Option<String>,
    status_set_at: Option<Instant>,

    // Loading indicator
    pub is_loading: bool,
    pub throbber_state: throbber_widgets_tui::ThrobberState,

    pub user_email: Option<String>,
    pub config: TodoConfig,
}

impl App {
    pub fn new(config: TodoConfig) -> Self {
        Self {
            running: true,
            current_view: View::Tasks,
            todos: Vec::new(),
            filter: Filter::All,
            list_index: 0,
            focused_pane: FocusedPane::List,
            draft: TaskDraft::default(),
            editing_id: None,
            login_form: AuthForm::default(),
            register_form: AuthForm::default(),
            delete_context: None,
            status_message: None,
            status_set_at: None,
            is_loading: false,
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
            user_email: None,
            config,
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn navigate_to(&mut self, view: View) {
        self.current_view = view;
    }

    pub fn theme(&self) -> Theme {
        self.config.theme
    }

    /// Flip light/dark and persist the preference.
    pub fn toggle_theme(&mut self) {
        self.config.theme = self.config.theme.toggled();
        if let Err(e) = self.config.save() {
            self.set_status(format!("Could not save theme preference: {e}"));
        }
    }

    pub fn set_status(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_set_at = Some(Instant::now());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
        self.status_set_at = None;
    }

    /// Called every tick; drops the status line once it has aged out.
    pub fn expire_status(&mut self) {
        if let Some(set_at) = self.status_set_at {
            if set_at.elapsed() >= STATUS_DISMISS_AFTER {
                self.clear_status();
            }
        }
    }

    /// The filtered, sorted list currently on screen.
    pub fn visible_todos(&self) -> Vec<Todo> {
        view_model::derive(&self.todos, self.filter)
    }

    pub fn selected_todo(&self) -> Option<Todo> {
        self.visible_todos().into_iter().nth(self.list_index)
    }

    pub fn select_next(&mut self) {
        let len = self.visible_todos().len();
        if len > 0 && self.list_index + 1 < len {
            self.list_index += 1;
        }
    }

    pub fn select_previous(&mut self) {
        if self.list_index > 0 {
            self.list_index -= 1;
        }
    }

    pub fn cycle_filter(&mut self) {
        self.filter = self.filter.next();
        self.list_index = 0;
    }

    /// Replace the cached list after a refetch, keeping the selection in
    /// bounds.
    pub fn update_todos(&mut self, todos: Vec<Todo>) {
        self.todos = todos;
        let len = self.visible_todos().len();
        if self.list_index >= len {
            self.list_index = len.saturating_sub(1);
        }
    }

    /// Open the delete confirmation for the selected task.
    pub fn request_delete(&mut self) {
        if let Some(todo) = self.selected_todo() {
            self.delete_context = Some(DeleteContext {
                id: todo.id,
                title: todo.title,
            });
            self.navigate_to(View::ConfirmDelete);
        }
    }

    pub fn cancel_delete(&mut self) {
        self.delete_context = None;
        self.navigate_to(View::Tasks);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: i32, completed: bool) -> Todo {
        Todo {
            id,
            title: format!("task {id}"),
            description: None,
            due_date: None,
            completed,
        }
    }

    #[test]
    fn selection_stays_in_bounds_after_refetch() {
        let mut app = App::new(TodoConfig::default());
        app.update_todos(vec![task(1, false), task(2, false), task(3, false)]);
        app.select_next();
        app.select_next();
        assert_eq!(app.list_index, 2);

        app.update_todos(vec![task(1, false)]);
        assert_eq!(app.list_index, 0);

        app.update_todos(Vec::new());
        assert_eq!(app.list_index, 0);
        assert!(app.selected_todo().is_none());
    }

    #[test]
    fn cycling_filter_resets_selection() {
        let mut app = App::new(TodoConfig::default());
        app.update_todos(vec![task(1, true), task(2, false)]);
        app.select_next();
        app.cycle_filter();
        assert_eq!(app.filter, Filter::Incomplete);
        assert_eq!(app.list_index, 0);
    }

    #[test]
    fn request_delete_captures_the_selected_task() {
        let mut app = App::new(TodoConfig::default());
        app.update_todos(vec![task(1, false), task(2, false)]);
        app.select_next();
        app.request_delete();
        let ctx = app.delete_context.as_ref().expect("delete context");
        assert_eq!(ctx.id, 2);
        assert_eq!(app.current_view, View::ConfirmDelete);
    }
}
