use crate::app::{App, FocusedPane};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_tasks_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match app.focused_pane {
        FocusedPane::List => handle_list_key(key, app, action_tx),
        FocusedPane::Form => handle_form_key(key, app, action_tx),
    }
}

fn handle_list_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char('l') | KeyCode::Char('L') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            enqueue_action(action_tx, Action::Logout);
        }
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_previous(),
        KeyCode::Tab | KeyCode::Char('n') | KeyCode::Char('N') => {
            app.focused_pane = FocusedPane::Form;
        }
        // Space: toggle completion of the selected task.
        KeyCode::Char(' ') => {
            if let Some(todo) = app.selected_todo() {
                enqueue_action(
                    action_tx,
                    Action::ToggleComplete {
                        id: todo.id,
                        completed: !todo.completed,
                    },
                );
            }
        }
        KeyCode::Enter | KeyCode::Char('e') | KeyCode::Char('E') => {
            if let Some(todo) = app.selected_todo() {
                app.begin_edit(&todo);
            }
        }
        KeyCode::Char('d') | KeyCode::Char('D') => app.request_delete(),
        KeyCode::Char('f') | KeyCode::Char('F') => app.cycle_filter(),
        KeyCode::Char('t') | KeyCode::Char('T') => app.toggle_theme(),
        KeyCode::Char('r') | KeyCode::Char('R') => {
            enqueue_action(action_tx, Action::RefreshTodos);
        }
        _ => {}
    }
}

fn handle_form_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            app.draft.focused_field = app.draft.focused_field.next();
        }
        KeyCode::BackTab | KeyCode::Up => {
            app.draft.focused_field = app.draft.focused_field.prev();
        }
        KeyCode::Enter => {
            // Blank titles never leave the client: validate before enqueueing
            // so no request fires at all.
            match app.draft.payload() {
                Ok(_) => enqueue_action(action_tx, Action::SubmitDraft),
                Err(e) => app.set_status(e.message().to_string()),
            }
        }
        KeyCode::Esc => {
            app.cancel_edit();
            app.focused_pane = FocusedPane::List;
        }
        KeyCode::Char('x') | KeyCode::Char('X') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.draft.active_input().clear();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.draft.active_input().insert(c);
        }
        KeyCode::Backspace => app.draft.active_input().backspace(),
        KeyCode::Left => app.draft.active_input().move_cursor(true),
        KeyCode::Right => app.draft.active_input().move_cursor(false),
        KeyCode::Home => app.draft.active_input().home(),
        KeyCode::End => app.draft.active_input().end(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{TextInput, View};
    use crate::config::TodoConfig;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use time::macros::date;
    use todo_client::Todo;

    use super::super::super::action_queue::channel;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn test_app() -> App {
        let mut app = App::new(TodoConfig::default());
        app.current_view = View::Tasks;
        app
    }

    fn task(id: i32, title: &str, completed: bool) -> Todo {
        Todo {
            id,
            title: title.to_string(),
            description: None,
            due_date: Some(date!(2024 - 05 - 01)),
            completed,
        }
    }

    #[test]
    fn blank_title_submit_enqueues_nothing() {
        let mut app = test_app();
        app.focused_pane = FocusedPane::Form;
        let (tx, mut rx) = channel();

        handle_tasks_key(key(KeyCode::Enter), &mut app, &tx);

        assert!(rx.try_recv().is_err(), "no action may reach the transport");
        assert_eq!(app.status_message.as_deref(), Some("Title is required"));
    }

    #[test]
    fn valid_draft_submit_enqueues_exactly_one_action() {
        let mut app = test_app();
        app.focused_pane = FocusedPane::Form;
        app.draft.title = TextInput::from_str("Buy milk");
        let (tx, mut rx) = channel();

        handle_tasks_key(key(KeyCode::Enter), &mut app, &tx);

        assert_eq!(rx.try_recv().ok(), Some(Action::SubmitDraft));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn edit_flow_targets_the_selected_task() {
        let mut app = test_app();
        app.update_todos(vec![task(7, "A", false)]);
        let (tx, mut rx) = channel();

        handle_tasks_key(key(KeyCode::Enter), &mut app, &tx);
        assert_eq!(app.editing_id, Some(7));
        assert_eq!(app.focused_pane, FocusedPane::Form);
        assert_eq!(app.draft.title.value, "A");

        app.draft.title = TextInput::from_str("B");
        handle_tasks_key(key(KeyCode::Enter), &mut app, &tx);
        assert_eq!(rx.try_recv().ok(), Some(Action::SubmitDraft));
        // The submit handler reads editing_id; it must still point at task 7.
        assert_eq!(app.editing_id, Some(7));
    }

    #[test]
    fn space_toggles_with_the_inverted_flag() {
        let mut app = test_app();
        app.update_todos(vec![task(3, "done one", true)]);
        let (tx, mut rx) = channel();

        handle_tasks_key(key(KeyCode::Char(' ')), &mut app, &tx);
        assert_eq!(
            rx.try_recv().ok(),
            Some(Action::ToggleComplete {
                id: 3,
                completed: false
            })
        );
    }

    #[test]
    fn escape_cancels_edit_and_returns_to_list() {
        let mut app = test_app();
        app.update_todos(vec![task(7, "A", false)]);
        let (tx, _rx) = channel();

        handle_tasks_key(key(KeyCode::Enter), &mut app, &tx);
        handle_tasks_key(key(KeyCode::Esc), &mut app, &tx);

        assert_eq!(app.editing_id, None);
        assert!(app.draft.title.value.is_empty());
        assert_eq!(app.focused_pane, FocusedPane::List);
    }

    #[test]
    fn toggle_on_empty_list_enqueues_nothing() {
        let mut app = test_app();
        let (tx, mut rx) = channel();
        handle_tasks_key(key(KeyCode::Char(' ')), &mut app, &tx);
        assert!(rx.try_recv().is_err());
    }
}
