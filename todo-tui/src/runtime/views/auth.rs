use crate::app::{App, View};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_login_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Char('r') | KeyCode::Char('R') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.clear_status();
            app.navigate_to(View::Register);
        }
        KeyCode::Enter => {
            if app.login_form.is_filled() {
                enqueue_action(action_tx, Action::SubmitLogin);
            } else {
                app.set_status("Enter email and password".to_string());
            }
        }
        _ => handle_credential_key(key, &mut app.login_form),
    }
}

pub(super) fn handle_register_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Esc => {
            app.clear_status();
            app.navigate_to(View::Login);
        }
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => app.quit(),
        KeyCode::Enter => {
            if app.register_form.is_filled() {
                enqueue_action(action_tx, Action::SubmitRegister);
            } else {
                app.set_status("Enter email and password".to_string());
            }
        }
        _ => handle_credential_key(key, &mut app.register_form),
    }
}

fn handle_credential_key(key: KeyEvent, form: &mut crate::app::AuthForm) {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Down | KeyCode::Up => form.switch_field(),
        KeyCode::Char('x') | KeyCode::Char('X') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            form.active_input().clear();
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            form.active_input().insert(c);
        }
        KeyCode::Backspace => form.active_input().backspace(),
        KeyCode::Left => form.active_input().move_cursor(true),
        KeyCode::Right => form.active_input().move_cursor(false),
        KeyCode::Home => form.active_input().home(),
        KeyCode::End => form.active_input().end(),
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{AuthField, TextInput};
    use crate::config::TodoConfig;

    use super::super::super::action_queue::channel;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn login_app() -> App {
        let mut app = App::new(TodoConfig::default());
        app.navigate_to(View::Login);
        app
    }

    #[test]
    fn empty_credentials_never_submit() {
        let mut app = login_app();
        let (tx, mut rx) = channel();
        handle_login_key(key(KeyCode::Enter), &mut app, &tx);
        assert!(rx.try_recv().is_err());
        assert!(app.status_message.is_some());
    }

    #[test]
    fn filled_credentials_submit_login() {
        let mut app = login_app();
        app.login_form.username = TextInput::from_str("user@example.com");
        app.login_form.password = TextInput::from_str("hunter2");
        let (tx, mut rx) = channel();

        handle_login_key(key(KeyCode::Enter), &mut app, &tx);
        assert_eq!(rx.try_recv().ok(), Some(Action::SubmitLogin));
    }

    #[test]
    fn tab_moves_between_username_and_password() {
        let mut app = login_app();
        assert_eq!(app.login_form.focused_field, AuthField::Username);
        handle_login_key(key(KeyCode::Tab), &mut app, &channel().0);
        assert_eq!(app.login_form.focused_field, AuthField::Password);
    }

    #[test]
    fn typed_characters_land_in_the_focused_field() {
        let mut app = login_app();
        let (tx, _) = channel();
        handle_login_key(key(KeyCode::Char('a')), &mut app, &tx);
        handle_login_key(key(KeyCode::Tab), &mut app, &tx);
        handle_login_key(key(KeyCode::Char('b')), &mut app, &tx);
        assert_eq!(app.login_form.username.value, "a");
        assert_eq!(app.login_form.password.value, "b");
    }
}
