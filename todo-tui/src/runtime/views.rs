use crate::app::{App, View};
use crossterm::event::KeyEvent;

use super::action_queue::{Action, ActionTx};

mod auth;
mod confirm_delete;
mod tasks;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

pub(super) fn handle_view_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match app.current_view {
        View::Login => auth::handle_login_key(key, app, action_tx),
        View::Register => auth::handle_register_key(key, app, action_tx),
        View::Tasks => tasks::handle_tasks_key(key, app, action_tx),
        View::ConfirmDelete => confirm_delete::handle_confirm_delete_key(key, app, action_tx),
    }
}
