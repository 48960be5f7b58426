use anyhow::Result;
use todo_client::{TodoApiError, TodoClient};

use crate::app::{App, View};
use crate::session_store::SessionStore;

use super::action_queue::Action;

pub(super) async fn run_action(
    action: Action,
    app: &mut App,
    client: &mut TodoClient,
    store: &SessionStore,
) -> Result<()> {
    match action {
        Action::SubmitDraft => submit_draft(app, client).await,
        Action::ToggleComplete { id, completed } => toggle_complete(app, client, id, completed).await,
        Action::ConfirmDelete => confirm_delete(app, client).await,
        Action::RefreshTodos => refresh_todos(app, client).await,
        Action::SubmitLogin => submit_login(app, client, store).await,
        Action::SubmitRegister => submit_register(app, client).await,
        Action::Logout => logout(app, client, store),
    }
    Ok(())
}

/// GET /todos/ and replace the cached list wholesale. Every mutation path
/// ends here; there is no partial-update merging client-side.
async fn refresh_todos(app: &mut App, client: &TodoClient) {
    app.is_loading = true;
    match client.list_todos().await {
        Ok(todos) => app.update_todos(todos),
        Err(e) => app.set_status(format!("Failed to fetch tasks: {e}")),
    }
    app.is_loading = false;
}

async fn submit_draft(app: &mut App, client: &TodoClient) {
    // Validation failures never leave the client.
    let payload = match app.draft.payload() {
        Ok(payload) => payload,
        Err(e) => {
            app.set_status(e.message().to_string());
            return;
        }
    };

    app.is_loading = true;
    let result = match app.editing_id {
        Some(id) => client.update_todo(id, &payload.clone().into()).await,
        None => client.create_todo(&payload).await,
    };

    match result {
        Ok(_) => {
            let verb = if app.editing_id.is_some() {
                "updated"
            } else {
                "added"
            };
            app.set_status(format!("Task {verb}: {}", payload.title));
            app.finish_submit();
            refresh_todos(app, client).await;
        }
        Err(e) => {
            // Draft and editing state survive so the user can correct and retry.
            let verb = if app.editing_id.is_some() { "update" } else { "add" };
            app.set_status(format!("Failed to {verb} task: {e}"));
        }
    }
    app.is_loading = false;
}

async fn toggle_complete(app: &mut App, client: &TodoClient, id: i32, completed: bool) {
    app.is_loading = true;
    match client.set_completed(id, completed).await {
        Ok(_) => refresh_todos(app, client).await,
        Err(e) => app.set_status(format!("Failed to update task: {e}")),
    }
    app.is_loading = false;
}

async fn confirm_delete(app: &mut App, client: &TodoClient) {
    let Some(ctx) = app.delete_context.take() else {
        app.navigate_to(View::Tasks);
        return;
    };

    app.is_loading = true;
    match client.delete_todo(ctx.id).await {
        Ok(()) => {
            // Editing the task that just disappeared makes no sense.
            if app.editing_id == Some(ctx.id) {
                app.cancel_edit();
            }
            app.set_status(format!("Deleted: {}", ctx.title));
            refresh_todos(app, client).await;
        }
        Err(e) => app.set_status(format!("Failed to delete task: {e}")),
    }
    app.is_loading = false;
    app.navigate_to(View::Tasks);
}

async fn submit_login(app: &mut App, client: &mut TodoClient, store: &SessionStore) {
    let username = app.login_form.username.value.trim().to_string();
    let password = app.login_form.password.value.clone();

    app.is_loading = true;
    match client.login(&username, &password).await {
        Ok(token) => {
            if let Err(e) = store.save(&token.access_token) {
                app.set_status(format!("Could not persist session: {e}"));
            }
            client.set_token(Some(token.access_token));
            app.login_form.clear();
            app.clear_status();

            if let Ok(user) = client.me().await {
                app.user_email = Some(user.email);
            }
            refresh_todos(app, client).await;
            app.navigate_to(View::Tasks);
        }
        Err(TodoApiError::Unauthorized) => {
            app.set_status("Invalid credentials".to_string());
        }
        Err(e) => app.set_status(format!("Login failed: {e}")),
    }
    app.is_loading = false;
}

async fn submit_register(app: &mut App, client: &TodoClient) {
    let email = app.register_form.username.value.trim().to_string();
    let password = app.register_form.password.value.clone();

    app.is_loading = true;
    match client.register(&email, &password).await {
        Ok(user) => {
            app.register_form.clear();
            // Land on Login with the new address prefilled.
            app.login_form.clear();
            app.login_form.username = crate::app::TextInput::from_str(&user.email);
            app.set_status("Account created successfully! Please log in.".to_string());
            app.navigate_to(View::Login);
        }
        Err(e) => app.set_status(format!("Registration failed: {e}")),
    }
    app.is_loading = false;
}

fn logout(app: &mut App, client: &mut TodoClient, store: &SessionStore) {
    if let Err(e) = store.clear() {
        app.set_status(format!("Could not clear session: {e}"));
        return;
    }
    client.set_token(None);
    app.todos.clear();
    app.user_email = None;
    app.cancel_edit();
    app.navigate_to(View::Login);
    app.set_status("Logged out".to_string());
}
