use todo_client::TodoClient;

use crate::app::App;

/// Initial data load for an authenticated session, before the terminal
/// goes into raw mode. Failures are non-fatal; the user can retry with a
/// manual refresh once the UI is up.
pub async fn initialize_app_state(app: &mut App, client: &TodoClient) {
    app.is_loading = true;

    match client.me().await {
        Ok(user) => app.user_email = Some(user.email),
        Err(e) => eprintln!("Warning: Could not verify session: {e}"),
    }

    match client.list_todos().await {
        Ok(todos) => app.update_todos(todos),
        Err(e) => {
            eprintln!("Warning: Could not load tasks: {e}");
            app.set_status(format!("Failed to fetch tasks: {e}"));
        }
    }

    app.is_loading = false;
}
