use anyhow::Result;
use crossterm::event::{self, Event};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use todo_client::TodoClient;

use crate::app::App;
use crate::session_store::SessionStore;
use crate::ui;

use super::action_queue::channel;
use super::actions::run_action;
use super::views::handle_view_key;

pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    client: &mut TodoClient,
    store: &SessionStore,
) -> Result<()> {
    let (action_tx, mut action_rx) = channel();

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if app.is_loading {
            app.throbber_state.calc_next();
        }
        app.expire_status();

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                handle_view_key(key, app, &action_tx);
            }
        }

        // Actions run to completion one at a time; each mutation handler
        // awaits its own refetch before the next action is looked at.
        while let Ok(action) = action_rx.try_recv() {
            run_action(action, app, client, store).await?;
        }

        if !app.running {
            break;
        }
    }

    Ok(())
}
