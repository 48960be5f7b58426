mod app;
mod bootstrap;
mod cli;
mod config;
mod runtime;
mod session_store;
mod ui;

use anyhow::{bail, Context, Result};
use app::{App, View};
use clap::Parser;
use cli::{Cli, Commands};
use config::TodoConfig;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use session_store::SessionStore;
use std::io::{self, Write};
use todo_client::{TodoApiError, TodoClient};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run().await,
        Commands::Login => login().await,
        Commands::Register => register().await,
        Commands::Logout => logout(),
        Commands::ConfigPath => config_path(),
    }
}

async fn run() -> Result<()> {
    let config = TodoConfig::load()?;
    let store = SessionStore::new()?;
    let token = store.load()?;
    let mut client = TodoClient::with_token(&config.api_url, token);

    let mut app = App::new(config);

    // Session guard: checked synchronously from the stored token, no
    // server round-trip. Without one, the app lands on the login view.
    if client.has_token() {
        bootstrap::initialize_app_state(&mut app, &client).await;
    } else {
        app.navigate_to(View::Login);
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app, &mut client, &store).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

/// Terminal login flow: prompt for credentials, store the token.
async fn login() -> Result<()> {
    let config = TodoConfig::load()?;
    let store = SessionStore::new()?;
    let client = TodoClient::new(&config.api_url);

    let username = prompt("Email: ")?;
    let password =
        rpassword::prompt_password("Password: ").context("Failed to read password")?;

    match client.login(username.trim(), &password).await {
        Ok(token) => {
            store.save(&token.access_token)?;
            println!("Login successful. Session saved.");
            Ok(())
        }
        Err(TodoApiError::Unauthorized) => bail!("Invalid credentials"),
        Err(e) => bail!("Login failed: {e}. Is the todo API running at {}?", config.api_url),
    }
}

/// Terminal registration flow.
async fn register() -> Result<()> {
    let config = TodoConfig::load()?;
    let client = TodoClient::new(&config.api_url);

    let email = prompt("Email: ")?;
    let password =
        rpassword::prompt_password("Password: ").context("Failed to read password")?;

    match client.register(email.trim(), &password).await {
        Ok(user) => {
            println!("Account created for {}. Run `todo-tui login` to sign in.", user.email);
            Ok(())
        }
        Err(e) => bail!("Registration failed: {e}"),
    }
}

fn logout() -> Result<()> {
    let store = SessionStore::new()?;
    store.clear()?;
    println!("Session cleared.");
    Ok(())
}

fn config_path() -> Result<()> {
    let path = TodoConfig::config_path()?;
    if !path.exists() {
        TodoConfig::default().save()?;
        println!("Created default config.");
    }
    println!("{}", path.display());
    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{label}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin()
        .read_line(&mut line)
        .context("Failed to read input")?;
    Ok(line)
}
