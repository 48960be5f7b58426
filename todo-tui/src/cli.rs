use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "todo-tui")]
#[command(about = "Terminal UI for the todo API")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the interactive TUI (default)
    Run,
    /// Log in from the terminal and store the session token
    Login,
    /// Create an account from the terminal
    Register,
    /// Remove the stored session token
    Logout,
    /// Print config path and create default file if missing
    ConfigPath,
}
