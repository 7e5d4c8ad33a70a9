use std::process::ExitCode;
use std::sync::Arc;

use assistants_console::state::view::{ListView, ViewState};
use assistants_console::{ApiError, AssistantsPage, ClientConfig, HttpTransport};
use clap::{Parser, Subcommand};

#[cfg(test)]
#[path = "main_test.rs"]
mod tests;

#[derive(Parser, Debug)]
#[command(name = "assistants-console", about = "List and create assistants")]
struct Cli {
    /// Base URL of the assistants service; takes precedence over config defaults.
    #[arg(long, env = "ASSISTANTS_BASE_URL")]
    base_url: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the assistant table.
    List,
    /// Create an assistant, then print the refreshed table.
    Create { name: String },
}

#[tokio::main]
async fn main() -> ExitCode {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    match run(cli).await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<ExitCode, ApiError> {
    let mut config = ClientConfig::from_env()?;
    if let Some(base_url) = cli.base_url.as_deref() {
        config = config.with_base_url(base_url)?;
    }
    let transport = HttpTransport::new(&config)?;
    tracing::info!(base_url = transport.base_url(), "assistants-console starting");

    let page = AssistantsPage::mount(Arc::new(transport));
    let state = page.settled().await;

    match cli.command {
        Command::List => Ok(print_list(&state)),
        Command::Create { name } => {
            page.open_dialog();
            page.update_draft(&name);
            if !page.state().can_submit() {
                eprintln!("error: name must not be blank");
                return Ok(ExitCode::FAILURE);
            }
            page.submit().await;

            let state = page.state();
            if let Some(message) = state.create_error() {
                eprintln!("error: {message}");
                return Ok(ExitCode::FAILURE);
            }
            Ok(print_list(&state))
        }
    }
}

fn print_list(state: &ViewState) -> ExitCode {
    match state.list_view() {
        ListView::Loading => {
            println!("Loading...");
            ExitCode::SUCCESS
        }
        ListView::Failed(message) => {
            eprintln!("error: {message}");
            ExitCode::FAILURE
        }
        ListView::Empty => {
            println!("{}", assistants_console::state::view::EMPTY_LIST_MESSAGE);
            ExitCode::SUCCESS
        }
        ListView::Rows(rows) => {
            let width = rows.iter().map(|a| a.name.chars().count()).max().unwrap_or(0).max(4);
            println!("{:<width$}  {:<16}  ENABLED TOOLS", "NAME", "VOICE ID");
            for a in rows {
                println!("{:<width$}  {:<16}  {}", a.name, a.voice_label(), a.tools_label());
            }
            ExitCode::SUCCESS
        }
    }
}
