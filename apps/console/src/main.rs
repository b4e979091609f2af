use std::fmt::Write as _;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use session_core::{SessionClient, SessionState};
use tracing::info;

mod config;

#[derive(Parser, Debug)]
#[command(about = "Console client for the token-auth user API")]
struct Args {
    /// Base URL of the auth API; overrides console.toml and API_URL.
    #[arg(long)]
    api_url: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create a new user account.
    Register { username: String, password: String },
    /// Obtain a bearer token for an existing account.
    Login { username: String, password: String },
    /// Fetch the user listing, optionally with a bearer token.
    ListUsers {
        #[arg(long, default_value = "")]
        token: String,
    },
    /// Call the token-protected endpoint.
    Protected {
        #[arg(long, default_value = "")]
        token: String,
    },
    /// Run the full register/login/list/protected flow in one session.
    Exercise { username: String, password: String },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let mut settings = config::load_settings();
    if let Some(api_url) = args.api_url {
        settings.api_url = api_url;
    }
    url::Url::parse(&settings.api_url)
        .with_context(|| format!("invalid API url '{}'", settings.api_url))?;
    info!(api_url = %settings.api_url, "talking to auth API");

    let mut client = SessionClient::new(settings.api_url);
    match args.command {
        Command::Register { username, password } => {
            client.state.username = username;
            client.state.password = password;
            client.register().await?;
        }
        Command::Login { username, password } => {
            client.state.username = username;
            client.state.password = password;
            client.login().await?;
        }
        Command::ListUsers { token } => {
            client.state.token = token;
            client.list_users().await?;
        }
        Command::Protected { token } => {
            client.state.token = token;
            client.call_protected().await?;
        }
        Command::Exercise { username, password } => {
            client.state.username = username;
            client.state.password = password;
            client.register().await?;
            println!("{}", client.state.message);
            client.login().await?;
            println!("{}", client.state.message);
            client.list_users().await?;
            client.call_protected().await?;
        }
    }

    print!("{}", render(&client.state));
    Ok(())
}

/// Text rendering of the session state: status message first, the token
/// if one is held, then the user listing when one has been fetched. Pure,
/// so re-rendering a fixed state always yields the same output.
fn render(state: &SessionState) -> String {
    let mut out = String::new();
    if !state.message.is_empty() {
        let _ = writeln!(out, "{}", state.message);
    }
    if !state.token.is_empty() {
        let _ = writeln!(out, "token: {}", state.token);
    }
    for user in &state.users {
        let _ = writeln!(out, "{:>6}  {}", user.id, user.username);
    }
    out
}
