// Command layer for the `nozbe` binary. Each handler opens a session,
// performs one API call, and prints the result to stdout; failures
// bubble up to `main` for exit-code mapping.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use indicatif::{ProgressBar, ProgressStyle};
use std::time::Duration;

use crate::api::Session;

/// Command-line front end for a Nozbe account.
#[derive(Debug, Parser)]
#[command(name = "nozbe", about = "List projects and create actions in a Nozbe account")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List the account's projects as indented JSON.
    Projects { api_token: String },
    /// Create a demo action and print the server's acknowledgement.
    CreateAction { api_token: String },
    /// Exchange an email and password for an API token.
    Login,
}

pub fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Projects { api_token } => projects(&api_token),
        Commands::CreateAction { api_token } => create_action(&api_token),
        Commands::Login => login(),
    }
}

fn projects(api_token: &str) -> Result<()> {
    let session = Session::open(api_token);
    let projects = session.projects()?;
    println!("{}", serde_json::to_string_pretty(&projects)?);
    Ok(())
}

/// The demo action mirrors the service's documented example values.
fn create_action(api_token: &str) -> Result<()> {
    let session = Session::open(api_token);
    let action = session.create_action(
        "testnamelol",
        &[("project_id", "014f30c20b"), ("next", "true")],
    )?;
    println!("{}", serde_json::to_string_pretty(&action)?);
    Ok(())
}

/// Prompt for credentials, run the token exchange, and print the token
/// so it can be passed to the other commands.
fn login() -> Result<()> {
    let username: String = Input::new().with_prompt("Email").interact_text()?;
    let password: String = Password::new().with_prompt("Password").interact()?;

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::with_template("{spinner} {msg}")?);
    spinner.set_message("Logging in...");
    spinner.enable_steady_tick(Duration::from_millis(100));

    let result = Session::login(&username, &password);
    spinner.finish_and_clear();

    let session = result?;
    let token = session
        .api_token()
        .context("login succeeded but no token was stored")?;
    println!("API token: {token}");
    Ok(())
}
