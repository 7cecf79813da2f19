//! Init command implementation

use colored::Colorize;
use dialoguer::{Input, Password, Select, theme::ColorfulTheme};

use nessus6::config::Config;
use nessus6::{Credentials, DEFAULT_PORT, NessusClient, Result};

use crate::cli::args::GlobalOptions;
use crate::cli::prompt::prompt_error;

const AUTH_MODES: [&str; 2] = ["API keys", "Username and password"];

/// Run the init command
///
/// Prompts for the server and one credential pair, checks that the server
/// answers and accepts the credentials, then writes the config file.
pub async fn run(opts: &GlobalOptions) -> Result<()> {
    let theme = ColorfulTheme::default();

    println!("{}", "Welcome to nessus6!".bold().green());
    println!("Let's connect to your Nessus scanner.\n");

    let mut config = Config::load_at(opts.config_ref()).unwrap_or_default();

    if let Some(url) = opts.url_ref() {
        config.url = Some(url.to_string());
    } else {
        let host: String = Input::with_theme(&theme)
            .with_prompt("Nessus host")
            .with_initial_text(config.host.clone().unwrap_or_default())
            .interact_text()
            .map_err(prompt_error)?;
        let port: u16 = Input::with_theme(&theme)
            .with_prompt("Port")
            .default(DEFAULT_PORT)
            .interact_text()
            .map_err(prompt_error)?;

        config.host = Some(host.trim().to_string());
        config.port = port;
        config.url = None;
    }

    let mode = Select::with_theme(&theme)
        .with_prompt("Authenticate with")
        .items(&AUTH_MODES)
        .default(0)
        .interact()
        .map_err(prompt_error)?;

    if mode == 0 {
        config.access_key = Some(
            Password::with_theme(&theme)
                .with_prompt("Access key")
                .interact()
                .map_err(prompt_error)?,
        );
        config.secret_key = Some(
            Password::with_theme(&theme)
                .with_prompt("Secret key")
                .interact()
                .map_err(prompt_error)?,
        );
        config.username = None;
        config.password = None;
    } else {
        config.username = Some(
            Input::with_theme(&theme)
                .with_prompt("Username")
                .interact_text()
                .map_err(prompt_error)?,
        );
        config.password = Some(
            Password::with_theme(&theme)
                .with_prompt("Password")
                .interact()
                .map_err(prompt_error)?,
        );
        config.access_key = None;
        config.secret_key = None;
    }

    println!("\n{}", "Checking connection...".cyan());
    let credentials = config.credentials()?;
    let client =
        NessusClient::connect_with(&credentials, &config.endpoint()?, &config.client_options())
            .await?;
    let properties = client.server().properties().await;
    if matches!(credentials, Credentials::Password { .. }) {
        client.logout().await?;
    }
    let properties = properties?;

    let version = properties
        .get("server_version")
        .and_then(|v| v.as_str())
        .unwrap_or("unknown");
    println!("{} Connected to Nessus {}", "✓".green(), version.bold());

    config.save_at(opts.config_ref())?;

    let config_path = Config::resolve_path(opts.config_ref())?;
    println!(
        "\n{} Configuration saved to: {}",
        "✓".green(),
        config_path.display()
    );

    println!("\n{}", "You're all set! Try running:".bold());
    println!("  {} - Show configuration status", "nessus6 status".cyan());
    println!("  {} - List scans", "nessus6 scan list".cyan());

    Ok(())
}
