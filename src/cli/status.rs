//! Status command implementation

use colored::Colorize;

use nessus6::{ConfigError, Error, Result};
use nessus6::config::Config;

use crate::cli::args::GlobalOptions;

/// Display the configured endpoint and credential mode without contacting
/// the server
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "nessus6 Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;

    let mut config = match Config::load_at(opts.config_ref()) {
        Ok(config) => config,
        Err(Error::Config(ConfigError::NotFound)) => {
            println!("{} Configuration not found", "✗".red());
            println!();
            println!(
                "Run {} to create a configuration file.",
                "nessus6 init".cyan()
            );
            println!();
            return Ok(());
        }
        Err(err) => return Err(err),
    };
    if let Some(url) = opts.url_ref() {
        config.url = Some(url.to_string());
    }

    println!("Config file: {}", config_path.display().to_string().cyan());
    println!();

    match config.endpoint() {
        Ok(endpoint) => println!("{} Server: {}", "✓".green(), endpoint.base_url().cyan()),
        Err(_) => {
            println!("{} Server not configured", "✗".red());
            println!("  → Run 'nessus6 init' to configure");
        }
    }

    match config.auth_mode() {
        Some(mode) => println!("{} Authentication: {}", "✓".green(), mode),
        None => {
            println!("{} No complete credential pair", "✗".red());
            println!("  → Set username/password or access_key/secret_key");
        }
    }

    if config.accept_invalid_certs {
        println!(
            "{} Self-signed certificates accepted",
            "⚠".yellow()
        );
    } else {
        println!("{} Certificates verified", "✓".green());
    }

    println!(
        "{} Request timeout: {}s",
        "○".dimmed(),
        config.timeout_secs
    );
    println!();

    Ok(())
}
