//! Client library for the Nessus 6 management API
//!
//! ```no_run
//! use nessus6::{Credentials, Endpoint, NessusClient};
//!
//! # async fn run() -> nessus6::Result<()> {
//! let creds = Credentials::password("admin", "secret");
//! let client = NessusClient::connect(&creds, &Endpoint::new("10.0.0.5", None)).await?;
//!
//! let scans = client.scans().list().await?;
//! println!("{}", scans);
//!
//! client.logout().await?;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::{ClientOptions, Credentials, DEFAULT_PORT, Endpoint, Messages, NessusClient};
pub use error::{ApiError, AuthError, ConfigError, Error, Result};
