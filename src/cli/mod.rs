//! CLI command definitions and handlers

use clap::{Parser, Subcommand};
pub use clap_complete::Shell;

pub mod args;
pub mod context;
pub mod folder;
pub mod group;
pub mod init;
pub mod plugin;
pub mod policy;
pub mod prompt;
pub mod scan;
pub mod scanner;
pub mod server;
pub mod session;
pub mod status;
pub mod user;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// nessus6 - command line companion for Nessus 6 scanners
#[derive(Parser, Debug)]
#[command(name = "nessus6")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(
        long,
        global = true,
        env = "NESSUS6_FORMAT",
        default_value = "table",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "NESSUS6_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Override the Nessus base URL (e.g. https://10.0.0.5:8834)
    #[arg(long, global = true, env = "NESSUS6_URL", hide_env = true)]
    pub url: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "NESSUS6_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Initialize nessus6 configuration
    Init,

    /// Show connection and credential configuration
    Status,

    /// Display version information
    Version,

    /// Server status and properties
    #[command(subcommand)]
    Server(ServerCommands),

    /// View and control scans
    #[command(subcommand)]
    Scan(ScanCommands),

    /// Manage scan policies
    #[command(subcommand)]
    Policy(PolicyCommands),

    /// Manage users
    #[command(subcommand)]
    User(UserCommands),

    /// Manage scan folders
    #[command(subcommand)]
    Folder(FolderCommands),

    /// List user groups
    #[command(subcommand)]
    Group(GroupCommands),

    /// Browse plugins
    #[command(subcommand)]
    Plugin(PluginCommands),

    /// List scanners and linked agents
    #[command(subcommand)]
    Scanner(ScannerCommands),

    /// Inspect the current session
    #[command(subcommand)]
    Session(SessionCommands),

    /// Generate shell completions
    #[command(after_help = "\
  bash:   nessus6 completion bash > /etc/bash_completion.d/nessus6
  zsh:    nessus6 completion zsh > \"${fpath[1]}/_nessus6\"
  fish:   nessus6 completion fish > ~/.config/fish/completions/nessus6.fish")]
    Completion {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Server subcommands
#[derive(Subcommand, Debug)]
pub enum ServerCommands {
    /// Show whether the server is ready
    Status,

    /// Show version and license properties
    Properties,
}

/// Scan subcommands
#[derive(Subcommand, Debug)]
pub enum ScanCommands {
    /// List scans
    #[command(visible_alias = "ls")]
    List {
        /// Only scans in this folder
        #[arg(long)]
        folder: Option<u64>,
    },

    /// Show scan details
    #[command(visible_alias = "g")]
    Show {
        /// Scan ID
        scan_id: u64,

        /// Historical run to show instead of the latest
        #[arg(long)]
        history: Option<u64>,
    },

    /// Launch a scan
    Launch {
        /// Scan ID
        scan_id: u64,

        /// Scan these targets instead of the configured ones
        #[arg(long = "target", short = 't', value_delimiter = ',')]
        targets: Option<Vec<String>>,
    },

    /// Pause a running scan
    Pause {
        /// Scan ID
        scan_id: u64,
    },

    /// Resume a paused scan
    Resume {
        /// Scan ID
        scan_id: u64,
    },

    /// Stop a running scan
    Stop {
        /// Scan ID
        scan_id: u64,
    },

    /// Delete a scan
    Delete {
        /// Scan ID
        scan_id: u64,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },

    /// Export a scan report and download it
    #[command(after_help = "EXAMPLES:\n  \
            nessus6 scan export 42 --as csv -o weekly.csv\n  \
            nessus6 scan export 42 --as nessus -o weekly.nessus")]
    Export {
        /// Scan ID
        scan_id: u64,

        /// Report format
        #[arg(long = "as", value_enum, default_value = "nessus")]
        report: ReportFormat,

        /// Output file
        #[arg(long, short = 'o')]
        output: std::path::PathBuf,
    },

    /// List the timezones accepted by scan schedules
    Timezones,
}

/// Report formats accepted by `scan export`
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ReportFormat {
    Nessus,
    Csv,
    Html,
    Pdf,
}

/// Policy subcommands
#[derive(Subcommand, Debug)]
pub enum PolicyCommands {
    /// List policies
    #[command(visible_alias = "ls")]
    List,

    /// Show policy details
    Show {
        /// Policy ID
        policy_id: u64,
    },

    /// Copy a policy
    Copy {
        /// Policy ID
        policy_id: u64,
    },

    /// Delete a policy
    Delete {
        /// Policy ID
        policy_id: u64,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// User subcommands
#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// List users
    #[command(visible_alias = "ls")]
    List,

    /// Show a user
    Show {
        /// User ID
        user_id: u64,
    },

    /// Delete a user
    Delete {
        /// User ID
        user_id: u64,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Folder subcommands
#[derive(Subcommand, Debug)]
pub enum FolderCommands {
    /// List folders
    #[command(visible_alias = "ls")]
    List,

    /// Create a folder
    Create {
        /// Folder name
        name: String,
    },

    /// Rename a folder
    Rename {
        /// Folder ID
        folder_id: u64,

        /// New folder name
        name: String,
    },

    /// Delete a folder
    Delete {
        /// Folder ID
        folder_id: u64,

        /// Skip confirmation prompt
        #[arg(long, short = 'y')]
        yes: bool,
    },
}

/// Group subcommands
#[derive(Subcommand, Debug)]
pub enum GroupCommands {
    /// List groups
    #[command(visible_alias = "ls")]
    List,

    /// List the users in a group
    Members {
        /// Group ID
        group_id: u64,
    },
}

/// Plugin subcommands
#[derive(Subcommand, Debug)]
pub enum PluginCommands {
    /// List plugin families
    Families,

    /// List the plugins in a family
    Family {
        /// Family ID
        family_id: u64,
    },

    /// Show plugin attributes
    Show {
        /// Plugin ID
        plugin_id: u64,
    },
}

/// Scanner subcommands
#[derive(Subcommand, Debug)]
pub enum ScannerCommands {
    /// List scanners
    #[command(visible_alias = "ls")]
    List,

    /// List agents linked to a scanner
    Agents {
        /// Scanner ID
        #[arg(default_value = "1")]
        scanner_id: u64,
    },
}

/// Session subcommands
#[derive(Subcommand, Debug)]
pub enum SessionCommands {
    /// Show the authenticated user
    Show,
}
