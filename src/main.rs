//! nessus6 CLI - command line companion for Nessus 6 scanners

use clap::{CommandFactory, Parser};
use log::LevelFilter;

mod cli;
mod output;

use cli::scan::Control;
use cli::{
    Cli, Commands, FolderCommands, GlobalOptions, GroupCommands, PluginCommands, PolicyCommands,
    ScanCommands, ScannerCommands, ServerCommands, SessionCommands, UserCommands,
};
use nessus6::Result;

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(LevelFilter::Debug);
    }
    builder.format_timestamp(None).init();
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let opts = GlobalOptions::from_cli(&cli);

    match cli.command {
        Commands::Init => cli::init::run(&opts).await,
        Commands::Status => cli::status::run(&opts),
        Commands::Version => {
            println!("nessus6 version {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        Commands::Server(cmd) => match cmd {
            ServerCommands::Status => cli::server::status(&opts).await,
            ServerCommands::Properties => cli::server::properties(&opts).await,
        },
        Commands::Scan(cmd) => match cmd {
            ScanCommands::List { folder } => cli::scan::list(&opts, folder).await,
            ScanCommands::Show { scan_id, history } => {
                cli::scan::show(&opts, scan_id, history).await
            }
            ScanCommands::Launch { scan_id, targets } => {
                cli::scan::launch(&opts, scan_id, targets).await
            }
            ScanCommands::Pause { scan_id } => {
                cli::scan::control(&opts, scan_id, Control::Pause).await
            }
            ScanCommands::Resume { scan_id } => {
                cli::scan::control(&opts, scan_id, Control::Resume).await
            }
            ScanCommands::Stop { scan_id } => {
                cli::scan::control(&opts, scan_id, Control::Stop).await
            }
            ScanCommands::Delete { scan_id, yes } => cli::scan::delete(&opts, scan_id, yes).await,
            ScanCommands::Export {
                scan_id,
                report,
                output,
            } => cli::scan::export(&opts, scan_id, report, &output).await,
            ScanCommands::Timezones => cli::scan::timezones(&opts).await,
        },
        Commands::Policy(cmd) => match cmd {
            PolicyCommands::List => cli::policy::list(&opts).await,
            PolicyCommands::Show { policy_id } => cli::policy::show(&opts, policy_id).await,
            PolicyCommands::Copy { policy_id } => cli::policy::copy(&opts, policy_id).await,
            PolicyCommands::Delete { policy_id, yes } => {
                cli::policy::delete(&opts, policy_id, yes).await
            }
        },
        Commands::User(cmd) => match cmd {
            UserCommands::List => cli::user::list(&opts).await,
            UserCommands::Show { user_id } => cli::user::show(&opts, user_id).await,
            UserCommands::Delete { user_id, yes } => cli::user::delete(&opts, user_id, yes).await,
        },
        Commands::Folder(cmd) => match cmd {
            FolderCommands::List => cli::folder::list(&opts).await,
            FolderCommands::Create { name } => cli::folder::create(&opts, &name).await,
            FolderCommands::Rename { folder_id, name } => {
                cli::folder::rename(&opts, folder_id, &name).await
            }
            FolderCommands::Delete { folder_id, yes } => {
                cli::folder::delete(&opts, folder_id, yes).await
            }
        },
        Commands::Group(cmd) => match cmd {
            GroupCommands::List => cli::group::list(&opts).await,
            GroupCommands::Members { group_id } => cli::group::members(&opts, group_id).await,
        },
        Commands::Plugin(cmd) => match cmd {
            PluginCommands::Families => cli::plugin::families(&opts).await,
            PluginCommands::Family { family_id } => cli::plugin::family(&opts, family_id).await,
            PluginCommands::Show { plugin_id } => cli::plugin::show(&opts, plugin_id).await,
        },
        Commands::Scanner(cmd) => match cmd {
            ScannerCommands::List => cli::scanner::list(&opts).await,
            ScannerCommands::Agents { scanner_id } => {
                cli::scanner::agents(&opts, scanner_id).await
            }
        },
        Commands::Session(cmd) => match cmd {
            SessionCommands::Show => cli::session::show(&opts).await,
        },
        Commands::Completion { shell } => {
            let mut command = Cli::command();
            clap_complete::generate(shell, &mut command, "nessus6", &mut std::io::stdout());
            Ok(())
        }
    }
}
