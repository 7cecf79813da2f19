//! Resource handles, one per Nessus API collection
//!
//! Each handle shares the client's [`Transport`](super::transport::Transport)
//! and maps one method to one request.

mod agents;
mod editor;
mod files;
mod folders;
mod groups;
mod permissions;
mod plugins;
mod policies;
mod scanners;
mod scans;
mod server;
mod session;
mod users;

pub use agents::{AgentGroups, Agents};
pub use editor::Editor;
pub use files::Files;
pub use folders::Folders;
pub use groups::Groups;
pub use permissions::Permissions;
pub use plugins::{PluginRules, Plugins};
pub use policies::Policies;
pub use scanners::Scanners;
pub use scans::Scans;
pub use server::Server;
pub use session::Sessions;
pub use users::Users;
