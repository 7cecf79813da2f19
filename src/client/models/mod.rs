//! Request payloads for the Nessus API
//!
//! Responses are returned as `serde_json::Value`; only the bodies the client
//! sends are typed.

mod editor;
mod permission;
mod plugin_rule;
mod policy;
mod scan;
mod session;
mod user;

pub use editor::EditorType;
pub use permission::{Acl, ObjectType};
pub use plugin_rule::{PluginRule, RuleType};
pub use policy::PolicyRequest;
pub use scan::{ExportFormat, ExportRequest, ScanCopy, ScanRequest, ScanSettings};
pub use session::SessionUpdate;
pub use user::{NewUser, PermissionLevel, UserType, UserUpdate};

pub(crate) use editor::check_template_uuid;
pub(crate) use permission::AclChange;
pub(crate) use policy::PolicyImport;
pub(crate) use scan::{LaunchTargets, ReadStatus, ScheduleToggle};
pub(crate) use session::{Login, LoginResponse, PasswordChange};
