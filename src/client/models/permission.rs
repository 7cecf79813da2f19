//! Permission (ACL) models

use std::fmt;

use serde::{Deserialize, Serialize};

/// One access control entry on a scan, policy or scanner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Acl {
    /// `default`, `user` or `group`
    #[serde(rename = "type")]
    pub kind: String,

    /// Permission value (0, 16, 32, 64, 128)
    pub permissions: u8,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<u8>,
}

#[derive(Serialize)]
pub(crate) struct AclChange<'a> {
    pub acls: &'a [Acl],
}

/// Object kinds that carry an ACL, as named in `permissions/{type}/{id}`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ObjectType {
    Scan,
    Policy,
    Scanner,
    AgentGroup,
}

impl ObjectType {
    pub fn as_str(self) -> &'static str {
        match self {
            ObjectType::Scan => "scan",
            ObjectType::Policy => "policy",
            ObjectType::Scanner => "scanner",
            ObjectType::AgentGroup => "agent-group",
        }
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
