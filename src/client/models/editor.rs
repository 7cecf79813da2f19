//! Editor path parameters

use std::fmt;

use crate::error::{Error, Result};

/// Which editor a template or object belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorType {
    Scan,
    Policy,
}

impl EditorType {
    pub fn as_str(self) -> &'static str {
        match self {
            EditorType::Scan => "scan",
            EditorType::Policy => "policy",
        }
    }
}

impl fmt::Display for EditorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Template UUIDs are hex digits and dashes; anything else would change the
/// request path.
pub(crate) fn check_template_uuid(uuid: &str) -> Result<&str> {
    if !uuid.is_empty() && uuid.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
        Ok(uuid)
    } else {
        Err(Error::InvalidInput(format!("Invalid template UUID: {:?}", uuid)))
    }
}
