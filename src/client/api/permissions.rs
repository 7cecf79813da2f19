//! Object permissions

use std::sync::Arc;

use serde_json::Value;

use crate::client::models::{Acl, AclChange, ObjectType};
use crate::client::transport::Transport;
use crate::client::verify::Messages;
use crate::error::Result;

/// `/permissions/{object_type}/{object_id}` endpoints
#[derive(Clone)]
pub struct Permissions {
    transport: Arc<Transport>,
}

impl Permissions {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    pub async fn list(&self, object_type: ObjectType, object_id: u64) -> Result<Value> {
        let messages = Messages::new()
            .forbidden("You do not have permission to view the object")
            .not_found("Object does not exist");
        self.transport
            .get(
                &format!("permissions/{}/{}", object_type, object_id),
                &messages,
            )
            .await
    }

    /// Replace the ACL of an object
    pub async fn change(
        &self,
        object_type: ObjectType,
        object_id: u64,
        acls: &[Acl],
    ) -> Result<Value> {
        let messages = Messages::new()
            .forbidden("You do not have permission to edit the object")
            .not_found("Object does not exist");
        self.transport
            .put(
                &format!("permissions/{}/{}", object_type, object_id),
                &AclChange { acls },
                &messages,
            )
            .await
    }
}
