//! Policy request models

use serde::Serialize;
use serde_json::{Map, Value};

/// Body for `POST /policies` and `PUT /policies/{id}`
#[derive(Debug, Clone, Serialize)]
pub struct PolicyRequest {
    /// Policy template UUID
    pub uuid: String,
    pub settings: Map<String, Value>,
}

#[derive(Serialize)]
pub(crate) struct PolicyImport<'a> {
    pub file: &'a str,
}
