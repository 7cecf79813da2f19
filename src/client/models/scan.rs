//! Scan request models

use serde::Serialize;
use serde_json::{Map, Value};

/// Body for `POST /scans` and `PUT /scans/{id}`
#[derive(Debug, Clone, Serialize)]
pub struct ScanRequest {
    /// Template UUID (see `editor/scan/templates`)
    pub uuid: String,
    pub settings: ScanSettings,
}

/// Scan settings; unknown keys pass through `extra`
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanSettings {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scanner_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    /// Comma separated targets
    pub text_targets: String,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// Body for `POST /scans/{id}/copy`
#[derive(Debug, Clone, Default, Serialize)]
pub struct ScanCopy {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folder_id: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub history: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Export file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    Nessus,
    Csv,
    Db,
    Html,
    Pdf,
}

/// Body for `POST /scans/{id}/export`
#[derive(Debug, Clone, Serialize)]
pub struct ExportRequest {
    pub format: ExportFormat,
    /// Required for the `db` format
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// Semicolon separated report chapters, for `html` and `pdf`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chapters: Option<String>,
}

impl ExportRequest {
    pub fn new(format: ExportFormat) -> Self {
        Self {
            format,
            password: None,
            chapters: None,
        }
    }
}

#[derive(Serialize)]
pub(crate) struct LaunchTargets<'a> {
    pub alt_targets: &'a [String],
}

#[derive(Serialize)]
pub(crate) struct ReadStatus {
    pub read: bool,
}

#[derive(Serialize)]
pub(crate) struct ScheduleToggle {
    pub enabled: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scan_request_flattens_extra_settings() {
        let mut settings = ScanSettings {
            name: "weekly".to_string(),
            folder_id: Some(3),
            text_targets: "10.0.0.0/24".to_string(),
            ..Default::default()
        };
        settings
            .extra
            .insert("launch".to_string(), json!("WEEKLY"));

        let value = serde_json::to_value(ScanRequest {
            uuid: "731a8e52".to_string(),
            settings,
        })
        .unwrap();

        assert_eq!(
            value,
            json!({
                "uuid": "731a8e52",
                "settings": {
                    "name": "weekly",
                    "folder_id": 3,
                    "text_targets": "10.0.0.0/24",
                    "launch": "WEEKLY"
                }
            })
        );
    }

    #[test]
    fn test_export_request() {
        let value = serde_json::to_value(ExportRequest::new(ExportFormat::Csv)).unwrap();
        assert_eq!(value, json!({ "format": "csv" }));
    }
}
