//! Scan management
//!
//! Covers the scan lifecycle (create, launch, pause, resume, stop), history,
//! per-host results and report export/download.

use std::sync::Arc;

use serde_json::Value;

use crate::client::models::{
    ExportRequest, LaunchTargets, ReadStatus, ScanCopy, ScanRequest, ScheduleToggle,
};
use crate::client::transport::Transport;
use crate::client::verify::Messages;
use crate::error::Result;

fn history_query(history_id: Option<u64>) -> Vec<(&'static str, String)> {
    history_id
        .map(|id| vec![("history_id", id.to_string())])
        .unwrap_or_default()
}

/// `/scans` endpoints
#[derive(Clone)]
pub struct Scans {
    transport: Arc<Transport>,
}

impl Scans {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Scan list along with the folders they live in
    pub async fn list(&self) -> Result<Value> {
        self.transport.get("scans", &Messages::new()).await
    }

    pub async fn create(&self, request: &ScanRequest) -> Result<Value> {
        let messages =
            Messages::new().internal_server_error("An error occurred while saving the scan.");
        self.transport.post("scans", request, &messages).await
    }

    /// Scan details, optionally for a historical run
    pub async fn details(&self, scan_id: u64, history_id: Option<u64>) -> Result<Value> {
        let messages = Messages::new().not_found(format!("Scan {} does not exist.", scan_id));
        self.transport
            .get_query(
                &format!("scans/{}", scan_id),
                &history_query(history_id),
                &messages,
            )
            .await
    }

    /// Change the schedule or policy parameters of a scan
    pub async fn configure(&self, scan_id: u64, request: &ScanRequest) -> Result<Value> {
        let messages = Messages::new()
            .not_found("Scan does not exist.")
            .internal_server_error("Error occurred while saving the configuration");
        self.transport
            .put(&format!("scans/{}", scan_id), request, &messages)
            .await
    }

    pub async fn copy(&self, scan_id: u64, options: &ScanCopy) -> Result<Value> {
        let messages = Messages::new()
            .not_found(format!("Scan with Scan ID of {} does not exist.", scan_id))
            .internal_server_error("An error occurred while copying.");
        self.transport
            .post(&format!("scans/{}/copy", scan_id), options, &messages)
            .await
    }

    /// Delete a scan. Running, paused or stopping scans cannot be deleted.
    pub async fn delete(&self, scan_id: u64) -> Result<Value> {
        let messages = Messages::new().internal_server_error(
            "Failed to delete the scan. This may be because the scan is currently running",
        );
        self.transport
            .delete(&format!("scans/{}", scan_id), &messages)
            .await
    }

    /// Delete the results of one historical run
    pub async fn delete_history(&self, scan_id: u64, history_id: u64) -> Result<Value> {
        let messages = Messages::new()
            .not_found(format!("Results were not found for scan {}.", scan_id))
            .internal_server_error("Failed to delete the results.");
        self.transport
            .delete(
                &format!("scans/{}/history/{}", scan_id, history_id),
                &messages,
            )
            .await
    }

    /// Launch a scan, optionally against alternate targets
    pub async fn launch(&self, scan_id: u64, alt_targets: Option<&[String]>) -> Result<Value> {
        let messages = Messages::new()
            .forbidden("This scan is disabled.")
            .not_found("Scan does not exist.")
            .internal_server_error(
                "Failed to launch scan. This is usually due to the scan already running.",
            );
        let path = format!("scans/{}/launch", scan_id);

        match alt_targets {
            Some(targets) => {
                self.transport
                    .post(
                        &path,
                        &LaunchTargets {
                            alt_targets: targets,
                        },
                        &messages,
                    )
                    .await
            }
            None => self.transport.post_empty(&path, &messages).await,
        }
    }

    pub async fn pause(&self, scan_id: u64) -> Result<Value> {
        let messages = Messages::new()
            .forbidden("This scan is disabled.")
            .conflict("Scan is not active.");
        self.transport
            .post_empty(&format!("scans/{}/pause", scan_id), &messages)
            .await
    }

    pub async fn resume(&self, scan_id: u64) -> Result<Value> {
        let messages = Messages::new()
            .not_found("A scan with that ID could not be located")
            .conflict("The scan is not active and / or couldn't be resumed");
        self.transport
            .post_empty(&format!("scans/{}/resume", scan_id), &messages)
            .await
    }

    pub async fn stop(&self, scan_id: u64) -> Result<Value> {
        let messages = Messages::new()
            .not_found("Scan does not exist.")
            .conflict("Scan is not active.");
        self.transport
            .post_empty(&format!("scans/{}/stop", scan_id), &messages)
            .await
    }

    /// Mark a scan as read or unread
    pub async fn read_status(&self, scan_id: u64, read: bool) -> Result<Value> {
        let messages = Messages::new().not_found("A scan with that ID could not be located.");
        self.transport
            .put(
                &format!("scans/{}/status", scan_id),
                &ReadStatus { read },
                &messages,
            )
            .await
    }

    /// Enable or disable a scan's schedule
    pub async fn schedule(&self, scan_id: u64, enabled: bool) -> Result<Value> {
        let messages = Messages::new()
            .not_found("A scan with that ID could not be located")
            .internal_server_error("The scan does not have a schedule enabled");
        self.transport
            .put(
                &format!("scans/{}/schedule", scan_id),
                &ScheduleToggle { enabled },
                &messages,
            )
            .await
    }

    pub async fn timezones(&self) -> Result<Value> {
        let messages = Messages::new()
            .unauthorized("You do not have permission to view timezones")
            .internal_server_error("Internal server error occurred");
        self.transport.get("scans/timezones", &messages).await
    }

    pub async fn host_details(
        &self,
        scan_id: u64,
        host_id: u64,
        history_id: Option<u64>,
    ) -> Result<Value> {
        let messages = Messages::new().not_found("Scan or host does not exist.");
        self.transport
            .get_query(
                &format!("scans/{}/hosts/{}", scan_id, host_id),
                &history_query(history_id),
                &messages,
            )
            .await
    }

    pub async fn plugin_output(
        &self,
        scan_id: u64,
        host_id: u64,
        plugin_id: u64,
        history_id: Option<u64>,
    ) -> Result<Value> {
        let messages = Messages::new().internal_server_error("Internal server error");
        self.transport
            .get_query(
                &format!("scans/{}/hosts/{}/plugins/{}", scan_id, host_id, plugin_id),
                &history_query(history_id),
                &messages,
            )
            .await
    }

    /// Request a report export; the response carries the `file` id to poll
    pub async fn export(&self, scan_id: u64, request: &ExportRequest) -> Result<Value> {
        let messages = Messages::new()
            .bad_request("Missing required parameters: Scan ID or File Format are required.")
            .not_found(format!(
                "Scan ID {} could not be found. Please try again",
                scan_id
            ));
        self.transport
            .post(&format!("scans/{}/export", scan_id), request, &messages)
            .await
    }

    pub async fn export_status(&self, scan_id: u64, file_id: u64) -> Result<Value> {
        let messages = Messages::new().not_found(format!(
            "Scan ID {} could not be found. Please try again",
            scan_id
        ));
        self.transport
            .get(
                &format!("scans/{}/export/{}/status", scan_id, file_id),
                &messages,
            )
            .await
    }

    /// Download a finished export
    pub async fn download(&self, scan_id: u64, file_id: u64) -> Result<Vec<u8>> {
        let messages = Messages::new().not_found("The scan or file does not exist.");
        self.transport
            .get_bytes(
                &format!("scans/{}/export/{}/download", scan_id, file_id),
                &[],
                &messages,
            )
            .await
    }

    /// Fetch a plugin output attachment
    pub async fn attachment(&self, scan_id: u64, attachment_id: u64, key: &str) -> Result<Vec<u8>> {
        let messages = Messages::new()
            .not_found("Attachment does not exist.")
            .internal_server_error("Internal server error");
        self.transport
            .get_bytes(
                &format!("scans/{}/attachments/{}", scan_id, attachment_id),
                &[("key", key.to_string())],
                &messages,
            )
            .await
    }
}
