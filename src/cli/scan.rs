//! Scan command handlers

use std::path::Path;
use std::time::Duration;

use log::debug;
use serde_json::Value;

use nessus6::client::models::{ExportFormat, ExportRequest};
use nessus6::{Error, NessusClient, Result};

use crate::cli::prompt::confirm_delete;
use crate::cli::{CommandContext, GlobalOptions, OutputFormat, ReportFormat};
use crate::output::{self, Column};

const SCAN_COLUMNS: [Column; 6] = [
    Column::text("ID", "id"),
    Column::text("NAME", "name"),
    Column::text("STATUS", "status"),
    Column::text("FOLDER", "folder_id"),
    Column::text("OWNER", "owner"),
    Column::timestamp("MODIFIED", "last_modification_date"),
];

const TIMEZONE_COLUMNS: [Column; 2] = [
    Column::text("NAME", "name"),
    Column::text("VALUE", "value"),
];

const EXPORT_POLL_INTERVAL: Duration = Duration::from_secs(2);
const EXPORT_MAX_POLLS: u32 = 150;

impl From<ReportFormat> for ExportFormat {
    fn from(format: ReportFormat) -> Self {
        match format {
            ReportFormat::Nessus => ExportFormat::Nessus,
            ReportFormat::Csv => ExportFormat::Csv,
            ReportFormat::Html => ExportFormat::Html,
            ReportFormat::Pdf => ExportFormat::Pdf,
        }
    }
}

/// Keep only the scans in `folder_id`
fn filter_folder(mut scans: Value, folder_id: u64) -> Value {
    if let Some(list) = scans.get_mut("scans").and_then(Value::as_array_mut) {
        list.retain(|scan| scan.get("folder_id").and_then(Value::as_u64) == Some(folder_id));
    }
    scans
}

/// Run the `scan list` command
pub async fn list(opts: &GlobalOptions, folder: Option<u64>) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let result = ctx.client.scans().list().await;
    let format = ctx.format;
    ctx.close().await;

    let mut scans = result?;
    if let Some(folder_id) = folder {
        scans = filter_folder(scans, folder_id);
    }

    output::print_list(&scans, "scans", &SCAN_COLUMNS, format)
}

/// Run the `scan show` command
pub async fn show(opts: &GlobalOptions, scan_id: u64, history: Option<u64>) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let result = ctx.client.scans().details(scan_id, history).await;
    let format = ctx.format;
    ctx.close().await;
    let details = result?;

    match format {
        OutputFormat::Json => output::print_object(&details, format),
        OutputFormat::Table => {
            let info = details.get("info").cloned().unwrap_or(Value::Null);
            output::print_object(&info, format)
        }
    }
}

/// Run the `scan launch` command
pub async fn launch(
    opts: &GlobalOptions,
    scan_id: u64,
    targets: Option<Vec<String>>,
) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let result = ctx.client.scans().launch(scan_id, targets.as_deref()).await;
    ctx.close().await;
    let launched = result?;

    match launched.get("scan_uuid").and_then(Value::as_str) {
        Some(uuid) => output::print_success(&format!("Launched scan {} ({})", scan_id, uuid)),
        None => output::print_success(&format!("Launched scan {}", scan_id)),
    }
    Ok(())
}

/// Scan state transitions without a response body
#[derive(Debug, Clone, Copy)]
pub enum Control {
    Pause,
    Resume,
    Stop,
}

/// Run the `scan pause|resume|stop` commands
pub async fn control(opts: &GlobalOptions, scan_id: u64, action: Control) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let scans = ctx.client.scans();
    let (result, verb) = match action {
        Control::Pause => (scans.pause(scan_id).await, "Paused"),
        Control::Resume => (scans.resume(scan_id).await, "Resumed"),
        Control::Stop => (scans.stop(scan_id).await, "Stopped"),
    };
    ctx.close().await;
    result?;

    output::print_success(&format!("{} scan {}", verb, scan_id));
    Ok(())
}

/// Run the `scan delete` command
pub async fn delete(opts: &GlobalOptions, scan_id: u64, yes: bool) -> Result<()> {
    if !confirm_delete(&format!("scan {}", scan_id), yes)? {
        return Ok(());
    }

    let ctx = CommandContext::new(opts).await?;
    let result = ctx.client.scans().delete(scan_id).await;
    ctx.close().await;
    result?;

    output::print_success(&format!("Deleted scan {}", scan_id));
    Ok(())
}

/// Whether an export is ready to download; any state other than `loading`
/// or `ready` fails the export
fn export_ready(status: &Value, file_id: u64) -> Result<bool> {
    match status.get("status").and_then(Value::as_str) {
        Some("ready") => Ok(true),
        Some("loading") => Ok(false),
        other => Err(Error::Other(format!(
            "Export {} failed with status {}",
            file_id,
            other.unwrap_or("(missing)")
        ))),
    }
}

/// Request an export, wait for it to be ready and return the file contents
async fn fetch_export(
    client: &NessusClient,
    scan_id: u64,
    format: ExportFormat,
) -> Result<Vec<u8>> {
    let scans = client.scans();
    let requested = scans.export(scan_id, &ExportRequest::new(format)).await?;
    let file_id = requested
        .get("file")
        .and_then(Value::as_u64)
        .ok_or_else(|| Error::Other("Export response did not include a file id".to_string()))?;
    debug!("Export {} requested for scan {}", file_id, scan_id);

    for _ in 0..EXPORT_MAX_POLLS {
        let status = scans.export_status(scan_id, file_id).await?;
        if export_ready(&status, file_id)? {
            return scans.download(scan_id, file_id).await;
        }
        tokio::time::sleep(EXPORT_POLL_INTERVAL).await;
    }

    Err(Error::Other(format!(
        "Export {} for scan {} was not ready in time",
        file_id, scan_id
    )))
}

/// Run the `scan export` command
pub async fn export(
    opts: &GlobalOptions,
    scan_id: u64,
    report: ReportFormat,
    path: &Path,
) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let result = fetch_export(&ctx.client, scan_id, report.into()).await;
    ctx.close().await;
    let contents = result?;

    std::fs::write(path, &contents)?;
    output::print_success(&format!(
        "Wrote {} bytes to {}",
        contents.len(),
        path.display()
    ));
    Ok(())
}

/// Run the `scan timezones` command
pub async fn timezones(opts: &GlobalOptions) -> Result<()> {
    let ctx = CommandContext::new(opts).await?;
    let result = ctx.client.scans().timezones().await;
    let format = ctx.format;
    ctx.close().await;

    output::print_list(&result?, "timezones", &TIMEZONE_COLUMNS, format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_filter_folder() {
        let scans = json!({
            "folders": [{ "id": 2 }, { "id": 3 }],
            "scans": [
                { "id": 1, "folder_id": 2 },
                { "id": 4, "folder_id": 3 },
                { "id": 5, "folder_id": 2 }
            ]
        });

        let filtered = filter_folder(scans, 2);
        let ids: Vec<u64> = filtered["scans"]
            .as_array()
            .unwrap()
            .iter()
            .map(|s| s["id"].as_u64().unwrap())
            .collect();
        assert_eq!(ids, vec![1, 5]);
        assert_eq!(filtered["folders"].as_array().unwrap().len(), 2);
    }

    #[test]
    fn test_filter_folder_null_scans() {
        let filtered = filter_folder(json!({ "scans": null }), 2);
        assert!(filtered["scans"].is_null());
    }

    #[test]
    fn test_export_ready_states() {
        assert!(export_ready(&json!({ "status": "ready" }), 9).unwrap());
        assert!(!export_ready(&json!({ "status": "loading" }), 9).unwrap());
    }

    #[test]
    fn test_export_error_stops_polling() {
        let err = export_ready(&json!({ "status": "error" }), 9).unwrap_err();
        assert!(err.to_string().contains("Export 9 failed with status error"));

        let err = export_ready(&json!({}), 9).unwrap_err();
        assert!(matches!(err, Error::Other(_)));
    }

    #[test]
    fn test_report_format_conversion() {
        assert_eq!(ExportFormat::from(ReportFormat::Csv), ExportFormat::Csv);
        assert_eq!(ExportFormat::from(ReportFormat::Nessus), ExportFormat::Nessus);
    }
}
