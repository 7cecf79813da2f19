//! File uploads (policies, audit files, target lists)

use std::path::Path;
use std::sync::Arc;

use reqwest::multipart::{Form, Part};

use crate::client::transport::Transport;
use crate::client::verify::Messages;
use crate::error::{ApiError, Error, Result};

/// `/file/upload` endpoint
#[derive(Clone)]
pub struct Files {
    transport: Arc<Transport>,
}

impl Files {
    pub(crate) fn new(transport: Arc<Transport>) -> Self {
        Self { transport }
    }

    /// Upload a file from disk; returns the server-side file name
    pub async fn upload(&self, path: &Path, no_encryption: bool) -> Result<String> {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .ok_or_else(|| Error::InvalidInput(format!("Not a file: {}", path.display())))?;
        let contents = tokio::fs::read(path).await?;

        self.upload_bytes(&file_name, contents, no_encryption).await
    }

    /// Upload in-memory contents under `file_name`
    pub async fn upload_bytes(
        &self,
        file_name: &str,
        contents: Vec<u8>,
        no_encryption: bool,
    ) -> Result<String> {
        let form = Form::new()
            .part("file", Part::bytes(contents).file_name(file_name.to_string()))
            .text("no_enc", if no_encryption { "1" } else { "0" });

        let messages = Messages::new().internal_server_error("File failed to upload");
        let body = self
            .transport
            .post_multipart("file/upload", form, &messages)
            .await?;

        body.get("fileuploaded")
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .ok_or_else(|| {
                ApiError::InvalidResponse("Upload response has no `fileuploaded`".to_string())
                    .into()
            })
    }
}
