//! File conversion endpoints

use crate::error::Result;
use crate::http::HttpClient;
use crate::models::{FileConversion, FileExportFormat, FileImportFormat};
use crate::pagination::ScanParams;
use bytes::Bytes;
use tracing::debug;

/// Access to file conversion
#[derive(Debug, Clone, Copy)]
pub struct File<'a> {
    http: &'a HttpClient,
}

impl<'a> File<'a> {
    pub(crate) fn new(http: &'a HttpClient) -> Self {
        Self { http }
    }

    /// Upload a file for conversion.
    ///
    /// Small files may come back already completed; otherwise poll with
    /// [`get_conversion`](Self::get_conversion).
    pub async fn create_conversion(
        &self,
        src_format: FileImportFormat,
        output_format: FileExportFormat,
        body: impl Into<Bytes>,
    ) -> Result<FileConversion> {
        let body = body.into();
        debug!(
            "Uploading {} bytes for {} -> {} conversion",
            body.len(),
            src_format,
            output_format
        );
        self.http
            .post_bytes(
                &format!("/file/conversion/{src_format}/{output_format}"),
                &ScanParams::new(),
                body,
                "application/octet-stream",
            )
            .await
    }

    /// Fetch the current state of a conversion
    pub async fn get_conversion(&self, id: &str) -> Result<FileConversion> {
        self.http
            .get_json(&format!("/async/operations/{id}"), &ScanParams::new())
            .await
    }
}
