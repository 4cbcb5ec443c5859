use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use serde_json::json;

use crate::constants::SHEETS_API_URL;
use crate::error::{SyncError, SyncResult};
use crate::logging::log_debug;

pub struct SheetsClient {
    client: reqwest::Client,
    base_url: String,
}

impl SheetsClient {
    pub fn new(access_token: &str) -> SyncResult<Self> {
        Self::with_url(access_token, SHEETS_API_URL)
    }

    /// Build a client against an explicit endpoint. Used by the integration
    /// tests to point at a local mock server.
    pub fn with_url(access_token: &str, base_url: &str) -> SyncResult<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&format!("Bearer {}", access_token))
                .map_err(|e| SyncError::ConfigError(format!("Invalid access token: {}", e)))?,
        );

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Clear every prior value in the addressed range.
    pub async fn clear_range(&self, spreadsheet_id: &str, range: &str) -> SyncResult<()> {
        let url = format!(
            "{}/v4/spreadsheets/{}/values/{}:clear",
            self.base_url,
            spreadsheet_id,
            urlencoding::encode(range)
        );
        log_debug(&format!("Clearing range {}", range));

        let response = self.client.post(&url).json(&json!({})).send().await?;
        Self::check_response(response, "clear").await
    }

    /// Append rows after the last populated row of the range's table.
    pub async fn append_rows(
        &self,
        spreadsheet_id: &str,
        range: &str,
        values: &[Vec<String>],
    ) -> SyncResult<()> {
        let url = format!(
            "{}/v4/spreadsheets/{}/values/{}:append",
            self.base_url,
            spreadsheet_id,
            urlencoding::encode(range)
        );
        log_debug(&format!("Appending {} rows to {}", values.len(), range));

        let response = self
            .client
            .post(&url)
            .query(&[
                ("valueInputOption", "USER_ENTERED"),
                ("insertDataOption", "INSERT_ROWS"),
            ])
            .json(&json!({ "values": values }))
            .send()
            .await?;

        Self::check_response(response, "append").await
    }

    async fn check_response(response: reqwest::Response, operation: &str) -> SyncResult<()> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        Err(SyncError::SheetError(format!(
            "{} returned HTTP {}: {}",
            operation, status, body
        )))
    }
}
