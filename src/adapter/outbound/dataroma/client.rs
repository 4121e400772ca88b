//! HTTP client for the disclosure page.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client as HttpClient;
use tracing::debug;

use super::settings::SourceConfig;
use super::table::extract_table;
use crate::domain::RawTable;
use crate::error::FetchError;
use crate::port::DisclosureSource;

/// [`DisclosureSource`] that scrapes the Dataroma insider page.
pub struct DataromaSource {
    http: HttpClient,
    config: SourceConfig,
}

impl DataromaSource {
    /// Build a source with a timeout-bounded HTTP client.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn from_config(config: SourceConfig) -> Result<Self, FetchError> {
        let http = HttpClient::builder()
            .timeout(Duration::from_secs(config.fetch_timeout_seconds))
            .user_agent(config.user_agent.clone())
            .build()?;
        Ok(Self { http, config })
    }
}

#[async_trait]
impl DisclosureSource for DataromaSource {
    async fn fetch_table(&self) -> Result<RawTable, FetchError> {
        debug!(url = %self.config.url, "Fetching disclosure page");
        let response = self.http.get(&self.config.url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }

        let body = response.text().await?;
        let table = extract_table(&body, &self.config.table_marker)?;
        if table.is_empty() {
            return Err(FetchError::EmptyTable);
        }

        debug!(
            rows = table.len(),
            columns = table.headers().len(),
            "Disclosure table parsed"
        );
        Ok(table)
    }

    fn name(&self) -> &str {
        &self.config.url
    }
}
