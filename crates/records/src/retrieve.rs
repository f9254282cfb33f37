//! Retrieve orchestration
//!
//! One call issues two sequential requests: the requested page, then the page
//! after it with identical filters. Only the probe's emptiness is used; its
//! records are dropped. Probe failures never fail the call.

use records_core::aggregate::{aggregate, RetrieveResponse};
use records_core::pagination::{confirm_next_page, previous_page, provisional_next_page};
use records_core::query::{build_query, RecordsQuery, RetrieveOptions};
use records_core::response::{check_status, decode_records, Record};

use crate::config::RecordsConfig;
use crate::error::Error;
use crate::transport::{HttpTransport, Transport};

#[derive(Debug, Clone)]
pub struct RecordsClient<T> {
    transport: T,
    config: RecordsConfig,
}

impl RecordsClient<HttpTransport> {
    /// Client using a default `reqwest::Client`
    pub fn http(config: RecordsConfig) -> Self {
        Self::new(HttpTransport::default(), config)
    }
}

impl<T: Transport> RecordsClient<T> {
    pub fn new(transport: T, config: RecordsConfig) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &RecordsConfig {
        &self.config
    }

    /// Retrieve one page and its summary
    ///
    /// Returns `None` when the requested page could not be fetched or decoded,
    /// after logging the cause. `None` means "could not retrieve", not an
    /// empty page.
    pub async fn retrieve(&self, options: Option<RetrieveOptions>) -> Option<RetrieveResponse> {
        let options = options.unwrap_or_default();

        match self.try_retrieve(&options).await {
            Ok(response) => Some(response),
            Err(err) => {
                log::error!("Failed to retrieve records: {err}");
                None
            }
        }
    }

    /// Same as [`retrieve`](Self::retrieve), keeping the primary-path error
    ///
    /// # Errors
    /// Fails on an invalid page, a transport failure, an HTTP status >= 400 or
    /// an undecodable body for the requested page. Probe failures only clear
    /// `next_page`.
    pub async fn try_retrieve(&self, options: &RetrieveOptions) -> Result<RetrieveResponse, Error> {
        let query = build_query(options)?;
        for color in &query.unknown_colors {
            log::warn!("{color} is not a valid color");
        }

        let records = self.fetch_page(&query).await?;
        let summary = aggregate(records, options);

        let previous = previous_page(options.page);
        let provisional = provisional_next_page(options.page);
        let probed = match self.fetch_page(&query.for_page(provisional)).await {
            Ok(records) => Some(records.len()),
            Err(err) => {
                log::warn!("Probe for page {provisional} failed, assuming last page: {err}");
                None
            }
        };

        Ok(summary.into_response(previous, confirm_next_page(provisional, probed)))
    }

    async fn fetch_page(&self, query: &RecordsQuery) -> Result<Vec<Record>, Error> {
        let uri = self.config.endpoint_uri(query)?;
        log::debug!("GET {uri}");

        let response = self.transport.get(&uri).await?;
        check_status(response.status, &self.config.base_url)?;

        Ok(decode_records(&response.body)?)
    }
}
