//! Reqwest-backed bills gateway adapter.
//!
//! This adapter owns transport details only: the bearer token header, HTTP
//! error mapping, and JSON decoding into domain bills. Timeouts belong to the
//! shared client.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::{debug, warn};

use super::dto::{BillsResponseDto, ErrorBodyDto};
use crate::domain::ports::{BillsGateway, BillsGatewayError, KeyValueStorage};
use crate::domain::{Bill, JWT_STORAGE_KEY};

/// Gateway that lists bills with `GET {base}/bills`.
pub struct HttpBillsGateway {
    client: Client,
    endpoint: Url,
    storage: Arc<dyn KeyValueStorage>,
}

impl HttpBillsGateway {
    /// Build an adapter around a shared client, reading the bearer token
    /// from `storage` on every call.
    ///
    /// `endpoint` is the bills collection URL; see [`bills_endpoint`].
    pub fn with_client(client: Client, endpoint: Url, storage: Arc<dyn KeyValueStorage>) -> Self {
        Self {
            client,
            endpoint,
            storage,
        }
    }

    fn bearer_token(&self) -> Option<String> {
        match self.storage.get(JWT_STORAGE_KEY) {
            Ok(token) => token.filter(|token| !token.trim().is_empty()),
            Err(error) => {
                warn!(%error, "bearer token unreadable; calling bills API anonymously");
                None
            }
        }
    }
}

#[async_trait]
impl BillsGateway for HttpBillsGateway {
    async fn list(&self) -> Result<Vec<Bill>, BillsGatewayError> {
        let mut request = self
            .client
            .get(self.endpoint.clone())
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(token) = self.bearer_token() {
            request = request.bearer_auth(token);
        }
        let response = request.send().await.map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        let bills = parse_bills(body.as_ref())?;
        debug!(count = bills.len(), endpoint = %self.endpoint, "bills API answered");
        Ok(bills)
    }
}

/// Resolve the bills collection URL under `base_url`, keeping any path
/// prefix the base carries.
pub fn bills_endpoint(base_url: &Url) -> Url {
    let mut endpoint = base_url.clone();
    let path = format!("{}/bills", base_url.path().trim_end_matches('/'));
    endpoint.set_path(&path);
    endpoint.set_query(None);
    endpoint
}

fn parse_bills(body: &[u8]) -> Result<Vec<Bill>, BillsGatewayError> {
    serde_json::from_slice::<BillsResponseDto>(body).map_err(|error| {
        BillsGatewayError::network_or_server(format!("invalid bills payload: {error}"))
    })
}

fn map_transport_error(error: reqwest::Error) -> BillsGatewayError {
    BillsGatewayError::network_or_server(error.to_string())
}

fn map_status_error(status: StatusCode, body: &[u8]) -> BillsGatewayError {
    let message = ErrorBodyDto::message_from(body)
        .unwrap_or_else(|| format!("Erreur {}", status.as_u16()));
    BillsGatewayError::network_or_server(message)
}
