//! Shared HTTP adapter state.
//!
//! Purpose: carry the per-process collaborators page handlers need to build
//! a router for each request. The session differs per request, so gateways
//! are assembled on demand around the request's storage.

use std::sync::Arc;

use reqwest::{Client, Url};

use crate::domain::ports::{BillsGateway, FixtureBillsGateway, KeyValueStorage};
use crate::outbound::HttpBillsGateway;
use crate::outbound::bills_api::bills_endpoint;

/// Modal width assumed when rendering receipt previews server-side.
pub const DEFAULT_MODAL_WIDTH: u32 = 800;

/// Where bills come from.
#[derive(Clone)]
pub enum BillsSource {
    /// Serve the built-in demonstration bills.
    Fixtures,
    /// Call the bills REST API with a shared client.
    Api {
        /// Pooled HTTP client.
        client: Client,
        /// Bills collection URL.
        endpoint: Url,
    },
}

impl BillsSource {
    /// Source calling the API rooted at `base_url`.
    pub fn api(client: Client, base_url: &Url) -> Self {
        Self::Api {
            client,
            endpoint: bills_endpoint(base_url),
        }
    }
}

/// Dependency bundle for page handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Bills source for fetching routes.
    pub bills: BillsSource,
    /// Modal width handed to the receipt preview.
    pub modal_width: u32,
}

impl HttpState {
    /// Construct state for the given bills source.
    pub fn new(bills: BillsSource) -> Self {
        Self {
            bills,
            modal_width: DEFAULT_MODAL_WIDTH,
        }
    }

    /// Gateway for one request, reading its bearer token from `storage`.
    pub fn gateway(&self, storage: Arc<dyn KeyValueStorage>) -> Arc<dyn BillsGateway> {
        match &self.bills {
            BillsSource::Fixtures => Arc::new(FixtureBillsGateway),
            BillsSource::Api { client, endpoint } => Arc::new(HttpBillsGateway::with_client(
                client.clone(),
                endpoint.clone(),
                storage,
            )),
        }
    }
}
