//! Bills list container: fetches records and handles list interactions.
//!
//! The container is rebuilt on every navigation and holds no cache. Sorting
//! is left to the caller so the fetched order stays observable.

use std::sync::Arc;

use tracing::{debug, info};

use super::routes::RoutePath;
use crate::domain::BillRow;
use crate::domain::ports::{
    BillsGateway, BillsGatewayError, ModalContent, ModalController, Navigator,
};

/// Receipt shown when a bill has no attached file.
pub const PLACEHOLDER_RECEIPT_URL: &str = "/assets/images/receipt-placeholder.png";

/// Fetches bills and reacts to clicks on the bills page.
pub struct BillsContainer {
    gateway: Option<Arc<dyn BillsGateway>>,
    modal: Arc<dyn ModalController>,
    navigator: Arc<dyn Navigator>,
}

impl BillsContainer {
    /// Build a container. Without a gateway, [`Self::get_bills`] yields no rows.
    pub fn new(
        gateway: Option<Arc<dyn BillsGateway>>,
        modal: Arc<dyn ModalController>,
        navigator: Arc<dyn Navigator>,
    ) -> Self {
        Self {
            gateway,
            modal,
            navigator,
        }
    }

    /// Fetch bills and project them for display, in gateway order.
    ///
    /// The gateway error is returned untouched so its message reaches the
    /// error page verbatim.
    pub async fn get_bills(&self) -> Result<Vec<BillRow>, BillsGatewayError> {
        let Some(gateway) = &self.gateway else {
            debug!("no bills gateway configured");
            return Ok(Vec::new());
        };
        let bills = gateway.list().await?;
        debug!(count = bills.len(), "bills fetched");
        Ok(bills.iter().map(BillRow::from_bill).collect())
    }

    /// Handle a click on the "new bill" button.
    pub async fn handle_click_new_bill(&self) {
        self.navigator.on_navigate(RoutePath::NewBill.as_str()).await;
    }

    /// Handle a click on a row's preview icon.
    pub fn handle_click_icon_eye(&self, bill_url: Option<&str>) {
        let bill_url = bill_url
            .map(str::trim)
            .filter(|url| !url.is_empty() && *url != "null")
            .unwrap_or(PLACEHOLDER_RECEIPT_URL);
        let image_width = self.modal.width() / 2;
        info!(bill_url, image_width, "opening receipt preview");
        self.modal.open(ModalContent {
            bill_url: bill_url.to_owned(),
            image_width,
        });
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use crate::domain::ports::{
        MockBillsGateway, MockModalController, MockNavigator, fixture_bills,
    };
    use rstest::rstest;

    fn idle_modal() -> Arc<dyn ModalController> {
        Arc::new(MockModalController::new())
    }

    fn idle_navigator() -> Arc<dyn Navigator> {
        Arc::new(MockNavigator::new())
    }

    #[tokio::test]
    async fn get_bills_formats_in_gateway_order() {
        let mut gateway = MockBillsGateway::new();
        gateway
            .expect_list()
            .times(1)
            .returning(|| Ok(fixture_bills()));
        let container = BillsContainer::new(Some(Arc::new(gateway)), idle_modal(), idle_navigator());

        let rows = container.get_bills().await.expect("bills");
        let dates: Vec<&str> = rows.iter().map(|row| row.date.as_str()).collect();
        assert_eq!(dates, ["4 Avr. 04", "1 Jan. 01", "3 Mar. 03", "2 Fév. 02"]);
    }

    #[rstest]
    #[case("Erreur 404")]
    #[case("Erreur 500")]
    #[tokio::test]
    async fn get_bills_propagates_gateway_message(#[case] message: &'static str) {
        let mut gateway = MockBillsGateway::new();
        gateway
            .expect_list()
            .times(1)
            .returning(move || Err(BillsGatewayError::network_or_server(message)));
        let container = BillsContainer::new(Some(Arc::new(gateway)), idle_modal(), idle_navigator());

        let error = container.get_bills().await.expect_err("gateway failure");
        assert_eq!(error.message(), message);
    }

    #[tokio::test]
    async fn get_bills_without_gateway_is_empty() {
        let container = BillsContainer::new(None, idle_modal(), idle_navigator());
        assert!(container.get_bills().await.expect("no gateway").is_empty());
    }

    #[tokio::test]
    async fn new_bill_click_navigates_once() {
        let mut navigator = MockNavigator::new();
        navigator
            .expect_on_navigate()
            .withf(|path| path == "#employee/bill/new")
            .times(1)
            .return_const(());
        let container = BillsContainer::new(None, idle_modal(), Arc::new(navigator));

        container.handle_click_new_bill().await;
    }

    #[rstest]
    #[case(Some("https://test.storage.tld/a.jpg"), "https://test.storage.tld/a.jpg")]
    #[case(None, PLACEHOLDER_RECEIPT_URL)]
    #[case(Some(""), PLACEHOLDER_RECEIPT_URL)]
    #[case(Some("null"), PLACEHOLDER_RECEIPT_URL)]
    fn eye_click_opens_modal_once(#[case] bill_url: Option<&str>, #[case] expected: &str) {
        let mut modal = MockModalController::new();
        modal.expect_width().return_const(801_u32);
        let expected = expected.to_owned();
        modal
            .expect_open()
            .withf(move |content| content.bill_url == expected && content.image_width == 400)
            .times(1)
            .return_const(());
        let container = BillsContainer::new(None, Arc::new(modal), idle_navigator());

        container.handle_click_icon_eye(bill_url);
    }
}
