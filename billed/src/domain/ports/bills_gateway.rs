//! Driven port for fetching bill records.
//!
//! The list container calls this port once per navigation. A call resolves
//! exactly once: the full collection or one error whose message the error
//! page shows verbatim.

use async_trait::async_trait;

use super::define_port_error;
use crate::domain::{Bill, BillId, BillStatus};

define_port_error! {
    /// Errors surfaced by the data gateway.
    pub enum BillsGatewayError {
        /// The request failed in transport or the server answered with an
        /// error. The message is user-facing.
        NetworkOrServer => "{message}",
    }
}

/// Port for listing bills.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait BillsGateway: Send + Sync {
    /// Fetch every bill visible to the current session.
    async fn list(&self) -> Result<Vec<Bill>, BillsGatewayError>;
}

/// In-memory gateway serving [`fixture_bills`].
#[derive(Debug, Default, Clone, Copy)]
pub struct FixtureBillsGateway;

#[async_trait]
impl BillsGateway for FixtureBillsGateway {
    async fn list(&self) -> Result<Vec<Bill>, BillsGatewayError> {
        Ok(fixture_bills())
    }
}

/// Four demonstration bills, deliberately out of date order.
pub fn fixture_bills() -> Vec<Bill> {
    vec![
        fixture_bill(FixtureFields {
            id: "47qAXb6fIm2zOKkLzMro",
            status: BillStatus::Pending,
            date: "2004-04-04",
            amount: 400.0,
            name: "encore",
            expense_type: "Hôtel et logement",
            file_url: Some("https://test.storage.tld/v0/b/billable/preview-facture-free-201801-pdf-1.jpg"),
            comment_admin: Some("ok"),
        }),
        fixture_bill(FixtureFields {
            id: "BeKy5Mo4jkmdfPGYpTxZ",
            status: BillStatus::Refused,
            date: "2001-01-01",
            amount: 100.0,
            name: "test1",
            expense_type: "Hôtel et logement",
            file_url: None,
            comment_admin: Some("en fait non"),
        }),
        fixture_bill(FixtureFields {
            id: "UIUZtnPQvnbFnB0ozvJh",
            status: BillStatus::Accepted,
            date: "2003-03-03",
            amount: 300.0,
            name: "test3",
            expense_type: "Services en ligne",
            file_url: Some("https://test.storage.tld/v0/b/billable/facture-client-php-exportee-dans-document-pdf-enregistre-sur-disque-dur.png"),
            comment_admin: Some("bon bah d'accord"),
        }),
        fixture_bill(FixtureFields {
            id: "qcCK3SzECmaZAGRrHjaC",
            status: BillStatus::Refused,
            date: "2002-02-02",
            amount: 200.0,
            name: "test2",
            expense_type: "Transports",
            file_url: Some("https://test.storage.tld/v0/b/billable/preview-facture-free-201801-pdf-1.jpg"),
            comment_admin: Some("pas la bonne facture"),
        }),
    ]
}

struct FixtureFields {
    id: &'static str,
    status: BillStatus,
    date: &'static str,
    amount: f64,
    name: &'static str,
    expense_type: &'static str,
    file_url: Option<&'static str>,
    comment_admin: Option<&'static str>,
}

fn fixture_bill(spec: FixtureFields) -> Bill {
    let file_name = spec
        .file_url
        .and_then(|url| url.rsplit('/').next())
        .map(str::to_owned);
    Bill {
        id: BillId::new(spec.id),
        status: spec.status,
        date: spec.date.to_owned(),
        amount: spec.amount,
        name: spec.name.to_owned(),
        expense_type: Some(spec.expense_type.to_owned()),
        file_url: spec.file_url.map(str::to_owned),
        file_name,
        email: Some("a@a".to_owned()),
        vat: Some("20".to_owned()),
        pct: Some(20),
        commentary: Some("séminaire billed".to_owned()),
        comment_admin: spec.comment_admin.map(str::to_owned),
    }
}
