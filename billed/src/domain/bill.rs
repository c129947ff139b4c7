//! Bill records and their display rows.
//!
//! A [`Bill`] is exactly what the data gateway returns. A [`BillRow`] is the
//! projection the bills table renders: formatted date, status label, and the
//! raw date kept aside as the ordering key.

use std::cmp::Ordering;
use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::warn;

use super::formatting::{format_date, format_status, parse_bill_date};

/// Gateway-assigned bill identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct BillId(String);

impl BillId {
    /// Wrap a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }
}

impl AsRef<str> for BillId {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for BillId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

/// Review status of a bill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BillStatus {
    /// Awaiting review.
    Pending,
    /// Approved by an administrator.
    Accepted,
    /// Rejected by an administrator.
    Refused,
}

impl BillStatus {
    /// Every status, in dashboard display order.
    pub const ALL: [Self; 3] = [Self::Pending, Self::Accepted, Self::Refused];

    /// Wire representation.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Refused => "refused",
        }
    }
}

/// Expense-report line item as returned by the data gateway.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Bill {
    /// Record identity.
    pub id: BillId,
    /// Review status.
    pub status: BillStatus,
    /// Expense date, nominally `YYYY-MM-DD`.
    pub date: String,
    /// Amount in euros.
    pub amount: f64,
    /// Free-form bill name.
    #[serde(default)]
    pub name: String,
    /// Expense category (transport, lodging, ...).
    #[serde(rename = "type", default)]
    pub expense_type: Option<String>,
    /// URL of the attached receipt.
    #[serde(default)]
    pub file_url: Option<String>,
    /// Original file name of the attached receipt.
    #[serde(default)]
    pub file_name: Option<String>,
    /// Email of the employee who filed the bill.
    #[serde(default)]
    pub email: Option<String>,
    /// VAT amount as entered.
    #[serde(default)]
    pub vat: Option<String>,
    /// VAT percentage.
    #[serde(default)]
    pub pct: Option<u32>,
    /// Employee commentary.
    #[serde(default)]
    pub commentary: Option<String>,
    /// Administrator commentary.
    #[serde(default)]
    pub comment_admin: Option<String>,
}

/// Display projection of a [`Bill`].
#[derive(Debug, Clone, PartialEq)]
pub struct BillRow {
    /// Record identity.
    pub id: BillId,
    /// Expense category, empty when unknown.
    pub expense_type: String,
    /// Bill name.
    pub name: String,
    /// Date as displayed; the raw value when it could not be formatted.
    pub date: String,
    /// Amount in euros.
    pub amount: f64,
    /// Status label.
    pub status: &'static str,
    /// Status the label was derived from.
    pub status_kind: BillStatus,
    /// Receipt URL, if any.
    pub file_url: Option<String>,
    /// Email of the employee who filed the bill.
    pub email: Option<String>,
    raw_date: String,
}

impl BillRow {
    /// Project a gateway record for display.
    ///
    /// A date that fails to format is kept verbatim so one corrupted record
    /// does not blank the whole list.
    pub fn from_bill(bill: &Bill) -> Self {
        let date = match format_date(&bill.date) {
            Ok(formatted) => formatted,
            Err(error) => {
                warn!(bill_id = %bill.id, %error, "keeping unformatted bill date");
                bill.date.clone()
            }
        };
        Self {
            id: bill.id.clone(),
            expense_type: bill.expense_type.clone().unwrap_or_default(),
            name: bill.name.clone(),
            date,
            amount: bill.amount,
            status: format_status(bill.status),
            status_kind: bill.status,
            file_url: bill.file_url.clone(),
            email: bill.email.clone(),
            raw_date: bill.date.clone(),
        }
    }

    /// Gateway date the row was built from.
    pub fn raw_date(&self) -> &str {
        self.raw_date.as_str()
    }

    fn sort_key(&self) -> (Option<NaiveDate>, &str) {
        (parse_bill_date(&self.raw_date).ok(), self.raw_date.as_str())
    }
}

impl From<&Bill> for BillRow {
    fn from(bill: &Bill) -> Self {
        Self::from_bill(bill)
    }
}

/// Order rows most recent first.
///
/// The sort is stable, so rows sharing a date keep gateway order. Rows whose
/// date does not parse sink to the bottom.
pub fn sort_anti_chrono(rows: &mut [BillRow]) {
    rows.sort_by(anti_chrono);
}

fn anti_chrono(a: &BillRow, b: &BillRow) -> Ordering {
    b.sort_key().cmp(&a.sort_key())
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    fn bill(id: &str, date: &str) -> Bill {
        Bill {
            id: BillId::new(id),
            status: BillStatus::Pending,
            date: date.to_owned(),
            amount: 100.0,
            name: format!("bill {id}"),
            expense_type: Some("Transports".to_owned()),
            file_url: None,
            file_name: None,
            email: Some("a@a".to_owned()),
            vat: None,
            pct: None,
            commentary: None,
            comment_admin: None,
        }
    }

    fn ids(rows: &[BillRow]) -> Vec<&str> {
        rows.iter().map(|row| row.id.as_ref()).collect()
    }

    #[test]
    fn deserialises_gateway_payload() {
        let raw = serde_json::json!({
            "id": "47qAXb6fIm2zOKkLzMro",
            "status": "pending",
            "date": "2004-04-04",
            "amount": 400,
            "name": "encore",
            "type": "Hôtel et logement",
            "fileUrl": "https://test.storage.tld/receipt.jpg",
            "fileName": "receipt.jpg",
            "email": "a@a",
            "vat": "80",
            "pct": 20,
            "commentAdmin": "ok"
        });
        let bill: Bill = serde_json::from_value(raw).expect("valid bill");
        assert_eq!(bill.expense_type.as_deref(), Some("Hôtel et logement"));
        assert_eq!(bill.comment_admin.as_deref(), Some("ok"));
        assert_eq!(bill.amount, 400.0);
    }

    #[test]
    fn row_formats_date_and_status() {
        let row = BillRow::from_bill(&bill("a", "2004-04-04"));
        assert_eq!(row.date, "4 Avr. 04");
        assert_eq!(row.status, "En attente");
        assert_eq!(row.raw_date(), "2004-04-04");
    }

    #[test]
    fn row_keeps_corrupted_date_verbatim() {
        let row = BillRow::from_bill(&bill("a", "2004-99-99"));
        assert_eq!(row.date, "2004-99-99");
    }

    #[rstest]
    #[case(&["2001-01-01", "2004-04-04", "2003-03-03", "2002-02-02"], &["1", "2", "3", "0"])]
    #[case(&["2004-04-04", "garbage", "2005-05-05"], &["2", "0", "1"])]
    #[case(&["2001-01-01", "2005-05-05T10:00:00.000Z"], &["1", "0"])]
    #[case(&["2003-03-03T08:00:00.000Z", "2004-04-04", "2003-03-03T18:00:00.000Z"], &["1", "2", "0"])]
    fn sorts_most_recent_first(#[case] dates: &[&str], #[case] expected: &[&str]) {
        let mut rows: Vec<BillRow> = dates
            .iter()
            .enumerate()
            .map(|(index, date)| BillRow::from_bill(&bill(&index.to_string(), date)))
            .collect();
        sort_anti_chrono(&mut rows);
        assert_eq!(ids(&rows), expected);
    }

    #[test]
    fn sort_is_stable_for_equal_dates() {
        let mut rows: Vec<BillRow> = ["first", "second", "third"]
            .into_iter()
            .map(|id| BillRow::from_bill(&bill(id, "2004-04-04")))
            .collect();
        sort_anti_chrono(&mut rows);
        assert_eq!(ids(&rows), ["first", "second", "third"]);
    }
}
