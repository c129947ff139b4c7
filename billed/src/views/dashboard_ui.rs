//! Admin dashboard: every bill, grouped by review status.
//!
//! Read-only. Each status section lists its bills in the order given.

use super::markers::DASHBOARD_STATUS;
use super::{RenderContext, error_page, escape, loading_page, vertical_layout};
use crate::domain::{BillRow, BillStatus, ViewState, format_status};

/// Render the dashboard for `state`.
pub fn render(state: &ViewState, ctx: &RenderContext) -> String {
    match state {
        ViewState::Loading => loading_page::render(ctx),
        ViewState::Error(message) => error_page::render(message, ctx),
        ViewState::Normal(bills) => {
            let sections: String = BillStatus::ALL
                .into_iter()
                .map(|status| section(status, bills))
                .collect();
            format!(
                "<div class='layout'>{layout}<div class='content'>\
                 <div class='content-header'><div class='content-title'> Validations </div></div>\
                 <div class='dashboard-content'>{sections}</div></div></div>",
                layout = vertical_layout::render(120, ctx),
            )
        }
    }
}

fn section(status: BillStatus, bills: &[BillRow]) -> String {
    let cards: Vec<String> = bills
        .iter()
        .filter(|bill| bill.status_kind == status)
        .map(card)
        .collect();
    format!(
        "<div class='status-bills-header' data-testid=\"{DASHBOARD_STATUS}-{key}\">\
         <h3> {label} ({count}) </h3></div><div class='status-bills-container'>{cards}</div>",
        key = status.as_str(),
        label = format_status(status),
        count = cards.len(),
        cards = cards.concat(),
    )
}

fn card(bill: &BillRow) -> String {
    format!(
        "<div class='bill-card' id=\"open-bill{id}\" data-testid=\"open-bill{id}\">\
         <div class='bill-card-name-container'><div class='bill-card-name'> {email} </div>\
         <span class='bill-card-grey'> ... </span></div>\
         <div class='name-price-container'><span> {name} </span><span> {amount} € </span></div>\
         <div class='date-type-container'><span> {date} </span><span> {expense_type} </span></div>\
         </div>",
        id = escape(bill.id.as_ref()),
        email = escape(bill.email.as_deref().unwrap_or_default()),
        name = escape(&bill.name),
        amount = bill.amount,
        date = escape(&bill.date),
        expense_type = escape(&bill.expense_type),
    )
}
