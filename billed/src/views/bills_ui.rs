//! Employee bills list page.
//!
//! Rows are rendered in the order given. Callers sort before rendering; see
//! [`sort_anti_chrono`](crate::domain::sort_anti_chrono).

use super::markers::{BTN_NEW_BILL, ICON_EYE, TBODY};
use super::{RenderContext, error_page, escape, loading_page, modal, vertical_layout};
use crate::domain::{BillRow, ViewState};

const EYE_ICON: &str = "<svg width='20' height='20' viewBox='0 0 20 20'><ellipse cx='10' cy='10' rx='9' ry='5'/><circle cx='10' cy='10' r='2'/></svg>";

/// Render the bills page for `state`.
///
/// # Examples
/// ```
/// use billed::domain::ViewState;
/// use billed::views::{RenderContext, bills_ui};
///
/// let markup = bills_ui::render(&ViewState::Loading, &RenderContext::default());
/// assert!(markup.contains("Loading..."));
/// ```
pub fn render(state: &ViewState, ctx: &RenderContext) -> String {
    match state {
        ViewState::Loading => loading_page::render(ctx),
        ViewState::Error(message) => error_page::render(message, ctx),
        ViewState::Normal(bills) => format!(
            "<div class='layout'>{layout}<div class='content'>\
             <div class='content-header'><div class='content-title'> Mes notes de frais </div>\
             <button type=\"button\" data-testid='{BTN_NEW_BILL}' class=\"btn btn-primary\">\
             Nouvelle note de frais</button></div>\
             <div id=\"data-table\"><table id=\"example\" class=\"table table-striped\" style=\"width:100%\">\
             <thead><tr><th>Type</th><th>Nom</th><th>Date</th><th>Montant</th><th>Statut</th>\
             <th>Actions</th></tr></thead><tbody data-testid=\"{TBODY}\">{rows}</tbody></table></div>\
             </div>{modal}</div>",
            layout = vertical_layout::render(120, ctx),
            rows = rows(bills),
            modal = modal::frame(),
        ),
    }
}

fn rows(bills: &[BillRow]) -> String {
    bills.iter().map(row).collect()
}

fn row(bill: &BillRow) -> String {
    format!(
        "<tr><td>{expense_type}</td><td>{name}</td><td>{date}</td><td>{amount} €</td>\
         <td>{status}</td><td>{actions}</td></tr>",
        expense_type = escape(&bill.expense_type),
        name = escape(&bill.name),
        date = escape(&bill.date),
        amount = bill.amount,
        status = bill.status,
        actions = actions(bill.file_url.as_deref()),
    )
}

fn actions(bill_url: Option<&str>) -> String {
    format!(
        "<div class=\"icon-actions\"><div id=\"eye\" data-testid=\"{ICON_EYE}\" \
         data-bill-url=\"{url}\">{EYE_ICON}</div></div>",
        url = escape(bill_url.unwrap_or_default()),
    )
}
