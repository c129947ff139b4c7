//! New bill form page.

use super::markers::FORM_NEW_BILL;
use super::{RenderContext, vertical_layout};
use crate::domain::ViewState;

const EXPENSE_TYPES: [&str; 7] = [
    "Transports",
    "Restaurants et bars",
    "Hôtel et logement",
    "Services en ligne",
    "IT et électronique",
    "Equipement et matériel",
    "Fournitures de bureau",
];

/// Render the new bill form. The view state is ignored.
pub fn render(_state: &ViewState, ctx: &RenderContext) -> String {
    let options: String = EXPENSE_TYPES
        .iter()
        .map(|expense_type| format!("<option>{expense_type}</option>"))
        .collect();
    format!(
        "<div class='layout'>{layout}<div class='content'>\
         <div class='content-header'><div class='content-title'> Envoyer une note de frais </div></div>\
         <div class=\"form-newbill-container content-inner\">\
         <form data-testid=\"{FORM_NEW_BILL}\">\
         <label for=\"expense-type\">Type de dépense</label>\
         <select required data-testid=\"expense-type\">{options}</select>\
         <label for=\"expense-name\">Nom de la dépense</label>\
         <input type=\"text\" data-testid=\"expense-name\" placeholder=\"Vol Paris Londres\" />\
         <label for=\"datepicker\">Date</label>\
         <input required type=\"date\" data-testid=\"datepicker\" />\
         <label for=\"amount\">Montant TTC</label>\
         <input required type=\"number\" data-testid=\"amount\" placeholder=\"348\" />\
         <label for=\"vat\">TVA</label>\
         <input type=\"number\" data-testid=\"vat\" placeholder=\"70\" />\
         <input type=\"number\" data-testid=\"pct\" placeholder=\"20\" />\
         <label for=\"commentary\">Commentaire</label>\
         <textarea data-testid=\"commentary\" rows=\"3\"></textarea>\
         <label for=\"file\">Justificatif</label>\
         <input required type=\"file\" data-testid=\"file\" />\
         <button type=\"submit\" id='btn-send-bill' class=\"btn btn-primary\">Envoyer</button>\
         </form></div></div></div>",
        layout = vertical_layout::render(120, ctx),
    )
}
