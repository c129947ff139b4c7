//! Receipt preview modal markup.

use super::escape;
use crate::domain::ports::ModalContent;

/// Element id of the receipt modal.
pub const MODAL_ID: &str = "modaleFile";

/// Empty modal frame appended to the bills page.
pub fn frame() -> String {
    format!(
        "<div class=\"modal fade\" id=\"{MODAL_ID}\" tabindex=\"-1\" role=\"dialog\" \
         aria-hidden=\"true\"><div class=\"modal-dialog modal-dialog-centered modal-lg\" \
         role=\"document\"><div class=\"modal-content\"><div class=\"modal-header\">\
         <h5 class=\"modal-title\">Justificatif</h5><button type=\"button\" class=\"close\" \
         data-dismiss=\"modal\" aria-label=\"Close\"><span aria-hidden=\"true\">&times;</span>\
         </button></div><div class=\"modal-body\"></div></div></div></div>"
    )
}

/// Modal body showing the receipt image.
pub fn receipt_body(content: &ModalContent) -> String {
    format!(
        "<div style='text-align: center;' class=\"bill-proof-container\">\
         <img width={width} src=\"{url}\" alt=\"Bill\" /></div>",
        width = content.image_width,
        url = escape(&content.bill_url),
    )
}
