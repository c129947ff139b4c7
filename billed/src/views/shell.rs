//! Full HTML document wrapping the router's root content.

/// Wrap `root` markup in the application document.
pub fn document(root: &str) -> String {
    format!(
        "<!DOCTYPE html><html lang=\"fr\"><head><meta charset=\"utf-8\">\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\
         <title>Billed</title></head><body><div id=\"root\">{root}</div></body></html>"
    )
}
