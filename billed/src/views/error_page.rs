//! Page shown when a fetch fails.

use super::markers::ERROR_MESSAGE;
use super::{RenderContext, escape, vertical_layout};

/// Render the error page with `message` shown as-is.
pub fn render(message: &str, ctx: &RenderContext) -> String {
    format!(
        "<div class='layout'>{layout}<div class='content'>\
         <div class='content-header'><div class='content-title'> Erreur </div></div>\
         <div data-testid=\"{ERROR_MESSAGE}\">{message}</div></div></div>",
        layout = vertical_layout::render(120, ctx),
        message = escape(message),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shows_message_under_error_title() {
        let markup = render("Erreur 500", &RenderContext::default());
        assert!(markup.contains(" Erreur </div>"));
        assert!(markup.contains("<div data-testid=\"error-message\">Erreur 500</div>"));
    }
}
