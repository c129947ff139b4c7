//! Pure page renderers.
//!
//! Every renderer maps a [`ViewState`](crate::domain::ViewState) and a
//! [`RenderContext`] to a markup string. Renderers never read storage or
//! mutate anything; the router decides what context to pass.

pub mod bills_ui;
pub mod dashboard_ui;
pub mod error_page;
pub mod loading_page;
pub mod login_ui;
pub mod markers;
pub mod modal;
pub mod new_bill_ui;
pub mod not_found;
pub mod shell;
pub mod vertical_layout;

use std::borrow::Cow;

use crate::domain::Role;

/// Icon of the vertical navigation bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LayoutIcon {
    /// Bills list.
    Window,
    /// New bill form.
    Mail,
}

/// Inputs a renderer needs besides the view state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RenderContext {
    /// Role of the signed-in user; `None` renders the anonymous layout.
    pub role: Option<Role>,
    /// Navigation icon to highlight.
    pub active_icon: Option<LayoutIcon>,
}

impl RenderContext {
    /// Context for a signed-in user.
    pub fn new(role: Role, active_icon: Option<LayoutIcon>) -> Self {
        Self {
            role: Some(role),
            active_icon,
        }
    }
}

/// Escape text for use in element content and double-quoted attribute values.
pub(crate) fn escape(text: &str) -> Cow<'_, str> {
    html_escape::encode_double_quoted_attribute(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup_characters() {
        assert_eq!(
            escape(r#"<b>"Tom" & Jerry</b>"#),
            "&lt;b&gt;&quot;Tom&quot; &amp; Jerry&lt;/b&gt;"
        );
    }

    #[test]
    fn leaves_plain_text_untouched() {
        assert!(matches!(
            escape("Hôtel et logement 400 €"),
            Cow::Borrowed("Hôtel et logement 400 €")
        ));
    }
}
