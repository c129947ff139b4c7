//! Left-hand navigation bar.

use super::markers::{ICON_MAIL, ICON_WINDOW};
use super::{LayoutIcon, RenderContext};
use crate::domain::Role;

const WINDOW_ICON: &str = "<svg width='32' height='32' viewBox='0 0 32 32'><rect x='4' y='6' width='24' height='20' rx='2'/></svg>";
const MAIL_ICON: &str = "<svg width='32' height='32' viewBox='0 0 32 32'><path d='M4 8h24v16H4z M4 8l12 9 12-9'/></svg>";

/// Render the navigation bar. Only employees get navigation icons.
pub fn render(height_vh: u32, ctx: &RenderContext) -> String {
    let icons = match ctx.role {
        Some(Role::Employee) => format!(
            "<div id='layout-icon1' data-testid=\"{ICON_WINDOW}\"{window}>{WINDOW_ICON}</div>\
             <div id='layout-icon2' data-testid=\"{ICON_MAIL}\"{mail}>{MAIL_ICON}</div>",
            window = active_class(ctx, LayoutIcon::Window),
            mail = active_class(ctx, LayoutIcon::Mail),
        ),
        Some(Role::Admin) | None => String::new(),
    };
    format!(
        "<div class='vertical-navbar' style='height: {height_vh}vh;'>\
         <div class='layout-title'> Billed </div>{icons}</div>"
    )
}

fn active_class(ctx: &RenderContext, icon: LayoutIcon) -> &'static str {
    if ctx.active_icon == Some(icon) {
        " class=\"active-icon\""
    } else {
        ""
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Some(LayoutIcon::Window), "data-testid=\"icon-window\" class=\"active-icon\"")]
    #[case(Some(LayoutIcon::Mail), "data-testid=\"icon-mail\" class=\"active-icon\"")]
    fn highlights_the_active_icon(#[case] active: Option<LayoutIcon>, #[case] expected: &str) {
        let markup = render(120, &RenderContext::new(Role::Employee, active));
        assert!(markup.contains(expected), "missing {expected} in {markup}");
        assert_eq!(markup.matches("active-icon").count(), 1);
    }

    #[rstest]
    #[case(RenderContext::new(Role::Admin, Some(LayoutIcon::Window)))]
    #[case(RenderContext::default())]
    fn non_employees_get_no_icons(#[case] ctx: RenderContext) {
        let markup = render(120, &ctx);
        assert!(!markup.contains(ICON_WINDOW));
        assert!(!markup.contains(ICON_MAIL));
        assert!(markup.contains("Billed"));
    }
}
