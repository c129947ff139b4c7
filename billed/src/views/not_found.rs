//! Page for paths missing from the route table.

use super::markers::NOT_FOUND;
use super::{RenderContext, escape, vertical_layout};

/// Render the 404 page naming the unknown `path`.
pub fn render(path: &str, ctx: &RenderContext) -> String {
    format!(
        "<div class='layout'>{layout}<div class='content'>\
         <div class='content-header'><div class='content-title'> Page introuvable </div></div>\
         <div data-testid=\"{NOT_FOUND}\">Aucune page ne correspond à {path}</div></div></div>",
        layout = vertical_layout::render(120, ctx),
        path = escape(path),
    )
}
