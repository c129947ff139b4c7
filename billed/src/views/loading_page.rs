//! Transient page shown while a fetch is outstanding.

use super::{RenderContext, vertical_layout};

/// Render the loading page.
pub fn render(ctx: &RenderContext) -> String {
    format!(
        "<div class='layout'>{layout}<div class='content' id='loading'>Loading...</div></div>",
        layout = vertical_layout::render(120, ctx),
    )
}
