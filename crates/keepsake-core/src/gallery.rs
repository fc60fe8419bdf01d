//! Favorites gallery renderer.
//!
//! Renders the favorites page fragment from the current state: an
//! empty-state block with a call-to-action when nothing is favorited,
//! otherwise one card per favorited id that resolves in the catalog, in
//! collection order. Pure function of state, so re-rendering with
//! unchanged state yields identical markup.

use keepsake_store::Storage;

use crate::catalog;
use crate::state::FavoritesState;

/// Render the gallery fragment for the favorites page.
pub fn render<S: Storage>(state: &FavoritesState<S>) -> String {
    if state.is_empty() {
        return String::from(
            "<div class=\"favorites-empty\">\
             <h2>No Favorites Yet</h2>\
             <p>Start exploring lessons and add them to your favorites by clicking \
             the heart icon!</p>\
             <a href=\"lessons.html\" class=\"btn btn-primary\">Browse Lessons</a>\
             </div>",
        );
    }

    let mut html = String::from("<div class=\"lessons-grid\">");
    // Ids with no catalog entry are dropped from rendering, not errors.
    for lesson in state.ids().iter().filter_map(|id| catalog::get(id)) {
        html.push_str(&format!(
            "<a href=\"{}\" class=\"lesson-card\">\
             <div class=\"lesson-icon\">{}</div>\
             <h3>{}</h3>\
             <p>{}</p>\
             </a>",
            lesson.detail_href(),
            lesson.icon,
            lesson.title,
            lesson.description,
        ));
    }
    html.push_str("</div>");
    html
}
