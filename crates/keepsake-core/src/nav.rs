//! Navigation highlighter.
//!
//! Marks the navigation link matching the current page as active. Purely
//! derived from the current URL's last path segment; independent of
//! favorites state.

/// One link in the navigation bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavLink {
    /// Visible label.
    pub label: String,
    /// Link target, relative or absolute.
    pub href: String,
    /// Whether this link is marked active.
    pub active: bool,
}

impl NavLink {
    /// Create an inactive link.
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
            active: false,
        }
    }
}

/// Extract the current page's filename from a URL path.
///
/// An empty last segment (site root, trailing slash) counts as the index
/// page.
pub fn current_page(path: &str) -> &str {
    let last = path.rsplit('/').next().unwrap_or(path);
    if last.is_empty() { "index.html" } else { last }
}

/// Mark the links matching `current_path` active, clearing the rest.
///
/// Besides the exact filename match there are two equivalences: the index
/// page also activates the home link, and any `lesson*` page activates
/// the lessons listing link.
pub fn highlight(links: &mut [NavLink], current_path: &str) {
    let current = current_page(current_path);
    for link in links.iter_mut() {
        let link_page = current_page(&link.href);
        link.active = link_page == current
            || (current == "index.html" && link_page == "home.html")
            || (current.starts_with("lesson") && link_page == "lessons.html");
    }
}
