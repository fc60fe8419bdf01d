//! Page shells for the rendered site.
//!
//! Wraps the core's fragments (favorite button, gallery) into complete
//! pages with a shared navigation bar. Pages one directory deep pass a
//! `../` prefix so their links resolve; the highlighter only looks at
//! the last path segment either way.

use keepsake_core::control::Control;
use keepsake_core::lesson::LessonRecord;
use keepsake_core::nav::{self, NavLink};
use keepsake_core::{button, catalog};

/// The site's navigation bar, with links resolvable from a page at
/// `prefix` below the site root.
pub fn nav_links(prefix: &str) -> Vec<NavLink> {
    vec![
        NavLink::new("Home", format!("{prefix}index.html")),
        NavLink::new("Lessons", format!("{prefix}lessons.html")),
        NavLink::new("Favorites", format!("{prefix}favorites.html")),
    ]
}

fn render_nav(links: &[NavLink]) -> String {
    let mut html = String::from("<nav class=\"navbar\"><div class=\"nav-links\">");
    for link in links {
        if link.active {
            html.push_str(&format!(
                "<a href=\"{}\" class=\"active\">{}</a>",
                link.href, link.label
            ));
        } else {
            html.push_str(&format!("<a href=\"{}\">{}</a>", link.href, link.label));
        }
    }
    html.push_str("</div></nav>");
    html
}

/// Wrap a body fragment in the shared page shell, with the navigation
/// bar highlighted for `page_path`.
pub fn page_shell(site_title: &str, page_title: &str, page_path: &str, body: &str) -> String {
    let prefix = if page_path.contains('/') { "../" } else { "" };
    let mut links = nav_links(prefix);
    nav::highlight(&mut links, page_path);
    format!(
        "<!DOCTYPE html>\
         <html><head><meta charset=\"utf-8\"><title>{page_title} - {site_title}</title>\
         <link rel=\"stylesheet\" href=\"{prefix}styles.css\"></head>\
         <body>{}<main>{body}</main></body></html>",
        render_nav(&links),
    )
}

/// A lesson detail page embedding the bound favorite control.
pub fn lesson_page(lesson: &LessonRecord, control: &Control) -> String {
    format!(
        "<article class=\"lesson\">\
         <div class=\"lesson-icon\">{}</div>\
         <h1>{}</h1>\
         <p>{}</p>\
         <button class=\"{}\" {}=\"{}\">{}</button>\
         </article>",
        lesson.icon,
        lesson.title,
        lesson.description,
        control.class_attr(),
        button::LESSON_ATTR,
        lesson.id,
        control.html(),
    )
}

/// The lessons listing page: every catalog entry as a card.
pub fn lessons_index() -> String {
    let mut html = String::from("<h1>All Lessons</h1><div class=\"lessons-grid\">");
    for lesson in catalog::all() {
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

/// The home page.
pub fn home_page(site_title: &str) -> String {
    format!(
        "<section class=\"hero\">\
         <h1>{site_title}</h1>\
         <p>Hands-on lessons in platform security. Mark the ones you want \
         to come back to and find them on your favorites page.</p>\
         <a href=\"lessons.html\" class=\"btn btn-primary\">Browse Lessons</a>\
         </section>",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shell_highlights_the_current_page() {
        let html = page_shell("Site", "Favorites", "favorites.html", "<p>x</p>");
        assert!(html.contains("<a href=\"favorites.html\" class=\"active\">Favorites</a>"));
        assert!(html.contains("<a href=\"index.html\">Home</a>"));
    }

    #[test]
    fn nested_pages_link_up_a_level() {
        let html = page_shell("Site", "Lesson", "lessons/lesson2.html", "<p>x</p>");
        assert!(html.contains("<a href=\"../lessons.html\" class=\"active\">Lessons</a>"));
        assert!(html.contains("<a href=\"../index.html\">Home</a>"));
    }

    #[test]
    fn lesson_page_embeds_the_control_markup() {
        let lesson = catalog::get("lesson1").unwrap();
        let mut control = Control::new();
        control.add_class("favorite-btn");
        control.set_html("<span>inner</span>");
        let html = lesson_page(lesson, &control);
        assert!(html.contains("data-lesson=\"lesson1\""));
        assert!(html.contains("class=\"favorite-btn\""));
        assert!(html.contains("<span>inner</span>"));
        assert!(html.contains("Authentication Basics"));
    }

    #[test]
    fn lessons_index_lists_the_whole_catalog() {
        let html = lessons_index();
        assert_eq!(html.matches("lesson-card").count(), catalog::all().len());
        assert!(html.contains("lessons/lesson9.html"));
    }

    #[test]
    fn home_page_links_to_lessons() {
        let html = home_page("Site");
        assert!(html.contains("href=\"lessons.html\""));
    }
}
