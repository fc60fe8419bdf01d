//! keepsake site host.
//!
//! Stands in for the browser page the widget originally lived in: loads
//! the host config, hydrates the favorites state from file-backed
//! storage, binds a favorite button per lesson page, and writes the
//! rendered site (home, lessons listing, lesson pages, favorites page)
//! to the output directory.

mod render;

use std::path::Path;

use anyhow::{Context, Result};

use keepsake_core::button::FavoriteButton;
use keepsake_core::config::KeepsakeConfig;
use keepsake_core::control::Control;
use keepsake_core::store::{FavoritesStore, FileStorage};
use keepsake_core::{FavoritesState, button, catalog, gallery};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = load_config()?;
    log::info!(
        "Starting keepsake host (data: {}, output: {})",
        config.data_dir.display(),
        config.output_dir.display(),
    );

    let storage = FileStorage::new(&config.data_dir);
    let state = FavoritesState::hydrate(FavoritesStore::new(storage));

    write_site(&config, &state)?;
    log::info!("Site written to {}", config.output_dir.display());
    Ok(())
}

/// Resolve the config: explicit path from `KEEPSAKE_CONFIG`, else
/// `keepsake.toml` next to the working directory, else defaults.
fn load_config() -> Result<KeepsakeConfig> {
    if let Ok(path) = std::env::var("KEEPSAKE_CONFIG") {
        return KeepsakeConfig::load(Path::new(&path))
            .with_context(|| format!("loading config from {path}"));
    }
    let default_path = Path::new("keepsake.toml");
    if default_path.exists() {
        return KeepsakeConfig::load(default_path).context("loading keepsake.toml");
    }
    Ok(KeepsakeConfig::default())
}

/// Render every page of the site into the output directory.
fn write_site(config: &KeepsakeConfig, state: &FavoritesState<FileStorage>) -> Result<()> {
    let out = &config.output_dir;
    std::fs::create_dir_all(out.join("lessons"))?;

    write_page(
        &out.join("index.html"),
        &render::page_shell(
            &config.site_title,
            "Home",
            "index.html",
            &render::home_page(&config.site_title),
        ),
    )?;

    write_page(
        &out.join("lessons.html"),
        &render::page_shell(
            &config.site_title,
            "Lessons",
            "lessons.html",
            &render::lessons_index(),
        ),
    )?;

    for lesson in catalog::all() {
        let mut control = Control::new().with_attr(button::LESSON_ATTR, lesson.id);
        control.add_class("favorite-btn");
        if FavoriteButton::bind(&mut control, state).is_none() {
            continue;
        }
        let page_path = format!("lessons/{}.html", lesson.id);
        write_page(
            &out.join(&page_path),
            &render::page_shell(
                &config.site_title,
                lesson.title,
                &page_path,
                &render::lesson_page(lesson, &control),
            ),
        )?;
    }

    write_page(
        &out.join("favorites.html"),
        &render::page_shell(
            &config.site_title,
            "My Favorites",
            "favorites.html",
            &gallery::render(state),
        ),
    )?;

    Ok(())
}

fn write_page(path: &Path, html: &str) -> Result<()> {
    std::fs::write(path, html).with_context(|| format!("writing {}", path.display()))?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config(dir: &Path) -> KeepsakeConfig {
        KeepsakeConfig {
            site_title: "Test Site".to_string(),
            data_dir: dir.join("data"),
            output_dir: dir.join("site"),
        }
    }

    #[test]
    fn write_site_produces_every_page() {
        let dir = tempfile::tempdir().unwrap();
        let config = temp_config(dir.path());
        let storage = FileStorage::new(&config.data_dir);
        let state = FavoritesState::hydrate(FavoritesStore::new(storage));

        write_site(&config, &state).unwrap();

        assert!(config.output_dir.join("index.html").exists());
        assert!(config.output_dir.join("lessons.html").exists());
        assert!(config.output_dir.join("favorites.html").exists());
        for lesson in catalog::all() {
            assert!(
                config
                    .output_dir
                    .join(format!("lessons/{}.html", lesson.id))
                    .exists()
            );
        }
    }

    #[test]
    fn favorites_page_reflects_persisted_state() {
        let dir = tempfile::tempdir().unwrap();
        let config = temp_config(dir.path());
        let storage = FileStorage::new(&config.data_dir);
        let mut state = FavoritesState::hydrate(FavoritesStore::new(storage));
        state.add("lesson3");

        write_site(&config, &state).unwrap();

        let html = std::fs::read_to_string(config.output_dir.join("favorites.html")).unwrap();
        assert!(html.contains("Data Encryption"));
        assert!(!html.contains("No Favorites Yet"));

        // A fresh host over the same data directory sees the favorite.
        let state2 = FavoritesState::hydrate(FavoritesStore::new(FileStorage::new(
            &config.data_dir,
        )));
        assert!(state2.contains("lesson3"));
    }

    #[test]
    fn lesson_pages_show_membership_in_the_button() {
        let dir = tempfile::tempdir().unwrap();
        let config = temp_config(dir.path());
        let storage = FileStorage::new(&config.data_dir);
        let mut state = FavoritesState::hydrate(FavoritesStore::new(storage));
        state.add("lesson1");

        write_site(&config, &state).unwrap();

        let favorited =
            std::fs::read_to_string(config.output_dir.join("lessons/lesson1.html")).unwrap();
        assert!(favorited.contains("Remove from Favorites"));
        assert!(favorited.contains("favorited"));

        let plain =
            std::fs::read_to_string(config.output_dir.join("lessons/lesson2.html")).unwrap();
        assert!(plain.contains("Add to Favorites"));
    }
}
