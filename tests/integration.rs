// SPDX-License-Identifier: MPL-2.0
use art_space::config::{self, Config};
use art_space::error::{Error, GalleryError};
use art_space::gallery::{load_gallery, GalleryController, GallerySet};
use art_space::i18n::fluent::I18n;
use art_space::ui::theming::ThemeMode;
use std::fs;
use tempfile::tempdir;

#[test]
fn language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let config_path = dir.path().join("settings.toml");

    fs::write(
        &config_path,
        "[general]\nlanguage = \"en-US\"\ntheme_mode = \"light\"\n",
    )
    .expect("Failed to write config");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    assert_eq!(loaded.general.theme_mode, ThemeMode::Light);
    let i18n_en = I18n::new(None, &loaded);
    assert_eq!(i18n_en.current_locale().to_string(), "en-US");
    assert_eq!(i18n_en.tr("gallery-next"), "Next");

    fs::write(&config_path, "[general]\nlanguage = \"fr\"\n").expect("Failed to write config");
    let loaded = config::load_from_path(&config_path).expect("Failed to load config");
    let i18n_fr = I18n::new(None, &loaded);
    assert_eq!(i18n_fr.current_locale().to_string(), "fr");
    assert_eq!(i18n_fr.tr("gallery-next"), "Suivant");
}

#[test]
fn cli_language_overrides_config() {
    let mut config = Config::default();
    config.general.language = Some("fr".to_string());

    let i18n = I18n::new(Some("en-US".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "en-US");
}

#[test]
fn bundled_gallery_walkthrough() {
    let gallery = load_gallery(None).expect("bundled gallery loads");
    let mut controller = GalleryController::with_first(gallery).expect("non-empty");

    let mut seen = vec![controller.current().title().to_string()];
    assert!(!controller.can_go_previous());

    while controller.can_go_next() {
        controller.next();
        seen.push(controller.current().title().to_string());
    }

    assert_eq!(seen.len(), 4);
    assert_eq!(controller.cursor(), 3);

    // Boundary presses are no-ops.
    controller.next();
    assert_eq!(controller.cursor(), 3);

    while controller.can_go_previous() {
        controller.previous();
    }
    assert_eq!(controller.current().title(), seen[0]);
}

#[test]
fn read_model_matches_cursor_after_each_step() {
    let gallery = load_gallery(None).expect("bundled gallery loads");
    let mut controller = GalleryController::new(gallery.clone(), 1).expect("non-empty");

    for _ in 0..6 {
        let view = controller.view();
        let record = &gallery[controller.cursor()];
        assert_eq!(view.title, record.title());
        assert_eq!(view.artist_name, record.artist_name());
        assert_eq!(view.year, record.year());
        assert_eq!(view.position, controller.cursor() + 1);
        assert_eq!(view.can_go_previous, controller.cursor() > 0);
        assert_eq!(view.can_go_next, controller.cursor() < view.total - 1);
        controller.next();
    }
}

#[test]
fn directory_gallery_with_empty_manifest_is_rejected_by_controller() {
    let dir = tempdir().expect("Failed to create temporary directory");
    fs::write(dir.path().join("gallery.toml"), "").expect("write manifest");

    let gallery = load_gallery(Some(dir.path())).expect("empty manifest parses");
    assert!(gallery.is_empty());

    match GalleryController::with_first(gallery) {
        Err(GalleryError::InvalidInitialIndex) => {}
        other => panic!("expected InvalidInitialIndex, got {other:?}"),
    }
}

#[test]
fn missing_gallery_directory_reports_io_error() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let missing = dir.path().join("nowhere");

    match load_gallery(Some(&missing)) {
        Err(Error::Io(_)) => {}
        other => panic!("expected Io error, got {:?}", other.map(|g: GallerySet| g.len())),
    }
}
