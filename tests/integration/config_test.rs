//! Config file round-trips and source selection

use tempfile::TempDir;

use scrubber::scrub::MediaSource;
use scrubber::Config;

#[test]
fn saved_config_drives_controller_settings() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("scrubber").join("config.toml");

    let mut config = Config::default();
    config.playback.autoplay = false;
    config.playback.playback_rate = 4.0;
    config.preview.width = 30.0;
    config.save_to(&path).unwrap();

    let settings = Config::load_from(&path).unwrap().controller_settings();

    assert!(!settings.autoplay);
    assert_eq!(settings.playback_rate.value(), 4.0);
    assert_eq!(settings.preview.width, 30.0);
}

#[test]
fn sources_select_first_supported_candidate() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("config.toml");
    std::fs::write(
        &path,
        r#"
[[sources]]
source = "talk.mkv"
mime_type = "video/x-matroska"

[[sources]]
source = "talk.webm"
mime_type = "video/webm"
"#,
    )
    .unwrap();

    let config = Config::load_from(&path).unwrap();

    assert_eq!(config.sources.len(), 2);
    assert_eq!(
        config.select_source().unwrap(),
        Some(&MediaSource::new("talk.webm", "video/webm"))
    );
}

#[test]
fn out_of_range_rate_is_clamped() {
    let mut config = Config::default();
    config.playback.playback_rate = 100.0;
    assert_eq!(config.controller_settings().playback_rate.value(), 16.0);
}
