use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
        .collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_empty_uses_defaults() {
    let cfg = StudioConfig::from_lookup(lookup_from(&[]));
    assert_eq!(cfg, StudioConfig::default());
    assert_eq!(cfg.api_base, DEFAULT_API_BASE);
    assert_eq!(cfg.upload_timeout_ms, DEFAULT_UPLOAD_TIMEOUT_MS);
    assert_eq!(cfg.project_poll_secs, DEFAULT_PROJECT_POLL_SECS);
}

#[test]
fn from_lookup_parses_overrides() {
    let cfg = StudioConfig::from_lookup(lookup_from(&[
        (META_API_BASE, "https://studio.example.test/api/"),
        (META_UPLOAD_TIMEOUT_MS, "5000"),
        (META_PROJECT_POLL_SECS, " 12 "),
    ]));
    assert_eq!(cfg.api_base, "https://studio.example.test/api");
    assert_eq!(cfg.upload_timeout_ms, 5000);
    assert_eq!(cfg.project_poll_secs, 12);
}

#[test]
fn from_lookup_invalid_numbers_fall_back() {
    let cfg = StudioConfig::from_lookup(lookup_from(&[
        (META_UPLOAD_TIMEOUT_MS, "soon"),
        (META_PROJECT_POLL_SECS, "-3"),
    ]));
    assert_eq!(cfg.upload_timeout_ms, DEFAULT_UPLOAD_TIMEOUT_MS);
    assert_eq!(cfg.project_poll_secs, DEFAULT_PROJECT_POLL_SECS);
}

#[test]
fn from_lookup_blank_api_base_falls_back() {
    let cfg = StudioConfig::from_lookup(lookup_from(&[(META_API_BASE, " / ")]));
    assert_eq!(cfg.api_base, DEFAULT_API_BASE);
}

#[test]
fn upload_timeout_zero_disables() {
    let cfg = StudioConfig { upload_timeout_ms: 0, ..StudioConfig::default() };
    assert_eq!(cfg.upload_timeout(), None);
    assert_eq!(StudioConfig::default().upload_timeout(), Some(DEFAULT_UPLOAD_TIMEOUT_MS));
}

#[test]
fn from_document_outside_browser_is_default() {
    assert_eq!(StudioConfig::from_document(), StudioConfig::default());
}
