use super::*;

#[test]
fn defaults_are_valid() {
    let cfg = SiteConfig::default();
    cfg.validate().unwrap();
    assert_eq!(cfg.scroll.lookahead, 100.0);
    assert_eq!(cfg.scene.particle_count, 150);
    assert_eq!(cfg.reveal.ease, Ease::OutCubic);
}

#[test]
fn partial_json_fills_in_defaults() {
    let json = r#"{ "scroll": { "lookahead": 40 }, "scene": { "particle_count": 12 } }"#;
    let cfg = SiteConfig::from_reader(json.as_bytes()).unwrap();
    assert_eq!(cfg.scroll.lookahead, 40.0);
    assert_eq!(cfg.scene.particle_count, 12);
    assert_eq!(cfg.scene.particle_extent, 15.0);
    assert_eq!(cfg.gate, GateConfig::default());
}

#[test]
fn malformed_json_is_a_serde_error() {
    let err = SiteConfig::from_reader("{ not json".as_bytes()).unwrap_err();
    assert!(matches!(err, FolioError::Serde(_)), "{err}");
}

#[test]
fn overrides_replace_endpoint_and_key() {
    let cfg = SiteConfig::default().with_overrides(|k| match k {
        ENV_FUNCTIONS_URL => Some("https://fn.example.co".to_owned()),
        ENV_FUNCTIONS_KEY => Some(" ".to_owned()),
        _ => None,
    });
    assert_eq!(cfg.contact.endpoint.as_deref(), Some("https://fn.example.co"));
    assert_eq!(cfg.contact.api_key, None);
}

#[test]
fn validate_rejects_bad_ranges() {
    let mut cfg = SiteConfig::default();
    cfg.reveal.section_start = 1.5;
    assert!(cfg.validate().is_err());

    let mut cfg = SiteConfig::default();
    cfg.scene.particle_count = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = SiteConfig::default();
    cfg.gate.fill_duration = f64::NAN;
    assert!(cfg.validate().is_err());

    let mut cfg = SiteConfig::default();
    cfg.cursor.dot_hover_scale = 0.0;
    cfg.validate().unwrap();
}
