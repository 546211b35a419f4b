use super::*;

fn three() -> Gallery {
    Gallery::arrange(
        ["a", "b", "c"]
            .into_iter()
            .map(|id| (id.to_owned(), id.to_uppercase(), Rgb8::new(0, 0, 0))),
        5.0,
    )
}

#[test]
fn cards_sit_evenly_on_the_circle() {
    let g = three();
    let cards = g.cards();
    assert!((cards[0].position.x - 5.0).abs() < 1e-9);
    assert!(cards[0].position.z.abs() < 1e-9);
    for c in cards {
        let r = (c.position.x.powi(2) + c.position.z.powi(2)).sqrt();
        assert!((r - 5.0).abs() < 1e-9);
        assert_eq!(c.position.y, 0.0);
    }
}

#[test]
fn hover_beats_active_beats_rest() {
    let cfg = SceneConfig::default();
    let mut g = three();
    assert_eq!(g.click(1), Some("b"));
    assert_eq!(g.active_id(), Some("b"));
    g.hover(Some(1));
    assert_eq!(g.target_scale(1, &cfg), 1.2);
    assert_eq!(g.emissive(1), 0.4);
    g.hover(None);
    assert_eq!(g.target_scale(1, &cfg), 1.1);
    assert_eq!(g.target_scale(0, &cfg), 1.0);
    assert_eq!(g.emissive(0), 0.1);
    assert_eq!(g.click(7), None);
    assert_eq!(g.active_id(), Some("b"));
}

#[test]
fn scale_converges_toward_target() {
    let cfg = SceneConfig::default();
    let mut g = three();
    g.hover(Some(2));
    for _ in 0..200 {
        g.step(&cfg);
    }
    assert!((g.cards()[2].scale - 1.2).abs() < 1e-6);
    assert_eq!(g.cards()[0].scale, 1.0);
    assert!((g.cards()[0].rotation.y - 1.0).abs() < 1e-9);
}

#[test]
fn catalog_gallery_uses_category_colors() {
    let catalog = Catalog::builtin();
    let g = Gallery::from_catalog(&catalog, 5.0);
    assert_eq!(g.cards().len(), catalog.projects.len());
    assert_eq!(g.cards()[0].color.to_hex(), "#3b82f6");
}
