use super::*;

#[test]
fn particle_buffer_is_sampled_once_per_mount() {
    let mut device = HeadlessDevice::new();
    let mut scene = SceneRenderer::background(&SceneConfig::default());
    assert!(scene.particles().is_none());

    scene.mount(&mut device).unwrap();
    let first = scene.particles().unwrap().to_vec();
    for _ in 0..10 {
        scene.frame();
    }
    scene.mount(&mut device).unwrap();
    assert_eq!(scene.particles().unwrap(), first.as_slice());
    assert_eq!(device.live_contexts(), 1);
    assert_eq!(device.created(), 1);
}

#[test]
fn particles_fill_the_configured_cube() {
    let mut device = HeadlessDevice::new();
    let cfg = SceneConfig::default();
    let mut scene = SceneRenderer::background(&cfg);
    scene.mount(&mut device).unwrap();
    let particles = scene.particles().unwrap();
    assert_eq!(particles.len(), 150);
    for p in particles {
        for c in [p.x, p.y, p.z] {
            assert!((-7.5..7.5).contains(&c));
        }
    }
}

#[test]
fn repeated_mount_cycles_do_not_leak_contexts() {
    let mut device = HeadlessDevice::with_limit(1);
    let mut scene = SceneRenderer::background(&SceneConfig::default());
    for _ in 0..5 {
        scene.mount(&mut device).unwrap();
        scene.frame();
        scene.unmount(&mut device);
        scene.unmount(&mut device);
        assert!(scene.particles().is_none());
    }
    assert_eq!(device.live_contexts(), 0);
    assert_eq!(device.created(), 5);
}

#[test]
fn frame_applies_fixed_rotation_deltas() {
    let mut device = HeadlessDevice::new();
    let mut scene = SceneRenderer::background(&SceneConfig::default());
    assert!(!scene.frame());
    scene.mount(&mut device).unwrap();
    for _ in 0..100 {
        assert!(scene.frame());
    }
    let snap = scene.snapshot();
    assert_eq!(snap.frame, 100);
    let SceneContent::Background { spheres } = &snap.content else {
        panic!("expected background");
    };
    assert_eq!(spheres.len(), 3);
    assert!((spheres[0].rotation.x - 0.2).abs() < 1e-9);
    assert!((spheres[2].rotation.y - 0.2).abs() < 1e-9);
    let field = snap.particles.unwrap();
    assert!((field.rotation.y - 0.03).abs() < 1e-9);
    assert!((field.rotation.x - 0.01).abs() < 1e-9);
}

#[test]
fn background_layout_matches_palette() {
    let snap = SceneRenderer::background(&SceneConfig::default()).snapshot();
    assert_eq!(snap.camera.fov, 75.0);
    assert_eq!(snap.camera.position, Vec3::new(0.0, 0.0, 8.0));
    assert_eq!(snap.lights.len(), 4);
    let SceneContent::Background { spheres } = snap.content else {
        panic!("expected background");
    };
    assert_eq!(spheres[2].material.color.to_hex(), "#ec4899");
    assert_eq!(spheres[1].position, Vec3::new(3.0, 0.0, -2.0));
    assert!(!snap.mounted);
}

#[test]
fn gallery_scene_has_no_particles() {
    let mut device = HeadlessDevice::new();
    let gallery = Gallery::arrange(
        [("a".to_owned(), "A".to_owned(), Rgb8::new(1, 2, 3))],
        5.0,
    );
    let mut scene = SceneRenderer::gallery(&SceneConfig::default(), gallery);
    scene.mount(&mut device).unwrap();
    assert!(scene.particles().is_none());
    assert_eq!(scene.snapshot().camera.fov, 60.0);
    scene.gallery_mut().unwrap().hover(Some(0));
    scene.frame();
    let g = scene.gallery_mut().unwrap();
    assert!((g.cards()[0].scale - 1.02).abs() < 1e-9);
}

#[test]
fn snapshot_serializes_to_json() {
    let mut device = HeadlessDevice::new();
    let mut scene = SceneRenderer::background(&SceneConfig::default());
    scene.mount(&mut device).unwrap();
    scene.frame();
    let json = serde_json::to_value(scene.snapshot()).unwrap();
    assert_eq!(json["content"]["variant"], "background");
    assert_eq!(json["frame"], 1);
    assert_eq!(json["lights"][2]["color"], "#3b82f6");
    assert_eq!(
        json["particles"]["positions"].as_array().map(Vec::len),
        Some(150)
    );
}
