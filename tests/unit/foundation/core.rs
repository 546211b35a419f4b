use super::*;

#[test]
fn band_contains_boundaries() {
    let b = Band::new(500.0, 700.0).unwrap();
    assert!(!b.contains(499.9));
    assert!(b.contains(500.0));
    assert!(b.contains(1199.0));
    assert!(!b.contains(1200.0));
    assert_eq!(b.height(), 700.0);
}

#[test]
fn band_rejects_negative_height() {
    assert!(Band::new(0.0, -1.0).is_err());
    assert!(Band::new(f64::NAN, 10.0).is_err());
    assert!(Band::new(10.0, 0.0).unwrap().is_empty());
}

#[test]
fn viewport_offset_is_relative_to_center() {
    let vp = Viewport::new(1000.0, 800.0).unwrap();
    assert_eq!(vp.center(), Point::new(500.0, 400.0));
    assert_eq!(
        vp.offset_from_center(Point::new(600.0, 300.0)),
        Vec2::new(100.0, -100.0)
    );
    assert!(Viewport::new(0.0, 10.0).is_err());
}

#[test]
fn rgb8_hex_roundtrip_and_errors() {
    let c = Rgb8::from_hex("#3B82F6").unwrap();
    assert_eq!(c, Rgb8::new(0x3b, 0x82, 0xf6));
    assert_eq!(c.to_hex(), "#3b82f6");
    assert!(Rgb8::from_hex("#3b82f").is_err());
    assert!(Rgb8::from_hex("zzzzzz").is_err());

    let json = serde_json::to_string(&c).unwrap();
    assert_eq!(json, "\"#3b82f6\"");
    let back: Rgb8 = serde_json::from_str(&json).unwrap();
    assert_eq!(back, c);
}

#[test]
fn vec3_lerp_moves_fractionally() {
    let a = Vec3::ONE;
    let b = Vec3::splat(1.2);
    let mid = a.lerp(b, 0.5);
    assert!((mid.x - 1.1).abs() < 1e-12);
    assert_eq!(a + Vec3::new(1.0, 0.0, 0.0), Vec3::new(2.0, 1.0, 1.0));
}
