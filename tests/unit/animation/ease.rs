use super::*;

const ALL: [Ease; 8] = [
    Ease::Linear,
    Ease::InQuad,
    Ease::OutQuad,
    Ease::InOutQuad,
    Ease::InCubic,
    Ease::OutCubic,
    Ease::InOutCubic,
    Ease::InOutSine,
];

#[test]
fn endpoints_are_fixed() {
    for e in ALL {
        assert!(e.apply(0.0).abs() < 1e-12, "{e:?} at 0");
        assert!((e.apply(1.0) - 1.0).abs() < 1e-12, "{e:?} at 1");
    }
}

#[test]
fn input_is_clamped() {
    for e in ALL {
        assert_eq!(e.apply(-3.0), e.apply(0.0));
        assert_eq!(e.apply(7.0), e.apply(1.0));
    }
}

#[test]
fn in_out_variants_are_symmetric_at_half() {
    for e in [Ease::InOutQuad, Ease::InOutCubic, Ease::InOutSine] {
        assert!((e.apply(0.5) - 0.5).abs() < 1e-12, "{e:?}");
    }
    assert!(Ease::OutCubic.apply(0.25) > Ease::Linear.apply(0.25));
    assert!(Ease::InCubic.apply(0.25) < Ease::Linear.apply(0.25));
}
