use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        FolioError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        FolioError::animation("x")
            .to_string()
            .contains("animation error:")
    );
    assert!(FolioError::catalog("x").to_string().contains("catalog error:"));
    assert!(FolioError::relay("x").to_string().contains("relay error:"));
    assert!(
        FolioError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = FolioError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
