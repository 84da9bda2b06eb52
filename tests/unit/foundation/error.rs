use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        AsthesisError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        AsthesisError::sequence("x")
            .to_string()
            .contains("sequence error:")
    );
    assert!(AsthesisError::proxy("x").to_string().contains("proxy error:"));
    assert!(
        AsthesisError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = AsthesisError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
