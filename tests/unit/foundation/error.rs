use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        KeyframeError::unexpected_end("x")
            .to_string()
            .contains("unexpected end of input:")
    );
    assert!(
        KeyframeError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        KeyframeError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
    let structural = KeyframeError::Structural {
        line: 3,
        header: "Transform\tOpacity".to_string(),
    };
    assert!(structural.to_string().starts_with("structural error:"));
    assert!(structural.to_string().contains("line 3"));
}

#[test]
fn invalid_number_names_the_field() {
    let err = KeyframeError::InvalidNumber {
        line: 12,
        text: "abc".to_string(),
    };
    assert_eq!(err.to_string(), "invalid number `abc` (line 12)");
}

#[test]
fn json_errors_become_serde() {
    let base = serde_json::from_str::<u32>("nope").unwrap_err();
    let err = KeyframeError::from(base);
    assert!(matches!(err, KeyframeError::Serde(_)));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = KeyframeError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
