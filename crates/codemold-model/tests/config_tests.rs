use super::*;

#[test]
fn test_defaults() {
    let config = ModelConfig::default();
    assert_eq!(
        config.final_superclass_policy,
        FinalSuperclassPolicy::RejectFinal
    );
    assert_eq!(config.max_substitution_depth, MAX_SUBSTITUTION_DEPTH);
    assert!(config.reject_reserved_words);
    assert!(config.default_package.is_empty());
}

#[test]
fn test_from_json_fills_missing_keys() {
    let config = ModelConfig::from_json(r#"{"final_superclass_policy": "require_final"}"#)
        .expect("valid config");
    assert_eq!(
        config.final_superclass_policy,
        FinalSuperclassPolicy::RequireFinal
    );
    assert_eq!(config.max_substitution_depth, MAX_SUBSTITUTION_DEPTH);
    assert!(config.reject_reserved_words);
}

#[test]
fn test_from_json_rejects_unknown_policy() {
    assert!(ModelConfig::from_json(r#"{"final_superclass_policy": "sometimes"}"#).is_err());
}

#[test]
fn test_json_round_trip() {
    let config = ModelConfig::default()
        .with_final_superclass_policy(FinalSuperclassPolicy::RequireFinal)
        .with_default_package("com.example");
    let text = serde_json::to_string(&config).expect("serializable");
    assert!(text.contains("\"require_final\""));
    assert_eq!(ModelConfig::from_json(&text).expect("parsable"), config);
}
