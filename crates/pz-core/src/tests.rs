use crate::*;

// ========== Config ==========

#[test]
fn test_config_defaults() {
    let c = TranslatorConfig::default();
    assert!(!c.aggressive_mode);
    assert!(c.preserve_examples);
    assert!(!c.include_annotations);
    assert_eq!(c.min_phrase_len, 3);
    assert!(c.enable_symbols);
    assert!(c.enable_extended_ops);
}

#[test]
fn test_config_serde_roundtrip() {
    let c = TranslatorConfig { aggressive_mode: true, ..Default::default() };
    let json = serde_json::to_string(&c).unwrap();
    let back: TranslatorConfig = serde_json::from_str(&json).unwrap();
    assert!(back.aggressive_mode);
    assert_eq!(back.min_phrase_len, 3);
}

// ========== Field tags ==========

#[test]
fn test_tag_wire_spellings() {
    assert_eq!(FieldTag::Actor.as_str(), "ACT");
    assert_eq!(FieldTag::Objective.as_str(), "OBJ");
    assert_eq!(FieldTag::Reasoning.as_str(), "THINK");
    assert_eq!(FieldTag::Background.as_str(), "BG");
}

#[test]
fn test_tag_parse_roundtrip() {
    for tag in FieldTag::ALL {
        assert_eq!(FieldTag::parse(tag.as_str()), Some(*tag));
    }
}

#[test]
fn test_tag_parse_unknown() {
    assert_eq!(FieldTag::parse("NOPE"), None);
    assert_eq!(FieldTag::parse("act"), None);
}

#[test]
fn test_tag_extended_split() {
    assert!(!FieldTag::Actor.is_extended());
    assert!(!FieldTag::Visual.is_extended());
    assert!(FieldTag::Style.is_extended());
    assert!(FieldTag::Length.is_extended());
}

#[test]
fn test_tag_describe_nonempty() {
    for tag in FieldTag::ALL {
        assert!(!tag.describe().is_empty());
        assert!(!tag.label().is_empty());
    }
}

#[test]
fn test_token_display() {
    let t = FieldToken::new(FieldTag::Actor, "Senior_Dev");
    assert_eq!(t.to_string(), "ACT:Senior_Dev");
    let r = FieldToken::new(FieldTag::Ratio, "16:9");
    assert_eq!(r.to_string(), "RATIO:16:9");
}

// ========== Stats ==========

#[test]
fn test_stats_serde() {
    let s = TranslationStats {
        original_words: 10,
        original_tokens: 12,
        final_words: 4,
        final_tokens: 5,
        compression_ratio: 58.3,
    };
    let v = serde_json::to_value(&s).unwrap();
    assert_eq!(v["original_tokens"], 12);
    let back: TranslationStats = serde_json::from_value(v).unwrap();
    assert_eq!(back, s);
}

// ========== Errors ==========

#[test]
fn test_error_messages() {
    let e = PzError::UnknownAction { action: "zap".into() };
    assert_eq!(e.to_string(), "Unknown action: zap");
    let m = PzError::MissingParam("text");
    assert_eq!(m.to_string(), "Missing parameter: text");
}
