use crate::config::ConfigError;
use crate::workflows::screening::rules::{RuleSet, ValidationKind};

const SAMPLE: &str = r#"{
    "role_name": "Data Scientist",
    "questions": ["Describe your last project", "Why this role?"],
    "deal_breakers": ["Not Interested", "quit"],
    "scoring_weights": {"communication": 1, "role_understanding": 1.5, "technical_fit": 2},
    "required_intents": ["TEAM"],
    "validations": [{"question": "Describe", "type": "min_words", "value": 5}]
}"#;

#[test]
fn loads_and_lowercases_fragments() {
    let rules = RuleSet::from_json_str(SAMPLE).expect("sample rule set loads");

    assert_eq!(rules.role_name, "Data Scientist");
    assert_eq!(rules.questions.len(), 2);
    assert_eq!(rules.deal_breakers, vec!["not interested", "quit"]);
    assert_eq!(rules.required_intents, vec!["team"]);
    assert_eq!(rules.scoring_weights.role_understanding, 1.5);
    assert_eq!(rules.scoring_weights.total(), 4.5);
    assert_eq!(rules.validations[0].question_fragment, "describe");
    assert_eq!(rules.validations[0].kind, ValidationKind::MinWords);
    assert_eq!(rules.validations[0].value, 5);
}

#[test]
fn rejects_empty_question_list() {
    let raw = SAMPLE.replace(
        r#"["Describe your last project", "Why this role?"]"#,
        "[]",
    );
    let err = RuleSet::from_json_str(&raw).expect_err("empty questions rejected");
    assert!(matches!(err, ConfigError::EmptyQuestions));
}

#[test]
fn rejects_non_numeric_weight() {
    let raw = SAMPLE.replace(r#""technical_fit": 2"#, r#""technical_fit": "high""#);
    let err = RuleSet::from_json_str(&raw).expect_err("string weight rejected");
    assert!(matches!(err, ConfigError::ParseRules { .. }));
}

#[test]
fn rejects_missing_weight_key() {
    let raw = SAMPLE.replace(r#", "technical_fit": 2"#, "");
    let err = RuleSet::from_json_str(&raw).expect_err("missing weight rejected");
    assert!(matches!(err, ConfigError::ParseRules { .. }));
}

#[test]
fn rejects_negative_weight() {
    let raw = SAMPLE.replace(r#""communication": 1"#, r#""communication": -1"#);
    let err = RuleSet::from_json_str(&raw).expect_err("negative weight rejected");
    match err {
        ConfigError::InvalidWeight { category, value } => {
            assert_eq!(category, "communication");
            assert_eq!(value, -1.0);
        }
        other => panic!("expected invalid weight, got {other:?}"),
    }
}

#[test]
fn rejects_unknown_validation_type() {
    let raw = SAMPLE.replace("min_words", "max_words");
    let err = RuleSet::from_json_str(&raw).expect_err("unknown rule type rejected");
    assert!(matches!(err, ConfigError::ParseRules { .. }));
}

#[test]
fn rejects_empty_deal_breaker_fragment() {
    let raw = SAMPLE.replace(r#""quit""#, r#""""#);
    let err = RuleSet::from_json_str(&raw).expect_err("empty fragment rejected");
    assert!(matches!(
        err,
        ConfigError::EmptyFragment {
            field: "deal_breakers"
        }
    ));
}

#[test]
fn missing_file_reports_path() {
    let err = RuleSet::from_path("does/not/exist.json").expect_err("missing file rejected");
    assert!(err.to_string().contains("does/not/exist.json"));
}
