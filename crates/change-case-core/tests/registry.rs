use change_case_core::{TransformRegistry, labels};
use pretty_assertions::assert_eq;

fn convert(label: &str, text: &str) -> String {
    TransformRegistry::builtin().apply(label, text).unwrap()
}

#[test]
fn test_builtin_labels_in_picker_order() {
    let registry = TransformRegistry::builtin();
    assert_eq!(
        registry.labels().collect::<Vec<_>>(),
        vec![
            "camel",
            "constant",
            "dot",
            "kebab",
            "lower",
            "lowerFirst",
            "no",
            "param",
            "pascal",
            "path",
            "sentence",
            "snake",
            "snakeUpper",
            "swap",
            "title",
            "upper",
            "upperFirst",
            "sPonGeCaSe",
        ]
    );
}

#[test]
fn test_word_splitting_conversions() {
    let input = "userAccountId";
    assert_eq!(convert(labels::CAMEL, input), "userAccountId");
    assert_eq!(convert(labels::CONSTANT, input), "USER_ACCOUNT_ID");
    assert_eq!(convert(labels::DOT, input), "user.account.id");
    assert_eq!(convert(labels::KEBAB, input), "user-account-id");
    assert_eq!(convert(labels::NO, input), "user account id");
    assert_eq!(convert(labels::PARAM, input), "user-account-id");
    assert_eq!(convert(labels::PASCAL, input), "UserAccountId");
    assert_eq!(convert(labels::PATH, input), "user/account/id");
    assert_eq!(convert(labels::SENTENCE, input), "User account id");
    assert_eq!(convert(labels::SNAKE, input), "user_account_id");
    assert_eq!(convert(labels::SNAKE_UPPER, input), "User_Account_Id");
    assert_eq!(convert(labels::TITLE, input), "User Account Id");
}

#[test]
fn test_character_conversions() {
    assert_eq!(convert(labels::LOWER, "Mixed-Case"), "mixed-case");
    assert_eq!(convert(labels::UPPER, "Mixed-Case"), "MIXED-CASE");
    assert_eq!(convert(labels::LOWER_FIRST, "MixedCase"), "mixedCase");
    assert_eq!(convert(labels::UPPER_FIRST, "mixedCase"), "MixedCase");
    assert_eq!(convert(labels::SWAP, "MixedCase"), "mIXEDcASE");
}

#[test]
fn test_idempotent_on_stable_inputs() {
    for (label, text) in [
        (labels::LOWER, "lower_case"),
        (labels::UPPER, "UPPER_CASE"),
        (labels::SNAKE, "snake_case"),
        (labels::KEBAB, "kebab-case"),
        (labels::CAMEL, "camelCase"),
        (labels::PASCAL, "PascalCase"),
        (labels::CONSTANT, "CONSTANT_CASE"),
    ] {
        assert_eq!(convert(label, text), text, "{label}");
    }
}

#[test]
fn test_sponge_only_changes_case() {
    let out = convert(labels::SPONGE, "Sponge Bob");
    assert_eq!(out.to_lowercase(), "sponge bob");
}

#[test]
fn test_injected_registry_substitutes_library() {
    let mut registry = TransformRegistry::new();
    registry.register("reverse", "Reverse the characters", |s| s.chars().rev().collect());

    assert_eq!(registry.len(), 1);
    assert!(registry.contains("reverse"));
    assert!(!registry.contains(labels::SNAKE));
    assert_eq!(registry.apply("reverse", "abc").as_deref(), Some("cba"));
}
