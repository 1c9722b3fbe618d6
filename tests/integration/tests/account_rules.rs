//! Username checks against account rules.

use idm_model::{
    AccountPolicy, DefaultAccountRuleConf, Implementation, ImplementationType, RuleConf,
    ENGINE_TOML,
};
use idm_policy::{enforce_account_policies, AccountRuleEvaluator, AccountViolation, PolicyError};
use idm_integration_tests::{account_policy, mario};
use rstest::rstest;

use crate::common::{init, registry};

const VALID_REGEX: &str = "^[a-zA-Z0-9_]+$";
const INVALID_REGEX: &str = "([a-z";
const WORDS: &[&str] = &["testword", "anothertest"];
const SCHEMAS: &[&str] = &["name"];
const OTHER_SCHEMAS: &[&str] = &["age", "city"];
const PREFIXES: &[&str] = &["testprefix"];
const SUFFIXES: &[&str] = &["testsuffix"];
const EMPTY: &[&str] = &[];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Expect {
    Pass,
    Violation,
    PatternSyntax,
}

#[allow(clippy::too_many_arguments)]
fn conf(
    min_length: i32,
    max_length: i32,
    pattern: Option<&str>,
    all_upper_case: bool,
    all_lower_case: bool,
    words: &[&str],
    schemas: &[&str],
    prefixes: &[&str],
    suffixes: &[&str],
) -> DefaultAccountRuleConf {
    let conf = DefaultAccountRuleConf::new()
        .min_length(min_length)
        .max_length(max_length)
        .all_upper_case(all_upper_case)
        .all_lower_case(all_lower_case)
        .words_not_permitted(words.iter().copied())
        .schemas_not_permitted(schemas.iter().copied())
        .prefixes_not_permitted(prefixes.iter().copied())
        .suffixes_not_permitted(suffixes.iter().copied());
    match pattern {
        Some(pattern) => conf.pattern(pattern),
        None => conf,
    }
}

#[rstest]
// length
#[case(0, 0, None, false, false, WORDS, SCHEMAS, PREFIXES, SUFFIXES, "UserNameTest0", Expect::Pass)]
#[case(0, -1, None, false, false, WORDS, SCHEMAS, PREFIXES, SUFFIXES, "UserNameTest0", Expect::Pass)]
#[case(0, 1, None, false, false, WORDS, SCHEMAS, PREFIXES, SUFFIXES, "A", Expect::Pass)]
#[case(0, 1, None, false, false, WORDS, SCHEMAS, PREFIXES, SUFFIXES, "UserNameTest0", Expect::Violation)]
#[case(1, 1, None, false, false, WORDS, SCHEMAS, PREFIXES, SUFFIXES, "A", Expect::Pass)]
#[case(1, 1, None, false, false, WORDS, SCHEMAS, PREFIXES, SUFFIXES, "UserNameTest0", Expect::Violation)]
#[case(1, 0, None, false, false, WORDS, SCHEMAS, PREFIXES, SUFFIXES, "A", Expect::Pass)]
#[case(1, 0, None, false, false, WORDS, SCHEMAS, PREFIXES, SUFFIXES, "", Expect::Violation)]
#[case(1, 2, None, false, false, WORDS, SCHEMAS, PREFIXES, SUFFIXES, "Ab", Expect::Pass)]
#[case(1, 2, None, false, false, WORDS, SCHEMAS, PREFIXES, SUFFIXES, "", Expect::Violation)]
#[case(-1, -1, None, false, false, WORDS, SCHEMAS, PREFIXES, SUFFIXES, "UserNameTest0", Expect::Pass)]
#[case(-1, -2, None, false, false, WORDS, SCHEMAS, PREFIXES, SUFFIXES, "UserNameTest0", Expect::Pass)]
#[case(-1, 0, None, false, false, WORDS, SCHEMAS, PREFIXES, SUFFIXES, "UserNameTest0", Expect::Pass)]
// case and pattern
#[case(0, 20, Some(VALID_REGEX), true, true, WORDS, SCHEMAS, PREFIXES, SUFFIXES, "Username", Expect::Violation)]
#[case(0, 20, Some(VALID_REGEX), false, true, WORDS, SCHEMAS, PREFIXES, SUFFIXES, "username", Expect::Pass)]
#[case(0, 20, Some(VALID_REGEX), false, true, WORDS, SCHEMAS, PREFIXES, SUFFIXES, "Username", Expect::Violation)]
#[case(0, 20, Some(VALID_REGEX), true, false, WORDS, SCHEMAS, PREFIXES, SUFFIXES, "USERNAME", Expect::Pass)]
#[case(0, 20, Some(VALID_REGEX), true, false, WORDS, SCHEMAS, PREFIXES, SUFFIXES, "Username", Expect::Violation)]
#[case(0, 20, Some(INVALID_REGEX), false, false, WORDS, SCHEMAS, PREFIXES, SUFFIXES, "Username", Expect::PatternSyntax)]
#[case(0, 20, None, false, false, WORDS, SCHEMAS, PREFIXES, SUFFIXES, "Username", Expect::Pass)]
#[case(0, 20, Some(VALID_REGEX), false, false, WORDS, SCHEMAS, PREFIXES, SUFFIXES, "Username.0", Expect::Violation)]
#[case(0, 20, Some("(?x)[a-z]+ # lowercase only"), false, false, WORDS, SCHEMAS, PREFIXES, SUFFIXES, "mario", Expect::Pass)]
#[case(0, 20, Some("(?x)[a-z]+ # lowercase only"), false, false, WORDS, SCHEMAS, PREFIXES, SUFFIXES, "Mario", Expect::Violation)]
// forbidden words
#[case(0, 20, Some(VALID_REGEX), false, false, WORDS, SCHEMAS, PREFIXES, SUFFIXES, "username", Expect::Pass)]
#[case(0, 20, Some(VALID_REGEX), false, false, WORDS, SCHEMAS, PREFIXES, SUFFIXES, "abtestwordab", Expect::Violation)]
#[case(0, 20, Some(VALID_REGEX), false, false, EMPTY, SCHEMAS, PREFIXES, SUFFIXES, "username", Expect::Pass)]
// forbidden attribute values
#[case(0, 20, Some(VALID_REGEX), false, false, WORDS, SCHEMAS, PREFIXES, SUFFIXES, "userMario", Expect::Violation)]
#[case(0, 20, Some(VALID_REGEX), false, false, WORDS, OTHER_SCHEMAS, PREFIXES, SUFFIXES, "user", Expect::Pass)]
#[case(0, 20, Some(VALID_REGEX), false, false, WORDS, OTHER_SCHEMAS, PREFIXES, SUFFIXES, "userRoma", Expect::Pass)]
#[case(0, 20, Some(VALID_REGEX), false, false, WORDS, EMPTY, PREFIXES, SUFFIXES, "user", Expect::Pass)]
// prefixes and suffixes
#[case(0, 20, Some(VALID_REGEX), false, false, WORDS, SCHEMAS, PREFIXES, SUFFIXES, "testprefixUser", Expect::Violation)]
#[case(0, 20, Some(VALID_REGEX), false, false, WORDS, SCHEMAS, PREFIXES, SUFFIXES, "usertestsuffix", Expect::Violation)]
#[case(0, 20, Some(VALID_REGEX), false, false, WORDS, SCHEMAS, EMPTY, SUFFIXES, "username", Expect::Pass)]
#[case(0, 20, Some(VALID_REGEX), false, false, WORDS, SCHEMAS, PREFIXES, EMPTY, "username", Expect::Pass)]
#[allow(clippy::too_many_arguments)]
fn enforces_account_rule(
    #[case] min_length: i32,
    #[case] max_length: i32,
    #[case] pattern: Option<&str>,
    #[case] all_upper_case: bool,
    #[case] all_lower_case: bool,
    #[case] words: &[&str],
    #[case] schemas: &[&str],
    #[case] prefixes: &[&str],
    #[case] suffixes: &[&str],
    #[case] username: &str,
    #[case] expected: Expect,
) {
    let conf = conf(
        min_length,
        max_length,
        pattern,
        all_upper_case,
        all_lower_case,
        words,
        schemas,
        prefixes,
        suffixes,
    );
    let mut evaluator = AccountRuleEvaluator::new();
    evaluator
        .set_configuration(Some(&RuleConf::from(conf)))
        .unwrap();

    let actual = match evaluator.enforce(&mario(username)) {
        Ok(()) => Expect::Pass,
        Err(e) if e.is_violation() => Expect::Violation,
        Err(PolicyError::PatternSyntax(_)) => Expect::PatternSyntax,
        Err(e) => panic!("unexpected error: {e}"),
    };
    assert_eq!(actual, expected);
}

#[test]
fn configuration_must_be_an_account_rule() {
    let mut evaluator = AccountRuleEvaluator::new();

    assert!(matches!(
        evaluator.set_configuration(None),
        Err(PolicyError::NullInput(_))
    ));
    assert!(matches!(
        evaluator.set_configuration(Some(&RuleConf::from(
            idm_model::DefaultPasswordRuleConf::new()
        ))),
        Err(PolicyError::InvalidArgument(_))
    ));
    assert!(evaluator.configuration().is_none());
}

#[test]
fn violations_name_the_failed_check() {
    let conf = DefaultAccountRuleConf::new().schemas_not_permitted(["name"]);
    let mut evaluator = AccountRuleEvaluator::new();
    evaluator
        .set_configuration(Some(&RuleConf::from(conf)))
        .unwrap();

    let err = evaluator.enforce(&mario("superMario")).unwrap_err();
    assert!(matches!(
        err,
        PolicyError::AccountPolicy(AccountViolation::SchemaValueNotPermitted { .. })
    ));
    assert_eq!(
        err.to_string(),
        "account policy violation: username contains the value of attribute name"
    );
}

#[test]
fn policies_from_json_and_toml_bodies() {
    init();
    let json = account_policy(
        "json",
        &[DefaultAccountRuleConf::new().min_length(3).max_length(12)],
    )
    .unwrap();
    let toml = AccountPolicy::new("toml").with_rule(Implementation::new(
        "toml-0",
        ENGINE_TOML,
        ImplementationType::AccountRule,
        "kind = \"default_account_rule\"\nprefixes_not_permitted = [\"admin\"]\n",
    ));
    let policies = [json, toml];
    let source = registry();

    assert!(enforce_account_policies(source.as_ref(), Some(&policies), &mario("luigi")).is_ok());

    let err = enforce_account_policies(source.as_ref(), Some(&policies), &mario("administrator"))
        .unwrap_err();
    assert!(matches!(
        err,
        PolicyError::AccountPolicy(AccountViolation::TooLong { max: 12 })
    ));

    let err = enforce_account_policies(source.as_ref(), Some(&policies), &mario("admin1"))
        .unwrap_err();
    assert!(matches!(
        err,
        PolicyError::AccountPolicy(AccountViolation::PrefixNotPermitted { .. })
    ));
}

#[test]
fn policies_without_resolvable_rules_accept_everything() {
    let policy = AccountPolicy::new("broken")
        .with_rule(Implementation::json_account_rule("bad", "not json"))
        .with_rule(Implementation::new(
            "unknown",
            "GROOVY",
            ImplementationType::AccountRule,
            "",
        ));

    assert!(enforce_account_policies(registry().as_ref(), Some(&[policy]), &mario("x")).is_ok());
}
