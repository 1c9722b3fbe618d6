//! Merging of password rule configurations.

use idm_model::{DefaultPasswordRuleConf, MIN_LENGTH_IF_ZERO, VERY_MAX_LENGTH};
use idm_policy::{merge, PolicyError};
use rstest::rstest;

const CHARS_1: [char; 2] = ['!', '%'];
const CHARS_2: [char; 2] = ['$', '&'];
const WORDS_1: [&str; 2] = ["test", "anotherTest"];
const WORDS_2: [&str; 2] = ["merge", "rules"];

#[derive(Debug, Clone, Copy)]
enum Confs {
    Equal,
    Different,
    Negative,
    Empty,
    MinMaxOpposite,
}

fn confs(kind: Confs) -> Vec<DefaultPasswordRuleConf> {
    let both = |conf: DefaultPasswordRuleConf| vec![conf.clone(), conf];
    let pair = |min_length: i32, max_length: i32| {
        let first = DefaultPasswordRuleConf::new()
            .min_length(min_length)
            .max_length(max_length)
            .alphabetical(2)
            .uppercase(2)
            .lowercase(2)
            .digit(2)
            .special(2)
            .special_chars(CHARS_1)
            .illegal_chars(CHARS_1)
            .repeat_same(1)
            .username_allowed(false)
            .words_not_permitted(WORDS_1)
            .schemas_not_permitted(WORDS_1);
        let second = DefaultPasswordRuleConf::new()
            .min_length(min_length - 1)
            .max_length(max_length + 1)
            .alphabetical(1)
            .uppercase(1)
            .lowercase(1)
            .digit(1)
            .special(1)
            .special_chars(CHARS_2)
            .illegal_chars(CHARS_2)
            .repeat_same(2)
            .username_allowed(true)
            .words_not_permitted(WORDS_2)
            .schemas_not_permitted(WORDS_2);
        vec![first, second]
    };

    match kind {
        Confs::Equal => both(
            DefaultPasswordRuleConf::new()
                .min_length(1)
                .max_length(1)
                .alphabetical(1)
                .uppercase(1)
                .lowercase(1)
                .digit(1)
                .special(1)
                .special_chars(CHARS_1)
                .illegal_chars(CHARS_1)
                .repeat_same(1)
                .username_allowed(true)
                .words_not_permitted(WORDS_1)
                .schemas_not_permitted(WORDS_1),
        ),
        Confs::Different => pair(2, 3),
        Confs::Negative => vec![
            DefaultPasswordRuleConf::new()
                .min_length(-1)
                .max_length(-1)
                .alphabetical(-1)
                .uppercase(-1)
                .lowercase(-1)
                .digit(-1)
                .special(-1)
                .repeat_same(-1),
            DefaultPasswordRuleConf::new(),
        ],
        Confs::Empty => Vec::new(),
        Confs::MinMaxOpposite => pair(8, 3),
    }
}

#[rstest]
#[case::equal(Confs::Equal, 1, 1, 1)]
#[case::different(Confs::Different, 2, 3, 2)]
#[case::negative(Confs::Negative, MIN_LENGTH_IF_ZERO, VERY_MAX_LENGTH, 0)]
#[case::empty(Confs::Empty, MIN_LENGTH_IF_ZERO, VERY_MAX_LENGTH, 0)]
#[case::min_max_opposite(Confs::MinMaxOpposite, 8, 8, 2)]
fn merged_bounds_and_counts(
    #[case] kind: Confs,
    #[case] min_length: i32,
    #[case] max_length: i32,
    #[case] counts: i32,
) {
    let merged = merge(Some(&confs(kind))).unwrap();

    assert_eq!(merged.min_length, min_length);
    assert_eq!(merged.max_length, max_length);
    assert_eq!(merged.alphabetical, counts);
    assert_eq!(merged.uppercase, counts);
    assert_eq!(merged.lowercase, counts);
    assert_eq!(merged.digit, counts);
    assert_eq!(merged.special, counts);
}

#[rstest]
#[case::different(Confs::Different)]
#[case::min_max_opposite(Confs::MinMaxOpposite)]
fn sets_are_unioned(#[case] kind: Confs) {
    let merged = merge(Some(&confs(kind))).unwrap();

    assert!(CHARS_1.iter().chain(&CHARS_2).all(|c| merged.special_chars.contains(c)));
    assert!(CHARS_1.iter().chain(&CHARS_2).all(|c| merged.illegal_chars.contains(c)));
    assert!(WORDS_1
        .iter()
        .chain(&WORDS_2)
        .all(|w| merged.words_not_permitted.contains(*w)));
}

#[test]
fn equal_sets_are_unchanged() {
    let input = confs(Confs::Equal);
    let merged = merge(Some(&input)).unwrap();

    assert_eq!(merged.special_chars, input[0].special_chars);
    assert_eq!(merged.illegal_chars, input[0].illegal_chars);
    assert_eq!(merged.words_not_permitted, input[0].words_not_permitted);
}

#[rstest]
#[case::equal(Confs::Equal)]
#[case::different(Confs::Different)]
fn schemas_are_not_carried(#[case] kind: Confs) {
    let merged = merge(Some(&confs(kind))).unwrap();
    assert!(merged.schemas_not_permitted.is_empty());
}

#[test]
fn repeat_same_and_username_allowed_take_the_looser_value() {
    let merged = merge(Some(&confs(Confs::Different))).unwrap();
    assert_eq!(merged.repeat_same, 2);
    assert!(merged.username_allowed);
}

#[test]
fn negative_input_yields_the_default_configuration() {
    let merged = merge(Some(&confs(Confs::Negative))).unwrap();
    assert_eq!(merged, DefaultPasswordRuleConf::effective_default());
}

#[test]
fn null_input_fails() {
    assert!(matches!(merge(None), Err(PolicyError::NullInput(_))));
}

#[test]
fn unset_maximum_follows_its_own_minimum() {
    let confs = [
        DefaultPasswordRuleConf::new().min_length(12),
        DefaultPasswordRuleConf::new().max_length(14),
    ];

    let merged = merge(Some(&confs)).unwrap();
    assert_eq!((merged.min_length, merged.max_length), (12, 12));

    // Without any minimum the maximum is the global ceiling instead.
    let merged = merge(Some(&[DefaultPasswordRuleConf::new().max_length(-1)])).unwrap();
    assert_eq!(merged.max_length, VERY_MAX_LENGTH);
}
