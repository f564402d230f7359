use enumgen_core::{EnumExtraction, IntKind};

use super::{FoldLookup, LookupError, equal_fold};
use crate::test_utils::{camel, day, gap, num, prime, unum, with_resolver};
use crate::{GenerationConfig, TransformMode};

#[test]
fn render_contiguous() {
    with_resolver(&day(), &GenerationConfig::new(), |r| {
        assert_eq!(r.render(3), "Thursday");
        assert_eq!(r.render(99), "Day(99)");
        assert_eq!(r.render(-1), "Day(-1)");
    });
}

#[test]
fn render_alias_uses_first_name() {
    with_resolver(&prime(), &GenerationConfig::new(), |r| {
        assert_eq!(r.render(7), "p7");
        assert!(!r.names().contains(&"p77".to_string()));
        assert_eq!(r.parse("p77").unwrap_err().to_string(), "p77 does not belong to Prime values");
    });
}

#[test]
fn render_gaps_fall_back() {
    with_resolver(&gap(), &GenerationConfig::new(), |r| {
        assert_eq!(r.render(4), "Gap(4)");
        assert_eq!(r.render(10), "Gap(10)");
        assert_eq!(r.render(11), "Eleven");
    });
}

#[test]
fn round_trip_every_strategy() {
    let config = GenerationConfig::new();

    for extraction in [day(), gap(), num(), unum(), prime()] {
        with_resolver(&extraction, &config, |r| {
            for value in r.values() {
                assert_eq!(r.parse(&r.render(value)), Ok(value));
            }
        });
    }
}

#[test]
fn round_trip_with_transform() {
    let config = GenerationConfig::new().transform(TransformMode::KebabUpper);

    with_resolver(&camel(), &config, |r| {
        assert_eq!(r.render(0), "ENUM-FIRST");
        for value in r.values() {
            assert_eq!(r.parse(&r.render(value)), Ok(value));
        }
    });
}

#[test]
fn parse_failure_names_type() {
    with_resolver(&day(), &GenerationConfig::new(), |r| {
        assert_eq!(
            r.parse("Funday"),
            Err(LookupError::NotRecognized {
                text: "Funday".into(),
                type_name: "Day".into(),
            })
        );
    });
}

#[test]
fn parse_is_case_sensitive_by_default() {
    with_resolver(&day(), &GenerationConfig::new(), |r| {
        assert!(r.parse("monday").is_err());
    });
}

#[test]
fn ignore_case_accepts_any_case() {
    let config = GenerationConfig::new().ignore_case(true);

    with_resolver(&day(), &config, |r| {
        for (value, name) in r.values().into_iter().zip(r.names()) {
            assert_eq!(r.parse(&name), Ok(value));
            assert_eq!(r.parse(&name.to_uppercase()), Ok(value));
            assert_eq!(r.parse(&name.to_lowercase()), Ok(value));
        }
    });
}

#[test]
fn ignore_case_with_lower_names() {
    let config = GenerationConfig::new()
        .ignore_case(true)
        .transform(TransformMode::Lower);

    with_resolver(&camel(), &config, |r| {
        assert_eq!(r.parse("EnumThird"), Ok(2));
        assert_eq!(r.parse("ENUMTHIRD"), Ok(2));
    });
}

#[test]
fn ignore_case_scan_folds_rune_by_rune() {
    let temp = EnumExtraction::new("Temp", IntKind::Int)
        .member("Kelvin", 0)
        .member("Celsius", 1);
    let config = GenerationConfig::new().ignore_case(true);

    with_resolver(&temp, &config, |r| {
        assert_eq!(r.parse("\u{212A}ELVIN"), Ok(0));
        assert_eq!(r.parse("cElSiUs"), Ok(1));
        assert!(r.parse("Kelvins").is_err());
    });
}

#[test]
fn equal_fold_matches_go() {
    assert!(equal_fold("Kelvin", "kELVIN"));
    assert!(equal_fold("Kelvin", "\u{212A}elvin"));
    assert!(equal_fold("Stra\u{17F}e", "STRASE"));
    assert!(!equal_fold("\u{130}x", "i\u{307}x"));
    assert!(!equal_fold("stra\u{DF}e", "STRASSE"));
    assert!(!equal_fold("abc", "abcd"));
}

#[test]
fn fold_lookup_kind() {
    assert_eq!(FoldLookup::for_names(&["one", "two_2"]), FoldLookup::Lower);
    assert_eq!(FoldLookup::for_names(&["ONE", "TWO"]), FoldLookup::Upper);
    assert_eq!(FoldLookup::for_names(&["One", "TWO"]), FoldLookup::Scan);
}

#[test]
fn numeric_fallback_disabled_by_default() {
    with_resolver(&day(), &GenerationConfig::new(), |r| {
        assert!(r.parse("3").is_err());
    });
}

#[test]
fn numeric_fallback_accepts_members_only() {
    let config = GenerationConfig::new().allow_numeric(true);

    with_resolver(&prime(), &config, |r| {
        for value in r.values() {
            assert_eq!(r.parse(&value.to_string()), Ok(value));
        }
        assert!(r.parse("4").is_err());
        assert!(r.parse("seven").is_err());
        assert!(r.parse("7.0").is_err());
    });
}

#[test]
fn numeric_fallback_signedness() {
    let config = GenerationConfig::new().allow_numeric(true);

    with_resolver(&num(), &config, |r| {
        assert_eq!(r.parse("-2"), Ok(-2));
        assert_eq!(r.parse("+1"), Ok(1));
    });
    with_resolver(&unum(), &config, |r| {
        assert_eq!(r.parse("253"), Ok(253));
        assert!(r.parse("+1").is_err());
        assert!(r.parse("-1").is_err());
    });
}

#[test]
fn numeric_fallback_after_name_lookup() {
    let extraction = EnumExtraction::new("Odd", IntKind::Int)
        .member("Zero", 0)
        .member("One", 1);
    let config = GenerationConfig::new().allow_numeric(true).ignore_case(true);

    with_resolver(&extraction, &config, |r| {
        assert_eq!(r.parse("ONE"), Ok(1));
        assert_eq!(r.parse("0"), Ok(0));
    });
}

#[test]
fn contains_matches_members() {
    with_resolver(&gap(), &GenerationConfig::new(), |r| {
        let present: Vec<i128> = (0..=12).filter(|v| r.contains(*v)).collect();
        assert_eq!(present, [2, 3, 5, 6, 7, 8, 9, 11]);
    });
}

#[test]
fn values_and_names_stable() {
    with_resolver(&unum(), &GenerationConfig::new(), |r| {
        assert_eq!(r.values(), [0, 1, 2, 253, 254]);
        assert_eq!(r.values(), r.values());
        assert_eq!(r.names(), ["m0", "m1", "m2", "m_2", "m_1"]);
    });
}
