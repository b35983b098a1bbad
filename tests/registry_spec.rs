use pretty_assertions::assert_eq;
use serde_json::json;

use iso3166_registry::{data, keys, Iso3166Error, KeyField, Record, Registry};

type ValidatorCase = (&'static str, &'static str);

/// Inputs that must pass each validator, with the expected normalized form.
const VALID_ALPHA2: &[ValidatorCase] = &[("FO", "FO"), ("fo", "FO"), ("aB", "AB"), ("zz", "ZZ")];
const VALID_ALPHA3: &[ValidatorCase] = &[("FOO", "FOO"), ("foo", "FOO"), ("bAr", "BAR")];
const VALID_NUMERIC: &[ValidatorCase] = &[("001", "001"), ("090", "090"), ("999", "999")];

/// Inputs that must fail each validator's format check.
const MALFORMED_ALPHA2: &[&str] = &["Z", "ZZZ", "1a", "a1", "äb", "", " a"];
const MALFORMED_ALPHA3: &[&str] = &["ZZ", "ZZZZ", "12a", "ä00", ""];
const MALFORMED_NUMERIC: &[&str] = &["00", "0000", "ZZ", "ZZZ", "12a", ""];

fn foo() -> Record {
    Record::new("FO", "FOO", "001").with_field("name", "Foo")
}

fn bar() -> Record {
    Record::new("BA", "BAR", "002").with_field("name", "Bar")
}

fn fixture_registry() -> Registry {
    Registry::build(vec![foo(), bar()]).expect("fixture records are valid")
}

#[test]
fn validators_normalize_well_formed_keys() {
    for &(input, expected) in VALID_ALPHA2 {
        assert_eq!(keys::validate_alpha2(&json!(input)).unwrap(), expected);
    }
    for &(input, expected) in VALID_ALPHA3 {
        assert_eq!(keys::validate_alpha3(&json!(input)).unwrap(), expected);
    }
    for &(input, expected) in VALID_NUMERIC {
        assert_eq!(keys::validate_numeric(&json!(input)).unwrap(), expected);
    }
}

#[test]
fn validators_reject_malformed_strings() {
    for &input in MALFORMED_ALPHA2 {
        assert_eq!(
            keys::validate_alpha2(&json!(input)).unwrap_err(),
            Iso3166Error::InvalidKeyFormat {
                field: KeyField::Alpha2,
                value: input.to_string(),
            },
        );
    }
    for &input in MALFORMED_ALPHA3 {
        assert_eq!(
            keys::validate_alpha3(&json!(input)).unwrap_err(),
            Iso3166Error::InvalidKeyFormat {
                field: KeyField::Alpha3,
                value: input.to_string(),
            },
        );
    }
    for &input in MALFORMED_NUMERIC {
        assert_eq!(
            keys::validate_numeric(&json!(input)).unwrap_err(),
            Iso3166Error::InvalidKeyFormat {
                field: KeyField::Numeric,
                value: input.to_string(),
            },
        );
    }
}

#[test]
fn validators_type_check_before_format_check() {
    // 123 would also fail the alpha2 format check; the type error must win.
    let cases = [
        (json!(123), "number"),
        (json!(null), "null"),
        (json!(true), "boolean"),
        (json!(["FO"]), "array"),
        (json!({"code": "FO"}), "object"),
    ];

    for (input, actual) in cases {
        assert_eq!(
            keys::validate_alpha2(&input).unwrap_err(),
            Iso3166Error::InvalidKeyType {
                field: KeyField::Alpha2,
                actual,
            },
        );
        assert_eq!(
            keys::validate_alpha3(&input).unwrap_err(),
            Iso3166Error::InvalidKeyType {
                field: KeyField::Alpha3,
                actual,
            },
        );
        assert_eq!(
            keys::validate_numeric(&input).unwrap_err(),
            Iso3166Error::InvalidKeyType {
                field: KeyField::Numeric,
                actual,
            },
        );
    }
}

#[test]
fn key_field_round_trips_selector_strings() {
    assert_eq!(KeyField::parse("alpha2").unwrap(), KeyField::Alpha2);
    assert_eq!(KeyField::parse("alpha3").unwrap(), KeyField::Alpha3);
    assert_eq!(KeyField::parse("numeric").unwrap(), KeyField::Numeric);
    assert_eq!(KeyField::Alpha2.to_string(), "alpha2");
    assert_eq!(KeyField::Numeric.to_string(), "numeric");
}

#[test]
fn lookups_hit_every_fixture_record() {
    let registry = fixture_registry();

    assert_eq!(registry.get_by_alpha2("FO").unwrap(), &foo());
    assert_eq!(registry.get_by_alpha2("BA").unwrap(), &bar());
    assert_eq!(registry.get_by_alpha3("FOO").unwrap(), &foo());
    assert_eq!(registry.get_by_alpha3("BAR").unwrap(), &bar());
    assert_eq!(registry.get_by_numeric("001").unwrap(), &foo());
    assert_eq!(registry.get_by_numeric("002").unwrap(), &bar());
}

#[test]
fn alpha_lookups_are_case_insensitive() {
    let registry = fixture_registry();

    assert_eq!(registry.get_by_alpha2("fo").unwrap(), &foo());
    assert_eq!(registry.get_by_alpha3("bar").unwrap(), &bar());
}

#[test]
fn lookups_fail_on_malformed_or_unknown_keys() {
    let registry = fixture_registry();

    assert_eq!(
        registry.get_by_alpha2("Z").unwrap_err(),
        Iso3166Error::InvalidKeyFormat {
            field: KeyField::Alpha2,
            value: "Z".to_string(),
        },
    );
    assert_eq!(
        registry.get_by_alpha3("ZZZZ").unwrap_err(),
        Iso3166Error::InvalidKeyFormat {
            field: KeyField::Alpha3,
            value: "ZZZZ".to_string(),
        },
    );
    assert_eq!(
        registry.get_by_alpha2("ZZ").unwrap_err(),
        Iso3166Error::NotFound("ZZ".to_string()),
    );
    assert_eq!(
        registry.get_by_numeric("003").unwrap_err(),
        Iso3166Error::NotFound("003".to_string()),
    );
}

#[test]
fn error_messages_carry_the_offending_input() {
    let registry = fixture_registry();

    assert_eq!(
        registry.get_by_numeric("003").unwrap_err().to_string(),
        "ISO 3166-1 does not contain: 003",
    );
    assert_eq!(
        registry.get_by_alpha2("Z").unwrap_err().to_string(),
        "not a valid alpha2 key: Z",
    );
    assert_eq!(
        keys::validate_alpha2(&json!(123)).unwrap_err().to_string(),
        "expected alpha2 key to be a string, got: number",
    );
    assert_eq!(
        registry.list_by("foo").unwrap_err().to_string(),
        "invalid value for field selector, got \"foo\", expected one of: alpha2, alpha3, numeric",
    );
}

#[test]
fn build_rejects_records_missing_a_required_key() {
    let no_numeric: Record =
        serde_json::from_value(json!({"alpha2": "FO", "alpha3": "FOO"})).unwrap();

    let err = Registry::build(vec![no_numeric]).unwrap_err();
    assert_eq!(err, Iso3166Error::MissingKey(KeyField::Numeric));
    assert_eq!(err.to_string(), "each entry must have a valid numeric key");
}

#[test]
fn build_rejects_non_string_required_keys() {
    let numeric_as_number: Record =
        serde_json::from_value(json!({"alpha2": "FO", "alpha3": "FOO", "numeric": 1})).unwrap();

    assert_eq!(
        Registry::build(vec![numeric_as_number]).unwrap_err(),
        Iso3166Error::InvalidKeyType {
            field: KeyField::Numeric,
            actual: "number",
        },
    );
}

#[test]
fn build_rejects_malformed_numeric_value() {
    // The numeric value itself is validated, not just its presence.
    let bad = Record::new("FO", "FOO", "12");

    assert_eq!(
        Registry::build(vec![bad]).unwrap_err(),
        Iso3166Error::InvalidKeyFormat {
            field: KeyField::Numeric,
            value: "12".to_string(),
        },
    );
}

#[test]
fn build_rejects_duplicate_keys() {
    // Same alpha2 as foo() after normalization, distinct alpha3 and numeric.
    let clash = Record::new("fo", "FOX", "003");

    assert_eq!(
        Registry::build(vec![foo(), clash]).unwrap_err(),
        Iso3166Error::DuplicateKey {
            field: KeyField::Alpha2,
            value: "FO".to_string(),
        },
    );
}

#[test]
fn iteration_covers_the_full_collection_in_order() {
    let registry = fixture_registry();

    assert_eq!(registry.len(), 2);
    assert!(!registry.is_empty());
    assert_eq!(registry.all().len(), registry.iter().count());
    assert_eq!(registry.all(), &[foo(), bar()]);

    let via_into_iter: Vec<&Record> = (&registry).into_iter().collect();
    assert_eq!(via_into_iter, vec![&foo(), &bar()]);
}

#[test]
fn iteration_is_restartable_and_repeatable() {
    let registry = fixture_registry();

    let first: Vec<&Record> = registry.iter().collect();
    let second: Vec<&Record> = registry.iter().collect();
    assert_eq!(first, second);
    assert_eq!(first.len(), registry.len());
}

#[test]
fn list_by_yields_one_pair_per_record() {
    let registry = fixture_registry();

    for selector in ["alpha2", "alpha3", "numeric"] {
        let listing = registry.list_by(selector).unwrap();
        assert_eq!(listing.count(), registry.len());
    }

    let pairs: Vec<(&str, &Record)> = registry.list_by("alpha3").unwrap().collect();
    assert_eq!(pairs, vec![("FOO", &foo()), ("BAR", &bar())]);
}

#[test]
fn list_by_keys_are_normalized() {
    let lowercase = Record::new("fo", "foo", "001");
    let registry = Registry::build(vec![lowercase]).unwrap();

    let pairs: Vec<&str> = registry.list_by("alpha2").unwrap().map(|(k, _)| k).collect();
    assert_eq!(pairs, vec!["FO"]);
}

#[test]
fn list_by_field_reports_its_keyed_field() {
    let registry = fixture_registry();

    let listing = registry.list_by_field(KeyField::Numeric);
    assert_eq!(listing.field(), KeyField::Numeric);

    let pair_keys: Vec<&str> = listing.map(|(k, _)| k).collect();
    assert_eq!(pair_keys, vec!["001", "002"]);
}

#[test]
fn list_by_rejects_unknown_field_selectors() {
    let registry = fixture_registry();

    for selector in ["foo", "name", "ALPHA2", ""] {
        assert_eq!(
            registry.list_by(selector).unwrap_err(),
            Iso3166Error::InvalidField(selector.to_string()),
        );
    }
}

#[test]
fn embedded_dataset_covers_all_assigned_codes() {
    let registry = data::registry();

    assert_eq!(registry.len(), 249);
    assert_eq!(registry.len(), data::COUNTRIES.len());
    assert_eq!(registry.iter().count(), registry.all().len());
}

#[test]
fn embedded_dataset_lookups_agree_across_key_types() {
    let registry = data::registry();

    let by_alpha2 = registry.get_by_alpha2("nl").unwrap();
    let by_alpha3 = registry.get_by_alpha3("NLD").unwrap();
    let by_numeric = registry.get_by_numeric("528").unwrap();

    assert_eq!(by_alpha2, by_alpha3);
    assert_eq!(by_alpha2, by_numeric);
    assert_eq!(by_alpha2.field("name"), Some(&json!("Netherlands")));
    assert_eq!(by_alpha2.field("currency"), Some(&json!(["EUR"])));
}

#[test]
fn embedded_dataset_round_trips_through_every_index() {
    let registry = data::registry();

    for record in registry {
        let alpha2 = record.alpha2().unwrap();
        let alpha3 = record.alpha3().unwrap();
        let numeric = record.numeric().unwrap();

        assert_eq!(registry.get_by_alpha2(alpha2).unwrap(), record);
        assert_eq!(registry.get_by_alpha3(alpha3).unwrap(), record);
        assert_eq!(registry.get_by_numeric(numeric).unwrap(), record);
    }
}

#[test]
fn embedded_dataset_preserves_leading_zeros() {
    let registry = data::registry();

    let afghanistan = registry.get_by_numeric("004").unwrap();
    assert_eq!(afghanistan.alpha2(), Some("AF"));
    assert_eq!(afghanistan.numeric(), Some("004"));

    // "4" and "04" are not well-formed numeric keys at all.
    assert!(matches!(
        registry.get_by_numeric("4").unwrap_err(),
        Iso3166Error::InvalidKeyFormat { .. }
    ));
}

#[test]
fn embedded_dataset_preserves_source_order() {
    let registry = data::registry();

    let first_alpha2: Vec<&str> = registry
        .iter()
        .take(3)
        .map(|r| r.alpha2().unwrap())
        .collect();
    assert_eq!(first_alpha2, vec!["AF", "AX", "AL"]);
}
