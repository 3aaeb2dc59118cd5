use super::*;

fn inst(kind: &str, params: serde_json::Value) -> FilterInstance {
    FilterInstance {
        kind: kind.to_string(),
        params,
    }
}

#[test]
fn parse_known_kinds_and_aliases() {
    let null = serde_json::Value::Null;
    assert_eq!(parse_filter(&inst("none", null.clone())).unwrap(), FilterKind::None);
    assert_eq!(
        parse_filter(&inst("identity", null.clone())).unwrap(),
        FilterKind::None
    );
    assert_eq!(
        parse_filter(&inst(" GreyScale ", null.clone())).unwrap(),
        FilterKind::Grayscale
    );
    assert_eq!(parse_filter(&inst("sepia", null)).unwrap(), FilterKind::Sepia);
}

#[test]
fn parse_sharpen_reads_amount() {
    let k = parse_filter(&inst("sharpen", serde_json::json!({ "amount": 1.5 }))).unwrap();
    assert_eq!(k, FilterKind::Sharpen { amount: 1.5 });
}

#[test]
fn parse_sharpen_requires_numeric_non_negative_amount() {
    for params in [
        serde_json::Value::Null,
        serde_json::json!({}),
        serde_json::json!({ "amount": "1" }),
        serde_json::json!({ "amount": -2.0 }),
    ] {
        let err = parse_filter(&inst("sharpen", params)).unwrap_err();
        assert!(matches!(err, FilterError::InvalidParameter(_)), "{err}");
    }
}

#[test]
fn unknown_kind_is_unsupported() {
    let err = parse_filter(&inst("blur", serde_json::Value::Null)).unwrap_err();
    match err {
        FilterError::UnsupportedFilterKind(k) => assert_eq!(k, "blur"),
        other => panic!("unexpected error: {other}"),
    }
    assert!(matches!(
        parse_filter(&inst("  ", serde_json::Value::Null)).unwrap_err(),
        FilterError::UnsupportedFilterKind(_)
    ));
}

#[test]
fn from_str_handles_amount_suffix() {
    assert_eq!("sepia".parse::<FilterKind>().unwrap(), FilterKind::Sepia);
    assert_eq!(
        "sharpen".parse::<FilterKind>().unwrap(),
        FilterKind::Sharpen {
            amount: DEFAULT_SHARPEN_AMOUNT
        }
    );
    assert_eq!(
        "Sharpen: 0.25".parse::<FilterKind>().unwrap(),
        FilterKind::Sharpen { amount: 0.25 }
    );
    assert!("sharpen:abc".parse::<FilterKind>().is_err());
    assert!("sharpen:-1".parse::<FilterKind>().is_err());
    assert!("sepia:2".parse::<FilterKind>().is_err());
    assert!(matches!(
        "emboss".parse::<FilterKind>().unwrap_err(),
        FilterError::UnsupportedFilterKind(_)
    ));
}

#[test]
fn names_are_canonical() {
    assert_eq!(FilterKind::None.name(), "none");
    assert_eq!(FilterKind::Grayscale.name(), "grayscale");
    assert_eq!(FilterKind::Sepia.name(), "sepia");
    assert_eq!(FilterKind::Sharpen { amount: 3.0 }.name(), "sharpen");
}

#[test]
fn instance_params_default_to_null() {
    let i: FilterInstance = serde_json::from_str(r#"{ "kind": "sepia" }"#).unwrap();
    assert!(i.params.is_null());
}

#[test]
fn parameterless_kinds_reject_params_like_from_str() {
    for kind in ["none", "grayscale", "sepia"] {
        assert!(parse_filter(&inst(kind, serde_json::json!({}))).is_ok());
        let err = parse_filter(&inst(kind, serde_json::json!({ "amount": 1.0 }))).unwrap_err();
        assert!(matches!(err, FilterError::InvalidParameter(_)), "{kind}: {err}");
        assert!(parse_filter(&inst(kind, serde_json::json!(1))).is_err());
        assert!(format!("{kind}:1").parse::<FilterKind>().is_err());
    }
}
