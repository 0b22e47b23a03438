// tests/property/combiner_test.rs

//! Property-based tests for positional argument building
//! Tests that combining tokens drops empties, expands arrays in place and keeps order

use bytes::Bytes;
use proptest::prelude::*;
use spineljson::core::commands::ArgToken;
use spineljson::core::commands::helpers::combine;

fn arb_bytes() -> impl Strategy<Value = Bytes> {
    "[a-z.$\\[\\]*]{0,8}".prop_map(Bytes::from)
}

fn arb_token() -> impl Strategy<Value = ArgToken> {
    prop_oneof![
        arb_bytes().prop_map(ArgToken::Bulk),
        any::<i64>().prop_map(ArgToken::Int),
        any::<f64>()
            .prop_filter("finite", |f| f.is_finite())
            .prop_map(ArgToken::Float),
        prop::collection::vec(arb_bytes(), 0..5).prop_map(ArgToken::Many),
        Just(ArgToken::Omitted),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    })]

    #[test]
    fn test_combine_never_emits_empty_tokens(tokens in prop::collection::vec(arb_token(), 0..12)) {
        let args = combine(tokens).unwrap();
        prop_assert!(args.iter().all(|a| !a.is_empty()));
    }

    #[test]
    fn test_combine_is_piecewise(
        head in prop::collection::vec(arb_token(), 0..6),
        tail in prop::collection::vec(arb_token(), 0..6),
    ) {
        let whole = combine(head.iter().cloned().chain(tail.iter().cloned())).unwrap();
        let mut pieces = combine(head).unwrap();
        pieces.extend(combine(tail).unwrap());
        prop_assert_eq!(whole, pieces);
    }

    #[test]
    fn test_combine_keeps_non_empty_strings_in_order(items in prop::collection::vec(arb_bytes(), 0..12)) {
        let tokens: Vec<ArgToken> = items.iter().cloned().map(ArgToken::Bulk).collect();
        let expected: Vec<Bytes> = items.into_iter().filter(|b| !b.is_empty()).collect();
        prop_assert_eq!(combine(tokens).unwrap(), expected);
    }

    #[test]
    fn test_integers_render_as_decimal(n in any::<i64>()) {
        let args = combine([ArgToken::Int(n)]).unwrap();
        prop_assert_eq!(args.len(), 1);
        let text = std::str::from_utf8(&args[0]).unwrap();
        prop_assert_eq!(text.parse::<i64>().unwrap(), n);
    }

    #[test]
    fn test_floats_render_losslessly(f in any::<f64>().prop_filter("finite", |f| f.is_finite())) {
        let args = combine([ArgToken::Float(f)]).unwrap();
        let text = std::str::from_utf8(&args[0]).unwrap();
        prop_assert_eq!(text.parse::<f64>().unwrap(), f);
    }

    #[test]
    fn test_omitted_tokens_vanish(tokens in prop::collection::vec(arb_token(), 0..8)) {
        let with_gaps = tokens
            .iter()
            .cloned()
            .flat_map(|t| [ArgToken::Omitted, t]);
        prop_assert_eq!(combine(with_gaps).unwrap(), combine(tokens).unwrap());
    }
}
