//! Tests for multi-source path resolution.

use serde_json::{Value, json};

use super::error::ExtractError;
use super::extractor::{Extractor, Fallback, extract};

mod priority {
    use super::*;

    #[test]
    fn last_source_wins_when_both_resolve() {
        let extractor = Extractor::new(vec![json!({"a": 1}), json!({"a": 2})]);
        assert_eq!(extractor.lookup("a"), Some(&json!(2)));
    }

    #[test]
    fn falls_back_to_earlier_source_when_later_misses() {
        let extractor = Extractor::new(vec![json!({"a": 1}), json!({"b": 2})]);
        assert_eq!(extractor.lookup("a"), Some(&json!(1)));
    }

    #[test]
    fn partial_match_on_later_source_does_not_shadow_earlier_one() {
        // The highest-priority source has "a" but as a scalar, so "a.b"
        // misses there and must resolve against the earlier source.
        let extractor =
            Extractor::new(vec![json!({"a": {"b": 1}}), json!({"a": 2})]);
        assert_eq!(extractor.lookup("a.b"), Some(&json!(1)));
    }

    #[test]
    fn three_sources_resolve_in_reverse_load_order() {
        let extractor = Extractor::new(vec![
            json!({"k": "first", "only_first": true}),
            json!({"k": "second"}),
            json!({"k": "third"}),
        ]);
        assert_eq!(extractor.lookup("k"), Some(&json!("third")));
        assert_eq!(extractor.lookup("only_first"), Some(&json!(true)));
    }

    #[test]
    fn stored_null_in_high_priority_source_wins_over_real_value() {
        // A stored null is a successful resolution, not a miss.
        let extractor =
            Extractor::new(vec![json!({"a": 1}), json!({"a": null})]);
        assert_eq!(extractor.lookup("a"), Some(&Value::Null));
    }
}

mod fallbacks {
    use super::*;

    #[test]
    fn value_fallback_is_returned_unchanged() {
        let extractor = Extractor::new(vec![json!({"a": 1})]);
        let result = extractor.extract("missing", Fallback::Value(json!("d")));
        assert_eq!(result, Ok(json!("d")));
    }

    #[test]
    fn zero_and_empty_fallbacks_are_not_conflated_with_absence() {
        let extractor = Extractor::new(vec![json!({})]);
        assert_eq!(
            extractor.extract("missing", Fallback::Value(json!(0))),
            Ok(json!(0))
        );
        assert_eq!(
            extractor.extract("missing", Fallback::Value(Value::Null)),
            Ok(Value::Null)
        );
    }

    #[test]
    fn not_found_fallback_names_the_joined_path() {
        let extractor = Extractor::new(vec![json!({"a": 1})]);
        let error = extractor
            .extract("a.b.c", Fallback::NotFound)
            .unwrap_err();
        assert_eq!(error, ExtractError::not_found("a.b.c"));
    }

    #[test]
    fn not_found_fallback_joins_pre_split_segments_with_delimiter() {
        let extractor =
            Extractor::with_delimiter(vec![json!({})], '/');
        let error = extractor
            .extract(vec!["x", "y"], Fallback::NotFound)
            .unwrap_err();
        assert_eq!(error, ExtractError::not_found("x/y"));
    }

    #[test]
    fn raise_fallback_surfaces_the_exact_error() {
        let extractor = Extractor::new(vec![json!({})]);
        let custom = ExtractError::required("a database host must be configured");
        let error = extractor
            .extract("db.host", Fallback::Raise(custom.clone()))
            .unwrap_err();
        assert_eq!(error, custom);
    }

    #[test]
    fn fallback_is_ignored_when_the_path_resolves() {
        let extractor = Extractor::new(vec![json!({"a": 1})]);
        let result = extractor.extract(
            "a",
            Fallback::Raise(ExtractError::required("unused")),
        );
        assert_eq!(result, Ok(json!(1)));
    }
}

mod sequences {
    use super::*;

    #[test]
    fn integer_segment_indexes_into_a_sequence() {
        let extractor = Extractor::new(vec![json!({"list": ["x", "y"]})]);
        assert_eq!(extractor.lookup("list.1"), Some(&json!("y")));
    }

    #[test]
    fn out_of_range_index_is_a_miss() {
        let extractor = Extractor::new(vec![json!({"list": ["x", "y"]})]);
        let result =
            extractor.extract("list.5", Fallback::Value(json!("default")));
        assert_eq!(result, Ok(json!("default")));
    }

    #[test]
    fn negative_index_is_a_miss() {
        let extractor = Extractor::new(vec![json!({"list": ["x", "y"]})]);
        assert_eq!(extractor.lookup("list.-1"), None);
    }

    #[test]
    fn non_integer_segment_on_a_sequence_is_a_miss() {
        let extractor = Extractor::new(vec![json!({"list": ["x", "y"]})]);
        assert_eq!(extractor.lookup("list.first"), None);
    }

    #[test]
    fn paths_continue_through_sequence_elements() {
        let extractor = Extractor::new(vec![json!({
            "servers": [
                {"host": "a.example"},
                {"host": "b.example"},
            ]
        })]);
        assert_eq!(
            extractor.lookup("servers.1.host"),
            Some(&json!("b.example"))
        );
    }
}

mod delimiters {
    use super::*;

    #[test]
    fn pre_split_segment_reaches_a_key_containing_the_delimiter() {
        let extractor = Extractor::new(vec![json!({"a.b": "v"})]);
        assert_eq!(extractor.lookup(vec!["a.b"]), Some(&json!("v")));
    }

    #[test]
    fn custom_delimiter_leaves_dots_in_keys_alone() {
        let extractor =
            Extractor::with_delimiter(vec![json!({"a.b": "v"})], '|');
        assert_eq!(extractor.lookup("a.b"), Some(&json!("v")));
    }

    #[test]
    fn custom_delimiter_splits_joined_paths() {
        let extractor =
            Extractor::with_delimiter(vec![json!({"a": {"b": 1}})], '/');
        assert_eq!(extractor.lookup("a/b"), Some(&json!(1)));
    }
}

mod edge_cases {
    use super::*;

    #[test]
    fn empty_source_list_never_resolves() {
        let extractor = Extractor::new(Vec::new());
        assert_eq!(extractor.lookup("anything"), None);
        assert_eq!(
            extractor.extract("anything", Fallback::Value(json!(1))),
            Ok(json!(1))
        );
    }

    #[test]
    fn null_source_is_skipped_without_error() {
        let extractor =
            Extractor::new(vec![json!({"a": 1}), Value::Null]);
        assert_eq!(extractor.lookup("a"), Some(&json!(1)));
    }

    #[test]
    fn zero_segment_path_returns_the_highest_priority_source() {
        let extractor =
            Extractor::new(vec![json!({"a": 1}), json!({"b": 2})]);
        assert_eq!(extractor.lookup(""), Some(&json!({"b": 2})));
        assert_eq!(
            extractor.lookup(Vec::<String>::new()),
            Some(&json!({"b": 2}))
        );
    }

    #[test]
    fn scalar_source_misses_on_any_segment() {
        let extractor =
            Extractor::new(vec![json!({"a": 1}), json!("just a string")]);
        assert_eq!(extractor.lookup("a"), Some(&json!(1)));
    }

    #[test]
    fn round_trip_returns_original_leaf_values() {
        let data = json!({
            "name": "svc",
            "limits": {"cpu": 2, "memory": null},
            "hosts": ["a", "b"],
            "enabled": true,
        });
        let extractor = Extractor::new(vec![data]);

        assert_eq!(extractor.lookup("name"), Some(&json!("svc")));
        assert_eq!(extractor.lookup("limits.cpu"), Some(&json!(2)));
        assert_eq!(extractor.lookup("limits.memory"), Some(&Value::Null));
        assert_eq!(extractor.lookup("hosts.0"), Some(&json!("a")));
        assert_eq!(extractor.lookup("hosts.1"), Some(&json!("b")));
        assert_eq!(extractor.lookup("enabled"), Some(&json!(true)));
    }
}

mod free_function {
    use super::*;

    #[test]
    fn resolves_against_a_single_source() {
        let data = json!({"a": {"b": ["x", "y"]}});
        assert_eq!(
            extract(&data, "a.b.0", Fallback::NotFound),
            Ok(json!("x"))
        );
    }

    #[test]
    fn applies_the_fallback_on_a_miss() {
        let data = json!({"a": 1});
        assert_eq!(
            extract(&data, "b", Fallback::Value(json!(42))),
            Ok(json!(42))
        );
    }
}
