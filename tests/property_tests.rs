//! Property-based tests over generated inputs.

use proptest::prelude::*;
use readable::{to_string, Value};

proptest! {
    #[test]
    fn prop_byte_is_two_digit_hex(b in any::<u8>()) {
        prop_assert_eq!(to_string(&[Value::from(b)]), format!("0x{:02X}", b));
    }

    #[test]
    fn prop_int_is_decimal(n in any::<i32>()) {
        prop_assert_eq!(to_string(&[Value::from(n)]), n.to_string());
    }

    #[test]
    fn prop_long_is_decimal(n in any::<i64>()) {
        prop_assert_eq!(to_string(&[Value::from(n)]), n.to_string());
    }

    #[test]
    fn prop_graphic_char_shows_code_point_and_itself(c in proptest::char::range('!', '~')) {
        prop_assert_eq!(
            to_string(&[Value::from(c)]),
            format!("'\\u{:04X}'-'{}'", c as u32, c)
        );
    }

    #[test]
    fn prop_string_is_quoted_verbatim(s in ".*") {
        prop_assert_eq!(to_string(&[Value::from(s.as_str())]), format!("\"{}\"", s));
    }

    #[test]
    fn prop_int_vec_is_bracketed_list(items in prop::collection::vec(any::<i32>(), 0..20)) {
        let expected = format!(
            "[{}]",
            items.iter().map(i32::to_string).collect::<Vec<_>>().join(", ")
        );
        prop_assert_eq!(to_string(&[Value::from(items)]), expected);
    }

    #[test]
    fn prop_option_is_null_or_inner(n in any::<Option<i32>>()) {
        let expected = n.map_or_else(|| "<null>".to_string(), |v| v.to_string());
        prop_assert_eq!(to_string(&[Value::from(n)]), expected);
    }

    #[test]
    fn prop_primitive_array_matches_element_sequence(
        items in prop::collection::vec(any::<u8>(), 0..10)
    ) {
        let direct = to_string(&[Value::from(items.clone())]);
        let seq = to_string(&[Value::seq(items)]);
        prop_assert_eq!(direct, seq);
    }

    #[test]
    fn prop_joined_values_match_individual_renders(
        items in prop::collection::vec(any::<i64>(), 1..10)
    ) {
        let values: Vec<Value> = items.iter().copied().map(Value::from).collect();
        let parts: Vec<String> = values
            .iter()
            .map(|v| to_string(std::slice::from_ref(v)))
            .collect();
        prop_assert_eq!(to_string(&values), parts.join(", "));
    }

    #[test]
    fn prop_rendering_is_deterministic(items in prop::collection::vec(any::<f64>(), 0..10)) {
        let value = Value::seq(items);
        prop_assert_eq!(value.to_string(), value.to_string());
    }
}
