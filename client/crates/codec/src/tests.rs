//! Cross-module tests for the serialization layer

#[cfg(test)]
mod precision_tests {
    use crate::payload::Payload;
    use crate::scalar::*;
    use num_bigint::BigInt;

    #[test]
    fn test_unsafe_numbers_keep_their_digits_through_bigint() {
        for n in [
            9007199254740992.0,
            9007199254740993.0,
            -9007199254740994.0,
            1.8446744073709552e19,
            1e21,
            -3.4e38,
        ] {
            let text = to_decimal_string(Payload::Number(n));
            let Payload::String(digits) = text.clone() else {
                panic!("expected a string for {n}");
            };
            let round_trip = to_decimal_string(to_bigint_or_passthrough(text));
            assert_eq!(round_trip, Payload::String(digits), "{n}");
        }
    }

    #[test]
    fn test_decimal_strings_round_trip_exactly() {
        for s in [
            "0",
            "7",
            "-1",
            "9007199254740991",
            "9007199254740993",
            "123456789012345678901",
            "-98765432109876543210987654321",
        ] {
            let back = to_decimal_string(to_bigint_or_passthrough(Payload::from(s)));
            assert_eq!(back, Payload::from(s));
        }
    }

    #[test]
    fn test_non_canonical_decimal_strings_come_back_canonical() {
        for (input, canonical) in [
            ("+5", "5"),
            ("007", "7"),
            ("-0", "0"),
            ("+0", "0"),
            ("-000123456789012345678901", "-123456789012345678901"),
        ] {
            let back = to_decimal_string(to_bigint_or_passthrough(Payload::from(input)));
            assert_eq!(back, Payload::from(canonical), "{input}");
        }
    }

    #[test]
    fn test_is_likely_large_identifier_reference_values() {
        assert!(!is_likely_large_identifier(&Payload::Null));
        assert!(!is_likely_large_identifier(&Payload::from("abc")));
        assert!(is_likely_large_identifier(&Payload::from("123456789012345678901")));
        assert!(is_likely_large_identifier(&Payload::Number(9007199254740993.0)));
        assert!(is_likely_large_identifier(&Payload::BigInt(BigInt::from(10))));
    }
}

#[cfg(test)]
mod document_tests {
    use crate::form::{FilePart, FormData, FormValue};
    use crate::normalize::*;
    use crate::payload::Payload;
    use crate::wire::*;
    use num_bigint::BigInt;

    #[test]
    fn test_order_id_is_stringified_without_residual_bigint() {
        let doc = Payload::object([
            (
                "orderId",
                Payload::BigInt("123456789012345678901".parse::<BigInt>().unwrap()),
            ),
            ("note", Payload::from("x")),
        ]);
        let out = normalize_identifier_fields_deep(doc, Direction::ToDecimalString);
        assert_eq!(
            out,
            Payload::object([
                ("orderId", Payload::from("123456789012345678901")),
                ("note", Payload::from("x")),
            ])
        );
        assert!(!matches!(out.get("orderId"), Some(Payload::BigInt(_))));
    }

    #[test]
    fn test_form_text_and_file_are_left_untouched() {
        let file = FilePart::new("rice.jpg", vec![0xff, 0xd8, 0xff]).with_content_type("image/jpeg");
        let mut form = FormData::new();
        form.append("quantity", "10").append_file("image", file.clone());
        let original = form.clone();

        let RequestPayload::Form(out) = encode_request_payload(form.into()) else {
            panic!("expected a form");
        };
        assert_eq!(out, original);
        assert_eq!(out.get("quantity"), Some(&FormValue::Value(Payload::from("10"))));
        assert_eq!(out.get("image"), Some(&FormValue::File(file)));
    }

    #[test]
    fn test_decode_is_idempotent_on_stringified_input() {
        let doc = Payload::object([
            ("userId", Payload::from("55")),
            (
                "items",
                Payload::Array(vec![Payload::object([(
                    "productId",
                    Payload::from("9007199254740993"),
                )])]),
            ),
        ]);
        let once = decode_response_payload(doc.clone());
        assert_eq!(once, doc);
        assert_eq!(decode_response_payload(once), doc);
    }

    #[test]
    fn test_decode_of_encode_is_not_identity() {
        // Both directions stringify every scalar leaf, so typed input does not survive.
        let original = Payload::object([
            ("quantity", Payload::Number(10.0)),
            ("organic", Payload::Bool(true)),
            ("areaId", Payload::BigInt(BigInt::from(42))),
        ]);
        let RequestPayload::Document(encoded) = encode_request_payload(original.clone().into())
        else {
            panic!("expected a document");
        };
        let decoded = decode_response_payload(encoded);
        assert_ne!(decoded, original);
        assert_eq!(decoded.get("quantity"), Some(&Payload::from("10")));
        assert_eq!(decoded.get("organic"), Some(&Payload::from("true")));
        assert_eq!(decoded.get("areaId"), Some(&Payload::from("42")));
    }

    #[test]
    fn test_outbound_and_inbound_rules_differ_on_snake_case_keys() {
        let composite = Payload::object([("raw", Payload::from("1"))]);
        let doc = Payload::object([
            ("area_id", composite.clone()),
            ("areaId", composite.clone()),
        ]);

        // Allowlist: both keys match and the composite is stringified whole.
        let out = normalize_identifier_fields_deep(doc.clone(), Direction::ToDecimalString);
        assert_eq!(out.get("area_id"), Some(&Payload::from(r#"{"raw":"1"}"#)));
        assert_eq!(out.get("areaId"), Some(&Payload::from(r#"{"raw":"1"}"#)));

        // Suffix rule: only `areaId` matches; `area_id` is walked into.
        let out = normalize_identifier_fields_deep(doc, Direction::ToNumeric);
        assert_eq!(out.get("areaId"), Some(&composite));
        assert_eq!(
            out.get("area_id"),
            Some(&Payload::object([("raw", Payload::BigInt(BigInt::from(1)))]))
        );
    }

    #[test]
    fn test_unparseable_scalars_do_not_abort_the_walk() {
        let doc = Payload::Array(vec![
            Payload::from("not-a-number"),
            Payload::object([("id", Payload::from("also not")), ("orderId", Payload::from("8"))]),
        ]);
        let out = normalize_identifier_fields_deep(doc, Direction::ToNumeric);
        assert_eq!(
            out,
            Payload::Array(vec![
                Payload::from("not-a-number"),
                Payload::object([
                    ("id", Payload::from("also not")),
                    ("orderId", Payload::BigInt(BigInt::from(8))),
                ]),
            ])
        );
    }

    #[test]
    fn test_trusted_json_then_decode_preserves_unquoted_big_ids() {
        let text = r#"{"code":200,"data":{"records":[{"id":1876543210987654321987,"price":12.5}]}}"#;
        let payload = parse_trusted_json(text).unwrap();
        let decoded = decode_response_payload(payload);
        assert_eq!(
            decoded.to_string(),
            r#"{"code":"200","data":{"records":[{"id":"1876543210987654321987","price":"12.5"}]}}"#
        );
    }
}
