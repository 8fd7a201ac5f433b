use chrono::{TimeZone, Utc};
use jwt_claims::{
    claims, to_fragment, to_json_object, write_claims, Claim, ClaimKind, ClaimValue, Error,
};
use num_bigint::BigInt;
use serde::Deserialize;

#[test]
fn test_token_payload_example() {
    let claims = [Claim::new("iss", "auth0"), Claim::new("iat", 1516239022)];
    assert_eq!(
        to_fragment(&claims).unwrap(),
        r#""iss":"auth0","iat":1516239022"#
    );
}

#[test]
fn test_boolean_renders_unquoted() {
    assert_eq!(
        to_fragment(&[Claim::new("active", true)]).unwrap(),
        r#""active":true"#
    );
}

#[test]
fn test_input_order_and_comma_count() {
    let claims: Vec<Claim> = (0..10).map(|i| Claim::new(format!("k{}", i), i)).collect();
    let fragment = to_fragment(&claims).unwrap();

    assert_eq!(fragment.matches(',').count(), 9);
    let first = fragment.split(',').next().unwrap();
    assert_eq!(first, r#""k0":0"#);
    let last = fragment.split(',').last().unwrap();
    assert_eq!(last, r#""k9":9"#);
}

#[test]
fn test_string_escaping_roundtrips_through_json_parser() {
    let original = "quote \" backslash \\ newline \n tab \t bell \u{0007} done";
    let object = to_json_object(&[Claim::new("msg", original)]).unwrap();

    #[derive(Deserialize)]
    struct Payload {
        msg: String,
    }

    let parsed: Payload = serde_json::from_str(&object).unwrap();
    assert_eq!(parsed.msg, original);
}

#[test]
fn test_fragment_is_splicable_into_object() {
    let claims = claims! {
        "iss": "auth0",
        "exp": 1516242622,
        "active": true,
        "middle_name": null,
    };

    let mut payload = String::from("{");
    claims.write_into(&mut payload).unwrap();
    payload.push('}');

    let parsed: serde_json::Value = serde_json::from_str(&payload).unwrap();
    assert_eq!(parsed["iss"], "auth0");
    assert_eq!(parsed["exp"], 1516242622);
    assert_eq!(parsed["active"], true);
    assert_eq!(parsed["middle_name"], serde_json::Value::Null);
}

#[test]
fn test_prerendered_fragments_emit_verbatim() {
    let claims = [
        Claim::new("aud", ClaimValue::string_array(&["api", "web"])),
        Claim::new("ctx", ClaimValue::from_tag(6, r#"{"ip":"10.0.0.1"}"#).unwrap()),
    ];
    let object = to_json_object(&claims).unwrap();
    assert_eq!(object, r#"{"aud":["api","web"],"ctx":{"ip":"10.0.0.1"}}"#);

    // The emitted object is valid JSON end to end.
    let parsed: serde_json::Value = serde_json::from_str(&object).unwrap();
    assert_eq!(parsed["aud"][1], "web");
    assert_eq!(parsed["ctx"]["ip"], "10.0.0.1");
}

#[test]
fn test_derived_key_length_stops_at_embedded_nul() {
    let fragment = to_fragment(&[Claim::new("sub\0trailing", "user-1")]).unwrap();
    assert_eq!(fragment, r#""sub":"user-1""#);
}

#[test]
fn test_explicit_length_reads_past_embedded_nul() {
    // An explicit value length takes the bytes verbatim; serde_json confirms the
    // NUL survives as an escaped control character.
    let claim = Claim::new("blob", "ab\0cd").with_value_len(5);
    let object = to_json_object(&[claim]).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&object).unwrap();
    assert_eq!(parsed["blob"], "ab\0cd");
}

#[test]
fn test_explicit_length_truncates() {
    let claim = Claim::new("subject", "user-1").with_key_len(3);
    assert_eq!(to_fragment(&[claim]).unwrap(), r#""sub":"user-1""#);
}

#[test]
fn test_out_of_range_length_is_invalid_argument() {
    let claim = Claim::new("iss", "auth0").with_value_len(64);
    match to_fragment(&[claim]) {
        Err(Error::InvalidArgument(_)) => {}
        other => panic!("expected InvalidArgument, got {:?}", other),
    }
}

#[test]
fn test_unknown_tag_is_malformed_claim() {
    match ClaimValue::from_tag(9, "anything") {
        Err(Error::MalformedClaim(msg)) => assert!(msg.contains("tag 9")),
        other => panic!("expected MalformedClaim, got {:?}", other),
    }
    assert!(ClaimKind::from_tag(255).is_err());
}

#[test]
fn test_registered_claim_constructors() {
    let issued = Utc.timestamp_opt(1516239022, 0).unwrap();
    let expires = Utc.timestamp_opt(1516242622, 0).unwrap();

    let claims = [
        Claim::issuer("auth0"),
        Claim::subject("user-1"),
        Claim::audience("api"),
        Claim::issued_at(issued),
        Claim::expires_at(expires),
        Claim::jwt_id("token-1"),
    ];

    assert_eq!(
        to_fragment(&claims).unwrap(),
        r#""iss":"auth0","sub":"user-1","aud":"api","iat":1516239022,"exp":1516242622,"jti":"token-1""#
    );
}

#[test]
fn test_big_integer_claim_renders_all_digits() {
    let big: BigInt = "340282366920938463463374607431768211455".parse().unwrap();
    let fragment = to_fragment(&[Claim::new("nonce", ClaimValue::BigInt(big))]).unwrap();
    assert_eq!(
        fragment,
        r#""nonce":340282366920938463463374607431768211455"#
    );
}

#[test]
fn test_decoder_ingest_through_serde() {
    // A decoder hands over parsed JSON; nested structures arrive as pre-rendered
    // fragments ready for verbatim re-emission.
    let value = ClaimValue::deserialize(serde_json::json!({
        "roles": ["admin", "auditor"],
        "level": 3
    }))
    .unwrap();

    // serde_json's map keeps keys in sorted order, which the fragment preserves.
    let claim = Claim::new(String::from("authz"), value).into_owned();
    let object = to_json_object(&[claim]).unwrap();
    assert_eq!(object, r#"{"authz":{"level":3,"roles":["admin","auditor"]}}"#);
}

#[test]
fn test_textual_producer_boundary() {
    // A decoder carrying (tag, text) pairs reconstructs typed claims.
    let raw: &[(&str, u8, &str)] = &[
        ("iss", 0, "auth0"),
        ("iat", 1, "1516239022"),
        ("ratio", 2, "0.75"),
        ("active", 3, "true"),
        ("aud", 5, r#"["api"]"#),
    ];

    let claims: Vec<Claim> = raw
        .iter()
        .map(|(key, tag, text)| {
            Ok(Claim::new(
                key.to_string(),
                ClaimValue::from_tag(*tag, text.to_string())?,
            ))
        })
        .collect::<jwt_claims::Result<_>>()
        .unwrap();

    assert_eq!(
        to_fragment(&claims).unwrap(),
        r#""iss":"auth0","iat":1516239022,"ratio":0.75,"active":true,"aud":["api"]"#
    );
}

#[test]
fn test_duplicate_keys_are_preserved() {
    let claims = [Claim::new("k", 1), Claim::new("k", 2)];
    assert_eq!(to_fragment(&claims).unwrap(), r#""k":1,"k":2"#);
}

#[test]
fn test_empty_string_values_are_distinct_from_derive() {
    let fragment = to_fragment(&[Claim::new("note", "")]).unwrap();
    assert_eq!(fragment, r#""note":"""#);
}

#[test]
fn test_write_into_byte_buffer() {
    let mut out: Vec<u8> = Vec::new();
    write_claims(&mut out, &[Claim::new("iss", "auth0")]).unwrap();
    assert_eq!(out, br#""iss":"auth0""#);
}
