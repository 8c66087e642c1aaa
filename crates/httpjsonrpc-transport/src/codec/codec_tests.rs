#![allow(non_snake_case)]

use super::*;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, PartialEq, Serialize, Deserialize)]
struct Args {
    a: i64,
    b: i64,
}

// JsonCodec tests

#[test]
fn JsonCodec___encode_request___produces_wire_shape() {
    let codec = JsonCodec::new();

    let bytes = codec
        .encode_request("Arith.Multiply", 42, &Args { a: 7, b: 8 })
        .unwrap();
    let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(
        value,
        serde_json::json!({"method": "Arith.Multiply", "params": [{"a": 7, "b": 8}], "id": 42})
    );
}

#[test]
fn JsonCodec___encode_request___non_string_map_keys_return_serialization_error() {
    let codec = JsonCodec::new();
    let mut params = BTreeMap::new();
    params.insert(vec![1u8, 2], "value");

    let result = codec.encode_request("Store.Put", 1, &params);

    assert!(matches!(result, Err(CodecError::Serialization(_))));
}

#[test]
fn JsonCodec___decode_response___parses_success_body() {
    let codec = JsonCodec::new();

    let response = codec
        .decode_response(br#"{"id": 3, "result": {"a": 1, "b": 2}, "error": null}"#)
        .unwrap();

    assert_eq!(response.id, 3);
    assert_eq!(response.result_as::<Args>().unwrap(), Args { a: 1, b: 2 });
    assert!(response.error.is_none());
}

#[test]
fn JsonCodec___decode_response___malformed_json_returns_decode_error() {
    let codec = JsonCodec::new();

    let result = codec.decode_response(b"{\"id\": 1, \"result\": ");

    assert!(matches!(result, Err(CodecError::Decode(_))));
}

#[test]
fn JsonCodec___decode_response___wrong_id_type_returns_decode_error() {
    let codec = JsonCodec::new();

    let result = codec.decode_response(br#"{"id": "one", "result": 1}"#);

    assert!(matches!(result, Err(CodecError::Decode(_))));
}

#[test]
fn JsonCodec___new___output_is_compact() {
    let codec = JsonCodec::new();

    let encoded = codec.encode(&Args { a: 1, b: 2 }).unwrap();

    assert!(!encoded.contains(&b'\n'));
}

#[test]
fn JsonCodec___content_type___returns_application_json() {
    let codec = JsonCodec::new();

    assert_eq!(codec.content_type(), "application/json");
}
