use super::*;
use serde_json::json;

// =============================================================
// PropertyId
// =============================================================

#[test]
fn property_id_accepts_numbers_and_strings() {
    let numeric: PropertyId = serde_json::from_value(json!(5)).unwrap();
    let text: PropertyId = serde_json::from_value(json!("a1b2")).unwrap();
    assert_eq!(numeric, PropertyId::Number(5));
    assert_eq!(text, PropertyId::Text("a1b2".to_owned()));
}

#[test]
fn property_id_displays_as_plain_text() {
    assert_eq!(PropertyId::Number(42).to_string(), "42");
    assert_eq!(PropertyId::Text("uuid-1".to_owned()).to_string(), "uuid-1");
}

// =============================================================
// Property
// =============================================================

#[test]
fn property_missing_optional_fields_deserializes() {
    let property: Property = serde_json::from_value(json!({ "id": "p-1" })).unwrap();
    assert_eq!(property.id, PropertyId::Text("p-1".to_owned()));
    assert_eq!(property.address, None);
    assert_eq!(property.created_at, None);
}

// =============================================================
// Chat wire types
// =============================================================

#[test]
fn chat_request_without_session_sends_null() {
    let body = serde_json::to_value(ChatRequest { message: "hi", session_id: None }).unwrap();
    assert_eq!(body, json!({ "message": "hi", "session_id": null }));
}

#[test]
fn chat_request_with_session_sends_it_verbatim() {
    let body = serde_json::to_value(ChatRequest { message: "more", session_id: Some("sess-123") }).unwrap();
    assert_eq!(body, json!({ "message": "more", "session_id": "sess-123" }));
}

#[test]
fn chat_response_with_recommendations() {
    let response: ChatResponse = serde_json::from_value(json!({
        "message": "Try this one",
        "session_id": "s1",
        "properties": [{ "id": 1, "address": "12 Oak St", "description": "2BR" }]
    }))
    .unwrap();
    assert_eq!(response.session_id, "s1");
    assert_eq!(response.properties.len(), 1);
    assert_eq!(response.properties[0].address, "12 Oak St");
    assert_eq!(response.properties[0].description, "2BR");
    assert_eq!(response.properties[0].price, None);
}

#[test]
fn chat_response_null_or_missing_properties_is_empty() {
    let null_props: ChatResponse =
        serde_json::from_value(json!({ "message": "m", "session_id": "s", "properties": null })).unwrap();
    let missing: ChatResponse = serde_json::from_value(json!({ "message": "m", "session_id": "s" })).unwrap();
    assert!(null_props.properties.is_empty());
    assert!(missing.properties.is_empty());
}

#[test]
fn recommendation_ignores_extra_backend_fields() {
    let rec: PropertyRecommendation = serde_json::from_value(json!({
        "id": "p-9",
        "address": "1 Elm",
        "description": "Loft",
        "specifications": "No pets",
        "created_at": "2024-05-01T10:00:00"
    }))
    .unwrap();
    assert_eq!(rec.specifications.as_deref(), Some("No pets"));
}

// =============================================================
// parse_property_collection
// =============================================================

#[test]
fn parse_collection_accepts_wrapped_shape() {
    let parsed = parse_property_collection(json!({
        "properties": [{
            "id": 5,
            "address": "A",
            "description": "B",
            "specifications": "C",
            "created_at": "2024-01-01"
        }]
    }))
    .unwrap();
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].id, PropertyId::Number(5));
    assert_eq!(parsed[0].specifications.as_deref(), Some("C"));
}

#[test]
fn parse_collection_accepts_bare_array() {
    let parsed = parse_property_collection(json!([{ "id": "x" }, { "id": "y" }])).unwrap();
    assert_eq!(parsed.len(), 2);
}

#[test]
fn parse_collection_skips_records_without_id() {
    let parsed = parse_property_collection(json!([{ "address": "no id" }, { "id": 3 }, 7])).unwrap();
    assert_eq!(parsed.len(), 1);
    assert_eq!(parsed[0].id, PropertyId::Number(3));
}

#[test]
fn parse_collection_rejects_plain_number() {
    assert_eq!(
        parse_property_collection(json!(42)),
        Err(ShapeError::UnexpectedShape { found: "number".to_owned() })
    );
}

#[test]
fn parse_collection_rejects_object_without_properties() {
    assert!(parse_property_collection(json!({ "items": [] })).is_err());
    assert!(parse_property_collection(json!({ "properties": "nope" })).is_err());
}
