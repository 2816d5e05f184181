use cosmic_core::{GenerateContentRequest, GenerateContentResponse, GenerationConfig, ResponseShape, SafetySetting};
use serde_json::json;

fn shape(value: serde_json::Value) -> ResponseShape {
    let raw: GenerateContentResponse = serde_json::from_value(value).unwrap();
    ResponseShape::from(raw)
}

#[test]
fn test_content_layout_is_recognized() {
    let shape = shape(json!({
        "candidates": [{
            "content": { "parts": [{ "text": "STORY: hi" }], "role": "model" },
            "finishReason": "STOP"
        }]
    }));
    assert_eq!(shape, ResponseShape::Content("STORY: hi".to_string()));
    assert_eq!(shape.text(), Some("STORY: hi"));
}

#[test]
fn test_legacy_layout_is_recognized() {
    let shape = shape(json!({ "candidates": [{ "text": "old style" }] }));
    assert_eq!(shape, ResponseShape::Legacy("old style".to_string()));
}

#[test]
fn test_content_layout_wins_over_legacy_text() {
    let shape = shape(json!({
        "candidates": [{ "content": { "parts": [{ "text": "new" }] }, "text": "old" }]
    }));
    assert_eq!(shape, ResponseShape::Content("new".to_string()));
}

#[test]
fn test_part_without_text_decodes_as_empty_content() {
    let shape = shape(json!({ "candidates": [{ "content": { "parts": [{}] } }] }));
    assert_eq!(shape, ResponseShape::Content(String::new()));
}

#[test]
fn test_content_without_parts_is_unrecognized() {
    let shape = shape(json!({
        "candidates": [{ "content": {}, "finishReason": "SAFETY" }]
    }));
    assert_eq!(
        shape,
        ResponseShape::Unrecognized {
            finish_reason: Some("SAFETY".to_string())
        }
    );
    assert_eq!(shape.text(), None);
}

#[test]
fn test_missing_candidates_is_unrecognized() {
    assert_eq!(
        shape(json!({ "promptFeedback": { "blockReason": "SAFETY" } })),
        ResponseShape::Unrecognized { finish_reason: None }
    );
    assert_eq!(
        shape(json!({ "candidates": [] })),
        ResponseShape::Unrecognized { finish_reason: None }
    );
}

#[test]
fn test_request_serializes_to_api_layout() {
    let request = GenerateContentRequest::for_prompt(
        "Write a story",
        GenerationConfig::default(),
        SafetySetting::defaults(),
    );
    let value = serde_json::to_value(&request).unwrap();

    assert_eq!(value["contents"][0]["parts"][0]["text"], "Write a story");
    assert_eq!(value["generationConfig"]["temperature"].as_f64().map(|t| (t * 10.0).round()), Some(7.0));
    assert_eq!(value["generationConfig"]["topK"], 40);
    assert_eq!(value["safetySettings"].as_array().map(Vec::len), Some(4));
    assert_eq!(value["safetySettings"][3]["category"], "HARM_CATEGORY_DANGEROUS_CONTENT");
}

#[test]
fn test_builder_applies_defaults() {
    let request = GenerateContentRequest::builder()
        .contents(vec![cosmic_core::Content {
            parts: vec![cosmic_core::Part { text: "hi".to_string() }],
        }])
        .build()
        .unwrap();

    assert_eq!(request.prompt(), Some("hi"));
    assert_eq!(request.generation_config, GenerationConfig::default());
    assert_eq!(request.safety_settings.len(), 4);
}
