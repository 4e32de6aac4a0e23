use aino_core::GenerationOutput;

#[test]
fn sparse_backend_response_deserializes_with_defaults() {
    let output: GenerationOutput = serde_json::from_str(r#"{"task_id": "abc-123"}"#).unwrap();
    assert_eq!(output.task_id().as_deref(), Some("abc-123"));
    assert!(output.all_headings().is_empty());
    assert!(!output.has_graphics());
}

#[test]
fn camel_case_aliases_are_accepted() {
    let body = r#"{
        "taskId": "t-9",
        "heading": "Pääotsikko",
        "headings": ["Pääotsikko", "Vaihtoehto"],
        "graphicUrl": "social_square.png",
        "graphicUrls": ["social_square.png", "social_story.png"],
        "fileFormat": "png",
        "dimensions": "1080x1080"
    }"#;
    let output: GenerationOutput = serde_json::from_str(body).unwrap();

    // Singular and plural forms merge without duplicating the primary.
    assert_eq!(output.all_headings(), vec!["Pääotsikko", "Vaihtoehto"]);
    assert_eq!(
        output.all_graphics(),
        vec!["social_square.png", "social_story.png"],
    );
    assert_eq!(output.file_format().as_deref(), Some("png"));
}

#[test]
fn unknown_fields_are_ignored() {
    let body = r#"{"message": "ok", "queue_position": 3}"#;
    let output: GenerationOutput = serde_json::from_str(body).unwrap();
    assert_eq!(output.message().as_deref(), Some("ok"));
}
