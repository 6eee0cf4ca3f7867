use tutora_bedrock::error::BedrockError;
use tutora_bedrock::parse::{extract_json, parse_lesson};
use tutora_core::models::language::Language;
use tutora_core::models::lesson::ScientificKind;
use tutora_core::models::request::LessonRequest;
use tutora_core::models::subject::Subject;

fn request(subject: Subject) -> LessonRequest {
    LessonRequest {
        subject,
        topic: "Photosynthesis".to_string(),
        age_group: "8-10".to_string(),
        additional_info: String::new(),
        language: Language::English,
        generate_video: false,
        programming_language: None,
        needs_visual_arts: false,
        generate_song: false,
    }
}

#[test]
fn reply_without_json_is_an_error() {
    let result = parse_lesson("not json at all", &request(Subject::Science));
    assert!(matches!(result, Err(BedrockError::ResponseParse(_))));
}

#[test]
fn located_span_that_fails_to_decode_is_an_error() {
    let result = parse_lesson("here you go: {not valid json}", &request(Subject::Science));
    assert!(matches!(result, Err(BedrockError::Serialization(_))));
}

#[test]
fn extract_json_spans_first_open_to_last_close() {
    let raw = "Sure! {\"title\": \"T\", \"nested\": {\"a\": 1}} Hope that helps.";
    assert_eq!(
        extract_json(raw).unwrap(),
        "{\"title\": \"T\", \"nested\": {\"a\": 1}}"
    );
}

#[test]
fn prose_wrapped_object_parses_with_defaults() {
    let document = parse_lesson("prefix {\"title\":\"T\"} suffix", &request(Subject::Science))
        .expect("should parse");

    assert_eq!(document.title, "T");
    assert_eq!(document.introduction, "");
    assert!(document.key_points.is_empty());
    assert!(document.activities.is_empty());
    assert!(document.resources.is_empty());
    assert_eq!(document.video_script, "");
    assert_eq!(document.detailed_content, "");
    assert!(document.scientific_data.is_none());
}

#[test]
fn wrongly_shaped_required_field_defaults_instead_of_failing() {
    let raw = r#"{"title": "T", "keyPoints": "should have been an array"}"#;
    let document = parse_lesson(raw, &request(Subject::Science)).expect("should parse");
    assert!(document.key_points.is_empty());
}

#[test]
fn wrongly_shaped_gated_field_becomes_absent() {
    let raw = r#"{"title": "T", "chartData": "not an object"}"#;
    let document = parse_lesson(raw, &request(Subject::VisualArts)).expect("should parse");
    assert!(document.chart_data.is_none());
}

#[test]
fn gate_is_permissive_for_volunteered_fields() {
    // Science lesson, but the model volunteered chart data anyway.
    let raw = r#"{
        "title": "T",
        "chartData": {
            "type": "bar",
            "data": {"labels": ["a"], "datasets": [{"label": "d", "data": [1.0]}]}
        }
    }"#;
    let document = parse_lesson(raw, &request(Subject::Science)).expect("should parse");
    assert!(document.chart_data.is_some());
}

#[test]
fn owned_field_missing_from_payload_stays_absent() {
    let document =
        parse_lesson(r#"{"title": "T"}"#, &request(Subject::Coding)).expect("should parse");
    assert!(document.code_snippet.is_none());
}

#[test]
fn song_fields_require_the_song_flag_or_presence() {
    let raw = r#"{"title": "T", "musicNotes": "C D E", "songLyrics": "la la"}"#;

    // Song not requested, but the payload carries lyrics: kept.
    let document = parse_lesson(raw, &request(Subject::PerformingArts)).expect("should parse");
    assert_eq!(document.music_notes.as_deref(), Some("C D E"));
    assert_eq!(document.song_lyrics.as_deref(), Some("la la"));
    assert!(document.song_chords.is_none());
}

#[test]
fn video_url_is_never_read_from_the_payload() {
    let raw = r#"{"title": "T", "videoUrl": "https://example.com"}"#;
    let document = parse_lesson(raw, &request(Subject::Science)).expect("should parse");
    assert!(document.video_url.is_none());
}

#[test]
fn science_reply_end_to_end() {
    let raw = concat!(
        "{\"title\":\"Photosynthesis 101\",\"introduction\":\"...\",",
        "\"keyPoints\":[\"a\"],\"activities\":[\"b\"],\"resources\":[\"c\"],",
        "\"videoScript\":\"\",\"detailedContent\":\"\",",
        "\"scientificData\":{\"type\":\"formula\",",
        "\"content\":\"6CO2+6H2O->C6H12O6+6O2\",\"explanation\":\"...\"}}",
    );

    let document = parse_lesson(raw, &request(Subject::Science)).expect("should parse");
    assert_eq!(document.title, "Photosynthesis 101");
    assert_eq!(document.key_points, vec!["a".to_string()]);

    let scientific = document.scientific_data.expect("scientific data");
    assert_eq!(scientific.kind, ScientificKind::Formula);
    assert_eq!(scientific.content, "6CO2+6H2O->C6H12O6+6O2");
}
