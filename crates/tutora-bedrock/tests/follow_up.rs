use tutora_bedrock::followup::build_follow_up_prompt;
use tutora_core::models::lesson::LessonDocument;
use tutora_core::models::subject::Subject;

fn document(introduction: &str, key_points: Vec<&str>) -> LessonDocument {
    LessonDocument {
        title: "Photosynthesis 101".to_string(),
        introduction: introduction.to_string(),
        key_points: key_points.into_iter().map(str::to_string).collect(),
        activities: Vec::new(),
        resources: Vec::new(),
        video_script: String::new(),
        detailed_content: "never embedded in follow-up prompts".to_string(),
        code_snippet: None,
        chart_data: None,
        visual_arts_images: None,
        music_notes: None,
        song_lyrics: None,
        song_chords: None,
        financial_data: None,
        scientific_data: None,
        video_url: None,
    }
}

#[test]
fn prompt_carries_context_and_query() {
    let doc = document("Plants turn light into sugar.", vec!["light", "chlorophyll"]);
    let prompt = build_follow_up_prompt(
        "Why are leaves green?",
        Subject::Science,
        "Photosynthesis",
        &doc,
    );

    assert!(prompt.starts_with("<lesson_context>"));
    assert!(prompt.contains("<subject>Science</subject>"));
    assert!(prompt.contains("<topic>Photosynthesis</topic>"));
    assert!(prompt.contains("Plants turn light into sugar."));
    assert!(prompt.contains("light; chlorophyll"));
    assert!(prompt.ends_with("Why are leaves green?"));
}

#[test]
fn long_introductions_are_truncated() {
    let long_intro = "x".repeat(500);
    let doc = document(&long_intro, vec![]);
    let prompt = build_follow_up_prompt("q", Subject::Science, "t", &doc);

    assert!(prompt.contains(&"x".repeat(200)));
    assert!(!prompt.contains(&"x".repeat(201)));
}

#[test]
fn truncation_is_multibyte_safe() {
    // 300 two-byte characters; a byte-indexed cut would panic or split one.
    let intro = "é".repeat(300);
    let doc = document(&intro, vec![]);
    let prompt = build_follow_up_prompt("q", Subject::Science, "t", &doc);

    assert!(prompt.contains(&"é".repeat(200)));
    assert!(!prompt.contains(&"é".repeat(201)));
}

#[test]
fn detailed_content_is_not_embedded() {
    let doc = document("short", vec!["a"]);
    let prompt = build_follow_up_prompt("q", Subject::Science, "t", &doc);
    assert!(!prompt.contains("never embedded in follow-up prompts"));
}
