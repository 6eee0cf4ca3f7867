use tutora_bedrock::prompt::build_prompt;
use tutora_core::models::language::Language;
use tutora_core::models::request::LessonRequest;
use tutora_core::models::subject::{ProgrammingLanguage, Subject};

fn request(subject: Subject) -> LessonRequest {
    LessonRequest {
        subject,
        topic: "Photosynthesis".to_string(),
        age_group: "8-10".to_string(),
        additional_info: "No additional information provided.".to_string(),
        language: Language::English,
        generate_video: false,
        programming_language: None,
        needs_visual_arts: false,
        generate_song: false,
    }
}

#[test]
fn identical_requests_yield_identical_prompts() {
    let r = request(Subject::Science);
    assert_eq!(build_prompt(&r), build_prompt(&r));
}

#[test]
fn prompt_embeds_request_fields_verbatim() {
    let mut r = request(Subject::Science);
    r.additional_info = "Most students are beginners.".to_string();

    let prompt = build_prompt(&r);
    assert!(prompt.contains("Science"));
    assert!(prompt.contains("\"Photosynthesis\""));
    assert!(prompt.contains("8-10"));
    assert!(prompt.contains("Most students are beginners."));
}

#[test]
fn required_keys_appear_in_canonical_order() {
    let prompt = build_prompt(&request(Subject::Science));

    let keys = [
        "\"title\"",
        "\"introduction\"",
        "\"keyPoints\"",
        "\"activities\"",
        "\"resources\"",
        "\"videoScript\"",
        "\"detailedContent\"",
    ];
    let positions: Vec<usize> = keys
        .iter()
        .map(|key| prompt.find(key).unwrap_or_else(|| panic!("missing {key}")))
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn closing_instruction_restates_the_language() {
    let mut r = request(Subject::Science);
    r.language = Language::Tamil;

    let prompt = build_prompt(&r);
    assert!(prompt.ends_with("The content should be in Tamil language."));
}

#[test]
fn science_gets_scientific_data_fragment() {
    let prompt = build_prompt(&request(Subject::Science));
    assert!(prompt.contains("\"scientificData\""));
    assert!(!prompt.contains("\"chartData\""));
    assert!(!prompt.contains("\"codeSnippet\""));
}

#[test]
fn visual_arts_gets_chart_and_gallery_fragments() {
    let prompt = build_prompt(&request(Subject::VisualArts));
    assert!(prompt.contains("\"chartData\""));
    assert!(prompt.contains("\"visualArtsImages\""));
}

#[test]
fn financial_literacy_gets_financial_fragment() {
    let prompt = build_prompt(&request(Subject::FinancialLiteracy));
    assert!(prompt.contains("\"financialData\""));
    assert!(prompt.contains("\"estimatedCosts\""));
}

#[test]
fn coding_defaults_to_javascript() {
    let prompt = build_prompt(&request(Subject::Coding));
    assert!(prompt.contains("\"codeSnippet\""));
    assert!(prompt.contains("JavaScript code sample"));
}

#[test]
fn coding_uses_the_requested_language() {
    let mut r = request(Subject::Coding);
    r.programming_language = Some(ProgrammingLanguage::Python);

    let prompt = build_prompt(&r);
    assert!(prompt.contains("Python code sample"));
    assert!(!prompt.contains("JavaScript code sample"));
}

#[test]
fn coding_with_visual_arts_augmentation_gets_both_fragments() {
    let mut r = request(Subject::Coding);
    r.needs_visual_arts = true;

    let prompt = build_prompt(&r);
    let code = prompt.find("\"codeSnippet\"").expect("coding fragment");
    let chart = prompt.find("\"chartData\"").expect("chart fragment");
    assert!(prompt.contains("\"visualArtsImages\""));
    // Augmentation is additive, appended after the subject's own fragment.
    assert!(code < chart);
}

#[test]
fn visual_arts_flag_outside_coding_does_not_duplicate_fragment() {
    let mut r = request(Subject::VisualArts);
    r.needs_visual_arts = true;

    let prompt = build_prompt(&r);
    assert_eq!(prompt.matches("\"chartData\"").count(), 1);
}

#[test]
fn performing_arts_song_fragments_follow_the_flag() {
    let without_song = build_prompt(&request(Subject::PerformingArts));
    assert!(without_song.contains("\"musicNotes\""));
    assert!(!without_song.contains("\"songLyrics\""));

    let mut r = request(Subject::PerformingArts);
    r.generate_song = true;
    let with_song = build_prompt(&r);
    assert!(with_song.contains("\"musicNotes\""));
    assert!(with_song.contains("\"songLyrics\""));
    assert!(with_song.contains("\"songChords\""));
}
