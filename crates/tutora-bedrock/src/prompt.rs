//! Lesson prompt construction.
//!
//! Builds the natural-language instruction sent to the model: a request
//! description, a JSON shape specification with the required keys in a
//! fixed order, and subject-conditional schema fragments. The same
//! request always produces byte-identical text.

use tutora_core::models::request::LessonRequest;
use tutora_core::models::subject::{ProgrammingLanguage, Subject};

/// The always-required schema keys, in the order the model is shown them.
const REQUIRED_SCHEMA_LINES: [&str; 7] = [
    r#"  "title": "Catchy and descriptive title for the lesson""#,
    r#"  "introduction": "Brief engaging introduction to the topic""#,
    r#"  "keyPoints": ["Key point 1", "Key point 2", "Key point 3"]"#,
    r#"  "activities": ["Activity description 1", "Activity description 2"]"#,
    r#"  "resources": ["Resource 1", "Resource 2"]"#,
    r#"  "videoScript": "A short 2-minute video script that introduces the topic in an engaging way""#,
    r#"  "detailedContent": "An in-depth walkthrough of the topic, several paragraphs long""#,
];

/// Build the full generation prompt for a lesson request.
pub fn build_prompt(request: &LessonRequest) -> String {
    let mut schema_lines: Vec<String> = REQUIRED_SCHEMA_LINES
        .iter()
        .map(|line| (*line).to_string())
        .collect();

    schema_lines.extend(subject_fragment(request));

    // Coding lessons can additionally ask for visual-arts material; the
    // fragment is appended after the coding one, not substituted for it.
    if request.needs_visual_arts && request.subject == Subject::Coding {
        schema_lines.extend(visual_arts_fragment());
    }

    let schema = schema_lines.join(",\n");

    format!(
        r#"Generate comprehensive educational content for a {subject} lesson about "{topic}" for students in the {age_group} age group in {language} language.

Additional context about the students: {additional_info}

Please format your response as JSON with the following structure:
{{
{schema}
}}

Make sure the content is engaging, age-appropriate, and educational. Include practical examples and activities that can be done with minimal resources. The content should be in {language} language."#,
        subject = request.subject,
        topic = request.topic,
        age_group = request.age_group,
        language = request.language,
        additional_info = request.additional_info,
        schema = schema,
    )
}

/// Total mapping from subject to its schema fragment.
fn subject_fragment(request: &LessonRequest) -> Vec<String> {
    match request.subject {
        Subject::VisualArts => visual_arts_fragment(),
        Subject::PerformingArts => performing_arts_fragment(request.generate_song),
        Subject::Coding => coding_fragment(request.programming_language),
        Subject::FinancialLiteracy => financial_literacy_fragment(),
        Subject::Science => science_fragment(),
    }
}

fn visual_arts_fragment() -> Vec<String> {
    vec![
        r##"  "chartData": {"type": "pie | bar | line", "data": {"labels": ["Label 1", "Label 2"], "datasets": [{"label": "Series name", "data": [10, 20], "backgroundColor": ["#4f46e5", "#ef4444"]}]}}"##.to_string(),
        r#"  "visualArtsImages": [{"title": "Example artwork", "type": "painting", "description": "What it shows and why it matters for this lesson"}]"#.to_string(),
    ]
}

fn performing_arts_fragment(generate_song: bool) -> Vec<String> {
    let mut lines = vec![
        r#"  "musicNotes": "Musical notation or rhythm guidance relevant to the lesson""#
            .to_string(),
    ];
    if generate_song {
        lines.push(
            r#"  "songLyrics": "Short original song lyrics that teach the topic""#.to_string(),
        );
        lines.push(
            r#"  "songChords": "Chord progression for the song, e.g. C G Am F""#.to_string(),
        );
    }
    lines
}

fn coding_fragment(language: Option<ProgrammingLanguage>) -> Vec<String> {
    let language = language
        .map(|l| l.name())
        .unwrap_or(ProgrammingLanguage::JavaScript.name());
    vec![format!(
        r#"  "codeSnippet": "A short {language} code sample that demonstrates a concept from the lesson""#
    )]
}

fn financial_literacy_fragment() -> Vec<String> {
    vec![
        r#"  "financialData": {"estimatedCosts": [{"category": "Books", "amount": 50}], "totalEstimate": 50, "timeframe": "3 months", "notes": "Assumptions behind the estimate"}"#.to_string(),
    ]
}

fn science_fragment() -> Vec<String> {
    vec![
        r#"  "scientificData": {"type": "formula | reaction | law", "content": "The formula, reaction, or law itself", "explanation": "What it means in this lesson"}"#.to_string(),
    ]
}
