//! Structured-response parsing.
//!
//! The model is instructed to reply with a single JSON object, usually
//! wrapped in prose. Parsing locates that object, decodes it, and projects
//! it onto [`LessonDocument`]: required fields default to empty values when
//! missing or wrongly shaped, and subject-specific extras pass a permissive
//! gate. Only a completely undecodable reply is an error.

use serde::de::DeserializeOwned;
use serde_json::Value;

use tutora_core::models::lesson::LessonDocument;
use tutora_core::models::request::LessonRequest;
use tutora_core::models::subject::Subject;

use crate::error::BedrockError;

/// Locate the JSON object embedded in a model reply.
///
/// Takes the span from the first `{` to the last `}` — a greedy outer
/// match that assumes the reply wraps exactly one object in optional
/// commentary. Commentary containing stray braces can defeat it; this is
/// the single substitution point for a stricter extraction strategy.
pub fn extract_json(raw: &str) -> Result<&str, BedrockError> {
    let start = raw
        .find('{')
        .ok_or_else(|| BedrockError::ResponseParse("no JSON object in model reply".to_string()))?;
    let end = raw
        .rfind('}')
        .filter(|&end| end > start)
        .ok_or_else(|| BedrockError::ResponseParse("no JSON object in model reply".to_string()))?;
    Ok(&raw[start..=end])
}

/// Parse a raw model reply into a [`LessonDocument`] for the given request.
pub fn parse_lesson(raw: &str, request: &LessonRequest) -> Result<LessonDocument, BedrockError> {
    let payload: Value = serde_json::from_str(extract_json(raw)?)?;

    let visual_arts = request.subject == Subject::VisualArts || request.needs_visual_arts;
    let performing_arts = request.subject == Subject::PerformingArts;

    Ok(LessonDocument {
        title: string_field(&payload, "title"),
        introduction: string_field(&payload, "introduction"),
        key_points: string_list(&payload, "keyPoints"),
        activities: string_list(&payload, "activities"),
        resources: string_list(&payload, "resources"),
        video_script: string_field(&payload, "videoScript"),
        detailed_content: string_field(&payload, "detailedContent"),
        code_snippet: gated(&payload, "codeSnippet", request.subject == Subject::Coding),
        chart_data: gated(&payload, "chartData", visual_arts),
        visual_arts_images: gated(&payload, "visualArtsImages", visual_arts),
        music_notes: gated(&payload, "musicNotes", performing_arts),
        song_lyrics: gated(
            &payload,
            "songLyrics",
            performing_arts && request.generate_song,
        ),
        song_chords: gated(
            &payload,
            "songChords",
            performing_arts && request.generate_song,
        ),
        financial_data: gated(
            &payload,
            "financialData",
            request.subject == Subject::FinancialLiteracy,
        ),
        scientific_data: gated(&payload, "scientificData", request.subject == Subject::Science),
        // Attached by the generation flow after parsing, never read from
        // the model reply.
        video_url: None,
    })
}

/// The permissive field gate: a subject-specific field is retained when the
/// request subject owns it, or when the payload carries it anyway.
fn retain_gated(subject_matches: bool, present: bool) -> bool {
    subject_matches || present
}

/// Extract a gated field. A wrongly shaped value decodes to absent, not to
/// an error.
fn gated<T: DeserializeOwned>(payload: &Value, key: &str, subject_matches: bool) -> Option<T> {
    let field = payload.get(key);
    if !retain_gated(subject_matches, field.is_some()) {
        return None;
    }
    field.and_then(|value| serde_json::from_value(value.clone()).ok())
}

fn string_field(payload: &Value, key: &str) -> String {
    payload
        .get(key)
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_default()
}

fn string_list(payload: &Value, key: &str) -> Vec<String> {
    payload
        .get(key)
        .and_then(Value::as_array)
        .map(|items| {
            items
                .iter()
                .filter_map(Value::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}
