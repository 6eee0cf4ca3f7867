use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::language::Language;
use super::subject::{ProgrammingLanguage, Subject};

/// A user's request for a generated lesson.
///
/// Constructed by the caller (the web UI) and immutable from then on.
/// `programming_language` is only meaningful when `subject` is Coding;
/// `generate_song` only when `subject` is Performing Arts.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct LessonRequest {
    pub subject: Subject,
    pub topic: String,
    pub age_group: String,
    #[serde(default)]
    pub additional_info: String,
    pub language: Language,
    #[serde(default)]
    pub generate_video: bool,
    #[serde(default)]
    pub programming_language: Option<ProgrammingLanguage>,
    #[serde(default)]
    pub needs_visual_arts: bool,
    #[serde(default)]
    pub generate_song: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_minimal_ui_payload() {
        let request: LessonRequest = serde_json::from_str(
            r#"{
                "subject": "Science",
                "topic": "Photosynthesis",
                "ageGroup": "8-10",
                "language": "English"
            }"#,
        )
        .unwrap();

        assert_eq!(request.subject, Subject::Science);
        assert_eq!(request.age_group, "8-10");
        assert!(!request.generate_video);
        assert!(request.programming_language.is_none());
        assert!(!request.needs_visual_arts);
        assert!(!request.generate_song);
    }
}
