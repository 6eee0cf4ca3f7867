//! Video link resolution.
//!
//! No video is generated; the lesson links to a YouTube search for
//! related material in the lesson's language. Pure string construction,
//! so attaching a link can never fail a generation.

use tutora_core::models::language::Language;

const YOUTUBE_SEARCH_URL: &str = "https://www.youtube.com/results?search_query=";

/// Build a YouTube search URL for lesson videos on a topic.
pub fn youtube_search_url(topic: &str, language: Language) -> String {
    let query = format!("{topic} lesson {language}");
    format!("{YOUTUBE_SEARCH_URL}{}", urlencoding::encode(&query))
}
