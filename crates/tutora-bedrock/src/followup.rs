//! Follow-up Q&A about a generated lesson.
//!
//! Builds a bounded context block from the lesson — a truncated
//! introduction and the key points, not the whole document — so a chat
//! turn stays cheap. The answer comes back as prose; nothing is parsed.

use aws_sdk_bedrockruntime::Client;
use tracing::info;

use tutora_core::models::lesson::LessonDocument;
use tutora_core::models::subject::Subject;

use crate::error::BedrockError;
use crate::invoke;

const FOLLOW_UP_SYSTEM_PROMPT: &str = "\
You are a teaching assistant answering follow-up questions about a \
generated lesson. Answer in plain prose, staying on the lesson's subject \
and audience level. Keep answers short.";

/// Output budget for one follow-up answer; a fraction of the full
/// generation budget.
const MAX_FOLLOW_UP_TOKENS: i32 = 1024;

/// How much of the introduction is carried into the context block.
const INTRO_PREVIEW_CHARS: usize = 200;

/// Assemble the user message for a follow-up question.
pub fn build_follow_up_prompt(
    query: &str,
    subject: Subject,
    topic: &str,
    document: &LessonDocument,
) -> String {
    let intro_preview: String = document
        .introduction
        .chars()
        .take(INTRO_PREVIEW_CHARS)
        .collect();

    let mut block = String::from("<lesson_context>\n");
    block.push_str(&format!("<subject>{subject}</subject>\n"));
    block.push_str(&format!("<topic>{topic}</topic>\n"));
    block.push_str(&format!("<introduction>{intro_preview}</introduction>\n"));
    block.push_str(&format!(
        "<key_points>{}</key_points>\n",
        document.key_points.join("; ")
    ));
    block.push_str("</lesson_context>\n\n");
    block.push_str(query);
    block
}

/// Answer a follow-up question about a lesson.
pub async fn ask_follow_up(
    config: &aws_config::SdkConfig,
    model_id: &str,
    query: &str,
    subject: Subject,
    topic: &str,
    document: &LessonDocument,
) -> Result<String, BedrockError> {
    let client = Client::new(config);

    info!(model = model_id, subject = %subject, "answering follow-up question");

    let prompt = build_follow_up_prompt(query, subject, topic, document);
    let (answer, usage) = invoke::invoke_model(
        &client,
        model_id,
        FOLLOW_UP_SYSTEM_PROMPT,
        &prompt,
        MAX_FOLLOW_UP_TOKENS,
    )
    .await?;

    info!(output_tokens = usage.output, "follow-up answered");

    Ok(answer)
}
