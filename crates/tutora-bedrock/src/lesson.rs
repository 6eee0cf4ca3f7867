//! Lesson generation flow: prompt → single model call → parsed document.

use aws_sdk_bedrockruntime::Client;
use tracing::info;
use uuid::Uuid;

use tutora_core::models::lesson::LessonDocument;
use tutora_core::models::request::LessonRequest;
use tutora_core::models::token_count::TokenCount;

use crate::error::BedrockError;
use crate::{invoke, parse, prompt, video};

const LESSON_SYSTEM_PROMPT: &str = "\
You are an educational content designer creating lesson material for \
teachers. Respond with a single JSON object matching the requested \
structure. Do not add markdown fences or commentary around the JSON.";

/// Output budget for a full lesson generation.
const MAX_LESSON_TOKENS: i32 = 8192;

/// The result of one lesson generation, before the caller displays or
/// exports it.
pub struct LessonResult {
    pub id: Uuid,
    pub model_id: String,
    pub usage: TokenCount,
    pub document: LessonDocument,
}

/// Generate a lesson document for a request.
///
/// Performs exactly one model call; a failed call or an undecodable reply
/// propagates to the caller unretried. When the request asked for a video
/// and the reply carries a video script, a search link is attached to the
/// document — link construction cannot fail, and a lesson without a link
/// is still a complete lesson.
pub async fn generate_lesson(
    config: &aws_config::SdkConfig,
    model_id: &str,
    request: &LessonRequest,
) -> Result<LessonResult, BedrockError> {
    let client = Client::new(config);
    let id = Uuid::new_v4();

    info!(
        lesson_id = %id,
        model = model_id,
        subject = %request.subject,
        topic = %request.topic,
        "starting lesson generation"
    );

    let instruction = prompt::build_prompt(request);
    let (reply, usage) = invoke::invoke_model(
        &client,
        model_id,
        LESSON_SYSTEM_PROMPT,
        &instruction,
        MAX_LESSON_TOKENS,
    )
    .await?;

    let mut document = parse::parse_lesson(&reply, request)?;

    if request.generate_video && !document.video_script.is_empty() {
        document.video_url = Some(video::youtube_search_url(&request.topic, request.language));
    }

    info!(
        lesson_id = %id,
        input_tokens = usage.input,
        output_tokens = usage.output,
        "lesson generation complete"
    );

    Ok(LessonResult {
        id,
        model_id: model_id.to_string(),
        usage,
        document,
    })
}
