//! Core model invocation via the Bedrock Converse API.
//!
//! Both lesson generation and follow-up Q&A ride this primitive; they
//! differ only in their output-token budget. Exactly one call is made per
//! invocation — retry policy belongs to the caller, timeout policy to the
//! SDK configuration.

use aws_sdk_bedrockruntime::Client;
use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message, SystemContentBlock,
};

use tutora_core::models::token_count::TokenCount;

use crate::error::BedrockError;
use crate::tokens;

/// Generation settings matching the original service configuration.
const TEMPERATURE: f32 = 0.7;
const TOP_P: f32 = 0.95;

/// Send a single user message to the model and return the reply text with
/// its token usage.
pub async fn invoke_model(
    client: &Client,
    model_id: &str,
    system_prompt: &str,
    user_message: &str,
    max_tokens: i32,
) -> Result<(String, TokenCount), BedrockError> {
    let inference_config = InferenceConfiguration::builder()
        .max_tokens(max_tokens)
        .temperature(TEMPERATURE)
        .top_p(TOP_P)
        .build();

    let response = client
        .converse()
        .model_id(model_id)
        .system(SystemContentBlock::Text(system_prompt.to_string()))
        .inference_config(inference_config)
        .messages(
            Message::builder()
                .role(ConversationRole::User)
                .content(ContentBlock::Text(user_message.to_string()))
                .build()
                .map_err(|e| BedrockError::Invocation(e.to_string()))?,
        )
        .send()
        .await
        .map_err(|e| BedrockError::Invocation(e.into_service_error().to_string()))?;

    let output_message = response
        .output()
        .and_then(|o| o.as_message().ok())
        .ok_or_else(|| BedrockError::ResponseParse("no message in response".to_string()))?;

    let response_text = output_message
        .content()
        .iter()
        .filter_map(|block| {
            if let ContentBlock::Text(text) = block {
                Some(text.as_str())
            } else {
                None
            }
        })
        .collect::<Vec<_>>()
        .join("");

    let usage = response
        .usage()
        .map(tokens::extract_token_usage)
        .unwrap_or(TokenCount {
            input: 0,
            output: 0,
        });

    Ok((response_text, usage))
}
