use tutora_core::models::token_count::TokenCount;

/// Extract token counts from a Bedrock Converse response.
pub fn extract_token_usage(usage: &aws_sdk_bedrockruntime::types::TokenUsage) -> TokenCount {
    TokenCount {
        input: usage.input_tokens as u64,
        output: usage.output_tokens as u64,
    }
}
