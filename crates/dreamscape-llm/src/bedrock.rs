//! AWS Bedrock Converse client.
//!
//! The Converse API wants an inference profile ID as `model_id`
//! (e.g. `us.anthropic.claude-sonnet-4-20250514-v1:0`); bare foundation model
//! IDs fail with "on-demand throughput isn't supported".

use async_trait::async_trait;
use aws_sdk_bedrockruntime::types::{ContentBlock, ConversationRole, Message};

use crate::CompletionModel;
use crate::error::LlmError;

pub const DEFAULT_MODEL: &str = "us.anthropic.claude-sonnet-4-20250514-v1:0";

pub struct BedrockClient {
    client: aws_sdk_bedrockruntime::Client,
    model_id: String,
}

impl BedrockClient {
    pub fn new(config: &aws_config::SdkConfig, model_id: impl Into<String>) -> Self {
        Self {
            client: aws_sdk_bedrockruntime::Client::new(config),
            model_id: model_id.into(),
        }
    }

    /// Build a client from the default AWS credential/region provider chain.
    pub async fn from_env(model_id: impl Into<String>) -> Self {
        let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
        Self::new(&config, model_id)
    }
}

#[async_trait]
impl CompletionModel for BedrockClient {
    async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
        let message = Message::builder()
            .role(ConversationRole::User)
            .content(ContentBlock::Text(prompt.to_string()))
            .build()
            .map_err(|e| LlmError::Invocation(e.to_string()))?;

        let response = self
            .client
            .converse()
            .model_id(&self.model_id)
            .messages(message)
            .send()
            .await
            .map_err(|e| LlmError::Invocation(e.into_service_error().to_string()))?;

        let output_message = response
            .output()
            .and_then(|o| o.as_message().ok())
            .ok_or_else(|| LlmError::ResponseParse("no message in response".to_string()))?;

        let text = output_message
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

        Ok(text)
    }

    fn model_id(&self) -> &str {
        &self.model_id
    }
}
