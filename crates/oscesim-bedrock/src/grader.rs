//! Grading invocation via the Bedrock Converse API.
//!
//! One converse call per evaluation: the grading instructions as the
//! system block, the assembled rubric-plus-transcript as a single user
//! message, low temperature so repeated gradings of the same session stay
//! close. The response text is returned raw; fence stripping and JSON
//! parsing happen in `oscesim-grading`.

use aws_sdk_bedrockruntime::types::{
    ContentBlock, ConversationRole, InferenceConfiguration, Message, SystemContentBlock,
};
use tracing::info;
use uuid::Uuid;

use oscesim_grading::GradingError;
use oscesim_grading::grade::GradingCapability;

use crate::error::BedrockError;

/// Sampling temperature for grading calls. Low, not zero: the rubric
/// wording varies per scenario and a little headroom reads better in
/// justifications.
const GRADING_TEMPERATURE: f32 = 0.3;

/// Output ceiling for one grading response.
const MAX_RESPONSE_TOKENS: i32 = 4096;

/// The production grading capability: a Claude model on Bedrock.
pub struct BedrockGrader {
    client: aws_sdk_bedrockruntime::Client,
    model_id: String,
}

impl BedrockGrader {
    /// The caller chooses the model (e.g. a Claude inference profile).
    pub fn new(config: &aws_config::SdkConfig, model_id: impl Into<String>) -> BedrockGrader {
        BedrockGrader {
            client: aws_sdk_bedrockruntime::Client::new(config),
            model_id: model_id.into(),
        }
    }

    /// Core invocation using the Converse API. Returns the response text.
    async fn invoke_converse(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, BedrockError> {
        let invocation_id = Uuid::new_v4();
        info!(
            invocation_id = %invocation_id,
            model = %self.model_id,
            "starting grading invocation"
        );

        let response = self
            .client
            .converse()
            .model_id(&self.model_id)
            .system(SystemContentBlock::Text(system_prompt.to_string()))
            .messages(
                Message::builder()
                    .role(ConversationRole::User)
                    .content(ContentBlock::Text(user_prompt.to_string()))
                    .build()
                    .map_err(|e| BedrockError::Invocation(e.to_string()))?,
            )
            .inference_config(
                InferenceConfiguration::builder()
                    .temperature(GRADING_TEMPERATURE)
                    .max_tokens(MAX_RESPONSE_TOKENS)
                    .build(),
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

        info!(
            invocation_id = %invocation_id,
            response_len = response_text.len(),
            "grading invocation complete"
        );

        Ok(response_text)
    }
}

impl GradingCapability for BedrockGrader {
    async fn complete(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<String, GradingError> {
        self.invoke_converse(system_prompt, user_prompt)
            .await
            .map_err(|e| GradingError::Capability(e.to_string()))
    }
}
