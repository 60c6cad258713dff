#[cfg(test)]
#[path = "deepseek_test.rs"]
mod tests;

use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::AdapterName;
use crate::domain::models::GatewayError;
use crate::domain::models::Message;
use crate::domain::models::ModelAdapter;
use crate::domain::models::ProviderResponse;
use crate::domain::models::ResponseMessage;

const TEMPERATURE: f64 = 0.7;
const MAX_TOKENS: u32 = 1000;
const DEFAULT_FINISH_REASON: &str = "stop";

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct MessageRequest {
    role: String,
    content: String,
}

#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
struct CompletionRequest {
    model: String,
    messages: Vec<MessageRequest>,
    temperature: f64,
    max_tokens: u32,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CompletionChoiceResponse {
    message: ResponseMessage,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct CompletionResponse {
    id: String,
    model: String,
    choices: Vec<CompletionChoiceResponse>,
}

/// Deepseek hosted on OpenRouter's chat completions API.
pub struct Deepseek {
    url: String,
    token: String,
    model: String,
    referer: String,
    title: String,
}

impl Default for Deepseek {
    fn default() -> Deepseek {
        return Deepseek {
            url: Config::get(ConfigKey::OpenrouterURL)
                .trim_end_matches('/')
                .to_string(),
            token: Config::get(ConfigKey::OpenrouterToken),
            model: Config::get(ConfigKey::OpenrouterModel),
            referer: Config::get(ConfigKey::OpenrouterReferer),
            title: Config::get(ConfigKey::OpenrouterTitle),
        };
    }
}

#[async_trait]
impl ModelAdapter for Deepseek {
    fn name(&self) -> String {
        return AdapterName::Deepseek.to_string();
    }

    #[allow(clippy::implicit_return)]
    async fn respond(&self, messages: &[Message]) -> Result<ProviderResponse, GatewayError> {
        if self.token.is_empty() {
            return Err(GatewayError::Configuration(
                "OpenRouter token is not defined".to_string(),
            ));
        }

        let req = CompletionRequest {
            model: self.model.to_string(),
            messages: messages
                .iter()
                .map(|message| {
                    return MessageRequest {
                        role: message.role.to_string(),
                        content: message.content.to_string(),
                    };
                })
                .collect(),
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
        };

        let res = reqwest::Client::new()
            .post(format!("{url}/api/v1/chat/completions", url = self.url))
            .header("Authorization", format!("Bearer {}", self.token))
            .header("HTTP-Referer", &self.referer)
            .header("X-Title", &self.title)
            .json(&req)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let error_data = res.json::<serde_json::Value>().await?;
            tracing::error!(
                status = status,
                body = %error_data,
                "Failed to make completion request to OpenRouter"
            );
            return Err(GatewayError::Upstream(format!(
                "OpenRouter API error: {error_data}"
            )));
        }

        let data = res.json::<CompletionResponse>().await?;
        tracing::debug!(body = ?data, "Completion response");

        let choice = match data.choices.into_iter().next() {
            Some(choice) => choice,
            None => {
                return Err(GatewayError::Upstream(
                    "OpenRouter returned no choices".to_string(),
                ));
            }
        };

        return Ok(ProviderResponse {
            id: data.id,
            model: data.model,
            message: choice.message,
            finish_reason: choice
                .finish_reason
                .unwrap_or_else(|| return DEFAULT_FINISH_REASON.to_string()),
        });
    }
}
