#[cfg(test)]
#[path = "gemini_test.rs"]
mod tests;

use async_trait::async_trait;
use serde::Deserialize;
use serde::Serialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::create_id;
use crate::domain::models::AdapterName;
use crate::domain::models::GatewayError;
use crate::domain::models::Message;
use crate::domain::models::ModelAdapter;
use crate::domain::models::ProviderResponse;
use crate::domain::models::ResponseMessage;
use crate::domain::models::Role;

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct Content {
    #[serde(default)]
    role: String,
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Candidate {
    #[serde(default)]
    content: Content,
    #[serde(default)]
    finish_reason: Option<String>,
}

#[derive(Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct GenerateContentResponse {
    #[serde(default)]
    candidates: Vec<Candidate>,
    #[serde(default)]
    model_version: Option<String>,
    #[serde(default)]
    response_id: Option<String>,
}

fn to_contents(messages: &[Message]) -> Vec<Content> {
    return messages
        .iter()
        .map(|message| {
            let role = match message.role {
                Role::User => "user",
                Role::Assistant => "model",
            };

            return Content {
                role: role.to_string(),
                parts: vec![Part {
                    text: message.content.to_string(),
                }],
            };
        })
        .collect();
}

pub struct Gemini {
    url: String,
    token: String,
    model: String,
}

impl Default for Gemini {
    fn default() -> Gemini {
        return Gemini::new(
            &Config::get(ConfigKey::GeminiURL),
            &Config::get(ConfigKey::GeminiToken),
            &Config::get(ConfigKey::GeminiModel),
        );
    }
}

impl Gemini {
    pub fn new(url: &str, token: &str, model: &str) -> Gemini {
        return Gemini {
            url: url.trim_end_matches('/').to_string(),
            token: token.to_string(),
            model: model.to_string(),
        };
    }
}

#[async_trait]
impl ModelAdapter for Gemini {
    fn name(&self) -> String {
        return AdapterName::Gemini.to_string();
    }

    #[allow(clippy::implicit_return)]
    async fn respond(&self, messages: &[Message]) -> Result<ProviderResponse, GatewayError> {
        if self.token.is_empty() {
            return Err(GatewayError::Configuration(
                "Gemini token is not defined".to_string(),
            ));
        }

        let req = GenerateContentRequest {
            contents: to_contents(messages),
        };

        let res = reqwest::Client::new()
            .post(format!(
                "{url}/v1beta/models/{model}:generateContent",
                url = self.url,
                model = self.model,
            ))
            .header("x-goog-api-key", &self.token)
            .json(&req)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.text().await.unwrap_or_default();
            tracing::error!(
                status = status,
                body = body.as_str(),
                "Failed to make completion request to Gemini"
            );
            return Err(GatewayError::Upstream(format!(
                "Gemini API error: {status} {body}"
            )));
        }

        let data = res.json::<GenerateContentResponse>().await?;
        tracing::debug!(body = ?data, "Completion response");

        let candidate = match data.candidates.first() {
            Some(candidate) => candidate,
            None => {
                return Err(GatewayError::Upstream(
                    "Gemini returned no candidates".to_string(),
                ));
            }
        };

        let text = candidate
            .content
            .parts
            .iter()
            .map(|part| return part.text.as_str())
            .collect::<String>();
        if text.is_empty() {
            return Err(GatewayError::Upstream(
                "Gemini returned an empty candidate".to_string(),
            ));
        }

        return Ok(ProviderResponse {
            id: data.response_id.clone().unwrap_or_else(create_id),
            model: data
                .model_version
                .clone()
                .unwrap_or_else(|| return self.model.to_string()),
            message: ResponseMessage {
                role: Role::Assistant.to_string(),
                content: text,
            },
            finish_reason: candidate
                .finish_reason
                .clone()
                .unwrap_or_else(|| return "STOP".to_string()),
        });
    }
}
