#[cfg(test)]
#[path = "remote_test.rs"]
mod tests;

use async_trait::async_trait;
use serde::Deserialize;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::ChatRequest;
use crate::domain::models::GatewayError;
use crate::domain::models::Message;
use crate::domain::models::ModelAdapter;
use crate::domain::models::ProviderResponse;

#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
struct ErrorResponse {
    #[serde(default)]
    error: String,
}

/// Talks to a running gateway's `POST /api/chat` instead of a provider.
pub struct Remote {
    url: String,
}

impl Default for Remote {
    fn default() -> Remote {
        return Remote {
            url: Config::get(ConfigKey::GatewayURL),
        };
    }
}

#[async_trait]
impl ModelAdapter for Remote {
    fn name(&self) -> String {
        return "remote".to_string();
    }

    #[allow(clippy::implicit_return)]
    async fn respond(&self, messages: &[Message]) -> Result<ProviderResponse, GatewayError> {
        if self.url.is_empty() {
            return Err(GatewayError::Configuration(
                "Gateway URL is not defined".to_string(),
            ));
        }

        let req = ChatRequest {
            messages: messages.to_vec(),
        };

        let res = reqwest::Client::new()
            .post(format!(
                "{url}/api/chat",
                url = self.url.trim_end_matches('/')
            ))
            .json(&req)
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status().as_u16();
            let body = res.json::<ErrorResponse>().await.unwrap_or_default();
            tracing::error!(
                status = status,
                error = body.error.as_str(),
                "Gateway request failed"
            );
            if status == 400 {
                return Err(GatewayError::Validation);
            }
            return Err(GatewayError::Upstream(format!("API error: {status}")));
        }

        return Ok(res.json::<ProviderResponse>().await?);
    }
}
