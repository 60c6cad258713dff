#[cfg(test)]
#[path = "gateway_test.rs"]
mod tests;

use crate::domain::models::AdapterBox;
use crate::domain::models::GatewayError;
use crate::domain::models::Message;
use crate::domain::models::ProviderResponse;

/// Front door to the single upstream adapter bound at startup.
pub struct Gateway {
    adapter: AdapterBox,
}

impl Gateway {
    pub fn new(adapter: AdapterBox) -> Gateway {
        return Gateway { adapter };
    }

    pub fn adapter_name(&self) -> String {
        return self.adapter.name();
    }

    pub async fn respond(&self, messages: &[Message]) -> Result<ProviderResponse, GatewayError> {
        if messages.is_empty() {
            return Err(GatewayError::Validation);
        }

        tracing::debug!(
            adapter = self.adapter.name(),
            messages = messages.len(),
            "Forwarding conversation upstream"
        );

        let res = self.adapter.respond(messages).await;
        match &res {
            Ok(response) => {
                tracing::debug!(
                    adapter = self.adapter.name(),
                    id = response.id.as_str(),
                    model = response.model.as_str(),
                    finish_reason = response.finish_reason.as_str(),
                    "Upstream responded"
                );
            }
            Err(err) => {
                tracing::error!(adapter = self.adapter.name(), error = %err, "Upstream request failed");
            }
        }

        return res;
    }
}
