use async_trait::async_trait;
use strum::EnumIter;
use strum::EnumVariantNames;
use strum::IntoEnumIterator;

use super::GatewayError;
use super::Message;
use super::ProviderResponse;

#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, EnumVariantNames, strum::Display)]
#[strum(serialize_all = "lowercase")]
pub enum AdapterName {
    Gemini,
    Deepseek,
}

impl AdapterName {
    pub fn parse(text: &str) -> Option<AdapterName> {
        return AdapterName::iter().find(|name| return name.to_string() == text);
    }
}

#[async_trait]
pub trait ModelAdapter: Send + Sync {
    /// Identifier bound into every conversation created against this adapter.
    fn name(&self) -> String;

    /// Sends the full conversation upstream and returns the normalized reply.
    /// Implementations never mutate `messages` and never retry.
    async fn respond(&self, messages: &[Message]) -> Result<ProviderResponse, GatewayError>;
}

pub type AdapterBox = Box<dyn ModelAdapter>;
