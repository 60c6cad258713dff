use std::collections::VecDeque;
use std::sync::atomic::AtomicUsize;
use std::sync::atomic::Ordering;
use std::sync::Arc;
use std::sync::Mutex;

use async_trait::async_trait;
use tokio::sync::Notify;

use crate::domain::models::GatewayError;
use crate::domain::models::Message;
use crate::domain::models::ModelAdapter;
use crate::domain::models::ProviderResponse;
use crate::domain::models::ResponseMessage;

pub fn reply(content: &str) -> ProviderResponse {
    return ProviderResponse {
        id: "resp-1".to_string(),
        model: "scripted-model".to_string(),
        message: ResponseMessage {
            role: "assistant".to_string(),
            content: content.to_string(),
        },
        finish_reason: "stop".to_string(),
    };
}

/// Adapter that plays back queued results and records every request it sees.
#[derive(Clone, Default)]
pub struct ScriptedAdapter {
    results: Arc<Mutex<VecDeque<Result<ProviderResponse, GatewayError>>>>,
    requests: Arc<Mutex<Vec<Vec<Message>>>>,
    calls: Arc<AtomicUsize>,
    gate: Option<Arc<Notify>>,
}

impl ScriptedAdapter {
    pub fn new(results: Vec<Result<ProviderResponse, GatewayError>>) -> ScriptedAdapter {
        return ScriptedAdapter {
            results: Arc::new(Mutex::new(results.into_iter().collect())),
            ..ScriptedAdapter::default()
        };
    }

    /// Every call waits on `gate` before answering.
    pub fn gated(
        results: Vec<Result<ProviderResponse, GatewayError>>,
        gate: Arc<Notify>,
    ) -> ScriptedAdapter {
        let mut adapter = ScriptedAdapter::new(results);
        adapter.gate = Some(gate);
        return adapter;
    }

    pub fn calls(&self) -> usize {
        return self.calls.load(Ordering::SeqCst);
    }

    pub fn requests(&self) -> Vec<Vec<Message>> {
        return self.requests.lock().unwrap().clone();
    }
}

#[async_trait]
impl ModelAdapter for ScriptedAdapter {
    fn name(&self) -> String {
        return "scripted".to_string();
    }

    async fn respond(&self, messages: &[Message]) -> Result<ProviderResponse, GatewayError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.requests.lock().unwrap().push(messages.to_vec());

        if let Some(gate) = &self.gate {
            gate.notified().await;
        }

        return self
            .results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| return Err(GatewayError::Upstream("script exhausted".to_string())));
    }
}
