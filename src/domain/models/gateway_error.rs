#[cfg(test)]
#[path = "gateway_error_test.rs"]
mod tests;

pub const VALIDATION_ERROR_MESSAGE: &str = "Messages are required and must be an array";
pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred while processing your request";

#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Messages were missing, not an array, or empty.
    #[error("messages are required and must be a non-empty array")]
    Validation,

    #[error("malformed request: {0}")]
    MalformedRequest(String),

    /// A deployment secret is missing. Never caller-correctable.
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("upstream error: {0}")]
    Upstream(String),
}

impl GatewayError {
    pub fn is_validation(&self) -> bool {
        return matches!(self, GatewayError::Validation);
    }

    /// Message safe to hand back to callers. Detail stays in the logs.
    pub fn public_message(&self) -> &'static str {
        if self.is_validation() {
            return VALIDATION_ERROR_MESSAGE;
        }

        return GENERIC_ERROR_MESSAGE;
    }
}

impl From<reqwest::Error> for GatewayError {
    fn from(err: reqwest::Error) -> GatewayError {
        return GatewayError::Upstream(err.to_string());
    }
}
