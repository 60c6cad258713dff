use super::GatewayError;
use super::GENERIC_ERROR_MESSAGE;
use super::VALIDATION_ERROR_MESSAGE;

#[test]
fn it_exposes_validation_message() {
    let err = GatewayError::Validation;

    assert!(err.is_validation());
    assert_eq!(err.public_message(), VALIDATION_ERROR_MESSAGE);
}

#[test]
fn it_hides_upstream_details() {
    let err = GatewayError::Upstream(r#"OpenRouter API error: {"error":"secret"}"#.to_string());

    assert!(!err.is_validation());
    assert_eq!(err.public_message(), GENERIC_ERROR_MESSAGE);
    assert!(err.to_string().contains("secret"));
}

#[test]
fn it_hides_configuration_details() {
    let err = GatewayError::Configuration("OpenRouter token is not defined".to_string());

    assert_eq!(err.public_message(), GENERIC_ERROR_MESSAGE);
    insta::assert_snapshot!(err.to_string(), @"configuration error: OpenRouter token is not defined");
}

#[test]
fn it_hides_malformed_request_details() {
    let err = GatewayError::MalformedRequest("expected value at line 1 column 1".to_string());
    assert_eq!(err.public_message(), GENERIC_ERROR_MESSAGE);
}
