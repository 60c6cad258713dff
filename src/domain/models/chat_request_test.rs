use anyhow::Result;

use super::ChatRequest;
use crate::domain::models::GatewayError;
use crate::domain::models::Role;

#[test]
fn it_parses_messages() -> Result<()> {
    let body = r#"{"messages":[{"id":"1","role":"user","content":"gm"},{"id":"2","role":"assistant","content":"gm!"}]}"#;
    let req = ChatRequest::parse(body.as_bytes())?;

    assert_eq!(req.messages.len(), 2);
    assert_eq!(req.messages[0].role, Role::User);
    assert_eq!(req.messages[1].content, "gm!");

    return Ok(());
}

#[test]
fn it_rejects_missing_messages() {
    let res = ChatRequest::parse(b"{}");
    assert!(matches!(res, Err(GatewayError::Validation)));
}

#[test]
fn it_rejects_null_messages() {
    let res = ChatRequest::parse(br#"{"messages":null}"#);
    assert!(matches!(res, Err(GatewayError::Validation)));
}

#[test]
fn it_rejects_non_array_messages() {
    let res = ChatRequest::parse(br#"{"messages":"hello"}"#);
    assert!(matches!(res, Err(GatewayError::Validation)));

    let res = ChatRequest::parse(br#"{"messages":{"role":"user","content":"hello"}}"#);
    assert!(matches!(res, Err(GatewayError::Validation)));
}

#[test]
fn it_rejects_empty_messages() {
    let res = ChatRequest::parse(br#"{"messages":[]}"#);
    assert!(matches!(res, Err(GatewayError::Validation)));
}

#[test]
fn it_treats_invalid_json_as_malformed() {
    let res = ChatRequest::parse(b"messages=hello");
    assert!(matches!(res, Err(GatewayError::MalformedRequest(_))));
}

#[test]
fn it_treats_a_null_body_as_malformed() {
    let res = ChatRequest::parse(b"null");
    assert!(matches!(res, Err(GatewayError::MalformedRequest(_))));
}

#[test]
fn it_rejects_non_object_bodies_as_missing_messages() {
    for body in ["[]", r#"[{"role":"user","content":"gm"}]"#, r#""gm""#, "5", "true"] {
        let res = ChatRequest::parse(body.as_bytes());
        assert!(matches!(res, Err(GatewayError::Validation)), "body: {body}");
    }
}

#[test]
fn it_treats_bad_entries_as_malformed() {
    let res = ChatRequest::parse(br#"{"messages":[{"role":"wizard","content":"hello"}]}"#);
    assert!(matches!(res, Err(GatewayError::MalformedRequest(_))));

    let res = ChatRequest::parse(br#"{"messages":[42]}"#);
    assert!(matches!(res, Err(GatewayError::MalformedRequest(_))));
}
