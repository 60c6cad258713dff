use anyhow::Result;

use super::Message;
use super::Role;

#[test]
fn it_creates_messages_with_short_ids() {
    let msg = Message::new(Role::User, "gm");

    assert_eq!(msg.role, Role::User);
    assert_eq!(msg.content, "gm");
    assert_eq!(msg.id.split('-').count(), 2);
    assert_eq!(msg.id.len(), 13);
}

#[test]
fn it_creates_unique_ids() {
    let first = Message::new(Role::User, "a");
    let second = Message::new(Role::User, "a");

    assert_ne!(first.id, second.id);
}

#[test]
fn it_deserializes_messages_without_ids() -> Result<()> {
    let msg: Message = serde_json::from_str(r#"{"role":"assistant","content":"hello"}"#)?;

    assert_eq!(msg.id, "");
    assert_eq!(msg.role, Role::Assistant);
    assert_eq!(msg.content, "hello");

    return Ok(());
}

#[test]
fn it_rejects_unknown_roles() {
    let res = serde_json::from_str::<Message>(r#"{"id":"1","role":"system","content":"x"}"#);
    assert!(res.is_err());
}

#[test]
fn it_serializes_roles_lowercase() -> Result<()> {
    let msg = Message {
        id: "1".to_string(),
        role: Role::Assistant,
        content: "hi".to_string(),
    };

    insta::assert_snapshot!(serde_json::to_string(&msg)?, @r###"{"id":"1","role":"assistant","content":"hi"}"###);
    assert_eq!(Role::User.to_string(), "user");

    return Ok(());
}
