use super::Conversation;
use super::DEFAULT_TITLE;

#[test]
fn it_creates_empty_conversations() {
    let conversation = Conversation::new("gemini");

    assert_eq!(conversation.title, DEFAULT_TITLE);
    assert_eq!(conversation.model, "gemini");
    assert!(conversation.messages.is_empty());
    assert!(!conversation.id.is_empty());
}

#[test]
fn it_truncates_long_titles() {
    let title = Conversation::title_from("Compare ETH staking options");
    assert_eq!(title, "Compare ETH staking options");

    let title = Conversation::title_from("Compare ETH staking options!!!!");
    insta::assert_snapshot!(title, @"Compare ETH staking options!!!...");
}

#[test]
fn it_keeps_short_titles() {
    assert_eq!(Conversation::title_from("Hi"), "Hi");
}

#[test]
fn it_keeps_titles_of_exactly_thirty_characters() {
    let text = "a".repeat(30);
    assert_eq!(Conversation::title_from(&text), text);
}

#[test]
fn it_truncates_on_characters_not_bytes() {
    let text = "é".repeat(31);
    let title = Conversation::title_from(&text);

    assert_eq!(title, format!("{}...", "é".repeat(30)));
}
