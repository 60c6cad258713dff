use super::SlashCommand;

#[test]
fn it_parse_empty_string() {
    let text = "";
    assert!(SlashCommand::parse(text).is_none());
}
#[test]
fn it_parse_space_only() {
    let text = " ";
    assert!(SlashCommand::parse(text).is_none());
}
#[test]
fn it_parse_single_slash() {
    let text = "/";
    assert!(SlashCommand::parse(text).is_none());
}
#[test]
fn it_parse_invalid_prefix() {
    let text = "!q";
    assert!(SlashCommand::parse(text).is_none());
}
#[test]
fn it_parse_plain_message() {
    let text = "What are the best yield farming strategies right now?";
    assert!(SlashCommand::parse(text).is_none());
}
#[test]
fn it_parse_valid_prefix() {
    let text = "/q";
    let cmd = SlashCommand::parse(text);
    assert!(cmd.is_some());
    assert_eq!(cmd.unwrap().command, "/q");
}

#[test]
fn it_is_short_quit() {
    let cmd = SlashCommand::parse("/q").unwrap();
    assert!(cmd.is_quit());
}
#[test]
fn it_is_exit() {
    let cmd = SlashCommand::parse("/exit").unwrap();
    assert!(cmd.is_quit());
}
#[test]
fn it_is_not_is_quit() {
    let cmd = SlashCommand::parse("/new").unwrap();
    assert!(!cmd.is_quit());
}

#[test]
fn it_is_new() {
    assert!(SlashCommand::parse("/n").unwrap().is_new());
    assert!(SlashCommand::parse("/new").unwrap().is_new());
}

#[test]
fn it_is_list() {
    assert!(SlashCommand::parse("/l").unwrap().is_list());
    assert!(SlashCommand::parse("/list").unwrap().is_list());
}

#[test]
fn it_is_open_with_index() {
    let cmd = SlashCommand::parse("/open 2").unwrap();
    assert!(cmd.is_open());
    assert_eq!(cmd.args, vec!["2".to_string()]);
}

#[test]
fn it_is_rename_with_multi_word_title() {
    let cmd = SlashCommand::parse("/rename  Stablecoin   yields ").unwrap();
    assert!(cmd.is_rename());
    assert_eq!(cmd.rest(), "Stablecoin yields");
}

#[test]
fn it_is_delete() {
    assert!(SlashCommand::parse("/d").unwrap().is_delete());
    assert!(!SlashCommand::parse("/help").unwrap().is_delete());
}

#[test]
fn it_is_help() {
    assert!(SlashCommand::parse("/h").unwrap().is_help());
    assert!(SlashCommand::parse("/help").unwrap().is_help());
}
