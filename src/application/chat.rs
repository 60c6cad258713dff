#[cfg(test)]
#[path = "chat_test.rs"]
mod tests;

use std::sync::Arc;

use anyhow::Result;
use tokio::io::AsyncBufReadExt;
use tokio::io::BufReader;
use yansi::Paint;

use crate::domain::models::Conversation;
use crate::domain::models::Role;
use crate::domain::models::SlashCommand;
use crate::domain::services::ConversationStore;
use crate::domain::services::SendOutcome;

pub const BUSY_NOTICE: &str = "Still waiting on the previous reply.";

#[derive(Debug, PartialEq, Eq)]
pub enum Reply {
    Quit,
    Nothing,
    Notice(String),
    Assistant(String),
}

pub fn help_text() -> String {
    return [
        "/new (/n)              Start a new conversation",
        "/list (/l, /ls)        List conversations, the active one is marked with *",
        "/open N (/o)           Switch to conversation number N from /list",
        "/rename TITLE (/r)     Rename the active conversation",
        "/delete (/d)           Delete the active conversation",
        "/help (/h)             Show this message",
        "/quit (/q, /exit)      Exit",
        "",
        "Anything else is sent to the active conversation.",
    ]
    .join("\n");
}

fn list_conversations(store: &ConversationStore) -> String {
    let conversations = store.conversations();
    if conversations.is_empty() {
        return "No conversations yet. Type a message or /new to start one.".to_string();
    }

    let active = store.active_id();
    return conversations
        .iter()
        .enumerate()
        .map(|(idx, conversation)| {
            let marker = if Some(&conversation.id) == active.as_ref() {
                "*"
            } else {
                " "
            };
            return format!(
                "{marker} {num}. {title} ({count} messages, {model})",
                num = idx + 1,
                title = conversation.title,
                count = conversation.messages.len(),
                model = conversation.model
            );
        })
        .collect::<Vec<String>>()
        .join("\n");
}

fn transcript(conversation: &Conversation) -> String {
    let mut lines = vec![format!("Opened \"{}\"", conversation.title)];
    for message in &conversation.messages {
        let author = match message.role {
            Role::User => "You",
            Role::Assistant => "Copilot",
        };
        lines.push(format!("{author}: {}", message.content));
    }

    return lines.join("\n");
}

/// Runs one line of user input against the store.
pub async fn handle_input(store: &ConversationStore, text: &str) -> Reply {
    if let Some(cmd) = SlashCommand::parse(text) {
        if cmd.is_quit() {
            return Reply::Quit;
        }

        if cmd.is_help() {
            return Reply::Notice(help_text());
        }

        if cmd.is_new() {
            store.create_conversation();
            return Reply::Notice("Started a new conversation.".to_string());
        }

        if cmd.is_list() {
            return Reply::Notice(list_conversations(store));
        }

        if cmd.is_open() {
            let conversation = cmd
                .rest()
                .parse::<usize>()
                .ok()
                .and_then(|num| return num.checked_sub(1))
                .and_then(|idx| return store.conversations().into_iter().nth(idx));

            if let Some(conversation) = conversation {
                store.select_conversation(&conversation.id);
                return Reply::Notice(transcript(&conversation));
            }
            return Reply::Notice("No conversation with that number, see /list.".to_string());
        }

        let active = match store.active_id() {
            Some(active) => active,
            None => return Reply::Notice("No active conversation.".to_string()),
        };

        if cmd.is_rename() {
            if store.rename_conversation(&active, &cmd.rest()) {
                return Reply::Notice(format!("Renamed to \"{}\".", cmd.rest()));
            }
            return Reply::Notice("Usage: /rename TITLE".to_string());
        }

        if cmd.is_delete() {
            if let Some(conversation) = store.active_conversation() {
                store.delete_conversation(&conversation.id);
                return Reply::Notice(format!("Deleted \"{}\".", conversation.title));
            }
            return Reply::Notice("No active conversation.".to_string());
        }
    }

    if text.trim().is_empty() {
        return Reply::Nothing;
    }

    let active = match store.active_id() {
        Some(active) => active,
        None => store.create_conversation(),
    };

    match store.send_message(&active, text).await {
        SendOutcome::Replied(message) | SendOutcome::Failed(message) => {
            return Reply::Assistant(message.content);
        }
        SendOutcome::Busy => return Reply::Notice(BUSY_NOTICE.to_string()),
        SendOutcome::Ignored => return Reply::Nothing,
    }
}

pub async fn start(store: Arc<ConversationStore>) -> Result<()> {
    println!(
        "{}",
        Paint::cyan("DeFi Copilot. Ask about protocols, yields or risks. /help lists commands.")
    );

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        print!("{} ", Paint::green(">").bold());
        std::io::Write::flush(&mut std::io::stdout())?;

        let line = match lines.next_line().await? {
            Some(line) => line,
            None => break,
        };

        match handle_input(&store, &line).await {
            Reply::Quit => break,
            Reply::Nothing => {}
            Reply::Notice(text) => println!("{}", Paint::yellow(text)),
            Reply::Assistant(text) => println!("{} {text}\n", Paint::blue("Copilot:").bold()),
        }
    }

    tracing::debug!("Chat session ended");
    return Ok(());
}
