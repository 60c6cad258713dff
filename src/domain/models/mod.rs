mod adapter;
mod chat_request;
mod conversation;
mod gateway_error;
mod id;
mod message;
mod provider_response;
mod slash_commands;

pub use adapter::*;
pub use chat_request::*;
pub use conversation::*;
pub use gateway_error::*;
pub use id::*;
pub use message::*;
pub use provider_response::*;
pub use slash_commands::*;
