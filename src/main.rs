#![deny(clippy::implicit_return)]
#![allow(clippy::needless_return)]

mod application;
mod configuration;
mod domain;
mod infrastructure;

use std::env;
use std::process;
use std::sync::Arc;

use anyhow::bail;
use anyhow::Error;
use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use yansi::Paint;

use crate::application::chat;
use crate::application::cli;
use crate::application::cli::Mode;
use crate::application::server;
use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::AdapterBox;
use crate::domain::models::AdapterName;
use crate::domain::services::ConversationStore;
use crate::domain::services::Gateway;
use crate::infrastructure::adapters::AdapterManager;

fn handle_error(err: Error) {
    eprintln!(
        "{}",
        Paint::red(format!(
            "DeFi Copilot has failed with the following app version and error.\n\nVersion: {}\nCommit: {}\nError: {}",
            env!("CARGO_PKG_VERSION"),
            env!("VERGEN_GIT_DESCRIBE"),
            err
        ))
    );

    let backtrace = err.backtrace();
    if backtrace.to_string() == "disabled backtrace" {
        let args = env::args().collect::<Vec<String>>().join(" ");
        eprintln!("\nRunning the following can help explain further what the issue is:");
        eprintln!("\nRUST_BACKTRACE=1 {args}");
    } else {
        eprintln!("\n{}", backtrace);
    }

    process::exit(1);
}

/// Human readable logs go to stderr. Setting `DEFI_COPILOT_LOG_DIR` also
/// writes JSON logs to `debug.log` in that directory.
fn init_tracing() -> Option<WorkerGuard> {
    let level = if env::var("RUST_LOG")
        .unwrap_or_else(|_| return "".to_string())
        .contains(env!("CARGO_CRATE_NAME"))
    {
        LevelFilter::DEBUG
    } else {
        LevelFilter::INFO
    };

    let filter = || {
        return EnvFilter::builder()
            .with_default_directive(level.into())
            .from_env_lossy();
    };

    let debug_log_dir = match env::var("DEFI_COPILOT_LOG_DIR") {
        Ok(dir) if !dir.is_empty() => dir,
        _ => {
            tracing_subscriber::fmt()
                .with_env_filter(filter())
                .with_writer(std::io::stderr)
                .init();
            return None;
        }
    };

    let file_appender = tracing_appender::rolling::never(debug_log_dir, "debug.log");
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .json()
        .with_env_filter(filter())
        .with_writer(writer)
        .init();

    return Some(guard);
}

fn build_adapter(mode: Mode) -> Result<AdapterBox> {
    if mode == Mode::Chat && !Config::get(ConfigKey::GatewayURL).is_empty() {
        return Ok(AdapterManager::remote());
    }

    let name = match AdapterName::parse(&Config::get(ConfigKey::Adapter)) {
        Some(name) => name,
        None => bail!(format!(
            "Unknown adapter '{}'",
            Config::get(ConfigKey::Adapter)
        )),
    };

    let token_key = match name {
        AdapterName::Gemini => ConfigKey::GeminiToken,
        AdapterName::Deepseek => ConfigKey::OpenrouterToken,
    };
    if Config::get(token_key).is_empty() {
        tracing::warn!(
            adapter = %name,
            key = %token_key,
            "No API key configured, chat requests will fail"
        );
    }

    return Ok(AdapterManager::get(name));
}

async fn run() -> Result<()> {
    let mode = match cli::parse().await? {
        Some(mode) => mode,
        None => return Ok(()),
    };

    let gateway = Arc::new(Gateway::new(build_adapter(mode)?));
    match mode {
        Mode::Serve => return server::start(gateway).await,
        Mode::Chat => return chat::start(Arc::new(ConversationStore::new(gateway))).await,
    }
}

#[tokio::main]
async fn main() {
    std::panic::set_hook(Box::new(|panic_info| {
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    let _guard = init_tracing();

    if let Err(err) = run().await {
        handle_error(err);
    }
}
