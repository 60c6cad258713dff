use std::io;
use std::path;

use anyhow::bail;
use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::AdapterName;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Serve,
    Chat,
}

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

async fn create_config_file() -> Result<()> {
    let config_file_path_str = Config::default(ConfigKey::ConfigFile);
    let config_file_path = path::PathBuf::from(&config_file_path_str);
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_file_path_str}"
        ));
    }

    if let Some(parent) = config_file_path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).await?;
        }
    }

    let mut file = fs::File::create(&config_file_path).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    println!("Created default config file at {config_file_path_str}");
    return Ok(());
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        );
}

fn arg_global(key: ConfigKey, env: &'static str, help: String) -> Arg {
    return Arg::new(key.to_string())
        .long(key.to_string())
        .env(env)
        .num_args(1)
        .help(help)
        .global(true);
}

fn arg_adapter() -> Arg {
    return arg_global(
        ConfigKey::Adapter,
        "DEFI_COPILOT_ADAPTER",
        format!(
            "Upstream adapter that answers chat requests. [default: {}]",
            Config::default(ConfigKey::Adapter)
        ),
    )
    .short('a')
    .value_parser(PossibleValuesParser::new(AdapterName::VARIANTS));
}

pub fn build() -> Command {
    let about = format!(
        "{}\n\nVersion: {}\nCommit: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
        env!("VERGEN_GIT_DESCRIBE")
    );

    return Command::new("defi-copilot")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .arg_required_else_help(false)
        .subcommand(Command::new("serve").about("Serve the chat gateway over HTTP. This is the default."))
        .subcommand(Command::new("chat").about("Chat from the terminal, either through a running gateway or straight against the configured adapter."))
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("DEFI_COPILOT_CONFIG_FILE")
                .num_args(1)
                .help(format!("Path to configuration file [default: {}]", Config::default(ConfigKey::ConfigFile)))
                .global(true)
        )
        .arg(arg_adapter())
        .arg(arg_global(
            ConfigKey::Host,
            "DEFI_COPILOT_HOST",
            format!("Address the HTTP gateway binds to. [default: {}]", Config::default(ConfigKey::Host)),
        ))
        .arg(arg_global(
            ConfigKey::Port,
            "DEFI_COPILOT_PORT",
            format!("Port the HTTP gateway listens on. [default: {}]", Config::default(ConfigKey::Port)),
        ).short('p'))
        .arg(arg_global(
            ConfigKey::GatewayURL,
            "DEFI_COPILOT_GATEWAY_URL",
            "Base URL of a running gateway for the chat subcommand. When unset, chat talks to the configured adapter directly.".to_string(),
        ).short('g'))
        .arg(arg_global(
            ConfigKey::GeminiModel,
            "DEFI_COPILOT_GEMINI_MODEL",
            format!("Gemini model used by the gemini adapter. [default: {}]", Config::default(ConfigKey::GeminiModel)),
        ))
        .arg(arg_global(
            ConfigKey::GeminiToken,
            "GEMINI_API_KEY",
            "Gemini API key used by the gemini adapter.".to_string(),
        ).hide_env_values(true))
        .arg(arg_global(
            ConfigKey::GeminiURL,
            "DEFI_COPILOT_GEMINI_URL",
            format!("Gemini API URL. [default: {}]", Config::default(ConfigKey::GeminiURL)),
        ))
        .arg(arg_global(
            ConfigKey::OpenrouterModel,
            "DEFI_COPILOT_OPENROUTER_MODEL",
            format!("OpenRouter model used by the deepseek adapter. [default: {}]", Config::default(ConfigKey::OpenrouterModel)),
        ))
        .arg(arg_global(
            ConfigKey::OpenrouterReferer,
            "DEFI_COPILOT_APP_URL",
            format!("HTTP-Referer header sent to OpenRouter. [default: {}]", Config::default(ConfigKey::OpenrouterReferer)),
        ))
        .arg(arg_global(
            ConfigKey::OpenrouterTitle,
            "DEFI_COPILOT_APP_TITLE",
            format!("X-Title header sent to OpenRouter. [default: {}]", Config::default(ConfigKey::OpenrouterTitle)),
        ))
        .arg(arg_global(
            ConfigKey::OpenrouterToken,
            "OPENROUTER_API_KEY",
            "OpenRouter API key used by the deepseek adapter.".to_string(),
        ).hide_env_values(true))
        .arg(arg_global(
            ConfigKey::OpenrouterURL,
            "DEFI_COPILOT_OPENROUTER_URL",
            format!("OpenRouter API URL. [default: {}]", Config::default(ConfigKey::OpenrouterURL)),
        ));
}

/// Parses the command line. Returns `None` when the invoked subcommand has
/// already done its work and the process should exit.
pub async fn parse() -> Result<Option<Mode>> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
            }
            _ => {
                subcommand_config().print_long_help()?;
            }
        },
        Some(("chat", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            return Ok(Some(Mode::Chat));
        }
        Some(("serve", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            return Ok(Some(Mode::Serve));
        }
        _ => {
            Config::load(build(), vec![&matches]).await?;
            return Ok(Some(Mode::Serve));
        }
    }

    return Ok(None);
}
