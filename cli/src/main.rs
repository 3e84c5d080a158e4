use std::io::{self, BufRead, Read, Write};
use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use cowbot_bot::render::faces;
use cowbot_bot::{BotConfig, MessageHandler};
use cowbot_core::{RenderOptions, parse_command};
use tracing::info;
use tracing_subscriber::EnvFilter;

const PACKAGE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Parser)]
#[command(name = "cowbot")]
#[command(about = "Cowsay chat bot: parse and answer cowsay commands")]
struct Cli {
    /// YAML configuration file (defaults are used when omitted).
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Log parser and bot decisions at debug level.
    #[arg(long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Parse a message and print the render options as JSON.
    Parse(ParseArgs),
    /// Print the bot's reply to a single message.
    Reply(ReplyArgs),
    /// Treat each stdin line as a chat message and print the replies.
    Chat,
    /// List the built-in cow faces.
    Faces,
    /// Write a configuration file with default settings.
    InitConfig(InitConfigArgs),
}

#[derive(Debug, Args)]
struct ParseArgs {
    /// Message text; read from stdin when omitted.
    text: Option<String>,
    /// Print compact JSON.
    #[arg(long)]
    compact: bool,
}

#[derive(Debug, Args)]
struct ReplyArgs {
    /// Message text.
    message: String,
}

#[derive(Debug, Args)]
struct InitConfigArgs {
    /// Output YAML path.
    path: PathBuf,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Command::Parse(args) => run_parse(args),
        Command::Reply(args) => run_reply(args, cli.config),
        Command::Chat => run_chat(cli.config),
        Command::Faces => run_faces(),
        Command::InitConfig(args) => run_init_config(args),
    };

    if let Err(err) = result {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_directive = if verbose { "cowbot=debug" } else { "cowbot=info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_config(path: Option<PathBuf>) -> Result<BotConfig, String> {
    match path {
        Some(path) => BotConfig::load(&path)
            .map_err(|err| format!("Failed to load config '{}': {err}", path.display())),
        None => Ok(BotConfig::default()),
    }
}

fn run_parse(args: ParseArgs) -> Result<(), String> {
    let text = match args.text {
        Some(text) => text,
        None => read_stdin_message()?,
    };

    let parsed = parse_command(&text).map_err(|err| err.to_string())?;
    let json = if args.compact {
        serde_json::to_string(&parsed)
    } else {
        serde_json::to_string_pretty(&parsed)
    }
    .map_err(|err| format!("Failed to serialize render options: {err}"))?;

    println!("{json}");
    Ok(())
}

fn run_reply(args: ReplyArgs, config_path: Option<PathBuf>) -> Result<(), String> {
    let config = load_config(config_path)?;
    let handler = MessageHandler::from_config(&config);
    if let Some(reply) = handler.handle(&args.message) {
        println!("{reply}");
    }
    Ok(())
}

fn run_chat(config_path: Option<PathBuf>) -> Result<(), String> {
    let config = load_config(config_path)?;
    let handler = MessageHandler::from_config(&config);

    eprintln!("{}", handler.draw(&RenderOptions::say("Bot is ready")));
    info!(version = PACKAGE_VERSION, presence = %config.presence, "Bot is ready");

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    for line in stdin.lock().lines() {
        let line = line.map_err(|err| format!("Failed to read message: {err}"))?;
        if let Some(reply) = handler.handle(&line) {
            writeln!(stdout, "{reply}").map_err(|err| format!("Failed to write reply: {err}"))?;
            stdout
                .flush()
                .map_err(|err| format!("Failed to write reply: {err}"))?;
        }
    }
    Ok(())
}

fn run_faces() -> Result<(), String> {
    for name in faces::names() {
        println!("{name}");
    }
    Ok(())
}

fn run_init_config(args: InitConfigArgs) -> Result<(), String> {
    BotConfig::default()
        .save(&args.path)
        .map_err(|err| format!("Failed to write '{}': {err}", args.path.display()))?;
    println!("Wrote default configuration to '{}'.", args.path.display());
    Ok(())
}

/// Reads a whole message from stdin, dropping the final line break.
fn read_stdin_message() -> Result<String, String> {
    let mut text = String::new();
    io::stdin()
        .read_to_string(&mut text)
        .map_err(|err| format!("Failed to read stdin: {err}"))?;
    if text.ends_with('\n') {
        text.pop();
        if text.ends_with('\r') {
            text.pop();
        }
    }
    Ok(text)
}
