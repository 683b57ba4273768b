//! CLI frontend for Rift, a champion question-answering assistant.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "rift",
    about = "Rift: ask about champion abilities, builds, runes and matchups",
    version,
    propagate_version = true
)]
struct Cli {
    /// Knowledge base JSON file
    #[arg(long, global = true, default_value = "data/champions.json")]
    kb: PathBuf,

    /// Optional TOML file with matching settings
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive conversation
    Chat {
        /// Delay between characters of a reply, in milliseconds (0 disables)
        #[arg(long, default_value = "15")]
        typing_delay_ms: u64,

        /// Write the conversation here on exit (.md, .json, or plain text)
        #[arg(short, long)]
        transcript: Option<PathBuf>,

        /// How many recent exchanges `history` shows and the transcript keeps
        #[arg(long, default_value = "10")]
        max_history: usize,
    },

    /// Answer a single question and exit
    Ask {
        /// The question, e.g. "What is Ahri's ult?"
        #[arg(required = true, num_args = 1..)]
        question: Vec<String>,

        /// Also print the resolved champion and question category
        #[arg(short, long)]
        explain: bool,
    },

    /// Validate the knowledge base and report missing data
    Check,

    /// List champions in the knowledge base
    List,

    /// Show everything known about a champion
    Show {
        /// Champion name (case-insensitive, typos tolerated)
        name: String,
    },
}

fn init_tracing(verbose: bool) {
    let filter = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(filter)),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = commands::load_assistant(&cli.kb, cli.config.as_deref()).and_then(|assistant| {
        match cli.command {
            Commands::Chat {
                typing_delay_ms,
                transcript,
                max_history,
            } => commands::chat::run(
                &assistant,
                commands::chat::ChatOptions {
                    typing_delay_ms,
                    transcript,
                    max_history,
                },
            ),
            Commands::Ask { question, explain } => {
                commands::ask::run(&assistant, &question.join(" "), explain)
            }
            Commands::Check => commands::check::run(&assistant, &cli.kb),
            Commands::List => commands::list::run(&assistant),
            Commands::Show { name } => commands::show::run(&assistant, &name),
        }
    });

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
