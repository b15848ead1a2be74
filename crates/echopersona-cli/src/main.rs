use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "echopersona", version, about = "EchoPersona journal CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Journal entries
    Entry {
        #[command(subcommand)]
        action: commands::entry::EntryAction,
    },
    /// Journaling streaks
    Streak {
        #[command(subcommand)]
        action: commands::streak::StreakAction,
    },
    /// Days with at least one entry
    Calendar {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Daily reflection prompt
    Prompt {
        #[command(subcommand)]
        action: commands::prompt::PromptAction,
    },
    /// Persona profile and its timeline
    Profile {
        #[command(subcommand)]
        action: commands::profile::ProfileAction,
    },
    /// Premium status
    Premium {
        #[command(subcommand)]
        action: commands::premium::PremiumAction,
    },
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: commands::config::ConfigAction,
    },
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_env("ECHOPERSONA_LOG")
                .unwrap_or_else(|_| "warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Entry { action } => commands::entry::run(action),
        Commands::Streak { action } => commands::streak::run(action),
        Commands::Calendar { json } => commands::calendar::run(json),
        Commands::Prompt { action } => commands::prompt::run(action),
        Commands::Profile { action } => commands::profile::run(action),
        Commands::Premium { action } => commands::premium::run(action),
        Commands::Config { action } => commands::config::run(action),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
