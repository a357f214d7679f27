use std::path::PathBuf;

use clap::builder::RangedU64ValueParser;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use monarch_training::catalog::{Catalog, DEFAULT_TARGET};
use monarch_training::cues::{cues_for_completion, cues_for_gain, CueSink, TerminalCues};
use monarch_training::db::Database;
use monarch_training::tracker::Tracker;
use monarch_training::{api, avatar, cli};

#[derive(Parser)]
#[command(name = "monarch")]
#[command(about = "Levels, ranks and daily quests for your training")]
struct Cli {
    /// Database file (default: platform data directory)
    #[arg(long, env = "MONARCH_DB", global = true)]
    db: Option<PathBuf>,

    /// Disable sound effects (terminal bell)
    #[arg(long, global = true)]
    no_sfx: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show level, XP and rank
    Status,
    /// Gain experience
    Gain {
        #[arg(allow_negative_numbers = true)]
        amount: i64,
    },
    /// List today's quests
    Quests,
    /// Complete a quest by its number in the list
    Complete {
        #[arg(value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
        number: usize,
    },
    /// Reset all daily quests
    Reset,
    /// Show character stats
    Stats,
    /// Browse exercises for a target muscle group
    Exercises {
        #[arg(short, long, default_value = DEFAULT_TARGET)]
        target: String,
    },
    /// Set the avatar from an image file
    Avatar { path: PathBuf },
    /// Serve the local API for the browser widget
    Serve {
        /// Port for HTTP API
        #[arg(short, long, default_value_t = api::DEFAULT_PORT)]
        port: u16,
    },
}

/// Logs go to stderr so stdout carries only rendered output.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG")
            .unwrap_or_else(|_| "monarch_training=info,tower_http=info".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn open_database(path: Option<PathBuf>) -> anyhow::Result<Database> {
    let db = match path {
        Some(path) => Database::open(path)?,
        None => Database::open_default()?,
    };
    db.migrate()?;
    Ok(db)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let sfx_enabled = !cli.no_sfx && cli::sfx_enabled_from_env();
    let mut cues = TerminalCues::stdout(sfx_enabled);
    let mut tracker = Tracker::load(open_database(cli.db)?)?;

    match cli.command.unwrap_or(Commands::Status) {
        Commands::Status => {
            print!("{}", cli::render_status(&tracker.snapshot()));
        }
        Commands::Gain { amount } => {
            let outcome = tracker.gain_experience(amount)?;
            cues.play_all(&cues_for_gain(&outcome));
            print!("{}", cli::render_status(&tracker.snapshot()));
        }
        Commands::Quests => {
            print!("{}", cli::render_quests(tracker.quests()));
        }
        Commands::Complete { number } => {
            let completion = tracker.complete_quest(number - 1)?;
            cues.play_all(&cues_for_completion(&completion));
            if completion.outcome.is_none() {
                println!("Quest {} is already done.", number);
            }
            print!("{}", cli::render_quests(tracker.quests()));
            print!("{}", cli::render_status(&tracker.snapshot()));
        }
        Commands::Reset => {
            tracker.reset_daily()?;
            print!("{}", cli::render_quests(tracker.quests()));
        }
        Commands::Stats => {
            print!("{}", cli::render_stats(tracker.stats()));
        }
        Commands::Exercises { target } => {
            let list = Catalog::from_env().fetch(&target).await;
            print!("{}", cli::render_exercises(&list));
        }
        Commands::Avatar { path } => {
            let data_url = avatar::encode_avatar(&path)?;
            tracker.set_avatar(&data_url)?;
            println!("Avatar updated from {}", path.display());
        }
        Commands::Serve { port } => {
            let state = api::AppState::new(tracker, Catalog::from_env());
            let app = api::create_router(state);

            let listener = tokio::net::TcpListener::bind(("127.0.0.1", port)).await?;
            tracing::info!("Monarch API listening on http://127.0.0.1:{}/api/v1", port);

            axum::serve(listener, app).await?;
        }
    }

    Ok(())
}
