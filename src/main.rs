use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use devcourse::storage::FileStore;
use devcourse::{App, Config, ProgressStore, TopicCatalog, cli};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "devcourse")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// List topics with their progress
    List,
    /// Show the stored progress record for a topic
    Progress {
        /// Topic id, as shown by `list`
        topic_id: String,
    },
    /// Recommend a front-end framework
    Recommend {
        /// small, medium or large
        #[arg(long)]
        project_size: Option<String>,
        /// solo, small or large
        #[arg(long)]
        team_size: Option<String>,
        /// short, medium or long
        #[arg(long)]
        timeline: Option<String>,
        /// low, medium or high
        #[arg(long)]
        complexity: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Cli::parse();
    init_logging(args.command.is_none())?;

    match args.command {
        Some(Commands::List) => {
            let catalog = load_catalog(&Config::load()?)?;
            let store = ProgressStore::new(FileStore::open_default()?);

            for line in cli::topic_lines(&catalog, &store) {
                println!("{line}");
            }
        }
        Some(Commands::Progress { topic_id }) => {
            let store = ProgressStore::new(FileStore::open_default()?);

            match store.load(&topic_id) {
                Some(record) => println!("{}", serde_json::to_string_pretty(&record)?),
                None => println!("No progress recorded for {topic_id}"),
            }
        }
        Some(Commands::Recommend { project_size, team_size, timeline, complexity }) => {
            let answers = cli::framework_answers(project_size, team_size, timeline, complexity);
            for line in cli::recommendation_lines(&answers)? {
                println!("{line}");
            }
        }
        None => {
            // Launch TUI
            let config = Config::load()?;
            let catalog = load_catalog(&config)?;
            let store = ProgressStore::new(FileStore::open_default()?);
            let mut app = App::new(config, catalog, store)?;
            app.run().await?;
        }
    }

    Ok(())
}

/// Log to stderr for subcommands, or to the log file while the TUI owns the screen
fn init_logging(to_file: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| "devcourse=info".into());

    if to_file {
        let path = Config::log_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create data directory {:?}", parent))?;
        }
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .with_context(|| format!("Failed to open log file {:?}", path))?;

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}

/// Built-in topics plus any found in the configured topics directory
fn load_catalog(config: &Config) -> Result<TopicCatalog> {
    let mut catalog = TopicCatalog::builtin().context("Built-in topics failed to load")?;

    let dir = config.topics_dir()?;
    if let Err(e) = catalog.load_dir(&dir) {
        tracing::warn!("Failed to load topics from {:?}: {:#}", dir, e);
    }

    if catalog.is_empty() {
        bail!("No topics available");
    }
    Ok(catalog)
}
