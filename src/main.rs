use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use schools_store::action_log::ActionLog;
use schools_store::config::Config;
use schools_store::logging::init_tracing;
use schools_store::replay::{replay, ReplayOptions};
use schools_store::schools::{ActionTag, SchoolsReducer};
use schools_store::store::Store;

#[derive(Debug, Parser)]
#[command(name = "schools-store", version, about = "Replay schools store actions")]
struct Cli {
    /// Config file (default: platform config dir)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Dispatch every action in a JSON-lines log and print the final state
    Replay {
        /// Action log, one JSON action per line
        log: PathBuf,
        /// Initial state snapshot (overrides replay.seed)
        #[arg(long)]
        seed: Option<PathBuf>,
        /// Skip undecodable lines instead of stopping
        #[arg(long)]
        keep_going: bool,
        #[arg(long)]
        pretty: bool,
    },
    /// List the action tags the reducer handles
    Tags,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    }
    .context("loading configuration")?;

    init_tracing(&config.logging.filter);

    match cli.command {
        Command::Replay {
            log,
            seed,
            keep_going,
            pretty,
        } => {
            let options = ReplayOptions::resolve(&config, seed, keep_going);
            let store: Store<SchoolsReducer> = Store::with_state(options.initial_state()?);

            let actions = ActionLog::open(&log)?;
            replay(&store, actions, options.stop_on_error)
                .with_context(|| format!("replaying '{}'", log.display()))?;

            let state = store.state();
            let rendered = if pretty {
                serde_json::to_string_pretty(&*state)?
            } else {
                serde_json::to_string(&*state)?
            };
            writeln!(io::stdout(), "{rendered}")?;
        }
        Command::Tags => {
            let mut stdout = io::stdout().lock();
            for tag in ActionTag::ALL {
                writeln!(stdout, "{tag}")?;
            }
        }
    }

    Ok(())
}
