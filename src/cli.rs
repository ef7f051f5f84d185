use std::path::PathBuf;

mod foods;
mod goals;
mod log;
mod report;
mod terminal;

use clap::ArgAction;
use nutrack::DataStore;
use report::Report;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to the dataset file
    #[arg(short, long, default_value = "nutrition_data.json", global = true)]
    file: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let store = DataStore::new(self.file);
        self.command
            .unwrap_or_else(|| Command::Report(Report::default()))
            .run(&store)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[derive(Debug, clap::Parser)]
enum Command {
    /// List the food database
    Foods,

    /// Add a new food to the database
    AddFood(foods::Add),

    /// Log a meal portion
    Log(log::Log),

    /// Set daily goals from a fitness mode and calorie target
    Goals(goals::Set),

    /// Show the daily report (default)
    Report(Report),

    /// Clear all logged meals
    Reset(log::Reset),
}

impl Command {
    fn run(self, store: &DataStore) -> anyhow::Result<()> {
        match self {
            Self::Foods => {
                foods::list(store);
                Ok(())
            }
            Self::AddFood(add) => add.run(store),
            Self::Log(log) => log.run(store),
            Self::Goals(set) => set.run(store),
            Self::Report(report) => report.run(store),
            Self::Reset(reset) => reset.run(store),
        }
    }
}
