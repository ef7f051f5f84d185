use std::io::{self, BufRead};

use anyhow::Context;
use nutrack::{DataStore, LogEntry, ValidationError};
use tracing::instrument;

#[derive(Debug, clap::Parser)]
pub struct Log {
    /// Food to log, by name or by its number in `nutrack foods`
    food: String,

    /// Portion in grams
    #[arg(short, long)]
    portion: f64,
}

impl Log {
    #[instrument(level = "debug", skip(store))]
    pub fn run(self, store: &DataStore) -> anyhow::Result<()> {
        if self.portion <= 0.0 {
            return Err(ValidationError::NonPositivePortion.into());
        }

        let mut dataset = store.load();
        let food = self
            .food
            .parse::<usize>()
            .map_or_else(
                |_| dataset.find_food(&self.food),
                |number| dataset.food_at(number),
            )
            .with_context(|| format!("'{}' is not in the food database", self.food))?
            .clone();

        let entry = LogEntry::from_portion(&food, self.portion);
        dataset.push_entry(entry);
        store.save(&dataset)?;

        println!("Logged {}g of {}", self.portion, food.name());
        Ok(())
    }
}

#[derive(Debug, clap::Parser)]
pub struct Reset {
    /// Skip the confirmation prompt
    #[arg(long)]
    yes: bool,
}

impl Reset {
    #[instrument(level = "debug", skip(store))]
    pub fn run(self, store: &DataStore) -> anyhow::Result<()> {
        if !self.yes {
            eprint!("Clear all logged meals? (y/N) ");
            let mut line = String::new();
            io::stdin().lock().read_line(&mut line)?;
            if !line.trim().eq_ignore_ascii_case("y") {
                println!("Cancelled");
                return Ok(());
            }
        }

        let mut dataset = store.load();
        dataset.clear_log();
        store.save(&dataset)?;

        println!("Log cleared");
        Ok(())
    }
}
