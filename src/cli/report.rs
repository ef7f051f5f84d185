use nutrack::{CalorieBalance, DataStore, Dataset, Totals, progress_percent};
use tracing::instrument;

use super::terminal::{Colorize, is_narrow};

#[derive(Debug, clap::Parser, Default)]
#[command(about = "Show logged meals, totals, and progress against goals")]
pub struct Report {
    /// Output format (table, json)
    #[arg(long, value_name = "FORMAT", default_value = "table")]
    output: OutputFormat,
}

#[derive(Debug, Clone, Copy, Default, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Table,
    Json,
}

impl Report {
    #[instrument(level = "debug", skip(self, store))]
    pub fn run(self, store: &DataStore) -> anyhow::Result<()> {
        let dataset = store.load();
        match self.output {
            OutputFormat::Json => Self::output_json(&dataset),
            OutputFormat::Table => {
                Self::output_table(&dataset);
                Ok(())
            }
        }
    }

    fn output_json(dataset: &Dataset) -> anyhow::Result<()> {
        use serde_json::json;

        let goals = dataset.goals();
        let output = Totals::aggregate(dataset.log()).map_or_else(
            || {
                json!({
                    "mode": goals.mode(),
                    "meals": [],
                    "totals": serde_json::Value::Null,
                })
            },
            |totals| {
                let (kind, amount) = match CalorieBalance::between(&totals, goals) {
                    CalorieBalance::Deficit(remaining) => ("deficit", remaining),
                    CalorieBalance::Surplus(over) => ("surplus", over),
                };

                json!({
                    "mode": goals.mode(),
                    "meals": dataset.log(),
                    "totals": totals,
                    "goals": goals,
                    "progress": {
                        "calories": progress_percent(f64::from(totals.calories), f64::from(goals.calories())),
                        "protein": progress_percent(totals.protein, f64::from(goals.protein())),
                        "carbs": progress_percent(totals.carbs, f64::from(goals.carbs())),
                        "fat": progress_percent(totals.fat, f64::from(goals.fat())),
                    },
                    "balance": {
                        "kind": kind,
                        "amount": amount,
                    },
                })
            },
        );

        println!("{}", serde_json::to_string_pretty(&output)?);
        Ok(())
    }

    fn output_table(dataset: &Dataset) {
        let goals = dataset.goals();
        println!("Mode: {}", goals.mode());

        let Some(totals) = Totals::aggregate(dataset.log()) else {
            println!("No meals logged yet.");
            return;
        };

        println!();
        println!("Meals logged:");
        for entry in dataset.log() {
            println!("  {} ({}g): {} cal", entry.name, entry.portion, entry.calories);
        }

        println!();
        println!("Totals:");
        println!("  Calories: {} / {}", totals.calories, goals.calories());
        println!("  Protein:  {:.1}g / {}g", totals.protein, goals.protein());
        println!("  Carbs:    {:.1}g / {}g", totals.carbs, goals.carbs());
        println!("  Fat:      {:.1}g / {}g", totals.fat, goals.fat());

        println!();
        println!("Progress:");
        print_bar("Calories", f64::from(totals.calories), f64::from(goals.calories()));
        print_bar("Protein ", totals.protein, f64::from(goals.protein()));
        print_bar("Carbs   ", totals.carbs, f64::from(goals.carbs()));
        print_bar("Fat     ", totals.fat, f64::from(goals.fat()));

        println!();
        match CalorieBalance::between(&totals, goals) {
            CalorieBalance::Deficit(remaining) => {
                println!("{}", format!("Deficit: {remaining} calories remaining").success());
            }
            CalorieBalance::Surplus(over) => {
                println!("{}", format!("Surplus: {over} calories over target").warning());
            }
        };
    }
}

fn print_bar(label: &str, current: f64, goal: f64) {
    let width = if is_narrow() { 10 } else { 20 };
    let percent = progress_percent(current, goal);
    let filled = width * usize::from(percent) / 100;
    let bar = format!("[{}{}]", "#".repeat(filled), "-".repeat(width - filled));
    println!("{label}: {} {percent}%", bar.dim());
}
