use nutrack::{DataStore, Goals, Mode};
use tracing::instrument;

#[derive(Debug, clap::Parser)]
pub struct Set {
    /// Fitness mode: bulking, cutting, or maintain
    mode: Mode,

    /// Daily calorie target in kcal
    #[arg(short, long)]
    calories: f64,
}

impl Set {
    #[instrument(level = "debug", skip(store))]
    pub fn run(self, store: &DataStore) -> anyhow::Result<()> {
        let goals = Goals::plan(self.mode, self.calories)?;

        let mut dataset = store.load();
        dataset.set_goals(goals.clone());
        store.save(&dataset)?;

        println!("Goals set for {}:", goals.mode());
        println!("  Calories: {}", goals.calories());
        println!("  Protein:  {}g", goals.protein());
        println!("  Carbs:    {}g", goals.carbs());
        println!("  Fat:      {}g", goals.fat());
        Ok(())
    }
}
