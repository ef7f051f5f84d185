use nutrack::{DataStore, FoodItem};
use tracing::instrument;

/// Print the food database as a numbered list.
///
/// The numbers are the same 1-based positions `nutrack log` accepts.
#[instrument(level = "debug", skip(store))]
pub fn list(store: &DataStore) {
    let dataset = store.load();
    for (index, food) in dataset.foods().iter().enumerate() {
        println!(
            "{}. {} - P:{} C:{} F:{}",
            index + 1,
            food.name(),
            food.protein(),
            food.carbs(),
            food.fat()
        );
    }
}

#[derive(Debug, clap::Parser)]
pub struct Add {
    /// Food name
    name: String,

    /// Protein per 100g, in grams
    #[arg(long)]
    protein: f64,

    /// Carbs per 100g, in grams
    #[arg(long)]
    carbs: f64,

    /// Fat per 100g, in grams
    #[arg(long)]
    fat: f64,
}

impl Add {
    #[instrument(level = "debug", skip(store))]
    pub fn run(self, store: &DataStore) -> anyhow::Result<()> {
        let mut dataset = store.load();

        let food = FoodItem::new(self.name, self.protein, self.carbs, self.fat)?;
        let name = food.name().to_string();
        dataset.add_food(food)?;
        store.save(&dataset)?;

        println!("Added {name} to the database");
        Ok(())
    }
}
