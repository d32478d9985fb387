use clap::{Parser, Subcommand};

/// DailyMealPlanner: compute a calorie target from biometrics and fill a
/// day's meal slots from a food catalog.
#[derive(Parser, Debug)]
#[command(name = "daily_meal_planner")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the food catalog file (.json or .csv).
    #[arg(short, long, default_value = "food_catalog.json")]
    pub file: String,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Compute calorie targets and generate a meal plan.
    Plan,

    /// Compute and display calorie targets only.
    Targets,

    /// List the food catalog.
    Foods,

    /// Write a starter food catalog to the catalog path.
    Init {
        /// Overwrite an existing catalog file.
        #[arg(long)]
        force: bool,
    },
}

impl Default for Command {
    fn default() -> Self {
        Command::Plan
    }
}
