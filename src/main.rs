use clap::Parser;
use std::path::Path;

use daily_meal_planner_rs::catalog::{save_items, starter_items, CatalogSource, FileCatalog};
use daily_meal_planner_rs::cli::{Cli, Command};
use daily_meal_planner_rs::error::Result;
use daily_meal_planner_rs::interface::{
    collect_user_profile, display_calorie_info, display_food_list, display_meal_plan,
    prompt_yes_no,
};
use daily_meal_planner_rs::models::UserProfile;
use daily_meal_planner_rs::planner::{
    compute_bmr, compute_target_calories, compute_tdee, select_meals,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Plan => cmd_plan(&cli.file),
        Command::Targets => cmd_targets(),
        Command::Foods => cmd_foods(&cli.file),
        Command::Init { force } => cmd_init(&cli.file, force),
    }
}

/// Compute the goal-adjusted calorie target for a profile.
fn calorie_targets(profile: &UserProfile) -> (f64, i32, i32) {
    let bmr = compute_bmr(
        profile.gender,
        profile.weight_kg,
        profile.height_cm,
        profile.age as f64,
    );
    let tdee = compute_tdee(bmr, profile.activity_multiplier);
    let target = compute_target_calories(tdee, profile.goal);
    (bmr, tdee, target)
}

/// Generate a meal plan from the catalog and interactive inputs.
fn cmd_plan(file_path: &str) -> Result<()> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Food catalog file not found: {}", file_path);
        eprintln!("Run 'daily_meal_planner init' to create a starter catalog.");
        return Ok(());
    }

    let catalog = FileCatalog::new(path).fetch_or_empty();

    if catalog.is_empty() {
        println!("The food catalog is empty. Add items before planning.");
        return Ok(());
    }

    println!("Loaded {} catalog items", catalog.len());
    println!();

    let profile = collect_user_profile()?;
    let (bmr, tdee, target) = calorie_targets(&profile);

    let plan = select_meals(&catalog, target as f64);

    display_calorie_info(bmr, tdee, target, profile.goal);
    display_meal_plan(&plan);

    Ok(())
}

/// Display calorie targets without planning meals.
fn cmd_targets() -> Result<()> {
    let profile = collect_user_profile()?;
    let (bmr, tdee, target) = calorie_targets(&profile);
    display_calorie_info(bmr, tdee, target, profile.goal);
    Ok(())
}

/// List the catalog contents.
fn cmd_foods(file_path: &str) -> Result<()> {
    let path = Path::new(file_path);

    if !path.exists() {
        eprintln!("Food catalog file not found: {}", file_path);
        return Ok(());
    }

    let catalog = FileCatalog::new(path).fetch()?;
    display_food_list(&catalog, "Food Catalog");
    Ok(())
}

/// Write the starter catalog.
fn cmd_init(file_path: &str, force: bool) -> Result<()> {
    let path = Path::new(file_path);

    if path.exists() && !force {
        let overwrite = prompt_yes_no(
            &format!("{} already exists. Overwrite?", file_path),
            false,
        )?;
        if !overwrite {
            println!("Leaving existing catalog untouched.");
            return Ok(());
        }
    }

    save_items(path, &starter_items())?;
    println!("Wrote starter catalog to {}", file_path);
    Ok(())
}
