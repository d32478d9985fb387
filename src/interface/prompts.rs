use dialoguer::{Confirm, Input, Select};

use crate::error::{PlannerError, Result};
use crate::models::{ActivityLevel, Gender, Goal, UserProfile};

/// Prompt for gender.
pub fn prompt_gender() -> Result<Gender> {
    let options = [Gender::Male, Gender::Female];
    let labels: Vec<&str> = options.iter().map(|g| g.label()).collect();

    let selection = Select::new()
        .with_prompt("Gender")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(options[selection])
}

/// Prompt for age in years.
pub fn prompt_age() -> Result<u32> {
    let input: String = Input::new()
        .with_prompt("Age (years)")
        .default("30".to_string())
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput("Age must be a whole number".to_string()))
}

/// Prompt for body weight in kilograms.
pub fn prompt_weight_kg() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Weight (kg)")
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput("Weight must be a number".to_string()))
}

/// Prompt for height in centimeters.
pub fn prompt_height_cm() -> Result<f64> {
    let input: String = Input::new()
        .with_prompt("Height (cm)")
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PlannerError::InvalidInput("Height must be a number".to_string()))
}

/// Prompt for activity level, returning its TDEE multiplier.
pub fn prompt_activity_multiplier() -> Result<f64> {
    let labels: Vec<String> = ActivityLevel::ALL
        .iter()
        .map(|level| format!("{}, x{}", level.label(), level.multiplier()))
        .collect();

    let selection = Select::new()
        .with_prompt("Activity level")
        .items(&labels)
        .default(0)
        .interact()?;

    Ok(ActivityLevel::ALL[selection].multiplier())
}

/// Prompt for the weight goal.
pub fn prompt_goal() -> Result<Goal> {
    let options = [Goal::Lose, Goal::Maintain, Goal::Gain];
    let labels: Vec<&str> = options.iter().map(|g| g.label()).collect();

    let selection = Select::new()
        .with_prompt("Goal")
        .items(&labels)
        .default(1)
        .interact()?;

    Ok(options[selection])
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Collect the full user profile for a planning run.
pub fn collect_user_profile() -> Result<UserProfile> {
    let gender = prompt_gender()?;
    let age = prompt_age()?;
    let weight_kg = prompt_weight_kg()?;
    let height_cm = prompt_height_cm()?;
    let activity_multiplier = prompt_activity_multiplier()?;
    let goal = prompt_goal()?;

    Ok(UserProfile {
        gender,
        age,
        weight_kg,
        height_cm,
        activity_multiplier,
        goal,
    })
}
