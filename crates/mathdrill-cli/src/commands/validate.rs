//! The `mathdrill validate` command.

use std::path::PathBuf;

use anyhow::Result;

use mathdrill_core::generator::problem_count;
use mathdrill_core::model::Operation;

use crate::config::load_config_from;

pub fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let config = load_config_from(config_path.as_deref())?;

    let mut profiles = config.profiles.clone();
    if profiles.is_empty() {
        let (name, profile) = config.profile(None)?;
        println!("No profiles configured; checking built-in defaults.");
        profiles.insert(name, profile);
    } else if !profiles.contains_key(&config.default_profile) {
        println!(
            "WARNING: default_profile '{}' is not defined; built-in defaults will be used.",
            config.default_profile
        );
    }

    let mut total_warnings = 0;
    for (name, profile) in &profiles {
        let operation = profile.operation.unwrap_or(Operation::Addition);
        let count = problem_count(operation, profile.min_value, profile.max_value)
            .map(|n| format!("{n} {operation} problems"))
            .unwrap_or_else(|| "no problems".to_string());
        println!(
            "Profile: {name} ([{}, {}], mastery {:.1} s, {count})",
            profile.min_value, profile.max_value, profile.mastery_time_secs
        );

        let warnings = profile.validate();
        for w in &warnings {
            println!("  WARNING: {w}");
        }
        total_warnings += warnings.len();
    }

    if total_warnings == 0 {
        println!("All profiles valid.");
    } else {
        println!("\n{total_warnings} warning(s) found.");
    }

    Ok(())
}
