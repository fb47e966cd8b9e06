//! The `mathdrill init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("mathdrill.toml").exists() {
        println!("mathdrill.toml already exists, skipping.");
    } else {
        std::fs::write("mathdrill.toml", SAMPLE_CONFIG)?;
        println!("Created mathdrill.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit mathdrill.toml to add a profile per learner");
    println!("  2. Run: mathdrill validate");
    println!("  3. Run: mathdrill practice --operation mul --profile Default");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# mathdrill configuration

# Profile used when --profile is not given
default_profile = "Default"

# Session logs are written here (MATHDRILL_LOG_DIR overrides)
log_dir = "./mathdrill-logs"

[profiles.Default]
# Answers must be faster than this (seconds) to master a problem
mastery_time_secs = 5.0
min_value = 0
max_value = 12
# random, shuffled or sequential
order = "random"

[profiles.Beginner]
mastery_time_secs = 10.0
min_value = 0
max_value = 5
operation = "addition"
order = "shuffled"
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DrillConfig;

    #[test]
    fn sample_config_parses_and_validates() {
        let config: DrillConfig = toml::from_str(SAMPLE_CONFIG).unwrap();
        assert_eq!(config.profiles.len(), 2);
        for profile in config.profiles.values() {
            assert!(profile.validate().is_empty());
        }
    }
}
