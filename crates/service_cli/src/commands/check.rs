//! Check command implementation
//!
//! Prints the resolved configuration and the sizes each pattern will sweep.

use std::path::Path;

use tracing::info;

use crate::config::BenchConfig;
use crate::Result;

/// Run the check command
pub fn run(config: &BenchConfig, config_path: &Path) -> Result<()> {
    config.sweep.validate()?;
    println!("{}", render(config, config_path)?);
    info!("Configuration OK");
    Ok(())
}

fn render(config: &BenchConfig, config_path: &Path) -> Result<String> {
    let mut text = String::new();
    let source = if config_path.exists() {
        config_path.display().to_string()
    } else {
        "defaults".to_string()
    };
    text.push_str(&format!("# Configuration: {}\n", source));
    text.push_str(&toml::to_string_pretty(config)?);
    text.push_str("\n# Sizes\n");

    for &pattern in &config.sweep.patterns {
        let strategies: Vec<&str> = config
            .sweep
            .strategies_for(pattern)
            .iter()
            .map(|s| s.name())
            .collect();
        let sizes: Vec<String> = config
            .sweep
            .sizes_for(pattern)
            .iter()
            .map(|s| s.to_string())
            .collect();
        text.push_str(&format!(
            "{:<22} [{}] {}\n",
            pattern.name(),
            strategies.join(", "),
            sizes.join(" ")
        ));
    }
    Ok(text)
}
