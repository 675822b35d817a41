use super::models::AppConfig;
use super::tables::ConfigTables;
use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::{debug, info, warn};

/// Read `path`, falling back to defaults when it is missing or invalid.
pub fn load_config(path: &Path) -> AppConfig {
    let contents = match fs::read_to_string(path) {
        Ok(data) => {
            info!(path = %path.display(), "Loaded base config");
            data
        }
        Err(err) => {
            warn!(
                path = %path.display(),
                "Falling back to default config: {err}"
            );
            return AppConfig::default();
        }
    };

    match parse_config(&contents) {
        Ok(cfg) => {
            debug!("Parsed configuration from disk");
            cfg
        }
        Err(err) => {
            warn!(path = %path.display(), "Invalid config TOML: {err:#}");
            AppConfig::default()
        }
    }
}

pub fn parse_config(contents: &str) -> Result<AppConfig> {
    let tables: ConfigTables = toml::from_str(contents).context("Failed to parse config tables")?;
    Ok(tables.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::models::{LogLevel, ThemeMode};
    use portfolio_core::PastEndBehavior;
    use portfolio_core::egg::EggPattern;

    #[test]
    fn empty_file_yields_defaults() {
        let cfg = parse_config("").expect("empty config parses");
        assert_eq!(cfg, AppConfig::default());
    }

    #[test]
    fn tables_map_onto_flat_config() {
        let cfg = parse_config(
            r#"
            [appearance]
            theme = "day"

            [tracking]
            past_end = "snap-to-last"
            probe_fraction = 0.5

            [effects]
            matrix_rain = false
            egg_pattern = "moon-phases"

            [keys]
            safe_quit = "ctrl+q"

            [logging]
            log_level = "debug"
            "#,
        )
        .expect("config parses");

        assert_eq!(cfg.theme, ThemeMode::Day);
        assert_eq!(cfg.past_end, PastEndBehavior::SnapToLast);
        assert_eq!(cfg.probe_fraction, 0.5);
        assert!(!cfg.matrix_rain);
        assert_eq!(cfg.egg_pattern, EggPattern::MoonPhases);
        assert_eq!(cfg.key_safe_quit, "ctrl+q");
        assert_eq!(cfg.key_next_section, "j");
        assert_eq!(cfg.log_level, LogLevel::Debug);
        assert_eq!(cfg.splash_duration_ms, 2000);
    }

    #[test]
    fn unknown_variant_is_an_error() {
        assert!(parse_config("[tracking]\npast_end = \"wrap\"").is_err());
    }

    #[test]
    fn shipped_sample_config_parses() {
        let cfg = parse_config(include_str!("../../conf/config.toml")).expect("sample parses");
        assert_eq!(cfg.past_end, PastEndBehavior::Retain);
        assert!(cfg.window_pos_x.is_none());
        assert!((0.0..=1.0).contains(&cfg.probe_fraction));
    }

    #[test]
    fn missing_file_falls_back() {
        let cfg = load_config(Path::new("/nonexistent/portfolio/config.toml"));
        assert_eq!(cfg, AppConfig::default());
    }
}
