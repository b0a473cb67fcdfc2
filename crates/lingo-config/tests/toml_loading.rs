//! Integration tests for TOML and environment configuration loading.
//!
//! Uses `figment::Jail` for sandboxed files and env vars.

use figment::{
    Figment, Jail,
    providers::{Env, Format, Serialized, Toml},
};
use lingo_config::{ConfigError, LingoConfig};
use pretty_assertions::assert_eq;

#[test]
fn loads_database_section_from_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "/var/lib/lingo/words.db"
busy_timeout_ms = 250
"#,
        )?;

        let config: LingoConfig = Figment::from(Serialized::defaults(LingoConfig::default()))
            .merge(Toml::file("config.toml"))
            .extract()?;

        assert_eq!(config.database.path, "/var/lib/lingo/words.db");
        assert_eq!(config.database.busy_timeout_ms, 250);
        assert_eq!(config.general.page_size, 100);
        Ok(())
    });
}

#[test]
fn project_config_is_picked_up() {
    Jail::expect_with(|jail| {
        jail.create_dir(".lingo")?;
        jail.create_file(
            ".lingo/config.toml",
            r#"
[general]
page_size = 25
"#,
        )?;

        let config = LingoConfig::load().expect("config loads");
        assert_eq!(config.general.page_size, 25);
        Ok(())
    });
}

#[test]
fn env_beats_toml() {
    Jail::expect_with(|jail| {
        jail.create_file(
            "config.toml",
            r#"
[database]
path = "from-toml.db"
"#,
        )?;
        jail.set_env("LINGO_DATABASE__PATH", "from-env.db");

        let config: LingoConfig = Figment::from(Serialized::defaults(LingoConfig::default()))
            .merge(Toml::file("config.toml"))
            .merge(Env::prefixed("LINGO_").split("__"))
            .extract()?;

        assert_eq!(config.database.path, "from-env.db");
        Ok(())
    });
}

#[test]
fn zero_page_size_from_env_fails_validation() {
    Jail::expect_with(|jail| {
        jail.set_env("LINGO_GENERAL__PAGE_SIZE", "0");

        let result = LingoConfig::load();
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
        Ok(())
    });
}

#[test]
fn malformed_value_is_a_figment_error() {
    Jail::expect_with(|jail| {
        jail.set_env("LINGO_GENERAL__PAGE_SIZE", "many");

        let result = LingoConfig::load();
        assert!(matches!(result, Err(ConfigError::Figment(_))));
        Ok(())
    });
}
