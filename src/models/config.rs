//! Configuration model loaded from external sources.

use std::path::Path;

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

use crate::{CANDIDATE_LIMIT, MAX_RELATED_POSTS, SIMILARITY_THRESHOLD};

#[derive(Clone, Debug, Deserialize)]
/// Basic configuration shared across handlers.
pub struct ServerConfig {
    pub database_url: String,
    pub bind_address: String,
    #[serde(default)]
    pub related: RelatedConfig,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
/// Tuning knobs of the related-posts ranking.
pub struct RelatedConfig {
    pub similarity_threshold: f64,
    pub max_results: usize,
    /// Must stay within `1..=CANDIDATE_LIMIT`.
    pub candidate_limit: u32,
}

impl Default for RelatedConfig {
    fn default() -> Self {
        Self {
            similarity_threshold: SIMILARITY_THRESHOLD,
            max_results: MAX_RELATED_POSTS,
            candidate_limit: CANDIDATE_LIMIT,
        }
    }
}

impl RelatedConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=CANDIDATE_LIMIT).contains(&self.candidate_limit) {
            return Err(ConfigError::Message(format!(
                "related.candidate_limit must be between 1 and {CANDIDATE_LIMIT}, got {}",
                self.candidate_limit
            )));
        }
        if !self.similarity_threshold.is_finite() {
            return Err(ConfigError::Message(
                "related.similarity_threshold must be a finite number".to_string(),
            ));
        }
        Ok(())
    }
}

impl ServerConfig {
    /// Load defaults, then `config/default.yaml` if present, then `APP_*`
    /// environment variables (`__` separates nested keys, e.g.
    /// `APP_RELATED__MAX_RESULTS`).
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_env(Self::environment())
    }

    /// Load defaults overlaid with a single YAML file.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        Self::with_defaults()?
            .add_source(File::from(path))
            .build()?
            .try_deserialize::<Self>()
            .and_then(Self::validated)
    }

    fn environment() -> Environment {
        Environment::with_prefix("APP")
            .prefix_separator("_")
            .separator("__")
    }

    fn load_with_env(environment: Environment) -> Result<Self, ConfigError> {
        Self::with_defaults()?
            .add_source(File::with_name("config/default").required(false))
            .add_source(environment)
            .build()?
            .try_deserialize::<Self>()
            .and_then(Self::validated)
    }

    fn validated(self) -> Result<Self, ConfigError> {
        self.related.validate()?;
        Ok(self)
    }

    fn with_defaults() -> Result<config::ConfigBuilder<config::builder::DefaultState>, ConfigError>
    {
        Config::builder()
            .set_default("database_url", "app.db")?
            .set_default("bind_address", "127.0.0.1:3000")
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use config::{Environment, Map};

    use super::{RelatedConfig, ServerConfig};

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".yaml")
            .tempfile()
            .expect("temp file");
        writeln!(file, "{contents}").expect("write config");
        file
    }

    fn environment_with(vars: &[(&str, &str)]) -> Environment {
        let source = vars
            .iter()
            .map(|(key, value)| (key.to_string(), value.to_string()))
            .collect::<Map<String, String>>();
        ServerConfig::environment().source(Some(source))
    }

    fn load_with_vars(vars: &[(&str, &str)]) -> ServerConfig {
        ServerConfig::load_with_env(environment_with(vars)).expect("config should load")
    }

    #[test]
    fn related_defaults_match_crate_constants() {
        let config = RelatedConfig::default();

        assert_eq!(config.similarity_threshold, 1.0);
        assert_eq!(config.max_results, 5);
        assert_eq!(config.candidate_limit, 100);
    }

    #[test]
    fn from_file_overrides_defaults() {
        let file = write_config(
            "database_url: posts.db\nrelated:\n  max_results: 2\n  similarity_threshold: 0.5",
        );

        let config = ServerConfig::from_file(file.path()).expect("config should load");

        assert_eq!(config.database_url, "posts.db");
        assert_eq!(config.bind_address, "127.0.0.1:3000");
        assert_eq!(config.related.max_results, 2);
        assert_eq!(config.related.similarity_threshold, 0.5);
        assert_eq!(config.related.candidate_limit, 100);
    }

    #[test]
    fn from_file_without_related_section_uses_defaults() {
        let file = write_config("bind_address: 0.0.0.0:8080");

        let config = ServerConfig::from_file(file.path()).expect("config should load");

        assert_eq!(config.bind_address, "0.0.0.0:8080");
        assert_eq!(config.related, RelatedConfig::default());
    }

    #[test]
    fn single_underscore_prefix_overrides_top_level_and_nested_keys() {
        let config = load_with_vars(&[
            ("APP_RELATED__MAX_RESULTS", "3"),
            ("APP_BIND_ADDRESS", "0.0.0.0:9"),
            ("APP_DATABASE_URL", "env.db"),
        ]);

        assert_eq!(config.related.max_results, 3);
        assert_eq!(config.bind_address, "0.0.0.0:9");
        assert_eq!(config.database_url, "env.db");
        assert_eq!(config.related.candidate_limit, 100);
    }

    #[test]
    fn unrelated_variables_are_ignored() {
        let config = load_with_vars(&[("OTHER_RELATED__MAX_RESULTS", "3")]);

        assert_eq!(config.related.max_results, 5);
    }

    #[test]
    fn out_of_range_candidate_limit_from_env_is_rejected() {
        let result = ServerConfig::load_with_env(environment_with(&[(
            "APP_RELATED__CANDIDATE_LIMIT",
            "1000",
        )]));

        assert!(result.is_err());
    }

    #[test]
    fn candidate_limit_outside_bounds_is_rejected() {
        for limit in ["-1", "0", "101"] {
            let file = write_config(&format!("related:\n  candidate_limit: {limit}"));

            let result = ServerConfig::from_file(file.path());

            assert!(result.is_err(), "candidate_limit {limit} should be rejected");
        }
    }

    #[test]
    fn lower_candidate_limit_is_accepted() {
        let file = write_config("related:\n  candidate_limit: 20");

        let config = ServerConfig::from_file(file.path()).expect("config should load");

        assert_eq!(config.related.candidate_limit, 20);
    }
}
