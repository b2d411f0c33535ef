//! Configuration loading from disk and environment.

use std::fs;
use std::num::ParseIntError;
use std::path::Path;

use thiserror::Error;

use crate::config::schema::EngineConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Environment variable selecting the listening port.
pub const PORT_ENV: &str = "PORT";

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid {var} value `{value}`: {source}")]
    Env {
        var: &'static str,
        value: String,
        #[source]
        source: ParseIntError,
    },

    #[error("Validation failed: {}", join_errors(.0))]
    Validation(Vec<ValidationError>),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Parse a TOML document into a configuration without validating it.
pub fn parse_config(content: &str) -> Result<EngineConfig, ConfigError> {
    Ok(toml::from_str(content)?)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<EngineConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config = parse_config(&content)?;

    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

/// Apply a raw `PORT` value, if present, to the listener.
pub fn apply_port_env(config: &mut EngineConfig, value: Option<&str>) -> Result<(), ConfigError> {
    if let Some(raw) = value {
        let port = raw.trim().parse::<u16>().map_err(|source| ConfigError::Env {
            var: PORT_ENV,
            value: raw.to_string(),
            source,
        })?;
        config.listener.port = port;
    }
    Ok(())
}

/// Build the effective configuration.
///
/// Precedence: defaults < file < `PORT` < `port_override`.
pub fn resolve_config(
    path: Option<&Path>,
    port_override: Option<u16>,
) -> Result<EngineConfig, ConfigError> {
    let mut config = match path {
        Some(path) => load_config(path)?,
        None => EngineConfig::default(),
    };

    let port_env = std::env::var(PORT_ENV).ok();
    apply_port_env(&mut config, port_env.as_deref())?;

    if let Some(port) = port_override {
        config.listener.port = port;
    }

    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::LogFormat;

    #[test]
    fn test_parse_partial_document_keeps_defaults() {
        let config = parse_config(
            r#"
            [listener]
            port = 9100

            [observability]
            log_format = "json"
            "#,
        )
        .unwrap();

        assert_eq!(config.listener.port, 9100);
        assert_eq!(config.listener.host, "0.0.0.0");
        assert_eq!(config.observability.log_format, LogFormat::Json);
        assert_eq!(config.timeouts.request_secs, 30);
    }

    #[test]
    fn test_parse_rejects_unknown_log_format() {
        let err = parse_config("[observability]\nlog_format = \"xml\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_port_env_overrides_listener() {
        let mut config = EngineConfig::default();
        apply_port_env(&mut config, Some("8123")).unwrap();
        assert_eq!(config.listener.port, 8123);

        apply_port_env(&mut config, None).unwrap();
        assert_eq!(config.listener.port, 8123);
    }

    #[test]
    fn test_malformed_port_env_is_an_error() {
        let mut config = EngineConfig::default();
        let err = apply_port_env(&mut config, Some("eighty")).unwrap_err();
        assert!(matches!(err, ConfigError::Env { var: "PORT", .. }));
        assert_eq!(config.listener.port, 8000);
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let err = load_config(Path::new("/nonexistent/turbomark.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }

    #[test]
    fn test_validation_errors_are_joined() {
        let err = ConfigError::Validation(vec![
            ValidationError::EmptyHost,
            ValidationError::ZeroBodyLimit,
        ]);
        assert_eq!(
            err.to_string(),
            "Validation failed: listener.host must not be empty, security.max_body_size must be greater than zero"
        );
    }
}
