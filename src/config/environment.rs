//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del entorno y variables de configuración.

use std::env;

use crate::utils::errors::{config_error, AppResult};

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub environment: String,
    pub port: u16,
    pub host: String,
    pub cors_origins: Vec<String>,
    pub log_level: Option<String>,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            port: 3000,
            host: "0.0.0.0".to_string(),
            cors_origins: Vec::new(),
            log_level: None,
        }
    }
}

impl EnvironmentConfig {
    /// Leer la configuración del entorno, con valores por defecto
    pub fn from_env() -> AppResult<Self> {
        let defaults = Self::default();

        let port = match env::var("PORT") {
            Ok(value) => value.parse().map_err(|_| config_error("PORT", &value))?,
            Err(_) => defaults.port,
        };

        Ok(Self {
            environment: env::var("ENVIRONMENT").unwrap_or(defaults.environment),
            port,
            host: env::var("HOST").unwrap_or(defaults.host),
            cors_origins: env::var("CORS_ORIGINS")
                .map(|origins| parse_origins(&origins))
                .unwrap_or_default(),
            log_level: env::var("LOG_LEVEL").ok(),
        })
    }

    /// Verificar si estamos en modo desarrollo
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Verificar si estamos en modo producción
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// Obtener la dirección del servidor
    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Nivel de log: `LOG_LEVEL` o según el entorno
    pub fn tracing_level(&self) -> tracing::Level {
        self.log_level
            .as_deref()
            .and_then(|level| level.parse().ok())
            .unwrap_or(if self.is_development() {
                tracing::Level::DEBUG
            } else {
                tracing::Level::INFO
            })
    }
}

fn parse_origins(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_skips_blanks() {
        let origins = parse_origins("http://a.com, ,http://b.com ,");
        assert_eq!(origins, vec!["http://a.com", "http://b.com"]);
    }

    #[test]
    fn test_tracing_level_defaults_by_environment() {
        let dev = EnvironmentConfig::default();
        assert_eq!(dev.tracing_level(), tracing::Level::DEBUG);

        let prod = EnvironmentConfig {
            environment: "production".to_string(),
            ..EnvironmentConfig::default()
        };
        assert!(prod.is_production());
        assert_eq!(prod.tracing_level(), tracing::Level::INFO);
    }

    #[test]
    fn test_explicit_log_level_wins() {
        let config = EnvironmentConfig {
            log_level: Some("warn".to_string()),
            ..EnvironmentConfig::default()
        };
        assert_eq!(config.tracing_level(), tracing::Level::WARN);
        assert_eq!(config.server_url(), "0.0.0.0:3000");
    }
}
