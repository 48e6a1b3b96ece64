//! Configuration loader with TOML parsing and environment variable overrides

use super::schema::AuditServiceConfig;
use super::secret::secret_string;
use crate::domain::errors::AuditError;
use crate::domain::result::Result;
use regex::Regex;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;

/// Prefix for environment overrides
pub const ENV_PREFIX: &str = "EDITAL_AUDIT_";

/// Loads configuration from a TOML file
///
/// This function:
/// 1. Reads the TOML file
/// 2. Performs environment variable substitution (${VAR} syntax)
/// 3. Parses the TOML into AuditServiceConfig
/// 4. Applies environment variable overrides (EDITAL_AUDIT_* prefix)
/// 5. Validates the configuration
///
/// # Errors
///
/// Returns [`AuditError::Configuration`] if the file cannot be read or
/// parsed, a referenced variable is unset, or validation fails (including a
/// missing or malformed encryption key).
///
/// # Examples
///
/// ```no_run
/// use edital_audit::config::load_config;
///
/// let config = load_config("edital-audit.toml").expect("Failed to load config");
/// ```
pub fn load_config(path: impl AsRef<Path>) -> Result<AuditServiceConfig> {
    let path = path.as_ref();

    if !path.exists() {
        return Err(AuditError::Configuration(format!(
            "Configuration file not found: {}",
            path.display()
        )));
    }

    let contents = fs::read_to_string(path).map_err(|e| {
        AuditError::Configuration(format!(
            "Failed to read configuration file {}: {}",
            path.display(),
            e
        ))
    })?;

    load_config_from_str(&contents)
}

/// Loads configuration from TOML text
///
/// Same pipeline as [`load_config`] minus the file read.
pub fn load_config_from_str(contents: &str) -> Result<AuditServiceConfig> {
    let contents = substitute_env_vars(contents)?;

    let mut config: AuditServiceConfig = toml::from_str(&contents)
        .map_err(|e| AuditError::Configuration(format!("Failed to parse TOML: {}", e)))?;

    apply_env_overrides(&mut config)?;

    config.validate().map_err(|e| {
        AuditError::Configuration(format!("Configuration validation failed: {}", e))
    })?;

    Ok(config)
}

fn placeholder_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\$\{([A-Z_][A-Z0-9_]*)\}").expect("placeholder pattern is valid")
    })
}

/// Substitutes environment variables in the format ${VAR_NAME}
///
/// Comment lines are left untouched. All missing variables are reported in
/// a single error.
fn substitute_env_vars(input: &str) -> Result<String> {
    let re = placeholder_regex();
    let mut result = String::with_capacity(input.len());
    let mut missing_vars: Vec<String> = Vec::new();

    for line in input.lines() {
        if line.trim_start().starts_with('#') {
            result.push_str(line);
            result.push('\n');
            continue;
        }

        let mut processed_line = line.to_string();
        for cap in re.captures_iter(line) {
            let var_name = &cap[1];
            match std::env::var(var_name) {
                Ok(value) => {
                    let placeholder = format!("${{{}}}", var_name);
                    processed_line = processed_line.replace(&placeholder, &value);
                }
                Err(_) => {
                    if !missing_vars.iter().any(|v| v == var_name) {
                        missing_vars.push(var_name.to_string());
                    }
                }
            }
        }
        result.push_str(&processed_line);
        result.push('\n');
    }

    if !missing_vars.is_empty() {
        return Err(AuditError::Configuration(format!(
            "Missing required environment variables: {}",
            missing_vars.join(", ")
        )));
    }

    Ok(result)
}

fn env_override(key: &str) -> Option<String> {
    std::env::var(format!("{ENV_PREFIX}{key}")).ok()
}

/// Applies environment variable overrides using the EDITAL_AUDIT_* prefix
///
/// Variables follow the pattern `EDITAL_AUDIT_<SECTION>_<KEY>`, for example
/// `EDITAL_AUDIT_AUDIT_ENCRYPTION_KEY` or `EDITAL_AUDIT_STORE_TARGET`.
fn apply_env_overrides(config: &mut AuditServiceConfig) -> Result<()> {
    if let Some(val) = env_override("APPLICATION_LOG_LEVEL") {
        config.application.log_level = val;
    }

    if let Some(val) = env_override("AUDIT_ENCRYPTION_KEY") {
        config.audit.encryption_key = Some(secret_string(val));
    }

    if let Some(val) = env_override("STORE_TARGET") {
        config.store_target = val.parse().map_err(AuditError::Configuration)?;
    }

    if let Some(val) = env_override("FILE_PATH") {
        config.file.get_or_insert_with(Default::default).path = val.into();
    }

    // PostgreSQL overrides (only if PostgreSQL is configured)
    if let Some(ref mut pg_config) = config.postgresql {
        if let Some(val) = env_override("POSTGRESQL_CONNECTION_STRING") {
            pg_config.connection_string = secret_string(val);
        }
        if let Some(val) = env_override("POSTGRESQL_MAX_CONNECTIONS") {
            pg_config.max_connections = val.parse().map_err(|_| {
                AuditError::Configuration(format!(
                    "{ENV_PREFIX}POSTGRESQL_MAX_CONNECTIONS must be a positive integer, got '{val}'"
                ))
            })?;
        }
        if let Some(val) = env_override("POSTGRESQL_SSL_MODE") {
            pg_config.ssl_mode = val;
        }
    }

    if let Some(val) = env_override("LOGGING_LOCAL_ENABLED") {
        config.logging.local_enabled = val.parse().map_err(|_| {
            AuditError::Configuration(format!(
                "{ENV_PREFIX}LOGGING_LOCAL_ENABLED must be 'true' or 'false', got '{val}'"
            ))
        })?;
    }
    if let Some(val) = env_override("LOGGING_LOCAL_PATH") {
        config.logging.local_path = val;
    }

    Ok(())
}
