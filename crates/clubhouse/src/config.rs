use shared_types::{AppConfig, AppError, NavigationCatalog};
use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};

/// Path to the config file, relative to the working directory.
const CONFIG_PATH: &str = "config.toml";

/// Environment variable overriding [`CONFIG_PATH`].
const CONFIG_PATH_ENV: &str = "CLUBHOUSE_CONFIG";

/// Resolve the config path, honouring `.env` and `CLUBHOUSE_CONFIG`.
pub fn config_path() -> PathBuf {
    let _ = dotenvy::dotenv();
    std::env::var(CONFIG_PATH_ENV)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(CONFIG_PATH))
}

/// Parse and validate a config document.
pub fn parse_config(contents: &str) -> Result<AppConfig, AppError> {
    let config: AppConfig = toml::from_str(contents)
        .map_err(|e| AppError::bad_request(format!("Invalid config: {e}")))?;
    validate_catalog(&config.navigation)?;
    Ok(config)
}

/// Reject catalogs whose gating cannot be honoured: admin entries must name
/// a capability, base entries must not, and ids must be unique.
pub fn validate_catalog(catalog: &NavigationCatalog) -> Result<(), AppError> {
    let mut field_errors = HashMap::new();
    let mut seen = HashSet::new();

    for (i, item) in catalog.base.iter().enumerate() {
        if item.requires.is_some() {
            field_errors.insert(
                format!("navigation.base[{i}].requires"),
                format!("base entry '{}' cannot require a capability", item.id),
            );
        }
        if !seen.insert(item.id.as_str()) {
            field_errors.insert(
                format!("navigation.base[{i}].id"),
                format!("duplicate navigation id '{}'", item.id),
            );
        }
    }

    for (i, item) in catalog.admin.iter().enumerate() {
        if item.requires.is_none() {
            field_errors.insert(
                format!("navigation.admin[{i}].requires"),
                format!("admin entry '{}' must require a capability", item.id),
            );
        }
        if !seen.insert(item.id.as_str()) {
            field_errors.insert(
                format!("navigation.admin[{i}].id"),
                format!("duplicate navigation id '{}'", item.id),
            );
        }
    }

    if field_errors.is_empty() {
        Ok(())
    } else {
        Err(AppError::validation("Invalid navigation catalog", field_errors))
    }
}

/// Read config from `path`. A missing, unparseable or invalid file falls
/// back to the built-in defaults.
pub fn load_config_from(path: &Path) -> AppConfig {
    let contents = match std::fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Config not found, using defaults");
            return AppConfig::default();
        }
    };
    match parse_config(&contents) {
        Ok(config) => {
            tracing::info!(
                path = %path.display(),
                base = config.navigation.base.len(),
                admin = config.navigation.admin.len(),
                "Config loaded"
            );
            config
        }
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "Config rejected, using defaults");
            AppConfig::default()
        }
    }
}

/// Load config from [`config_path`].
pub fn load_config() -> AppConfig {
    load_config_from(&config_path())
}
