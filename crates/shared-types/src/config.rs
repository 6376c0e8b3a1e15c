use serde::{Deserialize, Serialize};

use crate::NavigationCatalog;

/// Top-level config file structure matching `config.toml`.
///
/// Every section has a default so that a missing or partial file still
/// yields a usable sidebar.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub navigation: NavigationCatalog,
}
