use serde::Deserialize;

/// Root application configuration. Loaded from environment variables
/// with the prefix `ICP_EXPLORER__`.
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub reporting: ReportingConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Default dataset path used when no upload/override is supplied.
    #[serde(default = "default_source_path")]
    pub source_path: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ReportingConfig {
    #[serde(default = "default_top_roles")]
    pub top_roles: usize,
    #[serde(default = "default_top_places")]
    pub top_places: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,
}

// Default functions
fn default_source_path() -> String {
    "data/icp_segments_final.csv".to_string()
}
fn default_top_roles() -> usize {
    20
}
fn default_top_places() -> usize {
    10
}
fn default_preview_rows() -> usize {
    20
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            source_path: default_source_path(),
        }
    }
}

impl Default for ReportingConfig {
    fn default() -> Self {
        Self {
            top_roles: default_top_roles(),
            top_places: default_top_places(),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            preview_rows: default_preview_rows(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data: DataConfig::default(),
            reporting: ReportingConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn load() -> Result<Self, config::ConfigError> {
        let builder = config::Config::builder().add_source(
            config::Environment::with_prefix("ICP_EXPLORER")
                .separator("__")
                .try_parsing(true)
                .list_separator(","),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
