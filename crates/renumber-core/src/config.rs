use crate::error::Error;
use config::{Config, File as ConfigFile};
use serde::Deserialize;

/// Order in which directory entries receive sequence numbers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderPolicy {
    /// Sort entries by file name before numbering.
    #[default]
    Name,
    /// Number entries in whatever order the filesystem yields them.
    Filesystem,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub order: OrderPolicy,
    pub ignore_patterns: Vec<String>,
    pub dry_run: bool,
}

/// Load `Config.toml` from the working directory. A missing file yields defaults.
pub fn load_configuration() -> Result<AppConfig, Error> {
    load_configuration_from("Config")
}

pub fn load_configuration_from(name: &str) -> Result<AppConfig, Error> {
    let builder = Config::builder()
        .add_source(ConfigFile::with_name(name).required(false))
        .build()?;
    Ok(builder.try_deserialize::<AppConfig>()?)
}
