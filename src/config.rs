//! Pager configuration
//!
//! Optional YAML file controlling the cursor query key, the summary wording
//! and which response headers carry pagination data.
//!
//! ```yaml
//! cursor_param: cursor
//! summary_noun: matching events
//! link_header: link
//! hits_header: x-hits
//! log_level: debug
//! ```

use crate::error::{Error, Result};
use crate::pagination::DEFAULT_CURSOR_PARAM;
use crate::types::LogLevel;
use reqwest::header::HeaderName;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Settings shared by the controller and the data-source boundary
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PagerConfig {
    /// Query key holding the cursor token
    #[serde(default = "default_cursor_param")]
    pub cursor_param: String,

    /// Noun appended to the summary line
    #[serde(default = "default_summary_noun")]
    pub summary_noun: String,

    /// Response header carrying pagination links
    #[serde(default = "default_link_header")]
    pub link_header: String,

    /// Response header carrying the total item count
    #[serde(default = "default_hits_header")]
    pub hits_header: String,

    /// Log level for the CLI (overridden by `--verbose`)
    #[serde(default)]
    pub log_level: Option<LogLevel>,
}

fn default_cursor_param() -> String {
    DEFAULT_CURSOR_PARAM.to_string()
}

fn default_summary_noun() -> String {
    "matching events".to_string()
}

fn default_link_header() -> String {
    "link".to_string()
}

fn default_hits_header() -> String {
    "x-hits".to_string()
}

impl Default for PagerConfig {
    fn default() -> Self {
        Self {
            cursor_param: default_cursor_param(),
            summary_noun: default_summary_noun(),
            link_header: default_link_header(),
            hits_header: default_hits_header(),
            log_level: None,
        }
    }
}

impl PagerConfig {
    /// Check field values
    pub fn validate(&self) -> Result<()> {
        if self.cursor_param.trim().is_empty() {
            return Err(Error::missing_field("cursor_param"));
        }

        for (field, value) in [
            ("link_header", &self.link_header),
            ("hits_header", &self.hits_header),
        ] {
            if value.is_empty() {
                return Err(Error::missing_field(field));
            }
            HeaderName::from_bytes(value.as_bytes()).map_err(|e| {
                Error::config(format!("'{field}' is not a valid header name: {e}"))
            })?;
        }

        Ok(())
    }
}

/// Load a pager config from a YAML file
pub fn load_config(path: impl AsRef<Path>) -> Result<PagerConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            Error::FileNotFound {
                path: path.display().to_string(),
            }
        } else {
            Error::Io(e)
        }
    })?;
    load_config_from_str(&content)
}

/// Load a pager config from a YAML string
pub fn load_config_from_str(yaml: &str) -> Result<PagerConfig> {
    // an empty file means all defaults
    if yaml.trim().is_empty() {
        return Ok(PagerConfig::default());
    }

    let config: PagerConfig = serde_yaml::from_str(yaml)?;

    config.validate()?;
    Ok(config)
}
