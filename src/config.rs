use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{Result, VersionBumperError};
use crate::version::Version;

/// Represents the complete configuration for version-bumper.
///
/// Every field carries a default, so the tool runs without any config file.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub tagging: TaggingConfig,

    #[serde(default)]
    pub identity: IdentityConfig,

    #[serde(default)]
    pub core_action: CoreActionConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            tagging: TaggingConfig::default(),
            identity: IdentityConfig::default(),
            core_action: CoreActionConfig::default(),
        }
    }
}

fn default_remote() -> String {
    "origin".to_string()
}

fn default_tag_format() -> String {
    "{version}".to_string()
}

fn default_message_format() -> String {
    "Release version {version}".to_string()
}

/// Configuration for the tagging side effect.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct TaggingConfig {
    #[serde(default = "default_remote")]
    pub remote: String,

    #[serde(default = "default_tag_format")]
    pub tag_format: String,

    #[serde(default = "default_message_format")]
    pub message_format: String,
}

impl Default for TaggingConfig {
    fn default() -> Self {
        TaggingConfig {
            remote: default_remote(),
            tag_format: default_tag_format(),
            message_format: default_message_format(),
        }
    }
}

impl TaggingConfig {
    /// Render the tag name for a version using the configured pattern.
    pub fn tag_name(&self, version: Version) -> String {
        self.tag_format.replace("{version}", &version.to_string())
    }

    /// Render the annotated tag message for a version.
    pub fn tag_message(&self, version: Version) -> String {
        self.message_format
            .replace("{version}", &version.to_string())
    }
}

fn default_identity_name() -> String {
    "github-actions[bot]".to_string()
}

fn default_identity_email() -> String {
    "github-actions[bot]@users.noreply.github.com".to_string()
}

/// Committer identity used for annotated tags.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct IdentityConfig {
    #[serde(default = "default_identity_name")]
    pub name: String,

    #[serde(default = "default_identity_email")]
    pub email: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        IdentityConfig {
            name: default_identity_name(),
            email: default_identity_email(),
        }
    }
}

fn default_core_action_repository() -> String {
    "https://github.com/version-bumper/core-action-private.git".to_string()
}

fn default_checkout_dir() -> String {
    "core-action".to_string()
}

fn default_entry_point() -> String {
    "entrypoint.sh".to_string()
}

/// Location of the private core action this step stages and invokes.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct CoreActionConfig {
    #[serde(default = "default_core_action_repository")]
    pub repository: String,

    #[serde(default = "default_checkout_dir")]
    pub checkout_dir: String,

    #[serde(default = "default_entry_point")]
    pub entry_point: String,
}

impl Default for CoreActionConfig {
    fn default() -> Self {
        CoreActionConfig {
            repository: default_core_action_repository(),
            checkout_dir: default_checkout_dir(),
            entry_point: default_entry_point(),
        }
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `versionbumper.toml` in current directory
/// 3. `versionbumper.toml` in the user config directory
/// 4. Default configuration if no file found
///
/// A file that exists but cannot be read or parsed is a fatal configuration
/// error.
pub fn load_config(config_path: Option<&str>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path).map_err(|e| {
            VersionBumperError::config(format!("Cannot read config file '{}': {}", path, e))
        })?
    } else if Path::new("./versionbumper.toml").exists() {
        fs::read_to_string("./versionbumper.toml").map_err(|e| {
            VersionBumperError::config(format!("Cannot read config file: {}", e))
        })?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("versionbumper.toml");
        if config_path.exists() {
            fs::read_to_string(&config_path).map_err(|e| {
                VersionBumperError::config(format!(
                    "Cannot read config file '{}': {}",
                    config_path.display(),
                    e
                ))
            })?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    toml::from_str(&config_str)
        .map_err(|e| VersionBumperError::config(format!("Cannot parse config file: {}", e)))
}
