//! Demo configuration (polyui.toml)
//!
//! The defaults reproduce the fixed demonstration exactly; a polyui.toml
//! found in a standard location can override the platform run order and the
//! sample widget contents. Absence of the file is not an error.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::errors::UiError;

/// Demo configuration loaded from polyui.toml
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DemoConfig {
    /// Platform tags to demonstrate, in order
    #[serde(default = "default_platforms")]
    pub platforms: Vec<String>,

    /// Sample contents assigned to buttons, in creation order
    #[serde(default = "default_buttons")]
    pub buttons: Vec<String>,

    /// Sample contents assigned to text boxes, in creation order
    #[serde(default = "default_text_boxes")]
    pub text_boxes: Vec<String>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            platforms: default_platforms(),
            buttons: default_buttons(),
            text_boxes: default_text_boxes(),
        }
    }
}

fn default_platforms() -> Vec<String> {
    vec!["iOS".to_string(), "Windows".to_string(), "Android".to_string()]
}

fn default_buttons() -> Vec<String> {
    vec![
        "BigPurpleButton".to_string(),
        "SmallButton".to_string(),
        "Baton".to_string(),
    ]
}

fn default_text_boxes() -> Vec<String> {
    vec![String::new(), "EmptyTextBox".to_string(), "xoBtxeT".to_string()]
}

impl DemoConfig {
    /// Find polyui.toml in standard locations
    pub fn find_config_path() -> Option<PathBuf> {
        // Check in order: user config dir, exe dir, cwd
        let candidates = [
            dirs::config_dir().map(|p| p.join("polyui").join("polyui.toml")),
            std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|d| d.join("polyui.toml"))),
            Some(PathBuf::from("polyui.toml")),
        ];

        for candidate in candidates.into_iter().flatten() {
            if candidate.exists() {
                return Some(candidate);
            }
        }
        None
    }

    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, UiError> {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents).map_err(|e| UiError::Config(e.to_string()))
    }

    /// Load from the standard locations, falling back to defaults
    pub fn load_or_default() -> Self {
        match Self::find_config_path() {
            Some(path) => match Self::load(&path) {
                Ok(config) => {
                    log!("Loaded demo config from {:?}", path);
                    config
                }
                Err(e) => {
                    log!("Failed to load {:?}: {}, using defaults", path, e);
                    Self::default()
                }
            },
            None => Self::default(),
        }
    }
}
