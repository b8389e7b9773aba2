//! Roster configuration (JSON).
//!
//! ```json
//! { "ducks": [ { "name": "Donald", "flight": "simple" } ] }
//! ```
//!
//! `flight` は文字列のまま読み込み、Duck 生成時に検証します。

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::MallardError;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlockConfig {
    #[serde(default)]
    pub ducks: Vec<DuckConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DuckConfig {
    pub name: String,
    pub flight: String,
}

impl FlockConfig {
    /// Load a roster from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, MallardError> {
        let path = path.as_ref();
        tracing::info!("Loading roster from {}", path.display());

        let bytes = std::fs::read(path).map_err(|source| MallardError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        serde_json::from_slice(&bytes).map_err(|source| MallardError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// The two ducks flown when no roster is given.
    pub fn demo() -> Self {
        Self {
            ducks: vec![
                DuckConfig {
                    name: "Donald".to_string(),
                    flight: "simple".to_string(),
                },
                DuckConfig {
                    name: "Jetson".to_string(),
                    flight: "jet".to_string(),
                },
            ],
        }
    }
}
