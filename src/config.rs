//! TOML configuration for hosts.
//!
//! ```toml
//! [crt]
//! curvature = 0.2
//! scanlineCount = 240.0
//!
//! [sampler]
//! filter = "nearest"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{CrtError, CrtResult};
use crate::params::CrtParams;
use crate::texture2d::SampleFilter;

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SamplerConfig {
    pub filter: SampleFilter,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CrtConfig {
    pub crt: CrtParams,
    pub sampler: SamplerConfig,
}

impl CrtConfig {
    pub fn from_toml_str(source: &str) -> CrtResult<Self> {
        Ok(toml::from_str(source)?)
    }

    pub fn load(path: impl AsRef<Path>) -> CrtResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path).map_err(|source| CrtError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_toml_str(&source)?;
        info!(path = %path.display(), "loaded crt config");
        Ok(config)
    }

    pub fn to_toml_string(&self) -> CrtResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }
}
