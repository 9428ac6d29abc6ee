//! Session configuration files.
//!
//! ```json
//! { "arch": "arm", "mode": "thumb+mclass", "detail": true,
//!   "skipdata": { "mnemonic": "db" } }
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::options::{Mode, Syntax};
use crate::Architecture;

/// Mode as written in a config file: raw bits or a mode expression.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModeSpec {
    Bits(u32),
    Named(String),
}

impl Default for ModeSpec {
    fn default() -> Self {
        ModeSpec::Bits(0)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkipDataConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mnemonic: Option<String>,
}

/// Everything needed to open and configure a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    pub arch: Architecture,
    #[serde(default)]
    pub mode: ModeSpec,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub syntax: Option<Syntax>,
    #[serde(default)]
    pub detail: bool,
    /// Present means skip-data is on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skipdata: Option<SkipDataConfig>,
}

impl SessionConfig {
    pub fn new(arch: Architecture, mode: Mode) -> Self {
        SessionConfig {
            arch,
            mode: ModeSpec::Bits(mode.bits()),
            syntax: None,
            detail: false,
            skipdata: None,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::debug!("loading session config from {}", path.display());
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// The configured mode; mode expressions are parsed here.
    pub fn mode(&self) -> Result<Mode> {
        match &self.mode {
            ModeSpec::Bits(bits) => Ok(Mode::from_bits(*bits)),
            ModeSpec::Named(name) => name.parse(),
        }
    }
}
