use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::abstract_factory::FactoryVariant;
use crate::bridge::{AbstractionKind, Platform};
use crate::error::{DemoError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum DemoKind {
    AbstractFactory,
    Bridge,
    Singleton,
}

impl DemoKind {
    pub const ALL: [DemoKind; 3] = [DemoKind::AbstractFactory, DemoKind::Bridge, DemoKind::Singleton];
}

impl FromStr for DemoKind {
    type Err = DemoError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "abstract-factory" => Ok(DemoKind::AbstractFactory),
            "bridge" => Ok(DemoKind::Bridge),
            "singleton" => Ok(DemoKind::Singleton),
            _ => Err(DemoError::unknown_variant("demo", s)),
        }
    }
}

impl TryFrom<String> for DemoKind {
    type Error = DemoError;

    fn try_from(value: String) -> std::result::Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for DemoKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemoKind::AbstractFactory => write!(f, "Abstract Factory"),
            DemoKind::Bridge => write!(f, "Bridge"),
            DemoKind::Singleton => write!(f, "Singleton"),
        }
    }
}

/// Which demos to run and which variants to build them from.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    pub demos: Vec<DemoKind>,
    pub factory: FactoryVariant,
    pub abstraction: AbstractionKind,
    pub platform: Platform,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            demos: DemoKind::ALL.to_vec(),
            factory: FactoryVariant::default(),
            abstraction: AbstractionKind::default(),
            platform: Platform::default(),
        }
    }
}

impl DemoConfig {
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| DemoError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }
}
