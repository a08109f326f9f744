use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("Unknown {kind} variant: '{value}'")]
    UnknownVariant { kind: &'static str, value: String },

    #[error("No demos selected")]
    NoDemosSelected,
}

impl DemoError {
    pub fn unknown_variant(kind: &'static str, value: impl Into<String>) -> Self {
        Self::UnknownVariant {
            kind,
            value: value.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
