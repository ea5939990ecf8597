use thiserror::Error;

#[derive(Error, Debug)]
pub enum RulesError {
    #[error("Unknown preset: {0}")]
    UnknownPreset(String),

    #[error("Unknown team: {0}")]
    UnknownTeam(String),

    #[error("Unknown setting: {0}")]
    UnknownField(String),

    #[error("Unknown channel: {0}")]
    UnknownChannel(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid rules file: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Failed to write rules: {0}")]
    WriteError(#[from] toml::ser::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, RulesError>;
