use thiserror::Error;

/// Boundary failures for a snapshot that cannot be trusted.
///
/// Decisions themselves never fail; only a malformed frame is surfaced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SnapshotError {
    #[error("Invalid team size for {team}: expected {expected}, found {found}")]
    InvalidTeamSize {
        team: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Field {field} has {found} entries, expected {expected}")]
    LengthMismatch {
        field: &'static str,
        expected: usize,
        found: usize,
    },

    #[error("Non-finite value in {field} at index {index}")]
    NonFinite { field: &'static str, index: usize },

    #[error("Unknown game mode: {0}")]
    UnknownGameMode(i64),

    #[error("Invalid ball owner team: {0}")]
    InvalidOwnerTeam(i64),

    #[error("Ball owner index {index} out of range for team of {team_size}")]
    OwnerOutOfRange { index: i64, team_size: usize },

    #[error("Malformed observation: {0}")]
    Malformed(String),
}

impl From<serde_json::Error> for SnapshotError {
    fn from(err: serde_json::Error) -> Self {
        SnapshotError::Malformed(err.to_string())
    }
}

/// Configuration loading and validation failures
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("YAML parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid threshold {name}: {reason}")]
    InvalidThreshold { name: &'static str, reason: String },
}

pub type Result<T> = std::result::Result<T, SnapshotError>;
