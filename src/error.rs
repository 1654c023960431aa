
use thiserror::Error;

#[derive(Error, Debug)]
pub enum KinsfolkError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Input error: {0}")]
    Input(String),
    #[error("No subject given for the record")]
    MissingSubject,
    #[error("\"{value}\" is not a valid date")]
    MalformedDate { value: String },
    #[error("\"{value}\" is not a valid age")]
    MalformedAge { value: String },
    #[error("\"{value}\" is not a FamilySearch record URL")]
    MalformedReferenceUrl { value: String },
    #[error("\"{value}\" contains a tab or line break")]
    MalformedReferenceText { value: String },
}

impl KinsfolkError {
    /// Validation failures are caused by what the user typed, everything else by the environment.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::MissingSubject
                | Self::MalformedDate { .. }
                | Self::MalformedAge { .. }
                | Self::MalformedReferenceUrl { .. }
                | Self::MalformedReferenceText { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, KinsfolkError>;

// Helper conversions
impl From<::config::ConfigError> for KinsfolkError {
    fn from(e: ::config::ConfigError) -> Self { Self::Config(e.to_string()) }
}
impl From<serde_json::Error> for KinsfolkError {
    fn from(e: serde_json::Error) -> Self { Self::Input(e.to_string()) }
}
impl From<std::io::Error> for KinsfolkError {
    fn from(e: std::io::Error) -> Self { Self::Input(e.to_string()) }
}
