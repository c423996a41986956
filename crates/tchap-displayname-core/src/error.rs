use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CoreError {
    #[error("invalid email address: {0}")]
    InvalidAddressFormat(String),
    #[error("malformed email identity stage: {0}")]
    MalformedEmailStage(String),
    #[error("invalid module config: {0}")]
    InvalidConfig(String),
}
