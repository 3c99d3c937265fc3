use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{0} must be set")]
    Missing(&'static str),

    #[error("{name} must be at least {min} bytes long")]
    TooShort { name: &'static str, min: usize },

    #[error("{0} is set to a placeholder value; generate a random secret")]
    Placeholder(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}
