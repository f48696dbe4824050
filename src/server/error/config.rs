use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),
    #[error("Invalid value for environment variable {name}: {value}")]
    InvalidEnvVar { name: &'static str, value: String },
}
