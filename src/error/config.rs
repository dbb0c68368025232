use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// Check `.env.example` for the variables the application requires.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
}
