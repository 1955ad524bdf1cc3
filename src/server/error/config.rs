use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required environment variable is not set. See `.env.example`.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// An environment variable is set but cannot be used.
    ///
    /// `APP_URL` must be an absolute URL since pagination links are built from it.
    #[error("Invalid value for environment variable {name}: {reason}")]
    InvalidEnvVar {
        /// Name of the variable
        name: String,
        /// Why the value was rejected
        reason: String,
    },
}
