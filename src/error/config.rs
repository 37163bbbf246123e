use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is not set.
    ///
    /// The application requires this environment variable to be defined. Check the
    /// documentation or `.env.example` file for required configuration variables.
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),

    /// Environment variable is set but cannot be parsed into the expected type.
    ///
    /// Applies to numeric ids such as `DISCORD_GUILD_ID` and the role id
    /// variables, which must be valid unsigned integers.
    #[error("Environment variable {0} has an invalid value")]
    InvalidEnvVar(String),
}
