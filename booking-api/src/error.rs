use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    #[error("Service failure: {0}")]
    Io(#[from] std::io::Error),
}
