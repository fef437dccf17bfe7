use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError
{
    #[error("terminal error: {0}")]
    Terminal(#[from] io::Error),
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("failed to open log file {}: {source}", .path.display())]
    LogFile
    {
        path: PathBuf,
        source: io::Error,
    },
    #[error("failed to install logger: {0}")]
    Logger(#[from] log::SetLoggerError),
}
