use crate::error::GameError;
use env_logger::{Builder, Env, Target};
use std::fs::File;
use std::path::Path;

/// The game owns the terminal, so log records only go to a file.
/// Without a path no logger is installed and records are dropped.
pub fn init(path: Option<&Path>) -> Result<(), GameError>
{
    let Some(path) = path else {
        return Ok(());
    };

    let file = File::create(path).map_err(|source| GameError::LogFile {
        path: path.to_path_buf(),
        source,
    })?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()?;

    log::info!("[Logging] Writing logs to {}", path.display());
    Ok(())
}
