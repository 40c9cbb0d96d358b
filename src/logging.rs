//! Logging setup.
//!
//! The terminal owns stdout/stderr while the game runs, so log lines go to a file
//! or nowhere. `RUST_LOG` filters as usual and defaults to `info`.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

/// Logger writing to `target`, filtered by `RUST_LOG`.
pub fn builder(target: Box<dyn Write + Send + 'static>) -> Builder {
    let mut builder = Builder::from_env(Env::default().default_filter_or("info"));
    builder
        .target(Target::Pipe(target))
        .format_timestamp_millis()
        .format_module_path(false)
        .format_target(true);
    builder
}

/// Install the global logger when a log path is configured.
///
/// Returns whether a logger was installed.
pub fn init(log_path: Option<&Path>) -> Result<bool> {
    let Some(path) = log_path else {
        return Ok(false);
    };
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))?;
    builder(Box::new(file))
        .try_init()
        .context("installing logger")?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::{Level, Log, Record};

    #[test]
    fn no_path_means_no_logger() {
        assert!(!init(None).unwrap());
    }

    #[test]
    fn builder_writes_to_target() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("pipes.log");
        let file = std::fs::File::create(&path).unwrap();

        let logger = builder(Box::new(file)).parse_filters("debug").build();
        logger.log(
            &Record::builder()
                .args(format_args!("puzzle solved"))
                .level(Level::Info)
                .target("tui_pipes::app")
                .build(),
        );
        logger.flush();

        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.contains("puzzle solved"));
        assert!(text.contains("INFO"));
    }
}
