//=========================================================================
// Blackjack - Binary Entry Point
//
// Installs logging, builds the game and runs it until the window closes,
// the player quits or Ctrl-C is pressed. Fatal errors are logged and
// reported through the exit status.
//
// Logging:
//   Debug output from the game goes to a timestamped file under `logs/`
//   (RUST_LOG overrides the filter). If the file cannot be created, logs
//   go to stderr instead.
//
//=========================================================================

use std::fs::{self, File};
use std::io;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use blackjack::GameBuilder;
use log::{error, info, warn};

const LOG_DIR: &str = "logs";
const DEFAULT_FILTER: &str = "info,game=debug,platform=debug";

/// Creates `dir` if needed and opens a log file named after the current time.
fn open_log_file(dir: &Path) -> io::Result<(File, PathBuf)> {
    fs::create_dir_all(dir)?;
    let name = chrono::Local::now()
        .format("blackjack_%Y-%m-%d_%H-%M-%S.log")
        .to_string();
    let path = dir.join(name);
    let file = File::create(&path)?;
    Ok((file, path))
}

fn init_logging() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(DEFAULT_FILTER));

    match open_log_file(Path::new(LOG_DIR)) {
        Ok((file, path)) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
            builder.init();
            info!("Logging to {}", path.display());
        }
        Err(e) => {
            builder.init();
            warn!("Could not open a log file in {}/, logging to stderr: {}", LOG_DIR, e);
        }
    }
}

fn main() -> ExitCode {
    init_logging();

    match GameBuilder::new().build().and_then(|game| game.run()) {
        Ok(()) => {
            info!("Goodbye");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Game failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_is_created_with_a_timestamped_name() {
        let dir = std::env::temp_dir().join(format!("blackjack-logs-{}", std::process::id()));

        let (_file, path) = open_log_file(&dir).unwrap();

        assert!(path.exists(), "Log file should exist at {}", path.display());
        assert_eq!(path.parent(), Some(dir.as_path()));
        let name = path.file_name().unwrap().to_string_lossy().into_owned();
        assert!(name.starts_with("blackjack_") && name.ends_with(".log"), "Unexpected name {}", name);
        assert_eq!(name.len(), "blackjack_2024-01-01_00-00-00.log".len());

        fs::remove_dir_all(&dir).unwrap();
    }
}
