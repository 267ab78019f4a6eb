//! Error types and the single fatal reporting path.
//!
//! Startup failures (window, audio device, asset directory, assets) cannot be
//! recovered from: nothing in the main loop works without them. They travel
//! up to `main` as [`ShellError`] and end the process through
//! [`report_fatal`].

use std::path::PathBuf;

use thiserror::Error;

/// Errors reading or writing the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {reason}")]
    Read { path: PathBuf, reason: String },

    #[error("failed to write config file {path:?}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Fatal application errors.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("could not find the asset directory (searched {searched:?})")]
    AssetDirNotFound { searched: Vec<PathBuf> },

    #[error("failed to load {kind} '{id}' from {path:?}: {reason}")]
    Asset {
        kind: &'static str,
        id: String,
        path: PathBuf,
        reason: String,
    },

    #[error("audio: {0}")]
    Audio(String),

    #[error("failed to create render target: {0}")]
    RenderTarget(String),
}

const BANNER: &str =
    "**************************************************************************";

/// Lines of the fatal report: the banner around the error and its causes.
pub fn fatal_report(err: &dyn std::error::Error) -> Vec<String> {
    let mut lines = vec![
        BANNER.to_string(),
        "An unexpected error has occurred:".to_string(),
        err.to_string(),
    ];
    let mut cause = err.source();
    while let Some(inner) = cause {
        lines.push(format!("  caused by: {}", inner));
        cause = inner.source();
    }
    lines.push("The program will now exit.".to_string());
    lines.push(BANNER.to_string());
    lines
}

/// Report a fatal error once, through the logger, and terminate the process
/// with a failure status.
pub fn report_fatal(err: &dyn std::error::Error) -> ! {
    for line in fatal_report(err) {
        log::error!("{}", line);
    }
    std::process::exit(1);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_asset_error_message_names_the_asset() {
        let err = ShellError::Asset {
            kind: "texture",
            id: "smile".into(),
            path: PathBuf::from("assets/images/smile.png"),
            reason: "file not found".into(),
        };
        let text = err.to_string();
        assert!(text.contains("texture 'smile'"));
        assert!(text.contains("file not found"));
    }

    #[test]
    fn test_config_error_converts() {
        let err: ShellError = ConfigError::Read {
            path: PathBuf::from("config.ini"),
            reason: "bad".into(),
        }
        .into();
        assert!(matches!(err, ShellError::Config(ConfigError::Read { .. })));
    }

    #[test]
    fn test_fatal_report_states_the_error_once_with_its_causes() {
        let err: ShellError = ConfigError::Write {
            path: PathBuf::from("config.ini"),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
        }
        .into();
        let lines = fatal_report(&err);

        assert_eq!(lines.first().map(String::as_str), Some(BANNER));
        assert_eq!(lines.last().map(String::as_str), Some(BANNER));
        let headline = err.to_string();
        assert_eq!(lines.iter().filter(|l| **l == headline).count(), 1);
        assert!(lines.iter().any(|l| l == "  caused by: denied"));
    }
}
