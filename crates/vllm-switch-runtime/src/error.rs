use std::fmt;
use std::path::PathBuf;
use std::process::ExitStatus;

/// Result type for vllm-switch-runtime operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur in the runtime layer
#[derive(Debug)]
pub enum Error {
    /// IO operation failed
    Io(std::io::Error),

    /// Settings file could not be parsed or written
    Config(String),

    /// Neither the environment file nor its template could be read
    Template {
        path: PathBuf,
        source: std::io::Error,
    },

    /// External command could not be started
    Spawn {
        command: String,
        source: std::io::Error,
    },

    /// External command ran but exited unsuccessfully
    CommandFailed { command: String, status: ExitStatus },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Io(err) => write!(f, "IO error: {}", err),
            Error::Config(msg) => write!(f, "Configuration error: {}", msg),
            Error::Template { path, source } => {
                write!(f, "Failed to read {}: {}", path.display(), source)
            }
            Error::Spawn { command, source } => {
                write!(f, "Failed to run '{}': {}", command, source)
            }
            Error::CommandFailed { command, status } => match status.code() {
                Some(code) => write!(f, "'{}' exited with status {}", command, code),
                None => write!(f, "'{}' was terminated by a signal", command),
            },
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(err) => Some(err),
            Error::Template { source, .. } | Error::Spawn { source, .. } => Some(source),
            Error::Config(_) | Error::CommandFailed { .. } => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}
