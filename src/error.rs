use std::fmt;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug)]
pub enum Error {
    MissingDelimiter {
        delimiter: String,
    },
    InvalidConfig {
        reason: String,
    },
    FileReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    TomlParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
    IoError(std::io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::MissingDelimiter { delimiter } => {
                write!(
                    f,
                    "input format error: input must contain the delimiter line '{}'",
                    delimiter
                )
            }
            Error::InvalidConfig { reason } => {
                write!(f, "invalid configuration: {}", reason)
            }
            Error::FileReadError { path, source } => {
                write!(f, "failed to read file: {} ({})", path.display(), source)
            }
            Error::TomlParseError { path, source } => {
                write!(
                    f,
                    "failed to parse toml file: {} ({})",
                    path.display(),
                    source
                )
            }
            Error::IoError(err) => {
                write!(f, "io error: {}", err)
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::FileReadError { source, .. } => Some(source),
            Error::TomlParseError { source, .. } => Some(source),
            Error::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::IoError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_delimiter_message_names_delimiter() {
        let err = Error::MissingDelimiter {
            delimiter: "====".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "input format error: input must contain the delimiter line '===='"
        );
    }

    #[test]
    fn test_io_error_exposes_source() {
        use std::error::Error as _;

        let err = Error::from(std::io::Error::other("boom"));
        assert!(err.source().is_some());
        assert!(err.to_string().contains("boom"));
    }
}
