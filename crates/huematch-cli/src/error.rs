//! Errors raised by the command-line layer.

use std::path::PathBuf;

use huematch_core::TransferError;

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to decode {}: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("failed to encode {}: {source}", path.display())]
    Encode {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid options file {}: {source}", path.display())]
    Options {
        path: PathBuf,
        source: serde_json::Error,
    },

    #[error("failed to serialize report: {0}")]
    Report(#[source] serde_json::Error),

    #[error(transparent)]
    Transfer(#[from] TransferError),
}

impl CliError {
    /// Short message for the terminal, without the error chain.
    pub fn user_message(&self) -> String {
        match self {
            Self::Decode { path, .. } => format!(
                "could not read {} as an image; check the path and file format",
                path.display()
            ),
            Self::Encode { path, .. } => format!(
                "could not write {}; use a supported extension such as .png or .jpg",
                path.display()
            ),
            Self::Io { path, .. } => format!("could not access {}", path.display()),
            Self::Options { path, .. } => {
                format!("{} is not a valid options file", path.display())
            }
            Self::Report(_) => "could not produce the statistics report".to_string(),
            Self::Transfer(TransferError::EmptyImage { .. }) => {
                "one of the images has no pixels".to_string()
            }
            Self::Transfer(e) => e.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transfer_error_converts() {
        let err: CliError = TransferError::EmptyImage {
            width: 0,
            height: 1,
        }
        .into();
        assert!(matches!(err, CliError::Transfer(_)));
        assert_eq!(err.user_message(), "one of the images has no pixels");
    }

    #[test]
    fn test_io_message_names_path() {
        let err = CliError::Io {
            path: PathBuf::from("/nope/x.png"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        };
        assert!(err.user_message().contains("/nope/x.png"));
        assert!(err.to_string().contains("/nope/x.png"));
    }
}
