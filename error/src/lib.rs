use std::{io, path::PathBuf};

use thiserror::Error as ThisError;

#[derive(ThisError, Debug)]
pub enum Error {
    #[error("Dataset source '{}' cannot be opened: {source}", .path.display())]
    SourceMissing {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Dataset source '{}' is malformed: {reason}", .path.display())]
    SourceMalformed { path: PathBuf, reason: String },

    #[error("{0}")]
    InternalServerError(String),
}

impl Error {
    pub fn is_source_missing(&self) -> bool {
        matches!(self, Self::SourceMissing { .. })
    }

    pub fn is_source_malformed(&self) -> bool {
        matches!(self, Self::SourceMalformed { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn source_errors_name_the_path() {
        let missing = Error::SourceMissing {
            path: PathBuf::from("marks.json"),
            source: io::Error::from(io::ErrorKind::NotFound),
        };
        assert!(missing.is_source_missing());
        assert!(!missing.is_source_malformed());
        assert!(missing.to_string().contains("marks.json"));

        let malformed = Error::SourceMalformed {
            path: PathBuf::from("marks.json"),
            reason: "expected an array".to_owned(),
        };
        assert!(malformed.is_source_malformed());
        assert_eq!(
            malformed.to_string(),
            "Dataset source 'marks.json' is malformed: expected an array"
        );
    }

    #[test]
    fn internal_errors_display_their_message() {
        let err = Error::InternalServerError("oops".to_owned());
        assert!(!err.is_source_missing());
        assert!(!err.is_source_malformed());
        assert_eq!(err.to_string(), "oops");
    }
}
