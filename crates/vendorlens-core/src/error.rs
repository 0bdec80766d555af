//! Error types for VendorLens.
//!
//! The extraction engine itself never fails; these cover the collaborators
//! around it (submission, export, configuration).

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Email thread is empty")]
    EmptyInput,

    #[error("No vendor record to export; run an analysis first")]
    MissingRecord,

    #[error("Export error: {0}")]
    Export(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_errors_convert() {
        fn read_missing() -> Result<String> {
            Ok(std::fs::read_to_string("/nonexistent/vendorlens/thread.txt")?)
        }
        assert!(matches!(read_missing(), Err(Error::Io(_))));
    }

    #[test]
    fn test_messages() {
        assert_eq!(Error::EmptyInput.to_string(), "Email thread is empty");
        assert_eq!(
            Error::Export("disk full".into()).to_string(),
            "Export error: disk full"
        );
    }
}
