//! Application error type and exit-code mapping

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub use pdd_exporter_provider::ProviderError;

/// Exit status for a command line that could not be parsed (`EX_USAGE`)
pub const EXIT_USAGE: u8 = 64;

/// Every way a run can fail. All of them end the process.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Neither `PDD_TOKEN` nor `-t` supplied a token
    #[error("Specify PDD Token for export domain's records")]
    MissingToken,

    /// Neither `PDD_DOMAIN` nor `-d` supplied a domain
    #[error("Setup domain name for export")]
    MissingDomain,

    /// Transport, decode or provider-reported failure
    #[error(transparent)]
    Provider(#[from] ProviderError),

    /// The executable's own directory could not be determined
    #[error("Cannot determine executable directory: {0}")]
    ExecutableDir(#[source] io::Error),

    /// The export file could not be created
    #[error("Failed to create {}: {source}", .path.display())]
    CreateFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing or flushing the export file failed
    #[error("Failed to write {}: {source}", .path.display())]
    WriteFile {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ExportError {
    /// Process exit status for this error.
    ///
    /// | Code | Meaning |
    /// |------|---------|
    /// | 1 | token missing |
    /// | 2 | domain missing |
    /// | 3 | provider answered `success != "ok"` |
    /// | 4 | network failure or timeout |
    /// | 5 | response body is not the expected JSON |
    /// | 6 | output file could not be created or written |
    pub fn exit_code(&self) -> u8 {
        match self {
            Self::MissingToken => 1,
            Self::MissingDomain => 2,
            Self::Provider(e) if e.is_expected() => 3,
            Self::Provider(ProviderError::ParseError { .. }) => 5,
            Self::Provider(_) => 4,
            Self::ExecutableDir(_) | Self::CreateFile { .. } | Self::WriteFile { .. } => 6,
        }
    }
}

/// Convenience type alias for `Result<T, ExportError>`.
pub type Result<T> = std::result::Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn provider_error(code: &str) -> ExportError {
        let provider = "yandex_pdd".to_string();
        let e = match code {
            "network" => ProviderError::NetworkError {
                provider,
                detail: "refused".into(),
            },
            "timeout" => ProviderError::Timeout {
                provider,
                detail: "30s".into(),
            },
            "parse" => ProviderError::ParseError {
                provider,
                detail: "expected value".into(),
            },
            _ => ProviderError::Unknown {
                provider,
                raw_code: None,
                raw_message: "invalid token".into(),
            },
        };
        ExportError::from(e)
    }

    #[test]
    fn configuration_exit_codes() {
        assert_eq!(ExportError::MissingToken.exit_code(), 1);
        assert_eq!(ExportError::MissingDomain.exit_code(), 2);
    }

    #[test]
    fn provider_exit_codes() {
        assert_eq!(provider_error("reported").exit_code(), 3);
        assert_eq!(provider_error("network").exit_code(), 4);
        assert_eq!(provider_error("timeout").exit_code(), 4);
        assert_eq!(provider_error("parse").exit_code(), 5);
    }

    #[test]
    fn filesystem_exit_code() {
        let e = ExportError::CreateFile {
            path: PathBuf::from("/nonexistent/pdd-exporter-x"),
            source: io::Error::from(io::ErrorKind::PermissionDenied),
        };
        assert_eq!(e.exit_code(), 6);
        assert!(e
            .to_string()
            .starts_with("Failed to create /nonexistent/pdd-exporter-x: "));
    }

    #[test]
    fn messages_match_cli_wording() {
        assert_eq!(
            ExportError::MissingToken.to_string(),
            "Specify PDD Token for export domain's records"
        );
        assert_eq!(
            ExportError::MissingDomain.to_string(),
            "Setup domain name for export"
        );
        assert_eq!(
            provider_error("reported").to_string(),
            "[yandex_pdd] An error occurred: invalid token"
        );
    }
}
