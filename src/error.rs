use thiserror::Error;

/// Errors raised by the score model and the certificate exporter.
///
/// Application plumbing (config files, preference storage, the CLI) uses
/// `anyhow`; this enum is the domain-level taxonomy.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CalcError {
    /// Unparsable or out-of-range score entry. Recovered by clamping and
    /// never shown to the user.
    #[error("invalid score input '{0}'")]
    InvalidInput(String),

    #[error("unknown subject '{0}'")]
    UnknownSubject(String),

    /// The subject catalog cannot produce a percentage (e.g. zero total max marks).
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),

    #[error("export failed: {0}")]
    ExportFailure(String),
}

impl CalcError {
    pub fn export(msg: impl Into<String>) -> Self {
        CalcError::ExportFailure(msg.into())
    }
}
