/// Failures talking to the external storefront backend.
/// Use code-style identifiers for all error variants for i18n compatibility.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum BackendError {
    #[error("backend.unavailable")]
    Unavailable(String),
    #[error("backend.rejected")]
    Rejected { status: u16 },
    #[error("backend.malformed_response")]
    MalformedResponse(String),
}

impl BackendError {
    pub fn unavailable(reason: impl Into<String>) -> Self {
        BackendError::Unavailable(reason.into())
    }
    pub fn rejected(status: u16) -> Self {
        BackendError::Rejected { status }
    }
    pub fn malformed(reason: impl Into<String>) -> Self {
        BackendError::MalformedResponse(reason.into())
    }
}

/// Failures of the local key/value storage.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum StorageError {
    #[error("storage.read_failed")]
    ReadFailed,
    #[error("storage.write_failed")]
    WriteFailed,
}
