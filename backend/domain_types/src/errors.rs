/// Result type carrying an `error_stack` report.
pub type CustomResult<T, E> = Result<T, error_stack::Report<E>>;

/// Failures of the configuration resolution pipeline.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("no value handler registered for group {group}")]
    HandlerNotFound { group: String },
    #[error("invalid value stored for configuration field {field}")]
    InvalidFieldValue { field: &'static str },
    #[error("failed to obtain seller auth data from configuration")]
    FailedToObtainAuthType,
    #[error("unknown payment method code {code}")]
    UnknownMethodCode { code: String },
    #[error("invalid scope id {id}")]
    InvalidScopeId { id: String },
    #[error("failed to load merchant configuration")]
    LoadFailure,
}
