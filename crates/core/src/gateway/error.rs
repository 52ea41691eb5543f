use thiserror::Error;

/// Failure of a collaborator call.
///
/// The categories exist for logging and diagnostics only; the orchestrator
/// collapses all of them into a single user-visible failure signal.
#[derive(Debug, Clone, Error)]
pub enum GatewayError {
    /// The collaborator could not be reached.
    #[error("connection failed: {0}")]
    Connection(String),

    /// The collaborator answered with something we could not interpret.
    #[error("unexpected response: {0}")]
    UnexpectedResponse(String),

    /// The requested entity does not exist.
    #[error("not found: {0}")]
    NotFound(String),

    /// The caller is not allowed to perform the operation.
    #[error("unauthorized")]
    Unauthorized,
}
