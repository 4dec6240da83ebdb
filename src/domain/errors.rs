use thiserror::Error;

/// Errors raised while building the denomination registry or the engine.
///
/// Once an engine exists none of its operations fail, so these only surface
/// from configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error("At least one denomination is required")]
    EmptyDenominations,
    #[error("Denominations must be positive")]
    ZeroDenomination,
    #[error("Duplicate denomination: {0}")]
    DuplicateDenomination(u32),
    #[error("History limit must be at least 1")]
    ZeroHistoryLimit,
}

pub type DomainResult<T> = Result<T, DomainError>;
