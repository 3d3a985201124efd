use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("No sequence configured for counter '{0}'")]
    MissingSequence(String),
    #[error("Sequence '{0}' is exhausted")]
    SequenceExhausted(String),
    #[error("Order {0} not found")]
    OrderNotFound(i32),
    #[error("Item '{0}' not found")]
    ItemNotFound(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Storage error: {0}")]
    Storage(String),
}
