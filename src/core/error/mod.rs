use thiserror::Error;

/// Errors raised by the queue containers
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueueError {
    /// `dequeue` or `examine` was called on a queue holding no elements
    #[error("queue is empty")]
    EmptyContainer,
}
