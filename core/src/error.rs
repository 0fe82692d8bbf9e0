use thiserror::Error;

/// Contract violations raised by the graph and queue types.
///
/// A missing path is not an error: searches return `Ok(None)` for that.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The operation referenced a vertex that is not in the graph.
    #[error("vertex not found: {0}")]
    VertexNotFound(String),

    /// `peek` or `dequeue` was called on an empty container.
    #[error("{0} is empty")]
    EmptyContainer(&'static str),

    /// Bulk construction got a different number of items and priorities.
    #[error("got {items} items but {priorities} priorities")]
    MismatchedLengths { items: usize, priorities: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
