use thiserror::Error;

/// Usage errors, plus a route whose cost does not fit in a `Cost`. These never
/// signal a missing answer; data absence is reported through
/// `RouteCost::NoSuchRoute` and `ShortestPath::Unreachable` instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("vertex {0} already exists")]
    DuplicateVertex(String),

    #[error("edge from {tail} to {head} already exists")]
    DuplicateEdge { tail: String, head: String },

    #[error("invalid source or destination vertex: {0}")]
    InvalidVertex(String),

    #[error("cost of route {0} overflows")]
    CostOverflow(String),
}
