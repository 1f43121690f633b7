use std::fmt;

/// Failure to acquire a surface's drawing context.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum SurfaceError {
    /// The surface cannot produce a 2D context (detached, lost, or never had one).
    ContextUnavailable,
}

impl fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SurfaceError::ContextUnavailable => write!(f, "2D rendering context not available"),
        }
    }
}

impl std::error::Error for SurfaceError {}
