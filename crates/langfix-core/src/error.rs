use thiserror::Error;

/// Failure to hand a conversion result to its display.
#[derive(Error, Debug)]
pub enum SinkError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Result sink is closed")]
    Closed,
}
