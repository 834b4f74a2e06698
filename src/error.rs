use thiserror::Error;

/// Errors returned by the Hermite evaluator and the state series built on it.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HermiteError {
    /// An input or the scratch buffer does not have the length the evaluation needs.
    #[error("invalid size of {what}: need {required}, got {actual}")]
    InvalidSize {
        what: &'static str,
        required: usize,
        actual: usize,
    },

    /// Two abscissas the recursion divides by coincide.
    #[error("degenerate input: abscissas {left} and {right} are both {abscissa}")]
    DegenerateInput {
        left: usize,
        right: usize,
        abscissa: f64,
    },

    /// NaN or infinite input.
    #[error("non-finite {what} at index {index}")]
    NonFinite { what: &'static str, index: usize },

    #[error("requested {requested} outside of series span ({start}..{end})")]
    OutOfRange { requested: f64, start: f64, end: f64 },
}

pub type Result<T> = std::result::Result<T, HermiteError>;
