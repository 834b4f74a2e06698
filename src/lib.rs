//! Hermite interpolation of sampled values and first derivatives.
//!
//! From `n` abscissas with known value and derivative, the value and derivative of the unique
//! polynomial of degree `2n - 1` matching all of them are evaluated at any point. This is how
//! continuous position and velocity are rebuilt from discretely sampled ephemeris records.
//!
//! # Example
//! ```
//! use hermite_interp::hermite_eval;
//! use assert_approx_eq::assert_approx_eq;
//!
//! // Samples of f(x) = x^7 + 2x^2 + 5 and of its derivative.
//! let xs = [-1.0, 0.0, 3.0, 5.0];
//! let ys = [6.0, 5.0, 2210.0, 78180.0];
//! let ydots = [3.0, 0.0, 5115.0, 109395.0];
//!
//! let (value, derivative) = hermite_eval(&xs, &ys, &ydots, 2.0).unwrap();
//! assert_approx_eq!(141.0, value, 1e-12);
//! assert_approx_eq!(456.0, derivative, 1e-12);
//! ```

mod error;
mod hermite;
mod series;
mod table;
mod workspace;

#[cfg(test)]
mod polynomial;

pub use error::{HermiteError, Result};
pub use hermite::{evaluate, evaluate_observed, hermite_eval, Evaluation, MAX_SAMPLES};
pub use series::{StateSample, StateSeries};
pub use table::{abscissa_index, scratch_len, LogObserver, NoopObserver, TableCell, TableObserver};
pub use workspace::HermiteWorkspace;
