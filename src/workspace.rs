use log::debug;

use crate::error::Result;
use crate::hermite::{evaluate, Evaluation};
use crate::table::scratch_len;

/// Owned scratch memory for repeated evaluations. The buffer only grows, so evaluating
/// records of the same size again and again does not allocate.
#[derive(Debug, Default, Clone)]
pub struct HermiteWorkspace {
    scratch: Vec<f64>,
}

impl HermiteWorkspace {
    pub fn new() -> Self {
        HermiteWorkspace { scratch: Vec::new() }
    }

    /// Workspace already large enough for records of `samples` abscissas.
    pub fn with_capacity(samples: usize) -> Self {
        HermiteWorkspace { scratch: vec![0.0; scratch_len(samples)] }
    }

    /// Largest number of samples that can be evaluated without growing.
    pub fn capacity(&self) -> usize {
        self.scratch.len() / scratch_len(1)
    }

    /// See [`evaluate`](crate::evaluate).
    pub fn evaluate(&mut self, abscissas: &[f64], pairs: &[f64], x: f64) -> Result<Evaluation> {
        self.reserve(abscissas.len());
        evaluate(abscissas, pairs, x, &mut self.scratch)
    }

    /// Evaluates one record at every point of `x_vector`.
    ///
    /// # Example
    /// ```
    /// use hermite_interp::HermiteWorkspace;
    /// use assert_approx_eq::assert_approx_eq;
    ///
    /// let mut workspace = HermiteWorkspace::new();
    /// // f(x) = x^2 sampled at 0 and 2
    /// let results = workspace.batch_evaluate(&[0.0, 2.0], &[0.0, 0.0, 4.0, 4.0], &[0.5, 1.0, 3.0]).unwrap();
    ///
    /// assert_approx_eq!(0.25, results[0].value, 1e-12);
    /// assert_approx_eq!(2.0, results[1].derivative, 1e-12);
    /// assert_approx_eq!(9.0, results[2].value, 1e-12);
    /// ```
    pub fn batch_evaluate(&mut self, abscissas: &[f64], pairs: &[f64], x_vector: &[f64]) -> Result<Vec<Evaluation>> {
        self.reserve(abscissas.len());

        let mut results = Vec::with_capacity(x_vector.len());
        for x in x_vector {
            results.push(evaluate(abscissas, pairs, *x, &mut self.scratch)?);
        }
        Ok(results)
    }

    fn reserve(&mut self, samples: usize) {
        let required = scratch_len(samples);
        if self.scratch.len() < required {
            debug!("growing hermite scratch from {} to {} values", self.scratch.len(), required);
            self.scratch.resize(required, 0.0);
        }
    }
}
