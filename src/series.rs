use log::trace;
use nalgebra::Vector3;

use crate::error::{HermiteError, Result};
use crate::hermite::hermite_eval;

/// Cartesian state known at one epoch. Positions are interpolated as values, velocities as
/// their derivatives, so both must be expressed in consistent units (e.g. km and km/s).
#[derive(Debug, Clone, Copy)]
pub struct StateSample {
    pub epoch: f64,
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
}

impl StateSample {
    pub fn new(epoch: f64, position: Vector3<f64>, velocity: Vector3<f64>) -> Self {
        StateSample { epoch, position, velocity }
    }
}

impl Ord for StateSample {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.epoch.total_cmp(&other.epoch)
    }
}

impl PartialOrd for StateSample {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for StateSample {
    fn eq(&self, other: &Self) -> bool {
        self.epoch == other.epoch
    }
}

impl Eq for StateSample { }

/// Sequence of decoded states rebuilt into a continuous trajectory.
///
/// Every query picks `window` consecutive samples around the requested epoch and runs a Hermite
/// interpolation of degree `2 * window - 1` on each axis.
///
/// # Example
/// ```
/// use hermite_interp::{StateSample, StateSeries};
/// use nalgebra::Vector3;
///
/// // Uniform motion along x at 2 km/s.
/// let samples = (0..5)
///     .map(|i| {
///         let t = i as f64 * 10.0;
///         StateSample::new(t, Vector3::new(2.0 * t, 0.0, 1.0), Vector3::new(2.0, 0.0, 0.0))
///     })
///     .collect();
/// let series = StateSeries::new(samples, 2).unwrap();
///
/// let (position, velocity) = series.interpolate(15.0).unwrap();
/// assert!((position.x - 30.0).abs() < 1e-12);
/// assert!((velocity.x - 2.0).abs() < 1e-12);
/// assert!(series.interpolate(41.0).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct StateSeries {
    epochs: Vec<f64>,
    positions: [Vec<f64>; 3],
    velocities: [Vec<f64>; 3],
    window: usize,
}

impl StateSeries {
    /// Builds a series from samples in any order.
    ///
    /// # Errors
    /// - [`HermiteError::InvalidSize`] for no samples or a zero window,
    /// - [`HermiteError::NonFinite`] when a sample holds NaN or infinity,
    /// - [`HermiteError::DegenerateInput`] when two samples share an epoch.
    pub fn new(mut samples: Vec<StateSample>, window: usize) -> Result<Self> {
        if samples.is_empty() {
            return Err(HermiteError::InvalidSize { what: "state samples", required: 1, actual: 0 });
        }
        if window == 0 {
            return Err(HermiteError::InvalidSize { what: "interpolation window", required: 1, actual: 0 });
        }

        samples.sort();
        for (index, sample) in samples.iter().enumerate() {
            let finite = sample.epoch.is_finite()
                && sample.position.iter().all(|v| v.is_finite())
                && sample.velocity.iter().all(|v| v.is_finite());
            if !finite {
                return Err(HermiteError::NonFinite { what: "state sample", index });
            }
        }

        if let Some(index) = samples.windows(2).position(|pair| pair[0].epoch == pair[1].epoch) {
            return Err(HermiteError::DegenerateInput {
                left: index,
                right: index + 1,
                abscissa: samples[index].epoch,
            });
        }

        let epochs = samples.iter().map(|s| s.epoch).collect();
        let positions = [0, 1, 2].map(|axis| samples.iter().map(|s| s.position[axis]).collect());
        let velocities = [0, 1, 2].map(|axis| samples.iter().map(|s| s.velocity[axis]).collect());

        Ok(StateSeries { epochs, positions, velocities, window })
    }

    pub fn len(&self) -> usize {
        self.epochs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.epochs.is_empty()
    }

    pub fn window(&self) -> usize {
        self.window
    }

    /// Degree of the interpolating polynomial when a full window is available.
    pub fn degree(&self) -> usize {
        2 * self.window - 1
    }

    /// First and last epoch.
    pub fn span(&self) -> (f64, f64) {
        (self.epochs[0], self.epochs[self.epochs.len() - 1])
    }

    /// Position and velocity at `epoch`, which must lie within [`span`](Self::span).
    pub fn interpolate(&self, epoch: f64) -> Result<(Vector3<f64>, Vector3<f64>)> {
        let (start, end) = self.span();
        if !(start <= epoch && epoch <= end) {
            return Err(HermiteError::OutOfRange { requested: epoch, start, end });
        }
        self.extrapolate(epoch)
    }

    /// Position and velocity at `epoch` without a range check; outside the span the edge window is used.
    pub fn extrapolate(&self, epoch: f64) -> Result<(Vector3<f64>, Vector3<f64>)> {
        if !epoch.is_finite() {
            return Err(HermiteError::NonFinite { what: "requested epoch", index: 0 });
        }

        let index = match self.epochs.binary_search_by(|probe| probe.total_cmp(&epoch)) {
            Ok(index) => return Ok(self.state(index)),
            Err(index) => index,
        };

        let (first, last) = self.window_bounds(index);
        trace!("epoch {} uses samples {}..{}", epoch, first, last);

        let mut position = Vector3::zeros();
        let mut velocity = Vector3::zeros();
        for axis in 0..3 {
            let (p, v) = hermite_eval(
                &self.epochs[first..last],
                &self.positions[axis][first..last],
                &self.velocities[axis][first..last],
                epoch,
            )?;
            position[axis] = p;
            velocity[axis] = v;
        }
        Ok((position, velocity))
    }

    fn state(&self, index: usize) -> (Vector3<f64>, Vector3<f64>) {
        let position = Vector3::from_fn(|axis, _| self.positions[axis][index]);
        let velocity = Vector3::from_fn(|axis, _| self.velocities[axis][index]);
        (position, velocity)
    }

    /// Window centred on the insertion index, shifted left so it never runs past the last sample.
    fn window_bounds(&self, index: usize) -> (usize, usize) {
        let len = self.len();
        let mut first = index.saturating_sub(self.window / 2);
        if first + self.window > len {
            first = len.saturating_sub(self.window);
        }
        (first, first + self.window.min(len - first))
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;

    use super::*;

    fn circular(t: f64) -> StateSample {
        // Radius 7000 km, period of roughly 97 minutes.
        let radius = 7000.0;
        let rate = 2.0 * std::f64::consts::PI / 5828.5;
        let (sin, cos) = (rate * t).sin_cos();
        StateSample::new(
            t,
            Vector3::new(radius * cos, radius * sin, 0.0),
            Vector3::new(-radius * rate * sin, radius * rate * cos, 0.0),
        )
    }

    fn orbit(samples: usize, step: f64) -> Vec<StateSample> {
        (0..samples).map(|i| circular(i as f64 * step)).collect()
    }

    #[test]
    fn circular_orbit() {
        let series = StateSeries::new(orbit(40, 60.0), 8).unwrap();

        for t in [15.0, 500.5, 1234.0, 2000.0, 2330.0] {
            let (position, velocity) = series.interpolate(t).unwrap();
            let expected = circular(t);

            assert!((position - expected.position).norm() < 1e-6);
            assert!((velocity - expected.velocity).norm() < 1e-8);
        }
    }

    #[test]
    fn exact_epoch_returns_sample() {
        let samples = orbit(10, 60.0);
        let stored = samples[4];
        let series = StateSeries::new(samples, 4).unwrap();

        let (position, velocity) = series.interpolate(240.0).unwrap();
        assert_eq!(stored.position, position);
        assert_eq!(stored.velocity, velocity);
    }

    #[test]
    fn unsorted_samples() {
        let mut samples = orbit(12, 60.0);
        samples.reverse();
        samples.swap(2, 7);
        let series = StateSeries::new(samples, 5).unwrap();

        assert_eq!((0.0, 660.0), series.span());
        let (position, _) = series.interpolate(333.0).unwrap();
        assert!((position - circular(333.0).position).norm() < 1e-6);
    }

    #[test]
    fn window_bounds() {
        let series = StateSeries::new(orbit(10, 1.0), 4).unwrap();

        assert_eq!((0, 4), series.window_bounds(0));
        assert_eq!((0, 4), series.window_bounds(1));
        assert_eq!((3, 7), series.window_bounds(5));
        assert_eq!((6, 10), series.window_bounds(9));
        assert_eq!((6, 10), series.window_bounds(10));
    }

    #[test]
    fn window_larger_than_series() {
        let series = StateSeries::new(orbit(3, 60.0), 8).unwrap();

        assert_eq!((0, 3), series.window_bounds(1));
        let (position, _) = series.interpolate(90.0).unwrap();
        assert!((position - circular(90.0).position).norm() < 1e-3);
    }

    #[test]
    fn out_of_range() {
        let series = StateSeries::new(orbit(10, 60.0), 4).unwrap();

        assert_eq!(
            Err(HermiteError::OutOfRange { requested: 541.0, start: 0.0, end: 540.0 }),
            series.interpolate(541.0)
        );
        assert!(series.interpolate(-0.001).is_err());
    }

    #[test]
    fn extrapolate_near_edges() {
        let series = StateSeries::new(orbit(20, 60.0), 6).unwrap();

        for t in [-30.0, 1170.0] {
            let (position, velocity) = series.extrapolate(t).unwrap();
            let expected = circular(t);
            assert!((position - expected.position).norm() < 1e-3);
            assert!((velocity - expected.velocity).norm() < 1e-5);
        }
    }

    #[test]
    fn test_duplicate_epochs() {
        let mut samples = orbit(5, 60.0);
        samples.push(circular(120.0));

        assert_eq!(
            Err(HermiteError::DegenerateInput { left: 2, right: 3, abscissa: 120.0 }),
            StateSeries::new(samples, 4).map(|s| s.len())
        );
    }

    #[test]
    fn test_invalid_construction() {
        assert!(StateSeries::new(Vec::new(), 4).is_err());
        assert!(StateSeries::new(orbit(5, 60.0), 0).is_err());

        let mut samples = orbit(5, 60.0);
        samples[3].velocity.y = f64::NAN;
        assert_eq!(
            Err(HermiteError::NonFinite { what: "state sample", index: 3 }),
            StateSeries::new(samples, 4).map(|s| s.len())
        );
    }

    #[test]
    fn accessors() {
        let series = StateSeries::new(orbit(10, 60.0), 4).unwrap();

        assert_eq!(10, series.len());
        assert!(!series.is_empty());
        assert_eq!(4, series.window());
        assert_eq!(7, series.degree());
        assert_approx_eq!(series.span().1, 540.0, 1e-12);
    }
}
