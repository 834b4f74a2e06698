//! Hermite interpolation of a value and its first derivative.
//!
//! Given `n` abscissas, each with a value and a first derivative, the osculating polynomial of
//! degree `2n - 1` and its derivative are evaluated at a single point. The polynomial is never
//! formed explicitly: a triangular table in the style of Neville's algorithm is built column by
//! column, where every abscissa is counted twice. See Conte & de Boor, "Elementary Numerical
//! Analysis", eq. 2.35, for the derivative recursion.
//!
//! The table lives in a scratch buffer of [`scratch_len`]`(n)` values owned by the caller.

use crate::error::{HermiteError, Result};
use crate::table::{abscissa_index, scratch_len, NoopObserver, TableObserver, WorkTable};

/// Number of samples [`hermite_eval`] handles without touching the heap.
pub const MAX_SAMPLES: usize = 32;

/// Interpolated value and first derivative at the evaluation point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Evaluation {
    pub value: f64,
    pub derivative: f64,
}

/// Evaluates the Hermite interpolant at `x`.
///
/// - `abscissas` - the `n` sample locations, pairwise distinct,
/// - `pairs` - `2n` interleaved samples `(y_0, y'_0, y_1, y'_1, ...)`,
/// - `x` - evaluation point, extrapolation is allowed,
/// - `scratch` - working memory of at least [`scratch_len`]`(n)` values. Its content on entry
///   is irrelevant and it is left holding the final table.
///
/// # Example
/// ```
/// use hermite_interp::{evaluate, scratch_len};
/// use assert_approx_eq::assert_approx_eq;
///
/// // f(x) = x^7 + 2x^2 + 5
/// let xs = [-1.0, 0.0, 3.0, 5.0];
/// let pairs = [6.0, 3.0, 5.0, 0.0, 2210.0, 5115.0, 78180.0, 109395.0];
/// let mut scratch = vec![0.0; scratch_len(xs.len())];
///
/// let result = evaluate(&xs, &pairs, 2.0, &mut scratch).unwrap();
/// assert_approx_eq!(141.0, result.value, 1e-12);
/// assert_approx_eq!(456.0, result.derivative, 1e-12);
/// ```
/// # Errors
/// - [`HermiteError::InvalidSize`] when `abscissas` is empty, `pairs` is not twice as long, or
///   `scratch` is too short. Scratch is not written in that case.
/// - [`HermiteError::NonFinite`] when any input is NaN or infinite.
/// - [`HermiteError::DegenerateInput`] when two abscissas coincide.
pub fn evaluate(abscissas: &[f64], pairs: &[f64], x: f64, scratch: &mut [f64]) -> Result<Evaluation> {
    evaluate_observed(abscissas, pairs, x, scratch, &mut NoopObserver)
}

/// Same as [`evaluate`], reporting every computed table entry to `observer`.
///
/// Entries of order `1` through `2n - 1` are reported, `n * (2n - 1)` in total. The last one
/// reported is the apex of the table and holds the result.
pub fn evaluate_observed<O: TableObserver>(
    abscissas: &[f64],
    pairs: &[f64],
    x: f64,
    scratch: &mut [f64],
    observer: &mut O,
) -> Result<Evaluation> {
    let n = check_sample_count(abscissas)?;
    if pairs.len() != 2 * n {
        return Err(HermiteError::InvalidSize {
            what: "value/derivative pairs",
            required: 2 * n,
            actual: pairs.len(),
        });
    }

    let samples = pairs.chunks_exact(2).map(|pair| (pair[0], pair[1]));
    let mut table = WorkTable::new(scratch, n)?;
    run(abscissas, samples, x, &mut table, observer)
}

/// Evaluates the Hermite interpolant of values `ys` and derivatives `ydots` sampled at `xs`.
///
/// Returns `(value, derivative)` at `x`. Up to [`MAX_SAMPLES`] samples the working table lives
/// on the stack, larger inputs are evaluated on a heap buffer.
///
/// # Example
/// ```
/// use hermite_interp::hermite_eval;
/// use assert_approx_eq::assert_approx_eq;
///
/// // f(x) = x^3 sampled at 0 and 1
/// let (value, derivative) = hermite_eval(&[0.0, 1.0], &[0.0, 1.0], &[0.0, 3.0], 0.5).unwrap();
/// assert_approx_eq!(0.125, value, 1e-15);
/// assert_approx_eq!(0.75, derivative, 1e-15);
/// ```
pub fn hermite_eval(xs: &[f64], ys: &[f64], ydots: &[f64], x: f64) -> Result<(f64, f64)> {
    let n = check_sample_count(xs)?;
    for (what, actual) in [("ordinates", ys.len()), ("first derivatives", ydots.len())] {
        if actual != n {
            return Err(HermiteError::InvalidSize { what, required: n, actual });
        }
    }

    let samples = ys.iter().copied().zip(ydots.iter().copied());
    let result = if n <= MAX_SAMPLES {
        let mut scratch = [0.0; 4 * MAX_SAMPLES];
        let mut table = WorkTable::new(&mut scratch, n)?;
        run(xs, samples, x, &mut table, &mut NoopObserver)?
    } else {
        let mut scratch = vec![0.0; scratch_len(n)];
        let mut table = WorkTable::new(&mut scratch, n)?;
        run(xs, samples, x, &mut table, &mut NoopObserver)?
    };

    Ok((result.value, result.derivative))
}

fn check_sample_count(abscissas: &[f64]) -> Result<usize> {
    if abscissas.is_empty() {
        return Err(HermiteError::InvalidSize {
            what: "abscissas",
            required: 1,
            actual: 0,
        });
    }
    Ok(abscissas.len())
}

fn check_finite(what: &'static str, index: usize, v: f64) -> Result<()> {
    if v.is_finite() {
        Ok(())
    } else {
        Err(HermiteError::NonFinite { what, index })
    }
}

fn run<I, O>(
    abscissas: &[f64],
    samples: I,
    x: f64,
    table: &mut WorkTable,
    observer: &mut O,
) -> Result<Evaluation>
where
    I: Iterator<Item = (f64, f64)>,
    O: TableObserver,
{
    check_finite("evaluation point", 0, x)?;
    for (i, xi) in abscissas.iter().enumerate() {
        check_finite("abscissa", i, *xi)?;
    }

    load_samples(table, samples)?;
    build_linear_stage(abscissas, x, table, observer)?;
    reduce(abscissas, x, table, observer)?;

    Ok(Evaluation {
        value: table.value[0],
        derivative: table.derivative[0],
    })
}

/// Column 0: values on even rows, derivatives on odd rows.
fn load_samples<I>(table: &mut WorkTable, samples: I) -> Result<()>
where
    I: Iterator<Item = (f64, f64)>,
{
    for (i, (y, ydot)) in samples.enumerate() {
        check_finite("ordinate", i, y)?;
        check_finite("first derivative", i, ydot)?;
        table.value[2 * i] = y;
        table.value[2 * i + 1] = ydot;
    }
    Ok(())
}

fn divisor(abscissas: &[f64], left: usize, right: usize) -> Result<f64> {
    let denom = abscissas[right] - abscissas[left];
    if denom == 0.0 {
        return Err(HermiteError::DegenerateInput {
            left,
            right,
            abscissa: abscissas[left],
        });
    }
    Ok(denom)
}

/// Column 1: linear interpolants between neighbouring abscissas and the first order Taylor
/// expansions around each abscissa.
fn build_linear_stage<O: TableObserver>(
    abscissas: &[f64],
    x: f64,
    table: &mut WorkTable,
    observer: &mut O,
) -> Result<()> {
    let n = abscissas.len();

    for i in 1..n {
        let c1 = abscissas[i] - x;
        let c2 = x - abscissas[i - 1];
        let denom = divisor(abscissas, i - 1, i)?;

        let left = 2 * i - 2;
        let mid = left + 1;
        let right = left + 2;

        // Derivatives read column 0 values, so they are written first.
        table.derivative[left] = table.value[mid];
        table.derivative[mid] = (table.value[right] - table.value[left]) / denom;

        let taylor = table.value[mid] * c2 + table.value[left];
        table.value[mid] = (c1 * table.value[left] + c2 * table.value[right]) / denom;
        table.value[left] = taylor;

        observer.on_cell(table.cell(1, left));
        observer.on_cell(table.cell(1, mid));
    }

    // Taylor expansion around the last abscissa, out of reach of the loop above.
    let last = 2 * n - 2;
    table.derivative[last] = table.value[last + 1];
    table.value[last] += table.value[last + 1] * (x - abscissas[n - 1]);
    observer.on_cell(table.cell(1, last));

    Ok(())
}

/// Columns 2 through `2n - 1`. Entry `row` of column `order` spans theoretical rows
/// `row..=row + order`.
fn reduce<O: TableObserver>(
    abscissas: &[f64],
    x: f64,
    table: &mut WorkTable,
    observer: &mut O,
) -> Result<()> {
    let rows = table.rows();

    for order in 2..rows {
        for row in 0..rows - order {
            let left = abscissa_index(row);
            let right = abscissa_index(row + order);
            let c1 = abscissas[right] - x;
            let c2 = x - abscissas[left];
            let denom = divisor(abscissas, left, right)?;

            let (v0, v1) = (table.value[row], table.value[row + 1]);
            table.derivative[row] =
                (c1 * table.derivative[row] + c2 * table.derivative[row + 1] + (v1 - v0)) / denom;
            table.value[row] = (c1 * v0 + c2 * v1) / denom;

            observer.on_cell(table.cell(order, row));
        }
    }
    Ok(())
}
