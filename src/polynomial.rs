/// Dense polynomial `c_0 + c_1 x + ... + c_k x^k`, used as an analytic oracle by the tests.
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {

    pub fn new(coefficients: Vec<f64>) -> Self {
        Polynomial { coefficients }
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        self.coefficients.iter().rev().fold(0.0, |acc, c| acc * x + c)
    }

    pub fn derivative(&self, x: f64) -> f64 {
        let mut result = 0.0;
        for (power, c) in self.coefficients.iter().enumerate().skip(1).rev() {
            result = result * x + power as f64 * c;
        }
        result
    }

    /// Sum of the absolute values of all terms at `x`, the scale rounding errors are measured against.
    pub fn magnitude(&self, x: f64) -> f64 {
        self.coefficients
            .iter()
            .enumerate()
            .map(|(power, c)| (c * x.powi(power as i32)).abs())
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use assert_approx_eq::assert_approx_eq;
    use super::*;

    #[test]
    fn evaluate() {

        let eps = 1e-6;
        let coefficients = vec![1.0, 2.5, -0.25];
        let polynomial = Polynomial::new(coefficients);

        assert_approx_eq!(polynomial.evaluate(2.1), 5.1475, eps);
        assert_approx_eq!(polynomial.evaluate(-3.14), -9.3149, eps);
        assert_approx_eq!(polynomial.evaluate(0.0), 1.0, eps);
    }

    #[test]
    fn derivative() {
        let eps = 1e-12;
        let polynomial = Polynomial::new(vec![5.0, 0.0, 2.0, 0.0, 0.0, 0.0, 0.0, 1.0]);

        assert_approx_eq!(polynomial.derivative(2.0), 456.0, eps);
        assert_approx_eq!(polynomial.derivative(0.0), 0.0, eps);
        assert_approx_eq!(polynomial.derivative(-1.0), 3.0, eps);
        assert_approx_eq!(Polynomial::new(vec![4.0]).derivative(3.0), 0.0, eps);
    }

    #[test]
    fn magnitude() {
        let polynomial = Polynomial::new(vec![1.0, -2.0, 1.0]);

        assert_eq!(polynomial.evaluate(1.0), 0.0);
        assert_eq!(polynomial.magnitude(1.0), 4.0);
    }
}
