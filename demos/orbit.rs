extern crate hermite_interp;

use std::f64::consts::PI;

use hermite_interp::{StateSample, StateSeries};
use nalgebra::Vector3;

const RADIUS_KM: f64 = 7000.0;
const PERIOD_S: f64 = 5828.5;

fn circular(t: f64) -> StateSample {
    let rate = 2.0 * PI / PERIOD_S;
    let (sin, cos) = (rate * t).sin_cos();
    StateSample::new(
        t,
        Vector3::new(RADIUS_KM * cos, RADIUS_KM * sin, 0.0),
        Vector3::new(-RADIUS_KM * rate * sin, RADIUS_KM * rate * cos, 0.0),
    )
}

fn main() {

    let sample_step = 120.0;
    let samples: Vec<StateSample> = (0..=50).map(|i| circular(i as f64 * sample_step)).collect();

    println!("window;max position error [km];max velocity error [km/s]");
    for window in 1..=8 {
        let series = StateSeries::new(samples.clone(), window).unwrap();
        let (start, end) = series.span();

        let mut position_error: f64 = 0.0;
        let mut velocity_error: f64 = 0.0;
        let mut t = start;
        while t <= end {
            let (position, velocity) = series.interpolate(t).unwrap();
            let expected = circular(t);
            position_error = position_error.max((position - expected.position).norm());
            velocity_error = velocity_error.max((velocity - expected.velocity).norm());
            t += 7.0;
        }

        println!("{};{:.3e};{:.3e}", window, position_error, velocity_error);
    }
}
