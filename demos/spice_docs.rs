extern crate hermite_interp;

use hermite_interp::HermiteWorkspace;

fn main() {

    // f(x) = x^7 + 2x^2 + 5 and its derivative, sampled at four abscissas
    let abscissas = [-1.0, 0.0, 3.0, 5.0];
    let pairs = [6.0, 3.0, 5.0, 0.0, 2210.0, 5115.0, 78180.0, 109395.0];

    let x_min = -1.5;
    let x_max = 5.5;
    let number_of_steps = 70;
    let step = (x_max - x_min) / number_of_steps as f64;

    let x_vector: Vec<f64> = (0..=number_of_steps).map(|i| x_min + step * i as f64).collect();

    let mut workspace = HermiteWorkspace::with_capacity(abscissas.len());
    let results = workspace.batch_evaluate(&abscissas, &pairs, &x_vector).unwrap();

    println!("x;f;df");
    for (x, result) in x_vector.iter().zip(results) {
        println!("{:.2};{:.4};{:.4}", x, result.value, result.derivative);
    }
}
