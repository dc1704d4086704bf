//! This file contains a simple example on how to evaluate, sample and fit
//! the shifted geometric distribution:
//!
//!
//!

use ::ShiftedGeometric::distributions::ShiftedGeometric::*;
use rand::prelude::*;
use rand::rngs::SmallRng;

fn print_paired_vectors(input: &[f64], output: &[f64]) {
    assert!(input.len() == output.len());

    for (i, (a, b)) in input.iter().zip(output.iter()).enumerate() {
        println!("{i}\t{:.3}: \t{:.5}", a, b);
    }
    println!("");
}

fn main() {
    println!(
        "*****************************************************************\n\
    This script shows how to use the shifted geometric distribution. It models \
    the number of Bernoulli trials needed to get the first success (including \
    the successful trial). \n\
    We will model a die: on each roll we have a probability of 1/6 of getting \
    the number we want, and we count how many rolls we need until we get it. \n"
    );

    let p: f64 = 1.0 / 6.0;
    let distribution: ShiftedGeometric =
        ShiftedGeometric::new(p).expect("Parameter should be a valid probability. ");

    println!(
        "Expected value: {} \t (Correct one: {})",
        distribution.expected_value(),
        1.0 / p
    );
    println!(
        "Variance: {} \t (Correct one: {})",
        distribution.variance(),
        (1.0 - p) / (p * p)
    );
    println!("Mode: {} \t (Correct one: {})", distribution.mode(), 1.0);
    println!("Median: {} \t (Shortest number of rolls that accumulates at least half of the probability)", distribution.median());
    println!("Skewness: {}", distribution.skewness());
    println!("Excess Kurtosis: {}", distribution.excess_kurtosis());
    println!("Entropy: {} nats", distribution.entropy());

    println!("***********************************************************");
    println!("Pmf (exact roll) and cdf (accumulated) for the first 12 rolls: \n");

    let trials: Vec<i64> = (1..=12).collect::<Vec<i64>>();

    let pmf_values: Vec<f64> = trials
        .iter()
        .map(|&k| distribution.pmf(k).expect("k belongs to the support. "))
        .collect::<Vec<f64>>();
    let cdf_values: Vec<f64> = distribution
        .cdf_multiple(&trials)
        .expect("All the points are valid. ");

    let trials_float: Vec<f64> = trials.iter().map(|&k| k as f64).collect::<Vec<f64>>();

    println!("Pmf: ");
    print_paired_vectors(&trials_float, &pmf_values);

    println!("Cdf: ");
    print_paired_vectors(&trials_float, &cdf_values);

    println!("***********************************************************");
    println!("Quantiles: \n");

    let probabilities: Vec<f64> = (1..=19)
        .into_iter()
        .map(|x: i32| x as f64 * (1.0 / 20.0))
        .collect::<Vec<f64>>();

    let quantile_values: Vec<f64> = distribution.quantile_multiple(&probabilities);

    print_paired_vectors(&probabilities, &quantile_values);

    println!("***********************************************************");
    println!("Validation: \n");

    // The inputs are validated against the limits tables before any
    // computation, so invalid invocations return an explanatory error.

    match pmf(0, p) {
        Ok(_) => unreachable!("The first success cannot arrive on the roll number 0. "),
        Err(e) => println!("pmf(0, p) fails: \t{}", e),
    }

    match pmf(3, 1.5) {
        Ok(_) => unreachable!("1.5 is not a valid probability. "),
        Err(e) => println!("pmf(3, 1.5) fails: \t{}", e),
    }

    // But note that cdf(0, p) is legitimate (and 0): the cdf accepts `k = 0`
    // even if the pmf does not.
    println!(
        "cdf(0, p) succeeds: \t{}",
        cdf(0, p).expect("0 trials is valid for the cdf. ")
    );

    println!("\n***********************************************************");
    println!("Parameter estimation: \n");

    let seed: u64 = 1_157_447;
    let mut rng: SmallRng = SmallRng::seed_from_u64(seed);

    let true_p: f64 = rng.random::<f64>() * 0.5 + 0.1;
    println!("The true p of our data: {}\n\t[0.1, 0.6]", true_p);

    let n_samples: usize = 5000;
    let true_distribution: ShiftedGeometric =
        ShiftedGeometric::new(true_p).expect("Parameter should be a valid probability. ");

    let samples: Vec<f64> = true_distribution.sample_multiple(n_samples);
    println!("We generate {n_samples} samples and estimate p from them. \n");

    let raw: f64 = estimate_p()
        .data(&samples)
        .bias_correction(false)
        .call()
        .expect("There are enough samples. ");
    let corrected: f64 = estimate_p()
        .data(&samples)
        .call()
        .expect("There are enough samples. ");

    println!("Real parameter: \t\t{}", true_p);
    println!("Estimation (raw): \t\t{}", raw);
    println!("Estimation (bias corrected): \t{}", corrected);
}
