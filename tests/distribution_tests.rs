use ::ShiftedGeometric::distributions::ShiftedGeometric::*;
use ::ShiftedGeometric::errors::ShiftedGeomError;

#[inline]
fn assert_approx_eq(a: f64, b: f64) {
    let eps: f64 = 1.0e-6;

    assert!(
        (a - b).abs() < eps,
        "assertion failed: `(left !== right)` \
         (left: `{:?}`, right: `{:?}`, expect diff: `{:?}`, real diff: `{:?}`)",
        a,
        b,
        eps,
        (a - b).abs()
    );
}

#[cfg(test)]
mod pmf_tests {

    use super::*;

    #[test]
    fn test_pmf_at_the_first_trial() {
        // pmf(1, p) = (1 - p)^0 * p = p
        let probabilities: [f64; 5] = [0.05, 0.25, 0.5, 0.75, 1.0];
        for p in probabilities {
            assert_eq!(pmf(1, p).expect("Both parameters are valid"), p);
        }
    }

    #[test]
    fn test_pmf_concrete_values() {
        // pmf(3, 0.5) = 0.5^2 * 0.5 = 0.125
        assert_approx_eq(pmf(3, 0.5).unwrap(), 0.125);
        assert_approx_eq(pmf(1, 0.25).unwrap(), 0.25);
        assert_approx_eq(pmf(2, 0.25).unwrap(), 0.1875);
        assert_approx_eq(pmf(4, 0.1).unwrap(), 0.0729);
    }

    #[test]
    fn test_pmf_is_a_probability() {
        let probabilities: [f64; 6] = [0.01, 0.2, 0.5, 0.8, 0.99, 1.0];
        for k in 1..=64_i64 {
            for p in probabilities {
                let mass: f64 = pmf(k, p).unwrap();
                assert!(0.0 <= mass && mass <= 1.0, "pmf({k}, {p}) = {mass}");
            }
        }
    }

    #[test]
    fn test_pmf_with_certain_success() {
        // p = 1: all the mass is on the first trial
        assert_eq!(pmf(1, 1.0).unwrap(), 1.0);
        for k in 2..=20_i64 {
            assert_eq!(pmf(k, 1.0).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_pmf_underflows_to_zero_for_huge_k() {
        // (1 - p)^(k - 1) underflows to 0 long before k reaches this value
        assert_eq!(pmf(10_000_000_000, 0.5).unwrap(), 0.0);
        assert_eq!(pmf(i64::MAX, 0.5).unwrap(), 0.0);
    }

    #[test]
    fn test_pmf_rejects_k_outside_the_support() {
        assert!(pmf(0, 0.5).is_err());
        assert!(pmf(-3, 0.5).is_err());
    }

    #[test]
    fn test_pmf_rejects_invalid_p() {
        assert!(pmf(5, 0.0).is_err());
        assert!(pmf(5, -0.2).is_err());
        assert!(pmf(5, 1.0000001).is_err());
        assert!(pmf(5, 1.5).is_err());
        assert!(pmf(5, 27.0).is_err());
        assert!(pmf(5, f64::NAN).is_err());
        assert!(pmf(5, f64::INFINITY).is_err());
    }
}

#[cfg(test)]
mod cdf_tests {

    use super::*;

    #[test]
    fn test_cdf_concrete_values() {
        // cdf(3, 0.5) = 1 - 0.5^3 = 0.875
        assert_approx_eq(cdf(3, 0.5).unwrap(), 0.875);
        assert_approx_eq(cdf(1, 0.25).unwrap(), 0.25);
        assert_approx_eq(cdf(10, 0.1).unwrap(), 1.0 - 0.9_f64.powi(10));
    }

    #[test]
    fn test_cdf_at_zero_trials() {
        // `k = 0` belongs to the cdf limits (but not to the pmf ones): with
        // no trials performed, the first success cannot have happened yet.
        // A single shared limits table for both functions would reject it.
        let probabilities: [f64; 4] = [0.05, 0.5, 0.999, 1.0];
        for p in probabilities {
            assert_eq!(cdf(0, p).unwrap(), 0.0);
        }

        assert!(pmf(0, 0.5).is_err());
    }

    #[test]
    fn test_cdf_is_monotone_in_k() {
        let probabilities: [f64; 3] = [0.1, 0.4, 0.9];
        for p in probabilities {
            let mut previous: f64 = cdf(0, p).unwrap();
            for k in 1..=50_i64 {
                let current: f64 = cdf(k, p).unwrap();
                assert!(previous <= current, "cdf({k}, {p}) decreased");
                previous = current;
            }
        }
    }

    #[test]
    fn test_cdf_complement() {
        // 1 - cdf(k, p) = (1 - p)^k (probability of k failures in a row)
        let probabilities: [f64; 3] = [0.2, 0.5, 0.77];
        for p in probabilities {
            for k in 0..=30_i64 {
                let survival: f64 = 1.0 - cdf(k, p).unwrap();
                assert_approx_eq(survival, (1.0 - p).powi(k as i32));
            }
        }
    }

    #[test]
    fn test_cdf_accumulates_the_pmf() {
        let p: f64 = 0.35;
        let mut accumulator: f64 = 0.0;
        for k in 1..=40_i64 {
            accumulator += pmf(k, p).unwrap();
            assert_approx_eq(cdf(k, p).unwrap(), accumulator);
        }
    }

    #[test]
    fn test_cdf_with_certain_success() {
        assert_eq!(cdf(0, 1.0).unwrap(), 0.0);
        for k in 1..=10_i64 {
            assert_eq!(cdf(k, 1.0).unwrap(), 1.0);
        }
    }

    #[test]
    fn test_cdf_saturates_to_one_for_huge_k() {
        assert_eq!(cdf(10_000_000_000, 0.5).unwrap(), 1.0);
        assert_eq!(cdf(i64::MAX, 0.5).unwrap(), 1.0);
    }

    #[test]
    fn test_cdf_rejects_invalid_parameters() {
        assert!(cdf(-1, 0.5).is_err());
        assert!(cdf(-100, 0.5).is_err());
        assert!(cdf(3, 0.0).is_err());
        assert!(cdf(3, -1.0).is_err());
        assert!(cdf(3, 1.0000001).is_err());
        assert!(cdf(3, f64::NAN).is_err());
    }
}

#[cfg(test)]
mod struct_tests {

    use super::*;

    #[test]
    fn test_new_validates_p() {
        assert!(ShiftedGeometric::new(0.3).is_ok());
        assert!(ShiftedGeometric::new(1.0).is_ok());
        assert!(ShiftedGeometric::new(0.00001).is_ok());

        assert!(ShiftedGeometric::new(0.0).is_err());
        assert!(ShiftedGeometric::new(-1.0).is_err());
        assert!(ShiftedGeometric::new(1.5).is_err());
        assert!(ShiftedGeometric::new(f64::NAN).is_err());
        assert!(ShiftedGeometric::new(f64::INFINITY).is_err());
    }

    #[test]
    fn test_new_reports_the_offending_parameter() {
        match ShiftedGeometric::new(2.0) {
            Err(ShiftedGeomError::DomainErr {
                parameter, value, ..
            }) => {
                assert_eq!(parameter, "p");
                assert_eq!(value, 2.0);
            }
            other => panic!("Expected a domain error, got: {:?}", other),
        }
    }

    #[test]
    fn test_get_p() {
        let distribution: ShiftedGeometric =
            ShiftedGeometric::new(0.3).expect("Parameter should be a valid probability");
        assert_eq!(distribution.get_p(), 0.3);
    }

    #[test]
    fn test_new_unchecked() {
        // the caller guarantees that `p` is a valid probability
        let distribution: ShiftedGeometric = unsafe { ShiftedGeometric::new_unchecked(0.25) };
        assert_eq!(distribution.get_p(), 0.25);
        assert_eq!(distribution.pmf(1).unwrap(), 0.25);
        assert_eq!(
            distribution,
            ShiftedGeometric::new(0.25).expect("Parameter should be a valid probability")
        );
    }

    #[test]
    fn test_default() {
        let distribution: ShiftedGeometric = ShiftedGeometric::default();
        assert_eq!(distribution.get_p(), 0.5);
        assert_eq!(
            distribution,
            ShiftedGeometric::new(0.5).expect("Parameter should be a valid probability")
        );
    }

    #[test]
    fn test_methods_match_the_free_functions() {
        let p: f64 = 0.4;
        let distribution: ShiftedGeometric =
            ShiftedGeometric::new(p).expect("Parameter should be a valid probability");

        for k in 1..=12_i64 {
            assert_eq!(distribution.pmf(k).unwrap(), pmf(k, p).unwrap());
            assert_eq!(distribution.cdf(k).unwrap(), cdf(k, p).unwrap());
        }

        assert!(distribution.pmf(0).is_err());
        assert!(distribution.cdf(-1).is_err());
    }

    #[test]
    fn test_cdf_multiple() {
        let distribution: ShiftedGeometric =
            ShiftedGeometric::new(0.5).expect("Parameter should be a valid probability");

        let points: Vec<i64> = vec![0, 1, 2, 3];
        let cdf_values: Vec<f64> = distribution.cdf_multiple(&points).unwrap();
        assert_eq!(cdf_values, vec![0.0, 0.5, 0.75, 0.875]);

        // the first invalid point determines the error
        assert!(distribution.cdf_multiple(&[1, -1, 2]).is_err());
        assert!(distribution.cdf_multiple(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_quantile() {
        let distribution: ShiftedGeometric =
            ShiftedGeometric::new(0.5).expect("Parameter should be a valid probability");

        assert_eq!(distribution.quantile(0.0), 1.0);
        assert_eq!(distribution.quantile(0.5), 1.0);
        assert_eq!(distribution.quantile(0.6), 2.0);
        assert_eq!(distribution.quantile(0.876), 4.0);
        assert_eq!(distribution.quantile(0.9), 4.0);
        assert_eq!(distribution.quantile(1.0), f64::INFINITY);
    }

    #[test]
    fn test_quantile_clamps_out_of_range_probabilities() {
        let distribution: ShiftedGeometric =
            ShiftedGeometric::new(0.5).expect("Parameter should be a valid probability");

        assert_eq!(distribution.quantile(-0.5), 1.0);
        assert_eq!(distribution.quantile(2.0), f64::INFINITY);
    }

    #[test]
    fn test_quantile_is_the_smallest_k_with_enough_accumulated_mass() {
        let p: f64 = 0.3;
        let distribution: ShiftedGeometric =
            ShiftedGeometric::new(p).expect("Parameter should be a valid probability");

        let probabilities: [f64; 5] = [0.05, 0.35, 0.65, 0.9, 0.99];
        for q in probabilities {
            let k: f64 = distribution.quantile(q);
            let k_int: i64 = k as i64;

            // cdf(k) >= q but cdf(k - 1) < q
            assert!(q <= distribution.cdf(k_int).unwrap(), "quantile({q}) = {k}");
            if 1 < k_int {
                assert!(distribution.cdf(k_int - 1).unwrap() < q, "quantile({q}) = {k}");
            }
        }
    }

    #[test]
    fn test_quantile_recovers_the_trial_count_from_its_cdf() {
        // `k` trials accumulate exactly `cdf(k)` of mass and `k - 1` trials
        // accumulate strictly less, so `quantile(cdf(k))` must be `k` itself.
        let probabilities: [f64; 6] = [0.1, 0.25, 0.3, 0.5, 0.75, 0.9];
        for p in probabilities {
            let distribution: ShiftedGeometric =
                ShiftedGeometric::new(p).expect("Parameter should be a valid probability");

            for k in 1..=40_i64 {
                let mass: f64 = distribution.cdf(k).unwrap();
                if mass == 1.0 {
                    // saturated: `k` is no longer the smallest count with this mass
                    break;
                }

                assert_eq!(distribution.quantile(mass), k as f64, "p = {p}, k = {k}");
            }
        }
    }

    #[test]
    fn test_quantile_multiple() {
        let distribution: ShiftedGeometric =
            ShiftedGeometric::new(0.5).expect("Parameter should be a valid probability");

        let points: [f64; 4] = [0.1, 0.6, 0.876, 1.0];
        let quantiles: Vec<f64> = distribution.quantile_multiple(&points);
        assert_eq!(quantiles, vec![1.0, 2.0, 4.0, f64::INFINITY]);

        assert!(distribution.quantile_multiple(&[]).is_empty());
    }

    #[test]
    fn test_quantile_with_certain_success() {
        let distribution: ShiftedGeometric =
            ShiftedGeometric::new(1.0).expect("Parameter should be a valid probability");

        let probabilities: [f64; 4] = [0.0, 0.5, 0.999, 1.0];
        for q in probabilities {
            assert_eq!(distribution.quantile(q), 1.0);
        }
    }

    #[test]
    #[should_panic(expected = "NaN")]
    fn test_quantile_panicks_on_nan() {
        let distribution: ShiftedGeometric =
            ShiftedGeometric::new(0.5).expect("Parameter should be a valid probability");
        let _ = distribution.quantile(f64::NAN);
    }
}

#[cfg(test)]
mod statistics_tests {

    use super::*;

    #[test]
    fn test_expected_value() {
        let distribution: ShiftedGeometric =
            ShiftedGeometric::new(0.25).expect("Parameter should be a valid probability");
        assert_approx_eq(distribution.expected_value(), 4.0);

        let certain: ShiftedGeometric =
            ShiftedGeometric::new(1.0).expect("Parameter should be a valid probability");
        assert_eq!(certain.expected_value(), 1.0);
    }

    #[test]
    fn test_variance() {
        // (1 - p) / p^2
        let distribution: ShiftedGeometric =
            ShiftedGeometric::new(0.25).expect("Parameter should be a valid probability");
        assert_approx_eq(distribution.variance(), 12.0);

        let certain: ShiftedGeometric =
            ShiftedGeometric::new(1.0).expect("Parameter should be a valid probability");
        assert_eq!(certain.variance(), 0.0);
    }

    #[test]
    fn test_mode() {
        let distribution: ShiftedGeometric =
            ShiftedGeometric::new(0.12).expect("Parameter should be a valid probability");
        assert_eq!(distribution.mode(), 1.0);
    }

    #[test]
    fn test_median() {
        // p = 0.5: cdf(1) = 0.5, therefore the first trial already accumulates
        // half of the mass
        let fair: ShiftedGeometric =
            ShiftedGeometric::new(0.5).expect("Parameter should be a valid probability");
        assert_eq!(fair.median(), 1.0);

        // p = 0.1: cdf(6) ≈ 0.4686 < 0.5 <= cdf(7) ≈ 0.5217
        let rare: ShiftedGeometric =
            ShiftedGeometric::new(0.1).expect("Parameter should be a valid probability");
        assert_eq!(rare.median(), 7.0);

        let certain: ShiftedGeometric =
            ShiftedGeometric::new(1.0).expect("Parameter should be a valid probability");
        assert_eq!(certain.median(), 1.0);
    }

    #[test]
    fn test_median_agrees_with_the_cdf() {
        let probabilities: [f64; 5] = [0.05, 0.2, 0.35, 0.6, 0.85];
        for p in probabilities {
            let distribution: ShiftedGeometric =
                ShiftedGeometric::new(p).expect("Parameter should be a valid probability");
            let median: f64 = distribution.median();

            // at least half of the mass is accumulated at the median,
            // but not before it
            assert!(0.5 <= distribution.cdf(median as i64).unwrap(), "p: {p}");
            if 1.0 < median {
                assert!(distribution.cdf(median as i64 - 1).unwrap() < 0.5, "p: {p}");
            }
        }
    }

    #[test]
    fn test_skewness() {
        // (2 - p) / sqrt(1 - p)
        let distribution: ShiftedGeometric =
            ShiftedGeometric::new(0.5).expect("Parameter should be a valid probability");
        assert_approx_eq(distribution.skewness(), 1.5 / 0.5_f64.sqrt());
    }

    #[test]
    fn test_kurtosis() {
        // excess kurtosis: 6 + p^2/(1 - p)
        let distribution: ShiftedGeometric =
            ShiftedGeometric::new(0.5).expect("Parameter should be a valid probability");
        assert_approx_eq(distribution.excess_kurtosis(), 6.5);
        assert_approx_eq(distribution.kurtosis(), 9.5);
    }

    #[test]
    fn test_entropy() {
        // [-(1 - p) * ln(1 - p) - p * ln(p)] / p
        let fair: ShiftedGeometric =
            ShiftedGeometric::new(0.5).expect("Parameter should be a valid probability");
        assert_approx_eq(fair.entropy(), 2.0 * std::f64::consts::LN_2);

        // a degenerate distribution has no uncertainty
        let certain: ShiftedGeometric =
            ShiftedGeometric::new(1.0).expect("Parameter should be a valid probability");
        assert_eq!(certain.entropy(), 0.0);
    }
}
