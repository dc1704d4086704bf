//! # Shifted geometric distribution
//!
//! The [shifted geometric distribution](https://en.wikipedia.org/wiki/Geometric_distribution)
//! is a discrete distribution that represents the number of
//! [Bernoulli](https://en.wikipedia.org/wiki/Bernoulli_distribution) trials
//! needed to get exactly 1 success, where the count includes the successful
//! trial. Therefore it's support is the set `{1, 2, 3, ...}`.
//!
//! This is the variant *shifted* to start at 1. It *should not be confused*
//! with the other common variant (supported on `{0, 1, 2, ...}`), wich counts
//! only the failures **before** the first success.
//!
//! There are 2 ways of using this module:
//!  - The functions [pmf] and [cdf], wich take all the parameters on each
//!     call and validate them against the limits tables
//!     ([SHIFTED_GEOMETRIC_PMF_LIMITS] and [SHIFTED_GEOMETRIC_CDF_LIMITS]).
//!  - The [ShiftedGeometric] struct, wich validates `p` once (on construction)
//!     and also provides sampling, quantiles and the usual statistics.
//!

use rand::Rng;

use crate::{domain::Interval, errors::ShiftedGeomError, support::check_limits};

/// The [support](https://en.wikipedia.org/wiki/Support_(mathematics)) of the
/// distribution: the trial of the first success is a number in `[1,∞)`.
pub const SHIFTED_GEOMETRIC_SUPPORT: Interval = Interval::new_from(1.0);

/// Limits of the parameters of [pmf]:
///  - `k ∈ [1,∞)` (the support of the distribution)
///  - `p ∈ (0,1]`
pub const SHIFTED_GEOMETRIC_PMF_LIMITS: [(&str, Interval); 2] = [
    ("k", SHIFTED_GEOMETRIC_SUPPORT),
    ("p", Interval::new_open_closed(0.0, 1.0)),
];

/// Limits of the parameters of [cdf]:
///  - `k ∈ [0,∞)`
///  - `p ∈ (0,1]`
///
/// Note that the lower limit of `k` differs from [SHIFTED_GEOMETRIC_PMF_LIMITS]:
/// `cdf(0, p)` asks for the probability of a success within 0 trials, wich is
/// a legitimate question (with answer 0), while `pmf(0, p)` asks for a success
/// **on** a trial that never happened. Using a single shared table for both
/// functions would wrongly reject `cdf(0, p)`.
pub const SHIFTED_GEOMETRIC_CDF_LIMITS: [(&str, Interval); 2] = [
    ("k", Interval::new_from(0.0)),
    ("p", Interval::new_open_closed(0.0, 1.0)),
];

/// Shifted geometric distribution: [probability mass function](https://en.wikipedia.org/wiki/Probability_mass_function).
///
/// Returns the probability that the first success happens exactly on the
/// trial number `k`:
///
/// > pmf(k | p) = (1 - p)^(k - 1) * p
///
/// ## Inputs:
///
/// 1. `k`: the trial of the first success. `k ∈ {1, 2, 3, ...}`
/// 2. `p`: the probability of success of each trial. `0 < p <= 1`
///
/// The inputs are validated against [SHIFTED_GEOMETRIC_PMF_LIMITS] **before**
/// any computation. If any of them is outside it's limits,
/// [ShiftedGeomError::DomainErr] is returned instead of a value.
///
/// The returned value is always contained in `[0, 1]`.
pub fn pmf(k: i64, p: f64) -> Result<f64, ShiftedGeomError> {
    check_limits(&SHIFTED_GEOMETRIC_PMF_LIMITS, &[("k", k as f64), ("p", p)])?;

    // pmf(k | p) = (1 - p)^(k - 1) * p
    let exponent: i32 = i32::try_from(k - 1).unwrap_or(i32::MAX);
    let q: f64 = 1.0 - p;
    return Ok(q.powi(exponent) * p);
}

/// Shifted geometric distribution: [cumulative distribution function](https://en.wikipedia.org/wiki/Cumulative_distribution_function).
///
/// Returns the probability that the first success happens on the trial
/// number `k` or on an earlier one:
///
/// > cdf(k | p) = 1 - (1 - p)^k
///
/// ## Inputs:
///
/// 1. `k`: the number of trials performed. `k ∈ {0, 1, 2, ...}`
/// 2. `p`: the probability of success of each trial. `0 < p <= 1`
///
/// The inputs are validated against [SHIFTED_GEOMETRIC_CDF_LIMITS] **before**
/// any computation. If any of them is outside it's limits,
/// [ShiftedGeomError::DomainErr] is returned instead of a value.
///
/// Unlike in [pmf], `k = 0` is accepted here: with 0 trials performed the
/// first success cannot have happened yet, so `cdf(0, p) = 0` (for every
/// valid `p`, including `p = 1`).
///
/// The returned value is always contained in `[0, 1]` and is monotone in `k`.
pub fn cdf(k: i64, p: f64) -> Result<f64, ShiftedGeomError> {
    check_limits(&SHIFTED_GEOMETRIC_CDF_LIMITS, &[("k", k as f64), ("p", p)])?;

    // cdf(k | p) = 1 - (1 - p)^k
    let exponent: i32 = i32::try_from(k).unwrap_or(i32::MAX);
    let q: f64 = 1.0 - p;
    return Ok(1.0 - q.powi(exponent));
}

/// Represents a shifted geometric distribution with a fixed probability of
/// success `p`.
///
/// Unlike the free functions [pmf] and [cdf] (wich validate all their inputs
/// on every call), the parameter `p` is validated only once, when calling
/// [ShiftedGeometric::new].
#[derive(Debug, Clone, PartialEq)]
pub struct ShiftedGeometric {
    p: f64,
}

impl ShiftedGeometric {
    /// Creates a new [ShiftedGeometric] distribution.
    ///
    ///  - `p` indicates the probability of success of each trial.
    ///  - `p` must belong in the interval `(0.0, 1.0]`.
    ///      - Otherwise [ShiftedGeomError::DomainErr] will be returned.
    pub fn new(p: f64) -> Result<ShiftedGeometric, ShiftedGeomError> {
        check_limits(&SHIFTED_GEOMETRIC_PMF_LIMITS, &[("p", p)])?;

        return Ok(ShiftedGeometric { p });
    }

    /// Creates a new [ShiftedGeometric] distribution without checking if `p`
    /// is valid.
    ///
    /// ## Safety
    ///
    /// If the following conditions are not fullfilled, the returned
    /// distribution will be invalid (the methods may return wrong values,
    /// NaNs or panic):
    ///
    ///  - `p` must belong in the interval `(0.0, 1.0]`.
    ///  - In particular, `p` cannot be a NaN.
    #[must_use]
    pub const unsafe fn new_unchecked(p: f64) -> ShiftedGeometric {
        return ShiftedGeometric { p };
    }

    /// Return `p` (probability of success).
    #[must_use]
    pub const fn get_p(&self) -> f64 {
        return self.p;
    }

    /// Evaluates the [pmf] of the distribution at the trial number `k`.
    ///
    /// Returns [ShiftedGeomError::DomainErr] if `k` is outside the support
    /// (`k < 1`).
    pub fn pmf(&self, k: i64) -> Result<f64, ShiftedGeomError> {
        return pmf(k, self.p);
    }

    /// Evaluates the [cdf] of the distribution at the number of trials `k`.
    ///
    /// Returns [ShiftedGeomError::DomainErr] if `k < 0`.
    pub fn cdf(&self, k: i64) -> Result<f64, ShiftedGeomError> {
        return cdf(k, self.p);
    }

    /// Evaluates the [cdf] at multiple points.
    ///
    /// If any of the points is invalid, the error of the first one of them
    /// (in the order of `points`) is returned instead.
    pub fn cdf_multiple(&self, points: &[i64]) -> Result<Vec<f64>, ShiftedGeomError> {
        return points
            .iter()
            .map(|&k| self.cdf(k))
            .collect::<Result<Vec<f64>, ShiftedGeomError>>();
    }

    /// Evaluates the [quantile function](https://en.wikipedia.org/wiki/Quantile_function)
    /// at the probability `q`: the smallest trial number `k` such that
    /// `cdf(k) >= q`.
    ///
    ///  - If `q` is outside the range `[0.0, 1.0]`, it will be clamped into it.
    ///  - **Panicks** if `q` is a NaN.
    ///
    /// Note that `quantile(1.0)` diverges to `+inf` when `p < 1.0`: no finite
    /// number of trials is guaranteed to contain a success.
    ///
    /// Also, if you are considering calling this function multiple times, use
    /// [ShiftedGeometric::quantile_multiple] for better performance.
    #[must_use]
    pub fn quantile(&self, q: f64) -> f64 {
        if q.is_nan() {
            // q is not valid
            std::panic!(
                "Tried to evaluate the quantile function of ShiftedGeometric with a NaN value. \n"
            );
        }

        let value: [f64; 1] = [q];
        let quantile_vec: Vec<f64> = self.quantile_multiple(&value);
        return quantile_vec[0];
    }

    /// [ShiftedGeometric::quantile] evaluated at multiple points.
    ///
    ///  - Points outside the range `[0.0, 1.0]` are clamped into it.
    ///  - **Panicks** if any of the points is a NaN.
    #[must_use]
    pub fn quantile_multiple(&self, points: &[f64]) -> Vec<f64> {
        if points.is_empty() {
            return Vec::new();
        }

        // panic if NAN is found
        for point in points {
            if point.is_nan() {
                std::panic!("Found NaN in `quantile_multiple` of ShiftedGeometric. \n");
            }
        }

        // reserve exacly the elements needed
        let mut ret: Vec<f64> = Vec::new();
        ret.reserve_exact(points.len());

        if self.p == 1.0 {
            // the first trial always succeeds
            for _ in points {
                ret.push(1.0);
            }
            return ret;
        }

        /*
            cdf(k) = 1 - (1 - p)^k

            We want the smallest integer k (with k >= 1) fullfilling q <= cdf(k):

            q <= 1 - (1 - p)^k
            (1 - p)^k <= 1 - q
            k * ln(1 - p) <= ln(1 - q)
            k >= ln(1 - q) / ln(1 - p)

            (the inequality flips because ln(1 - p) < 0)

            Therefore we ceil the RHS and clamp it to the minimum of the
            support (1).
        */

        // precompute: `1 - p` and `ln(1 - p)`
        let fail_prob: f64 = 1.0 - self.p;
        let log_q: f64 = fail_prob.ln();

        points
            .iter()
            .map(|q: &f64| q.clamp(0.0, 1.0))
            .map(|q: f64| {
                let k: f64 = ((1.0 - q).ln() / log_q).ceil().max(1.0);

                if k <= 1.0 || k.is_infinite() {
                    return k;
                }

                // The division can land 1 ulp past an integer when `q` is an
                // exactly accumulated mass, wich would select 1 trial too
                // many. If `k - 1` trials already accumulate `q`, they are
                // the answer.
                let exponent: i32 = i32::try_from(k as i64 - 1).unwrap_or(i32::MAX);
                let previous_mass: f64 = 1.0 - fail_prob.powi(exponent);
                if q <= previous_mass {
                    return k - 1.0;
                }

                return k;
            })
            .for_each(|k: f64| ret.push(k));

        return ret;
    }

    /// Samples the distribution: returns the trial number of the first
    /// success. It is always an integer `1.0 <= k`, returned as [f64].
    ///
    /// Uses [inverse transform sampling](https://en.wikipedia.org/wiki/Inverse_transform_sampling):
    /// generate a uniform random number in `[0, 1)` and evaluate the quantile
    /// function there.
    ///
    /// If you are considering calling this function multiple times, use
    /// [ShiftedGeometric::sample_multiple] for better performance.
    #[must_use]
    pub fn sample(&self) -> f64 {
        let aux: Vec<f64> = self.sample_multiple(1);
        return aux[0];
    }

    /// Samples the distribution `n` times.
    ///
    /// See [ShiftedGeometric::sample] for the details of each sample.
    #[must_use]
    pub fn sample_multiple(&self, n: usize) -> Vec<f64> {
        let mut rng: rand::prelude::ThreadRng = rand::rng();

        let rand_quantiles: Vec<f64> = (0..n)
            .map(|_| rng.random::<f64>())
            .collect::<Vec<f64>>();

        return self.quantile_multiple(&rand_quantiles);
    }

    /// The [expected value](https://en.wikipedia.org/wiki/Expected_value) of
    /// the distribution: on average, `1/p` trials are needed until the first
    /// success.
    #[must_use]
    pub fn expected_value(&self) -> f64 {
        return 1.0 / self.p;
    }

    /// The [variance](https://en.wikipedia.org/wiki/Variance) of the
    /// distribution: `(1 - p)/p^2`.
    #[must_use]
    pub fn variance(&self) -> f64 {
        return (1.0 - self.p) / (self.p * self.p);
    }

    /// The [mode](https://en.wikipedia.org/wiki/Mode_(statistics)) of the
    /// distribution. It represents the most likely outcome.
    ///
    /// The pmf is strictly decreasing in `k`, therefore the mode is always `1.0`.
    #[must_use]
    pub fn mode(&self) -> f64 {
        return 1.0;
    }

    /// The [median](https://en.wikipedia.org/wiki/Median) of the distribution. If
    /// you sample a distribution, the median represnts the value that will be
    /// greater than 50% of your samples and also smaller than the other 50%.
    ///
    /// ### ShiftedGeometric:
    ///
    /// The median has the closed form solution `ceil(-1/log_2(1-p))`.
    /// It is not unique if `-1/log_2(1-p)` is an integer.
    #[must_use]
    pub fn median(&self) -> f64 {
        if self.p == 1.0 {
            return 1.0;
        }

        return (-1.0 / (1.0 - self.p).log2()).ceil().max(1.0);
    }

    /// The [skewness](https://en.wikipedia.org/wiki/Skewness) of the
    /// distribution: `(2 - p)/sqrt(1 - p)`.
    ///
    /// Diverges to `+inf` as `p` approaches `1.0`.
    #[must_use]
    pub fn skewness(&self) -> f64 {
        return (2.0 - self.p) / (1.0 - self.p).sqrt();
    }

    /// The [kurtosis](https://en.wikipedia.org/wiki/Kurtosis) of the
    /// distribution: the [ShiftedGeometric::excess_kurtosis] plus 3.
    #[must_use]
    pub fn kurtosis(&self) -> f64 {
        return self.excess_kurtosis() + 3.0;
    }

    /// The [excess kurtosis](https://en.wikipedia.org/wiki/Kurtosis#Excess_kurtosis)
    /// of the distribution: `6 + p^2/(1 - p)`.
    #[must_use]
    pub fn excess_kurtosis(&self) -> f64 {
        return 6.0 + self.p * self.p / (1.0 - self.p);
    }

    /// The [entropy](https://en.wikipedia.org/wiki/Information_entropy) of
    /// the distribution (in nats):
    ///
    /// > `[-(1 - p) * ln(1 - p) - p * ln(p)] / p`
    #[must_use]
    pub fn entropy(&self) -> f64 {
        if self.p == 1.0 {
            // degenerate distribution with no uncertainty
            return 0.0;
        }

        let q: f64 = 1.0 - self.p;

        let num: f64 = -q * q.ln() - self.p * self.p.ln();
        return num / self.p;
    }
}

impl Default for ShiftedGeometric {
    /// Returns the distribution with `p = 0.5` (a fair coin flipped until
    /// the first heads).
    fn default() -> Self {
        return ShiftedGeometric { p: 0.5 };
    }
}

/// Estimates the parameter `p` (probability of success) from observed data.
///
/// ## Inputs:
///
/// 1. `data`: the observed trial counts (each observation is the trial number
///    on wich the first success happened).
///      - Every observation must belong to [SHIFTED_GEOMETRIC_SUPPORT]
///        (`[1,∞)`), otherwise [ShiftedGeomError::DomainErr] is returned.
/// 2. `bias_correction`: (optional, deafult `true`) the maximum likelyhood
///    estimator of `p` is biased. When enabled, an estimate of the bias is
///    substracted from the result.
///
/// ## Returns:
///
/// The estimated `p`, or [ShiftedGeomError::NotEnoughSamples] if `data`
/// is empty.
///
/// ## Example:
///
/// ```
/// use ShiftedGeometric::distributions::ShiftedGeometric::estimate_p;
///
/// let data: [f64; 4] = [1.0, 2.0, 2.0, 3.0];
/// let estimation: f64 = estimate_p().data(&data).call().unwrap();
/// assert!(0.0 < estimation && estimation <= 1.0);
/// ```
#[bon::builder]
pub fn estimate_p(
    data: &[f64],
    #[builder(default = true)] bias_correction: bool,
) -> Result<f64, ShiftedGeomError> {
    /*
            Estimation of p:

        Using Maximum Likelyhood estimation with n samples x_i:

        pmf(x | p) = (1 - p)^(x - 1) * p
        ln(pmf(x | p)) = (x - 1) * ln(1 - p) + ln(p)
        d/dp ln(pmf(x | p)) = -(x - 1)/(1 - p) + 1/p

        0 = sumatory{x_i} [ -(x_i - 1)/(1 - p) + 1/p ]
        0 = n/p - 1/(1 - p) * sumatory{x_i} [ x_i - 1 ]
        n/p = (sumatory{x_i}[ x_i ] - n) / (1 - p)
        n * (1 - p) = p * (sumatory{x_i}[ x_i ] - n)
        n - n*p = p * sumatory{x_i}[ x_i ] - p*n
        n = p * sumatory{x_i}[ x_i ]
        p = n / sumatory{x_i}[ x_i ]
        p = 1/mean{x_i}

        However, it can be proven that this estimator is biased with a bias:

        b = p * (1 - p) / n

        As we cannot compute b exacly (it depends on the real unknown p), we
        estimate it with the estimation of p itself:

        est_b = p_mle * (1 - p_mle) / n
        p = p_mle - est_b
    */

    if data.is_empty() {
        return Err(ShiftedGeomError::NotEnoughSamples);
    }

    let mut accumulator: f64 = 0.0;
    for &observation in data {
        if !SHIFTED_GEOMETRIC_SUPPORT.contains(observation) {
            return Err(ShiftedGeomError::DomainErr {
                parameter: "data",
                value: observation,
                limits: SHIFTED_GEOMETRIC_SUPPORT,
            });
        }
        accumulator += observation;
    }

    let mean: f64 = accumulator / (data.len() as f64);
    let p_mle: f64 = 1.0 / mean;

    if !bias_correction {
        return Ok(p_mle);
    }

    let p: f64 = p_mle - p_mle * (1.0 - p_mle) / (data.len() as f64);
    return Ok(p);
}
