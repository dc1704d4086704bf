#![allow(
    non_snake_case,
    clippy::needless_return,
    clippy::assign_op_pattern,
    clippy::excessive_precision
)]

#![warn(
    clippy::all,
    clippy::restriction,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo,
)]
// ^Disable warning "crate `ShiftedGeometric` should have a snake case name convert the identifier to snake case: `shifted_geometric`"
// The rest of the names will follow the snake_case convention.

//! # Shifted Geometric
//!
//!
//! This library implements the
//! [shifted geometric distribution](https://en.wikipedia.org/wiki/Geometric_distribution):
//! the discrete distribution of the number of
//! [Bernoulli](https://en.wikipedia.org/wiki/Bernoulli_distribution) trials needed to
//! get exactly 1 success, where the count includes the successful trial. It's support
//! starts at 1: the first success can arrive, at the earliest, on the first trial.
//!
//! It provides:
//!
//! - [x] Validated evaluation of the [pmf](distributions::ShiftedGeometric::pmf)
//!     and the [cdf](distributions::ShiftedGeometric::cdf)
//! - [x] Parameter limits declared as constant tables and enforced by
//!     [support::check_limits]
//! - [x] Quantile function and random sampling
//! - [x] Closed form statistics (expected value, variance, median...)
//! - [x] Parameter estimation from observed data
//! - [x] Updated to rust 2024 version
//! - [ ] Other discrete distributions (?)
//!
//! ## Validation
//!
//! Every fallible function of this library follows the same pattern: the limits
//! of it's parameters are declared in a constant table (for example
//! [SHIFTED_GEOMETRIC_PMF_LIMITS](distributions::ShiftedGeometric::SHIFTED_GEOMETRIC_PMF_LIMITS))
//! and the inputs are validated against it **before** any computation. An
//! invocation with an invalid input never returns a value: it returns a
//! [DomainErr](errors::ShiftedGeomError::DomainErr) that identifies the
//! offending parameter, the value it had and the limits it did not fullfill.
//!
//! Note that the [pmf](distributions::ShiftedGeometric::pmf) and the
//! [cdf](distributions::ShiftedGeometric::cdf) declare different limits for `k`:
//! the pmf only accepts the support of the distribution (`k ∈ [1,∞)`) while the
//! cdf also accepts `k = 0` (asking for a success within 0 trials is legitimate,
//! and the answer is 0).
//!
//! ## Basic usage
//!
//! ```
//! use ::ShiftedGeometric::distributions::ShiftedGeometric::*;
//!
//! // On each roll we have a probability of 1/6 of getting the number we want.
//! let distribution: ShiftedGeometric = ShiftedGeometric::new(1.0 / 6.0).unwrap();
//!
//! // Probability that the first correct roll is the 3rd one:
//! let mass: f64 = distribution.pmf(3).unwrap();
//! // Probability that it arrives within the first 3 rolls:
//! let accumulated: f64 = distribution.cdf(3).unwrap();
//!
//! assert!(mass < accumulated);
//!
//! // On average we need 6 rolls.
//! assert!((distribution.expected_value() - 6.0).abs() < 0.000001);
//! ```
//!
//! ***
//!

pub mod distributions;
pub mod domain;
pub mod errors;
pub mod support;
