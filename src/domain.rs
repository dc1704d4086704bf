//! An [Interval] represents the set of values where a parameter is valid.
//!
//! In this library we use it to declare the limits of the parameters of the
//! [shifted geometric](crate::distributions::ShiftedGeometric) distribution
//! (see [crate::support::check_limits]). Each endpoint can be open or closed,
//! wich allows to represent intervals such as `(0,1]` (0 excluded, 1 included)
//! or `[1,∞)` (every value from 1 onwards).
//!

use core::f64;
use std::fmt;

/// One of the 2 endpoints of an [Interval].
///
/// The contained value can also be `+-inf` to represent unbounded intervals.
/// Note that an infinite endpoint never belongs to the interval itself,
/// therefore it should be [Endpoint::Open] (matching the usual `[1,∞)` notation).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Endpoint {
    /// The value **is** included in the interval.
    Closed(f64),
    /// The value is **not** included in the interval.
    Open(f64),
}

/// An interval of the real numbers with explicit endpoint inclusion.
///
/// The distributions of this library declare the limits of their parameters
/// as constant tables of [Interval]s (see
/// [SHIFTED_GEOMETRIC_PMF_LIMITS](crate::distributions::ShiftedGeometric::SHIFTED_GEOMETRIC_PMF_LIMITS)),
/// wich are then enforced by [crate::support::check_limits].
///
/// Has the **invariant** that the value of the lower endpoint is `<=` than
/// the value of the upper endpoint. An interval that does not fullfill it is
/// empty: [Interval::contains] always returns false for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    lower: Endpoint,
    upper: Endpoint,
}

impl Endpoint {
    /// Returns the contained value, regardless of the openness.
    #[must_use]
    pub const fn value(&self) -> f64 {
        return match self {
            Endpoint::Closed(v) | Endpoint::Open(v) => *v,
        };
    }
}

impl Interval {
    /// Creates a new [Interval] from it's 2 endpoints.
    #[must_use]
    pub const fn new(lower: Endpoint, upper: Endpoint) -> Interval {
        return Interval { lower, upper };
    }

    /// `[min,∞)`: all the values from `min_inclusive` onwards.
    /// The value **is** included.
    #[must_use]
    pub const fn new_from(min_inclusive: f64) -> Interval {
        return Interval {
            lower: Endpoint::Closed(min_inclusive),
            upper: Endpoint::Open(f64::INFINITY),
        };
    }

    /// `(min,max]`: all the values greater than `min_exclusive` (**not**
    /// included) up to `max_inclusive` (included).
    #[must_use]
    pub const fn new_open_closed(min_exclusive: f64, max_inclusive: f64) -> Interval {
        return Interval {
            lower: Endpoint::Open(min_exclusive),
            upper: Endpoint::Closed(max_inclusive),
        };
    }

    /// Returns true if `x` belongs to the interval.
    ///
    /// A NaN (Not a Number) never belongs to any interval.
    #[must_use]
    pub fn contains(&self, x: f64) -> bool {
        let lower_ok: bool = match self.lower {
            Endpoint::Closed(min) => min <= x,
            Endpoint::Open(min) => min < x,
        };

        let upper_ok: bool = match self.upper {
            Endpoint::Closed(max) => x <= max,
            Endpoint::Open(max) => x < max,
        };

        return lower_ok && upper_ok;
    }

    /// Returns the upper and lower bounds of the interval, ignoring the openness.
    ///
    /// Take into account that the values can also include positive and negative
    /// infinity. It is guaranteed that `return.0 <= return.1` (assuming the
    /// interval fullfills it's invariant).
    #[must_use]
    pub const fn get_bounds(&self) -> (f64, f64) {
        return (self.lower.value(), self.upper.value());
    }
}

impl fmt::Display for Interval {
    /// Displays the interval in the usual mathematical notation: `(0,1]`, `[1,∞)`...
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (open_bracket, lower_value): (char, f64) = match self.lower {
            Endpoint::Closed(v) => ('[', v),
            Endpoint::Open(v) => ('(', v),
        };
        let (close_bracket, upper_value): (char, f64) = match self.upper {
            Endpoint::Closed(v) => (']', v),
            Endpoint::Open(v) => (')', v),
        };

        write!(f, "{open_bracket}")?;
        write_endpoint_value(f, lower_value)?;
        write!(f, ",")?;
        write_endpoint_value(f, upper_value)?;
        write!(f, "{close_bracket}")?;
        return Ok(());
    }
}

/// Writes the value of an endpoint, using `∞` for the infinities.
fn write_endpoint_value(f: &mut fmt::Formatter<'_>, value: f64) -> fmt::Result {
    if value == f64::INFINITY {
        return write!(f, "∞");
    }
    if value == f64::NEG_INFINITY {
        return write!(f, "-∞");
    }
    return write!(f, "{value}");
}
