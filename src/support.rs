//! Support functions to validate the parameters of a distribution.
//!
//! The main entry point is [check_limits]. Each fallible function of this
//! library declares the limits of it's parameters in a constant table
//! (a mapping from parameter names to [Interval]s) and calls [check_limits]
//! as it's first statement, before any computation: invalid inputs never
//! reach the numerical code.
//!

use crate::domain::Interval;
use crate::errors::ShiftedGeomError;

/// Checks that every supplied value is inside the limits declared for it's name.
///
/// ## Inputs:
///
/// 1. `limits`: a mapping from parameter names to the [Interval] of valid values.
/// 2. `values`: a mapping from parameter names to the values to validate.
///
/// ## Returns:
///
/// `Ok(())` if every value belongs to the interval declared for it's name.
/// Otherwise the first offending value (in the order of `values`) is reported
/// with [ShiftedGeomError::DomainErr], wich carries the parameter name, the
/// value and the violated limits.
///
/// Notes:
///  - A NaN (Not a Number) value does not belong to any interval, so it
///     always fails the check.
///  - A value whose name is not declared in `limits` is unrestricted and
///     passes the check. The limits tables of this library declare every
///     parameter, so from within the library this case does not happen.
pub fn check_limits(
    limits: &[(&'static str, Interval)],
    values: &[(&'static str, f64)],
) -> Result<(), ShiftedGeomError> {
    for &(name, value) in values {
        let declared: Option<&(&'static str, Interval)> =
            limits.iter().find(|&&(limit_name, _)| limit_name == name);

        let interval: Interval = match declared {
            Some(&(_, interval)) => interval,
            None => continue,
        };

        if !interval.contains(value) {
            return Err(ShiftedGeomError::DomainErr {
                parameter: name,
                value,
                limits: interval,
            });
        }
    }

    return Ok(());
}
