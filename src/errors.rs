use thiserror::Error;

use crate::domain::Interval;

/// The error type of this library.
///
/// Every fallible operation returns one of this variants, so the caller can know
/// exacly wich precondition was violated (and by wich parameter).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShiftedGeomError {
    /// A parameter was evaluated outside it's declared limits.
    ///
    /// Contains the name of the offending parameter, the value it had and the
    /// [Interval] of valid values it did not fullfill. Note that a NaN
    /// (Not a Number) value is outside every interval, so it also produces
    /// this error.
    #[error("The parameter `{parameter}` (value: {value}) is outside it's limits {limits}. ")]
    DomainErr {
        /// Name of the parameter that was outside it's limits.
        parameter: &'static str,
        /// The value that the parameter had.
        value: f64,
        /// The limits that the value did not fullfill.
        limits: Interval,
    },
    /// There were not enough samples to do the operation.
    #[error("There were not enough samples to do the operation. ")]
    NotEnoughSamples,
}
