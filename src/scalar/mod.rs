use std::fmt::{Debug, Display, LowerExp};

/// Floating point type used for times, states and tolerances.
///
/// Implemented for `f64` (the default everywhere) and `f32`.
pub trait Scalar:
    nalgebra::Scalar
    + num_traits::Float
    + num_traits::FromPrimitive
    + num_traits::ToPrimitive
    + Display
    + LowerExp
    + Debug
    + Copy
    + PartialOrd
    + Send
    + Sync
{
    /// Lossy conversion used for error messages and log output.
    fn to_f64_lossy(self) -> f64 {
        self.to_f64().unwrap_or(f64::NAN)
    }
}

impl Scalar for f64 {}

impl Scalar for f32 {}
