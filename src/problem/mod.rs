use nalgebra::DVector;

use crate::{error::ConfigurationError, Scalar};

pub mod builder;
pub mod json;
pub mod schedule;

pub use builder::{AbsoluteTolerance, ProblemConfigBuilder};
pub use schedule::OutputTimes;

/// Constants of the three-species chemical kinetics problem used by [ProblemConfig::robertson].
pub mod robertson {
    /// number of equations
    pub const NEQ: usize = 3;
    /// initial state components
    pub const X1: f64 = 1.0;
    pub const X2: f64 = 0.0;
    pub const X3: f64 = 0.0;
    /// scalar relative tolerance
    pub const RTOL: f64 = 1.0e-4;
    /// vector absolute tolerance components
    pub const ATOL1: f64 = 1.0e-8;
    pub const ATOL2: f64 = 1.0e-14;
    pub const ATOL3: f64 = 1.0e-6;
    /// initial time
    pub const T0: f64 = 0.0;
    /// first output time
    pub const T1: f64 = 0.4;
    /// output time factor
    pub const TMULT: f64 = 10.0;
    /// number of output times
    pub const NOUT: usize = 12;
}

/// Immutable description of an initial-value problem and the times at which its solution is wanted.
///
/// The record holds the initial state `y(t0)`, a scalar relative tolerance, one absolute tolerance per
/// state component, and a geometric output schedule `t1, t1*tmult, t1*tmult^2, ...` of `nout` times.
/// All invariants are checked on construction, so a `ProblemConfig` in hand is always valid:
///
/// - every tolerance is strictly positive and finite,
/// - `initial_state` and `atol` both have `equation_count() >= 1` entries,
/// - `tmult` is strictly positive and finite, and `nout >= 1`.
///
/// # Example
///
/// ```rust
/// use ivp_problem::ProblemConfig;
///
/// let problem = ProblemConfig::<f64>::robertson();
/// assert_eq!(problem.equation_count(), 3);
/// assert_eq!(problem.output_time(1), Some(0.4));
/// assert_eq!(problem.output_time(3), Some(40.0));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ProblemConfig<T: Scalar = f64> {
    initial_state: DVector<T>,
    rtol: T,
    atol: DVector<T>,
    t0: T,
    t1: T,
    tmult: T,
    nout: usize,
}

impl<T: Scalar> ProblemConfig<T> {
    /// Create a new problem, checking every invariant.
    pub fn new(
        initial_state: Vec<T>,
        rtol: T,
        atol: Vec<T>,
        t0: T,
        t1: T,
        tmult: T,
        nout: usize,
    ) -> Result<Self, ConfigurationError> {
        let neq = initial_state.len();
        if neq == 0 {
            return Err(ConfigurationError::EmptyState);
        }
        if initial_state.iter().any(|x| !x.is_finite()) {
            return Err(ConfigurationError::NonFinite {
                field: "initial_state",
            });
        }
        if !rtol.is_finite() {
            return Err(ConfigurationError::NonFinite { field: "rtol" });
        }
        if rtol <= T::zero() {
            return Err(ConfigurationError::NonPositiveRelativeTolerance);
        }
        if atol.len() != neq {
            return Err(ConfigurationError::AbsoluteToleranceLength {
                expected: neq,
                found: atol.len(),
            });
        }
        for (index, &a) in atol.iter().enumerate() {
            if !a.is_finite() {
                return Err(ConfigurationError::NonFinite { field: "atol" });
            }
            if a <= T::zero() {
                return Err(ConfigurationError::NonPositiveAbsoluteTolerance { index });
            }
        }
        if !t0.is_finite() {
            return Err(ConfigurationError::NonFinite { field: "t0" });
        }
        if !t1.is_finite() {
            return Err(ConfigurationError::NonFinite { field: "t1" });
        }
        if !tmult.is_finite() {
            return Err(ConfigurationError::NonFinite { field: "tmult" });
        }
        if tmult <= T::zero() {
            return Err(ConfigurationError::NonPositiveMultiplier);
        }
        if nout == 0 {
            return Err(ConfigurationError::ZeroOutputCount);
        }
        Ok(Self {
            initial_state: DVector::from_vec(initial_state),
            rtol,
            atol: DVector::from_vec(atol),
            t0,
            t1,
            tmult,
            nout,
        })
    }

    /// The three-species kinetics problem: y(0) = (1, 0, 0), rtol = 1e-4,
    /// atol = (1e-8, 1e-14, 1e-6), outputs in decades from t = 0.4 to t = 4e10.
    pub fn robertson() -> Self {
        use robertson::*;
        let c = |x: f64| T::from_f64(x).unwrap_or_else(T::nan);
        Self {
            initial_state: DVector::from_vec(vec![c(X1), c(X2), c(X3)]),
            rtol: c(RTOL),
            atol: DVector::from_vec(vec![c(ATOL1), c(ATOL2), c(ATOL3)]),
            t0: c(T0),
            t1: c(T1),
            tmult: c(TMULT),
            nout: NOUT,
        }
    }

    /// Dimension of the state vector.
    pub fn equation_count(&self) -> usize {
        self.initial_state.len()
    }

    pub fn initial_state(&self) -> &DVector<T> {
        &self.initial_state
    }

    pub fn rtol(&self) -> T {
        self.rtol
    }

    pub fn atol(&self) -> &DVector<T> {
        &self.atol
    }

    pub fn t0(&self) -> T {
        self.t0
    }

    pub fn t1(&self) -> T {
        self.t1
    }

    pub fn tmult(&self) -> T {
        self.tmult
    }

    pub fn nout(&self) -> usize {
        self.nout
    }

    /// The `k`-th output time (1-based), `t1 * tmult^(k-1)`, or `None` if `k` is not in `1..=nout`.
    ///
    /// Computed by repeated multiplication, so `output_time(k + 1) == output_time(k) * tmult` holds exactly.
    pub fn output_time(&self, k: usize) -> Option<T> {
        if k == 0 || k > self.nout {
            return None;
        }
        self.output_times().nth(k - 1)
    }

    /// Iterator over all `nout` output times in order.
    pub fn output_times(&self) -> OutputTimes<T> {
        OutputTimes::new(self.t1, self.tmult, self.nout)
    }

    /// The last output time.
    pub fn final_time(&self) -> T {
        self.output_times().last().unwrap_or(self.t1)
    }
}

impl<T: Scalar> Default for ProblemConfig<T> {
    fn default() -> Self {
        Self::robertson()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type P = ProblemConfig<f64>;

    fn robertson_vectors() -> (Vec<f64>, Vec<f64>) {
        (vec![1.0, 0.0, 0.0], vec![1.0e-8, 1.0e-14, 1.0e-6])
    }

    #[test]
    fn robertson_has_three_equations() {
        let p = P::robertson();
        assert_eq!(p.equation_count(), 3);
        assert_eq!(p.initial_state().len(), 3);
        assert_eq!(p.atol().len(), 3);
        assert_eq!(p.initial_state().as_slice(), &[1.0, 0.0, 0.0]);
        assert_eq!(p.atol().as_slice(), &[1.0e-8, 1.0e-14, 1.0e-6]);
        assert_eq!(p.rtol(), 1.0e-4);
        assert_eq!(p.t0(), 0.0);
        assert_eq!(p.t1(), 0.4);
        assert_eq!(p.tmult(), 10.0);
        assert_eq!(p.nout(), 12);
        assert!(p.rtol() > 0.0);
        assert!(p.atol().iter().all(|&a| a > 0.0));
    }

    #[test]
    fn robertson_matches_validated_construction() {
        let (y0, atol) = robertson_vectors();
        let p = P::new(y0, 1.0e-4, atol, 0.0, 0.4, 10.0, 12).unwrap();
        assert_eq!(p, P::robertson());
        assert_eq!(P::default(), P::robertson());
    }

    #[test]
    fn first_output_time_is_t1() {
        let p = P::robertson();
        assert_eq!(p.output_time(1), Some(p.t1()));
    }

    #[test]
    fn output_times_grow_geometrically() {
        let p = P::robertson();
        for k in 1..p.nout() {
            let a = p.output_time(k).unwrap();
            let b = p.output_time(k + 1).unwrap();
            assert_eq!(b, a * p.tmult());
        }
        assert_eq!(p.output_time(1), Some(0.4));
        assert_eq!(p.output_time(2), Some(4.0));
        assert_eq!(p.output_time(3), Some(40.0));
    }

    #[test]
    fn output_time_out_of_range() {
        let p = P::robertson();
        assert_eq!(p.output_time(0), None);
        assert_eq!(p.output_time(13), None);
        assert_eq!(p.output_times().count(), 12);
        assert_eq!(p.final_time(), p.output_time(12).unwrap());
    }

    #[test]
    fn output_time_is_idempotent() {
        let p = P::robertson();
        assert_eq!(p.output_time(7), p.output_time(7));
    }

    #[test]
    fn short_atol_is_rejected() {
        let (y0, _) = robertson_vectors();
        let err = P::new(y0, 1.0e-4, vec![1.0e-8, 1.0e-14], 0.0, 0.4, 10.0, 12).unwrap_err();
        assert_eq!(
            err,
            ConfigurationError::AbsoluteToleranceLength {
                expected: 3,
                found: 2
            }
        );
    }

    #[test]
    fn zero_rtol_is_rejected() {
        let (y0, atol) = robertson_vectors();
        let err = P::new(y0, 0.0, atol, 0.0, 0.4, 10.0, 12).unwrap_err();
        assert_eq!(err, ConfigurationError::NonPositiveRelativeTolerance);
    }

    #[test]
    fn invalid_fields_are_rejected() {
        let (y0, atol) = robertson_vectors();
        let err = P::new(y0.clone(), 1e-4, vec![1e-8, 0.0, 1e-6], 0.0, 0.4, 10.0, 12).unwrap_err();
        assert_eq!(err, ConfigurationError::NonPositiveAbsoluteTolerance { index: 1 });
        let err = P::new(y0.clone(), 1e-4, atol.clone(), 0.0, 0.4, 0.0, 12).unwrap_err();
        assert_eq!(err, ConfigurationError::NonPositiveMultiplier);
        let err = P::new(y0.clone(), 1e-4, atol.clone(), 0.0, 0.4, -10.0, 12).unwrap_err();
        assert_eq!(err, ConfigurationError::NonPositiveMultiplier);
        let err = P::new(y0.clone(), 1e-4, atol.clone(), 0.0, 0.4, 10.0, 0).unwrap_err();
        assert_eq!(err, ConfigurationError::ZeroOutputCount);
        let err = P::new(vec![], 1e-4, vec![], 0.0, 0.4, 10.0, 12).unwrap_err();
        assert_eq!(err, ConfigurationError::EmptyState);
        let err = P::new(y0.clone(), f64::NAN, atol.clone(), 0.0, 0.4, 10.0, 12).unwrap_err();
        assert_eq!(err, ConfigurationError::NonFinite { field: "rtol" });
        let err = P::new(y0, 1e-4, atol, 0.0, f64::INFINITY, 10.0, 12).unwrap_err();
        assert_eq!(err, ConfigurationError::NonFinite { field: "t1" });
    }

    #[test]
    fn non_finite_fields_are_named() {
        let (y0, atol) = robertson_vectors();
        let nonfinite = |field| ConfigurationError::NonFinite { field };

        let err = P::new(vec![1.0, f64::NAN, 0.0], 1e-4, atol.clone(), 0.0, 0.4, 10.0, 12);
        assert_eq!(err.unwrap_err(), nonfinite("initial_state"));
        let err = P::new(y0.clone(), 1e-4, vec![1e-8, f64::INFINITY, 1e-6], 0.0, 0.4, 10.0, 12);
        assert_eq!(err.unwrap_err(), nonfinite("atol"));
        let err = P::new(y0.clone(), 1e-4, vec![1e-8, 1e-14, f64::NAN], 0.0, 0.4, 10.0, 12);
        assert_eq!(err.unwrap_err(), nonfinite("atol"));
        let err = P::new(y0.clone(), 1e-4, atol.clone(), f64::NEG_INFINITY, 0.4, 10.0, 12);
        assert_eq!(err.unwrap_err(), nonfinite("t0"));
        let err = P::new(y0.clone(), 1e-4, atol.clone(), 0.0, 0.4, f64::NAN, 12);
        assert_eq!(err.unwrap_err(), nonfinite("tmult"));
        let err = P::new(y0, 1e-4, atol, 0.0, 0.4, f64::INFINITY, 12);
        assert_eq!(err.unwrap_err(), nonfinite("tmult"));
    }

    #[test]
    fn single_precision_robertson() {
        let p = ProblemConfig::<f32>::robertson();
        assert_eq!(p.equation_count(), 3);
        assert_eq!(p.output_time(2), Some(p.t1() * 10.0));
    }
}
