use crate::{error::ConfigurationError, ProblemConfig, Scalar};

/// Absolute tolerance as given to the builder: one value for every component, or one value per component.
#[derive(Debug, Clone, PartialEq)]
pub enum AbsoluteTolerance<T> {
    Scalar(T),
    Vector(Vec<T>),
}

impl<T: Scalar> AbsoluteTolerance<T> {
    fn into_vec(self, nstates: usize) -> Vec<T> {
        match self {
            AbsoluteTolerance::Scalar(a) => vec![a; nstates],
            AbsoluteTolerance::Vector(v) => v,
        }
    }
}

/// Builder for [ProblemConfig]. Use methods to set parameters and then call [ProblemConfigBuilder::build] when done.
///
/// # Example
///
/// ```rust
/// use ivp_problem::ProblemConfigBuilder;
///
/// let problem = ProblemConfigBuilder::<f64>::new()
///     .initial_state([1.0, 0.0, 0.0])
///     .rtol(1.0e-4)
///     .atol([1.0e-8, 1.0e-14, 1.0e-6])
///     .t1(0.4)
///     .tmult(10.0)
///     .nout(12)
///     .build()
///     .unwrap();
/// assert_eq!(problem.output_time(2), Some(4.0));
/// ```
#[derive(Debug, Clone)]
pub struct ProblemConfigBuilder<T: Scalar = f64> {
    initial_state: Option<Vec<T>>,
    rtol: T,
    atol: AbsoluteTolerance<T>,
    t0: T,
    t1: T,
    tmult: T,
    nout: usize,
}

impl<T: Scalar> Default for ProblemConfigBuilder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Scalar> ProblemConfigBuilder<T> {
    /// Create a new builder with default parameters:
    /// - t0 = 0.0
    /// - t1 = 1.0
    /// - tmult = 10.0
    /// - nout = 1
    /// - rtol = 1e-6
    /// - atol = 1e-6 for every component
    pub fn new() -> Self {
        let default_tol = Self::cast(1e-6);
        Self {
            initial_state: None,
            rtol: default_tol,
            atol: AbsoluteTolerance::Scalar(default_tol),
            t0: T::zero(),
            t1: T::one(),
            tmult: Self::cast(10.0),
            nout: 1,
        }
    }

    /// Start from the values of an existing problem.
    pub fn from_problem(problem: &ProblemConfig<T>) -> Self {
        Self {
            initial_state: Some(problem.initial_state().iter().copied().collect()),
            rtol: problem.rtol(),
            atol: AbsoluteTolerance::Vector(problem.atol().iter().copied().collect()),
            t0: problem.t0(),
            t1: problem.t1(),
            tmult: problem.tmult(),
            nout: problem.nout(),
        }
    }

    fn cast(x: f64) -> T {
        T::from_f64(x).unwrap_or_else(T::nan)
    }

    /// Set the initial state, this also fixes the number of equations.
    pub fn initial_state<V>(mut self, y0: V) -> Self
    where
        V: IntoIterator<Item = f64>,
    {
        self.initial_state = Some(y0.into_iter().map(Self::cast).collect());
        self
    }

    /// Set the relative tolerance.
    pub fn rtol(mut self, rtol: f64) -> Self {
        self.rtol = Self::cast(rtol);
        self
    }

    /// Set one absolute tolerance per state component.
    pub fn atol<V>(mut self, atol: V) -> Self
    where
        V: IntoIterator<Item = f64>,
    {
        self.atol = AbsoluteTolerance::Vector(atol.into_iter().map(Self::cast).collect());
        self
    }

    /// Use the same absolute tolerance for every state component.
    pub fn scalar_atol(mut self, atol: f64) -> Self {
        self.atol = AbsoluteTolerance::Scalar(Self::cast(atol));
        self
    }

    /// Set the initial time.
    pub fn t0(mut self, t0: f64) -> Self {
        self.t0 = Self::cast(t0);
        self
    }

    /// Set the first output time.
    pub fn t1(mut self, t1: f64) -> Self {
        self.t1 = Self::cast(t1);
        self
    }

    /// Set the factor between successive output times.
    pub fn tmult(mut self, tmult: f64) -> Self {
        self.tmult = Self::cast(tmult);
        self
    }

    /// Set the number of output times.
    pub fn nout(mut self, nout: usize) -> Self {
        self.nout = nout;
        self
    }

    pub fn build(self) -> Result<ProblemConfig<T>, ConfigurationError> {
        let initial_state = self
            .initial_state
            .ok_or(ConfigurationError::MissingInitialState)?;
        let atol = self.atol.into_vec(initial_state.len());
        ProblemConfig::new(
            initial_state,
            self.rtol,
            atol,
            self.t0,
            self.t1,
            self.tmult,
            self.nout,
        )
    }
}
