use nalgebra::DVector;

use crate::{ConfigurationError, Scalar};

pub mod epo_epor;
pub mod mapk;
pub mod robertson;
pub mod toy;

pub use epo_epor::EpoEpoR;
pub use mapk::Mapk;
pub use robertson::{robertson_reference_solution, Robertson};
pub use toy::ToyModel;

/// Right-hand side `dy/dt = f(t, y, p)` of a named ODE system, as handed to an external integrator.
///
/// Every model carries its parameter vector `p`, one entry per name in [OdeModel::parameter_names].
pub trait OdeModel<T: Scalar> {
    fn name(&self) -> &'static str;

    /// Names of the state components, in state-vector order.
    fn state_names(&self) -> Vec<&'static str>;

    /// Names of the parameters, in parameter-vector order.
    fn parameter_names(&self) -> Vec<&'static str>;

    fn params(&self) -> &DVector<T>;

    fn nstates(&self) -> usize {
        self.state_names().len()
    }

    fn nparams(&self) -> usize {
        self.parameter_names().len()
    }

    /// Initial state used when none is given, 0.1 for every component unless the model says otherwise.
    fn default_initial_state(&self) -> DVector<T> {
        DVector::from_element(self.nstates(), cast(0.1))
    }

    /// Evaluate `f(t, y, p)` into `dydt`.
    ///
    /// Both `y` and `dydt` must have exactly [OdeModel::nstates] entries.
    fn rhs(&self, t: T, y: &DVector<T>, dydt: &mut DVector<T>);

    /// Allocating version of [OdeModel::rhs].
    fn call(&self, t: T, y: &DVector<T>) -> DVector<T> {
        let mut dydt = DVector::zeros(self.nstates());
        self.rhs(t, y, &mut dydt);
        dydt
    }
}

pub(crate) fn cast<T: Scalar>(x: f64) -> T {
    T::from_f64(x).unwrap_or_else(T::nan)
}

pub(crate) fn cast_vec<T: Scalar>(xs: &[f64]) -> DVector<T> {
    DVector::from_iterator(xs.len(), xs.iter().map(|&x| cast(x)))
}

// parameter vectors are checked against the model's parameter names on construction
pub(crate) fn check_params<T: Scalar>(
    p: &DVector<T>,
    expected: usize,
) -> Result<(), ConfigurationError> {
    if p.len() != expected {
        return Err(ConfigurationError::ParameterLength {
            expected,
            found: p.len(),
        });
    }
    if p.iter().any(|x| !x.is_finite()) {
        return Err(ConfigurationError::NonFinite { field: "params" });
    }
    Ok(())
}

/// Names of every model in the catalog, accepted by [model_by_name].
pub const MODEL_NAMES: [&str; 4] = ["Robertson", "ToyModel", "EpoEpoR", "MAPK"];

/// Look up a catalog model by name, with its default parameters.
pub fn model_by_name<T: Scalar>(name: &str) -> Option<Box<dyn OdeModel<T>>> {
    match name {
        "Robertson" => Some(Box::new(Robertson::default())),
        "ToyModel" => Some(Box::new(ToyModel::default())),
        "EpoEpoR" => Some(Box::new(EpoEpoR::default())),
        "MAPK" => Some(Box::new(Mapk::default())),
        _ => None,
    }
}
